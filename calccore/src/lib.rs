//! calccore: state machine and shared pieces of the simple calculator

pub mod accumulator;
pub mod error;
pub mod format;
pub mod keymap;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod widgets;

pub use accumulator::{apply, CalculatorState, Command, Operator};
pub use error::CalcError;
pub use storage::Preferences;
pub use theme::CalcTheme;
