//! Input accumulator: the calculator's state machine
//!
//! Holds the number being typed, the first operand and the pending
//! operator. Every command that changes something returns the text the
//! display should show next; a command that changes nothing leaves the
//! display as it is.
//! Errors never escape a command: they are shown instead of a number and the
//! state stays as it was, so the next key press continues from there.

use crate::error::CalcError;
use crate::format::format_result;

/// A pending binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operation. Only division can fail.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                // matches -0.0 too
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

/// Everything the presentation layer can ask of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A digit or the decimal point. Other characters are ignored.
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    current_input: String,
    first_operand: f64,
    operator: Option<Operator>,
    start_new_input: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_input: String::new(),
            first_operand: 0.0,
            operator: None,
            start_new_input: true,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn start_new_input(&self) -> bool {
        self.start_new_input
    }

    /// Run one command and return the new display text, or `None` when the
    /// command changed nothing and the display should keep what it shows.
    pub fn apply(&mut self, command: Command) -> Option<String> {
        tracing::trace!(?command, input = %self.current_input, "apply");

        let outcome = match command {
            Command::Digit(ch) => Ok(self.append(ch)),
            Command::Operator(op) => self.choose_operator(op).map(|_| true),
            Command::Equals => self.equals().map(|_| true),
            Command::Clear => {
                self.clear();
                Ok(true)
            }
            Command::Backspace => Ok(self.backspace()),
        };

        match outcome {
            Ok(true) => Some(self.current_input.clone()),
            Ok(false) => None,
            Err(err) => {
                tracing::debug!(%err, input = %self.current_input, "command rejected");
                Some(err.to_string())
            }
        }
    }

    /// Append a digit or decimal point, starting a fresh number if the last
    /// action finished one. Repeated decimal points are accepted as typed.
    ///
    /// Any other character is ignored; returns whether the input changed.
    pub fn append(&mut self, ch: char) -> bool {
        if !matches!(ch, '0'..='9' | '.') {
            tracing::debug!(?ch, "ignoring non-digit input");
            return false;
        }
        if self.start_new_input {
            self.current_input.clear();
            self.start_new_input = false;
        }
        self.current_input.push(ch);
        true
    }

    /// Capture the current input as the first operand and remember `op`.
    ///
    /// On a malformed input nothing changes.
    pub fn choose_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        let value = self
            .current_input
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidInput)?;
        self.first_operand = value;
        self.operator = Some(op);
        self.start_new_input = true;
        Ok(())
    }

    /// Apply the pending operator to the first operand and the current
    /// input. With no pending operator the current input is passed through.
    ///
    /// The result text replaces the current input so it can feed the next
    /// operation. The operator and first operand are kept, so a repeated
    /// equals applies them again to the new result.
    pub fn equals(&mut self) -> Result<f64, CalcError> {
        let second = self
            .current_input
            .parse::<f64>()
            .map_err(|_| CalcError::MalformedOperand)?;
        let result = match self.operator {
            Some(op) => op.apply(self.first_operand, second)?,
            None => second,
        };
        self.current_input = format_result(result);
        self.start_new_input = true;
        Ok(result)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Drop the last typed character. The operand and operator are left
    /// alone, even when the input was already captured by an operator.
    ///
    /// Returns false when there was nothing to remove.
    pub fn backspace(&mut self) -> bool {
        self.current_input.pop().is_some()
    }
}

/// Pure form of [`CalculatorState::apply`]: consume a state, return the next
/// state with its display update.
pub fn apply(mut state: CalculatorState, command: Command) -> (CalculatorState, Option<String>) {
    let display = state.apply(command);
    (state, display)
}
