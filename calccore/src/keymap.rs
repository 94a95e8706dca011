//! Button labels and keyboard input mapped to calculator commands

use crate::accumulator::{Command, Operator};
use egui::Key;

/// Button grid, top row first.
pub const BUTTON_ROWS: &[&[&str]] = &[
    &["7", "8", "9", "/"],
    &["4", "5", "6", "*"],
    &["1", "2", "3", "-"],
    &["0", ".", "=", "+"],
    &["C"],
];

/// Command for a button label. Labels are single characters.
pub fn command_for_label(label: &str) -> Option<Command> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => command_for_char(c),
        _ => None,
    }
}

/// Command for a typed character, as delivered by text input events.
/// Covers the button alphabet plus lowercase `c` and keypad digits.
pub fn command_for_char(c: char) -> Option<Command> {
    match c {
        '0'..='9' | '.' => Some(Command::Digit(c)),
        '=' => Some(Command::Equals),
        'C' | 'c' => Some(Command::Clear),
        _ => Operator::from_symbol(c).map(Command::Operator),
    }
}

/// Command for a key that produces no text.
pub fn command_for_key(key: Key) -> Option<Command> {
    match key {
        Key::Enter => Some(Command::Equals),
        Key::Backspace => Some(Command::Backspace),
        Key::Escape => Some(Command::Clear),
        _ => None,
    }
}

/// Collect the commands carried by one frame's input events.
///
/// Characters come from `Text` events so shifted and keypad symbols arrive
/// already resolved; `Key` events only contribute the keys without text.
/// Events with the command modifier held are shortcuts, not input.
pub fn commands_from_events(events: &[egui::Event]) -> Vec<Command> {
    let mut commands = Vec::new();
    for event in events {
        match event {
            egui::Event::Text(text) => {
                commands.extend(text.chars().filter_map(command_for_char));
            }
            egui::Event::Key { key, pressed: true, modifiers, .. } if !modifiers.command => {
                commands.extend(command_for_key(*key));
            }
            _ => {}
        }
    }
    commands
}
