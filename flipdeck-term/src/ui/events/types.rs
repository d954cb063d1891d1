use std::fmt::Display;

use crate::ui::share::CardImage;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Share(CardImage),
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Share(_) => write!(f, "share"),
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Event {
    ExecCommand(Command),
    Refresh,
    Quit,
}

#[cfg(test)]
#[path = "./tests/types_tests.rs"]
mod tests;
