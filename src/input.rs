//! Keyboard input: key sources and the key → command mapping.

mod command;
mod source;

pub use command::{Command, HELP, Key};
pub use source::{KeySource, LineKeys, TerminalKeys};

#[cfg(test)]
pub use source::ScriptedKeys;
