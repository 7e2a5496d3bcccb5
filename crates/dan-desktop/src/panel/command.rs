//! Window mutations requested from inside a panel

use serde::Deserialize;
use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// A change a panel asks the shell to make to its window
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WindowCommand {
    Close,
    Minimize,
    Maximize,
    Restore,
    ToggleMaximize,
    BringToFront,
    Move { position: Vec2 },
    Resize { size: Size },
}

/// Commands collected during a render pass, applied afterwards in order
#[derive(Clone, Debug, Default)]
pub struct CommandQueue {
    commands: Vec<(WindowId, WindowCommand)>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: WindowId, command: WindowCommand) {
        self.commands.push((id, command));
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take every queued command, oldest first
    pub fn drain(&mut self) -> impl Iterator<Item = (WindowId, WindowCommand)> + '_ {
        self.commands.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_from_json() {
        let cmd: WindowCommand = serde_json::from_str(r#"{"type":"move","position":{"x":5,"y":6}}"#).unwrap();
        assert_eq!(cmd, WindowCommand::Move { position: Vec2::new(5.0, 6.0) });

        let cmd: WindowCommand = serde_json::from_str(r#"{"type":"bringToFront"}"#).unwrap();
        assert_eq!(cmd, WindowCommand::BringToFront);
    }

    #[test]
    fn test_queue_drains_in_order() {
        let mut queue = CommandQueue::new();
        queue.push(WindowId::from("a"), WindowCommand::Minimize);
        queue.push(WindowId::from("b"), WindowCommand::Close);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained[0].0, "a");
        assert_eq!(drained[1].1, WindowCommand::Close);
        assert!(queue.is_empty());
    }
}
