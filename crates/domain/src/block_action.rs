use serde::{Deserialize, Serialize};
use std::fmt;

/// Access change requested for a station on the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockAction {
    Block,
    Unblock,
}

impl BlockAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            BlockAction::Block => "block",
            BlockAction::Unblock => "unblock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "block" => Some(BlockAction::Block),
            "unblock" => Some(BlockAction::Unblock),
            _ => None,
        }
    }

    pub fn from_blocked(blocked: bool) -> Self {
        if blocked {
            BlockAction::Block
        } else {
            BlockAction::Unblock
        }
    }

    /// Whether the station ends up blocked after this action.
    pub fn is_block(&self) -> bool {
        matches!(self, BlockAction::Block)
    }

    /// Legacy `cmd/stamgr` command name.
    pub fn station_command(&self) -> &'static str {
        match self {
            BlockAction::Block => "block-sta",
            BlockAction::Unblock => "unblock-sta",
        }
    }
}

impl fmt::Display for BlockAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
