//! Player roles in the two-player river basin game.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two players: the upstream or the downstream municipality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Upstream,
    Downstream,
}

impl Role {
    /// Both roles, upstream first.
    pub const ALL: [Role; 2] = [Role::Upstream, Role::Downstream];

    /// Short coalition label ("U" or "D").
    pub fn label(&self) -> &'static str {
        match self {
            Role::Upstream => "U",
            Role::Downstream => "D",
        }
    }

    /// Parses a short coalition label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "U" => Some(Role::Upstream),
            "D" => Some(Role::Downstream),
            _ => None,
        }
    }

    /// The other player.
    pub fn opponent(&self) -> Self {
        match self {
            Role::Upstream => Role::Downstream,
            Role::Downstream => Role::Upstream,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Upstream => write!(f, "upstream"),
            Role::Downstream => write!(f, "downstream"),
        }
    }
}
