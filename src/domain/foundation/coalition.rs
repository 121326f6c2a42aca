//! Coalitions of the two-player game.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, Role};

/// A subset of the player set {U, D}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coalition {
    Empty,
    Upstream,
    Downstream,
    Grand,
}

impl Coalition {
    pub const ALL: [Coalition; 4] = [
        Coalition::Empty,
        Coalition::Upstream,
        Coalition::Downstream,
        Coalition::Grand,
    ];

    /// The coalition formed by one player alone.
    pub fn singleton(role: Role) -> Self {
        match role {
            Role::Upstream => Coalition::Upstream,
            Role::Downstream => Coalition::Downstream,
        }
    }

    /// Parses a member list of "U"/"D" labels.
    ///
    /// Anything other than {}, {U}, {D} or {U,D} fails with
    /// `ErrorCode::InvalidCoalition`, including repeated members.
    pub fn from_members(members: &[&str]) -> Result<Self, DomainError> {
        let mut upstream = false;
        let mut downstream = false;

        for member in members {
            let slot = match Role::from_label(member) {
                Some(Role::Upstream) => &mut upstream,
                Some(Role::Downstream) => &mut downstream,
                None => return Err(DomainError::invalid_coalition(members)),
            };
            if *slot {
                return Err(DomainError::invalid_coalition(members));
            }
            *slot = true;
        }

        Ok(match (upstream, downstream) {
            (false, false) => Coalition::Empty,
            (true, false) => Coalition::Upstream,
            (false, true) => Coalition::Downstream,
            (true, true) => Coalition::Grand,
        })
    }

    pub fn contains(&self, role: Role) -> bool {
        matches!(
            (self, role),
            (Coalition::Grand, _)
                | (Coalition::Upstream, Role::Upstream)
                | (Coalition::Downstream, Role::Downstream)
        )
    }

    pub fn size(&self) -> usize {
        Role::ALL.iter().filter(|r| self.contains(**r)).count()
    }
}

impl fmt::Display for Coalition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Coalition::Empty => "{}",
            Coalition::Upstream => "{U}",
            Coalition::Downstream => "{D}",
            Coalition::Grand => "{U,D}",
        };
        write!(f, "{}", s)
    }
}
