use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// One of the named focal points of the scene.
///
/// The set is closed: adding a target means adding a variant, a registry
/// entry and panel content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetId {
    About,
    Projects,
    Contact,
}

impl TargetId {
    /// All targets in tab order.
    pub const ALL: [TargetId; 3] = [TargetId::About, TargetId::Projects, TargetId::Contact];

    pub fn name(self) -> &'static str {
        match self {
            TargetId::About => "About",
            TargetId::Projects => "Projects",
            TargetId::Contact => "Contact",
        }
    }

    /// Position in [`TargetId::ALL`].
    pub fn index(self) -> usize {
        match self {
            TargetId::About => 0,
            TargetId::Projects => 1,
            TargetId::Contact => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<TargetId> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TargetId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownTarget(s.to_string()))
    }
}
