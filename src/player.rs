use crate::*;

/// A tournament entrant and the chips they hold.
///
/// Players are values: a chip transfer produces a new `Player` through
/// [`Player::with`] rather than mutating the one a snapshot already owns.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Player {
    id: usize,
    chips: Chips,
}

impl Player {
    pub fn new(id: usize, chips: Chips) -> Self {
        Self { id, chips }
    }
    /// Identifier, unique within a snapshot.
    pub fn id(&self) -> usize {
        self.id
    }
    /// Chips behind.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    /// Same player holding a different stack.
    pub fn with(&self, chips: Chips) -> Self {
        Self { chips, ..*self }
    }
    /// Stacks must be finite and non-negative.
    pub fn validate(&self) -> Result<(), Invalid> {
        match self.chips.is_finite() && self.chips >= 0. {
            true => Ok(()),
            false => Err(Invalid::Stack {
                id: self.id,
                chips: self.chips,
            }),
        }
    }
}

impl From<(usize, Chips)> for Player {
    fn from((id, chips): (usize, Chips)) -> Self {
        Self::new(id, chips)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ID{} {:>10.0}", self.id, self.chips)
    }
}
