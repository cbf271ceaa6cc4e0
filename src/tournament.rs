use crate::*;
use std::collections::HashSet;

/// A frozen snapshot of the field relevant to ICM.
///
/// Player order carries no meaning for the math, but it is part of every
/// cache [`Key`] and of every EV vector the engine returns: `ev[i]` always
/// belongs to `players()[i]`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tournament {
    players: Vec<Player>,
    payouts: Payouts,
}

impl Tournament {
    pub fn new(players: Vec<Player>, payouts: Payouts) -> Self {
        Self { players, payouts }
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn payouts(&self) -> &Payouts {
        &self.payouts
    }
    /// Number of players still in.
    pub fn len(&self) -> usize {
        self.players.len()
    }
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
    /// Chips in play across the whole field.
    pub fn total(&self) -> Chips {
        self.players.iter().map(Player::chips).sum()
    }
    /// Stacks in player order.
    pub fn stacks(&self) -> Vec<Chips> {
        self.players.iter().map(Player::chips).collect()
    }
    /// Cache key for this snapshot.
    pub fn key(&self) -> Key {
        Key::from((self.stacks().as_slice(), self.payouts.prizes()))
    }
    /// Copy of this snapshot with `amount` chips moved from one seat to another.
    /// The original is left untouched.
    pub fn transfer(&self, from: Position, into: Position, amount: Chips) -> Self {
        let mut players = self.players.clone();
        players[from] = players[from].with(players[from].chips() - amount);
        players[into] = players[into].with(players[into].chips() + amount);
        Self::new(players, self.payouts.clone())
    }
    /// Both positions must name distinct players.
    pub fn reference(&self, a: Position, b: Position) -> Result<(), Invalid> {
        match a < self.len() && b < self.len() && a != b {
            true => Ok(()),
            false => Err(Invalid::Reference {
                a,
                b,
                players: self.len(),
            }),
        }
    }
    /// Checks everything the engine needs before it starts recursing.
    pub fn validate(&self) -> Result<(), Invalid> {
        if self.players.is_empty() {
            return Err(Invalid::Empty);
        }
        self.players.iter().try_for_each(Player::validate)?;
        self.payouts.validate()?;
        let mut seen = HashSet::with_capacity(self.players.len());
        if let Some(dupe) = self.players.iter().find(|p| !seen.insert(p.id())) {
            return Err(Invalid::Duplicate { id: dupe.id() });
        }
        if self.players.len() > 1 && self.total() <= 0. {
            return Err(Invalid::Bankrupt {
                players: self.players.len(),
            });
        }
        Ok(())
    }
}

/// Raw stacks and prizes, with ids assigned in input order.
impl From<(Vec<Chips>, Vec<Prize>)> for Tournament {
    fn from((stacks, prizes): (Vec<Chips>, Vec<Prize>)) -> Self {
        let players = stacks
            .into_iter()
            .enumerate()
            .map(Player::from)
            .collect::<Vec<Player>>();
        Self::new(players, Payouts::from(prizes))
    }
}

impl std::fmt::Display for Tournament {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for player in self.players.iter() {
            writeln!(f, "{}", player)?;
        }
        write!(f, "{}", self.payouts)
    }
}
