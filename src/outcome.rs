use crate::*;

/// How an all-in confrontation ends for the aggressor.
///
/// The exchange is asymmetric. Winning takes only the chips the opponent can
/// match; losing costs the aggressor their entire stack, as if they were the
/// shorter stack in the hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// Chips that change hands when `hero` shoves into `villain`.
    pub fn contested(&self, hero: Chips, villain: Chips) -> Chips {
        match self {
            Self::Win => hero.min(villain),
            Self::Lose => hero,
        }
    }
    /// Snapshot after the confrontation. Works on a copy of the players.
    pub fn apply(&self, state: &Tournament, a: Position, b: Position) -> Result<Tournament, Invalid> {
        state.reference(a, b)?;
        let hero = state.players()[a].chips();
        let villain = state.players()[b].chips();
        let amount = self.contested(hero, villain);
        Ok(match self {
            Self::Win => state.transfer(b, a, amount),
            Self::Lose => state.transfer(a, b, amount),
        })
    }
}

impl Engine {
    /// Player `a`'s equity after an all-in against player `b` ends in `outcome`.
    pub fn allin(
        &self,
        state: &Tournament,
        a: Position,
        b: Position,
        outcome: Outcome,
    ) -> Result<Utility, Invalid> {
        state.reference(a, b)?;
        state.validate()?;
        self.simulate(state, a, b, outcome)
    }
    /// Assumes `state` is validated and `(a, b)` checked.
    pub(crate) fn simulate(
        &self,
        state: &Tournament,
        a: Position,
        b: Position,
        outcome: Outcome,
    ) -> Result<Utility, Invalid> {
        let after = outcome.apply(state, a, b)?;
        let stacks = after.stacks();
        let prizes = after.payouts().prizes();
        self.outcome_cache()
            .get_or_compute(after.key(), || self.evaluate(&stacks, prizes))
            .map(|ev| ev[a])
    }
}
