use crate::*;
use std::sync::Arc;

/// Exact Independent Chip Model evaluator.
///
/// Owns the two memo caches that make the recursion tractable: one keyed by
/// every (sub-)tournament the recursion visits, one keyed by the post-all-in
/// snapshots the [`Outcome`] simulator builds. Both live exactly as long as
/// the engine, grow without bound, and are safe to share across threads.
///
/// # Algorithm
///
/// With `T` chips in play, player `i` finishes in the top remaining place
/// with probability `c_i / T`. Conditioned on that, everyone else plays out
/// the same tournament without `i` and without the top prize. Summing over
/// every `i` accounts for all probability mass.
///
/// # Cost
///
/// Naively each of `n` branches recurses into `n - 1` more, so `n!` calls.
/// Because a sub-tournament is fully determined by which positions remain,
/// memoization caps the work at one evaluation per subset of positions:
/// `2^n` keys, each doing `O(n)` lookups. Ten players is ~1k keys and
/// instant; twenty is ~1M keys, tens of seconds, and a few hundred MB of cache.
#[derive(Debug, Default)]
pub struct Engine {
    equities: Cache,
    outcomes: Cache,
}

impl Engine {
    /// Expected prize money for every player, in snapshot order.
    pub fn equities(&self, state: &Tournament) -> Result<Vec<Utility>, Invalid> {
        state.validate()?;
        log::debug!("evaluating {} players for {} prizes", state.len(), state.payouts().len());
        self.evaluate(&state.stacks(), state.payouts().prizes())
            .map(|ev| ev.to_vec())
    }
    /// Memo of every (sub-)tournament the recursion has solved.
    pub fn equity_cache(&self) -> &Cache {
        &self.equities
    }
    /// Memo of every post-all-in snapshot the simulator has solved.
    pub fn outcome_cache(&self) -> &Cache {
        &self.outcomes
    }
    /// Memoized entry point of the recursion. Assumes validated input.
    pub(crate) fn evaluate(&self, stacks: &[Chips], prizes: &[Prize]) -> Result<Equities, Invalid> {
        self.equities
            .get_or_compute(Key::from((stacks, prizes)), || self.recurse(stacks, prizes))
    }
    fn recurse(&self, stacks: &[Chips], prizes: &[Prize]) -> Result<Equities, Invalid> {
        let n = stacks.len();
        if n == 1 {
            return Ok(Arc::from(vec![prizes.last().copied().unwrap_or(0.)]));
        }
        if prizes.is_empty() {
            return Ok(Arc::from(vec![0.; n]));
        }
        let total = stacks.iter().sum::<Chips>();
        if total <= 0. {
            return Err(Invalid::Bankrupt { players: n });
        }
        let top = prizes[0];
        let rest = &prizes[1..];
        let mut ev = vec![0.; n];
        for (i, chips) in stacks.iter().enumerate() {
            if *chips <= 0. {
                continue;
            }
            let p = chips / total;
            let remaining = [&stacks[..i], &stacks[i + 1..]].concat();
            let sub = self.evaluate(&remaining, rest)?;
            ev[i] += p * top;
            (0..n)
                .filter(|j| *j != i)
                .zip(sub.iter())
                .for_each(|(j, e)| ev[j] += p * e);
        }
        Ok(Arc::from(ev))
    }
}
