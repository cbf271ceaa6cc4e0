use crate::*;

/// Equity risked per unit of equity gained in an all-in.
///
/// Floors at 0 whenever winning would not raise the player's equity, so the
/// ratio is never undefined. A negative ratio (losing would somehow gain
/// equity) is passed through unchanged; [`required_equity`] floors it.
pub fn bubble_factor(base: Utility, win: Utility, lose: Utility) -> Utility {
    let lost = base - lose;
    let gained = win - base;
    if gained > 0. { lost / gained } else { 0. }
}

/// Minimum win probability that makes an all-in equity-neutral.
pub fn required_equity(factor: Utility) -> Probability {
    if factor > 0. { factor / (factor + 1.) } else { 0. }
}

impl Engine {
    /// Bubble factor and required equity for every ordered pair of players.
    ///
    /// Row `a`, column `b` describes `a` shoving into `b`. Diagonals are 0.
    /// Fails with [`Invalid::Bankrupt`] if any all-in leaves two or more
    /// zero stacks while prizes remain, even when `equities` succeeds.
    pub fn bubbles(&self, state: &Tournament) -> Result<(Matrix, Matrix), Invalid> {
        let base = self.equities(state)?;
        let n = state.len();
        let mut factors = Matrix::zeros(n);
        let mut required = Matrix::zeros(n);
        for a in 0..n {
            for b in (0..n).filter(|b| *b != a) {
                let win = self.simulate(state, a, b, Outcome::Win)?;
                let lose = self.simulate(state, a, b, Outcome::Lose)?;
                let factor = bubble_factor(base[a], win, lose);
                factors.set(a, b, factor);
                required.set(a, b, required_equity(factor));
            }
        }
        log::debug!("icm  {}", self.equity_cache());
        log::debug!("sims {}", self.outcome_cache());
        Ok((factors, required))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Utility, b: Utility) -> bool {
        (a - b).abs() <= TOLERANCE * a.abs().max(b.abs()).max(1.)
    }

    fn bubbles(stacks: Vec<Chips>, prizes: Vec<Prize>) -> (Matrix, Matrix) {
        Engine::default()
            .bubbles(&Tournament::from((stacks, prizes)))
            .expect("valid tournament")
    }

    #[test]
    fn factor_floors_when_winning_does_not_help() {
        assert!(bubble_factor(100., 100., 50.) == 0.);
        assert!(bubble_factor(100., 90., 50.) == 0.);
        assert!(required_equity(0.) == 0.);
    }

    #[test]
    fn negative_factor_passes_through_and_requires_nothing() {
        let factor = bubble_factor(100., 150., 120.);
        assert!(close(factor, -0.4));
        assert!(required_equity(factor) == 0.);
    }

    #[test]
    fn required_equity_round_trip() {
        for factor in [0.25, 1., 1.4444, 2.75, 18.4] {
            let p = required_equity(factor);
            assert!(p == factor / (factor + 1.));
            assert!(p > 0. && p < 1.);
        }
    }

    #[test]
    fn chip_ev_coinflip_is_neutral() {
        let (factors, required) = bubbles(vec![1000., 1000.], vec![1000.]);
        assert!(close(factors[(0, 1)], 1.));
        assert!(close(factors[(1, 0)], 1.));
        assert!(close(required[(0, 1)], 0.5));
    }

    #[test]
    fn covering_stack_risks_more_than_it_wins_heads_up() {
        let (factors, _) = bubbles(vec![3000., 1000.], vec![1000.]);
        assert!(close(factors[(0, 1)], 3.));
        assert!(close(factors[(1, 0)], 1.));
    }

    #[test]
    fn diagonal_is_zero() {
        let (factors, required) = bubbles(vec![5000., 3000., 1500., 500.], vec![50., 30., 20.]);
        for i in 0..4 {
            assert!(factors[(i, i)] == 0.);
            assert!(required[(i, i)] == 0.);
        }
    }

    #[test]
    fn three_handed_bubble() {
        let (factors, required) = bubbles(vec![2000., 1000., 1000.], vec![500., 300., 200.]);
        assert!(close(factors[(0, 1)], 2.75));
        assert!(close(factors[(0, 2)], 2.75));
        assert!(close(factors[(1, 0)], 13. / 9.));
        assert!(close(factors[(1, 2)], 13. / 11.));
        assert!(close(required[(0, 1)], 2.75 / 3.75));
        for a in 0..3 {
            for b in (0..3).filter(|b| *b != a) {
                assert!(factors[(a, b)] > 1.);
                assert!(close(required[(a, b)], required_equity(factors[(a, b)])));
            }
        }
    }

    #[test]
    fn flat_payouts_never_reward_a_double_up() {
        let (factors, required) = bubbles(vec![1000., 1000.], vec![100., 100.]);
        assert!(factors.rows().flatten().all(|x| *x == 0.));
        assert!(required.rows().flatten().all(|x| *x == 0.));
    }

    #[test]
    fn broke_player_has_nothing_to_gain() {
        let (factors, required) = bubbles(vec![1000., 0., 1000.], vec![500.]);
        assert!(factors.row(1).iter().all(|x| *x == 0.));
        assert!(required.row(1).iter().all(|x| *x == 0.));
        assert!(factors[(0, 1)] == 0.);
        assert!(close(factors[(0, 2)], 1.));
    }

    #[test]
    fn busting_into_two_broke_stacks_fails_while_prizes_remain() {
        let engine = Engine::default();
        let state = Tournament::from((vec![1000., 0., 1000.], vec![500., 300., 200.]));
        assert!(engine.equities(&state).is_ok());
        assert!(engine.bubbles(&state) == Err(Invalid::Bankrupt { players: 2 }));
    }

    #[test]
    fn equal_stacks_give_a_uniform_matrix() {
        let (factors, _) = bubbles(vec![1000.; 4], vec![500., 300., 200.]);
        let reference = factors[(0, 1)];
        for a in 0..4 {
            for b in (0..4).filter(|b| *b != a) {
                assert!(close(factors[(a, b)], reference));
            }
        }
    }

    #[test]
    fn invalid_state_is_surfaced() {
        let state = Tournament::from((vec![0., 0.], vec![600., 400.]));
        let result = Engine::default().bubbles(&state);
        assert!(result == Err(Invalid::Bankrupt { players: 2 }));
    }
}
