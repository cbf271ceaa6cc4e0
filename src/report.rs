use crate::*;

/// Everything the engine derives from one snapshot, ready to print or serialize.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    players: Vec<Player>,
    payouts: Payouts,
    equities: Vec<Utility>,
    factors: Matrix,
    required: Matrix,
}

impl Report {
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn equities(&self) -> &[Utility] {
        &self.equities
    }
    pub fn factors(&self) -> &Matrix {
        &self.factors
    }
    pub fn required(&self) -> &Matrix {
        &self.required
    }
    fn ids(&self) -> Vec<usize> {
        self.players.iter().map(Player::id).collect()
    }
}

impl Engine {
    /// Baseline equities plus both pairwise matrices.
    pub fn report(&self, state: &Tournament) -> Result<Report, Invalid> {
        let equities = self.equities(state)?;
        let (factors, required) = self.bubbles(state)?;
        Ok(Report {
            players: state.players().to_vec(),
            payouts: state.payouts().clone(),
            equities,
            factors,
            required,
        })
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ids = self.ids();
        writeln!(f, "ICM $EVs:")?;
        for (player, ev) in self.players.iter().zip(self.equities.iter()) {
            writeln!(f, "  Player {}: ${:.2}", player.id(), ev)?;
        }
        writeln!(f)?;
        writeln!(f, "Bubble Factor Matrix:")?;
        writeln!(f, "{}", self.factors.table(&ids, |x| format!("{:.2}", x)))?;
        writeln!(f)?;
        writeln!(f, "Required Equity Matrix:")?;
        write!(f, "{}", self.required.table(&ids, |x| format!("{:.1}%", x * 100.)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heads_up_report_prints_both_matrices() {
        let state = Tournament::from((vec![1000., 1000.], vec![1000.]));
        let report = Engine::default().report(&state).expect("valid tournament");
        let text = report.to_string();
        assert!(text.contains("  Player 0: $500.00"));
        assert!(text.contains("  Player 1: $500.00"));
        assert!(text.contains("Bubble Factor Matrix:\n\tID0\tID1\nID0\t0.00\t1.00\nID1\t1.00\t0.00"));
        assert!(text.ends_with("ID0\t0.0%\t50.0%\nID1\t50.0%\t0.0%"));
    }

    #[test]
    fn report_keeps_player_order() {
        let state = Tournament::from((vec![2000., 1000., 1000.], vec![500., 300., 200.]));
        let report = Engine::default().report(&state).expect("valid tournament");
        assert!(report.players().iter().map(Player::id).eq(0..3));
        assert!(report.equities()[0] > report.equities()[1]);
        assert!(report.factors().len() == 3);
        assert!(report.required().len() == 3);
    }
}
