use crate::*;

/// Prize money by finishing place, 1st place first.
///
/// May be shorter than the field: places past the end pay nothing.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Payouts(Vec<Prize>);

impl Payouts {
    pub fn prizes(&self) -> &[Prize] {
        &self.0
    }
    /// Number of paid places.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Total prize pool.
    pub fn pool(&self) -> Prize {
        self.0.iter().sum()
    }
    /// Prizes must be finite and non-negative.
    pub fn validate(&self) -> Result<(), Invalid> {
        self.0
            .iter()
            .enumerate()
            .find(|(_, prize)| !(prize.is_finite() && **prize >= 0.))
            .map_or(Ok(()), |(i, prize)| {
                Err(Invalid::Payout {
                    place: i + 1,
                    prize: *prize,
                })
            })
    }
}

impl From<Vec<Prize>> for Payouts {
    fn from(prizes: Vec<Prize>) -> Self {
        Self(prizes)
    }
}

impl From<&[Prize]> for Payouts {
    fn from(prizes: &[Prize]) -> Self {
        Self(prizes.to_vec())
    }
}

impl std::fmt::Display for Payouts {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let places = self
            .0
            .iter()
            .map(|p| format!("${:.2}", p))
            .collect::<Vec<String>>()
            .join(" / ");
        write!(f, "{}", places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_sums_every_place() {
        let payouts = Payouts::from(vec![500., 300., 200.]);
        assert!(payouts.pool() == 1000.);
        assert!(payouts.len() == 3);
        assert!(Payouts::default().pool() == 0.);
    }

    #[test]
    fn reports_first_bad_place() {
        let payouts = Payouts::from(vec![500., -1., Prize::NAN]);
        assert!(payouts.validate() == Err(Invalid::Payout { place: 2, prize: -1. }));
        assert!(Payouts::from(vec![1., 0.]).validate().is_ok());
    }
}
