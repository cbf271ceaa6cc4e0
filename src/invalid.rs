use crate::*;
use thiserror::Error;

/// Why the engine refused a request.
///
/// Every variant is a precondition violation detected before or during the
/// ICM recursion. The engine never recovers locally: evaluation is a pure
/// function of its input, so the same input fails the same way every time.
/// `Clone` lets a cached failure be handed to every caller that hits its key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Invalid {
    #[error("invalid tournament state: no players")]
    Empty,
    #[error("invalid tournament state: player {id} has {chips} chips")]
    Stack { id: usize, chips: Chips },
    #[error("invalid tournament state: place {place} pays {prize}")]
    Payout { place: usize, prize: Prize },
    #[error("invalid tournament state: player id {id} appears twice")]
    Duplicate { id: usize },
    #[error("invalid tournament state: {players} players share zero chips")]
    Bankrupt { players: usize },
    #[error("invalid player reference: ({a}, {b}) among {players} players")]
    Reference {
        a: Position,
        b: Position,
        players: usize,
    },
}
