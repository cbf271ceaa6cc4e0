//! Independent Chip Model tournament equity.
//!
//! Converts a snapshot of chip stacks and a payout schedule into each
//! player's expected prize money, then measures how much an all-in
//! confrontation between any two players costs in equity terms.
//!
//! ## State
//!
//! - [`Player`] - An identified chip stack
//! - [`Payouts`] - Prize money by finishing place, 1st first
//! - [`Tournament`] - Ordered players plus the payout schedule
//!
//! ## Evaluation
//!
//! - [`Engine`] - Owns the memo caches and runs the ICM recursion
//! - [`Outcome`] - Result of a simulated all-in for the aggressor
//! - [`Matrix`] - Pairwise bubble factors or required equities
//!
//! ## Memoization
//!
//! - [`Key`] - Ordered stacks plus remaining payouts
//! - [`Cache`] - Compute-once memo shared across threads
mod bubble;
mod cache;
mod engine;
mod invalid;
mod key;
mod matrix;
mod outcome;
mod payouts;
mod player;
mod report;
mod tournament;

pub use bubble::*;
pub use cache::*;
pub use engine::*;
pub use invalid::*;
pub use key::*;
pub use matrix::*;
pub use outcome::*;
pub use payouts::*;
pub use player::*;
pub use report::*;
pub use tournament::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Tournament chips held by a player.
pub type Chips = f64;
/// Prize money awarded for a finishing place.
pub type Prize = f64;
/// Expected prize money, equity deltas, and bubble factors.
pub type Utility = f64;
/// Finishing probabilities and required equities.
pub type Probability = f64;
/// Index of a player within a snapshot's ordered player list.
pub type Position = usize;

// ============================================================================
// NUMERICS
// ============================================================================
/// Relative tolerance for equity conservation checks.
pub const TOLERANCE: Utility = 1e-9;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. DEBUG when verbose, INFO otherwise.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
