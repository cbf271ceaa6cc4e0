//! ICM Binary
//!
//! Prints tournament equities, bubble factors, and required equities.
//!
//! Options: --stacks, --payouts, --json, --verbose

use clap::Parser;
use icm::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [2000., 1000., 1000., 1000., 1000., 1000., 1000., 1000., 1000.],
        help = "Chip stacks, one per player, comma separated"
    )]
    stacks: Vec<Chips>,
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [500., 300., 200.],
        help = "Prize money by finishing place, 1st first"
    )]
    payouts: Vec<Prize>,
    #[arg(long, help = "Emit the report as JSON")]
    json: bool,
    #[arg(short, long, help = "Log cache statistics")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;
    let state = Tournament::from((args.stacks, args.payouts));
    log::info!("evaluating {} players for {} prizes", state.len(), state.payouts().len());
    let engine = Engine::default();
    let report = engine.report(&state)?;
    match args.json {
        true => println!("{}", serde_json::to_string_pretty(&report)?),
        false => println!("{}", report),
    }
    Ok(())
}
