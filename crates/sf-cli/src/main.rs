//! ScratchForge CLI — generate one scratch-card matrix and score it
//!
//! Usage:
//!   scratchforge --config demos/config.json --betting-amount 100
//!
//! Prints the round result as a JSON document on stdout; configuration or
//! usage problems abort with a message on stderr and a non-zero exit, and
//! no partial result is printed.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sf_game::{GameConfig, MatrixGenerator, RoundEvaluator};

#[derive(Parser)]
#[command(name = "scratchforge", about = "Scratch card round generator and evaluator")]
struct Cli {
    /// Path to the game configuration document
    #[arg(long)]
    config: PathBuf,

    /// Amount to bet on this round
    #[arg(long, value_parser = parse_betting_amount)]
    betting_amount: f64,
}

fn parse_betting_amount(raw: &str) -> Result<f64, String> {
    let amount: f64 = raw
        .parse()
        .map_err(|_| format!("invalid betting amount: {raw}"))?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(format!("betting amount must be positive: {raw}"));
    }
    Ok(amount)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GameConfig::from_path(&cli.config)
        .with_context(|| format!("failed to load config {}", cli.config.display()))?;
    log::info!(
        "Loaded config: {}x{} grid, {} symbols, {} win combinations",
        config.rows,
        config.columns,
        config.symbols.len(),
        config.win_combinations.len()
    );

    let mut generator = MatrixGenerator::new();
    let matrix = generator.generate(&config).context("matrix generation failed")?;

    let result = RoundEvaluator::new(&config)
        .evaluate(&matrix, cli.betting_amount)
        .context("round evaluation failed")?;
    log::info!("Round reward: {:.2}", result.rounded_reward());

    let document = result.into_document();
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
