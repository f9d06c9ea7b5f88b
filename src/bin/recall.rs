//! Store patterns from a text dump and recall one from a noisy probe
//!
//! Usage:
//!   cargo run --bin recall -- --input patterns.txt --target 0 --noise 2

use anyhow::{bail, Context, Result};
use clap::Parser;
use hopfield_memory::encoding::render_ascii;
use hopfield_memory::{AssociativeMemory, MemoryError, Pattern};
use rand::seq::index::sample;

#[derive(Parser, Debug)]
#[command(name = "recall")]
#[command(about = "Store patterns from a text dump and recall one from a noisy probe")]
struct Args {
    /// Input text file, one pattern per block (rows of 0/1 digits)
    #[arg(short, long)]
    input: String,

    /// Index of the stored pattern to probe with
    #[arg(short, long, default_value = "0")]
    target: usize,

    /// Number of positions to flip in the probe
    #[arg(short, long, default_value = "0")]
    noise: usize,

    /// Grid width for display
    #[arg(short, long, default_value = "10")]
    width: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input))?;
    let memory = AssociativeMemory::from_text(&text)
        .with_context(|| format!("parsing patterns from {}", args.input))?;

    println!(
        "Stored {} patterns of dimension {}\n",
        memory.len(),
        memory.dimension()
    );

    let Some(target) = memory.patterns().get(args.target) else {
        bail!(
            "pattern index {} out of range (stored: {})",
            args.target,
            memory.len()
        );
    };
    if args.noise > memory.dimension() {
        bail!(
            "cannot flip {} positions in a pattern of length {}",
            args.noise,
            memory.dimension()
        );
    }

    let probe = corrupt(target, args.noise);

    println!("Probe (pattern {} with {} flipped bits):", args.target, args.noise);
    println!("{}\n", render_ascii(&probe, args.width));

    match memory.recall(&probe) {
        Ok(recalled) => {
            println!("Recalled in {} pass(es):", recalled.passes);
            println!("{}", render_ascii(&recalled.pattern, args.width));
            if &recalled.pattern == target {
                println!("\nRecovered the original pattern.");
            } else {
                println!("\nConverged to a different stored pattern.");
            }
        }
        Err(MemoryError::NotConverged { passes }) => {
            println!("No stored pattern matched within {passes} pass(es).");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

/// Flip `noise` distinct positions of the pattern
fn corrupt(pattern: &Pattern, noise: usize) -> Pattern {
    let mut signs = pattern.as_signs().to_vec();
    let mut rng = rand::thread_rng();
    for idx in sample(&mut rng, signs.len(), noise) {
        signs[idx] = -signs[idx];
    }
    Pattern::from_signs(&signs).expect("flipping signs keeps values bipolar")
}
