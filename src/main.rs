use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::info;

use index_permute::{MAX_ROUND_FACTORS, Permuter, logging};

#[derive(Parser)]
#[command(
    name = "index-permute",
    version,
    about = "Table-free permutations of [0, n)"
)]
struct Cli {
    /// Cap on the number of round factors derived per domain.
    #[arg(long, global = true, default_value_t = MAX_ROUND_FACTORS)]
    max_factors: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the image of one position.
    Get {
        #[arg(allow_hyphen_values = true)]
        n: i64,
        #[arg(allow_hyphen_values = true)]
        position: i64,
    },
    /// Print `position image` for every position of the domain.
    Table {
        #[arg(allow_hyphen_values = true)]
        n: i64,
    },
    /// Check that each domain size yields a full permutation.
    Verify {
        #[arg(required = true, allow_hyphen_values = true)]
        sizes: Vec<i64>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Get { n, position } => cmd_get(n, position, cli.max_factors),
        Command::Table { n } => cmd_table(n, cli.max_factors),
        Command::Verify { sizes } => cmd_verify(&sizes, cli.max_factors),
    }
}

fn build(n: i64, max_factors: usize) -> Result<Permuter> {
    Permuter::with_max_factors(n, max_factors)
        .with_context(|| format!("build permutation of size {}", n))
}

fn cmd_get(n: i64, position: i64, max_factors: usize) -> Result<()> {
    let permuter = build(n, max_factors)?;
    let image = permuter
        .permute(position)
        .with_context(|| format!("permute position {}", position))?;
    println!("{}", image);
    Ok(())
}

fn cmd_table(n: i64, max_factors: usize) -> Result<()> {
    let permuter = build(n, max_factors)?;
    for (x, y) in permuter.iter().enumerate() {
        println!("{} {}", x, y);
    }
    Ok(())
}

fn cmd_verify(sizes: &[i64], max_factors: usize) -> Result<()> {
    let mut failed = Vec::new();
    for &n in sizes {
        let permuter = build(n, max_factors)?;
        let domain = permuter.domain_size();
        let in_range = permuter.iter().all(|y| y < domain);
        let ok = in_range && permuter.iter().all_unique();
        info!(n, rounds = permuter.round_count(), ok, "verified domain");
        if ok {
            println!("{}: ok ({} rounds)", n, permuter.round_count());
        } else {
            println!("{}: FAILED", n);
            failed.push(n);
        }
    }
    if !failed.is_empty() {
        bail!("not a permutation for sizes {}", failed.iter().join(", "));
    }
    Ok(())
}
