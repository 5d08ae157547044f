//! knapsack CLI - solve a 0/1 knapsack instance read from a file or stdin.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use knapsack_dp::{parse_input, solve_with, write_result, Instance, Strategy};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(version)]
#[command(
    about = "Solve the knapsack problem by finding the most valuable subsequence of items."
)]
struct Cli {
    /// Input file (reads standard input when omitted)
    file: Option<PathBuf>,

    /// DP layout used to solve the instance
    #[arg(long, value_enum, default_value_t = StrategyArg::Full)]
    strategy: StrategyArg,

    /// Items per checkpoint block (checkpointed strategy only)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    block_size: Option<u64>,

    /// Refuse instances whose full table would exceed this many cells
    #[arg(long)]
    max_cells: Option<usize>,

    /// Verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    /// Full (n + 1) x (capacity + 1) table
    Full,
    /// sqrt(n) row checkpoints, rows recomputed while backtracking
    Checkpointed,
}

impl Cli {
    fn strategy(&self) -> Result<Strategy> {
        match (self.strategy, self.block_size) {
            (StrategyArg::Full, Some(_)) => {
                bail!("--block-size requires --strategy checkpointed")
            }
            (StrategyArg::Full, None) => Ok(Strategy::FullTable),
            (StrategyArg::Checkpointed, block_size) => Ok(Strategy::Checkpointed {
                block_size: block_size
                    .map(usize::try_from)
                    .transpose()
                    .context("--block-size does not fit in usize")?,
            }),
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn read_instance(file: Option<&PathBuf>) -> Result<Result<Instance, knapsack_dp::InputError>> {
    match file {
        Some(path) => {
            let f = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            Ok(parse_input(BufReader::new(f)))
        }
        None => Ok(parse_input(io::stdin().lock())),
    }
}

/// Largest single allocation a `Vec` can make.
const MAX_ALLOCATION: usize = isize::MAX as usize;

fn check_size(instance: &Instance, strategy: Strategy, max_cells: Option<usize>) -> Result<()> {
    let fits = |bytes: Option<usize>| bytes.is_some_and(|b| b <= MAX_ALLOCATION);
    if !fits(instance.row_bytes()) {
        bail!(
            "Instance is too large to solve: capacity {} does not fit in one DP row",
            instance.capacity
        );
    }
    if strategy == Strategy::FullTable && !fits(instance.table_bytes()) {
        bail!("Instance is too large to solve with the full table; try --strategy checkpointed");
    }

    let Some(limit) = max_cells else {
        return Ok(());
    };
    match instance.table_cells() {
        Some(cells) if cells <= limit => Ok(()),
        Some(cells) => bail!("Instance needs {cells} table cells, above --max-cells {limit}"),
        None => bail!("Instance table size overflows usize, above --max-cells {limit}"),
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let strategy = cli.strategy()?;

    let instance = match read_instance(cli.file.as_ref())? {
        Ok(instance) => instance,
        Err(err) => {
            eprintln!("Incorrect input file:\n{err}");
            return Ok(ExitCode::FAILURE);
        }
    };
    info!(
        items = instance.items.len(),
        capacity = instance.capacity,
        "input parsed"
    );
    check_size(&instance, strategy, cli.max_cells)?;

    debug!(?strategy, "solving");
    let solution = solve_with(&instance.items, instance.capacity, strategy);
    info!(
        value = solution.value,
        selected = solution.items.len(),
        "solved"
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_result(&mut out, &solution).context("Failed to write result")?;
    out.flush().context("Failed to write result")?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
