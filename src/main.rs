use std::collections::BTreeMap;
use std::fmt::Debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lazyseq::{
    batch_with_config, count_up_to, make_iterable, BatchConfig, Countdown, Cursor, IterCursor,
    Iterable, Step,
};
use tracing::{debug, trace};

#[derive(Parser, Debug)]
#[command(name = "lazyseq", about = "Drain lazy sequences, generators and batches")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print START, START-1, ..., 1.
    Countdown {
        /// Starting value.
        start: u64,
    },
    /// Print 1, 2, ..., MAX using the counting generator.
    CountUp {
        /// Inclusive upper bound.
        max: u64,
    },
    /// Print the given values (or 0..N with --range) in batches.
    Batch {
        /// Values to batch.
        #[arg(conflicts_with = "range")]
        values: Vec<String>,
        /// Batch the integers 0..N instead of explicit values.
        #[arg(long)]
        range: Option<u64>,
        /// Elements per batch.
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        batch_size: i64,
        /// Stop after this many batches.
        #[arg(long)]
        max_batches: Option<usize>,
    },
    /// Stream a text file line by line and print batches of lines.
    Lines {
        /// File to read.
        path: PathBuf,
        /// Lines per batch.
        #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
        batch_size: i64,
    },
    /// Walk through iterables, cursors, generators and batching.
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Countdown { start } => run_countdown(start),
        Commands::CountUp { max } => run_count_up(max),
        Commands::Batch {
            values,
            range,
            batch_size,
            max_batches,
        } => run_batch(values, range, batch_size, max_batches)?,
        Commands::Lines { path, batch_size } => run_lines(&path, batch_size)?,
        Commands::Demo => run_demo()?,
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let log_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("lazyseq started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn run_countdown(start: u64) {
    for value in Countdown::new(start).iterator().drain() {
        println!("{value}");
    }
}

fn run_count_up(max: u64) {
    for value in count_up_to(max).drain() {
        println!("{value}");
    }
}

fn batch_config(batch_size: i64, max_batches: Option<usize>) -> Result<BatchConfig> {
    let config = BatchConfig::with_batch_size(batch_size)
        .with_context(|| format!("invalid --batch-size {batch_size}"))?;
    Ok(match max_batches {
        Some(limit) => config.with_max_batches(limit),
        None => config,
    })
}

fn run_batch(
    values: Vec<String>,
    range: Option<u64>,
    batch_size: i64,
    max_batches: Option<usize>,
) -> Result<()> {
    let config = batch_config(batch_size, max_batches)?;
    match range {
        Some(n) => print_batches(batch_with_config(make_iterable(0..n), config)?),
        None => print_batches(batch_with_config(make_iterable(values), config)?),
    }
    Ok(())
}

fn print_batches<I>(batches: I)
where
    I: Iterable,
    I::Item: Debug,
{
    for (idx, batch) in batches.iterator().drain().enumerate() {
        println!("batch {}\t{:?}", idx + 1, batch);
    }
}

fn run_lines(path: &Path, batch_size: i64) -> Result<()> {
    let config = batch_config(batch_size, None)?;
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
    );

    let lines = IterCursor::new(reader.lines());
    let mut batches = lines
        .batched(config.batch_size)
        .context("failed to build line batcher")?;

    let mut idx = 0;
    while let Step::Value(batch) = batches.advance() {
        idx += 1;
        let lines = batch
            .into_iter()
            .map(|line| line.map(|l| l.trim().to_string()))
            .collect::<std::io::Result<Vec<_>>>()
            .with_context(|| format!("failed to read batch {} of {}", idx, path.display()))?;
        println!("batch {idx}\t{lines:?}");
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Iterable sources:");
    let list = [10, 20, 30];
    let text = "hello";
    let dict = BTreeMap::from([("a", 1), ("b", 2)]);
    println!("  list   -> {:?}", drain_all(make_iterable(&list[..])));
    println!("  string -> {:?}", drain_all(make_iterable(text.chars())));
    println!("  keys   -> {:?}", drain_all(make_iterable(dict.keys())));
    println!("{}", "-".repeat(40));

    println!("Stepping by hand:");
    let mut cursor = make_iterable([1, 2, 3]).iterator();
    loop {
        match cursor.advance() {
            Step::Value(value) => println!("  {value}"),
            Step::End => {
                println!("  iteration complete");
                break;
            }
        }
    }
    println!("{}", "-".repeat(40));

    println!("Countdown:");
    for value in Countdown::new(5).iterator().drain() {
        println!("  {value}");
    }
    println!("{}", "-".repeat(40));

    println!("Generator:");
    for value in count_up_to(3).drain() {
        println!("  {value}");
    }
    println!("{}", "-".repeat(40));

    println!("Reading a file line by line:");
    let mut sample = tempfile::NamedTempFile::new().context("failed to create sample file")?;
    write!(sample, "line1\nline2\nline3").context("failed to write sample file")?;
    let reader = BufReader::new(sample.reopen().context("failed to reopen sample file")?);
    for line in IterCursor::new(reader.lines()).drain() {
        println!("  read line: {}", line?.trim());
    }
    println!("{}", "-".repeat(40));

    println!("Data batches:");
    let config = batch_config(3, None)?;
    for batch in batch_with_config(make_iterable(0..10), config)?
        .iterator()
        .drain()
    {
        println!("  {batch:?}");
    }
    println!("{}", "-".repeat(40));

    Ok(())
}

fn drain_all<I: Iterable>(iterable: I) -> Vec<I::Item> {
    iterable.iterator().drain().collect()
}
