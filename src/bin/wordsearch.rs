//! Times looking up a sample of words from a word list in a `Vec`, in an [`OrderedTree`] built
//! from the shuffled list, in the same tree after a rebalance, and in a tree built from the
//! sorted list (the worst possible shape).

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use ordered_tree::OrderedTree;

/// Compare word lookups in a list and in binary search trees of different shapes.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Newline separated word list
    words: PathBuf,

    /// How many distinct words to look up
    #[clap(long, default_value = "1000")]
    samples: usize,

    /// Seed for picking and shuffling words; random if omitted
    #[clap(long)]
    seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let args = Args::parse();
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let text = fs::read_to_string(&args.words)
        .with_context(|| format!("reading word list {}", args.words.display()))?;
    let mut words: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    if words.is_empty() {
        bail!("word list {} is empty", args.words.display());
    }
    info!("loaded {} words from {}", words.len(), args.words.display());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut distinct = words.clone();
    distinct.sort();
    distinct.dedup();
    let samples: Vec<String> = distinct
        .choose_multiple(&mut rng, args.samples)
        .cloned()
        .collect();
    info!("looking up {} distinct words", samples.len());

    let elapsed = time_lookups(&samples, |word| words.contains(word));
    report("list", elapsed);

    words.shuffle(&mut rng);
    let mut tree: OrderedTree<String> = words.iter().cloned().collect();
    describe(&tree);
    let elapsed = time_lookups(&samples, |word| tree.contains(word));
    report("random binary tree", elapsed);

    tree.rebalance();
    describe(&tree);
    let elapsed = time_lookups(&samples, |word| tree.contains(word));
    report("balanced binary tree", elapsed);

    tree.clear();
    words.sort();
    info!("inserting sorted words; every insert walks the whole chain");
    let mut last_percent = None;
    for (count, word) in words.iter().enumerate() {
        tree.insert(word.clone());
        let percent = count * 100 / words.len();
        if last_percent != Some(percent) {
            debug!("added {}%", percent);
            last_percent = Some(percent);
        }
    }
    describe(&tree);
    let elapsed = time_lookups(&samples, |word| tree.contains(word));
    report("sorted-insert binary tree", elapsed);

    Ok(())
}

fn time_lookups(samples: &[String], mut lookup: impl FnMut(&String) -> bool) -> Duration {
    let start = Instant::now();
    let found = samples.iter().filter(|word| lookup(word)).count();
    let elapsed = start.elapsed();
    debug!("found {} of {} samples", found, samples.len());
    elapsed
}

fn describe(tree: &OrderedTree<String>) {
    info!(
        "tree holds {} words, height {}, balanced: {}",
        tree.len(),
        tree.height(),
        tree.is_balanced()
    );
}

fn report(structure: &str, elapsed: Duration) {
    println!("Time of search in {}: {:.5}s", structure, elapsed.as_secs_f64());
}
