//! Subcommand handlers.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use phrasewheel_config::PhraseWheelConfig;
use phrasewheel_core::{arrange as arrange_slots, dedup_case_insensitive, normalize_title};
use phrasewheel_suggest::{CorpusSource, Sampler};
use phrasewheel_types::{Capacity, Seed, parse_phrase_list};

use crate::{ArrangeArgs, OutputFormat, SuggestArgs};

/// Upper bound (exclusive) for generated shuffle seeds.
const RANDOM_SEED_LIMIT: i32 = 1_000_000_000;

pub(crate) fn arrange(args: ArrangeArgs, config: &PhraseWheelConfig) -> Result<()> {
    let raw = read_input(args.file.as_deref())?;
    let phrases = parse_phrase_list(&raw);

    let capacity = match args.capacity {
        Some(slots) => Capacity::new(slots).context("invalid --capacity")?,
        None => config.capacity(),
    };
    let seed = match (args.seed, args.shuffle) {
        (Some(seed), _) => Some(Seed::new(seed)),
        (None, true) => Some(random_seed()),
        (None, false) => None,
    };

    let unique = dedup_case_insensitive(&phrases).len();
    let total = capacity.total_slots();
    eprintln!("{unique} phrases for {total} slots");
    if unique > total {
        tracing::warn!(
            dropped = unique - total,
            "More phrases than slots; the extra phrases are left off the card"
        );
    }

    let slots = arrange_slots(&phrases, capacity, seed);
    tracing::debug!(capacity = %capacity, seed = ?seed, filled = slots.filled(), "Arranged card");

    let layout = slots.layout();
    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Text => write!(out, "{layout}")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &layout)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub(crate) fn suggest(args: SuggestArgs, config: &PhraseWheelConfig) {
    let source = args
        .corpus
        .or_else(|| config.corpus_path())
        .map_or(CorpusSource::Builtin, CorpusSource::File);
    let count = args.count.unwrap_or_else(|| config.suggestion_count());

    let sampler = Sampler::new(source)
        .with_max_phrase_chars(config.max_phrase_chars())
        .with_categories(args.categories);

    let mut out = io::stdout().lock();
    for phrase in sampler.sample(count) {
        if writeln!(out, "{phrase}").is_err() {
            // Reader went away (e.g. `| head`).
            break;
        }
    }
}

pub(crate) fn title(phrases: Vec<String>) -> Result<()> {
    let phrases = if phrases.is_empty() {
        parse_phrase_list(&read_input(None)?)
    } else {
        phrases
    };

    let mut out = io::stdout().lock();
    for phrase in &phrases {
        writeln!(out, "{}", normalize_title(phrase))?;
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("reading phrases from {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("reading phrases from stdin"),
    }
}

fn random_seed() -> Seed {
    Seed::new(rand::random_range(0..RANDOM_SEED_LIMIT))
}
