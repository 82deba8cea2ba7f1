//! Command implementations for the splaydict CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::time::Instant;

use chrono::Local;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::DictionaryConfig;
use crate::error::{Result, SplayDictError};
use crate::spelling::*;
use crate::travel::TravelSession;

/// Execute a CLI command.
pub fn execute_command(args: SplayDictArgs) -> Result<()> {
    let config = load_config(&args)?;
    let (dictionary, stats) = load_dictionary(&args, config)?;

    match &args.command {
        Command::Check(check_args) => check_word(dictionary, check_args, &args),
        Command::Suggest(suggest_args) => suggest_words(dictionary, suggest_args, &args),
        Command::List(list_args) => list_words(&dictionary, list_args, &args),
        Command::Stats(_) => show_stats(&dictionary, stats, &args),
        Command::Plan(plan_args) => plan_trip(dictionary, plan_args, &args),
    }
}

/// Read the config file if one was given, then apply flag overrides.
fn load_config(args: &SplayDictArgs) -> Result<DictionaryConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from: {}", path.display());
            DictionaryConfig::load(path)?
        }
        None => DictionaryConfig::default(),
    };

    if args.case_sensitive {
        config.lowercase = false;
    }
    Ok(config)
}

struct TimedLoad {
    stats: LoadStats,
    duration_ms: u64,
}

fn load_dictionary(
    args: &SplayDictArgs,
    config: DictionaryConfig,
) -> Result<(SplayDictionary, TimedLoad)> {
    let start_time = Instant::now();
    let file = File::open(&args.dictionary)?;

    let mut dictionary = SplayDictionary::with_config(config);
    let stats = dictionary.load_from_reader(BufReader::new(file))?;
    let duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Loaded {} distinct words from {} in {} ms",
        stats.distinct_words,
        args.dictionary.display(),
        duration_ms
    );
    Ok((dictionary, TimedLoad { stats, duration_ms }))
}

/// Apply per-command overrides on top of the configured suggestion settings.
fn suggestion_config(
    dictionary: &SplayDictionary,
    max_distance: Option<usize>,
    ranked: bool,
    limit: Option<usize>,
) -> SuggestionConfig {
    let mut config = dictionary.config().suggestion_config();
    if let Some(max_distance) = max_distance {
        config.max_distance = max_distance;
    }
    if ranked {
        config.order = SuggestionOrder::Ranked;
    }
    if limit.is_some() {
        config.max_suggestions = limit;
    }
    config
}

/// Look up a single word.
fn check_word(
    dictionary: SplayDictionary,
    args: &CheckArgs,
    cli_args: &SplayDictArgs,
) -> Result<()> {
    let config = suggestion_config(&dictionary, args.max_distance, false, None);
    let mut checker = SpellChecker::with_config(dictionary, config);

    let outcome = checker.check(&args.word);
    output_result("Check result", &outcome, cli_args)
}

/// List neighbours of a word.
fn suggest_words(
    dictionary: SplayDictionary,
    args: &SuggestArgs,
    cli_args: &SplayDictArgs,
) -> Result<()> {
    let config = suggestion_config(&dictionary, args.max_distance, args.ranked, args.limit);
    let max_distance = config.max_distance;
    let checker = SpellChecker::with_config(dictionary, config);

    let results = SuggestionResults {
        query: checker.dictionary().config().normalize(&args.word).into_owned(),
        max_distance,
        suggestions: checker.suggest(&args.word),
    };
    output_result("Suggestions", &results, cli_args)
}

/// Print every word in order.
fn list_words(
    dictionary: &SplayDictionary,
    args: &ListArgs,
    cli_args: &SplayDictArgs,
) -> Result<()> {
    let listing = WordListing {
        words: dictionary
            .entries()
            .map(|(word, count)| WordEntry {
                word: word.to_owned(),
                count,
            })
            .collect(),
        show_counts: args.counts,
    };
    output_result("Dictionary words", &listing, cli_args)
}

/// Show load and tree statistics.
fn show_stats(
    dictionary: &SplayDictionary,
    load: TimedLoad,
    cli_args: &SplayDictArgs,
) -> Result<()> {
    let stats = DictionaryStats {
        path: cli_args.dictionary.to_string_lossy().to_string(),
        lines_read: load.stats.lines_read,
        lines_skipped: load.stats.lines_skipped,
        words_inserted: load.stats.words_inserted,
        distinct_words: dictionary.word_count(),
        total_occurrences: dictionary.total_frequency(),
        tree_height: dictionary.tree().height(),
        load_duration_ms: load.duration_ms,
    };
    output_result("Dictionary loaded", &stats, cli_args)
}

/// Run the interactive travel session on the terminal.
fn plan_trip(
    dictionary: SplayDictionary,
    args: &PlanArgs,
    cli_args: &SplayDictArgs,
) -> Result<()> {
    if dictionary.is_empty() {
        return Err(SplayDictError::dictionary(
            "word list is empty, no city could ever be accepted",
        ));
    }

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut checker = SpellChecker::new(dictionary);
    let stdin = io::stdin().lock();

    // Keep stdout clean for the JSON document
    let request = match cli_args.output_format {
        OutputFormat::Human => TravelSession::new(&mut checker, stdin, io::stdout()).run(today)?,
        OutputFormat::Json => TravelSession::new(&mut checker, stdin, io::stderr()).run(today)?,
    };

    io::stdout().flush()?;
    output_result("Travel request", &request, cli_args)
}
