use std::{
    io::{self, BufRead, BufWriter, Write},
    time::{Duration, Instant},
};

use anyhow::Result;
use tracing::{debug, info};
use word_wizard::{
    anagram_table::AnagramTable,
    linear::LinearIndex,
    stats::{self, LookupStats},
    words,
};

mod infra;

fn main() -> Result<()> {
    // A missing .env is fine, everything has a default
    _ = dotenv::dotenv();
    infra::telemetry::init()?;
    let config = infra::config::get()?;

    let words = words::load_words(config.get_word_list())?;
    let linear = config
        .get_compare_linear()
        .then(|| LinearIndex::new(words.clone()));
    let table = AnagramTable::with_load_factor(words, config.get_load_factor())?;

    info!(
        words = table.len(),
        buckets = table.bucket_count(),
        load_factor = table.load_factor(),
        longest_bucket = table.longest_bucket(),
        "initialized anagram table"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    let mut table_stats = LookupStats::new();
    let mut linear_stats = LookupStats::new();

    for line in io::stdin().lock().lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        let start = Instant::now();
        let results = if table.is_empty() { Vec::new() } else { table.lookup(query) };
        table_stats.record(start.elapsed());

        debug!(query, matches = results.len(), "lookup");

        write_results(&mut out, &results)?;
        writeln!(out, "Hash table")?;
        write_timings(&mut out, &table_stats)?;

        if let Some(linear) = &linear {
            let start = Instant::now();
            let linear_results = linear.lookup(query);
            linear_stats.record(start.elapsed());

            debug_assert_eq!(results, linear_results);

            writeln!(out, "Linear search")?;
            write_timings(&mut out, &linear_stats)?;
            if let Some(speedup) = stats::speedup(&linear_stats, &table_stats) {
                writeln!(out, "Hash table speedup: {speedup:.2}x")?;
            }
        }

        writeln!(out)?;
        out.flush()?;
    }

    info!(lookups = table_stats.lookups(), "done");
    Ok(())
}

fn write_results<W: Write>(out: &mut W, results: &[&str]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "No anagrams found.");
    }

    writeln!(out, "Found {} match(es):", results.len())?;
    for word in results {
        writeln!(out, "  - {word}")?;
    }

    Ok(())
}

fn write_timings<W: Write>(out: &mut W, stats: &LookupStats) -> io::Result<()> {
    writeln!(out, "  Last lookup: {:.4} ms", millis(stats.last()))?;
    if let Some(average) = stats.average() {
        writeln!(out, "  Average: {:.4} ms", millis(average))?;
    }

    Ok(())
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
