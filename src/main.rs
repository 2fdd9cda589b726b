//! # chatlens CLI
//!
//! Command-line front end for the chatlens library.

use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chatlens::analytics::{ChatAnalyzer, ChatReport, StopWords};
use chatlens::cli::Args;
use chatlens::config::{AnalyticsConfig, ExtractorConfig};
use chatlens::core::apply_filters;
use chatlens::decode::read_export;
use chatlens::features::FeatureExtractor;
use chatlens::format::write_to_format;
use chatlens::parser::ChatParser;
use chatlens::{ChatlensError, EnrichedRecord};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.log_level());

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr. `-v` overrides `RUST_LOG`; the fallback is `warn`.
fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let total_start = Instant::now();

    // Validate arguments before touching the input
    let filter_config = args.filter_config()?;

    println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    if let Some(ref output) = args.output {
        println!("💾 Output:  {} ({})", output.display(), args.table_format());
    }
    if let Some(ref user) = args.user {
        println!("👤 User:    {}", user);
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing export...");
    let parse_start = Instant::now();
    let parser = ChatParser::new()?;
    let content = read_export(&args.input)?;
    let (messages, summary) = parser.parse_with_summary(&content);
    println!(
        "   Found {} messages, {} continuation lines ({:.2}s)",
        messages.len(),
        summary.continuation_lines,
        parse_start.elapsed().as_secs_f64()
    );

    if messages.is_empty() {
        return Err(ChatlensError::invalid_format(
            "chat",
            format!("no messages found in '{}'", args.input.display()),
        ));
    }

    // Step 2: Enrich
    println!("🧮 Extracting features...");
    let extract_start = Instant::now();
    let extractor = FeatureExtractor::new(ExtractorConfig::new().with_parallel(!args.sequential))?;
    let enriched = extractor.extract(&messages);
    println!("   Done ({:.2}s)", extract_start.elapsed().as_secs_f64());

    // Step 3: Scope
    let records = if filter_config.is_active() {
        let scoped = apply_filters(enriched, &filter_config);
        println!("🔍 {} messages after filtering", scoped.len());
        scoped
    } else {
        enriched
    };

    // Step 4: Aggregate
    let stop_words = match args.stop_words {
        Some(ref path) => StopWords::from_file(path)?,
        None => StopWords::new(),
    };
    let analytics_config = AnalyticsConfig::new()
        .with_top_users(args.top)
        .with_top_words(args.top)
        .with_top_emojis(args.top);
    let analyzer = ChatAnalyzer::new(&records, &stop_words)?;
    let report = analyzer.report(&analytics_config);

    print_summary(&report, analyzer.users().len());

    // Step 5: Write
    if let Some(ref output) = args.output {
        let format = args.table_format();
        println!();
        println!("💾 Writing {}...", format);
        write_table(&records, output, format, args)?;
    }

    if let Some(ref path) = args.report {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json)?;
        println!("📝 Report saved to {}", path.display());
    }

    let total_time = total_start.elapsed();
    info!(elapsed_ms = total_time.as_millis() as u64, "pipeline finished");

    println!();
    println!("✅ Done in {:.2}s", total_time.as_secs_f64());
    Ok(())
}

fn write_table(
    records: &[EnrichedRecord],
    output: &std::path::Path,
    format: chatlens::format::OutputFormat,
    args: &Args,
) -> Result<(), ChatlensError> {
    let write_start = Instant::now();
    write_to_format(records, output, format, &args.output_config())?;
    println!(
        "   {} rows written in {:.2}s",
        records.len(),
        write_start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_summary(report: &ChatReport, user_count: usize) {
    let basic = &report.basic;

    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", basic.total_messages);
    println!("   Users:     {}", user_count);
    println!("   Words:     {}", basic.total_words);
    println!("   Media:     {}", basic.media_shared);
    println!("   Links:     {}", basic.links_shared);
    println!("   Emojis:    {}", basic.total_emojis);
    if let (Some(first), Some(last)) = (basic.first_message_date, basic.last_message_date) {
        println!(
            "   Period:    {} → {} ({} days, {:.1} msgs/day)",
            first, last, basic.chat_duration_days, basic.avg_messages_per_day
        );
    }

    if !report.active_users.is_empty() {
        println!();
        println!("👥 Top users:");
        for user in &report.active_users {
            println!("   {:<20} {:>6} messages", user.user, user.messages);
        }
    }

    if !report.top_words.is_empty() {
        println!();
        println!("💬 Top words:");
        let words: Vec<String> = report
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.frequency))
            .collect();
        println!("   {}", words.join(", "));
    }

    if !report.top_emojis.is_empty() {
        println!();
        println!("😀 Top emojis:");
        let emojis: Vec<String> = report
            .top_emojis
            .iter()
            .map(|e| format!("{} ({})", e.emoji, e.frequency))
            .collect();
        println!("   {}", emojis.join(" "));
    }
}
