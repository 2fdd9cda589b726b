//! Synthetic WhatsApp export generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output] [layout]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt mixed
//!
//! Layouts: `12h`, `24h`, `bracketed`, `mixed` (default). A `mixed` export
//! stresses the parser; dates outside the inferred layout come out missing.

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;
use rand::seq::SliceRandom;

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🤯", "💀", "👻", "🤖", "🦄", "🌈", "⚡", "🔥",
    "👍", "❤️", "💔", "🎉", "🇰🇿", "👨‍👩‍👧‍👦", "🧑‍🚀", "🤷‍♀️",
];

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "Иван",
    "Мария",
    "村上",
    "محمد",
    "+1 555 0100",
    "User: With Colon",
    "🔥FireUser🔥",
];

const LINKS: &[&str] = &[
    "https://example.com/page?id=42",
    "http://news.example.org/2024/01/story",
    "www.rust-lang.org",
    "crates.io/crates/regex",
    "(see https://en.wikipedia.org/wiki/Rust_(programming_language))",
];

const MEDIA: &[&str] = &[
    "<Media omitted>",
    "image omitted",
    "video omitted",
    "IMG-20240101-WA0001.jpg (file attached)",
    "sticker omitted",
];

const WORDS: &[&str] = &[
    "hello", "world", "meeting", "tomorrow", "coffee", "project", "deadline", "weekend", "ok",
    "thanks", "привет", "мир", "こんにちは", "the", "and", "with", "again", "later",
];

#[derive(Debug, Clone, Copy)]
enum Layout {
    TwelveHour,
    TwentyFourHour,
    Bracketed,
    Mixed,
}

impl Layout {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "12h" | "12-hour" => Some(Layout::TwelveHour),
            "24h" | "24-hour" => Some(Layout::TwentyFourHour),
            "bracketed" | "ios" => Some(Layout::Bracketed),
            "mixed" => Some(Layout::Mixed),
            _ => None,
        }
    }

    fn for_index(self, i: usize) -> Layout {
        match self {
            Layout::Mixed => match i % 3 {
                0 => Layout::TwelveHour,
                1 => Layout::TwentyFourHour,
                _ => Layout::Bracketed,
            },
            other => other,
        }
    }
}

fn header(layout: Layout, at: NaiveDateTime, sender: &str) -> String {
    match layout {
        Layout::TwelveHour => format!(
            "{}, {} - {}: ",
            at.format("%-m/%-d/%y"),
            at.format("%-I:%M %p"),
            sender
        ),
        Layout::TwentyFourHour | Layout::Mixed => format!(
            "{}, {} - {}: ",
            at.format("%-m/%-d/%y"),
            at.format("%-H:%M"),
            sender
        ),
        Layout::Bracketed => format!(
            "[{}, {}] {}: ",
            at.format("%d.%m.%Y"),
            at.format("%H:%M:%S"),
            sender
        ),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map_or("heavy_chat.txt", |s| s.as_str());
    let layout_name = args.get(3).map_or("mixed", |s| s.as_str());

    let Some(layout) = Layout::parse(layout_name) else {
        eprintln!(
            "Unknown layout: {}. Use '12h', '24h', 'bracketed' or 'mixed'",
            layout_name
        );
        process::exit(1);
    };

    println!("🧪 Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Layout:   {}", layout_name);
    println!();

    if let Err(e) = generate(count, output, layout) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn generate(count: usize, output: &str, layout: Layout) -> io::Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer

    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    let mut at = NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .unwrap_or_default();

    // Export preamble: no header, so the parser drops it
    let preamble = "Messages and calls are end-to-end encrypted.\n";
    writer.write_all(preamble.as_bytes())?;
    bytes_written += preamble.len();

    for i in 0..count {
        at += Duration::minutes(rng.gen_range(1..=240));
        let sender = SENDERS.choose(&mut rng).copied().unwrap_or("Alice");

        let mut line = header(layout.for_index(i), at, sender);
        line.push_str(&generate_body(&mut rng, i));
        line.push('\n');

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!(
        "   Speed: {:.0} msg/s",
        count as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn sentence(rng: &mut impl Rng, words: usize) -> String {
    (0..words)
        .filter_map(|_| WORDS.choose(rng).copied())
        .collect::<Vec<_>>()
        .join(" ")
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 12 {
        0..=4 => {
            let words = rng.gen_range(1..=15);
            sentence(rng, words)
        }

        // Emoji runs
        5 => {
            let emojis: String = (0..rng.gen_range(1..=8))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{} {}", sentence(rng, 3), emojis)
        }

        6 => format!(
            "{} {}",
            sentence(rng, 4),
            LINKS.choose(rng).copied().unwrap_or_default()
        ),

        7 => MEDIA.choose(rng).copied().unwrap_or_default().to_string(),

        // Continuation lines, including one that looks like a time
        8 => format!(
            "{}\n{}\n10:30 works for me",
            sentence(rng, 5),
            sentence(rng, 5)
        ),

        9 => format!("Кириллица: Привет мир! #{}", index),
        10 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),

        // Empty body after the separator
        _ => String::new(),
    }
}
