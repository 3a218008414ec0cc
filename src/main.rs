use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use feedscope::util::{flatten_for_terminal, truncate_to_width};
use feedscope::{Channel, DecodeOptions, FieldResult, Item};

/// Column budget for a single printed value.
const VALUE_WIDTH: usize = 72;

#[derive(Parser, Debug)]
#[command(name = "feedscope", about = "Decode an RSS file and print what was found")]
struct Args {
    /// RSS document to decode
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Decoder options (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print at most this many items
    #[arg(long, value_name = "N")]
    limit: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => DecodeOptions::load(path)
            .with_context(|| format!("Failed to load options from '{}'", path.display()))?,
        None => DecodeOptions::default(),
    };

    let data = std::fs::read(&args.file)
        .with_context(|| format!("Failed to read feed file: {}", args.file.display()))?;
    let feed = feedscope::decode_with(&data, &options)
        .with_context(|| format!("Failed to decode '{}'", args.file.display()))?;

    print_channel(feed.channel());

    match feed.items() {
        Ok(items) => {
            let shown = args.limit.unwrap_or(items.len()).min(items.len());
            println!();
            println!("Items ({} of {}):", shown, items.len());
            for (index, item) in items.iter().take(shown).enumerate() {
                print_item(index, item);
            }
        }
        Err(e) => println!("\n{}", e),
    }

    Ok(())
}

fn print_channel(channel: &Channel) {
    field("Title", channel.title());
    field("Link", channel.link());
    field("Description", channel.description());
    field("Language", channel.language());
    field("Generator", channel.generator());
    field("Copyright", channel.copyright());
    if let Ok(categories) = channel.categories() {
        field("Categories", Ok(categories.join(", ").as_str()));
    }
    field("Image", channel.image().and_then(|image| image.url()));

    match channel.itunes() {
        Ok(itunes) => {
            field("iTunes author", itunes.author());
            field("iTunes summary", itunes.summary());
            field("iTunes explicit", itunes.explicit());
            field("iTunes artwork", itunes.image().and_then(|image| image.url()));
        }
        Err(e) => println!("{:>16}  ({})", "iTunes", e),
    }

    match channel.media() {
        Ok(media) => {
            field("Media rating", media.rating());
            field("Media thumbnail", media.thumbnail().and_then(|image| image.url()));
            if let Ok(keywords) = media.keywords() {
                field("Media keywords", Ok(keywords.join(", ").as_str()));
            }
        }
        Err(e) => println!("{:>16}  ({})", "MediaRSS", e),
    }
}

fn print_item(index: usize, item: &Item) {
    let title = item.title().unwrap_or("(untitled)");
    println!(
        "{:>4}. {}",
        index + 1,
        truncate_to_width(&flatten_for_terminal(title), VALUE_WIDTH)
    );

    if let Ok(date) = item.date() {
        println!("      published {}", date.to_rfc2822());
    }
    if let Ok(duration) = item.itunes().and_then(|itunes| itunes.duration()) {
        let secs = duration.as_secs();
        println!(
            "      duration  {}:{:02}:{:02}",
            secs / 3600,
            (secs / 60) % 60,
            secs % 60
        );
    }
    if let Ok(enclosure) = item.enclosure() {
        let url = enclosure.url().unwrap_or("?");
        let media_type = enclosure.media_type().unwrap_or("unknown type");
        let size = enclosure
            .size()
            .map(|bytes| format!("{} bytes", bytes))
            .unwrap_or_else(|_| "size unknown".to_string());
        println!(
            "      enclosure {} ({}, {})",
            truncate_to_width(&flatten_for_terminal(url), VALUE_WIDTH),
            flatten_for_terminal(media_type),
            size
        );
    }
    if let Ok(credits) = item.media().and_then(|media| media.credits()) {
        for (role, name) in credits {
            println!(
                "      {}: {}",
                flatten_for_terminal(role),
                flatten_for_terminal(name)
            );
        }
    }
}

/// Prints one labelled value; unpopulated fields are skipped.
fn field(label: &str, value: FieldResult<&str>) {
    if let Ok(value) = value {
        println!(
            "{:>16}  {}",
            label,
            truncate_to_width(&flatten_for_terminal(value), VALUE_WIDTH)
        );
    }
}
