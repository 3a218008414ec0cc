//! Integration tests for decoding complete RSS documents.
//!
//! These exercise the public API end-to-end: bytes in, accessor results
//! out, including which error a caller observes for absent data.

use std::time::Duration;

use chrono::{Datelike, Timelike};
use feedscope::{decode, decode_with, DecodeError, DecodeOptions, FieldError, Feed};
use pretty_assertions::assert_eq;

const PODCAST: &[u8] = include_bytes!("fixtures/podcast.xml");

fn podcast() -> Feed {
    decode(PODCAST).expect("fixture should decode")
}

// ============================================================================
// Minimal Documents
// ============================================================================

#[test]
fn test_minimal_channel_round_trip() {
    let feed =
        decode(b"<rss><channel><title>T</title><item><title>I</title></item></channel></rss>")
            .unwrap();

    assert_eq!(feed.channel().title(), Ok("T"));
    let items = feed.items().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title(), Ok("I"));
}

#[test]
fn test_empty_channel_has_no_items() {
    let feed = decode(b"<rss><channel></channel></rss>").unwrap();

    let err = feed.items().unwrap_err();
    assert_eq!(err, FieldError::NoItems);
    assert!(err.is_not_populated());
    assert_eq!(err.to_string(), "Feed contains no items");
}

#[test]
fn test_well_formed_but_unrecognised_document_decodes() {
    let feed = decode(b"<html><body><p>Not a feed</p></body></html>").unwrap();
    assert_eq!(
        feed.channel().title(),
        Err(FieldError::NotPopulated("Feed title"))
    );
    assert!(feed.items().is_err());
}

#[test]
fn test_malformed_document_fails() {
    for doc in [
        &b"<rss><channel><title>T</title></rss>"[..],
        b"<rss><channel>",
        b"",
        b"just text",
    ] {
        let result = decode(doc);
        assert!(
            matches!(result, Err(DecodeError::Xml { .. })),
            "expected XML error for {:?}",
            String::from_utf8_lossy(doc)
        );
    }
}

#[test]
fn test_limits_from_options() {
    let options = DecodeOptions {
        max_depth: 2,
        ..DecodeOptions::default()
    };
    let result = decode_with(b"<rss><channel><title>T</title></channel></rss>", &options);
    assert!(matches!(result, Err(DecodeError::MaxDepthExceeded(2))));
}

#[test]
fn test_mixed_content_text_keeps_inner_whitespace() {
    let feed = decode(
        b"<rss><channel><title>Rust <em>in</em> Action</title>\
          <description>a &lt; b <![CDATA[<i>c</i>]]></description></channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.channel().title(), Ok("Rust in Action"));
    assert_eq!(feed.channel().description(), Ok("a < b <i>c</i>"));
}

#[test]
fn test_latin1_document_decodes() {
    let feed = decode(include_bytes!("fixtures/latin1.xml")).unwrap();
    let channel = feed.channel();

    assert_eq!(channel.title(), Ok("Caf\u{e9} Cr\u{e8}me"));
    assert_eq!(
        channel.itunes().and_then(|i| i.author()),
        Ok("Ren\u{e9}e Lef\u{e8}vre")
    );
    let item = &feed.items().unwrap()[0];
    assert_eq!(item.title(), Ok("\u{c9}pisode 1"));
    assert_eq!(
        item.enclosure().and_then(|e| e.url()),
        Ok("https://cdn.example.com/\u{e9}t\u{e9}.mp3")
    );
}

// ============================================================================
// Channel
// ============================================================================

#[test]
fn test_channel_plain_fields() {
    let feed = podcast();
    let channel = feed.channel();

    assert_eq!(channel.title(), Ok("Systems Hour"));
    assert_eq!(channel.link(), Ok("https://systems.example.com"));
    assert_eq!(
        channel.description(),
        Ok("Weekly talk about <b>systems</b> programming.")
    );
    assert_eq!(channel.language(), Ok("en-us"));
    assert_eq!(channel.copyright(), Ok("2024 Systems Hour"));
    assert_eq!(channel.generator(), Ok("hand-written"));
    assert_eq!(
        channel.categories().unwrap(),
        &["Technology".to_string(), "Software".to_string()]
    );

    let image = channel.image().unwrap();
    assert_eq!(image.url(), Ok("https://systems.example.com/logo.png"));
    assert_eq!(image.title(), Ok("Systems Hour"));
    assert_eq!(image.width(), Ok(144));
}

#[test]
fn test_channel_itunes() {
    let feed = podcast();
    let channel = feed.channel();
    assert!(channel.is_itunes());

    let itunes = channel.itunes().unwrap();
    assert_eq!(itunes.author(), Ok("Ada & Grace"));
    assert_eq!(itunes.subtitle(), Ok("Low-level, every week"));
    assert_eq!(
        itunes.summary(),
        Ok("Conversations about kernels, compilers and storage engines.")
    );
    assert_eq!(itunes.explicit(), Ok("clean"));
    assert_eq!(itunes.is_explicit(), Ok(false));
    assert_eq!(itunes.keywords(), Ok("kernels,compilers,storage"));
    assert_eq!(
        itunes.image().and_then(|image| image.url()),
        Ok("https://systems.example.com/artwork.jpg")
    );
    assert_eq!(itunes.categories().unwrap(), &["Technology".to_string()]);
    assert_eq!(
        itunes.duration(),
        Err(FieldError::NotPopulated("Itunes duration"))
    );
}

#[test]
fn test_channel_media_rss() {
    let feed = podcast();
    let media = feed.channel().media().unwrap();

    assert_eq!(media.rating(), Ok("nonadult"));
    assert_eq!(media.copyright(), Ok("2024 Systems Hour Media"));
    let thumbnail = media.thumbnail().unwrap();
    assert_eq!(thumbnail.url(), Ok("https://systems.example.com/thumb.jpg"));
    assert_eq!(thumbnail.height(), Ok(300));
    assert_eq!(
        media.keywords().unwrap(),
        &["systems".to_string(), "rust".to_string(), "podcast".to_string()]
    );
    assert_eq!(
        media.categories().unwrap(),
        &["Technology/Podcasts".to_string()]
    );
}

// ============================================================================
// Items
// ============================================================================

#[test]
fn test_item_order_preserved() {
    let feed = podcast();
    let titles: Vec<_> = feed
        .items()
        .unwrap()
        .iter()
        .map(|item| item.title().unwrap())
        .collect();
    assert_eq!(titles, ["Episode 2: Allocators", "Episode 1: Pilot", "Bonus"]);
}

#[test]
fn test_fully_populated_item() {
    let feed = podcast();
    let item = &feed.items().unwrap()[0];

    assert_eq!(item.link(), Ok("https://systems.example.com/2"));
    assert_eq!(item.description(), Ok("Arenas, slabs and bumps."));

    let date = item.date().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 2));
    assert_eq!(date.hour(), 9);
    assert_eq!(date.offset().local_minus_utc(), 3600);

    let guid = item.guid().unwrap();
    assert_eq!(guid.content(), "https://systems.example.com/2");
    assert!(guid.is_permalink());

    assert!(item.has_enclosure());
    let enclosure = item.enclosure().unwrap();
    assert_eq!(enclosure.url(), Ok("https://cdn.example.com/ep2.mp3"));
    assert_eq!(enclosure.media_type(), Ok("audio/mpeg"));
    assert_eq!(enclosure.size(), Ok(48_211_223));

    let itunes = item.itunes().unwrap();
    assert_eq!(itunes.duration(), Ok(Duration::from_secs(3723)));
    assert_eq!(itunes.is_explicit(), Ok(false));
    assert_eq!(
        itunes.author(),
        Err(FieldError::NotPopulated("Itunes author"))
    );

    let media = item.media().unwrap();
    let content = media.content().unwrap();
    assert_eq!(content.url(), Ok("https://cdn.example.com/ep2.mp4"));
    assert_eq!(content.media_type(), Ok("video/mp4"));
    assert_eq!(content.size(), Ok(904_857_600));
    assert_eq!(media.thumbnail().and_then(|t| t.width()), Ok(160));
}

#[test]
fn test_credits_keyed_by_role() {
    let feed = podcast();
    let media = feed.items().unwrap()[0].media().unwrap();

    let credits = media.credits().unwrap();
    assert_eq!(credits.len(), 2);
    assert_eq!(media.credit("photographer"), Ok("Jane"));
    assert_eq!(media.credit("host"), Ok("Ada"));
    assert!(media.credit("director").is_err());
}

#[test]
fn test_malformed_values_degrade_to_absent() {
    let feed = podcast();
    let item = &feed.items().unwrap()[1];

    assert_eq!(item.date(), Err(FieldError::NotPopulated("Item date")));
    assert_eq!(
        item.enclosure().and_then(|e| e.size()),
        Err(FieldError::NotPopulated("Enclosure size"))
    );
    assert_eq!(item.enclosure().and_then(|e| e.url()), Ok("https://cdn.example.com/ep1.mp3"));
    assert!(!item.guid().unwrap().is_permalink());

    // The itunes element was seen, so the gate passes; only the value is absent
    assert!(item.is_itunes());
    assert_eq!(
        item.itunes().and_then(|i| i.duration()),
        Err(FieldError::NotPopulated("Itunes duration"))
    );
}

#[test]
fn test_pub_date_with_wrong_weekday_still_parses() {
    let feed = decode(
        b"<rss><channel><item><pubDate>Mon, 02 Jan 2024 09:30:00 +0100</pubDate></item></channel></rss>",
    )
    .unwrap();
    let date = feed.items().unwrap()[0].date().unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 2));
}

#[test]
fn test_minutes_seconds_duration() {
    let feed = podcast();
    let item = &feed.items().unwrap()[2];
    assert_eq!(
        item.itunes().and_then(|i| i.duration()),
        Ok(Duration::from_secs(330))
    );
}

#[test]
fn test_item_without_extensions_reports_namespace_gate() {
    let feed = decode(br#"<rss><channel><item><title>Plain</title></item></channel></rss>"#).unwrap();
    let item = &feed.items().unwrap()[0];

    assert!(!item.is_itunes());
    assert!(!item.is_media_rss());
    assert_eq!(item.itunes().and_then(|i| i.author()), Err(FieldError::NotItunes));
    assert_eq!(
        item.media().and_then(|m| m.credits().map(|c| c.len())),
        Err(FieldError::NotMediaRss)
    );
    assert!(!item.has_enclosure());
    assert_eq!(
        item.enclosure().map(|_| ()),
        Err(FieldError::NotPopulated("Item enclosure"))
    );
}

// ============================================================================
// Namespace Handling
// ============================================================================

#[test]
fn test_namespace_gate_checked_before_emptiness() {
    let feed = decode(b"<rss><channel><title>No extensions</title></channel></rss>").unwrap();
    let channel = feed.channel();

    assert!(!channel.is_itunes());
    let err = channel.itunes().and_then(|i| i.author()).unwrap_err();
    assert_eq!(err, FieldError::NotItunes);
    assert!(!err.is_not_populated());
    assert_eq!(err.to_string(), "Not an Itunes RSS Feed");

    assert_eq!(
        channel.media().and_then(|m| m.rating()),
        Err(FieldError::NotMediaRss)
    );
}

#[test]
fn test_prefix_name_is_irrelevant() {
    let feed = decode(
        br#"<rss xmlns:pod="http://www.itunes.com/dtds/podcast-1.0.dtd">
              <channel><pod:author>Renamed Prefix</pod:author></channel>
            </rss>"#,
    )
    .unwrap();
    assert_eq!(
        feed.channel().itunes().and_then(|i| i.author()),
        Ok("Renamed Prefix")
    );
}

#[test]
fn test_colliding_tag_in_unknown_namespace_ignored() {
    let feed = decode(
        br#"<rss xmlns:other="http://example.com/ns">
              <channel>
                <other:title>Wrong</other:title>
                <title>Right</title>
                <other:item><title>Not an item</title></other:item>
              </channel>
            </rss>"#,
    )
    .unwrap();
    assert_eq!(feed.channel().title(), Ok("Right"));
    assert_eq!(feed.items().unwrap_err(), FieldError::NoItems);
}
