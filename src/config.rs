//! Decoder options, optionally loaded from a TOML file.
//!
//! The options file is optional. A missing file yields `DecodeOptions::default()`.
//! Unknown keys are silently ignored by serde (with `deny_unknown_fields` off),
//! though we log a warning when the file contains potential typos.
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// SEC-014: Config file exceeds maximum allowed size.
    #[error("Config file too large: {0}")]
    TooLarge(String),
}

// ============================================================================
// Options
// ============================================================================

/// Knobs for the XML layer underneath [`crate::decode_with`].
///
/// All fields use `#[serde(default)]` so any subset of keys can be specified.
/// None of them change field classification; they only bound or shape the
/// parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Trim leading and trailing whitespace from an element's text content.
    /// Whitespace between inline children is kept.
    pub trim_text: bool,

    /// SEC-003: Maximum element nesting depth (0 = unlimited).
    pub max_depth: usize,

    /// Maximum accepted document size in bytes (0 = unlimited).
    pub max_document_bytes: u64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trim_text: true,
            max_depth: 256,
            max_document_bytes: 0,
        }
    }
}

impl DecodeOptions {
    /// SEC-014: Maximum options file size (1 MB).
    const MAX_FILE_SIZE: u64 = 1_048_576;

    const KNOWN_KEYS: [&'static str; 3] = ["trim_text", "max_depth", "max_document_bytes"];

    /// Load options from a TOML file.
    ///
    /// A missing or empty file gives the defaults. Files over 1 MB are
    /// rejected without being read in full.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match read_capped(path, Self::MAX_FILE_SIZE)? {
            Some(content) => Self::from_toml(&content),
            None => {
                tracing::debug!(path = %path.display(), "No options file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse options from TOML text. Empty text yields the defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            tracing::debug!("Config is empty, using defaults");
            return Ok(Self::default());
        }

        if let Ok(raw) = content.parse::<toml::Table>() {
            for key in raw.keys() {
                if !Self::KNOWN_KEYS.contains(&key.as_str()) {
                    tracing::warn!(key = %key, "Unknown key in config file, ignoring");
                }
            }
        }

        let options: DecodeOptions = toml::from_str(content)?;
        tracing::info!(
            trim_text = options.trim_text,
            max_depth = options.max_depth,
            max_document_bytes = options.max_document_bytes,
            "Loaded decode options"
        );
        Ok(options)
    }
}

/// Reads at most `max` bytes of `path`; `None` when it does not exist.
fn read_capped(path: &Path, max: u64) -> Result<Option<String>, ConfigError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut content = String::new();
    file.take(max + 1).read_to_string(&mut content)?;
    if content.len() as u64 > max {
        // SEC-014
        return Err(ConfigError::TooLarge(format!(
            "options file exceeds {} bytes",
            max
        )));
    }
    Ok(Some(content))
}

// ============================================================================
// Tests
// ============================================================================
