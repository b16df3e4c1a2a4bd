use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Input read when no path is given on the command line.
pub const DEFAULT_INPUT: &str = "russian_names.csv";
pub const DEFAULT_RARE_THRESHOLD: u64 = 5;
pub const DEFAULT_COMMON_THRESHOLD: u64 = 50;
pub const DEFAULT_GENDERS: [&str; 2] = ["female", "male"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines in the chosen locale
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

// ---------------------------------------------------------------------------
// RunConfig – everything one batch run needs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub rare_threshold: u64,
    pub common_threshold: u64,
    /// Genders reported by the per-gender maximum, in output order.
    pub genders: Vec<String>,
    pub locale: Locale,
    pub format: OutputFormat,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            rare_threshold: DEFAULT_RARE_THRESHOLD,
            common_threshold: DEFAULT_COMMON_THRESHOLD,
            genders: DEFAULT_GENDERS.iter().map(|g| g.to_string()).collect(),
            locale: Locale::default(),
            format: OutputFormat::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Every flag is optional; a bare invocation reproduces the default run.
#[derive(Parser, Debug)]
#[command(
    name = "name-stats",
    version,
    about = "Descriptive statistics over name/gender/count records"
)]
pub struct Cli {
    /// Records file (whitespace-separated triples, or .json)
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Records with a count below this are rare
    #[arg(long, default_value_t = DEFAULT_RARE_THRESHOLD)]
    pub rare: u64,

    /// Records with a count above this are common
    #[arg(long, default_value_t = DEFAULT_COMMON_THRESHOLD)]
    pub common: u64,

    /// Gender to report a most popular name for (repeatable)
    #[arg(long = "gender", value_name = "GENDER")]
    pub genders: Vec<String>,

    /// Language of the text report
    #[arg(long, value_enum, default_value = "en")]
    pub locale: Locale,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        let genders = if self.genders.is_empty() {
            RunConfig::default().genders
        } else {
            self.genders
        };
        RunConfig {
            input: self.input,
            rare_threshold: self.rare,
            common_threshold: self.common,
            genders,
            locale: self.locale,
            format: self.format,
        }
    }
}
