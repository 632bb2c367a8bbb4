//! Command-line arguments and how they combine with the config file.
//!
//! Precedence: flags > config file > built-in defaults.

use crate::app::Source;
use crate::emphasis::{EmphasisParams, Mode, Rgb};
use crate::engine::config::Config;
use crate::output::OutputFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "salient")]
#[command(about = "Emphasize the start of each word to aid reading focus")]
#[command(version)]
pub struct Cli {
    /// File to read (.txt, .docx or .pdf); `-` or nothing reads stdin
    pub input: Option<PathBuf>,

    /// Emphasize this text instead of reading a file
    #[arg(short, long, conflicts_with_all = ["input", "clipboard"])]
    pub text: Option<String>,

    /// Read the text from the system clipboard
    #[arg(long, conflicts_with = "input")]
    pub clipboard: bool,

    /// Declared MIME type of INPUT, overriding its extension
    #[arg(long, requires = "input")]
    pub mime: Option<String>,

    /// Emphasis mode
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Portion of each word to emphasize (0.0-1.0)
    #[arg(short, long)]
    pub ratio: Option<f64>,

    /// Minimum word length to modify
    #[arg(short = 'n', long)]
    pub min_length: Option<usize>,

    /// Also emphasize words containing digits
    #[arg(long)]
    pub alnum: bool,

    /// Gradient start color
    #[arg(long = "from", value_name = "#RRGGBB")]
    pub gradient_start: Option<Rgb>,

    /// Gradient end color
    #[arg(long = "to", value_name = "#RRGGBB")]
    pub gradient_end: Option<Rgb>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn source(&self) -> Source {
        if let Some(text) = &self.text {
            return Source::Text(text.clone());
        }
        if self.clipboard {
            return Source::Clipboard;
        }
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Source::File {
                path: path.clone(),
                mime: self.mime.clone(),
            },
            _ => Source::Stdin,
        }
    }

    /// Applies flags on top of `config` and produces the final run settings.
    pub fn settings(&self, mut config: Config) -> (EmphasisParams, OutputFormat) {
        let emphasis = &mut config.emphasis;
        if let Some(mode) = self.mode {
            emphasis.mode = mode;
        }
        if let Some(ratio) = self.ratio {
            emphasis.ratio = ratio;
        }
        if let Some(min_length) = self.min_length {
            emphasis.min_length = i64::try_from(min_length).unwrap_or(i64::MAX);
        }
        if self.alnum {
            emphasis.alpha_only = false;
            emphasis.include_numbers = true;
        }
        if let Some(start) = self.gradient_start {
            emphasis.gradient_start = start;
        }
        if let Some(end) = self.gradient_end {
            emphasis.gradient_end = end;
        }

        let format = self.format.unwrap_or(config.output.format);
        (config.emphasis.to_params(), format)
    }
}
