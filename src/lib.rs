//! Reading-emphasis utility: re-renders each word with its leading portion
//! bolded, spaced, or colored along a gradient to aid reading focus.
//!
//! ```
//! use salient::{emphasize, EmphasisParams};
//!
//! let out = emphasize("Hello, world!", &EmphasisParams::default());
//! assert_eq!(out, "**He**llo, **wo**rld!");
//! ```

pub mod app;
pub mod cli;
pub mod emphasis;
pub mod engine;
pub mod input;
pub mod output;

pub use app::{App, Source};
pub use emphasis::{annotate, emphasize, tokenize, EmphasisParams, Mode, Qualify, Rgb};
pub use input::{DocumentKind, LoadError, LoadedDocument};
pub use output::OutputFormat;
