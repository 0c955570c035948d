pub mod config;
pub mod core;
pub mod domain;
pub mod moxfield;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, LocalStorage};
pub use config::{RunConfig, Settings};
pub use core::{engine::ConvertEngine, pipeline::DeckPipeline};
pub use domain::model::{CardEntry, FormattedDeck, RawDeck};
pub use moxfield::MoxfieldSource;
pub use utils::error::{ForgifyError, Result};
