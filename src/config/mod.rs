#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

use crate::core::ConfigProvider;

pub use settings::Settings;

/// Configuration for one conversion run: the deck to fetch and the directory
/// to write into. Resolved up front from the CLI arguments and the persisted
/// settings, then passed into the pipeline explicitly.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub deck_ref: String,
    pub savepath: String,
}

impl ConfigProvider for RunConfig {
    fn deck_ref(&self) -> &str {
        &self.deck_ref
    }

    fn savepath(&self) -> &str {
        &self.savepath
    }
}
