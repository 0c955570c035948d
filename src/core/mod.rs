pub mod engine;
pub mod formatter;
pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{CardEntry, FormattedDeck, RawDeck};
pub use crate::domain::ports::{ConfigProvider, DeckSource, Pipeline, Storage};
pub use crate::utils::error::Result;
