use crate::domain::model::{FormattedDeck, RawDeck};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Fetch capability: anything that can turn a deck reference (URL or id) into
/// a [`RawDeck`]. The core never knows which mechanism ran behind it.
pub trait DeckSource: Send + Sync {
    fn fetch_deck(
        &self,
        deck_ref: &str,
    ) -> impl std::future::Future<Output = Result<RawDeck>> + Send;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn deck_ref(&self) -> &str;
    fn savepath(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<RawDeck>;
    async fn format(&self, raw: RawDeck) -> Result<FormattedDeck>;
    async fn write(&self, deck: FormattedDeck) -> Result<String>;
}
