use crate::core::formatter;
use crate::core::{ConfigProvider, DeckSource, FormattedDeck, Pipeline, RawDeck, Storage};
use crate::utils::error::Result;

/// The fetch → format → write stages for a single deck, generic over the
/// fetch mechanism, the storage backend and the configuration source.
pub struct DeckPipeline<F: DeckSource, S: Storage, C: ConfigProvider> {
    source: F,
    storage: S,
    config: C,
}

impl<F: DeckSource, S: Storage, C: ConfigProvider> DeckPipeline<F, S, C> {
    pub fn new(source: F, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<F: DeckSource, S: Storage, C: ConfigProvider> Pipeline for DeckPipeline<F, S, C> {
    async fn fetch(&self) -> Result<RawDeck> {
        tracing::debug!("Fetching decklist for: {}", self.config.deck_ref());
        let raw = self.source.fetch_deck(self.config.deck_ref()).await?;

        tracing::debug!(
            "Fetched deck {:?} ({} commander line(s), {} body bytes)",
            raw.name,
            raw.commander_count,
            raw.body_text.len()
        );
        Ok(raw)
    }

    async fn format(&self, raw: RawDeck) -> Result<FormattedDeck> {
        let deck = formatter::format_deck(&raw)?;
        tracing::debug!(
            "Formatted {:?}: {} commander(s), {} main, {} sideboard",
            deck.name,
            deck.commanders.len(),
            deck.mainboard.len(),
            deck.sideboard.len()
        );
        Ok(deck)
    }

    async fn write(&self, deck: FormattedDeck) -> Result<String> {
        let file_name = deck.file_name();

        tracing::debug!(
            "Writing {} bytes to {:?}",
            deck.dck_output.len(),
            file_name
        );
        self.storage
            .write_file(&file_name, deck.dck_output.as_bytes())
            .await?;

        Ok(format!("{}/{}", self.config.savepath(), file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ForgifyError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockSource {
        deck: RawDeck,
    }

    impl DeckSource for MockSource {
        async fn fetch_deck(&self, _deck_ref: &str) -> Result<RawDeck> {
            Ok(self.deck.clone())
        }
    }

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn file_count(&self) -> usize {
            self.files.lock().await.len()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        deck_ref: String,
        savepath: String,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                deck_ref: "abc123".to_string(),
                savepath: "decks".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn deck_ref(&self) -> &str {
            &self.deck_ref
        }

        fn savepath(&self) -> &str {
            &self.savepath
        }
    }

    fn sample_deck() -> RawDeck {
        RawDeck {
            name: "Atraxa Superfriends".to_string(),
            commander_count: 1,
            body_text: "1 Atraxa, Grand Unifier (ONE)\n99 Sol Ring (LEA)".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_passes_through_source_deck() {
        let pipeline = DeckPipeline::new(
            MockSource {
                deck: sample_deck(),
            },
            MockStorage::new(),
            MockConfig::new(),
        );

        let raw = pipeline.fetch().await.unwrap();
        assert_eq!(raw.name, "Atraxa Superfriends");
        assert_eq!(raw.commander_count, 1);
    }

    #[tokio::test]
    async fn test_format_and_write_produce_dck_file() {
        let storage = MockStorage::new();
        let pipeline = DeckPipeline::new(
            MockSource {
                deck: sample_deck(),
            },
            storage.clone(),
            MockConfig::new(),
        );

        let raw = pipeline.fetch().await.unwrap();
        let deck = pipeline.format(raw).await.unwrap();
        let output_path = pipeline.write(deck).await.unwrap();

        assert_eq!(output_path, "decks/Atraxa Superfriends.dck");

        let data = storage.get_file("Atraxa Superfriends.dck").await.unwrap();
        let content = String::from_utf8(data).unwrap();
        assert_eq!(
            content,
            "[metadata]\nName=Atraxa Superfriends\n[Commander]\n\
             1 Atraxa, Grand Unifier|ONE|1\n[Main]\n99 Sol Ring|LEA|1\n[Sideboard]"
        );
    }

    #[tokio::test]
    async fn test_format_failure_writes_nothing() {
        let storage = MockStorage::new();
        let pipeline = DeckPipeline::new(
            MockSource {
                deck: RawDeck {
                    name: "Broken".to_string(),
                    commander_count: 0,
                    body_text: "Sol Ring (LEA)".to_string(),
                },
            },
            storage.clone(),
            MockConfig::new(),
        );

        let raw = pipeline.fetch().await.unwrap();
        let result = pipeline.format(raw).await;

        assert!(matches!(result, Err(ForgifyError::ParseError { .. })));
        assert_eq!(storage.file_count().await, 0);
    }
}
