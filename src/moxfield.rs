use crate::domain::model::RawDeck;
use crate::domain::ports::DeckSource;
use crate::utils::error::{ForgifyError, Result};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api2.moxfield.com";

// Moxfield rejects the default reqwest user agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
(KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Boards arrive keyed by card name; BTreeMap keeps the rendered line order
/// deterministic across runs.
#[derive(Debug, Deserialize)]
struct DeckResponse {
    name: String,
    #[serde(default)]
    commanders: BTreeMap<String, BoardEntry>,
    #[serde(default)]
    mainboard: BTreeMap<String, BoardEntry>,
    #[serde(default)]
    sideboard: BTreeMap<String, BoardEntry>,
}

#[derive(Debug, Deserialize)]
struct BoardEntry {
    quantity: u32,
    card: CardInfo,
}

#[derive(Debug, Deserialize)]
struct CardInfo {
    name: String,
    set: String,
    #[serde(default)]
    cn: Option<String>,
}

/// Fetches decks through Moxfield's public JSON API and renders them into the
/// same export text block the website shows, so the formatter sees identical
/// input no matter how the deck was obtained.
pub struct MoxfieldSource {
    client: Client,
    base_url: String,
}

impl MoxfieldSource {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_base_url(DEFAULT_API_BASE, timeout)
    }

    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Extracts the public deck id from a full deck URL, or accepts a bare id.
    pub fn deck_id(deck_ref: &str) -> Result<String> {
        let re = Regex::new(r"moxfield\.com/decks/([A-Za-z0-9_-]+)")
            .expect("deck id pattern is valid");
        if let Some(caps) = re.captures(deck_ref) {
            return Ok(caps[1].to_string());
        }

        let looks_like_id = !deck_ref.is_empty()
            && deck_ref
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if looks_like_id {
            return Ok(deck_ref.to_string());
        }

        Err(ForgifyError::ValidationError {
            message: format!("{:?} is neither a Moxfield deck URL nor a deck id", deck_ref),
        })
    }
}

impl DeckSource for MoxfieldSource {
    async fn fetch_deck(&self, deck_ref: &str) -> Result<RawDeck> {
        let id = Self::deck_id(deck_ref)?;
        let url = format!("{}/v2/decks/all/{}", self.base_url, id);

        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("user-agent", USER_AGENT)
            .send()
            .await?;
        tracing::debug!("Moxfield response status: {}", response.status());

        let body = response.error_for_status()?.text().await?;
        let deck: DeckResponse = serde_json::from_str(&body)?;

        Ok(build_raw_deck(deck))
    }
}

/// Renders the boards into the export text block: commander lines first, then
/// the mainboard, then a blank line and the sideboard when one exists.
fn build_raw_deck(deck: DeckResponse) -> RawDeck {
    let commander_lines = board_lines(&deck.commanders);
    let commander_count = commander_lines.len() as u32;

    let mut lines = commander_lines;
    lines.extend(board_lines(&deck.mainboard));
    let mut body_text = lines.join("\n");

    let side_lines = board_lines(&deck.sideboard);
    if !side_lines.is_empty() {
        body_text.push_str("\n\n");
        body_text.push_str(&side_lines.join("\n"));
    }

    RawDeck {
        name: deck.name,
        commander_count,
        body_text,
    }
}

fn board_lines(board: &BTreeMap<String, BoardEntry>) -> Vec<String> {
    board
        .values()
        .map(|entry| {
            let set = entry.card.set.to_uppercase();
            match &entry.card.cn {
                Some(cn) => format!("{} {} ({}) {}", entry.quantity, entry.card.name, set, cn),
                None => format!("{} {} ({})", entry.quantity, entry.card.name, set),
            }
        })
        .collect()
}
