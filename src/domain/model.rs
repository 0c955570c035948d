use serde::{Deserialize, Serialize};

/// A decklist as delivered by a deck source: the deck name as displayed on the
/// site, the number of commander lines at the top of the body, and the body
/// itself. The body is newline-separated card lines, optionally followed by a
/// blank line and a sideboard block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDeck {
    pub name: String,
    pub commander_count: u32,
    pub body_text: String,
}

/// One parsed card line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardEntry {
    pub quantity: u32,
    pub name: String,
    pub set_code: String,
}

impl CardEntry {
    /// Renders the entry in the Forge card-line form, e.g. `"4 Sol Ring|LEA|1"`.
    /// The trailing `1` is the art index Forge expects.
    pub fn to_dck_line(&self) -> String {
        format!("{} {}|{}|1", self.quantity, self.name, self.set_code)
    }
}

/// The fully formatted deck: the structured sections plus the rendered `.dck`
/// text they produce. `name` is already normalized for use as a file name.
#[derive(Debug, Clone)]
pub struct FormattedDeck {
    pub name: String,
    pub commanders: Vec<CardEntry>,
    pub mainboard: Vec<CardEntry>,
    pub sideboard: Vec<CardEntry>,
    pub dck_output: String,
}

impl FormattedDeck {
    pub fn file_name(&self) -> String {
        format!("{}.dck", self.name)
    }

    /// Total number of cards across all sections.
    pub fn card_count(&self) -> u32 {
        self.commanders
            .iter()
            .chain(&self.mainboard)
            .chain(&self.sideboard)
            .map(|entry| entry.quantity)
            .sum()
    }
}
