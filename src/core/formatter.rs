use crate::core::normalize::normalize;
use crate::domain::model::{CardEntry, FormattedDeck, RawDeck};
use crate::utils::error::{ForgifyError, Result};

/// Turns a raw decklist into the Forge `.dck` representation.
///
/// The body splits at the first blank line: the first block holds the
/// commander lines followed by the main deck, the optional second block is
/// the sideboard. Parsing is all-or-nothing: the first malformed line aborts
/// the whole conversion and nothing is written downstream.
pub fn format_deck(raw: &RawDeck) -> Result<FormattedDeck> {
    let (main_block, side_block) = match raw.body_text.split_once("\n\n") {
        Some((main, side)) => (main, side),
        None => (raw.body_text.as_str(), ""),
    };

    let entries = parse_block(main_block)?;
    if entries.is_empty() {
        return Err(ForgifyError::ParseError {
            line: String::new(),
            message: "deck body contains no card lines".to_string(),
        });
    }

    let commander_count = raw.commander_count as usize;
    if commander_count > entries.len() {
        return Err(ForgifyError::ParseError {
            line: String::new(),
            message: format!(
                "commander count {} exceeds the {} card lines in the deck",
                commander_count,
                entries.len()
            ),
        });
    }

    let sideboard = parse_block(side_block)?;
    let mainboard = entries[commander_count..].to_vec();
    let mut commanders = entries;
    commanders.truncate(commander_count);

    let name = normalize(&raw.name);
    let dck_output = render_dck(&name, &commanders, &mainboard, &sideboard);

    Ok(FormattedDeck {
        name,
        commanders,
        mainboard,
        sideboard,
        dck_output,
    })
}

fn parse_block(block: &str) -> Result<Vec<CardEntry>> {
    block
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect()
}

/// Parses one `"<quantity> <name> (<set-code>) <extra>"` line. Anything after
/// the closing parenthesis (collector numbers, foil markers) is ignored. A
/// dual-faced name like `"Fire / Ice"` keeps only the front face.
fn parse_line(line: &str) -> Result<CardEntry> {
    let trimmed = line.trim();

    let (quantity_token, rest) = trimmed.split_once(' ').ok_or_else(|| parse_error(
        trimmed,
        "expected \"<quantity> <name> (<set-code>)\"",
    ))?;

    let quantity: u32 = quantity_token
        .parse()
        .map_err(|_| parse_error(trimmed, "leading token is not a card quantity"))?;
    if quantity == 0 {
        return Err(parse_error(trimmed, "card quantity must be positive"));
    }

    let (name_part, annotation) = rest
        .split_once('(')
        .ok_or_else(|| parse_error(trimmed, "missing '(' before the set code"))?;
    let (set_code, _extra) = annotation
        .split_once(')')
        .ok_or_else(|| parse_error(trimmed, "missing ')' after the set code"))?;

    let name = match name_part.split_once('/') {
        Some((front, _)) => front,
        None => name_part,
    };

    Ok(CardEntry {
        quantity,
        name: name.trim().to_string(),
        set_code: set_code.trim().to_string(),
    })
}

fn parse_error(line: &str, message: &str) -> ForgifyError {
    ForgifyError::ParseError {
        line: line.to_string(),
        message: message.to_string(),
    }
}

fn render_dck(
    name: &str,
    commanders: &[CardEntry],
    mainboard: &[CardEntry],
    sideboard: &[CardEntry],
) -> String {
    let mut lines = vec!["[metadata]".to_string(), format!("Name={}", name)];

    lines.push("[Commander]".to_string());
    lines.extend(commanders.iter().map(CardEntry::to_dck_line));

    lines.push("[Main]".to_string());
    lines.extend(mainboard.iter().map(CardEntry::to_dck_line));

    lines.push("[Sideboard]".to_string());
    lines.extend(sideboard.iter().map(CardEntry::to_dck_line));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, commander_count: u32, body: &str) -> RawDeck {
        RawDeck {
            name: name.to_string(),
            commander_count,
            body_text: body.to_string(),
        }
    }

    #[test]
    fn test_card_line_with_extra_tokens() {
        let deck = format_deck(&raw("Test", 0, "4 Lightning Bolt (2X2) 117 *F*")).unwrap();
        assert_eq!(deck.mainboard.len(), 1);
        assert_eq!(deck.mainboard[0].to_dck_line(), "4 Lightning Bolt|2X2|1");
    }

    #[test]
    fn test_dual_faced_name_keeps_front_face() {
        let deck = format_deck(&raw("Test", 0, "1 Fire / Ice (ISD)")).unwrap();
        assert_eq!(deck.mainboard[0].name, "Fire");
        assert_eq!(deck.mainboard[0].to_dck_line(), "1 Fire|ISD|1");
    }

    #[test]
    fn test_commander_split_preserves_order() {
        let body = "1 Thrasios, Triton Hero (C16)\n\
                    1 Tymna the Weaver (C16)\n\
                    1 Sol Ring (LEA)\n\
                    1 Mana Crypt (EMA)\n\
                    1 Command Tower (CMD)";
        let deck = format_deck(&raw("Partners", 2, body)).unwrap();

        assert_eq!(deck.commanders.len(), 2);
        assert_eq!(deck.commanders[0].name, "Thrasios, Triton Hero");
        assert_eq!(deck.commanders[1].name, "Tymna the Weaver");

        assert_eq!(deck.mainboard.len(), 3);
        assert_eq!(deck.mainboard[0].name, "Sol Ring");
        assert_eq!(deck.mainboard[2].name, "Command Tower");
    }

    #[test]
    fn test_round_trip_rendering() {
        let body = "1 Atraxa, Grand Unifier (ONE)\n99 Sol Ring (LEA)";
        let deck = format_deck(&raw("My Deck", 1, body)).unwrap();

        assert!(deck.dck_output.contains(
            "[Commander]\n1 Atraxa, Grand Unifier|ONE|1\n[Main]\n99 Sol Ring|LEA|1\n[Sideboard]"
        ));
        assert!(deck.dck_output.starts_with("[metadata]\nName=My Deck\n"));
        assert_eq!(deck.card_count(), 100);
    }

    #[test]
    fn test_sideboard_block_is_parsed() {
        let body = "1 Sol Ring (LEA)\n\n2 Negate (M20)\n1 Duress (M21)";
        let deck = format_deck(&raw("With Side", 0, body)).unwrap();

        assert_eq!(deck.mainboard.len(), 1);
        assert_eq!(deck.sideboard.len(), 2);
        assert!(deck
            .dck_output
            .ends_with("[Sideboard]\n2 Negate|M20|1\n1 Duress|M21|1"));
    }

    #[test]
    fn test_deck_name_is_normalized() {
        let deck = format_deck(&raw("Izzet/Spells \u{1F525}", 0, "1 Opt (XLN)")).unwrap();
        assert_eq!(deck.name, "Izzet Spells ");
        assert!(deck.dck_output.contains("Name=Izzet Spells \n"));
    }

    #[test]
    fn test_missing_quantity_is_a_parse_error() {
        let result = format_deck(&raw("Bad", 0, "Sol Ring (LEA)"));
        assert!(matches!(result, Err(ForgifyError::ParseError { .. })));
    }

    #[test]
    fn test_zero_quantity_is_a_parse_error() {
        let result = format_deck(&raw("Bad", 0, "0 Sol Ring (LEA)"));
        assert!(matches!(result, Err(ForgifyError::ParseError { .. })));
    }

    #[test]
    fn test_missing_set_code_is_a_parse_error() {
        assert!(matches!(
            format_deck(&raw("Bad", 0, "1 Sol Ring")),
            Err(ForgifyError::ParseError { .. })
        ));
        assert!(matches!(
            format_deck(&raw("Bad", 0, "1 Sol Ring (LEA")),
            Err(ForgifyError::ParseError { .. })
        ));
    }

    #[test]
    fn test_commander_count_overrun_is_a_parse_error() {
        let result = format_deck(&raw("Bad", 3, "1 Sol Ring (LEA)\n1 Opt (XLN)"));
        assert!(matches!(result, Err(ForgifyError::ParseError { .. })));
    }

    #[test]
    fn test_empty_body_is_a_parse_error() {
        let result = format_deck(&raw("Empty", 0, ""));
        assert!(matches!(result, Err(ForgifyError::ParseError { .. })));
    }
}
