use crate::utils::error::{ForgifyError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            match url.scheme() {
                "http" | "https" => Ok(()),
                scheme => Err(ForgifyError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!("Unsupported URL scheme: {}", scheme),
                }),
            }
        }
        Err(e) => Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Accepts either a full Moxfield deck URL or a bare public deck id.
pub fn validate_deck_ref(field_name: &str, deck_ref: &str) -> Result<()> {
    if deck_ref.is_empty() {
        return Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: deck_ref.to_string(),
            reason: "Deck reference cannot be empty".to_string(),
        });
    }

    if deck_ref.contains("://") {
        validate_url(field_name, deck_ref)?;
        if !deck_ref.contains("moxfield.com/decks/") {
            return Err(ForgifyError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: deck_ref.to_string(),
                reason: "Expected a URL of the form https://moxfield.com/decks/<id>".to_string(),
            });
        }
        return Ok(());
    }

    if !deck_ref
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: deck_ref.to_string(),
            reason: "Deck id may only contain letters, digits, '_' and '-'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ForgifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
