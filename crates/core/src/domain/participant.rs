use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A registered participant of the exchange.
///
/// `name` is the unique key within a session. `contact` is an opaque
/// delivery address - the core never interprets it, the notification
/// adapter does. No ordering is enforced between `min_amount` and
/// `max_amount`; an inverted range is accepted as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub contact: String,
    pub suggestions: String,
    pub min_amount: f64,
    pub max_amount: f64,
}

impl Participant {
    /// Build a participant from already-parsed fields, rejecting empty
    /// name/contact and non-finite amounts.
    pub fn new(
        name: impl Into<String>,
        contact: impl Into<String>,
        suggestions: impl Into<String>,
        min_amount: f64,
        max_amount: f64,
    ) -> Result<Self> {
        let name = name.into();
        let contact = contact.into();
        let suggestions = suggestions.into();

        if name.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "name",
                reason: "must not be empty".to_string(),
            });
        }
        if contact.trim().is_empty() {
            return Err(CoreError::Validation {
                field: "contact",
                reason: "must not be empty".to_string(),
            });
        }
        if !min_amount.is_finite() {
            return Err(CoreError::Validation {
                field: "min_amount",
                reason: "must be a finite number".to_string(),
            });
        }
        if !max_amount.is_finite() {
            return Err(CoreError::Validation {
                field: "max_amount",
                reason: "must be a finite number".to_string(),
            });
        }

        Ok(Self {
            name: name.trim().to_string(),
            contact: contact.trim().to_string(),
            suggestions: suggestions.trim().to_string(),
            min_amount,
            max_amount,
        })
    }

    /// Build a participant from raw form text. Amount fields are parsed
    /// here so that type validation stays inside the core contract.
    pub fn from_form(
        name: &str,
        contact: &str,
        suggestions: &str,
        min_amount: &str,
        max_amount: &str,
    ) -> Result<Self> {
        let min = parse_amount("min_amount", min_amount)?;
        let max = parse_amount("max_amount", max_amount)?;
        Self::new(name, contact, suggestions, min, max)
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.contact)
    }
}

/// Parse an amount field entered as free text.
pub fn parse_amount(field: &'static str, text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation {
            field,
            reason: format!("'{}' is not a number", text.trim()),
        })?;

    if !value.is_finite() {
        return Err(CoreError::Validation {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    Ok(value)
}
