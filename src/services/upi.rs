// src/services/upi.rs
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpiIdError {
    #[error("UPI ID is required")]
    Missing,
    #[error("Invalid UPI ID format")]
    InvalidFormat,
}

/// A `local@domain` payment address, borrowed from the request body.
#[derive(Debug, PartialEq, Eq)]
pub struct UpiId<'a> {
    pub local: &'a str,
    pub domain: &'a str,
}

impl<'a> UpiId<'a> {
    /// Exactly one `@`, with text on both sides.
    pub fn parse(raw: &'a str) -> Result<Self, UpiIdError> {
        if raw.is_empty() {
            return Err(UpiIdError::Missing);
        }
        let mut parts = raw.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self { local, domain })
            }
            _ => Err(UpiIdError::InvalidFormat),
        }
    }

    /// Local part with its first character upper-cased.
    pub fn display_name(&self) -> String {
        let mut chars = self.local.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
