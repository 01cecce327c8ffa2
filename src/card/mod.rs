/// Card metadata model
///
/// `Bin` is the canonical lookup key and `CardInfo` is the provider-neutral
/// result every adapter maps its response into.

pub mod normalize;

pub use normalize::{contains_bin_candidate, extract_bin};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of digits that identify an issuer
pub const BIN_MIN_LEN: usize = 6;

/// Longest prefix used as a lookup key
pub const BIN_MAX_LEN: usize = 8;

/// Bank Identification Number: 6 to 8 ASCII digits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Bin(String);

impl Bin {
    /// Accept an already-canonical digit string
    pub fn parse(value: &str) -> Option<Self> {
        let len_ok = (BIN_MIN_LEN..=BIN_MAX_LEN).contains(&value.len());
        if len_ok && value.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issuing country
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha2: Option<String>,
}

/// Issuing bank
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Normalized card metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// `None` when the provider does not know
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepaid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank: Option<Bank>,
}

/// Blank strings count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl CardInfo {
    pub fn scheme(&self) -> Option<&str> {
        present(&self.scheme)
    }

    pub fn card_type(&self) -> Option<&str> {
        present(&self.card_type)
    }

    pub fn brand(&self) -> Option<&str> {
        present(&self.brand)
    }

    pub fn bank_name(&self) -> Option<&str> {
        self.bank.as_ref().and_then(|b| present(&b.name))
    }

    pub fn bank_url(&self) -> Option<&str> {
        self.bank.as_ref().and_then(|b| present(&b.url))
    }

    pub fn bank_phone(&self) -> Option<&str> {
        self.bank.as_ref().and_then(|b| present(&b.phone))
    }

    pub fn country_name(&self) -> Option<&str> {
        self.country.as_ref().and_then(|c| present(&c.name))
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country.as_ref().and_then(|c| present(&c.alpha2))
    }

    /// A result with neither scheme nor bank name is treated as "not found"
    pub fn is_empty(&self) -> bool {
        self.scheme().is_none() && self.bank_name().is_none()
    }
}

/// Parse the textual yes/no forms some providers use for booleans
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "y" | "1" => Some(true),
        "no" | "false" | "n" | "0" => Some(false),
        _ => None,
    }
}
