/// bininfo.io adapter
use super::{endpoint, fetch_json, first_present, settle, BinProvider};
use crate::{
    card::{Bank, Bin, CardInfo, Country},
    error::BotResult,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Flat response shape; `bin` may come back as a number or a string
#[derive(Debug, Default, Deserialize)]
pub struct BinInfoResponse {
    #[serde(default)]
    pub bin: Option<serde_json::Value>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    /// "Yes" / "No"; other values (including JSON bools) mean unknown
    #[serde(default)]
    pub prepaid: Option<serde_json::Value>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_url: Option<String>,
    #[serde(default)]
    pub bank_phone: Option<String>,
}

fn has_bin(value: &Option<serde_json::Value>) -> bool {
    match value {
        Some(serde_json::Value::String(s)) => !s.trim().is_empty(),
        Some(serde_json::Value::Number(_)) => true,
        _ => false,
    }
}

/// bininfo only ever says "Yes" or "No"
fn prepaid_from_yes_no(value: Option<&serde_json::Value>) -> Option<bool> {
    let text = value?.as_str()?.trim();
    if text.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if text.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}

impl BinInfoResponse {
    /// Map to `CardInfo`, or `None` when the key fields are missing
    pub fn into_card_info(self) -> Option<CardInfo> {
        let scheme = first_present(self.scheme, None);
        let bank_name = first_present(self.bank_name, None);
        let country_code = first_present(self.country_code, None);

        let has_key_field = scheme.is_some() || bank_name.is_some() || country_code.is_some();
        if !has_bin(&self.bin) || !has_key_field {
            return None;
        }

        Some(CardInfo {
            scheme,
            card_type: first_present(self.card_type, None),
            brand: first_present(self.brand, None),
            prepaid: prepaid_from_yes_no(self.prepaid.as_ref()),
            country: Some(Country {
                name: first_present(self.country_name, None),
                alpha2: country_code,
            }),
            bank: Some(Bank {
                name: bank_name,
                url: first_present(self.bank_url, None),
                phone: first_present(self.bank_phone, None),
            }),
        })
    }
}

pub struct BinInfoProvider {
    client: Client,
    base_url: String,
}

impl BinInfoProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn fetch(&self, bin: &Bin) -> BotResult<Option<CardInfo>> {
        let request = self.client.get(endpoint(&self.base_url, bin));
        let raw: Option<BinInfoResponse> = fetch_json(request).await?;
        Ok(raw.and_then(BinInfoResponse::into_card_info))
    }
}

#[async_trait]
impl BinProvider for BinInfoProvider {
    fn name(&self) -> &str {
        "bininfo"
    }

    async fn lookup(&self, bin: &Bin) -> Option<CardInfo> {
        settle(self.name(), bin, self.fetch(bin)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> Option<CardInfo> {
        let raw: BinInfoResponse = serde_json::from_value(value).unwrap();
        raw.into_card_info()
    }

    #[test]
    fn test_maps_flat_response() {
        let info = map(json!({
            "bin": "537541",
            "scheme": "mastercard",
            "type": "debit",
            "brand": "Standard",
            "prepaid": "Yes",
            "country_name": "Ukraine",
            "country_code": "UA",
            "bank_name": "PrivatBank",
            "bank_url": "privatbank.ua",
            "bank_phone": "3700"
        }))
        .unwrap();

        assert_eq!(info.scheme(), Some("mastercard"));
        assert_eq!(info.prepaid, Some(true));
        assert_eq!(info.country_code(), Some("UA"));
        assert_eq!(info.bank_name(), Some("PrivatBank"));
        assert_eq!(info.bank_url(), Some("privatbank.ua"));
    }

    #[test]
    fn test_prepaid_vocabulary() {
        let base = |prepaid: serde_json::Value| {
            map(json!({ "bin": 457173, "scheme": "visa", "prepaid": prepaid })).unwrap()
        };
        assert_eq!(base(json!("Yes")).prepaid, Some(true));
        assert_eq!(base(json!("No")).prepaid, Some(false));
        assert_eq!(base(json!("Unknown")).prepaid, None);
        assert_eq!(base(json!(null)).prepaid, None);
    }

    #[test]
    fn test_unexpected_prepaid_type_keeps_answer() {
        let info = map(json!({
            "bin": "457173",
            "scheme": "visa",
            "bank_name": "X",
            "prepaid": false
        }))
        .unwrap();

        assert_eq!(info.scheme(), Some("visa"));
        assert_eq!(info.bank_name(), Some("X"));
        assert_eq!(info.prepaid, None);

        let numeric = map(json!({ "bin": 457173, "scheme": "visa", "prepaid": 1 })).unwrap();
        assert_eq!(numeric.prepaid, None);
    }

    #[test]
    fn test_placeholder_rejected() {
        assert!(map(json!({ "scheme": "visa" })).is_none());
        assert!(map(json!({ "bin": "457173" })).is_none());
        assert!(map(json!({ "bin": "", "bank_name": "X" })).is_none());
    }

    #[test]
    fn test_country_only_is_accepted_but_empty() {
        let info = map(json!({ "bin": "457173", "country_code": "DE" })).unwrap();
        assert!(info.is_empty());
    }
}
