/// binlist.net adapter (API version 3)
use super::{endpoint, fetch_json, first_present, prepaid_from_value, settle, BinProvider};
use crate::{
    card::{Bank, Bin, CardInfo, Country},
    error::BotResult,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Response shape of `GET /{bin}`
///
/// Extra fields (`number`, `country.emoji`, `bank.city`, ...) are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct BinlistResponse {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub prepaid: Option<serde_json::Value>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub bank: Option<Bank>,
}

impl From<BinlistResponse> for CardInfo {
    fn from(raw: BinlistResponse) -> Self {
        CardInfo {
            scheme: first_present(raw.scheme, None),
            card_type: first_present(raw.card_type, None),
            brand: first_present(raw.brand, None),
            prepaid: prepaid_from_value(raw.prepaid.as_ref()),
            country: raw.country,
            bank: raw.bank,
        }
    }
}

pub struct BinlistProvider {
    client: Client,
    base_url: String,
}

impl BinlistProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn fetch(&self, bin: &Bin) -> BotResult<Option<CardInfo>> {
        let request = self
            .client
            .get(endpoint(&self.base_url, bin))
            .header("Accept-Version", "3");

        let raw: Option<BinlistResponse> = fetch_json(request).await?;
        Ok(raw.map(CardInfo::from))
    }
}

#[async_trait]
impl BinProvider for BinlistProvider {
    fn name(&self) -> &str {
        "binlist"
    }

    async fn lookup(&self, bin: &Bin) -> Option<CardInfo> {
        settle(self.name(), bin, self.fetch(bin)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: serde_json::Value) -> CardInfo {
        let raw: BinlistResponse = serde_json::from_value(value).unwrap();
        CardInfo::from(raw)
    }

    #[test]
    fn test_maps_full_response() {
        let info = map(json!({
            "number": { "length": 16, "luhn": true },
            "scheme": "visa",
            "type": "debit",
            "brand": "Visa/Dankort",
            "prepaid": false,
            "country": {
                "numeric": "208",
                "alpha2": "DK",
                "name": "Denmark",
                "emoji": "🇩🇰",
                "currency": "DKK"
            },
            "bank": {
                "name": "Jyske Bank",
                "url": "www.jyskebank.dk",
                "phone": "+4589893300",
                "city": "Hjørring"
            }
        }));

        assert_eq!(info.scheme(), Some("visa"));
        assert_eq!(info.card_type(), Some("debit"));
        assert_eq!(info.brand(), Some("Visa/Dankort"));
        assert_eq!(info.prepaid, Some(false));
        assert_eq!(info.country_code(), Some("DK"));
        assert_eq!(info.country_name(), Some("Denmark"));
        assert_eq!(info.bank_name(), Some("Jyske Bank"));
        assert_eq!(info.bank_phone(), Some("+4589893300"));
    }

    #[test]
    fn test_empty_object_is_empty_result() {
        assert!(map(json!({})).is_empty());
    }

    #[test]
    fn test_null_fields_tolerated() {
        let info = map(json!({ "scheme": "mastercard", "prepaid": null, "bank": {} }));
        assert_eq!(info.scheme(), Some("mastercard"));
        assert_eq!(info.prepaid, None);
        assert_eq!(info.bank_name(), None);
    }
}
