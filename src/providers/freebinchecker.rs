/// freebinchecker.com adapter
use super::{endpoint, fetch_json, first_present, prepaid_from_value, settle, BinProvider};
use crate::{
    card::{Bank, Bin, CardInfo, Country},
    error::BotResult,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Nested card block; some responses put these fields at the top level instead
#[derive(Debug, Default, Deserialize)]
pub struct FreeBinCheckerCard {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub prepaid: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FreeBinCheckerResponse {
    #[serde(default)]
    pub valid: Option<bool>,
    #[serde(default)]
    pub card: Option<FreeBinCheckerCard>,
    #[serde(default)]
    pub issuer: Option<Bank>,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(rename = "type", default)]
    pub card_type: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub prepaid: Option<serde_json::Value>,
    #[serde(default)]
    pub bank: Option<Bank>,
}

impl FreeBinCheckerResponse {
    /// Map to `CardInfo`, or `None` for the `valid: false` placeholder
    pub fn into_card_info(self) -> Option<CardInfo> {
        let has_data = self.card.is_some() || self.issuer.is_some() || self.country.is_some();
        if !self.valid.unwrap_or(false) || !has_data {
            return None;
        }

        let card = self.card.unwrap_or_default();
        let issuer = self.issuer.unwrap_or_default();
        let bank = self.bank.unwrap_or_default();

        let prepaid = prepaid_from_value(card.prepaid.as_ref())
            .or_else(|| prepaid_from_value(self.prepaid.as_ref()));

        let bank = Bank {
            name: first_present(issuer.name, bank.name),
            url: first_present(issuer.url, bank.url),
            phone: first_present(issuer.phone, bank.phone),
        };

        Some(CardInfo {
            scheme: first_present(card.scheme, self.scheme),
            card_type: first_present(card.card_type, self.card_type),
            brand: first_present(card.category, self.brand),
            prepaid,
            country: self.country,
            bank: Some(bank),
        })
    }
}

pub struct FreeBinCheckerProvider {
    client: Client,
    base_url: String,
}

impl FreeBinCheckerProvider {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    async fn fetch(&self, bin: &Bin) -> BotResult<Option<CardInfo>> {
        let request = self.client.get(endpoint(&self.base_url, bin));
        let raw: Option<FreeBinCheckerResponse> = fetch_json(request).await?;
        Ok(raw.and_then(FreeBinCheckerResponse::into_card_info))
    }
}

#[async_trait]
impl BinProvider for FreeBinCheckerProvider {
    fn name(&self) -> &str {
        "freebinchecker"
    }

    async fn lookup(&self, bin: &Bin) -> Option<CardInfo> {
        settle(self.name(), bin, self.fetch(bin)).await
    }
}
