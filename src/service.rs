/// Lookup service - the single entry point every transport calls
///
/// Raw user text goes in; a formatted reply or a `LookupError` comes out.
use crate::{
    card::{extract_bin, Bin, CardInfo},
    error::LookupError,
    format::format_card,
    metrics,
    resolver::BinResolver,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

/// Successful lookup, in both structured and display form
#[derive(Debug, Clone, Serialize)]
pub struct LookupReply {
    pub bin: Bin,
    pub data: CardInfo,
    pub formatted: String,
}

#[derive(Clone)]
pub struct LookupService {
    resolver: Arc<BinResolver>,
}

impl LookupService {
    pub fn new(resolver: Arc<BinResolver>) -> Self {
        Self { resolver }
    }

    /// Resolve free text to a formatted reply
    pub async fn resolve(&self, text: &str) -> Result<String, LookupError> {
        self.lookup(text).await.map(|reply| reply.formatted)
    }

    /// Resolve free text, keeping the structured card data
    pub async fn lookup(&self, text: &str) -> Result<LookupReply, LookupError> {
        let result = self.run(text).await;
        let outcome = match &result {
            Ok(_) => "found",
            Err(e) => e.outcome(),
        };
        metrics::record_lookup(outcome);
        result
    }

    async fn run(&self, text: &str) -> Result<LookupReply, LookupError> {
        let Some(bin) = extract_bin(text) else {
            debug!("no BIN in input");
            return Err(LookupError::InvalidInput);
        };

        match self.resolver.resolve(&bin).await {
            Ok(Some(data)) => {
                let formatted = format_card(&bin, &data);
                Ok(LookupReply {
                    bin,
                    data,
                    formatted,
                })
            }
            Ok(None) => Err(LookupError::NotFound),
            Err(e) => {
                error!(bin = %bin, error = %e, "BIN resolution failed");
                Err(LookupError::Unavailable)
            }
        }
    }
}
