use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::HolderSource;
use super::PageRequest;
use super::TransferSource;
use crate::config::LedgerApiConfig;
use crate::constants::LEDGER_API_KEY_HEADER;
use crate::error::LedgerError;
use crate::model::Address;
use crate::model::FlowDirection;
use crate::model::RawTransfer;
use crate::model::TokenHolder;
use crate::model::TransferPage;

/// REST client for the ledger transfer/holder API.
pub struct HttpLedgerClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct HolderPage {
    items: Vec<HolderItem>,
}

#[derive(Debug, Deserialize)]
struct HolderItem {
    owner: String,
    #[serde(default)]
    owner_name: Option<String>,
    #[serde(default)]
    percentage: f64,
}

impl HttpLedgerClient {
    pub fn new(
        base_url: &str,
        api_key: String,
    ) -> Result<Self, LedgerError> {
        // A trailing slash keeps Url::join from eating the last path segment
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalized)?;

        Ok(Self {
            client: Client::new(),
            base_url,
            api_key,
        })
    }

    pub fn from_config(config: &LedgerApiConfig) -> crate::Result<Self> {
        let api_key = config.resolve_api_key()?;
        let client = Self::new(&config.base_url, api_key)?;
        Ok(client)
    }

    async fn get<T>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, LedgerError>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut url = self.base_url.join(endpoint)?;
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));

        let response = self
            .client
            .get(url)
            .header(LEDGER_API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerError::Api {
                status: status.as_u16(),
            });
        }

        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| LedgerError::MalformedResponse(e.to_string()))?;

        if !envelope.success {
            return Err(LedgerError::Unsuccessful { endpoint });
        }

        envelope
            .data
            .ok_or_else(|| LedgerError::MalformedResponse(format!("missing data field in {} response", endpoint)))
    }
}

#[async_trait]
impl TransferSource for HttpLedgerClient {
    async fn largest_transfers(
        &self,
        address: &Address,
        direction: FlowDirection,
        min_amount: f64,
        page: PageRequest,
    ) -> Result<TransferPage, LedgerError> {
        let query = [
            ("address", address.to_string()),
            ("flow", direction.to_string()),
            ("amount_min", min_amount.to_string()),
            ("page", page.page.to_string()),
            ("page_size", page.page_size.to_string()),
            ("sort_by", "amount".to_string()),
            ("sort_order", "desc".to_string()),
        ];

        let transfers: Vec<RawTransfer> = self.get("account/transfer", &query).await?;
        debug!("transfer_page_fetched::address::{}::flow::{}::records::{}", address, direction, transfers.len());

        Ok(TransferPage {
            transfers,
        })
    }
}

#[async_trait]
impl HolderSource for HttpLedgerClient {
    async fn top_holders(
        &self,
        mint: &str,
        limit: usize,
    ) -> Result<Vec<TokenHolder>, LedgerError> {
        let query = [
            ("address", mint.to_string()),
            ("page", "1".to_string()),
            ("page_size", limit.to_string()),
        ];

        let page: HolderPage = self.get("token/holders", &query).await?;
        let holders = page
            .items
            .into_iter()
            .filter(|item| !item.owner.is_empty())
            .map(|item| TokenHolder {
                address: Address::new(item.owner),
                display_name: item.owner_name,
                percent_of_supply: item.percentage,
            })
            .collect::<Vec<_>>();

        debug!("holder_page_fetched::mint::{}::holders::{}", mint, holders.len());
        Ok(holders)
    }
}
