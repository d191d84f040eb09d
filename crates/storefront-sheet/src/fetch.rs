use std::time::Duration;

use reqwest::Client;
use storefront_core::Product;

use crate::error::SheetError;
use crate::reader::load_products_from_bytes;
use crate::rows::ImportOptions;

/// Downloads catalog workbooks over HTTP.
///
/// One request per call: no retries, and no coordination between
/// overlapping calls.
pub struct WorkbookFetcher {
    client: Client,
}

impl WorkbookFetcher {
    /// Creates a fetcher with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, SheetError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Downloads the raw bytes at `url`.
    ///
    /// # Errors
    ///
    /// - [`SheetError::UnexpectedStatus`]: any non-2xx response.
    /// - [`SheetError::Http`]: network or TLS failure.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SheetError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(url, size = bytes.len(), "downloaded catalog workbook");
        Ok(bytes.to_vec())
    }

    /// Downloads and normalizes the workbook at `url`.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::fetch_bytes`] errors and workbook parse failures.
    pub async fn fetch_products(
        &self,
        url: &str,
        opts: &ImportOptions,
    ) -> Result<Vec<Product>, SheetError> {
        let bytes = self.fetch_bytes(url).await?;
        let products = load_products_from_bytes(bytes, opts)?;
        tracing::info!(url, imported = products.len(), "loaded remote catalog workbook");
        Ok(products)
    }
}
