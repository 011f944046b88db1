use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use models::asset::DaySummary;

use super::repository::AssetService;
use crate::errors::ServiceError;

/// Upstream payload; only the price range is kept.
#[derive(Debug, Deserialize)]
struct UpstreamDaySummary {
    highest: f64,
    lowest: f64,
}

/// Fetches previous-day summaries from a Mercado Bitcoin style endpoint:
/// `GET {base_url}/{symbol}/day-summary/{year}/{month}/{day}/`.
#[derive(Clone)]
pub struct HttpAssetService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAssetService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Upstream(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn day_summary_url(&self, symbol: &str, date: NaiveDate) -> String {
        format!(
            "{}/{}/day-summary/{}/{}/{}/",
            self.base_url,
            symbol,
            date.format("%Y"),
            date.format("%-m"),
            date.format("%-d"),
        )
    }

    /// Summary of `symbol` for a specific calendar day.
    #[instrument(skip(self))]
    pub async fn day_summary_on(&self, symbol: &str, date: NaiveDate) -> Result<DaySummary, ServiceError> {
        let url = self.day_summary_url(symbol, date);
        debug!(%url, "requesting day summary");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ServiceError::Upstream(format!("request for {symbol} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(%symbol, %status, "day summary lookup rejected");
            return Err(ServiceError::Upstream(format!("day summary for {symbol} failed: HTTP {status}")));
        }

        let body = resp
            .json::<UpstreamDaySummary>()
            .await
            .map_err(|e| ServiceError::Upstream(format!("invalid day summary for {symbol}: {e}")))?;
        Ok(DaySummary { symbol: symbol.to_string(), highest: body.highest, lowest: body.lowest })
    }
}

fn yesterday() -> NaiveDate {
    let today = Utc::now().date_naive();
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

#[async_trait]
impl AssetService for HttpAssetService {
    async fn day_summary(&self, symbol: &str) -> Result<DaySummary, ServiceError> {
        self.day_summary_on(symbol, yesterday()).await
    }
}
