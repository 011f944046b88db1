use futures::future::try_join_all;
use tracing::{debug, instrument};

use models::asset::DaySummary;

use super::repository::AssetService;
use crate::errors::ServiceError;

/// Look up every symbol concurrently and return the summaries in `symbols` order.
///
/// All lookups are polled together on the calling task. The first failure
/// ends the join and drops the lookups still in flight; no partial list is
/// returned. An empty slice resolves immediately to an empty list.
///
/// # Examples
/// ```
/// use service::assets::{collect_day_summaries, repository::mock::StubAssetService};
/// let assets = StubAssetService::new();
/// let symbols = vec!["BTC".to_string(), "ETH".to_string()];
/// let out = tokio_test::block_on(collect_day_summaries(&assets, &symbols)).unwrap();
/// assert_eq!(out[0].symbol, "BTC");
/// assert_eq!(out[1].symbol, "ETH");
/// ```
#[instrument(skip(assets, symbols), fields(count = symbols.len()))]
pub async fn collect_day_summaries<A>(assets: &A, symbols: &[String]) -> Result<Vec<DaySummary>, ServiceError>
where
    A: AssetService + ?Sized,
{
    let lookups = symbols.iter().map(|symbol| assets.day_summary(symbol));
    let summaries = try_join_all(lookups).await?;
    debug!(count = summaries.len(), "day summaries collected");
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::repository::mock::StubAssetService;
    use std::time::Duration;

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn empty_input_is_empty_output() -> anyhow::Result<()> {
        let assets = StubAssetService::new();
        let out = collect_day_summaries(&assets, &[]).await?;
        assert!(out.is_empty());
        assert!(assets.calls().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn lookups_overlap_once_per_symbol() -> anyhow::Result<()> {
        let assets = StubAssetService::new();
        let list = symbols(&["BTC", "ETH", "LTC", "XRP"]);
        let out = collect_day_summaries(&assets, &list).await?;
        assert_eq!(out.len(), 4);
        let mut calls = assets.calls();
        calls.sort();
        assert_eq!(calls, symbols(&["BTC", "ETH", "LTC", "XRP"]));
        assert_eq!(assets.max_in_flight(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn order_follows_input_not_completion() -> anyhow::Result<()> {
        let assets = StubAssetService::new()
            .with_delay("AAA", Duration::from_millis(80))
            .with_delay("BBB", Duration::from_millis(5));
        let out = collect_day_summaries(&assets, &symbols(&["AAA", "BBB"])).await?;
        assert_eq!(
            out,
            vec![StubAssetService::summary_for("AAA"), StubAssetService::summary_for("BBB")]
        );
        Ok(())
    }

    #[tokio::test]
    async fn one_failure_fails_everything() {
        let assets = StubAssetService::new()
            .failing("BAD")
            .with_delay("BAD", Duration::from_millis(5))
            .with_delay("SLOW", Duration::from_secs(30));
        let started = std::time::Instant::now();
        let res = collect_day_summaries(&assets, &symbols(&["OK", "BAD", "SLOW"])).await;
        match res {
            Err(ServiceError::Upstream(msg)) => assert!(msg.contains("BAD")),
            other => panic!("expected upstream error, got {other:?}"),
        }
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
