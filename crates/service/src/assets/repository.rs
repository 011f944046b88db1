use async_trait::async_trait;

use models::asset::DaySummary;

use crate::errors::ServiceError;

/// Asset lookup contract: one day summary per symbol.
#[async_trait]
pub trait AssetService: Send + Sync {
    async fn day_summary(&self, symbol: &str) -> Result<DaySummary, ServiceError>;
}

/// Scriptable in-memory asset service for tests and doc examples.
///
/// Each symbol can be given a delay and made to fail. Calls are recorded in
/// arrival order, and the peak number of lookups in flight at once is tracked.
pub mod mock {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    pub struct StubAssetService {
        delays: HashMap<String, Duration>,
        failing: HashSet<String>,
        calls: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl StubAssetService {
        pub fn new() -> Self { Self::default() }

        pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
            self.delays.insert(symbol.to_string(), delay);
            self
        }

        pub fn failing(mut self, symbol: &str) -> Self {
            self.failing.insert(symbol.to_string());
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }

        /// Deterministic summary used for successful lookups.
        pub fn summary_for(symbol: &str) -> DaySummary {
            let base = symbol.bytes().map(f64::from).sum::<f64>();
            DaySummary { symbol: symbol.to_string(), highest: base + 10.0, lowest: base }
        }
    }

    struct InFlight<'a>(&'a AtomicUsize);

    impl Drop for InFlight<'_> {
        fn drop(&mut self) {
            self.0.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl AssetService for StubAssetService {
        async fn day_summary(&self, symbol: &str) -> Result<DaySummary, ServiceError> {
            self.calls.lock().unwrap().push(symbol.to_string());
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            let _guard = InFlight(&self.in_flight);
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            let delay = self.delays.get(symbol).copied().unwrap_or(Duration::from_millis(20));
            tokio::time::sleep(delay).await;

            if self.failing.contains(symbol) {
                return Err(ServiceError::Upstream(format!("no day summary for {symbol}")));
            }
            Ok(Self::summary_for(symbol))
        }
    }
}
