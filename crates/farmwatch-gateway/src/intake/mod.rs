//! Subscription hand-off.
//!
//! Accepted requests are passed to a `SubscriptionSink`. The default sink only
//! logs. A durable store or an SMS dispatcher plugs in here.

use async_trait::async_trait;

use farmwatch_core::error::Result;
use farmwatch_core::subscription::SubscriptionRequest;

#[async_trait]
pub trait SubscriptionSink: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn accept(&self, req: &SubscriptionRequest) -> Result<()>;
}

/// Logs each subscription and keeps nothing.
#[derive(Debug, Default)]
pub struct LogSubscriptionSink;

impl LogSubscriptionSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubscriptionSink for LogSubscriptionSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn accept(&self, req: &SubscriptionRequest) -> Result<()> {
        tracing::info!(
            phone = %req.phone,
            region_id = %req.region_id,
            language = %req.language,
            "subscribed"
        );
        Ok(())
    }
}
