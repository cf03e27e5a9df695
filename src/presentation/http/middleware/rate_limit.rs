// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type ApiRateLimit = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

// one request every 200ms once the burst is spent
const DEFAULT_PERIOD: Duration = Duration::from_millis(200);
const DEFAULT_BURST: u32 = 30;

/// Token bucket applied per client IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub period: Duration,
    pub burst: u32,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            burst: DEFAULT_BURST,
        }
    }
}

/// Returns `None` when the period or the burst is zero.
pub fn api_rate_limit_layer(limit: RateLimit) -> Option<ApiRateLimit> {
    let mut builder = GovernorConfigBuilder::default();
    builder.period(limit.period);
    builder.burst_size(limit.burst);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;

    Some(GovernorLayer::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quota_builds_no_layer() {
        assert!(api_rate_limit_layer(RateLimit::default()).is_some());
        assert!(
            api_rate_limit_layer(RateLimit {
                period: Duration::ZERO,
                burst: 10,
            })
            .is_none()
        );
        assert!(
            api_rate_limit_layer(RateLimit {
                period: Duration::from_secs(1),
                burst: 0,
            })
            .is_none()
        );
    }
}
