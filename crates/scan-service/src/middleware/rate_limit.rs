//! Per-IP fixed-window rate limiting.
//!
//! Each client IP gets a counter that admits at most `max_requests` calls
//! per `window_secs`. The window opens on the first request and a fresh one
//! starts on the first request after it has elapsed.

use crate::domain::config::RateLimitConfig;
use crate::domain::error::messages;
use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use dashmap::DashMap;
use shared_types::FailureResponse;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower::{Layer, Service};
use tracing::{debug, warn};

/// Request counter for one IP address
struct WindowCounter {
    window_start: Instant,
    count: u32,
    /// Last access time (for cleanup)
    last_access: Instant,
}

impl WindowCounter {
    fn new(now: Instant) -> Self {
        Self {
            window_start: now,
            count: 0,
            last_access: now,
        }
    }

    /// Count one request at `now`. On rejection returns the time left in the
    /// current window.
    fn hit(&mut self, now: Instant, max_requests: u32, window: Duration) -> Result<(), Duration> {
        self.last_access = now;
        if now.saturating_duration_since(self.window_start) >= window {
            self.window_start = now;
            self.count = 0;
        }

        if self.count >= max_requests {
            return Err((self.window_start + window).saturating_duration_since(now));
        }
        self.count += 1;
        Ok(())
    }
}

/// Rate limiter state shared across requests
pub struct RateLimitState {
    /// Per-IP window counters
    buckets: DashMap<IpAddr, WindowCounter>,
    config: RateLimitConfig,
}

impl RateLimitState {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: DashMap::new(),
            config,
        }
    }

    /// Check if a request from `ip` should be allowed. On rejection returns
    /// how long until the window resets.
    pub fn check(&self, ip: IpAddr) -> Result<(), Duration> {
        self.check_at(ip, Instant::now())
    }

    fn check_at(&self, ip: IpAddr, now: Instant) -> Result<(), Duration> {
        if !self.config.enabled || self.config.whitelist.contains(&ip) {
            return Ok(());
        }

        let mut counter = self.buckets.entry(ip).or_insert_with(|| {
            debug!(ip = %ip, "Creating new rate limit window");
            WindowCounter::new(now)
        });

        counter.hit(now, self.config.max_requests, self.config.window())
    }

    /// Drop buckets idle for longer than `max_age`.
    pub fn cleanup(&self, max_age: Duration) {
        let now = Instant::now();
        self.buckets.retain(|ip, bucket| {
            let age = now.saturating_duration_since(bucket.last_access);
            if age >= max_age {
                debug!(ip = %ip, age_secs = age.as_secs(), "Removing stale rate limit bucket");
                false
            } else {
                true
            }
        });
    }

    /// Get number of tracked IPs
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn config(&self) -> &RateLimitConfig {
        &self.config
    }
}

/// Rate limit layer
#[derive(Clone)]
pub struct RateLimitLayer {
    state: Arc<RateLimitState>,
}

impl RateLimitLayer {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            state: Arc::new(RateLimitState::new(config)),
        }
    }

    pub fn state(&self) -> Arc<RateLimitState> {
        Arc::clone(&self.state)
    }
}

impl<S> Layer<S> for RateLimitLayer {
    type Service = RateLimitService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RateLimitService {
            inner,
            state: Arc::clone(&self.state),
        }
    }
}

/// Rate limit service
#[derive(Clone)]
pub struct RateLimitService<S> {
    inner: S,
    state: Arc<RateLimitState>,
}

impl<S> Service<Request<Body>> for RateLimitService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let state = Arc::clone(&self.state);
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let ip = extract_client_ip(&req, state.config().trust_proxy_headers);

            match state.check(ip) {
                Ok(()) => inner.call(req).await,
                Err(retry_after) => {
                    warn!(
                        ip = %ip,
                        path = %req.uri().path(),
                        retry_after_ms = retry_after.as_millis() as u64,
                        "Rate limit exceeded"
                    );
                    Ok(rate_limit_response(retry_after))
                }
            }
        })
    }
}

/// Identify the client. Forwarded headers are consulted only when the service
/// sits behind a trusted proxy.
fn extract_client_ip<B>(req: &Request<B>, trust_proxy_headers: bool) -> IpAddr {
    if trust_proxy_headers {
        let forwarded = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());
        if let Some(ip) = forwarded {
            return ip;
        }

        let real_ip = req
            .headers()
            .get("x-real-ip")
            .and_then(|h| h.to_str().ok())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());
        if let Some(ip) = real_ip {
            return ip;
        }
    }

    if let Some(connect_info) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
        return connect_info.0.ip();
    }

    // In-process callers (tests, oneshot) have no peer address
    IpAddr::from([127, 0, 0, 1])
}

/// 429 with the failure envelope and a whole-second `Retry-After`.
fn rate_limit_response(retry_after: Duration) -> Response {
    let retry_secs = retry_after.as_millis().div_ceil(1000).max(1);
    (
        StatusCode::TOO_MANY_REQUESTS,
        [(header::RETRY_AFTER, retry_secs.to_string())],
        Json(FailureResponse::new(messages::RATE_LIMITED)),
    )
        .into_response()
}

/// Background task to clean up stale rate limit buckets
pub async fn cleanup_task(state: Arc<RateLimitState>, interval: Duration, max_age: Duration) {
    let mut cleanup_interval = tokio::time::interval(interval);
    cleanup_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        cleanup_interval.tick().await;
        state.cleanup(max_age);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn test_config() -> RateLimitConfig {
        RateLimitConfig {
            enabled: true,
            max_requests: 100,
            window_secs: 900,
            trust_proxy_headers: false,
            whitelist: vec![IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))],
        }
    }

    #[test]
    fn test_allows_full_window() {
        let state = RateLimitState::new(test_config());
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

        for _ in 0..100 {
            assert!(state.check(ip).is_ok());
        }
    }

    #[test]
    fn test_rejects_request_past_window() {
        let state = RateLimitState::new(test_config());
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2));

        for _ in 0..100 {
            let _ = state.check(ip);
        }

        let wait = state.check(ip).unwrap_err();
        assert!(wait > Duration::from_secs(890));
        assert!(wait <= Duration::from_secs(900));
    }

    #[test]
    fn test_window_does_not_refill_early() {
        let mut config = test_config();
        config.max_requests = 2;
        config.window_secs = 2;
        let state = RateLimitState::new(config);
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 7));
        let start = Instant::now();

        assert!(state.check_at(ip, start).is_ok());
        assert!(state.check_at(ip, start + Duration::from_millis(50)).is_ok());

        // Past window / max_requests but still inside the window
        let wait = state
            .check_at(ip, start + Duration::from_millis(1_100))
            .unwrap_err();
        assert_eq!(wait, Duration::from_millis(900));

        let admitted = (23..40)
            .map(|i| start + Duration::from_millis(50 * i))
            .filter(|&at| state.check_at(ip, at).is_ok())
            .count();
        assert_eq!(admitted, 0);
    }

    #[test]
    fn test_new_window_after_expiry() {
        let mut config = test_config();
        config.max_requests = 2;
        config.window_secs = 2;
        let state = RateLimitState::new(config);
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 8));
        let start = Instant::now();

        assert!(state.check_at(ip, start).is_ok());
        assert!(state.check_at(ip, start).is_ok());
        assert!(state.check_at(ip, start + Duration::from_millis(1_999)).is_err());

        let next = start + Duration::from_secs(2);
        assert!(state.check_at(ip, next).is_ok());
        assert!(state.check_at(ip, next).is_ok());
        assert!(state.check_at(ip, next).is_err());
    }

    #[test]
    fn test_buckets_are_per_ip() {
        let state = RateLimitState::new(test_config());
        let noisy = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 3));
        let quiet = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 4));

        for _ in 0..101 {
            let _ = state.check(noisy);
        }

        assert!(state.check(noisy).is_err());
        assert!(state.check(quiet).is_ok());
    }

    #[test]
    fn test_whitelist_bypasses_limit() {
        let state = RateLimitState::new(test_config());
        let whitelisted_ip = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1));

        for _ in 0..200 {
            assert!(state.check(whitelisted_ip).is_ok());
        }
        assert_eq!(state.bucket_count(), 0);
    }

    #[test]
    fn test_disabled_rate_limiting() {
        let mut config = test_config();
        config.enabled = false;
        let state = RateLimitState::new(config);
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 5));

        for _ in 0..200 {
            assert!(state.check(ip).is_ok());
        }
    }

    #[test]
    fn test_cleanup_removes_stale_buckets() {
        let state = RateLimitState::new(test_config());
        let ip = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 6));

        let _ = state.check(ip);
        assert_eq!(state.bucket_count(), 1);

        state.cleanup(Duration::ZERO);
        assert_eq!(state.bucket_count(), 0);
    }

    #[test]
    fn test_forwarded_header_ignored_unless_trusted() {
        let req = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(
            extract_client_ip(&req, false),
            IpAddr::from([127, 0, 0, 1])
        );
        assert_eq!(
            extract_client_ip(&req, true),
            "203.0.113.9".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_real_ip_header_when_trusted() {
        let req = Request::builder()
            .header("x-real-ip", "198.51.100.7")
            .body(Body::empty())
            .unwrap();

        assert_eq!(
            extract_client_ip(&req, true),
            "198.51.100.7".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_rate_limit_response_shape() {
        let response = rate_limit_response(Duration::from_millis(8_200));
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()[header::RETRY_AFTER], "9");
    }
}
