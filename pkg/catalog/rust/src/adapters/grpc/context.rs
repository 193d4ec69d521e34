// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Deadline propagation from the incoming request to the catalog call.
//!
//! tonic enforces `grpc-timeout` on both ends of a call and reports its own expiry as
//! `CANCELLED`. `DeadlineLayer` stamps the caller's deadline as the request enters the
//! service stack, slightly ahead of those timers, so the handler observes the expiry
//! first and the caller gets `DEADLINE_EXCEEDED`.

use crate::domain::{CallContext, CatalogError};
use std::future::Future;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Instant;
use tonic::Request;
use tonic::codegen::http;
use tower::{Layer, Service};

const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// How far the stamped deadline precedes tonic's timers. The server timer is armed just
/// before this layer runs; the client timer earlier still. The margin must also cover
/// delivering the status back to the caller.
const DEADLINE_LEAD: Duration = Duration::from_millis(10);

/// Parse a `grpc-timeout` header value: at most 8 ASCII digits followed by a unit
/// (`H`, `M`, `S`, `m`, `u`, `n`).
pub fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    if value.len() < 2 {
        return None;
    }
    let (digits, unit) = value.split_at(value.len() - 1);
    if digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let amount: u64 = digits.parse().ok()?;
    let timeout = match unit {
        "H" => Duration::from_secs(amount * 60 * 60),
        "M" => Duration::from_secs(amount * 60),
        "S" => Duration::from_secs(amount),
        "m" => Duration::from_millis(amount),
        "u" => Duration::from_micros(amount),
        "n" => Duration::from_nanos(amount),
        _ => return None,
    };
    Some(timeout)
}

/// Build the call context for a request. The deadline stamped by `DeadlineLayer` wins;
/// without it the `grpc-timeout` metadata is read directly. A missing or malformed
/// header yields a context without deadline.
pub fn call_context<T>(request: &Request<T>) -> CallContext {
    if let Some(ctx) = request.extensions().get::<CallContext>() {
        return *ctx;
    }
    request
        .metadata()
        .get(GRPC_TIMEOUT_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_grpc_timeout)
        .map(|timeout| CallContext::with_deadline(Instant::now() + timeout))
        .unwrap_or_default()
}

/// Tower layer that records the caller's deadline in the request extensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeadlineLayer;

impl<S> Layer<S> for DeadlineLayer {
    type Service = DeadlineService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DeadlineService { inner }
    }
}

#[derive(Debug, Clone)]
pub struct DeadlineService<S> {
    inner: S,
}

impl<S, B> Service<http::Request<B>> for DeadlineService<S>
where
    S: Service<http::Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: http::Request<B>) -> Self::Future {
        let timeout = request
            .headers()
            .get(GRPC_TIMEOUT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_grpc_timeout);
        if let Some(timeout) = timeout {
            let deadline = Instant::now() + timeout.saturating_sub(DEADLINE_LEAD);
            request
                .extensions_mut()
                .insert(CallContext::with_deadline(deadline));
        }
        self.inner.call(request)
    }
}

/// Drive a catalog future under the context's deadline.
pub async fn bounded<T, F>(ctx: &CallContext, call: F) -> Result<T, CatalogError>
where
    F: Future<Output = Result<T, CatalogError>>,
{
    match ctx.deadline() {
        Some(deadline) => tokio::time::timeout_at(deadline, call)
            .await
            .unwrap_or(Err(CatalogError::DeadlineExceeded)),
        None => call.await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grpc_timeout_units() {
        assert_eq!(parse_grpc_timeout("1H"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_grpc_timeout("2M"), Some(Duration::from_secs(120)));
        assert_eq!(parse_grpc_timeout("30S"), Some(Duration::from_secs(30)));
        assert_eq!(parse_grpc_timeout("250m"), Some(Duration::from_millis(250)));
        assert_eq!(parse_grpc_timeout("10u"), Some(Duration::from_micros(10)));
        assert_eq!(parse_grpc_timeout("99999999n"), Some(Duration::from_nanos(99_999_999)));
    }

    #[test]
    fn test_parse_grpc_timeout_rejects_malformed() {
        assert_eq!(parse_grpc_timeout(""), None);
        assert_eq!(parse_grpc_timeout("S"), None);
        assert_eq!(parse_grpc_timeout("10"), None);
        assert_eq!(parse_grpc_timeout("10s"), None);
        assert_eq!(parse_grpc_timeout("-1S"), None);
        assert_eq!(parse_grpc_timeout("123456789S"), None);
    }

    #[tokio::test]
    async fn test_call_context_from_metadata() {
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(GRPC_TIMEOUT_HEADER, "5S".parse().unwrap());
        let ctx = call_context(&request);
        let deadline = ctx.deadline().expect("deadline should be set");
        assert!(deadline > Instant::now());
        assert!(deadline <= Instant::now() + Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_call_context_prefers_stamped_deadline() {
        let stamped = CallContext::with_deadline(Instant::now() + Duration::from_millis(10));
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(GRPC_TIMEOUT_HEADER, "1H".parse().unwrap());
        request.extensions_mut().insert(stamped);

        assert_eq!(call_context(&request), stamped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_layer_stamps_ahead_of_header() {
        use tower::ServiceExt;

        let svc = DeadlineLayer.layer(tower::service_fn(|req: http::Request<()>| async move {
            Ok::<_, std::convert::Infallible>(req.extensions().get::<CallContext>().copied())
        }));

        let request = http::Request::builder()
            .header(GRPC_TIMEOUT_HEADER, "200m")
            .body(())
            .unwrap();
        let before = Instant::now();
        let ctx = svc.clone().oneshot(request).await.unwrap().expect("deadline stamped");
        assert_eq!(
            ctx.deadline(),
            Some(before + Duration::from_millis(200) - DEADLINE_LEAD)
        );

        let request = http::Request::builder().body(()).unwrap();
        assert_eq!(svc.oneshot(request).await.unwrap(), None);
    }

    #[test]
    fn test_call_context_without_header() {
        let ctx = call_context(&Request::new(()));
        assert!(ctx.deadline().is_none());
    }

    #[tokio::test]
    async fn test_bounded_passes_result_through() {
        let ctx = CallContext::with_deadline(Instant::now() + Duration::from_secs(5));
        let out = bounded(&ctx, async { Ok::<_, CatalogError>(7) }).await;
        assert_eq!(out, Ok(7));

        let out: Result<(), _> = bounded(&CallContext::background(), async {
            Err(CatalogError::NotFound("x".into()))
        })
        .await;
        assert_eq!(out, Err(CatalogError::NotFound("x".into())));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bounded_reports_deadline_exceeded() {
        let ctx = CallContext::with_deadline(Instant::now() + Duration::from_millis(50));
        let out: Result<(), _> = bounded(&ctx, async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok(())
        })
        .await;
        assert_eq!(out, Err(CatalogError::DeadlineExceeded));
    }
}
