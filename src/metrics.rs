//! Prometheus metrics registry and instruments.
//!
//! This module is framework-agnostic and can be used from any layer.

use lazy_static::lazy_static;
use prometheus::{HistogramOpts, IntCounter, IntCounterVec, Opts, Registry};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Metrics
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("shutterbay_http_requests_total", "Total number of HTTP requests"),
        &["method", "endpoint", "status"]
    ).expect("metric can be created");
    pub static ref HTTP_REQUEST_DURATION_SECONDS: prometheus::HistogramVec = prometheus::HistogramVec::new(
        HistogramOpts::new(
            "shutterbay_http_request_duration_seconds",
            "HTTP request duration in seconds"
        ).buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]),
        &["method", "endpoint"]
    ).expect("metric can be created");

    // Store Metrics
    pub static ref STORE_READS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("shutterbay_store_reads_total", "Total number of store document reads"),
        &["collection"]
    ).expect("metric can be created");
    pub static ref STORE_WRITES_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("shutterbay_store_writes_total", "Total number of store document rewrites"),
        &["collection"]
    ).expect("metric can be created");

    // Session Metrics
    pub static ref SESSIONS_ISSUED_TOTAL: IntCounter = IntCounter::new(
        "shutterbay_sessions_issued_total",
        "Total number of session cookies issued"
    ).expect("metric can be created");

    // Error Metrics
    pub static ref ERRORS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("shutterbay_errors_total", "Total number of errors"),
        &["error_type"]
    ).expect("metric can be created");
}

/// Initialize metrics registry.
pub fn init_metrics() {
    REGISTRY
        .register(Box::new(HTTP_REQUESTS_TOTAL.clone()))
        .expect("HTTP_REQUESTS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()))
        .expect("HTTP_REQUEST_DURATION_SECONDS can be registered");
    REGISTRY
        .register(Box::new(STORE_READS_TOTAL.clone()))
        .expect("STORE_READS_TOTAL can be registered");
    REGISTRY
        .register(Box::new(STORE_WRITES_TOTAL.clone()))
        .expect("STORE_WRITES_TOTAL can be registered");
    REGISTRY
        .register(Box::new(SESSIONS_ISSUED_TOTAL.clone()))
        .expect("SESSIONS_ISSUED_TOTAL can be registered");
    REGISTRY
        .register(Box::new(ERRORS_TOTAL.clone()))
        .expect("ERRORS_TOTAL can be registered");

    tracing::info!("Metrics registry initialized");
}
