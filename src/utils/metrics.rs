use super::APP_NAME;
use once_cell::sync::Lazy;
use opentelemetry::{
    global,
    metrics::{Counter, Histogram, Meter},
};

fn meter() -> Meter {
    global::meter(APP_NAME)
}

pub static REQUEST_COUNTER: Lazy<Counter<f64>> = Lazy::new(|| {
    meter()
        .f64_counter("http_requests_total")
        .with_description("HTTP requests served, by method, route and status group")
        .build()
});

pub static HTTP_REQUEST_DURATION_HISTOGRAM: Lazy<Histogram<f64>> = Lazy::new(|| {
    meter()
        .f64_histogram("http_request_duration_milliseconds")
        .with_description("Time from routing a request to producing its response")
        .with_unit("ms")
        .build()
});

/// Recorded around every mongodb round trip, including the startup ping.
pub static STORAGE_OPERATION_DURATION_HISTOGRAM: Lazy<Histogram<f64>> = Lazy::new(|| {
    meter()
        .f64_histogram("storage_operation_duration_milliseconds")
        .with_description("Duration of todo storage operations")
        .with_unit("ms")
        .build()
});

pub static SERVICE_OPERATION_DURATION_HISTOGRAM: Lazy<Histogram<f64>> = Lazy::new(|| {
    meter()
        .f64_histogram("service_operation_duration_milliseconds")
        .with_description("Duration of todo service calls made by handlers")
        .with_unit("ms")
        .build()
});
