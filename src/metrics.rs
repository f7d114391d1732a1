use lazy_static::lazy_static;
use prometheus::{Counter, Encoder, Gauge, Histogram, TextEncoder, register_counter, register_gauge, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("festival_requests_total", "Total number of API requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter =
        register_counter!("festival_rate_limited_total", "Requests rejected by the rate limiter").unwrap();
    pub static ref TRACKED_CALLERS: Gauge =
        register_gauge!("festival_tracked_callers", "Caller keys currently held by the rate limiter").unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "festival_request_latency_seconds",
        "Request latency in seconds"
    )
    .unwrap();
}

// Render the default registry in Prometheus text format
pub fn gather() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&prometheus::gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
}
