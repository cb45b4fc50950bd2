use prometheus::Encoder;
use prometheus::HistogramOpts;
use prometheus::HistogramVec;
use prometheus::IntCounterVec;
use prometheus::Opts;
use prometheus::Registry;
use prometheus::TextEncoder;

/// Request instrumentation, built once at startup and injected into the HTTP
/// layer through application state rather than reached for as a global.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
}

impl Metrics {
    /// Build the registry and register the request counter and latency
    /// histogram.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP Requests"),
            &["method", "endpoint", "status"],
        )?;
        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP Request Duration"),
            &["method", "endpoint"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
        })
    }

    /// Record one handled request.
    pub fn observe(&self, method: &str, endpoint: &str, status: u16, elapsed_seconds: f64) {
        self.http_requests_total
            .with_label_values(&[method, endpoint, &status.to_string()])
            .inc();
        self.http_request_duration_seconds
            .with_label_values(&[method, endpoint])
            .observe(elapsed_seconds);
    }

    /// Render the registry in the text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;

        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("Non-UTF8 exposition output: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observed_requests_appear_in_exposition() {
        let metrics = Metrics::new().expect("Failed to build metrics");

        metrics.observe("GET", "/health", 200, 0.003);
        metrics.observe("POST", "/login", 401, 0.120);

        let rendered = metrics.render().expect("Failed to render metrics");
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("http_request_duration_seconds"));
        assert!(rendered.contains(r#"endpoint="/login""#));
    }

    #[test]
    fn test_empty_registry_renders() {
        let metrics = Metrics::new().expect("Failed to build metrics");

        // Vec collectors emit nothing until the first observation
        let rendered = metrics.render().expect("Failed to render metrics");
        assert!(rendered.is_empty());
    }
}
