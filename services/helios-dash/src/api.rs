// services/helios-dash/src/api.rs
//
// HTTP client for the Helios backend endpoints

use std::time::{Duration, Instant};

use helioskit::config::DashConfig;
use helioskit::errors::FetchError;
use helioskit::types::{ApiEnvelope, DetectionRecord, ReportRecord};
use serde::de::DeserializeOwned;
use tracing::warn;

// Nationwide bounding box the CCTV view endpoint expects.
const CCTV_VIEW_PATH: &str =
    "cctv/view?minX=126.734086&minY=33.450701&maxX=129.394978&maxY=38.612242";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    CctvView,
    Analyze,
    Detected,
    Reports,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::CctvView,
        Endpoint::Analyze,
        Endpoint::Detected,
        Endpoint::Reports,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::CctvView => CCTV_VIEW_PATH,
            Endpoint::Analyze => "analyze/get-analyze",
            Endpoint::Detected => "analyze/get-detected",
            Endpoint::Reports => "report/get-all",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Endpoint::CctvView => "CCTV API",
            Endpoint::Analyze => "분석 API",
            Endpoint::Detected => "파손 API",
            Endpoint::Reports => "신고 조회 API",
        }
    }
}

/// One latency probe result. `elapsed` is measured whether or not the
/// request succeeded.
#[derive(Debug, Clone, Copy)]
pub struct ApiLatency {
    pub endpoint: Endpoint,
    pub elapsed: Duration,
    pub ok: bool,
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &DashConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    async fn get_records<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
    ) -> Result<Vec<T>, FetchError> {
        let response = self.client.get(self.url(endpoint)).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }
        let envelope = response
            .json::<ApiEnvelope<T>>()
            .await
            .map_err(|e| FetchError::Payload(e.to_string()))?;
        Ok(envelope.into_records())
    }

    pub async fn fetch_analyses(&self) -> Result<Vec<DetectionRecord>, FetchError> {
        self.get_records(Endpoint::Analyze).await
    }

    pub async fn fetch_detections(&self) -> Result<Vec<DetectionRecord>, FetchError> {
        self.get_records(Endpoint::Detected).await
    }

    pub async fn fetch_reports(&self) -> Result<Vec<ReportRecord>, FetchError> {
        self.get_records(Endpoint::Reports).await
    }

    /// Wall-clock latency probe for one endpoint. A failed request still
    /// reports how long it took to fail.
    pub async fn measure(&self, endpoint: Endpoint) -> ApiLatency {
        let started = Instant::now();
        let ok = match self.client.get(self.url(endpoint)).send().await {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                warn!("latency probe {} failed: {}", endpoint.title(), err);
                false
            }
        };
        ApiLatency {
            endpoint,
            elapsed: started.elapsed(),
            ok,
        }
    }

    /// Probe all four endpoints in order. Infallible by design: probe
    /// failures are data, not errors.
    pub async fn measure_all(&self) -> Result<Vec<ApiLatency>, FetchError> {
        let mut probes = Vec::with_capacity(Endpoint::ALL.len());
        for endpoint in Endpoint::ALL {
            probes.push(self.measure(endpoint).await);
        }
        Ok(probes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Analyze.path(), "analyze/get-analyze");
        assert_eq!(Endpoint::Detected.path(), "analyze/get-detected");
        assert_eq!(Endpoint::Reports.path(), "report/get-all");
        assert!(Endpoint::CctvView.path().starts_with("cctv/view?minX="));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let config = DashConfig {
            api_url: "http://localhost:8080/".to_string(),
            ..DashConfig::default()
        };
        let client = ApiClient::new(&config);
        assert_eq!(
            client.url(Endpoint::Reports),
            "http://localhost:8080/report/get-all"
        );
    }
}
