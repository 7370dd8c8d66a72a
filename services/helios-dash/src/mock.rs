// services/helios-dash/src/mock.rs
//
// Simulated backend for demo mode

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use helioskit::errors::FetchError;
use helioskit::stats::DAMAGE_LABELS;
use helioskit::types::{DetectionRecord, ReportRecord};
use rand::Rng;
use tokio::sync::Mutex;

use crate::api::{ApiLatency, Endpoint};

const CAMERAS: [&str; 8] = [
    "영동고속도로 38km 지점",
    "경부고속도로 15km 지점",
    "서해안고속도로 82km 지점",
    "중부고속도로 25km 지점",
    "남해고속도로 120km 지점",
    "호남고속도로 45km 지점",
    "경부고속도로 120km 지점",
    "영동고속도로 52km 지점",
];

const REPORT_LOCATIONS: [&str; 6] = [
    "영동고속도로 강릉 방향 38km",
    "경부고속도로 서울 방향 15km",
    "서해안고속도로 목포 방향 82km",
    "중부고속도로 대전 방향 25km",
    "남해고속도로 부산 방향 120km",
    "호남고속도로 광주 방향 45km",
];

const REPORT_CODES: [&str; 5] = ["POTHOLE", "CRACK", "RUTTING", "SINKHOLE", "EDGE_CRACK"];

struct MockFeed {
    tick: u64,
    analyses: Vec<DetectionRecord>,
    reports: Vec<ReportRecord>,
    next_report_id: i64,
}

impl MockFeed {
    fn new() -> Self {
        let mut feed = Self {
            tick: 0,
            analyses: Vec::new(),
            reports: Vec::new(),
            next_report_id: 1,
        };
        feed.reseed_analyses();
        for _ in 0..6 {
            feed.push_report();
        }
        feed
    }

    fn reseed_analyses(&mut self) {
        let tick = self.tick;
        let mut rng = rand::thread_rng();
        self.analyses = CAMERAS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let detections = match rng.gen_range(0..10) {
                    // Small chance the camera is down for maintenance.
                    0 => None,
                    1..=5 => Some(Vec::new()),
                    _ => {
                        let n = rng.gen_range(1..=3);
                        Some(
                            (0..n)
                                .map(|_| {
                                    DAMAGE_LABELS[rng.gen_range(0..DAMAGE_LABELS.len())]
                                        .to_string()
                                })
                                .collect(),
                        )
                    }
                };
                DetectionRecord {
                    id: format!("cctv-{:03}", i + 1),
                    cctv_name: name.to_string(),
                    cctv_url: Some(format!("http://cctv.example/{:03}", i + 1)),
                    analyze_id: Some(tick as i64),
                    date: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
                    detections,
                }
            })
            .collect();
    }

    fn push_report(&mut self) {
        let mut rng = rand::thread_rng();
        self.reports.push(ReportRecord {
            id: self.next_report_id,
            location: REPORT_LOCATIONS[rng.gen_range(0..REPORT_LOCATIONS.len())].to_string(),
            severity: rng.gen_range(1..=3),
            damage_type: REPORT_CODES[rng.gen_range(0..REPORT_CODES.len())].to_string(),
            is_checked: false,
        });
        self.next_report_id += 1;
    }

    fn advance(&mut self) {
        self.tick += 1;
        self.reseed_analyses();

        let mut rng = rand::thread_rng();
        if rng.gen_ratio(1, 3) {
            self.push_report();
        }
        // Operators slowly work through the queue.
        if rng.gen_ratio(1, 4) {
            if let Some(unchecked) = self.reports.iter_mut().find(|r| !r.is_checked) {
                unchecked.is_checked = true;
            }
        }
        if self.reports.len() > 40 {
            self.reports.remove(0);
        }
    }
}

/// Clonable handle the demo pollers capture. All fetch closures feed off
/// one shared feed so the panels stay consistent with each other.
#[derive(Clone)]
pub struct MockBackend {
    feed: Arc<Mutex<MockFeed>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            feed: Arc::new(Mutex::new(MockFeed::new())),
        }
    }

    /// The analysis poller drives simulated time forward. It also throws
    /// the occasional transport blip so the error state shows up in demos.
    pub async fn analyses(&self) -> Result<Vec<DetectionRecord>, FetchError> {
        let mut feed = self.feed.lock().await;
        feed.advance();
        if rand::thread_rng().gen_ratio(1, 30) {
            return Err(FetchError::Transport("simulated link flap".to_string()));
        }
        Ok(feed.analyses.clone())
    }

    pub async fn detections(&self) -> Result<Vec<DetectionRecord>, FetchError> {
        let feed = self.feed.lock().await;
        Ok(feed
            .analyses
            .iter()
            .filter(|r| r.has_damage())
            .cloned()
            .collect())
    }

    pub async fn reports(&self) -> Result<Vec<ReportRecord>, FetchError> {
        let feed = self.feed.lock().await;
        Ok(feed.reports.clone())
    }

    pub async fn latencies(&self) -> Result<Vec<ApiLatency>, FetchError> {
        let mut rng = rand::thread_rng();
        Ok(Endpoint::ALL
            .iter()
            .map(|&endpoint| ApiLatency {
                endpoint,
                elapsed: Duration::from_millis(rng.gen_range(60..420)),
                ok: !rng.gen_ratio(1, 25),
            })
            .collect())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_labels_come_from_the_fixed_vocabulary() {
        let backend = MockBackend::new();
        for _ in 0..10 {
            if let Ok(records) = backend.analyses().await {
                assert_eq!(records.len(), CAMERAS.len());
                for record in &records {
                    for label in record.labels() {
                        assert!(DAMAGE_LABELS.contains(&label.as_str()), "label {label}");
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_mock_detections_all_carry_damage() {
        let backend = MockBackend::new();
        let records = backend.detections().await.unwrap();
        assert!(records.iter().all(|r| r.has_damage()));
    }

    #[tokio::test]
    async fn test_mock_reports_have_unique_ids() {
        let backend = MockBackend::new();
        let reports = backend.reports().await.unwrap();
        assert!(!reports.is_empty());
        let mut ids: Vec<i64> = reports.iter().map(|r| r.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), reports.len());
    }

    #[tokio::test]
    async fn test_mock_latencies_cover_every_endpoint() {
        let backend = MockBackend::new();
        let probes = backend.latencies().await.unwrap();
        assert_eq!(probes.len(), Endpoint::ALL.len());
    }
}
