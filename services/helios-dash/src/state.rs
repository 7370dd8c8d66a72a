// services/helios-dash/src/state.rs
//
// Dashboard state: latest poll snapshots plus the activity log

use chrono::{DateTime, Local};
use helioskit::stats::{DetectionSummary, ReportSummary};
use helioskit::types::{DetectionRecord, ReportRecord};

use crate::api::ApiLatency;
use crate::poll::PollCell;

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: String, // INFO, WARN, ERROR
    pub message: String,
}

/// Everything the draw loop reads. Each data source keeps its own cell;
/// `apply` copies in the latest snapshots once per tick and records
/// connection transitions in the activity log.
pub struct DashboardState {
    pub analyses: PollCell<Vec<DetectionRecord>>,
    pub detections: PollCell<Vec<DetectionRecord>>,
    pub reports: PollCell<Vec<ReportRecord>>,
    pub latencies: PollCell<Vec<ApiLatency>>,

    pub activity_log: Vec<LogEntry>,
    pub scroll_offset: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            analyses: PollCell::default(),
            detections: PollCell::default(),
            reports: PollCell::default(),
            latencies: PollCell::default(),
            activity_log: Vec::new(),
            scroll_offset: 0,
        }
    }

    pub fn apply(
        &mut self,
        analyses: PollCell<Vec<DetectionRecord>>,
        detections: PollCell<Vec<DetectionRecord>>,
        reports: PollCell<Vec<ReportRecord>>,
        latencies: PollCell<Vec<ApiLatency>>,
    ) {
        self.log_transition("분석 API", self.analyses.error, analyses.error);
        self.log_transition("파손 API", self.detections.error, detections.error);
        self.log_transition("신고 조회 API", self.reports.error, reports.error);

        self.analyses = analyses;
        self.detections = detections;
        self.reports = reports;
        self.latencies = latencies;
    }

    fn log_transition(&mut self, source: &str, was_error: bool, is_error: bool) {
        if !was_error && is_error {
            self.add_log("WARN", &format!("lost connection to {source}"));
        } else if was_error && !is_error {
            self.add_log("INFO", &format!("{source} reconnected"));
        }
    }

    pub fn add_log(&mut self, level: &str, message: &str) {
        self.activity_log.push(LogEntry {
            timestamp: Local::now(),
            level: level.to_string(),
            message: message.to_string(),
        });

        // Keep last 100 entries
        if self.activity_log.len() > 100 {
            self.activity_log.remove(0);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset += 1;
    }

    /// True while at least one data source answers.
    pub fn connected(&self) -> bool {
        !(self.analyses.error && self.detections.error && self.reports.error)
    }

    /// True until every data source has completed its first fetch.
    pub fn loading(&self) -> bool {
        self.analyses.loading || self.detections.loading || self.reports.loading
    }

    pub fn report_records(&self) -> &[ReportRecord] {
        self.reports.data.as_deref().unwrap_or(&[])
    }

    pub fn analysis_records(&self) -> &[DetectionRecord] {
        self.analyses.data.as_deref().unwrap_or(&[])
    }

    pub fn detection_records(&self) -> &[DetectionRecord] {
        self.detections.data.as_deref().unwrap_or(&[])
    }

    pub fn report_summary(&self) -> ReportSummary {
        ReportSummary::from_records(self.report_records())
    }

    pub fn detection_summary(&self) -> DetectionSummary {
        DetectionSummary::from_records(self.analysis_records())
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errored<T>() -> PollCell<T> {
        PollCell {
            data: None,
            loading: false,
            error: true,
            last_updated: None,
        }
    }

    fn ready<T>(data: T) -> PollCell<T> {
        PollCell {
            data: Some(data),
            loading: false,
            error: false,
            last_updated: Some(Local::now()),
        }
    }

    #[test]
    fn test_log_caps_at_100_entries() {
        let mut state = DashboardState::new();
        for i in 0..150 {
            state.add_log("INFO", &format!("entry {i}"));
        }
        assert_eq!(state.activity_log.len(), 100);
        assert_eq!(state.activity_log[0].message, "entry 50");
    }

    #[test]
    fn test_apply_logs_connection_transitions() {
        let mut state = DashboardState::new();
        state.apply(errored(), ready(vec![]), ready(vec![]), ready(vec![]));
        assert!(state
            .activity_log
            .iter()
            .any(|l| l.level == "WARN" && l.message.contains("분석 API")));

        state.apply(ready(vec![]), ready(vec![]), ready(vec![]), ready(vec![]));
        assert!(state
            .activity_log
            .iter()
            .any(|l| l.message.contains("reconnected")));
    }

    #[test]
    fn test_connected_requires_one_live_source() {
        let mut state = DashboardState::new();
        assert!(state.connected());
        state.apply(errored(), errored(), errored(), errored());
        assert!(!state.connected());
        state.apply(errored(), errored(), ready(vec![]), errored());
        assert!(state.connected());
    }

    #[test]
    fn test_scroll_saturates_at_zero() {
        let mut state = DashboardState::new();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_down();
        state.scroll_down();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 1);
    }
}
