//! Pure folds from raw records to chart-ready statistics.
//!
//! Nothing in here touches the network or mutates its input; every function
//! rebuilds its output from the record slice it is handed.

use std::collections::HashMap;

use crate::types::{DetectionRecord, ReportRecord};

/// Fixed damage-type vocabulary produced by the analysis backend.
pub const DAMAGE_LABELS: [&str; 12] = [
    "반사균열",
    "세로방향균열",
    "밀림균열",
    "러팅",
    "코루게이션및쇼빙",
    "함몰",
    "포트홀",
    "라벨링",
    "박리",
    "단부균열",
    "시공균열",
    "거북등",
];

/// Chart palette. Slices pick their color by position modulo this length.
pub const PALETTE: [Rgb; 5] = [
    Rgb(0xef, 0x44, 0x44),
    Rgb(0xf9, 0x73, 0x16),
    Rgb(0xea, 0xb3, 0x08),
    Rgb(0x22, 0xc5, 0x5e),
    Rgb(0x8b, 0x5c, 0xf6),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// One slice of a donut chart legend: display label, count, color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: String,
    pub value: u64,
    pub color: Rgb,
}

/// Count every label occurrence, keyed in first-encountered order.
pub fn count_labels<'a, I>(labels: I) -> Vec<LabelCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<LabelCount> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for label in labels {
        match index.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(label, counts.len());
                counts.push(LabelCount {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// Top-N damage labels across all detections, count-descending. The sort is
/// stable, so equal counts keep their first-encountered order.
pub fn top_labels(records: &[DetectionRecord], n: usize) -> Vec<LabelCount> {
    let mut counts = count_labels(
        records
            .iter()
            .flat_map(|r| r.labels().iter().map(String::as_str)),
    );
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Counts keyed by the fixed label list, zero entries included. Labels
/// outside the vocabulary are still accumulated but not displayed here.
pub fn count_fixed_labels(records: &[DetectionRecord]) -> Vec<LabelCount> {
    let counts = count_labels(
        records
            .iter()
            .flat_map(|r| r.labels().iter().map(String::as_str)),
    );
    let by_label: HashMap<&str, u64> = counts
        .iter()
        .map(|c| (c.label.as_str(), c.count))
        .collect();
    DAMAGE_LABELS
        .iter()
        .map(|&label| LabelCount {
            label: label.to_string(),
            count: by_label.get(label).copied().unwrap_or(0),
        })
        .collect()
}

/// Count records per display label. Each record contributes exactly one
/// count; slice colors follow the palette by position.
pub fn breakdown<T, F>(records: &[T], classify: F) -> Vec<ChartSlice>
where
    F: Fn(&T) -> &'static str,
{
    let mut slices: Vec<ChartSlice> = Vec::new();
    let mut index: HashMap<&'static str, usize> = HashMap::new();
    for record in records {
        let label = classify(record);
        match index.get(label) {
            Some(&i) => slices[i].value += 1,
            None => {
                let color = PALETTE[slices.len() % PALETTE.len()];
                index.insert(label, slices.len());
                slices.push(ChartSlice {
                    label: label.to_string(),
                    value: 1,
                    color,
                });
            }
        }
    }
    slices
}

pub fn breakdown_by_type(reports: &[ReportRecord]) -> Vec<ChartSlice> {
    breakdown(reports, |r| DamageKind::from_code(&r.damage_type).style().label)
}

pub fn breakdown_by_severity(reports: &[ReportRecord]) -> Vec<ChartSlice> {
    breakdown(reports, |r| SeverityLevel::from_raw(r.severity).style().label)
}

pub fn breakdown_by_status(reports: &[ReportRecord]) -> Vec<ChartSlice> {
    breakdown(reports, |r| CheckStatus::from_flag(r.is_checked).style().label)
}

/// Display styling for one categorical value (badge label + color).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStyle {
    pub label: &'static str,
    pub color: Rgb,
}

/// Damage-type codes reported by users, e.g. "POTHOLE". Codes outside the
/// known set fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    Pothole,
    Crack,
    Rutting,
    Other,
}

impl DamageKind {
    pub fn from_code(code: &str) -> Self {
        let code = code.to_ascii_uppercase();
        if code.contains("POTHOLE") {
            DamageKind::Pothole
        } else if code.contains("CRACK") {
            DamageKind::Crack
        } else if code.contains("RUT") {
            DamageKind::Rutting
        } else {
            DamageKind::Other
        }
    }

    pub fn style(self) -> DisplayStyle {
        match self {
            DamageKind::Pothole => DisplayStyle {
                label: "포트홀",
                color: Rgb(0xdc, 0x26, 0x26),
            },
            DamageKind::Crack => DisplayStyle {
                label: "균열",
                color: Rgb(0xea, 0x58, 0x0c),
            },
            DamageKind::Rutting => DisplayStyle {
                label: "러팅",
                color: Rgb(0xca, 0x8a, 0x04),
            },
            DamageKind::Other => DisplayStyle {
                label: "기타",
                color: Rgb(0x6b, 0x72, 0x80),
            },
        }
    }
}

/// Report severity grades. Raw values are 1-3; anything >= 3 is urgent and
/// out-of-range values clamp into the nearest grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    Urgent,
    High,
    Normal,
}

impl SeverityLevel {
    pub fn from_raw(severity: i64) -> Self {
        if severity >= 3 {
            SeverityLevel::Urgent
        } else if severity == 2 {
            SeverityLevel::High
        } else {
            SeverityLevel::Normal
        }
    }

    pub fn style(self) -> DisplayStyle {
        match self {
            SeverityLevel::Urgent => DisplayStyle {
                label: "긴급",
                color: Rgb(0xdc, 0x26, 0x26),
            },
            SeverityLevel::High => DisplayStyle {
                label: "높음",
                color: Rgb(0xea, 0x58, 0x0c),
            },
            SeverityLevel::Normal => DisplayStyle {
                label: "보통",
                color: Rgb(0x16, 0xa3, 0x4a),
            },
        }
    }
}

/// Checked/unchecked report status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Checked,
    Unchecked,
}

impl CheckStatus {
    pub fn from_flag(is_checked: bool) -> Self {
        if is_checked {
            CheckStatus::Checked
        } else {
            CheckStatus::Unchecked
        }
    }

    pub fn style(self) -> DisplayStyle {
        match self {
            CheckStatus::Checked => DisplayStyle {
                label: "확인됨",
                color: Rgb(0x16, 0xa3, 0x4a),
            },
            CheckStatus::Unchecked => DisplayStyle {
                label: "미확인",
                color: Rgb(0x6b, 0x72, 0x80),
            },
        }
    }
}

/// Stat-card counts for the report panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub total: u64,
    pub unchecked: u64,
    pub checked: u64,
    pub critical: u64,
}

impl ReportSummary {
    pub fn from_records(reports: &[ReportRecord]) -> Self {
        let mut summary = Self {
            total: reports.len() as u64,
            ..Self::default()
        };
        for report in reports {
            if report.is_checked {
                summary.checked += 1;
            } else {
                summary.unchecked += 1;
            }
            if report.severity >= 3 {
                summary.critical += 1;
            }
        }
        summary
    }
}

/// Stat-card counts for the CCTV monitor panel. `maintenance` covers
/// cameras whose record carries no detection array at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    pub total: u64,
    pub detected: u64,
    pub clean: u64,
    pub maintenance: u64,
}

impl DetectionSummary {
    pub fn from_records(records: &[DetectionRecord]) -> Self {
        let mut summary = Self {
            total: records.len() as u64,
            ..Self::default()
        };
        for record in records {
            if record.has_damage() {
                summary.detected += 1;
            } else if record.is_clean() {
                summary.clean += 1;
            } else {
                summary.maintenance += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detection(labels: Option<&[&str]>) -> DetectionRecord {
        DetectionRecord {
            id: "d-1".to_string(),
            cctv_name: "영동고속도로 38km 지점".to_string(),
            cctv_url: None,
            analyze_id: None,
            date: "2024-12-19T09:30:00".to_string(),
            detections: labels.map(|l| l.iter().map(|s| s.to_string()).collect()),
        }
    }

    fn report(severity: i64, damage_type: &str, is_checked: bool) -> ReportRecord {
        ReportRecord {
            id: 1,
            location: "경부고속도로 15km".to_string(),
            severity,
            damage_type: damage_type.to_string(),
            is_checked,
        }
    }

    #[test]
    fn test_label_counts_sum_to_occurrences() {
        let records = vec![
            detection(Some(&["포트홀", "균열", "러팅"])),
            detection(Some(&["포트홀"])),
            detection(Some(&[])),
            detection(None),
        ];
        let counts = top_labels(&records, usize::MAX);
        let total: u64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn test_top_labels_korean_scenario() {
        let records = vec![
            detection(Some(&["포트홀", "균열"])),
            detection(Some(&["포트홀"])),
        ];
        let counts = top_labels(&records, 8);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].label, "포트홀");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].label, "균열");
        assert_eq!(counts[1].count, 1);
    }

    #[test]
    fn test_top_labels_sorted_desc_stable_on_ties() {
        let records = vec![
            detection(Some(&["함몰", "박리", "거북등", "박리"])),
            detection(Some(&["거북등"])),
        ];
        let counts = top_labels(&records, 8);
        // 박리 and 거북등 both count 2, 함몰 counts 1. Ties keep
        // first-encountered order.
        assert_eq!(
            counts
                .iter()
                .map(|c| (c.label.as_str(), c.count))
                .collect::<Vec<_>>(),
            vec![("박리", 2), ("거북등", 2), ("함몰", 1)]
        );
        assert!(counts.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn test_top_labels_truncates_to_n() {
        let labels: Vec<&str> = DAMAGE_LABELS.to_vec();
        let records = vec![detection(Some(&labels))];
        assert_eq!(top_labels(&records, 5).len(), 5);
        assert_eq!(top_labels(&records, 8).len(), 8);
        // Fewer than N distinct labels returns fewer.
        let few = vec![detection(Some(&["포트홀"]))];
        assert_eq!(top_labels(&few, 5).len(), 1);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(top_labels(&[], 8).is_empty());
        assert!(breakdown_by_type(&[]).is_empty());
        assert_eq!(ReportSummary::from_records(&[]), ReportSummary::default());
    }

    #[test]
    fn test_fixed_labels_keep_order_and_zeros() {
        let records = vec![detection(Some(&["포트홀", "포트홀", "뜻밖의라벨"]))];
        let counts = count_fixed_labels(&records);
        assert_eq!(counts.len(), DAMAGE_LABELS.len());
        for (count, label) in counts.iter().zip(DAMAGE_LABELS) {
            assert_eq!(count.label, label);
            let expected = if label == "포트홀" { 2 } else { 0 };
            assert_eq!(count.count, expected, "label {label}");
        }
    }

    #[test]
    fn test_breakdown_sums_to_record_count() {
        let reports = vec![
            report(3, "POTHOLE", false),
            report(2, "CRACK", true),
            report(1, "RUTTING", false),
            report(1, "SINKHOLE", false),
        ];
        for slices in [
            breakdown_by_type(&reports),
            breakdown_by_severity(&reports),
            breakdown_by_status(&reports),
        ] {
            let total: u64 = slices.iter().map(|s| s.value).sum();
            assert_eq!(total, reports.len() as u64);
        }
    }

    #[test]
    fn test_breakdown_unknown_code_falls_back() {
        let reports = vec![report(1, "SINKHOLE", false)];
        let slices = breakdown_by_type(&reports);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "기타");
    }

    #[test]
    fn test_breakdown_palette_wraps() {
        let records: Vec<usize> = (0..7).collect();
        const LABELS: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];
        let slices = breakdown(&records, |&i| LABELS[i]);
        assert_eq!(slices.len(), 7);
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[5].color, PALETTE[0]);
        assert_eq!(slices[6].color, PALETTE[1]);
    }

    #[test]
    fn test_damage_kind_from_code() {
        assert_eq!(DamageKind::from_code("POTHOLE"), DamageKind::Pothole);
        assert_eq!(DamageKind::from_code("pothole"), DamageKind::Pothole);
        assert_eq!(DamageKind::from_code("EDGE_CRACK"), DamageKind::Crack);
        assert_eq!(DamageKind::from_code("RUT"), DamageKind::Rutting);
        assert_eq!(DamageKind::from_code(""), DamageKind::Other);
    }

    #[test]
    fn test_severity_level_from_raw() {
        assert_eq!(SeverityLevel::from_raw(3), SeverityLevel::Urgent);
        assert_eq!(SeverityLevel::from_raw(7), SeverityLevel::Urgent);
        assert_eq!(SeverityLevel::from_raw(2), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_raw(1), SeverityLevel::Normal);
        assert_eq!(SeverityLevel::from_raw(0), SeverityLevel::Normal);
    }

    #[test]
    fn test_report_summary_counts() {
        let reports = vec![
            report(3, "POTHOLE", false),
            report(2, "CRACK", true),
            report(1, "RUT", true),
        ];
        let summary = ReportSummary::from_records(&reports);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.unchecked, 1);
        assert_eq!(summary.checked, 2);
        assert_eq!(summary.critical, 1);
    }

    #[test]
    fn test_detection_summary_counts() {
        let records = vec![
            detection(Some(&["포트홀"])),
            detection(Some(&[])),
            detection(None),
            detection(Some(&["균열", "러팅"])),
        ];
        let summary = DetectionSummary::from_records(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.detected, 2);
        assert_eq!(summary.clean, 1);
        assert_eq!(summary.maintenance, 1);
    }
}
