use serde::{Deserialize, Serialize};

/// Response envelope shared by every Helios endpoint.
///
/// Aggregation only ever consumes the `data` array; a missing or null
/// `data` on a successful response is treated as an empty record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub data: Option<Vec<T>>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_records(self) -> Vec<T> {
        self.data.unwrap_or_default()
    }
}

/// One CCTV analysis result from `analyze/get-analyze` / `analyze/get-detected`.
///
/// `detections` is tri-state on the wire: absent/null while the camera is
/// under maintenance, an empty array for a clean road, and a list of
/// damage-type labels otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    pub id: String,
    pub cctv_name: String,
    #[serde(default)]
    pub cctv_url: Option<String>,
    #[serde(default)]
    pub analyze_id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub detections: Option<Vec<String>>,
}

impl DetectionRecord {
    pub fn labels(&self) -> &[String] {
        self.detections.as_deref().unwrap_or(&[])
    }

    pub fn has_damage(&self) -> bool {
        self.detections.as_ref().is_some_and(|d| !d.is_empty())
    }

    pub fn is_clean(&self) -> bool {
        self.detections.as_ref().is_some_and(|d| d.is_empty())
    }

    pub fn in_maintenance(&self) -> bool {
        self.detections.is_none()
    }
}

/// One user-submitted damage report from `report/get-all`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    pub id: i64,
    pub location: String,
    pub severity: i64,
    pub damage_type: String,
    pub is_checked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_missing_data_is_empty() {
        let json = r#"{"success":true,"code":200,"message":"ok"}"#;
        let envelope: ApiEnvelope<ReportRecord> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_records().is_empty());
    }

    #[test]
    fn test_envelope_null_data_is_empty() {
        let json = r#"{"success":false,"code":500,"message":"oops","data":null}"#;
        let envelope: ApiEnvelope<ReportRecord> = serde_json::from_str(json).unwrap();
        assert!(envelope.into_records().is_empty());
    }

    #[test]
    fn test_detection_record_camel_case() {
        let json = r#"{
            "id": "damage-1",
            "cctvName": "영동고속도로 38km 지점",
            "cctvUrl": "http://cctv.example/38km",
            "analyzeId": 17,
            "date": "2024-12-19T09:30:00",
            "detections": ["포트홀", "균열"]
        }"#;
        let record: DetectionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cctv_name, "영동고속도로 38km 지점");
        assert_eq!(record.labels(), ["포트홀", "균열"]);
        assert!(record.has_damage());
        assert!(!record.in_maintenance());
    }

    #[test]
    fn test_detection_record_null_detections_is_maintenance() {
        let json = r#"{"id":"x","cctvName":"c","date":"2024-12-19","detections":null}"#;
        let record: DetectionRecord = serde_json::from_str(json).unwrap();
        assert!(record.in_maintenance());
        assert!(!record.is_clean());
        assert!(record.labels().is_empty());
    }

    #[test]
    fn test_detection_record_empty_detections_is_clean() {
        let json = r#"{"id":"x","cctvName":"c","date":"2024-12-19","detections":[]}"#;
        let record: DetectionRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_clean());
        assert!(!record.has_damage());
    }

    #[test]
    fn test_report_record_camel_case() {
        let json = r#"{
            "id": 3,
            "location": "경부고속도로 서울 방향 15km",
            "severity": 2,
            "damageType": "POTHOLE",
            "isChecked": false
        }"#;
        let record: ReportRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.damage_type, "POTHOLE");
        assert!(!record.is_checked);
    }
}
