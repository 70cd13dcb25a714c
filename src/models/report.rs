use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

use crate::scraping::constants::SLOT_FORMAT;

fn serialize_slot<S: Serializer>(slot: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&slot.format(SLOT_FORMAT))
}

/// Earliest open slot found for a single target city.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CityResult {
    pub city: String,
    #[serde(serialize_with = "serialize_slot")]
    pub earliest_datetime: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct AggregateReport {
    pub timestamp: DateTime<Utc>,
    pub results: Vec<CityResult>,
    pub earliest_overall: Option<CityResult>,
}

impl AggregateReport {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use serde_json::{Value, json};

    fn slot(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), SLOT_FORMAT).unwrap()
    }

    #[test]
    fn report_serializes_slot_as_minute_precision_string() {
        let entry = CityResult {
            city: "San Jose".to_string(),
            earliest_datetime: slot("2025-10-05", "09:00"),
        };
        let report = AggregateReport {
            timestamp: Utc.with_ymd_and_hms(2025, 9, 30, 12, 0, 0).unwrap(),
            results: vec![entry.clone()],
            earliest_overall: Some(entry),
        };

        let value: Value = serde_json::from_str(&report.to_pretty_json().unwrap()).unwrap();

        assert_eq!(
            value,
            json!({
                "timestamp": "2025-09-30T12:00:00Z",
                "results": [{ "city": "San Jose", "earliest_datetime": "2025-10-05 09:00" }],
                "earliest_overall": { "city": "San Jose", "earliest_datetime": "2025-10-05 09:00" }
            })
        );
    }

    #[test]
    fn missing_overall_is_null() {
        let report = AggregateReport {
            timestamp: NaiveDate::from_ymd_opt(2025, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                .and_utc(),
            results: vec![],
            earliest_overall: None,
        };

        let value: Value = serde_json::to_value(&report).unwrap();
        assert!(value["earliest_overall"].is_null());
        assert_eq!(value["results"], json!([]));
    }
}
