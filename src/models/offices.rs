use serde::Deserialize;

/// One field office as published by the appointment scheduler feed.
///
/// Only the fields the aggregator reads are modelled, everything else in the
/// feed is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeRecord {
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotGroup>,
}

#[derive(Debug, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
}

/// A calendar date and the times of day still open on it.
#[derive(Debug, Deserialize)]
pub struct TimeSlotGroup {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub times: Vec<String>,
}

impl OfficeRecord {
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref()?.city.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_feed_shape() {
        let raw = json!([
            {
                "id": 42,
                "address": { "city": "Oakland", "zip": "94612" },
                "timeSlots": [
                    { "date": "2025-10-05", "times": ["09:00", "13:30"] }
                ]
            },
            { "address": {} },
            {}
        ]);

        let offices: Vec<OfficeRecord> = serde_json::from_value(raw).unwrap();

        assert_eq!(offices.len(), 3);
        assert_eq!(offices[0].city(), Some("Oakland"));
        assert_eq!(offices[0].time_slots[0].date.as_deref(), Some("2025-10-05"));
        assert_eq!(offices[0].time_slots[0].times, vec!["09:00", "13:30"]);
        assert_eq!(offices[1].city(), None);
        assert!(offices[2].address.is_none());
        assert!(offices[2].time_slots.is_empty());
    }

    #[test]
    fn non_list_times_is_a_shape_error() {
        let raw = json!([{ "address": { "city": "Oakland" }, "timeSlots": [{ "times": "09:00" }] }]);
        assert!(serde_json::from_value::<Vec<OfficeRecord>>(raw).is_err());
    }
}
