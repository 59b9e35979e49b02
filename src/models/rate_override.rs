use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// A date-range-scoped replacement for a hotel's base nightly rate.
/// Both endpoints of the range are inclusive.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateOverride {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub hotel_id: ObjectId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price_per_night: f64,
    #[serde(default = "default_is_available")]
    pub is_available: bool,
    pub created_at: Option<DateTime>,
}

fn default_is_available() -> bool {
    true
}

impl RateOverride {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Number of calendar days the override spans, endpoints included.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn override_for(start: NaiveDate, end: NaiveDate) -> RateOverride {
        RateOverride {
            id: None,
            hotel_id: ObjectId::new(),
            start_date: start,
            end_date: end,
            price_per_night: 150.0,
            is_available: true,
            created_at: None,
        }
    }

    #[test]
    fn test_covers_is_inclusive_on_both_ends() {
        let rule = override_for(date(2025, 12, 20), date(2025, 12, 31));
        assert!(rule.covers(date(2025, 12, 20)));
        assert!(rule.covers(date(2025, 12, 31)));
        assert!(rule.covers(date(2025, 12, 25)));
        assert!(!rule.covers(date(2025, 12, 19)));
        assert!(!rule.covers(date(2026, 1, 1)));
    }

    #[test]
    fn test_span_days_counts_endpoints() {
        let single_day = override_for(date(2025, 12, 24), date(2025, 12, 24));
        assert_eq!(single_day.span_days(), 1);

        let week = override_for(date(2025, 12, 20), date(2025, 12, 26));
        assert_eq!(week.span_days(), 7);
    }

    #[test]
    fn test_is_available_defaults_to_true() {
        let rule: RateOverride = serde_json::from_value(serde_json::json!({
            "hotel_id": { "$oid": "65f0a1b2c3d4e5f6a7b8c9d0" },
            "start_date": "2025-12-20",
            "end_date": "2025-12-31",
            "price_per_night": 180.0
        }))
        .unwrap();
        assert!(rule.is_available);
    }
}
