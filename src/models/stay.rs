use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StayRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rooms: u32,
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
}

impl StayRequest {
    /// Whole nights between check-in and check-out. Check-out is exclusive;
    /// an inverted or same-day range counts as zero nights.
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days().max(0) as u32
    }

    pub fn guests(&self) -> u32 {
        self.adults + self.children
    }
}
