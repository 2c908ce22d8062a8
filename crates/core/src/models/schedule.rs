//! Class schedule and enrollment models

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One scheduled class session in a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub id: String,
    pub class_name: String,
    pub professor_id: String,
    pub professor_name: String,
    pub room_id: String,
    pub room_name: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub date: NaiveDate,
    pub enrolled_students: u32,
    pub max_capacity: u32,
}

impl ClassSchedule {
    /// Enrollment as a rounded percentage of the class cap
    pub fn fill_percentage(&self) -> u8 {
        if self.max_capacity == 0 {
            return 0;
        }
        let ratio = f64::from(self.enrolled_students) / f64::from(self.max_capacity);
        (ratio * 100.0).round().min(100.0) as u8
    }
}

/// A student and the schedule ids they are enrolled in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub enrolled_classes: Vec<String>,
}

/// Times are written as `HH:MM`
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
