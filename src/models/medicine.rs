use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::days::DaysOfWeek;

/// A medicine entry as shown in the list: what to take, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medicine {
    /// Backing-store identifier. `None` until the record has been saved.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub hour_of_day: u32,
    pub minute: u32,
    #[serde(default)]
    pub days_of_week: DaysOfWeek,
}

impl Medicine {
    pub fn new(
        id: Option<String>,
        name: impl Into<String>,
        hour_of_day: u32,
        minute: u32,
        days_of_week: DaysOfWeek,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            hour_of_day,
            minute,
            days_of_week,
        }
    }

    /// Daily intake time, if the stored hour/minute form a valid clock time.
    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour_of_day, self.minute, 0)
    }

    /// True when this record carries exactly the given id.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}
