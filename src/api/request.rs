use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{OverrideEntry, RotationPolicy, TimeWindow};

/// Corps de `POST /schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    pub schedule: RotationPolicy,
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}

impl ScheduleRequest {
    pub fn window(&self) -> TimeWindow {
        TimeWindow {
            from: self.from,
            until: self.until,
        }
    }
}
