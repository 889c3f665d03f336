use std::fmt;

use chrono::DateTime;
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::utils::{CLOCK_FORMAT, DATETIME_FORMAT};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// A display label paired with the IANA zone it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSpec {
    /// Short label used in the rendered sentence (e.g. 'ET')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub label: String,
    /// IANA timezone name (e.g. 'America/New_York')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub timezone: String,
}

impl ZoneSpec {
    pub fn new(label: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            timezone: timezone.into(),
        }
    }
}

/// Zones a presenter converts between. The UTC leg is always included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Zone the input hour and minute are expressed in
    pub source: ZoneSpec,
    /// Additional zone the equivalent civil time is shown for
    pub secondary: ZoneSpec,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            source: ZoneSpec::new("ET", "America/New_York"),
            secondary: ZoneSpec::new("MT", "America/Denver"),
        }
    }
}

/// One leg of a converted presentation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTime {
    pub label: String,
    /// IANA timezone name
    pub timezone: String,
    /// 24-hour wall-clock time, HH:MM
    pub time: String,
    /// ISO 8601 datetime string with offset
    pub datetime: String,
    /// Whether daylight saving time is active
    pub is_dst: bool,
}

impl ZoneTime {
    pub fn from_datetime(dt: &DateTime<Tz>, label: &str) -> ZoneTime {
        let is_dst = dt.offset().dst_offset().num_seconds() != 0;

        ZoneTime {
            label: label.to_string(),
            timezone: dt.timezone().name().to_string(),
            time: dt.format(CLOCK_FORMAT).to_string(),
            datetime: dt.format(DATETIME_FORMAT).to_string(),
            is_dst,
        }
    }
}

impl fmt::Display for ZoneTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.time)
    }
}

/// The same instant expressed in the source zone, the secondary zone and UTC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationSchedule {
    pub source: ZoneTime,
    pub secondary: ZoneTime,
    pub utc: ZoneTime,
    /// Offset of the secondary zone relative to the source zone
    pub time_difference: String,
}

impl fmt::Display for PresentationSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.source, self.secondary, self.utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_time(label: &str, timezone: &str, time: &str) -> ZoneTime {
        ZoneTime {
            label: label.to_string(),
            timezone: timezone.to_string(),
            time: time.to_string(),
            datetime: String::new(),
            is_dst: false,
        }
    }

    #[test]
    fn test_schedule_display() {
        let schedule = PresentationSchedule {
            source: zone_time("ET", "America/New_York", "14:30"),
            secondary: zone_time("MT", "America/Denver", "12:30"),
            utc: zone_time("UTC", "UTC", "18:30"),
            time_difference: "-2h".to_string(),
        };

        assert_eq!(schedule.to_string(), "ET: 14:30, MT: 12:30, UTC: 18:30");
    }

    #[test]
    fn test_config_trimming() {
        let json = r#"{
            "source": {"label": "  PT ", "timezone": "  America/Los_Angeles  "},
            "secondary": {"label": "CET", "timezone": "   Europe/Paris"}
        }"#;
        let config: PresenterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.source, ZoneSpec::new("PT", "America/Los_Angeles"));
        assert_eq!(config.secondary, ZoneSpec::new("CET", "Europe/Paris"));
    }

    #[test]
    fn test_default_config_zones() {
        let config = PresenterConfig::default();
        assert_eq!(config.source.timezone, "America/New_York");
        assert_eq!(config.secondary.timezone, "America/Denver");
    }

    #[test]
    fn test_zone_time_serialization() {
        let json = serde_json::to_string(&zone_time("UTC", "UTC", "00:00")).unwrap();
        assert!(json.contains(r#""time":"00:00""#));
        assert!(json.contains(r#""is_dst":false"#));
    }
}
