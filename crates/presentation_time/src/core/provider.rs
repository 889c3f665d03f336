use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::core::{
    error::{PresentationTimeError, PresentationTimeResult},
    models::{PresentationSchedule, PresenterConfig, ZoneTime},
    utils::{self, PRESENTATION_HOUR, PRESENTATION_MINUTE, PRESENTATION_PREFIX, UTC_LABEL},
};

/// A zone resolved against the timezone database, with its display label
#[derive(Debug, Clone)]
struct ResolvedZone {
    label: String,
    timezone: Tz,
}

/// Converts presentation times from a source zone into a secondary zone and UTC
#[derive(Debug, Clone)]
pub struct TimePresenter {
    source: ResolvedZone,
    secondary: ResolvedZone,
}

impl TimePresenter {
    /// Presenter for the default ET/MT zones
    pub fn new() -> Self {
        Self {
            source: ResolvedZone {
                label: "ET".to_string(),
                timezone: chrono_tz::America::New_York,
            },
            secondary: ResolvedZone {
                label: "MT".to_string(),
                timezone: chrono_tz::America::Denver,
            },
        }
    }

    /// Resolve the configured zone names once, up front
    pub fn from_config(config: &PresenterConfig) -> PresentationTimeResult<Self> {
        let source = ResolvedZone {
            label: config.source.label.clone(),
            timezone: parse_timezone(&config.source.timezone)?,
        };
        let secondary = ResolvedZone {
            label: config.secondary.label.clone(),
            timezone: parse_timezone(&config.secondary.timezone)?,
        };

        tracing::debug!(
            source = %source.timezone,
            secondary = %secondary.timezone,
            "Resolved presenter zones"
        );

        Ok(Self { source, secondary })
    }

    pub fn source_timezone(&self) -> Tz {
        self.source.timezone
    }

    pub fn secondary_timezone(&self) -> Tz {
        self.secondary.timezone
    }

    /// Today's date as observed in the source zone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.source.timezone).date_naive()
    }

    /// Convert `hour:minute` on today's date in the source zone
    pub fn convert(&self, hour: i32, minute: i32) -> PresentationTimeResult<String> {
        self.convert_on(self.today(), hour, minute)
    }

    /// Convert `hour:minute` on an explicit date in the source zone
    pub fn convert_on(
        &self,
        date: NaiveDate,
        hour: i32,
        minute: i32,
    ) -> PresentationTimeResult<String> {
        Ok(self.schedule_on(date, hour, minute)?.to_string())
    }

    pub fn present(&self) -> PresentationTimeResult<String> {
        self.present_on(self.today())
    }

    pub fn present_on(&self, date: NaiveDate) -> PresentationTimeResult<String> {
        let times = self.convert_on(date, PRESENTATION_HOUR, PRESENTATION_MINUTE)?;
        Ok(format!("{}{}", PRESENTATION_PREFIX, times))
    }

    /// Structured form of [`TimePresenter::convert_on`]
    pub fn schedule_on(
        &self,
        date: NaiveDate,
        hour: i32,
        minute: i32,
    ) -> PresentationTimeResult<PresentationSchedule> {
        let (hour, minute) = utils::validate_clock(hour, minute)?;
        let local = date
            .and_hms_opt(hour, minute, 0)
            .ok_or_else(|| PresentationTimeError::invalid_argument("hour", hour as i32, 23))?;

        let source_time = resolve_local(&self.source.timezone, &local);
        let secondary_time = source_time.with_timezone(&self.secondary.timezone);
        let utc_time = source_time.with_timezone(&chrono_tz::UTC);

        tracing::debug!(
            source = %source_time,
            secondary = %secondary_time,
            utc = %utc_time,
            "Converted presentation time"
        );

        Ok(PresentationSchedule {
            source: ZoneTime::from_datetime(&source_time, &self.source.label),
            secondary: ZoneTime::from_datetime(&secondary_time, &self.secondary.label),
            utc: ZoneTime::from_datetime(&utc_time, UTC_LABEL),
            time_difference: utils::calculate_time_difference(&source_time, &secondary_time),
        })
    }
}

impl Default for TimePresenter {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn parse_timezone(timezone_name: &str) -> PresentationTimeResult<Tz> {
    Tz::from_str(timezone_name).map_err(|_| PresentationTimeError::TimeZoneDatabaseUnavailable {
        timezone: timezone_name.to_string(),
    })
}

/// Pin a wall-clock time to an instant in `tz`.
///
/// Inside a fall-back overlap the earlier offset wins. Inside a spring-forward
/// gap the time is read with the offset in force before the gap, which moves
/// it later by the gap's length.
fn resolve_local(tz: &Tz, local: &NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(local) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, latest) => {
            tracing::warn!(
                %local,
                %earliest,
                %latest,
                "Ambiguous local time during DST transition, using earlier offset"
            );
            earliest
        }
        LocalResult::None => {
            // Transitions are never less than a day apart
            let before_gap = *local - TimeDelta::days(1);
            let offset = tz.offset_from_utc_datetime(&before_gap).fix();
            let instant = *local - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
            let shifted = tz.from_utc_datetime(&instant);

            tracing::warn!(
                %local,
                %shifted,
                "Local time falls in a DST gap, shifting forward"
            );
            shifted
        }
    }
}
