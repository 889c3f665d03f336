use chrono::{DateTime, Offset};
use chrono_tz::Tz;

use crate::core::error::{PresentationTimeError, PresentationTimeResult};

// Constants for formats and the fixed message template
pub const CLOCK_FORMAT: &str = "%H:%M";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";
pub const UTC_LABEL: &str = "UTC";
pub const PRESENTATION_PREFIX: &str = "Online presentation starts at ";
pub const PRESENTATION_HOUR: i32 = 14;
pub const PRESENTATION_MINUTE: i32 = 30;

const MAX_HOUR: u32 = 23;
const MAX_MINUTE: u32 = 59;

/// Validate an hour/minute pair, rejecting anything that would wrap
pub fn validate_clock(hour: i32, minute: i32) -> PresentationTimeResult<(u32, u32)> {
    let hour = validate_component("hour", hour, MAX_HOUR)?;
    let minute = validate_component("minute", minute, MAX_MINUTE)?;
    Ok((hour, minute))
}

fn validate_component(
    argument: &'static str,
    value: i32,
    max: u32,
) -> PresentationTimeResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| PresentationTimeError::invalid_argument(argument, value, max))
}

/// Format an offset difference in hours, e.g. `-2h` or `+5.5h`
pub fn format_time_difference(hours_difference: f64) -> String {
    match hours_difference.fract() {
        0.0 => format!("{:+.0}h", hours_difference),
        _ => {
            let formatted = format!("{:+}", hours_difference);
            let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
            format!("{}h", trimmed)
        }
    }
}

/// Offset of `target` relative to `source` at their (shared) instant
pub fn calculate_time_difference(source: &DateTime<Tz>, target: &DateTime<Tz>) -> String {
    let source_offset = source.offset().fix().local_minus_utc();
    let target_offset = target.offset().fix().local_minus_utc();
    let hours_difference = f64::from(target_offset - source_offset) / 3600.0;

    format_time_difference(hours_difference)
}
