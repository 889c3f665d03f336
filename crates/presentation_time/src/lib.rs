//! Presentation Time
//!
//! Renders the start time of an online presentation, given in Eastern time,
//! alongside the equivalent Mountain time and UTC:
//!
//! ```
//! let message = presentation_time::presentation_time().unwrap();
//! assert!(message.starts_with("Online presentation starts at ET: 14:30, MT: "));
//! ```
//!
//! Conversions preserve the instant, so the displayed clocks follow each
//! zone's daylight saving state for the current date. Use
//! [`TimePresenter::convert_on`] to pin the date.

use std::sync::LazyLock;

pub mod core;
pub mod logging;

pub use crate::core::{
    error::{PresentationTimeError, PresentationTimeResult},
    models::{PresentationSchedule, PresenterConfig, ZoneSpec, ZoneTime},
    provider::TimePresenter,
};
pub use crate::logging::init_logging;

static DEFAULT_PRESENTER: LazyLock<TimePresenter> = LazyLock::new(TimePresenter::new);

/// Convert `hour:minute` Eastern time on today's date into
/// `"ET: HH:MM, MT: HH:MM, UTC: HH:MM"`
pub fn convert_presentation_time(hour: i32, minute: i32) -> PresentationTimeResult<String> {
    DEFAULT_PRESENTER.convert(hour, minute)
}

/// The fixed 14:30 ET presentation announcement
pub fn presentation_time() -> PresentationTimeResult<String> {
    DEFAULT_PRESENTER.present()
}
