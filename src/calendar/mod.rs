pub mod event;
pub mod ics;

pub use event::{CalendarEvent, TransformOutcome, events_from_days, normalize_date};
pub use ics::render_calendar;
