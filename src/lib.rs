pub mod calendar;
pub mod menu;
pub mod pipeline;
pub mod storage;

pub use calendar::{CalendarEvent, render_calendar};
pub use menu::{MenuClient, MenuResponse};
pub use pipeline::{MenuPipeline, PipelineError, PipelineSummary};
