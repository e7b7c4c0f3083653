use thiserror::Error;

use crate::calendar::{events_from_days, render_calendar};
use crate::menu::api::{ApiError, MenuApi, MenuClient};
use crate::menu::model::FormatError;
use crate::storage::config::Config;
use crate::storage::output::{OutputError, OutputFile};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary {
    pub events: usize,
    pub skipped_days: usize,
    pub skipped_items: usize,
}

pub struct MenuPipeline {
    config: Config,
}

impl MenuPipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<PipelineSummary, PipelineError> {
        let client = MenuClient::new(
            self.config.menu.endpoint.clone(),
            self.config.menu.district.clone(),
        );
        self.run_with_api(&client).await
    }

    pub async fn run_with_api(&self, api: &dyn MenuApi) -> Result<PipelineSummary, PipelineError> {
        let menu = api.fetch_menu().await?;
        let days = menu.days()?;

        let outcome = events_from_days(days);
        tracing::info!(
            "Transformed {} events ({} days skipped, {} items skipped)",
            outcome.events.len(),
            outcome.skipped_days,
            outcome.skipped_items
        );

        let contents = render_calendar(&outcome.events);

        let output = OutputFile::new(self.config.output.path.clone());
        output.write(&contents)?;
        tracing::info!("Wrote calendar to {}", output.path().display());

        Ok(PipelineSummary {
            events: outcome.events.len(),
            skipped_days: outcome.skipped_days,
            skipped_items: outcome.skipped_items,
        })
    }
}
