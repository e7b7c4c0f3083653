use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Response is missing the top-level data object")]
    MissingData,
    #[error("Response data is missing the day list")]
    MissingDays,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuResponse {
    pub data: Option<MenuData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuData {
    pub days: Option<Vec<MenuDay>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuDay {
    pub date: Option<String>,
    pub menu_items: Option<Vec<MenuItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub name: Option<String>,
}

impl MenuResponse {
    pub fn days(&self) -> Result<&[MenuDay], FormatError> {
        let data = self.data.as_ref().ok_or(FormatError::MissingData)?;
        let days = data.days.as_ref().ok_or(FormatError::MissingDays)?;
        Ok(days)
    }
}
