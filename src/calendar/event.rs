use crate::menu::model::MenuDay;

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub summary: String,
    pub date: String,
}

#[derive(Debug, Default, PartialEq)]
pub struct TransformOutcome {
    pub events: Vec<CalendarEvent>,
    pub skipped_days: usize,
    pub skipped_items: usize,
}

pub fn normalize_date(date: &str) -> String {
    date.replace('-', "")
}

pub fn events_from_days(days: &[MenuDay]) -> TransformOutcome {
    let mut outcome = TransformOutcome::default();

    for day in days {
        match (&day.date, &day.menu_items) {
            (Some(date), Some(items)) => {
                let date = normalize_date(date);
                for item in items {
                    match &item.name {
                        Some(name) => outcome.events.push(CalendarEvent {
                            summary: name.clone(),
                            date: date.clone(),
                        }),
                        None => outcome.skipped_items += 1,
                    }
                }
            }
            _ => outcome.skipped_days += 1,
        }
    }

    outcome
}
