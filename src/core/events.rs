//! Event list filters relative to today.

use crate::models::event::Event;
use chrono::NaiveDate;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EventFilter {
    #[default]
    All,
    /// Today and later.
    Upcoming,
    /// Strictly before today.
    Past,
}

impl Event {
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.naive_date() == Some(day)
    }
}

/// Keep the events matching `filter`. Events with an unreadable date only
/// show up under `All`.
pub fn filter_events(events: &[Event], filter: EventFilter, today: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| match filter {
            EventFilter::All => true,
            EventFilter::Upcoming => e.naive_date().is_some_and(|d| d >= today),
            EventFilter::Past => e.naive_date().is_some_and(|d| d < today),
        })
        .collect()
}

/// `TODAY` badge for the event held on `today`.
pub fn badge(event: &Event, today: NaiveDate) -> &'static str {
    if event.is_on(today) { "TODAY" } else { "" }
}
