//! Home-screen widget entries built from the shared state

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::Result;
use crate::store::{PLACEHOLDER_HAIKU, SharedStore, SharedWeatherState};

/// Spacing between timeline entries
pub const ENTRY_SPACING_MINUTES: i64 = 5;
/// Span covered by one timeline
pub const TIMELINE_SPAN_MINUTES: i64 = 30;

/// One rendered widget state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetEntry {
    pub date: DateTime<Utc>,
    pub haiku: String,
    pub last_updated: DateTime<Utc>,
}

/// Entries to display plus when to ask for the next timeline
#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub entries: Vec<WidgetEntry>,
    pub refresh_at: DateTime<Utc>,
}

/// Reads the shared state on behalf of the widget process
#[derive(Debug, Clone)]
pub struct WidgetProvider<S> {
    state: SharedWeatherState<S>,
}

impl<S: SharedStore> WidgetProvider<S> {
    pub fn new(store: S) -> Self {
        Self {
            state: SharedWeatherState::new(store),
        }
    }

    /// Entry shown while the widget gallery renders
    #[must_use]
    pub fn placeholder(&self, now: DateTime<Utc>) -> WidgetEntry {
        WidgetEntry {
            date: now,
            haiku: PLACEHOLDER_HAIKU.to_string(),
            last_updated: now,
        }
    }

    /// Current state as a single entry
    pub async fn snapshot(&self, now: DateTime<Utc>) -> Result<WidgetEntry> {
        let haiku = self.state.current_haiku().await?;
        let last_updated = self.state.last_updated().await?.unwrap_or(now);
        Ok(WidgetEntry {
            date: now,
            haiku,
            last_updated,
        })
    }

    /// One entry every five minutes for the next half hour, refreshing after five
    pub async fn timeline(&self, now: DateTime<Utc>) -> Result<Timeline> {
        let snapshot = self.snapshot(now).await?;

        let entries = (0..TIMELINE_SPAN_MINUTES)
            .step_by(ENTRY_SPACING_MINUTES as usize)
            .map(|offset| WidgetEntry {
                date: now + Duration::minutes(offset),
                ..snapshot.clone()
            })
            .collect();

        Ok(Timeline {
            entries,
            refresh_at: now + Duration::minutes(ENTRY_SPACING_MINUTES),
        })
    }
}
