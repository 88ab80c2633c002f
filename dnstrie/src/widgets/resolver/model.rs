use std::collections::VecDeque;
use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// Maximum number of lookups kept in the history.
pub(crate) const HISTORY_CAPACITY: usize = 5;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a lookup completion time for the history list.
pub(crate) fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Decoded answer of the resolution endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupResponse {
    pub(crate) address: String,
    /// The server created the mapping while answering this lookup.
    pub(crate) is_new: bool,
}

/// User-visible note below the resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Note {
    NewMapping,
    ServerError,
}

impl Note {
    pub(crate) fn message(self) -> &'static str {
        match self {
            Note::NewMapping => {
                "New domain detected. Generated random IP address."
            },
            Note::ServerError => "Server error occurred.",
        }
    }

    pub(crate) fn is_error(self) -> bool {
        matches!(self, Note::ServerError)
    }
}

/// One completed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupHistoryEntry {
    pub(crate) domain: String,
    pub(crate) address: String,
    pub(crate) timestamp: String,
}

/// Most-recent-first lookup history capped at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default)]
pub(crate) struct LookupHistory {
    entries: VecDeque<LookupHistoryEntry>,
}

impl LookupHistory {
    /// Insert `entry` at the front, evicting the oldest entry when full.
    pub(crate) fn push_front(&mut self, entry: LookupHistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub(crate) fn get(&self, index: usize) -> Option<&LookupHistoryEntry> {
        self.entries.get(index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &LookupHistoryEntry> {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read-only view model for the resolver views.
#[derive(Debug, Clone)]
pub(crate) struct ResolverViewModel<'a> {
    pub(crate) input: &'a str,
    pub(crate) address: Option<&'a str>,
    pub(crate) note: Option<Note>,
    pub(crate) is_loading: bool,
    pub(crate) can_submit: bool,
    pub(crate) history: &'a LookupHistory,
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};

    use super::{
        HISTORY_CAPACITY, LookupHistory, LookupHistoryEntry, format_timestamp,
    };

    fn entry(domain: &str) -> LookupHistoryEntry {
        LookupHistoryEntry {
            domain: String::from(domain),
            address: String::from("10.0.0.1"),
            timestamp: String::from("2024-01-01 00:00:00"),
        }
    }

    #[test]
    fn given_full_history_when_entry_pushed_then_oldest_is_evicted() {
        let mut history = LookupHistory::default();
        for index in 0..HISTORY_CAPACITY {
            history.push_front(entry(&format!("d{index}.com")));
        }

        history.push_front(entry("new.com"));

        let domains: Vec<&str> =
            history.iter().map(|entry| entry.domain.as_str()).collect();
        assert_eq!(
            domains,
            vec!["new.com", "d4.com", "d3.com", "d2.com", "d1.com"]
        );
    }

    #[test]
    fn given_empty_history_when_entry_pushed_then_it_is_first() {
        let mut history = LookupHistory::default();

        history.push_front(entry("example.com"));

        assert_eq!(history.len(), 1);
        assert_eq!(
            history.get(0).map(|entry| entry.domain.as_str()),
            Some("example.com")
        );
    }

    #[test]
    fn given_datetime_when_formatted_then_local_fields_are_used() {
        let offset =
            FixedOffset::east_opt(2 * 3600).expect("offset should be valid");
        let time = offset
            .with_ymd_and_hms(2024, 3, 9, 7, 5, 1)
            .single()
            .expect("time should be valid");

        assert_eq!(format_timestamp(&time), "2024-03-09 07:05:01");
    }
}
