//! # Expiry Module
//!
//! Expiry-date bookkeeping for inventory items: date parsing, days-left arithmetic,
//! the status shown next to each item and the counters of the statistics view.
//!
//! All functions take `today` explicitly so results do not depend on the clock.

use crate::inventory::Item;
use crate::localization::LocalizationManager;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

/// Date format used for every persisted date
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Items expiring within this many days count as urgent
pub const URGENT_DAYS: i64 = 3;

/// Items expiring within this many days count as expiring this week
pub const WEEK_DAYS: i64 = 7;

/// Parse a `DD-MM-YYYY` date; anything else yields `None`
pub fn parse_expiry_date(text: &str) -> Option<NaiveDate> {
    let parsed = NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok();
    if parsed.is_none() {
        debug!("Unparsable date: '{}'", text);
    }
    parsed
}

/// Format a date as `DD-MM-YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Calendar days from `today` to `expiry`, negative once past
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Days left for an item, `None` without a valid expiry date
pub fn days_left(item: &Item, today: NaiveDate) -> Option<i64> {
    item.expiry_date
        .as_deref()
        .and_then(parse_expiry_date)
        .map(|expiry| days_until_expiry(expiry, today))
}

/// Expiry status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "days", rename_all = "camelCase")]
pub enum ExpiryStatus {
    /// No (valid) expiry date
    Unknown,
    /// Past its date; carries the (negative) days left
    Expired(i64),
    /// Expires today
    ExpiresToday,
    /// Expires within three days
    Urgent(i64),
    /// Expires within a week
    ThisWeek(i64),
    /// More than a week left
    Fresh(i64),
}

impl ExpiryStatus {
    /// Status for a number of days left
    pub fn from_days(days: Option<i64>) -> Self {
        match days {
            None => ExpiryStatus::Unknown,
            Some(d) if d < 0 => ExpiryStatus::Expired(d),
            Some(0) => ExpiryStatus::ExpiresToday,
            Some(d) if d <= URGENT_DAYS => ExpiryStatus::Urgent(d),
            Some(d) if d <= WEEK_DAYS => ExpiryStatus::ThisWeek(d),
            Some(d) => ExpiryStatus::Fresh(d),
        }
    }

    /// Status of an item on a given day
    pub fn of_item(item: &Item, today: NaiveDate) -> Self {
        Self::from_days(days_left(item, today))
    }

    /// Icon shown next to the status
    pub fn icon(&self) -> &'static str {
        match self {
            ExpiryStatus::Unknown => "📅",
            ExpiryStatus::Expired(_) => "⚠️",
            ExpiryStatus::ExpiresToday => "🚨",
            ExpiryStatus::Urgent(_) => "⏰",
            ExpiryStatus::ThisWeek(_) => "⏳",
            ExpiryStatus::Fresh(_) => "✅",
        }
    }

    /// Localized status text
    pub fn label(&self, localization: &LocalizationManager) -> String {
        match self {
            ExpiryStatus::Unknown => localization.get_message("expiry-unknown", None),
            ExpiryStatus::Expired(_) => localization.get_message("expiry-expired", None),
            ExpiryStatus::ExpiresToday => localization.get_message("expiry-today", None),
            ExpiryStatus::Urgent(days) | ExpiryStatus::ThisWeek(days) | ExpiryStatus::Fresh(days) => {
                localization.get_message_with_args("expiry-days", &[("days", &days.to_string())])
            }
        }
    }
}

/// Counters for the statistics view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiryStats {
    /// Items past their date
    pub expired: usize,
    /// Items expiring today or within three days
    pub expiring_soon: usize,
    /// Items expiring today or within seven days
    pub expiring_this_week: usize,
    /// Items with a non-blank expiry date, valid or not
    pub total_with_expiry: usize,
}

/// Compute expiry counters over a set of items
pub fn expiry_stats<'a, I>(items: I, today: NaiveDate) -> ExpiryStats
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut stats = ExpiryStats::default();
    for item in items {
        if item
            .expiry_date
            .as_deref()
            .is_some_and(|date| !date.trim().is_empty())
        {
            stats.total_with_expiry += 1;
        }
        match days_left(item, today) {
            Some(d) if d < 0 => stats.expired += 1,
            Some(d) => {
                if d <= URGENT_DAYS {
                    stats.expiring_soon += 1;
                }
                if d <= WEEK_DAYS {
                    stats.expiring_this_week += 1;
                }
            }
            None => {}
        }
    }
    stats
}

/// Items past their expiry date
pub fn expired_items<'a, I>(items: I, today: NaiveDate) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| matches!(days_left(item, today), Some(d) if d < 0))
        .collect()
}

/// Items expiring between today and `days` days from now, inclusive
pub fn expiring_within<'a, I>(items: I, today: NaiveDate, days: i64) -> Vec<&'a Item>
where
    I: IntoIterator<Item = &'a Item>,
{
    items
        .into_iter()
        .filter(|item| matches!(days_left(item, today), Some(d) if (0..=days).contains(&d)))
        .collect()
}
