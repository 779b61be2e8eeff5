use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use crate::api::ApiConfig;
#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub api: std::sync::Arc<ApiConfig>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// Grid/list display toggle for movie collections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown view mode: '{0}'")]
pub struct ParseViewModeError(pub String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "list" => Ok(Self::List),
            _ => Err(ParseViewModeError(s.chars().take(50).collect())),
        }
    }
}

/// How the category header treats a filtered count larger than the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountPolicy {
    /// Show the counts as given.
    #[default]
    Allow,
    /// Show the filtered count capped at the total.
    Clamp,
    /// Omit the count line.
    Hide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("Filtered count {filtered} exceeds total count {total}")]
    FilteredExceedsTotal { filtered: usize, total: usize },
}

/// Everything the category banner displays.
#[derive(Clone)]
pub struct CategoryHeaderData {
    pub title: String,
    pub description: String,
    /// Tailwind gradient stops, e.g. `from-red-600 to-orange-500`.
    pub color_theme: String,
    pub icon: icondata::Icon,
    pub total_count: usize,
    pub filtered_count: usize,
}

impl CategoryHeaderData {
    /// Checks that the filtered count does not exceed the total.
    ///
    /// # Errors
    ///
    /// Returns [`CountError::FilteredExceedsTotal`] for inconsistent counts.
    pub const fn check_counts(&self) -> Result<(), CountError> {
        if self.filtered_count > self.total_count {
            return Err(CountError::FilteredExceedsTotal {
                filtered: self.filtered_count,
                total: self.total_count,
            });
        }
        Ok(())
    }

    /// Text of the "Showing X of Y movies" line, if it should be shown at all.
    ///
    /// Nothing is shown while the total is zero, whatever the filtered count.
    #[must_use]
    pub fn count_line(&self, policy: CountPolicy) -> Option<String> {
        if self.total_count == 0 {
            return None;
        }
        let shown = match (policy, self.check_counts()) {
            (_, Ok(())) | (CountPolicy::Allow, Err(_)) => self.filtered_count,
            (CountPolicy::Clamp, Err(_)) => self.total_count,
            (CountPolicy::Hide, Err(_)) => return None,
        };
        Some(format!("Showing {shown} of {} movies", self.total_count))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// A transient message shown in the notification tray.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    #[serde(default)]
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn new(id: u64, kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn header(total_count: usize, filtered_count: usize) -> CategoryHeaderData {
        CategoryHeaderData {
            title: "Action".to_owned(),
            description: "Fast-paced films".to_owned(),
            color_theme: "from-red-600 to-orange-500".to_owned(),
            icon: icondata::BsFire,
            total_count,
            filtered_count,
        }
    }

    #[test]
    fn test_view_mode_defaults_to_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled(), ViewMode::Grid);
    }

    #[test]
    fn test_view_mode_parsing() {
        assert_eq!("grid".parse::<ViewMode>(), Ok(ViewMode::Grid));
        assert_eq!(" LIST ".parse::<ViewMode>(), Ok(ViewMode::List));
        assert_matches!("table".parse::<ViewMode>(), Err(ParseViewModeError(v)) if v == "table");
        assert_eq!(ViewMode::List.to_string(), "list");
    }

    #[test]
    fn test_view_mode_json() {
        assert_eq!(serde_json::to_value(ViewMode::List).unwrap(), json!("list"));
        let mode: ViewMode = serde_json::from_value(json!("grid")).unwrap();
        assert_eq!(mode, ViewMode::Grid);
    }

    #[test]
    fn test_count_line_shown_for_positive_total() {
        assert_eq!(
            header(120, 45).count_line(CountPolicy::Allow).as_deref(),
            Some("Showing 45 of 120 movies")
        );
    }

    #[test]
    fn test_count_line_absent_for_zero_total() {
        for policy in [CountPolicy::Allow, CountPolicy::Clamp, CountPolicy::Hide] {
            assert_eq!(header(0, 0).count_line(policy), None);
            assert_eq!(header(0, 5).count_line(policy), None);
        }
    }

    #[test]
    fn test_count_policies_on_inconsistent_counts() {
        let data = header(10, 25);
        assert_eq!(
            data.count_line(CountPolicy::Allow).as_deref(),
            Some("Showing 25 of 10 movies")
        );
        assert_eq!(
            data.count_line(CountPolicy::Clamp).as_deref(),
            Some("Showing 10 of 10 movies")
        );
        assert_eq!(data.count_line(CountPolicy::Hide), None);
        assert_matches!(
            data.check_counts(),
            Err(CountError::FilteredExceedsTotal { filtered: 25, total: 10 })
        );
        assert_eq!(header(10, 10).check_counts(), Ok(()));
    }

    #[test]
    fn test_notification_json_defaults_kind() {
        let notification: Notification =
            serde_json::from_value(json!({ "id": 7, "message": "Saved" })).unwrap();
        assert_eq!(notification, Notification::new(7, NotificationKind::Info, "Saved"));

        let value = serde_json::to_value(Notification::new(1, NotificationKind::Error, "Oops")).unwrap();
        assert_eq!(value["kind"], "error");
    }
}
