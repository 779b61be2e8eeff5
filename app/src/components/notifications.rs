//! The notification tray: a live region listing transient messages.
//!
//! Layouts forward notifications here untouched; this is the only place that
//! looks inside them.

use leptos::{
    html::{div, p, section},
    prelude::*,
};

use crate::types::{Notification, NotificationKind};

const fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "bg-sky-900/90 border-sky-500",
        NotificationKind::Success => "bg-emerald-900/90 border-emerald-500",
        NotificationKind::Warning => "bg-amber-900/90 border-amber-500",
        NotificationKind::Error => "bg-red-900/90 border-red-500",
    }
}

/// Renders the tray. The region is always present so screen readers keep
/// tracking it, even while empty.
pub fn tray(notifications: Vec<Notification>) -> impl IntoView {
    section()
        .class("flex fixed right-4 bottom-16 z-20 flex-col gap-2 w-80 max-w-full")
        .attr("aria-live", "polite")
        .attr("data-notification-tray", "")
        .child(
            notifications
                .into_iter()
                .map(|notification| {
                    let role = if notification.kind == NotificationKind::Error {
                        "alert"
                    } else {
                        "status"
                    };
                    div()
                        .class(format!(
                            "py-2 px-3 text-sm text-white rounded-lg border-l-4 shadow-md {}",
                            kind_class(notification.kind)
                        ))
                        .attr("role", role)
                        .attr("data-notification-id", notification.id.to_string())
                        .child(p().child(notification.message))
                })
                .collect::<Vec<_>>(),
        )
}
