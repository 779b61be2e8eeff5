//! Loading placeholders shaped like movie cards.
//!
//! One component serves both collection layouts: in grid mode it mimics a poster
//! card with a rating badge, in list mode a thumbnail row with an extra summary
//! line.

use leptos::{html::div, prelude::*};

use crate::types::ViewMode;

const BAR: &str = "h-4 rounded bg-neutral-700";

/// Renders a single placeholder card. `None` renders the grid variant.
pub fn component(view_mode: Option<ViewMode>) -> impl IntoView {
    let view_mode = view_mode.unwrap_or_default();
    let is_grid = view_mode == ViewMode::Grid;

    let (container_class, image_class, text_class) = if is_grid {
        (
            "block overflow-hidden relative rounded-lg animate-pulse bg-neutral-800",
            "w-full h-72 bg-neutral-700",
            "flex flex-col gap-2 p-3",
        )
    } else {
        (
            "flex flex-row gap-4 items-center p-3 rounded-lg animate-pulse bg-neutral-800",
            "flex-none w-16 h-24 rounded bg-neutral-700",
            "flex flex-col flex-1 gap-2",
        )
    };

    div()
        .class(container_class)
        .attr("data-view-mode", view_mode.as_str())
        .attr("aria-hidden", "true")
        .child((
            div().class(image_class).attr("data-skeleton", "image"),
            is_grid.then(|| {
                div()
                    .class("absolute top-2 right-2 rounded-full size-10 bg-neutral-600")
                    .attr("data-skeleton", "rating")
            }),
            div().class(text_class).child((
                div().class(format!("w-3/4 {BAR}")).attr("data-skeleton", "title"),
                div().class(format!("w-1/2 {BAR}")).attr("data-skeleton", "subtitle"),
                (!is_grid).then(|| div().class(format!("w-full {BAR}")).attr("data-skeleton", "summary")),
            )),
        ))
}

/// Renders `count` placeholder cards laid out like the real collection.
pub fn grid(view_mode: ViewMode, count: usize) -> impl IntoView {
    let class = match view_mode {
        ViewMode::Grid => "grid grid-cols-2 gap-4 sm:grid-cols-3 lg:grid-cols-5",
        ViewMode::List => "flex flex-col gap-3",
    };
    div()
        .class(class)
        .attr("data-skeleton-collection", view_mode.as_str())
        .child(
            (0..count)
                .map(|_| component(Some(view_mode)))
                .collect::<Vec<_>>(),
        )
}
