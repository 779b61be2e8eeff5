//! Category page: themed header, view switch and the movie collection.
//!
//! Results are fetched by the data layer; until they arrive the collection is
//! rendered as skeletons in the selected view mode.

use leptos::{
    ev,
    html::{button, div},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_params_map;

use crate::{
    categories::Category,
    components::{
        category_header,
        error_template::{self, AppError},
        layout::{self, LayoutConfig},
        skeleton,
    },
    types::{CountPolicy, ViewMode},
};

/// Number of placeholder cards shown while a page of results loads.
pub const SKELETON_COUNT: usize = 10;

fn view_switch(view_mode: RwSignal<ViewMode>) -> impl IntoView {
    button()
        .on(ev::click, move |_| view_mode.update(|mode| *mode = mode.toggled()))
        .class("py-1 px-3 text-sm rounded-lg transition-all duration-300 cursor-pointer bg-white/10 hover:bg-white/20")
        .attr("aria-label", "Switch view mode")
        .child(move || format!("Show as {}", view_mode.get().toggled()))
}

fn category_page(category: &'static Category, view_mode: RwSignal<ViewMode>) -> impl IntoView {
    layout::container(
        LayoutConfig::default(),
        ToChildren::to_children(move || {
            (
                Title(
                    TitleProps::builder()
                        .text(format!("{} \u{2013} cinelist", category.title))
                        .build(),
                ),
                category_header::component(category.header(0, 0), CountPolicy::default()),
                div().class("flex justify-end mb-4").child(view_switch(view_mode)),
                move || skeleton::grid(view_mode.get(), SKELETON_COUNT),
            )
        }),
    )
}

/// Renders the page for the category named by the `slug` route parameter.
pub fn component() -> impl IntoView {
    let params = use_params_map();
    let view_mode = RwSignal::new(ViewMode::default());

    move || {
        let slug = params.with(|params| params.get("slug").unwrap_or_default());
        match Category::from_slug(&slug) {
            Some(category) => category_page(category, view_mode).into_any(),
            None => error_template::component(vec![AppError::UnknownCategory(slug)]).into_any(),
        }
    }
}
