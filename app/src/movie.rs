//! Movie detail page, rendered edge to edge with the detail layout.

use leptos::{
    html::{div, h2, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_params_map;

use crate::{
    api::MovieId,
    components::{
        error_template::{self, AppError},
        layout::{self, LayoutConfig},
        skeleton,
    },
    types::ViewMode,
};

const SIMILAR_PLACEHOLDERS: usize = 4;

fn detail_page(id: MovieId) -> impl IntoView {
    layout::detail(
        LayoutConfig::default().with_class("pb-16"),
        ToChildren::to_children(move || {
            (
                Title(TitleProps::builder().text(format!("Movie {id} \u{2013} cinelist")).build()),
                div()
                    .class("w-full h-[50vh] animate-pulse bg-neutral-800")
                    .attr("data-skeleton", "backdrop")
                    .attr("data-movie-id", id.to_string()),
                section().class("container px-4 mx-auto mt-8 max-w-6xl").child((
                    h2().class("mb-4 text-2xl font-bold").child("Similar movies"),
                    skeleton::grid(ViewMode::List, SIMILAR_PLACEHOLDERS),
                )),
            )
        }),
    )
}

/// Renders the page for the movie named by the `id` route parameter.
pub fn component() -> impl IntoView {
    let params = use_params_map();

    move || {
        let raw = params.with(|params| params.get("id").unwrap_or_default());
        match raw.parse::<MovieId>() {
            Ok(id) => detail_page(id).into_any(),
            Err(err) => {
                error_template::component(vec![AppError::InvalidMovieId(err.to_string())]).into_any()
            }
        }
    }
}
