// Core application modules and components
use crate::components::{error_template, navbar};
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{a, body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod categories;
mod category;
pub mod components;
mod home;
mod movie;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/cinelist.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("cinelist \u{2013} Discover movies")
                    .build(),
            ),
        )),
        body().class("bg-[#141414]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto text-white font-sans">
                {navbar::component}
                <div class="pt-16 pb-14">
                    <FlatRoutes fallback=|| error_template::component(vec![error_template::AppError::NotFound])>
                        <Route path=StaticSegment("") view=home::component/>
                        <Route path=(StaticSegment("category"), ParamSegment("slug")) view=category::component/>
                        <Route path=(StaticSegment("movie"), ParamSegment("id")) view=movie::component/>
                    </FlatRoutes>
                </div>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center md:py-3 bg-[#141414]/80 backdrop-blur-md")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child(
                p().class("text-xs text-gray-400").child((
                    "Movie data provided by",
                    a()
                        .href("https://www.themoviedb.org")
                        .rel("noopener noreferrer")
                        .target("_blank")
                        .class("hover:underline text-[#f5c518]")
                        .child(" TMDB"),
                    format!(" \u{a9} {}", Utc::now().year()),
                )),
            ),
        )
}
