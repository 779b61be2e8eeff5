//! Landing page: one themed card per movie category.

use leptos::{
    html::{a, div, h1, h2, p},
    prelude::*,
    svg::svg,
};
use leptos_meta::{Title, TitleProps};

use crate::{
    categories::{CATEGORIES, Category},
    components::layout::{self, LayoutConfig},
};

fn category_card(category: &'static Category) -> impl IntoView {
    a().href(category.href())
        .class(format!(
            "flex flex-col gap-3 p-6 rounded-2xl transition-transform duration-300 hover:scale-[1.02] bg-gradient-to-br {}",
            category.color_theme
        ))
        .child((
            svg()
                .attr("viewBox", category.icon.view_box)
                .inner_html(category.icon.data)
                .attr("fill", "currentColor")
                .attr("aria-hidden", "true")
                .class("size-8"),
            h2().class("text-2xl font-bold").child(category.title),
            p().class("text-sm text-white/80").child(category.description),
        ))
}

pub fn component() -> impl IntoView {
    layout::container(
        LayoutConfig::default(),
        ToChildren::to_children(|| {
            (
                Title(
                    TitleProps::builder()
                        .text("cinelist \u{2013} Discover movies")
                        .build(),
                ),
                h1().class("mb-8 text-4xl font-extrabold").child("Browse movies"),
                div()
                    .class("grid gap-6 sm:grid-cols-2")
                    .child(CATEGORIES.iter().map(category_card).collect::<Vec<_>>()),
            )
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_links_to_category_page() {
        let html = category_card(&CATEGORIES[2]).to_html();
        assert!(html.contains(r#"href="/category/now_playing""#));
        assert!(html.contains("Now Playing"));
        assert!(html.contains("from-emerald-600 to-teal-500"));
    }
}
