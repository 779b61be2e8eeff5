use crate::categories::CATEGORIES;
use leptos::{
    html::{a, div, header, nav},
    prelude::*,
};

const LINK_CLASS: &str = "text-sm font-semibold transition-all duration-300 sm:text-base hover:text-[#f5c518]";

pub fn component() -> impl IntoView {
    header()
        .class("fixed top-0 right-0 left-0 z-10 py-4 px-4 md:px-6 bg-[#141414]/80 backdrop-blur-md")
        .child(
            nav()
                .class("container flex flex-row justify-between items-center mx-auto max-w-6xl text-white")
                .attr("aria-label", "Main")
                .child((
                    a().href("/")
                        .class("text-xl font-bold sm:text-2xl hover:text-[#f5c518]")
                        .child("cinelist"),
                    div().class("flex flex-row flex-wrap gap-4").child(
                        CATEGORIES
                            .iter()
                            .map(|category| {
                                a().href(category.href())
                                    .class(LINK_CLASS)
                                    .child(category.title)
                            })
                            .collect::<Vec<_>>(),
                    ),
                )),
        )
}
