//! Themed banner introducing a movie category and the current filter state.

use leptos::{
    html::{div, h1, p},
    prelude::*,
    svg::svg,
};

use crate::types::{CategoryHeaderData, CountPolicy};

/// Renders the banner for `data`.
///
/// The count line only appears when the category has movies at all; `policy`
/// decides what happens when the filtered count exceeds the total.
pub fn component(data: CategoryHeaderData, policy: CountPolicy) -> impl IntoView {
    let count_line = data.count_line(policy);
    let icon = data.icon;

    div()
        .class(format!(
            "flex flex-row gap-4 items-center p-6 mb-8 text-white rounded-2xl shadow-lg bg-gradient-to-r {}",
            data.color_theme
        ))
        .child((
            div().class("flex-none p-3 rounded-xl bg-white/20").child(
                svg()
                    .attr("viewBox", icon.view_box)
                    .inner_html(icon.data)
                    .attr("fill", "currentColor")
                    .attr("aria-hidden", "true")
                    .class("size-8"),
            ),
            div().class("flex flex-col gap-1").child((
                h1().class("text-3xl font-bold").child(data.title),
                p().class("text-white/80").child(data.description),
                count_line.map(|line| {
                    p().class("text-sm font-medium text-white/70")
                        .attr("data-count-line", "")
                        .child(line)
                }),
            )),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(total_count: usize, filtered_count: usize) -> CategoryHeaderData {
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
    fn test_renders_counts_when_total_positive() {
        let html = component(action(120, 45), CountPolicy::Allow).to_html();
        assert!(html.contains("Action"));
        assert!(html.contains("Fast-paced films"));
        assert!(html.contains("Showing 45 of 120 movies"));
        assert!(html.contains("bg-gradient-to-r from-red-600 to-orange-500"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn test_omits_count_line_for_empty_category() {
        for filtered in [0, 3] {
            let html = component(action(0, filtered), CountPolicy::Allow).to_html();
            assert!(!html.contains("data-count-line"));
            assert!(!html.contains("Showing"));
            assert!(html.contains("Fast-paced films"));
        }
    }

    #[test]
    fn test_policy_controls_inconsistent_counts() {
        let allowed = component(action(10, 12), CountPolicy::Allow).to_html();
        assert!(allowed.contains("Showing 12 of 10 movies"));

        let hidden = component(action(10, 12), CountPolicy::Hide).to_html();
        assert!(!hidden.contains("data-count-line"));
    }
}
