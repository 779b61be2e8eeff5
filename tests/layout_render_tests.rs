use cinelist_workspace::categories::Category;
use cinelist_workspace::components::{
    category_header,
    layout::{self, LayoutConfig},
    skeleton,
};
use cinelist_workspace::types::{CountPolicy, Notification, NotificationKind, ViewMode};
use leptos::{html::section, prelude::*};

#[cfg(test)]
mod layout_render_tests {

    use super::*;

    fn page_body() -> Children {
        ToChildren::to_children(|| section().child("Trending this week"))
    }

    #[test]
    fn test_category_page_composition() {
        let category = Category::from_slug("popular").unwrap();
        let html = layout::container(
            LayoutConfig::default().with_notifications(vec![Notification::new(
                1,
                NotificationKind::Info,
                "Filters reset",
            )]),
            ToChildren::to_children(move || {
                (
                    category_header::component(category.header(120, 45), CountPolicy::Allow),
                    skeleton::grid(ViewMode::Grid, 3),
                )
            }),
        )
        .to_html();

        assert!(html.contains("Popular"));
        assert!(html.contains("Showing 45 of 120 movies"));
        assert_eq!(html.matches(r#"data-skeleton="rating""#).count(), 3);
        assert!(html.contains("Filters reset"));
        assert!(!html.contains("<nav"));
    }

    #[test]
    fn test_loading_category_has_no_count_line() {
        let category = Category::from_slug("upcoming").unwrap();
        let html = category_header::component(category.header(0, 0), CountPolicy::default()).to_html();
        assert!(html.contains("Upcoming"));
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_base_layout_bare() {
        let html = layout::base(LayoutConfig::default().with_navbar(false), page_body()).to_html();
        assert!(html.contains("Trending this week"));
        assert!(!html.contains("<nav"));
        assert!(html.contains("data-notification-tray"));
        assert!(!html.contains("data-notification-id"));
    }

    #[test]
    fn test_container_and_detail_differ_only_in_wrapper() {
        let container = layout::container(LayoutConfig::default(), page_body()).to_html();
        let detail = layout::detail(LayoutConfig::default(), page_body()).to_html();

        assert!(container.contains(r#"data-layout="container""#));
        assert!(!detail.contains(r#"data-layout="container""#));
        assert!(container.contains("Trending this week"));
        assert!(detail.contains("Trending this week"));
    }

    #[test]
    fn test_list_skeletons_have_summary_bars() {
        let html = skeleton::grid(ViewMode::List, 2).to_html();
        assert_eq!(html.matches(r#"data-skeleton="summary""#).count(), 2);
        assert!(!html.contains(r#"data-skeleton="rating""#));
    }
}
