//! The movie-list categories the front end offers, each backed by a provider
//! endpoint.

use crate::{api::Endpoint, types::CategoryHeaderData};

pub struct Category {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color_theme: &'static str,
    pub icon: icondata::Icon,
    pub endpoint: Endpoint,
}

pub static CATEGORIES: [Category; 4] = [
    Category {
        slug: "popular",
        title: "Popular",
        description: "What everyone is watching right now",
        color_theme: "from-red-600 to-orange-500",
        icon: icondata::BsFire,
        endpoint: Endpoint::Popular,
    },
    Category {
        slug: "top_rated",
        title: "Top Rated",
        description: "The highest rated films of all time",
        color_theme: "from-amber-500 to-yellow-400",
        icon: icondata::BsStarFill,
        endpoint: Endpoint::TopRated,
    },
    Category {
        slug: "now_playing",
        title: "Now Playing",
        description: "In theaters this week",
        color_theme: "from-emerald-600 to-teal-500",
        icon: icondata::BsPlayCircle,
        endpoint: Endpoint::NowPlaying,
    },
    Category {
        slug: "upcoming",
        title: "Upcoming",
        description: "Coming soon to a screen near you",
        color_theme: "from-indigo-600 to-purple-500",
        icon: icondata::BsCalendar,
        endpoint: Endpoint::Upcoming,
    },
];

impl Category {
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<&'static Self> {
        CATEGORIES.iter().find(|category| category.slug == slug)
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("/category/{}", self.slug)
    }

    /// Header data for this category with the given counts.
    #[must_use]
    pub fn header(&self, total_count: usize, filtered_count: usize) -> CategoryHeaderData {
        CategoryHeaderData {
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            color_theme: self.color_theme.to_owned(),
            icon: self.icon,
            total_count,
            filtered_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_slug() {
        let category = Category::from_slug("top_rated").unwrap();
        assert_eq!(category.title, "Top Rated");
        assert_eq!(category.endpoint.path(), "/movie/top_rated");
        assert_eq!(category.href(), "/category/top_rated");
        assert!(Category::from_slug("Top Rated").is_none());
    }

    #[test]
    fn test_each_category_matches_its_endpoint() {
        for category in &CATEGORIES {
            assert_eq!(category.endpoint.path(), format!("/movie/{}", category.slug));
        }
    }

    #[test]
    fn test_header_copies_presentation_fields() {
        let header = CATEGORIES[0].header(20, 5);
        assert_eq!(header.title, "Popular");
        assert_eq!(header.color_theme, "from-red-600 to-orange-500");
        assert_eq!(header.total_count, 20);
        assert_eq!(header.filtered_count, 5);
    }
}
