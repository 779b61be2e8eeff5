//! Error page shown for unknown routes and malformed route parameters.
//!
//! On the server the response status is set from the first error, so crawlers
//! see a real 404 rather than a styled 200.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
    svg::{path, svg},
};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),
    #[error("{0}")]
    InvalidMovieId(String),
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::UnknownCategory(_) | Self::InvalidMovieId(_) => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

/// Renders the error page for `errors`.
pub fn component(errors: Vec<AppError>) -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(first) = errors.first() {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 min-h-[60vh] antialiased").child((
        h1().class("mb-6 text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-xl tracking-widest text-center text-gray-400 uppercase")
                    .child(format!("{}| {error}", error.status_code().as_u16()))
            })
            .collect::<Vec<_>>(),
        div().class("flex gap-1 justify-center items-center mt-6 text-center duration-200 hover:text-[#f5c518]").child(
            a().href("/").class("flex gap-1 items-center").child((
                svg().attr("width", "1.1em").attr("height", "1.1em").attr("viewBox", "0 0 24 24").attr("fill", "currentColor").attr("aria-hidden", "true").child(
                    path().attr("d", "M21 11H6.414l5.293-5.293-1.414-1.414L2.586 12l7.707 7.707 1.414-1.414L6.414 13H21z"),
                ),
                "Back to movies",
            )),
        ),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::UnknownCategory("westerns".to_owned()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_renders_each_error() {
        let html = component(vec![
            AppError::NotFound,
            AppError::UnknownCategory("westerns".to_owned()),
        ])
        .to_html();
        assert!(html.contains("Errors"));
        assert!(html.contains("404| Not Found"));
        assert!(html.contains("Unknown category"));
        assert!(html.contains(r#"href="/""#));
    }
}
