//! Static configuration for the movie metadata provider (TMDB).
//!
//! The configuration is a plain value built once at start-up and shared by
//! reference: base URLs, the API key, image size tokens, endpoint paths, default
//! query parameters and cache tuning values. Nothing in this module performs I/O;
//! it only produces request paths and URLs for whichever client issues the calls.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Environment variable holding the provider API key.
pub const API_KEY_VAR: &str = "TMDB_API_KEY";

/// Substituted for the API key when it is missing and the policy allows it.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_TMDB_API_KEY";

const MAX_ID_LEN: usize = 20;

/// Everything outside the RFC 3986 unreserved set gets percent-encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("TMDB_API_KEY is not set")]
    MissingApiKey,
    #[error("Invalid {kind} id: '{value}'")]
    InvalidId { kind: &'static str, value: String },
}

/// What to do when no API key is available at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Use [`API_KEY_PLACEHOLDER`]; requests will fail at the provider.
    #[default]
    Placeholder,
    /// Refuse to build the configuration.
    Reject,
}

/// Kind of artwork an image path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    Poster,
    Backdrop,
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
    Original,
}

/// Returns the provider size code for an asset class at a given tier.
#[must_use]
pub const fn size_token(class: AssetClass, tier: SizeTier) -> &'static str {
    match (class, tier) {
        (AssetClass::Poster, SizeTier::Small) => "w185",
        (AssetClass::Poster, SizeTier::Medium) => "w342",
        (AssetClass::Poster, SizeTier::Large) => "w500",
        (AssetClass::Backdrop, SizeTier::Small) => "w300",
        (AssetClass::Backdrop, SizeTier::Medium) => "w780",
        (AssetClass::Backdrop, SizeTier::Large) => "w1280",
        (AssetClass::Profile, SizeTier::Small) => "w45",
        (AssetClass::Profile, SizeTier::Medium) => "w185",
        (AssetClass::Profile, SizeTier::Large) => "h632",
        (_, SizeTier::Original) => "original",
    }
}

/// Validates that an identifier is a plain decimal number.
///
/// Only digits are accepted, so an id can be interpolated into a path without
/// escaping.
fn parse_numeric_id(kind: &'static str, value: &str) -> Result<u64, ApiError> {
    let trimmed = value.trim();
    let invalid = || ApiError::InvalidId {
        kind,
        value: value.chars().take(50).collect(),
    };
    if trimmed.is_empty()
        || trimmed.len() > MAX_ID_LEN
        || !trimmed.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }
    trimmed.parse().map_err(|_| invalid())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl FromStr for MovieId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric_id("movie", s).map(Self)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl FromStr for PersonId {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_numeric_id("person", s).map(Self)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Every provider endpoint the front end requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
    SearchMovies,
    PopularPeople,
    MovieDetails(MovieId),
    MovieCredits(MovieId),
    MovieVideos(MovieId),
    SimilarMovies(MovieId),
    PersonDetails(PersonId),
    PersonCombinedCredits(PersonId),
    PersonImages(PersonId),
}

impl Endpoint {
    /// Request path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Popular => "/movie/popular".to_owned(),
            Self::TopRated => "/movie/top_rated".to_owned(),
            Self::NowPlaying => "/movie/now_playing".to_owned(),
            Self::Upcoming => "/movie/upcoming".to_owned(),
            Self::SearchMovies => "/search/movie".to_owned(),
            Self::PopularPeople => "/person/popular".to_owned(),
            Self::MovieDetails(id) => format!("/movie/{id}"),
            Self::MovieCredits(id) => format!("/movie/{id}/credits"),
            Self::MovieVideos(id) => format!("/movie/{id}/videos"),
            Self::SimilarMovies(id) => format!("/movie/{id}/similar"),
            Self::PersonDetails(id) => format!("/person/{id}"),
            Self::PersonCombinedCredits(id) => format!("/person/{id}/combined_credits"),
            Self::PersonImages(id) => format!("/person/{id}/images"),
        }
    }
}

/// Query parameters sent with every request unless overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDefaults {
    pub language: String,
    pub region: String,
    pub page: u32,
    pub include_adult: bool,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            language: "es-ES".to_owned(),
            region: "ES".to_owned(),
            page: 1,
            include_adult: false,
        }
    }
}

impl QueryDefaults {
    /// The defaults as `(name, value)` pairs in request order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("language", self.language.clone()),
            ("region", self.region.clone()),
            ("page", self.page.to_string()),
            ("include_adult", self.include_adult.to_string()),
        ]
    }
}

/// Response cache tuning.
///
/// These values are carried for whichever client caches provider responses;
/// nothing in this crate caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub duration: Duration,
    pub max_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(5 * 60),
            max_size: 100,
        }
    }
}

/// Provider configuration shared by every consumer for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    pub defaults: QueryDefaults,
    pub cache: CacheConfig,
}

impl ApiConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: API_BASE_URL.to_owned(),
            image_base_url: IMAGE_BASE_URL.to_owned(),
            api_key: api_key.into(),
            defaults: QueryDefaults::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// `lookup` receives [`API_KEY_VAR`]; blank values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingApiKey`] when no key is found and `policy` is
    /// [`MissingKeyPolicy::Reject`].
    pub fn from_lookup<F>(lookup: F, policy: MissingKeyPolicy) -> Result<Self, ApiError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let key = lookup(API_KEY_VAR).filter(|key| !key.trim().is_empty());
        match (key, policy) {
            (Some(key), _) => Ok(Self::new(key.trim())),
            (None, MissingKeyPolicy::Placeholder) => Ok(Self::new(API_KEY_PLACEHOLDER)),
            (None, MissingKeyPolicy::Reject) => Err(ApiError::MissingApiKey),
        }
    }

    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`ApiConfig::from_lookup`].
    #[cfg(feature = "ssr")]
    pub fn from_env(policy: MissingKeyPolicy) -> Result<Self, ApiError> {
        let config = Self::from_lookup(shared_utils::env_value, policy)?;
        if config.uses_placeholder_key() {
            tracing::warn!(
                env_key = API_KEY_VAR,
                "No API key configured; provider requests will be rejected"
            );
        }
        Ok(config)
    }

    #[must_use]
    pub fn uses_placeholder_key(&self) -> bool {
        self.api_key == API_KEY_PLACEHOLDER
    }

    /// Full request URL for `endpoint`.
    ///
    /// The API key comes first, followed by the default parameters. A pair in
    /// `extra` replaces the parameter of the same name (the key included),
    /// otherwise it is appended.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &Endpoint, extra: &[(&str, &str)]) -> String {
        let mut params: Vec<(String, String)> = vec![("api_key".to_owned(), self.api_key.clone())];
        params.extend(
            self.defaults
                .pairs()
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value)),
        );
        for (name, value) in extra {
            match params.iter_mut().find(|(existing, _)| existing == name) {
                Some(slot) => slot.1 = (*value).to_owned(),
                None => params.push(((*name).to_owned(), (*value).to_owned())),
            }
        }

        let query = params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(name, UNRESERVED),
                    utf8_percent_encode(value, UNRESERVED)
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        format!(
            "{}{}?{query}",
            self.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }

    /// Image URL for a provider asset path such as `/abc123.jpg`.
    ///
    /// Each path segment is percent-encoded. Returns `None` for an empty path;
    /// the provider reports missing artwork that way.
    #[must_use]
    pub fn image_url(&self, class: AssetClass, tier: SizeTier, path: &str) -> Option<String> {
        let path = path.trim().trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        let encoded = path
            .split('/')
            .map(|segment| utf8_percent_encode(segment, UNRESERVED).to_string())
            .collect::<Vec<_>>()
            .join("/");
        Some(format!(
            "{}/{}/{encoded}",
            self.image_base_url.trim_end_matches('/'),
            size_token(class, tier),
        ))
    }
}
