//! Umbrella crate for the cinelist workspace.
//!
//! Re-exports the public surface of `app` so the integration tests in `tests/`
//! exercise the same paths downstream users see.

pub use app::{api, categories, components, types};
