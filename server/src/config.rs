use app::api::{ApiConfig, ApiError, MissingKeyPolicy};
use shared_utils::env_flag;

/// Forces start-up to fail when no provider API key is configured.
pub const REQUIRE_API_KEY_VAR: &str = "CINELIST_REQUIRE_API_KEY";

/// Release builds refuse to start without a key; debug builds fall back to the
/// placeholder unless the operator opts into the strict check.
pub fn missing_key_policy(release_build: bool, require_flag: bool) -> MissingKeyPolicy {
    if release_build || require_flag {
        MissingKeyPolicy::Reject
    } else {
        MissingKeyPolicy::Placeholder
    }
}

pub fn load_api_config() -> Result<ApiConfig, ApiError> {
    let policy = missing_key_policy(!cfg!(debug_assertions), env_flag(REQUIRE_API_KEY_VAR));
    tracing::debug!(?policy, "Loading provider configuration");
    ApiConfig::from_env(policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_selection() {
        assert_eq!(missing_key_policy(true, false), MissingKeyPolicy::Reject);
        assert_eq!(missing_key_policy(false, true), MissingKeyPolicy::Reject);
        assert_eq!(missing_key_policy(false, false), MissingKeyPolicy::Placeholder);
    }
}
