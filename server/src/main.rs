mod config;

use std::sync::Arc;

use app::{component, shell, types::AppState};
use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use serde_json::json;

use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::{NotForContentType, Predicate as _, SizeAbove};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Health check handler
async fn health_handler(State(state): State<AppState>) -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "cinelist",
        "version": env!("CARGO_PKG_VERSION"),
        "api_key_configured": !state.api.uses_placeholder_key(),
    })))
}

const fn tracing_level(debug_build: bool) -> tracing::Level {
    if debug_build {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level(cfg!(debug_assertions)))
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let api = match config::load_api_config() {
        Ok(api) => Arc::new(api),
        Err(err) => {
            logging::error!("Invalid provider configuration: {}", err);
            return;
        }
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(component);

    let app_state = AppState {
        api,
        leptos_options: Arc::new(leptos_options.clone()),
    };

    let app = Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || provide_context(app_state.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(site_root))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new().compress_when(
            SizeAbove::new(1024).and(NotForContentType::IMAGES),
        ))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .with_state(app_state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service()).await;
    match serve_result {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
            logging::error!("Error details: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app::api::ApiConfig;

    fn state_with(api: ApiConfig) -> AppState {
        AppState {
            api: Arc::new(api),
            leptos_options: Arc::new(LeptosOptions::builder().output_name("cinelist").build()),
        }
    }

    #[test]
    fn test_tracing_level_follows_build_kind() {
        assert_eq!(tracing_level(true), tracing::Level::DEBUG);
        assert_eq!(tracing_level(false), tracing::Level::INFO);
    }

    #[test]
    fn test_health_reports_configured_key() {
        tokio_test::block_on(async {
            let json_value = health_handler(State(state_with(ApiConfig::new("real-key"))))
                .await
                .unwrap()
                .0;
            assert_eq!(json_value["status"], "healthy");
            assert_eq!(json_value["service"], "cinelist");
            assert_eq!(json_value["api_key_configured"], true);
            assert!(json_value.get("timestamp").is_some());
            assert!(json_value.get("version").is_some());
            assert!(!json_value.to_string().contains("real-key"));
        });
    }

    #[test]
    fn test_health_reports_placeholder_key() {
        tokio_test::block_on(async {
            let placeholder = ApiConfig::new(app::api::API_KEY_PLACEHOLDER);
            let json_value = health_handler(State(state_with(placeholder))).await.unwrap().0;
            assert_eq!(json_value["api_key_configured"], false);
        });
    }
}
