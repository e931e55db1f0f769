use axum::{routing::get, Router};
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::gateway::{Flightradar24Client, GatewayError};

use super::api::aircraft as aircraft_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::extract::AppState;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Gateway setup failed: {0}")]
    Gateway(#[from] GatewayError),
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(aircraft_handlers::list_aircraft))
        .route("/closest", get(aircraft_handlers::closest_aircraft))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> Result<(), ServerError> {
    let gateway = Flightradar24Client::new(config.gateway.clone())?;
    let state = AppState::new(Arc::new(gateway));
    let app = router(state);

    log::info!("Starting server on {}", config.web.bind);

    let listener = tokio::net::TcpListener::bind(&config.web.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use crate::nearby::tests::{flight, observation, StaticGateway};
    use crate::report::{INSTRUCTIONS, NO_AIRCRAFT_NEARBY};

    async fn send_get(gateway: StaticGateway, uri: &str) -> (StatusCode, String, String) {
        let app = router(AppState::new(Arc::new(gateway)));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    fn london_traffic() -> StaticGateway {
        let near = flight("near", -0.1, 51.509, 1000.0);
        let far = flight("far", -0.15, 51.55, 9000.0);
        let broken = flight("broken", -0.1, 51.5, 0.0);
        StaticGateway::new(vec![
            (broken, None),
            (far.clone(), Some(observation(&far, "British Airways"))),
            (near.clone(), Some(observation(&near, "Ryanair"))),
        ])
    }

    #[tokio::test]
    async fn test_listing() {
        let (status, content_type, body) =
            send_get(london_traffic(), "/?longitude=-0.1&latitude=51.5&altitude=0").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        let lines: Vec<&str> = body.lines().collect();
        assert!(lines[0].starts_with("Aircraft: Boeing 737-8AS | Airline: Ryanair |"));
        assert!(lines[0].contains("| Altitude: 1000ft | Heading: 180° |"));
        assert!(lines[0].ends_with("Heading to Aircraft From My Location: 0°"));
        assert!(lines[1].contains("Airline: British Airways"));
        assert!(lines[2].starts_with("Error processing flight <(B738) G-BROKEN"));
        assert!(body.ends_with(INSTRUCTIONS));
    }

    #[tokio::test]
    async fn test_closest() {
        let (status, _, body) = send_get(london_traffic(), "/closest?longitude=-0.1&latitude=51.5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "Ryanair Boeing 737-8AS departing from Dublin Airport to London Stansted Airport."
        );
    }

    #[tokio::test]
    async fn test_closest_without_resolvable_aircraft() {
        let broken = flight("broken", -0.1, 51.5, 0.0);
        let gateway = StaticGateway::new(vec![(broken, None)]);
        let (status, content_type, body) =
            send_get(gateway, "/closest?longitude=-0.1&latitude=51.5").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, NO_AIRCRAFT_NEARBY);
    }

    #[tokio::test]
    async fn test_invalid_parameters() {
        for uri in [
            "/?longitude=abc&latitude=51.5",
            "/closest?longitude=abc&latitude=51.5",
            "/?latitude=51.5",
            "/closest?longitude=-0.1&latitude=51.5&altitude=high",
            "/",
        ] {
            let (status, _, body) = send_get(london_traffic(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert_eq!(body, "Error: Invalid longitude, latitude, or altitude values");
        }
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        for uri in ["/?longitude=-0.1&latitude=51.5", "/closest?longitude=-0.1&latitude=51.5"] {
            let (status, _, body) = send_get(StaticGateway::failing(), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                body,
                "Error: Error fetching flight data: Invalid response: feed unavailable"
            );
        }
    }

    #[tokio::test]
    async fn test_openapi_document() {
        let (status, _, body) = send_get(StaticGateway::new(Vec::new()), "/api-doc/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/closest"));
    }
}
