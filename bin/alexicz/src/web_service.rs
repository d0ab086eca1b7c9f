use std::sync::Arc;

use alexa::{Envelope, Request};
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use domoticz::Client;
use log::{error, warn};
use serde_json::{json, Value};

use crate::config::Credentials;
use crate::dispatcher::{dispatch, internal_error};
use crate::identity::Okta;
use crate::{Bridge, Config, Error, Result};

pub struct ServiceError(Error, uuid::Uuid);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response<Body> {
        let status = match self.0 {
            Error::Json(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("ServiceError[{}]: {}", self.1, self.0);

        (status, self.0.to_string()).into_response()
    }
}

impl From<Error> for ServiceError {
    fn from(value: Error) -> Self {
        ServiceError(value, uuid::Uuid::new_v4())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(value: serde_json::Error) -> Self {
        ServiceError(Error::Json(value), uuid::Uuid::new_v4())
    }
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    okta: Option<Arc<Okta>>,
}

impl AppState {
    pub fn new(config: Config) -> Result<AppState> {
        let okta = match &config.okta {
            Some(okta) => Some(Arc::new(Okta::new(okta, config.accept_invalid_certs)?)),
            None => None,
        };

        Ok(AppState {
            config: Arc::new(config),
            okta,
        })
    }

    /// Configured credentials, replaced by the caller's Okta profile when
    /// one can be fetched.
    async fn credentials(&self, token: Option<&str>) -> Credentials {
        let credentials = self.config.credentials();

        let (Some(okta), Some(token)) = (&self.okta, token) else {
            return credentials;
        };

        match okta.user_profile(token).await {
            Ok(profile) => profile.apply(credentials),
            Err(err) => {
                warn!("Okta profile lookup failed, using configured backend: {err}");
                credentials
            }
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/smarthome", get(pong).post(smarthome))
        .with_state(state)
}

async fn pong() -> Json<Value> {
    Json(json!({}))
}

async fn smarthome(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<Envelope>, ServiceError> {
    let Request { directive } = serde_json::from_slice(&body)?;

    let credentials = state.credentials(directive.bearer_token()).await;
    let client = match Client::new(
        &credentials.url,
        credentials.username,
        credentials.password,
        state.config.accept_invalid_certs,
    ) {
        Ok(client) => client,
        Err(err) => {
            error!("Can't reach backend at {}: {err}", credentials.url);
            return Ok(Json(internal_error(&directive, &err.to_string())));
        }
    };

    let bridge = Bridge::new(client, state.config.discovery_options());

    Ok(Json(dispatch(&bridge, &directive).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OktaConfig;
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Config::default()).unwrap())
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_returns_empty_object() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/smarthome")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({}));
    }

    #[tokio::test]
    async fn test_invalid_body() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smarthome")
                    .body(Body::from(r#"{"not": "a directive"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unsupported_directive() {
        let request = json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.Cooking",
                    "name": "SetCookingMode",
                    "messageId": "m-1",
                    "correlationToken": "c-1",
                    "payloadVersion": "3"
                },
                "endpoint": {"endpointId": "SwitchLight-1"},
                "payload": {}
            }
        });

        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/smarthome")
                    .header("content-type", "application/json")
                    .body(Body::from(request.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["event"]["header"]["name"], "ErrorResponse");
        assert_eq!(value["event"]["header"]["correlationToken"], "c-1");
        assert_eq!(value["event"]["payload"]["type"], "INTERNAL_ERROR");
        assert_eq!(value["event"]["endpoint"]["endpointId"], "SwitchLight-1");
    }

    #[tokio::test]
    async fn test_credentials_without_okta() {
        let config = Config {
            username: "alexa".to_string(),
            ..Config::default()
        };
        let state = AppState::new(config).unwrap();

        assert_eq!(state.credentials(Some("token")).await.username, "alexa");
        assert_eq!(state.credentials(None).await.url, "http://localhost:8080/");
    }

    #[tokio::test]
    async fn test_credentials_when_okta_unreachable() {
        let config = Config {
            url: "http://domoticz.local:8080/".to_string(),
            username: "alexa".to_string(),
            password: "secret".to_string(),
            okta: Some(OktaConfig {
                url: "http://127.0.0.1:9".to_string(),
                api_key: "key".to_string(),
            }),
            ..Config::default()
        };
        let configured = config.credentials();
        let state = AppState::new(config).unwrap();

        assert_eq!(state.credentials(Some("token")).await, configured);
    }
}
