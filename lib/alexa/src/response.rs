use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use str_derive::Str;
use uuid::Uuid;

use crate::{Directive, DirectiveEndpoint, Namespace, PropertyState};

pub const PAYLOAD_VERSION: &str = "3";

#[derive(Debug, Serialize)]
pub struct Envelope {
    pub event: Event,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

#[derive(Debug, Serialize)]
pub struct Event {
    pub header: ResponseHeader,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<DirectiveEndpoint>,

    pub payload: Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub namespace: Namespace,
    pub name: String,
    pub message_id: String,
    pub payload_version: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

#[derive(Debug, Default, Serialize, PartialEq)]
pub struct Context {
    pub properties: Vec<PropertyState>,
}

impl From<Vec<PropertyState>> for Context {
    fn from(properties: Vec<PropertyState>) -> Context {
        Context { properties }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, Str, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    InternalError,
}

/// Builds the event answering `directive`.
///
/// The correlation token is copied only when the request carried a
/// non-empty one; the endpoint block is echoed when present.
pub fn build_response(
    directive: &Directive,
    namespace: Namespace,
    name: &str,
    payload: Map<String, Value>,
    context: Option<Context>,
) -> Envelope {
    let correlation_token = directive
        .header
        .correlation_token
        .as_ref()
        .filter(|token| !token.is_empty())
        .cloned();

    Envelope {
        event: Event {
            header: ResponseHeader {
                namespace,
                name: name.to_string(),
                message_id: Uuid::new_v4().to_string(),
                payload_version: PAYLOAD_VERSION,
                correlation_token,
            },
            endpoint: directive.endpoint.clone(),
            payload,
        },
        context,
    }
}

/// Builds an `ErrorResponse`. Never fails.
pub fn build_error(
    directive: &Directive,
    namespace: Namespace,
    error_type: ErrorType,
    message: &str,
    payload: Map<String, Value>,
) -> Envelope {
    let mut payload = payload;
    payload.insert("type".to_string(), Value::String(error_type.to_string()));
    payload.insert("message".to_string(), Value::String(message.to_string()));

    warn!(
        "Request {}/{} error {}: {}",
        directive.header.namespace, directive.header.name, error_type, message
    );

    build_response(directive, namespace, "ErrorResponse", payload, None)
}

/// Plain `Alexa`/`Response` acknowledgement.
pub fn response(directive: &Directive) -> Envelope {
    build_response(directive, Namespace::Alexa, "Response", Map::new(), None)
}

pub fn response_with_properties(directive: &Directive, properties: Vec<PropertyState>) -> Envelope {
    build_response(
        directive,
        Namespace::Alexa,
        "Response",
        Map::new(),
        Some(properties.into()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PropertyName;
    use serde_json::{from_value, json, to_value};

    fn directive(correlation_token: Option<&str>, with_endpoint: bool) -> Directive {
        let mut directive = json!({
            "header": {
                "namespace": "Alexa.BrightnessController",
                "name": "SetBrightness",
                "messageId": "request-message-id",
                "payloadVersion": "3"
            },
            "payload": {"brightness": 42}
        });

        if let Some(token) = correlation_token {
            directive["header"]["correlationToken"] = json!(token);
        }

        if with_endpoint {
            directive["endpoint"] = json!({
                "scope": {"type": "BearerToken", "token": "t"},
                "endpointId": "SwitchLight-7",
                "cookie": {}
            });
        }

        from_value(directive).unwrap()
    }

    #[test]
    fn test_response_copies_token_and_endpoint() {
        let request = directive(Some("token-1"), true);
        let envelope = response_with_properties(
            &request,
            vec![PropertyState::new(
                Namespace::BrightnessController,
                PropertyName::Brightness,
                42,
            )],
        );

        let mut value = to_value(&envelope).unwrap();
        let message_id = value["event"]["header"]["messageId"].take();
        assert_ne!(message_id, json!("request-message-id"));
        assert!(message_id.is_string());

        assert_eq!(
            value,
            json!({
                "event": {
                    "header": {
                        "namespace": "Alexa",
                        "name": "Response",
                        "messageId": null,
                        "payloadVersion": "3",
                        "correlationToken": "token-1"
                    },
                    "endpoint": {
                        "scope": {"type": "BearerToken", "token": "t"},
                        "endpointId": "SwitchLight-7",
                        "cookie": {}
                    },
                    "payload": {}
                },
                "context": {
                    "properties": [{
                        "name": "brightness",
                        "namespace": "Alexa.BrightnessController",
                        "value": 42
                    }]
                }
            })
        );
    }

    #[test]
    fn test_response_without_token() {
        let request = directive(None, false);
        let value = to_value(response(&request)).unwrap();

        assert!(value["event"]["header"].get("correlationToken").is_none());
        assert!(value["event"].get("endpoint").is_none());
        assert!(value.get("context").is_none());

        let empty_token = directive(Some(""), false);
        let value = to_value(response(&empty_token)).unwrap();
        assert!(value["event"]["header"].get("correlationToken").is_none());
    }

    #[test]
    fn test_fresh_message_ids() {
        let request = directive(None, false);
        let first = response(&request).event.header.message_id;
        let second = response(&request).event.header.message_id;

        assert_ne!(first, second);
        assert_ne!(first, request.header.message_id);
    }

    #[test]
    fn test_error_response() {
        let request = directive(Some("token-2"), true);
        let envelope = build_error(
            &request,
            Namespace::Alexa,
            ErrorType::InternalError,
            "boom",
            Map::new(),
        );

        assert_eq!(envelope.event.header.name, "ErrorResponse");
        assert_eq!(envelope.event.header.namespace, Namespace::Alexa);
        assert_eq!(
            envelope.event.header.correlation_token.as_deref(),
            Some("token-2")
        );
        assert_eq!(
            Value::Object(envelope.event.payload),
            json!({"type": "INTERNAL_ERROR", "message": "boom"})
        );
    }
}
