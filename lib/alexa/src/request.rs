use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Request {
    pub directive: Directive,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Directive {
    pub header: Header,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<DirectiveEndpoint>,

    #[serde(default)]
    pub payload: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub namespace: String,
    pub name: String,
    pub message_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,

    #[serde(default = "default_payload_version")]
    pub payload_version: String,
}

fn default_payload_version() -> String {
    crate::PAYLOAD_VERSION.to_string()
}

/// Endpoint block of a directive. Unknown keys (`scope` and friends) are kept
/// so the block can be echoed back verbatim.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveEndpoint {
    pub endpoint_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<BTreeMap<String, String>>,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Directive {
    pub fn payload_value(&self, field: &str) -> Option<&Value> {
        self.payload.get(field).filter(|value| !value.is_null())
    }

    /// Bearer token from `endpoint.scope` or, for discovery, `payload.scope`.
    pub fn bearer_token(&self) -> Option<&str> {
        let from_endpoint = self
            .endpoint
            .as_ref()
            .and_then(|endpoint| endpoint.other.get("scope"));
        let scope = from_endpoint.or_else(|| self.payload.get("scope"))?;

        scope.get("token")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn test_request_parsing() {
        let request: Request = from_value(json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.PowerController",
                    "name": "TurnOn",
                    "messageId": "1bd5d003-31b9-476f-ad03-71d471922820",
                    "correlationToken": "dFMb0z+PgpgdDmluhJ1LddFvSqZ/jCc8ptlAKulUj90jSqg==",
                    "payloadVersion": "3"
                },
                "endpoint": {
                    "scope": {"type": "BearerToken", "token": "access-token-from-skill"},
                    "endpointId": "SwitchLight-12",
                    "cookie": {"extra": "1|2"}
                },
                "payload": {}
            }
        }))
        .unwrap();

        let directive = request.directive;
        assert_eq!(directive.header.namespace, "Alexa.PowerController");
        assert_eq!(directive.header.name, "TurnOn");
        assert_eq!(
            directive.header.correlation_token.as_deref(),
            Some("dFMb0z+PgpgdDmluhJ1LddFvSqZ/jCc8ptlAKulUj90jSqg==")
        );

        let endpoint = directive.endpoint.as_ref().unwrap();
        assert_eq!(endpoint.endpoint_id, "SwitchLight-12");
        assert_eq!(
            endpoint.cookie.as_ref().unwrap().get("extra").map(String::as_str),
            Some("1|2")
        );
        assert_eq!(directive.bearer_token(), Some("access-token-from-skill"));
    }

    #[test]
    fn test_endpoint_round_trips_unknown_keys() {
        let endpoint = json!({
            "scope": {"type": "BearerToken", "token": "abc"},
            "endpointId": "Blind-3",
            "cookie": {}
        });

        let parsed: DirectiveEndpoint = from_value(endpoint.clone()).unwrap();
        assert_eq!(to_value(&parsed).unwrap(), endpoint);
    }

    #[test]
    fn test_discovery_directive() {
        let directive: Directive = from_value(json!({
            "header": {
                "namespace": "Alexa.Discovery",
                "name": "Discover",
                "messageId": "abc"
            },
            "payload": {
                "scope": {"type": "BearerToken", "token": "discovery-token"}
            }
        }))
        .unwrap();

        assert!(directive.endpoint.is_none());
        assert_eq!(directive.header.payload_version, "3");
        assert_eq!(directive.header.correlation_token, None);
        assert_eq!(directive.bearer_token(), Some("discovery-token"));
        assert_eq!(directive.payload_value("missing"), None);
    }
}
