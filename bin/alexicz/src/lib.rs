mod bridge;
mod classify;
mod color;
mod config;
mod dispatcher;
mod endpoint;
mod endpoint_id;
mod error;
mod handlers;
mod identity;
mod pragma;
mod web_service;

#[cfg(test)]
mod test_support;

pub use bridge::Bridge;
pub use classify::{classify_device, classify_scene, DiscoveryOptions, SKILL_NAME};
pub use config::{Config, Credentials, OktaConfig};
pub use dispatcher::{dispatch, resolve, Handler};
pub use endpoint::Endpoint;
pub use endpoint_id::{AdapterKind, EndpointId};
pub use error::Error;
pub use identity::{Okta, Profile};
pub use web_service::{router, AppState};

pub type Result<T> = std::result::Result<T, Error>;
