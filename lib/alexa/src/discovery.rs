use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Capability, DisplayCategory};

/// One entry of a `Discover.Response` payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryEndpoint<'a> {
    pub endpoint_id: String,
    pub friendly_name: &'a str,
    pub description: &'a str,
    pub manufacturer_name: &'a str,
    pub display_categories: &'a [DisplayCategory],
    pub additional_appliance_details: Map<String, Value>,
    pub capabilities: &'a [Capability],

    #[serde(skip_serializing_if = "is_empty")]
    pub cookie: &'a BTreeMap<String, String>,
}

fn is_empty(cookie: &&BTreeMap<String, String>) -> bool {
    cookie.is_empty()
}
