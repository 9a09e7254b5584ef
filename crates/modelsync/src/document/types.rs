//! Typed view of the chat configuration document.
//!
//! Only the fields the updater touches are modeled; every level carries a
//! flattened mapping so unrelated keys survive the load/save round-trip
//! untouched.

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(rename = "modelSpecs", default, skip_serializing_if = "Option::is_none")]
    pub model_specs: Option<ModelSpecs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints: Option<Endpoints>,
    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<SpecEntry>>,
    #[serde(flatten)]
    pub rest: Mapping,
}

/// One preset-bearing spec entry. `modelLabel` mirrors the preset's model
/// when present, so it is rewritten alongside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(rename = "modelLabel", default, skip_serializing_if = "Option::is_none")]
    pub model_label: Option<String>,
    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Endpoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<Endpoint>>,
    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<EndpointModels>,
    #[serde(flatten)]
    pub rest: Mapping,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointModels {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Vec<String>>,
    #[serde(flatten)]
    pub rest: Mapping,
}
