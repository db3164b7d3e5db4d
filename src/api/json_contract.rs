use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

use super::{GraphConfig, GraphPaths};

pub const GRAPH_PATHS_JSON_SCHEMA_V1: u32 = 1;
pub const GRAPH_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPathsJsonContractV1 {
    pub schema_version: u32,
    pub paths: GraphPaths,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: GraphConfig,
}

impl GraphPaths {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = GraphPathsJsonContractV1 {
            schema_version: GRAPH_PATHS_JSON_SCHEMA_V1,
            paths: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidData(format!("failed to serialize graph paths contract v1: {e}"))
        })
    }

    /// Accepts both the bare bundle and the versioned contract.
    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        if let Ok(paths) = serde_json::from_str::<GraphPaths>(input) {
            return Ok(paths);
        }
        let payload: GraphPathsJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidData(format!("failed to parse graph paths json payload: {e}"))
        })?;
        if payload.schema_version != GRAPH_PATHS_JSON_SCHEMA_V1 {
            return Err(GraphError::InvalidData(format!(
                "unsupported graph paths schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.paths)
    }
}

impl GraphConfig {
    pub fn to_json_contract_v1_pretty(&self) -> GraphResult<String> {
        let payload = GraphConfigJsonContractV1 {
            schema_version: GRAPH_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            GraphError::InvalidConfig(format!("failed to serialize graph config contract v1: {e}"))
        })
    }

    /// Parses a bare or versioned config document and validates it.
    ///
    /// Every config field has a default, so the versioned form is detected by
    /// its `schema_version` key rather than by a failed bare parse.
    pub fn from_json_compat_str(input: &str) -> GraphResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            GraphError::InvalidConfig(format!("failed to parse graph config json payload: {e}"))
        })?;

        let config = if value.get("schema_version").is_some() {
            let payload: GraphConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    GraphError::InvalidConfig(format!("invalid graph config contract v1: {e}"))
                })?;
            if payload.schema_version != GRAPH_CONFIG_JSON_SCHEMA_V1 {
                return Err(GraphError::InvalidConfig(format!(
                    "unsupported graph config schema version: {}",
                    payload.schema_version
                )));
            }
            payload.config
        } else {
            serde_json::from_value(value)
                .map_err(|e| GraphError::InvalidConfig(format!("invalid graph config: {e}")))?
        };

        config.validate()?;
        Ok(config)
    }
}
