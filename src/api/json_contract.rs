use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

use super::{SliderConfig, SliderSnapshot};

pub const SLIDER_CONFIG_JSON_SCHEMA_V1: u32 = 1;
pub const SLIDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: SliderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SliderSnapshot,
}

impl SliderConfig {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderConfigJsonContractV1 {
            schema_version: SLIDER_CONFIG_JSON_SCHEMA_V1,
            config: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        // Every config field has a default, so the versioned shape is tried
        // first or a contract payload would parse as an empty bare object.
        if let Ok(payload) = serde_json::from_str::<SliderConfigJsonContractV1>(input) {
            if payload.schema_version != SLIDER_CONFIG_JSON_SCHEMA_V1 {
                return Err(SliderError::InvalidData(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }
        serde_json::from_str::<SliderConfig>(input).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse config json payload: {e}"))
        })
    }
}

impl SliderSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = SliderSnapshotJsonContractV1 {
            schema_version: SLIDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> SliderResult<Self> {
        if let Ok(payload) = serde_json::from_str::<SliderSnapshotJsonContractV1>(input) {
            if payload.schema_version != SLIDER_SNAPSHOT_JSON_SCHEMA_V1 {
                return Err(SliderError::InvalidData(format!(
                    "unsupported snapshot schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.snapshot);
        }
        serde_json::from_str::<SliderSnapshot>(input).map_err(|e| {
            SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })
    }
}
