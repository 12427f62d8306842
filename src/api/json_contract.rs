use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::{BarListConfig, BarListLayout, CategoryBarConfig, CategoryBarLayout};

pub const BAR_LIST_LAYOUT_JSON_SCHEMA_V1: u32 = 1;
pub const CATEGORY_BAR_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarListLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: BarListLayout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBarLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: CategoryBarLayout,
}

impl BarListLayout {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = BarListLayoutJsonContractV1 {
            schema_version: BAR_LIST_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize bar list contract v1: {e}"))
        })
    }

    /// Parses either a bare layout or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(layout) = serde_json::from_str::<BarListLayout>(input) {
            return Ok(layout);
        }
        let payload: BarListLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse bar list json payload: {e}"))
        })?;
        if payload.schema_version != BAR_LIST_LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported bar list schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

impl CategoryBarLayout {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = CategoryBarLayoutJsonContractV1 {
            schema_version: CATEGORY_BAR_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize category bar contract v1: {e}"))
        })
    }

    /// Parses either a bare layout or a v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(layout) = serde_json::from_str::<CategoryBarLayout>(input) {
            return Ok(layout);
        }
        let payload: CategoryBarLayoutJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse category bar json payload: {e}"))
            })?;
        if payload.schema_version != CATEGORY_BAR_LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported category bar schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

impl BarListConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize bar list config: {e}"))
        })
    }

    /// Parses and validates a persisted config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse bar list config: {e}"))
        })?;
        config.validate()
    }
}

impl CategoryBarConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize category bar config: {e}"))
        })
    }

    /// Parses and validates a persisted config.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse category bar config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}
