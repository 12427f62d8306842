use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

/// Spacing metrics may be zero; sizes may not.
pub(super) fn validate_spacing_px(value: f64, name: &str) -> ChartResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(value)
}

pub(super) fn validate_size_px(value: f64, name: &str) -> ChartResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(value)
}

pub(super) fn validate_categories(categories: &[f64]) -> ChartResult<()> {
    if let Some(index) = categories
        .iter()
        .position(|value| !value.is_finite() || *value < 0.0)
    {
        return Err(ChartError::InvalidData(format!(
            "category {index} must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_percentage_value(value: Option<f64>) -> ChartResult<Option<f64>> {
    match value {
        Some(value) if !value.is_finite() => Err(ChartError::InvalidData(
            "percentage value must be finite".to_owned(),
        )),
        other => Ok(other),
    }
}
