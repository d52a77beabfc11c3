/// Errors from layout construction. All of them mean the configuration
/// describes geometry that cannot be placed.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LayoutError {
    #[error("arc placement needs at least 2 slots, got {count}")]
    DegenerateArc { count: usize },
    #[error("arc span is empty: end angle {end} must exceed start angle {start}")]
    EmptyArcSpan { start: f32, end: f32 },
    #[error("entrance gap {gap} must lie in [0, π)")]
    InvalidGap { gap: f32 },
    #[error(
        "forest radii invalid: clearing {clearing} must be non-negative and at most forest {forest}"
    )]
    InvalidRadii { clearing: f32, forest: f32 },
    #[error("forest palette is empty")]
    EmptyPalette,
    #[error("`{field}` must be finite")]
    NonFinite { field: &'static str },
    #[error("`{field}` must be non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },
}

pub(crate) fn finite(field: &'static str, value: f32) -> Result<f32, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::NonFinite { field })
    }
}

pub(crate) fn non_negative(field: &'static str, value: f32) -> Result<f32, LayoutError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(LayoutError::Negative { field, value });
    }
    Ok(value)
}
