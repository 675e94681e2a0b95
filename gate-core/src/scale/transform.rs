//! Axis value transforms: linear, log10 and arcsinh.

use crate::error::{GateError, Result};

/// Which axis of a 2D viewport a transform applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Values at or below this are clamped before taking a logarithm, so the
/// transforms never produce NaN or infinities.
pub const LOG_EPSILON: f32 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Linear,
    Log10,
    Arcsinh { cofactor: f32 },
}

impl Transform {
    /// Map a raw data value into transformed axis space.
    pub fn apply(&self, value: f32) -> Result<f32> {
        match self {
            Transform::Linear => check_finite(value),
            Transform::Log10 => Ok(check_finite(value)?.max(LOG_EPSILON).log10()),
            Transform::Arcsinh { cofactor } => asinh_transform(value, *cofactor),
        }
    }

    /// Map a transformed axis value back to raw data space.
    pub fn invert(&self, value: f32) -> Result<f32> {
        match self {
            Transform::Linear => check_finite(value),
            Transform::Log10 => Ok(10f32.powf(check_finite(value)?)),
            Transform::Arcsinh { cofactor } => asinh_reverse(value, *cofactor),
        }
    }

    pub fn is_linear(&self) -> bool {
        matches!(self, Transform::Linear)
    }
}

fn check_finite(value: f32) -> Result<f32> {
    if value.is_nan() || value.is_infinite() {
        Err(GateError::InvalidTransform(format!(
            "value {value} is not finite"
        )))
    } else {
        Ok(value)
    }
}

pub fn asinh_transform(value: f32, cofactor: f32) -> Result<f32> {
    let value = check_finite(value)?;
    if cofactor == 0_f32 {
        return Err(GateError::InvalidTransform(format!(
            "cofactor {cofactor} cannot be used for arcsinh transform"
        )));
    }
    Ok((value / cofactor).asinh())
}

pub fn asinh_reverse(transformed_value: f32, cofactor: f32) -> Result<f32> {
    let transformed_value = check_finite(transformed_value)?;
    if cofactor == 0_f32 {
        return Err(GateError::InvalidTransform(format!(
            "cofactor {cofactor} cannot be zero"
        )));
    }
    Ok(transformed_value.sinh() * cofactor)
}

/// Visible bounds of one axis, expressed in its transform space.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisInfo {
    pub lower: f32,
    pub upper: f32,
    pub transform: Transform,
}

impl Default for AxisInfo {
    fn default() -> Self {
        Self {
            lower: 0_f32,
            upper: 4_194_304_f32,
            transform: Transform::Linear,
        }
    }
}

impl AxisInfo {
    /// Build from raw-space bounds, mapping them into transform space.
    /// Unrepresentable bounds fall back to the widest sensible span.
    pub fn new_from_raw(lower_raw: f32, upper_raw: f32, transform: Transform) -> Self {
        match transform {
            Transform::Linear => Self {
                lower: lower_raw,
                upper: upper_raw,
                transform,
            },
            _ => Self {
                lower: transform.apply(lower_raw).unwrap_or(0_f32),
                upper: transform.apply(upper_raw).unwrap_or(f32::INFINITY),
                transform,
            },
        }
    }

    pub fn into_arcsinh(&self, cofactor: f32) -> Result<Self> {
        let (lower_raw, upper_raw) = self.untransformed_bounds()?;
        let transform = Transform::Arcsinh { cofactor };
        Ok(Self {
            lower: transform.apply(lower_raw)?,
            upper: transform.apply(upper_raw)?,
            transform,
        })
    }

    pub fn into_linear(&self) -> Result<Self> {
        let (lower, upper) = self.untransformed_bounds()?;
        Ok(Self {
            lower,
            upper,
            transform: Transform::Linear,
        })
    }

    pub fn is_linear(&self) -> bool {
        self.transform.is_linear()
    }

    /// Bounds mapped back to raw data space.
    pub fn untransformed_bounds(&self) -> Result<(f32, f32)> {
        Ok((
            self.transform.invert(self.lower)?,
            self.transform.invert(self.upper)?,
        ))
    }

    pub fn cofactor(&self) -> Option<f32> {
        match self.transform {
            Transform::Arcsinh { cofactor } => Some(cofactor),
            _ => None,
        }
    }
}
