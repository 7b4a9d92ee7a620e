//! Validation of raw configuration values against attribute schemas

use crate::node::{AttrKind, AttrSchema};
use easel_core::{Color, EaselError, Result};
use serde_json::Value;

/// Host-supplied check for axis identifiers.
///
/// The engine knows nothing about the axis-id grammar; the
/// coordinate-resolution collaborator decides which identifiers exist.
/// `"paper"` is always accepted without consulting the check.
pub trait AxisRefCheck {
    fn is_axis_ref(&self, value: &str) -> bool;
}

impl<F> AxisRefCheck for F
where
    F: Fn(&str) -> bool,
{
    fn is_axis_ref(&self, value: &str) -> bool {
        self(value)
    }
}

/// Rejects every axis identifier, leaving only the literal `"paper"`
/// valid. The right check for hosts without axes.
pub struct NoAxes;

impl AxisRefCheck for NoAxes {
    fn is_axis_ref(&self, _value: &str) -> bool {
        false
    }
}

/// Validate a raw value against an attribute schema node.
///
/// Pure and side-effect free; the same inputs always produce the same
/// outcome. No coercion is performed anywhere: a value of the wrong JSON
/// type is rejected even when a lossless conversion exists, and numeric
/// values outside `[min, max]` are rejected rather than clamped so user
/// intent is surfaced instead of silently altered.
pub fn validate_value(attr: &AttrSchema, value: &Value, axes: &dyn AxisRefCheck) -> Result<()> {
    match (&attr.kind, value) {
        (AttrKind::Boolean, Value::Bool(_)) => Ok(()),
        (AttrKind::Number, Value::Number(n)) => match n.as_f64() {
            Some(v) => validate_range(attr, v),
            None => Err(type_mismatch(attr, value)),
        },
        (AttrKind::Integer, Value::Number(n)) => {
            if n.is_i64() || n.is_u64() {
                // as_f64 is total for integers in i64/u64 range
                validate_range(attr, n.as_f64().unwrap_or(0.0))
            } else {
                Err(type_mismatch(attr, value))
            }
        }
        (AttrKind::String, Value::String(_)) => Ok(()),
        (AttrKind::Color, Value::String(s)) => Color::parse(s).map(|_| ()),
        (AttrKind::Enumerated { values }, Value::String(s)) => {
            if values.iter().any(|v| v == s) {
                Ok(())
            } else {
                Err(EaselError::InvalidEnumValue {
                    value: s.clone(),
                    allowed: values.clone(),
                })
            }
        }
        (AttrKind::AxisRef, Value::String(s)) => {
            if s == "paper" || axes.is_axis_ref(s) {
                Ok(())
            } else {
                Err(EaselError::InvalidAxisRef(s.clone()))
            }
        }
        (AttrKind::Any, _) => Ok(()),
        _ => Err(type_mismatch(attr, value)),
    }
}

fn type_mismatch(attr: &AttrSchema, value: &Value) -> EaselError {
    EaselError::InvalidValueType {
        expected: attr.kind.type_name().to_string(),
        got: value_type_name(value).to_string(),
    }
}

fn validate_range(attr: &AttrSchema, value: f64) -> Result<()> {
    let out_of_range = || EaselError::ValueOutOfRange {
        attr: attr.name.clone(),
        min: attr.min.unwrap_or(f64::NEG_INFINITY),
        max: attr.max.unwrap_or(f64::INFINITY),
        value,
    };
    if let Some(min) = attr.min {
        if value < min {
            return Err(out_of_range());
        }
    }
    if let Some(max) = attr.max {
        if value > max {
            return Err(out_of_range());
        }
    }
    Ok(())
}

/// Human-readable name of a JSON value's type, for error messages
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
