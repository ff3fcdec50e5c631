//! # Field Descriptor
//!
//! A `Field` names a vector and fixes its [`MinorType`]. For decimal
//! vectors it also carries precision and scale; those are validated once
//! at construction so every downstream write can trust them.

use eyre::Result;

use crate::error::VectorError;
use crate::types::MinorType;

/// Maximum decimal precision representable in a 16-byte significand.
pub(crate) const MAX_DECIMAL_PRECISION: u8 = 38;

/// Immutable per-vector type descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    minor_type: MinorType,
    precision: Option<u8>,
    scale: Option<u8>,
}

impl Field {
    /// Creates a descriptor for any non-decimal type.
    pub fn new(name: impl Into<String>, minor_type: MinorType) -> Self {
        debug_assert!(minor_type != MinorType::Decimal, "use Field::decimal");
        Self {
            name: name.into(),
            minor_type,
            precision: None,
            scale: None,
        }
    }

    /// Creates a decimal descriptor, validating `precision ∈ [1, 38]` and
    /// `scale ∈ [0, precision]`.
    pub fn decimal(name: impl Into<String>, precision: u8, scale: u8) -> Result<Self> {
        if precision == 0 || precision > MAX_DECIMAL_PRECISION {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "decimal precision {precision} outside [1, {MAX_DECIMAL_PRECISION}]"
            )));
        }
        if scale > precision {
            eyre::bail!(VectorError::InvalidArgument(format!(
                "decimal scale {scale} exceeds precision {precision}"
            )));
        }
        Ok(Self {
            name: name.into(),
            minor_type: MinorType::Decimal,
            precision: Some(precision),
            scale: Some(scale),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn minor_type(&self) -> MinorType {
        self.minor_type
    }

    pub fn precision(&self) -> Option<u8> {
        self.precision
    }

    pub fn scale(&self) -> Option<u8> {
        self.scale
    }

    /// Same descriptor under a different name, for transfer targets.
    pub(crate) fn with_name(&self, name: impl Into<String>) -> Field {
        Field {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Type equality ignores the name; decimal parameters must match.
    pub(crate) fn type_equals(&self, other: &Field) -> bool {
        self.minor_type == other.minor_type
            && self.precision == other.precision
            && self.scale == other.scale
    }

    pub(crate) fn type_description(&self) -> String {
        match (self.precision, self.scale) {
            (Some(p), Some(s)) => format!("{:?}({p}, {s})", self.minor_type),
            _ => format!("{:?}", self.minor_type),
        }
    }
}
