//! Two-null tonearm alignment solver.
//!
//! Purpose
//! - Solve the two-null condition for a pivoted tonearm: with pivot-to-spindle
//!   distance `S` and null radii `r1 < r2`, the stylus arc crosses the groove
//!   tangentially at exactly `r1` and `r2` when
//!   - `linear_offset    = (r1 + r2) / 2`
//!   - `effective_length = sqrt(S^2 + r1 * r2)`
//!   - `offset_angle     = asin(linear_offset / effective_length)`
//!   - `overhang         = effective_length - S`
//!
//! Why this design
//! - Plain double-precision arithmetic, no tolerances. The validation
//!   branches reject exactly the inputs with no real solution (the arcsine
//!   argument would exceed 1), so identical inputs reproduce bit-identical
//!   outputs.

use serde::Serialize;
use std::fmt;

/// Validation failure: malformed or physically impossible inputs.
///
/// One kind, four fixed messages; callers distinguish cases by message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryError {
    reason: &'static str,
}

impl GeometryError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// The fixed human-readable message for this failure.
    pub fn message(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason)
    }
}

impl std::error::Error for GeometryError {}

/// Solved alignment geometry. All lengths in millimetres, the angle in
/// degrees. Inputs are echoed so formatters need not keep the caller's
/// arguments around.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Geometry {
    pub pivot_to_spindle: f64,
    pub inner_null: f64,
    pub outer_null: f64,
    pub effective_length: f64,
    pub offset_angle_deg: f64,
    pub overhang: f64,
    pub linear_offset: f64,
}

/// Solve the two-null alignment for the given pivot-to-spindle distance and
/// null radii.
///
/// Pre: all three inputs are finite.
/// Post: `effective_length >= pivot_to_spindle`, `offset_angle_deg` lies in
/// (0, 90]; `overhang` is unconstrained in sign (negative for unusual
/// geometries is allowed).
pub fn compute(
    pivot_to_spindle: f64,
    inner_null: f64,
    outer_null: f64,
) -> Result<Geometry, GeometryError> {
    if pivot_to_spindle <= 0.0 {
        return Err(GeometryError::new(
            "Pivot-to-spindle distance must be positive.",
        ));
    }
    if inner_null <= 0.0 || outer_null <= 0.0 {
        return Err(GeometryError::new("Null points must be positive."));
    }
    if inner_null >= outer_null {
        return Err(GeometryError::new(
            "Inner null must be smaller than outer null.",
        ));
    }

    let r_product = inner_null * outer_null;
    let effective_length = (pivot_to_spindle * pivot_to_spindle + r_product).sqrt();

    let linear_offset = 0.5 * (inner_null + outer_null);
    // No real solution once the nulls are further apart than twice the pivot
    // distance; the strict comparison keeps the asin(1) boundary case valid.
    if linear_offset > effective_length {
        return Err(GeometryError::new(
            "Geometry impossible: linear offset exceeds effective length.",
        ));
    }

    let offset_angle_deg = (linear_offset / effective_length).asin().to_degrees();
    let overhang = effective_length - pivot_to_spindle;

    Ok(Geometry {
        pivot_to_spindle,
        inner_null,
        outer_null,
        effective_length,
        offset_angle_deg,
        overhang,
        linear_offset,
    })
}
