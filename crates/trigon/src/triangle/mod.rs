//! Triangles: construction, derivation and reconfiguration.
//!
//! Purpose
//! - Turn a partial description (SSS, SAS, ASA, right legs, isosceles
//!   base/leg, equilateral side) into a fully resolved `Triangle`.
//! - Keep the shape as a closed tagged union over one `Record`, so the
//!   derivation rule is chosen once at construction and never dispatched
//!   dynamically.
//!
//! Layout
//! - `types.rs`: `Record`, `Shape`, `Triangle` and derived quantities.
//! - `build.rs`: the factory constructors and their validation.
//! - `reconfig.rs`: copy-on-write reconfiguration per shape.
//!
//! Code cross-refs: `math::{law_of_cosines_angle, third_side_by_law_of_cosines,
//! side_by_law_of_sines}`, `report::Reporter`.

mod build;
mod reconfig;
mod types;

pub use types::{Record, Shape, Triangle};

#[cfg(test)]
mod props;
