//! Triangle construction and characteristics.
//!
//! Given a partial description of a triangle (three sides, two sides and the
//! included angle, two angles and a side, or a special shape), validate it and
//! derive every missing side and angle with the Laws of Cosines and Sines or a
//! shape shortcut (Pythagoras, symmetry).
//!
//! Layout
//! - `math`: stateless trigonometric helpers (degrees in, degrees out).
//! - `triangle`: the `Triangle` tagged union, its factory and reconfiguration.
//! - `report`: text rendering of a resolved triangle.
//! - `cfg`: tolerance constants; `error`: `TriangleError`.

pub mod cfg;
pub mod error;
pub mod math;
pub mod report;
pub mod triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::TriangleError;
pub use triangle::{Record, Shape, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::TriangleError;
    pub use crate::report::{Reporter, TextReporter};
    pub use crate::triangle::{Record, Shape, Triangle};
}
