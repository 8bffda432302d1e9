use std::fmt;

/// Errors surfaced by triangle construction, reconfiguration and derivation.
#[derive(Clone, Debug, PartialEq)]
pub enum TriangleError {
    /// Input violates a geometric precondition (positivity, triangle
    /// inequality, angle range or angle sum). Nothing was built or changed.
    InvalidTriangle { reason: String },
    /// A derivation step would divide by (near-)zero or take the root of a
    /// negative number. Upstream validation should make this unreachable.
    DegenerateGeometry { reason: String },
}

impl TriangleError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidTriangle {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidTriangle { .. })
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::DegenerateGeometry { .. })
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTriangle { reason } => write!(f, "invalid triangle: {reason}"),
            Self::DegenerateGeometry { reason } => write!(f, "degenerate geometry: {reason}"),
        }
    }
}

impl std::error::Error for TriangleError {}
