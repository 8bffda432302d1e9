use serde::Serialize;
use trigon::Triangle;

/// JSON shape of a resolved triangle for `--format json`.
#[derive(Debug, Serialize)]
pub struct TriangleReport {
    pub shape: String,
    pub sides: [f64; 3],
    pub angles: [f64; 3],
    pub perimeter: f64,
    pub area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hypotenuse: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apex_angle_obtuse: Option<bool>,
}

/// One titled entry of the `demo` walkthrough in JSON mode.
#[derive(Debug, Serialize)]
pub struct DemoStep<'a> {
    pub title: &'a str,
    pub triangle: TriangleReport,
}

impl From<&Triangle> for TriangleReport {
    fn from(t: &Triangle) -> Self {
        let height = match t.height() {
            Ok(h) => Some(h),
            Err(err) => {
                tracing::warn!(%err, "height unavailable");
                None
            }
        };
        Self {
            shape: t.shape().to_string(),
            sides: t.sides(),
            angles: t.angles(),
            perimeter: t.perimeter(),
            area: t.area(),
            height,
            hypotenuse: t.hypotenuse(),
            apex_angle_obtuse: t.is_apex_angle_obtuse(),
        }
    }
}
