//! Human-readable rendering of a resolved triangle.
//!
//! The text layout is not a stable contract; callers that need structured
//! output should read the accessors directly.

use std::fmt;

use crate::triangle::{Shape, Triangle};

/// Anything that turns a resolved triangle into text.
pub trait Reporter {
    fn render(&self, triangle: &Triangle) -> String;
}

/// Plain multi-line report, one quantity per line.
#[derive(Clone, Copy, Debug)]
pub struct TextReporter {
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for TextReporter {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl Reporter for TextReporter {
    fn render(&self, triangle: &Triangle) -> String {
        Report {
            triangle,
            precision: self.precision,
        }
        .to_string()
    }
}

struct Report<'a> {
    triangle: &'a Triangle,
    precision: usize,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (t, p) = (self.triangle, self.precision);
        let (title, side_names) = match t.shape() {
            Shape::General => ("Triangle", ["Side a", "Side b", "Side c"]),
            Shape::Right => ("Right triangle", ["Leg a", "Leg b", "Hypotenuse c"]),
            Shape::Isosceles => ("Isosceles triangle", ["Leg a", "Base b", "Leg c"]),
            Shape::Equilateral => ("Equilateral triangle", ["Side a", "Side b", "Side c"]),
        };
        writeln!(f, "{title}:")?;
        for (name, value) in side_names.iter().zip(t.sides()) {
            writeln!(f, "{name} = {value:.p$}")?;
        }
        for (name, value) in ["Angle α", "Angle β", "Angle γ"].iter().zip(t.angles()) {
            writeln!(f, "{name} = {value:.p$}°")?;
        }
        writeln!(f, "Perimeter = {:.p$}", t.perimeter())?;
        writeln!(f, "Area = {:.p$}", t.area())?;
        match t.height() {
            Ok(h) => writeln!(f, "Height = {h:.p$}")?,
            Err(err) => writeln!(f, "Height = n/a ({err})")?,
        }
        if let Some(obtuse) = t.is_apex_angle_obtuse() {
            writeln!(f, "Apex angle obtuse = {obtuse}")?;
        }
        Ok(())
    }
}
