//! Open/Closed: new shapes plug into the area client without the client
//! (or any existing shape) being edited.

use crate::capability::{Capability, Subject};
use crate::console::Console;
use crate::error::CapabilityError;
use std::f64::consts::PI;

pub trait Shape {
    fn name(&self) -> &'static str;
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    // Truncated toward zero: radius 5 reports 78, not 78.54.
    fn area(&self) -> f64 {
        (PI * self.radius.powi(2)).trunc()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self { side }
    }
}

impl Shape for Square {
    fn name(&self) -> &'static str {
        "Square"
    }

    fn area(&self) -> f64 {
        self.side.powi(2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Triangle {
    pub fn new(base: f64, height: f64) -> Self {
        Self { base, height }
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "Triangle"
    }

    fn area(&self) -> f64 {
        self.base * self.height / 2.0
    }
}

// =============================================================================
// Client: works for every Shape, present and future
// =============================================================================

pub fn areas(shapes: &[Box<dyn Shape>]) -> Vec<f64> {
    shapes.iter().map(|s| s.area()).collect()
}

pub fn total_area(shapes: &[Box<dyn Shape>]) -> f64 {
    shapes.iter().map(|s| s.area()).sum()
}

pub fn report_area(shape: &dyn Shape, out: &mut dyn Console) -> f64 {
    let area = shape.area();
    out.line(format!("{} area = {}", shape.name(), area));
    area
}

// Every shape is a Subject through the same adapter.
impl<S: Shape> Subject for S {
    fn label(&self) -> &str {
        self.name()
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Shape]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["area"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "area" => Ok(Some(report_area(&*self, out).to_string())),
            _ => Err(CapabilityError::unimplemented(self.name(), operation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    fn shapes() -> Vec<Box<dyn Shape>> {
        vec![
            Box::new(Circle::new(5.0)),
            Box::new(Square::new(4.0)),
            Box::new(Triangle::new(3.0, 6.0)),
        ]
    }

    #[test]
    fn test_literal_areas() {
        assert_eq!(areas(&shapes()), vec![78.0, 16.0, 9.0]);
        assert_eq!(total_area(&shapes()), 103.0);
    }

    #[test]
    fn test_circle_area_truncates() {
        assert_eq!(Circle::new(1.0).area(), 3.0);
        assert_eq!(Circle::new(0.0).area(), 0.0);
    }

    #[test]
    fn test_report_area_prints_whole_numbers_plainly() {
        let mut out = Transcript::new();
        for shape in shapes() {
            report_area(shape.as_ref(), &mut out);
        }
        assert_eq!(
            out.lines(),
            ["Circle area = 78", "Square area = 16", "Triangle area = 9"]
        );
    }

    // A shape added here, after the client was written.
    struct Rectangle {
        width: f64,
        height: f64,
    }

    impl Shape for Rectangle {
        fn name(&self) -> &'static str {
            "Rectangle"
        }

        fn area(&self) -> f64 {
            self.width * self.height
        }
    }

    #[test]
    fn test_new_shape_needs_no_client_change() {
        let mut all = shapes();
        all.push(Box::new(Rectangle {
            width: 2.0,
            height: 5.0,
        }));
        assert_eq!(areas(&all).last(), Some(&10.0));
    }

    #[test]
    fn test_shape_subject_returns_area() {
        let mut out = Transcript::new();
        let mut square = Square::new(4.0);
        let value = square.perform("area", None, &mut out).unwrap();

        assert_eq!(value.as_deref(), Some("16"));
        assert_eq!(out.lines(), ["Square area = 16"]);
    }
}
