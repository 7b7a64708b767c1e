//! O: Open/Closed
//!
//! Run with: cargo run --bin p2_open_closed

use colored::Colorize;
use solid_capabilities::ocp::{report_area, total_area, Circle, Shape, Square, Triangle};
use solid_capabilities::Terminal;

fn main() {
    println!("{}", "=== Open/Closed ===".bold());

    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Circle::new(5.0)),
        Box::new(Square::new(4.0)),
        Box::new(Triangle::new(3.0, 6.0)),
    ];

    for shape in &shapes {
        report_area(shape.as_ref(), &mut Terminal);
    }
    println!("Total area: {}", total_area(&shapes));
}
