//! I: Interface Segregation
//!
//! Run with: cargo run --bin p4_interface_segregation

use colored::Colorize;
use solid_capabilities::isp::{
    lunch_break, run_shift, wiggle, wiggle_and_spin, Human, LineFigure, Robot, SquareFigure,
    ZigzagFigure,
};
use solid_capabilities::Terminal;

fn main() {
    println!("{}", "=== Interface Segregation: workers ===".bold());
    let john = Human;
    let r2d2 = Robot;
    run_shift(&[&john, &r2d2], &mut Terminal);
    // Robot is not Eatable, so it cannot be passed here.
    lunch_break(&[&john], &mut Terminal);

    println!("\n{}", "=== Interface Segregation: figures ===".bold());
    let mut square = SquareFigure::new(0, 0);
    let mut zigzag = ZigzagFigure::new(2, 0);
    let mut line = LineFigure::new(4, 0);

    wiggle(&mut square, &mut Terminal);
    wiggle_and_spin(&mut zigzag, &mut Terminal);
    wiggle_and_spin(&mut line, &mut Terminal);
}
