//! S: Single Responsibility
//!
//! Run with: cargo run --bin p1_single_responsibility

use colored::Colorize;
use serde_json::json;
use solid_capabilities::srp::{ReportCreator, ReportPrinter};
use solid_capabilities::Terminal;

fn main() {
    println!("{}", "=== Single Responsibility ===".bold());

    let creator = ReportCreator;
    let printer = ReportPrinter;

    let report = creator.create_report(&json!({ "sales": 100 }));
    printer.print(&report, &mut Terminal);
}
