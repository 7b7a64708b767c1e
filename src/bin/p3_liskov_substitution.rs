//! L: Liskov Substitution
//!
//! Run with: cargo run --bin p3_liskov_substitution

use colored::Colorize;
use solid_capabilities::lsp::{lay_all, Bird, Flyer, FlyingBird, Penguin, Swimmer};
use solid_capabilities::Terminal;

fn main() {
    println!("{}", "=== Liskov Substitution ===".bold());

    let birds: Vec<Box<dyn Bird>> = vec![Box::new(FlyingBird), Box::new(Penguin)];
    lay_all(&birds, &mut Terminal);

    println!("\n{}", "--- Abilities beyond the base contract ---".dimmed());
    FlyingBird.fly(&mut Terminal);
    Penguin.swim(&mut Terminal);
}
