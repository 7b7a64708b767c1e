//! D: Dependency Inversion
//!
//! Run with: cargo run --bin p5_dependency_inversion

use colored::Colorize;
use solid_capabilities::dip::{
    Browser, MongoDbDatabase, MySqlDatabase, Nitro, SpiderMonkey, UserService, V8Engine,
};
use solid_capabilities::Terminal;

fn main() {
    println!("{}", "=== Dependency Inversion: services ===".bold());
    let mysql_service = UserService::new(MySqlDatabase);
    mysql_service.start(&mut Terminal);

    let mongo_service = UserService::new(MongoDbDatabase);
    mongo_service.start(&mut Terminal);

    println!("\n{}", "=== Dependency Inversion: browsers ===".bold());
    let js = "function foo(){}";
    let chrome = Browser::new(Box::new(V8Engine));
    let firefox = Browser::new(Box::new(SpiderMonkey));
    let safari = Browser::new(Box::new(Nitro));

    chrome.run(js, &mut Terminal);
    firefox.run(js, &mut Terminal);
    safari.run(js, &mut Terminal);
}
