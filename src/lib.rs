//! # SOLID Principles as Capabilities
//!
//! Each of the five SOLID principles is shown with a small worked example,
//! written twice over:
//!
//! ## Static face
//! - Plain traits (`Shape`, `Workable`, `Moveable`, `Engine`, ...)
//! - Concrete variants implement only the traits they can honour
//! - Clients are generic over the trait, never over the concrete type
//!
//! ## Dynamic face
//! - Every variant is also a [`Subject`] declaring its [`Capability`] set
//! - The [`Registry`] validates declarations and dispatches by operation name
//! - A [`Scenario`] lists `(variant, operation, expected output)` steps and the
//!   [`Harness`] replays and checks them
//!
//! Run the whole tour with: `cargo run --bin solid`

pub mod capability;
pub mod config;
pub mod console;
pub mod dip;
pub mod error;
pub mod harness;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod registry;
pub mod scenario;
pub mod srp;

pub use capability::{Capability, Subject};
pub use config::HarnessConfig;
pub use console::{Console, Terminal, Transcript};
pub use error::{CapabilityError, HarnessError};
pub use harness::{Harness, RunSummary};
pub use registry::Registry;
pub use scenario::Scenario;
