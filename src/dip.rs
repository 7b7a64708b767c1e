//! Dependency Inversion: the high-level service and browser depend on the
//! `Database` and `Engine` abstractions, and the concrete backends are
//! handed in from outside.

use crate::capability::{require_arg, Capability, Subject};
use crate::console::Console;
use crate::error::CapabilityError;

// =============================================================================
// Databases and the user service
// =============================================================================

pub trait Database {
    fn connect(&self, out: &mut dyn Console);
}

impl<D: Database + ?Sized> Database for Box<D> {
    fn connect(&self, out: &mut dyn Console) {
        (**self).connect(out);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlDatabase;

impl Database for MySqlDatabase {
    fn connect(&self, out: &mut dyn Console) {
        out.line("Connecting to MySQL...".to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MongoDbDatabase;

impl Database for MongoDbDatabase {
    fn connect(&self, out: &mut dyn Console) {
        out.line("Connecting to MongoDB...".to_string());
    }
}

/// Knows it needs *a* database, never which one.
pub struct UserService<D: Database> {
    database: D,
}

impl<D: Database> UserService<D> {
    pub fn new(database: D) -> Self {
        UserService { database }
    }

    pub fn start(&self, out: &mut dyn Console) {
        self.database.connect(out);
        out.line("User service started.".to_string());
    }
}

// =============================================================================
// JavaScript engines and the browser
// =============================================================================

pub trait Engine {
    fn name(&self) -> &'static str;
    fn compile(&self, code: &str, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct V8Engine;

impl Engine for V8Engine {
    fn name(&self) -> &'static str {
        "V8Engine"
    }

    fn compile(&self, code: &str, out: &mut dyn Console) {
        out.line(format!("V8 Engine compiling: {}", code));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SpiderMonkey;

impl Engine for SpiderMonkey {
    fn name(&self) -> &'static str {
        "SpiderMonkey"
    }

    fn compile(&self, code: &str, out: &mut dyn Console) {
        out.line(format!("SpiderMonkey compiling: {}", code));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Nitro;

impl Engine for Nitro {
    fn name(&self) -> &'static str {
        "Nitro"
    }

    fn compile(&self, code: &str, out: &mut dyn Console) {
        out.line(format!("Nitro compiling: {}", code));
    }
}

/// Holds its engine only as `dyn Engine`.
pub struct Browser {
    engine: Box<dyn Engine>,
}

impl Browser {
    pub fn new(engine: Box<dyn Engine>) -> Self {
        Self { engine }
    }

    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub fn run(&self, js: &str, out: &mut dyn Console) {
        self.engine.compile(js, out);
    }

    /// Points the browser at another engine and hands back the old one.
    pub fn replace_engine(&mut self, engine: Box<dyn Engine>) -> Box<dyn Engine> {
        std::mem::replace(&mut self.engine, engine)
    }
}

// =============================================================================
// Subjects
// =============================================================================

macro_rules! database_subject {
    ($ty:ty, $label:literal) => {
        impl Subject for $ty {
            fn label(&self) -> &str {
                $label
            }

            fn capabilities(&self) -> &'static [Capability] {
                &[Capability::Database]
            }

            fn operations(&self) -> &'static [&'static str] {
                &["connect"]
            }

            fn perform(
                &mut self,
                operation: &str,
                _arg: Option<&str>,
                out: &mut dyn Console,
            ) -> Result<Option<String>, CapabilityError> {
                match operation {
                    "connect" => {
                        self.connect(out);
                        Ok(None)
                    }
                    _ => Err(CapabilityError::unimplemented($label, operation)),
                }
            }
        }
    };
}

database_subject!(MySqlDatabase, "MySqlDatabase");
database_subject!(MongoDbDatabase, "MongoDbDatabase");

macro_rules! engine_subject {
    ($ty:ty) => {
        impl Subject for $ty {
            fn label(&self) -> &str {
                self.name()
            }

            fn capabilities(&self) -> &'static [Capability] {
                &[Capability::Engine]
            }

            fn operations(&self) -> &'static [&'static str] {
                &["compile"]
            }

            fn perform(
                &mut self,
                operation: &str,
                arg: Option<&str>,
                out: &mut dyn Console,
            ) -> Result<Option<String>, CapabilityError> {
                match operation {
                    "compile" => {
                        self.compile(require_arg(self.name(), operation, arg)?, out);
                        Ok(None)
                    }
                    _ => Err(CapabilityError::unimplemented(self.name(), operation)),
                }
            }
        }
    };
}

engine_subject!(V8Engine);
engine_subject!(SpiderMonkey);
engine_subject!(Nitro);

impl<D: Database> Subject for UserService<D> {
    fn label(&self) -> &str {
        "UserService"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Service]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["start"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "start" => {
                self.start(out);
                Ok(None)
            }
            _ => Err(CapabilityError::unimplemented("UserService", operation)),
        }
    }
}

impl Subject for Browser {
    fn label(&self) -> &str {
        "Browser"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Browser]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["run"]
    }

    fn perform(
        &mut self,
        operation: &str,
        arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "run" => {
                self.run(require_arg("Browser", operation, arg)?, out);
                Ok(None)
            }
            _ => Err(CapabilityError::unimplemented("Browser", operation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use std::cell::Cell;

    #[test]
    fn test_service_runs_against_any_database() {
        let mut out = Transcript::new();
        UserService::new(MySqlDatabase).start(&mut out);
        UserService::new(MongoDbDatabase).start(&mut out);

        assert_eq!(
            out.lines(),
            [
                "Connecting to MySQL...",
                "User service started.",
                "Connecting to MongoDB...",
                "User service started.",
            ]
        );
    }

    // A backend the service has never heard of.
    struct CountingDatabase {
        connects: Cell<u32>,
    }

    impl Database for CountingDatabase {
        fn connect(&self, _out: &mut dyn Console) {
            self.connects.set(self.connects.get() + 1);
        }
    }

    #[test]
    fn test_new_database_needs_no_service_change() {
        let service = UserService::new(CountingDatabase {
            connects: Cell::new(0),
        });
        let mut out = Transcript::new();
        service.start(&mut out);
        service.start(&mut out);

        assert_eq!(service.database.connects.get(), 2);
        assert_eq!(out.lines(), ["User service started.", "User service started."]);
    }

    #[test]
    fn test_boxed_database_is_a_database() {
        let boxed: Box<dyn Database> = Box::new(MongoDbDatabase);
        let mut out = Transcript::new();
        UserService::new(boxed).start(&mut out);
        assert_eq!(out.lines()[0], "Connecting to MongoDB...");
    }

    #[test]
    fn test_browsers_forward_to_their_engine() {
        let js = "function foo(){}";
        let browsers = [
            Browser::new(Box::new(V8Engine)),
            Browser::new(Box::new(SpiderMonkey)),
            Browser::new(Box::new(Nitro)),
        ];
        let mut out = Transcript::new();
        for browser in &browsers {
            browser.run(js, &mut out);
        }

        assert_eq!(
            out.lines(),
            [
                "V8 Engine compiling: function foo(){}",
                "SpiderMonkey compiling: function foo(){}",
                "Nitro compiling: function foo(){}",
            ]
        );
    }

    #[test]
    fn test_replace_engine_repoints_browser() {
        let mut browser = Browser::new(Box::new(V8Engine));
        let old = browser.replace_engine(Box::new(Nitro));

        assert_eq!(old.name(), "V8Engine");
        assert_eq!(browser.engine_name(), "Nitro");
    }

    #[test]
    fn test_browser_run_requires_code() {
        let mut browser = Browser::new(Box::new(V8Engine));
        let mut out = Transcript::new();
        let err = browser.perform("run", None, &mut out).unwrap_err();
        assert_eq!(err, CapabilityError::missing_argument("Browser", "run"));
    }
}
