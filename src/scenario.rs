use crate::capability::Subject;
use crate::dip::{Browser, Database, Engine, MongoDbDatabase, MySqlDatabase, Nitro, SpiderMonkey, UserService, V8Engine};
use crate::error::HarnessError;
use crate::isp::{Human, LineFigure, Robot, SquareFigure, ZigzagFigure};
use crate::lsp::{FlyingBird, Penguin};
use crate::ocp::{Circle, Square, Triangle};
use crate::srp::{ReportCreator, ReportPrinter};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Argument value that stands for whatever the previous step returned.
pub const PREVIOUS_VALUE: &str = "@previous";

const BUILTIN: &str = include_str!("../scenarios/solid.toml");

// =============================================================================
// Variant declarations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DatabaseKind {
    MySqlDatabase,
    MongoDbDatabase,
}

impl DatabaseKind {
    fn build(self) -> Box<dyn Database> {
        match self {
            DatabaseKind::MySqlDatabase => Box::new(MySqlDatabase),
            DatabaseKind::MongoDbDatabase => Box::new(MongoDbDatabase),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EngineKind {
    V8Engine,
    SpiderMonkey,
    Nitro,
}

impl EngineKind {
    fn build(self) -> Box<dyn Engine> {
        match self {
            EngineKind::V8Engine => Box::new(V8Engine),
            EngineKind::SpiderMonkey => Box::new(SpiderMonkey),
            EngineKind::Nitro => Box::new(Nitro),
        }
    }
}

/// Which concrete type to construct, with its literal initial state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind")]
pub enum VariantKind {
    ReportCreator,
    ReportPrinter,
    Circle { radius: f64 },
    Square { side: f64 },
    Triangle { base: f64, height: f64 },
    FlyingBird,
    Penguin,
    Human,
    Robot,
    SquareFigure { x: i32, y: i32 },
    ZigzagFigure { x: i32, y: i32 },
    LineFigure { x: i32, y: i32 },
    MySqlDatabase,
    MongoDbDatabase,
    UserService { database: DatabaseKind },
    V8Engine,
    SpiderMonkey,
    Nitro,
    Browser { engine: EngineKind },
}

impl VariantKind {
    pub fn instantiate(&self) -> Box<dyn Subject> {
        match *self {
            VariantKind::ReportCreator => Box::new(ReportCreator),
            VariantKind::ReportPrinter => Box::new(ReportPrinter),
            VariantKind::Circle { radius } => Box::new(Circle::new(radius)),
            VariantKind::Square { side } => Box::new(Square::new(side)),
            VariantKind::Triangle { base, height } => Box::new(Triangle::new(base, height)),
            VariantKind::FlyingBird => Box::new(FlyingBird),
            VariantKind::Penguin => Box::new(Penguin),
            VariantKind::Human => Box::new(Human),
            VariantKind::Robot => Box::new(Robot),
            VariantKind::SquareFigure { x, y } => Box::new(SquareFigure::new(x, y)),
            VariantKind::ZigzagFigure { x, y } => Box::new(ZigzagFigure::new(x, y)),
            VariantKind::LineFigure { x, y } => Box::new(LineFigure::new(x, y)),
            VariantKind::MySqlDatabase => Box::new(MySqlDatabase),
            VariantKind::MongoDbDatabase => Box::new(MongoDbDatabase),
            VariantKind::UserService { database } => Box::new(UserService::new(database.build())),
            VariantKind::V8Engine => Box::new(V8Engine),
            VariantKind::SpiderMonkey => Box::new(SpiderMonkey),
            VariantKind::Nitro => Box::new(Nitro),
            VariantKind::Browser { engine } => Box::new(Browser::new(engine.build())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariantDecl {
    pub id: String,
    #[serde(flatten)]
    pub kind: VariantKind,
}

// =============================================================================
// Steps
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    pub target: String,
    pub operation: String,
    #[serde(default)]
    pub arg: Option<String>,
    /// Exact lines the step must print. `None` skips the check; an empty
    /// list demands silence.
    #[serde(default)]
    pub expect: Option<Vec<String>>,
}

impl Step {
    pub fn new(target: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            operation: operation.into(),
            arg: None,
            expect: None,
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = Some(arg.into());
        self
    }

    pub fn expecting<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expect = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn uses_previous(&self) -> bool {
        self.arg.as_deref() == Some(PREVIOUS_VALUE)
    }
}

// =============================================================================
// Scenario
// =============================================================================

/// Variants to build plus the ordered steps to replay against them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub variants: Vec<VariantDecl>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// The tour shipped with the crate.
    pub fn builtin() -> Result<Self, HarnessError> {
        BUILTIN.parse()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, HarnessError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.display().to_string(),
            source,
        })?;
        content.parse()
    }

    pub fn variant(mut self, id: impl Into<String>, kind: VariantKind) -> Self {
        self.variants.push(VariantDecl { id: id.into(), kind });
        self
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }
}

impl FromStr for Scenario {
    type Err = HarnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
