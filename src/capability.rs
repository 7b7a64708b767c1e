use crate::console::Console;
use crate::error::CapabilityError;
use itertools::Itertools;
use std::fmt;

// =============================================================================
// Capability catalogue
// =============================================================================

/// A named operation contract. A variant satisfies a capability when it
/// provides every operation the capability (and its bases) require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ReportCreation,
    ReportPrinting,
    Shape,
    Bird,
    Flying,
    Swimming,
    Workable,
    Eatable,
    Positioned,
    Moveable,
    Rotatable,
    Database,
    Service,
    Engine,
    Browser,
}

/// Operations that cannot run without an argument.
const ARGUMENT_OPERATIONS: &[&str] = &["create_report", "print", "compile", "run"];

impl Capability {
    pub const ALL: [Capability; 15] = [
        Capability::ReportCreation,
        Capability::ReportPrinting,
        Capability::Shape,
        Capability::Bird,
        Capability::Flying,
        Capability::Swimming,
        Capability::Workable,
        Capability::Eatable,
        Capability::Positioned,
        Capability::Moveable,
        Capability::Rotatable,
        Capability::Database,
        Capability::Service,
        Capability::Engine,
        Capability::Browser,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Capability::ReportCreation => "report_creation",
            Capability::ReportPrinting => "report_printing",
            Capability::Shape => "shape",
            Capability::Bird => "bird",
            Capability::Flying => "flying",
            Capability::Swimming => "swimming",
            Capability::Workable => "workable",
            Capability::Eatable => "eatable",
            Capability::Positioned => "positioned",
            Capability::Moveable => "moveable",
            Capability::Rotatable => "rotatable",
            Capability::Database => "database",
            Capability::Service => "service",
            Capability::Engine => "engine",
            Capability::Browser => "browser",
        }
    }

    /// Operations this capability adds on top of its bases.
    pub fn operations(self) -> &'static [&'static str] {
        match self {
            Capability::ReportCreation => &["create_report"],
            Capability::ReportPrinting => &["print"],
            Capability::Shape => &["area"],
            Capability::Bird => &["lay_eggs"],
            Capability::Flying => &["fly"],
            Capability::Swimming => &["swim"],
            Capability::Workable => &["work"],
            Capability::Eatable => &["eat"],
            Capability::Positioned => &["position"],
            Capability::Moveable => &["move_left", "move_right"],
            Capability::Rotatable => &["rotate"],
            Capability::Database => &["connect"],
            Capability::Service => &["start"],
            Capability::Engine => &["compile"],
            Capability::Browser => &["run"],
        }
    }

    pub fn bases(self) -> &'static [Capability] {
        match self {
            Capability::Flying | Capability::Swimming => &[Capability::Bird],
            Capability::Moveable | Capability::Rotatable => &[Capability::Positioned],
            _ => &[],
        }
    }

    /// The capability followed by all of its bases, transitively.
    pub fn with_bases(self) -> Vec<Capability> {
        let mut out = vec![self];
        let mut i = 0;
        while i < out.len() {
            for base in out[i].bases() {
                if !out.contains(base) {
                    out.push(*base);
                }
            }
            i += 1;
        }
        out
    }

    /// Every operation a satisfying type must provide, bases included.
    pub fn required_operations(self) -> Vec<&'static str> {
        self.with_bases()
            .into_iter()
            .flat_map(|cap| cap.operations().iter().copied())
            .unique()
            .collect()
    }

    pub fn from_name(name: &str) -> Option<Capability> {
        Capability::ALL.into_iter().find(|cap| cap.name() == name)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn takes_argument(operation: &str) -> bool {
    ARGUMENT_OPERATIONS.contains(&operation)
}

/// All operations reachable through a declared capability set.
pub fn reachable_operations(capabilities: &[Capability]) -> Vec<&'static str> {
    capabilities
        .iter()
        .flat_map(|cap| cap.required_operations())
        .unique()
        .collect()
}

// =============================================================================
// Subject: the dynamic face of a variant
// =============================================================================

/// A variant as the registry sees it: a label, a declared capability set,
/// the operations it actually provides, and name-based dispatch.
pub trait Subject {
    fn label(&self) -> &str;

    fn capabilities(&self) -> &'static [Capability];

    fn operations(&self) -> &'static [&'static str];

    /// Runs `operation`. Emitted lines go to `out`; a returned value (an
    /// area, a report) comes back as `Some`.
    fn perform(
        &mut self,
        operation: &str,
        arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError>;
}

/// Fetches a required argument or reports which operation lacked it.
pub(crate) fn require_arg<'a>(
    label: &str,
    operation: &str,
    arg: Option<&'a str>,
) -> Result<&'a str, CapabilityError> {
    arg.ok_or_else(|| CapabilityError::missing_argument(label, operation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moveable_requires_positioned_operations() {
        let ops = Capability::Moveable.required_operations();
        assert_eq!(ops, vec!["move_left", "move_right", "position"]);
    }

    #[test]
    fn test_flying_extends_bird() {
        assert_eq!(
            Capability::Flying.with_bases(),
            vec![Capability::Flying, Capability::Bird]
        );
    }

    #[test]
    fn test_reachable_operations_deduplicates_shared_bases() {
        let ops = reachable_operations(&[Capability::Moveable, Capability::Rotatable]);
        assert_eq!(ops, vec!["move_left", "move_right", "position", "rotate"]);
    }

    #[test]
    fn test_names_round_trip_through_lookup() {
        for cap in Capability::ALL {
            assert_eq!(Capability::from_name(cap.name()), Some(cap));
        }
        assert_eq!(Capability::from_name("teleport"), None);
    }

    #[test]
    fn test_argument_operations() {
        assert!(takes_argument("compile"));
        assert!(!takes_argument("rotate"));
    }
}
