use thiserror::Error;

// =============================================================================
// Capability errors: raised by the registry and by subjects
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CapabilityError {
    /// The operation is not part of any capability the variant declares.
    #[error("'{variant}' does not implement '{operation}()'")]
    UnimplementedCapability { variant: String, operation: String },

    /// The variant declares a capability but leaves one of its operations out.
    #[error("'{variant}' declares capability '{capability}' but is missing '{operation}()'")]
    MissingOperation {
        variant: String,
        capability: String,
        operation: String,
    },

    #[error("'{operation}()' on '{variant}' requires an argument")]
    MissingArgument { variant: String, operation: String },

    #[error("no variant registered under '{id}'")]
    UnknownVariant { id: String },

    #[error("a variant is already registered under '{id}'")]
    DuplicateVariant { id: String },
}

impl CapabilityError {
    pub fn unimplemented(variant: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnimplementedCapability {
            variant: variant.into(),
            operation: operation.into(),
        }
    }

    pub fn missing_argument(variant: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::MissingArgument {
            variant: variant.into(),
            operation: operation.into(),
        }
    }
}

// =============================================================================
// Harness errors: scenario loading and output verification
// =============================================================================

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("failed to read scenario {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario")]
    Parse(#[from] toml::de::Error),

    #[error("step {step} ({target}.{operation})")]
    Step {
        step: usize,
        target: String,
        operation: String,
        #[source]
        source: CapabilityError,
    },

    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error("step {step} ({target}.{operation}) printed {actual:?}, expected {expected:?}")]
    OutputMismatch {
        step: usize,
        target: String,
        operation: String,
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("step {step} uses '@previous' but no earlier step returned a value")]
    NoPreviousValue { step: usize },
}

impl HarnessError {
    /// The capability failure behind this error, if there is one.
    pub fn capability(&self) -> Option<&CapabilityError> {
        match self {
            Self::Step { source, .. } | Self::Capability(source) => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unimplemented_message_names_operation() {
        let err = CapabilityError::unimplemented("robot", "eat");
        assert_eq!(err.to_string(), "'robot' does not implement 'eat()'");
    }

    #[test]
    fn test_step_error_exposes_capability() {
        let err = HarnessError::Step {
            step: 3,
            target: "robot".into(),
            operation: "eat".into(),
            source: CapabilityError::unimplemented("robot", "eat"),
        };

        assert_eq!(err.to_string(), "step 3 (robot.eat)");
        assert!(matches!(
            err.capability(),
            Some(CapabilityError::UnimplementedCapability { .. })
        ));
    }

    #[test]
    fn test_error_chain_names_cause_once() {
        let err = HarnessError::Step {
            step: 1,
            target: "r2d2".into(),
            operation: "eat".into(),
            source: CapabilityError::unimplemented("Robot", "eat"),
        };
        let rendered = format!("{:#}", anyhow::Error::new(err).context("running scenario"));

        assert_eq!(
            rendered,
            "running scenario: step 1 (r2d2.eat): 'Robot' does not implement 'eat()'"
        );
    }

    #[test]
    fn test_io_error_keeps_cause_in_chain_only() {
        let err = HarnessError::Io {
            path: "tour.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let rendered = format!("{:#}", anyhow::Error::new(err));

        assert_eq!(rendered, "failed to read scenario tour.toml: gone");
    }
}
