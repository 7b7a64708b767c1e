use crate::capability::{reachable_operations, takes_argument, Subject};
use crate::console::Console;
use crate::error::CapabilityError;
use itertools::Itertools;
use log::{debug, trace};

struct Entry {
    id: String,
    subject: Box<dyn Subject>,
    reachable: Vec<&'static str>,
}

/// Variants by id, each checked against its declared capabilities when it
/// is registered. Insertion order is kept so listings are stable.
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variant. Fails if the id is taken or if a declared capability
    /// requires an operation the variant does not provide.
    pub fn register(
        &mut self,
        id: impl Into<String>,
        subject: Box<dyn Subject>,
    ) -> Result<(), CapabilityError> {
        let id = id.into();
        if self.entries.iter().any(|e| e.id == id) {
            return Err(CapabilityError::DuplicateVariant { id });
        }

        let provided = subject.operations();
        for capability in subject.capabilities() {
            if let Some(missing) = capability
                .required_operations()
                .into_iter()
                .find(|op| !provided.contains(op))
            {
                return Err(CapabilityError::MissingOperation {
                    variant: subject.label().to_string(),
                    capability: capability.name().to_string(),
                    operation: missing.to_string(),
                });
            }
        }

        let reachable = reachable_operations(subject.capabilities());
        debug!(
            "registered '{}' ({}) with capabilities [{}]",
            id,
            subject.label(),
            subject.capabilities().iter().join(", ")
        );
        self.entries.push(Entry {
            id,
            subject,
            reachable,
        });
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the variant under `id` can be asked for `operation`.
    pub fn supports(&self, id: &str, operation: &str) -> bool {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .is_some_and(|e| e.reachable.contains(&operation))
    }

    /// Invokes `operation` on the variant registered under `id`.
    ///
    /// Only operations of a declared capability get through to the variant;
    /// anything else is an `UnimplementedCapability`, never a silent no-op.
    pub fn invoke(
        &mut self,
        id: &str,
        operation: &str,
        arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CapabilityError::UnknownVariant { id: id.to_string() })?;

        if !entry.reachable.contains(&operation) {
            return Err(CapabilityError::unimplemented(entry.subject.label(), operation));
        }
        if arg.is_none() && takes_argument(operation) {
            return Err(CapabilityError::missing_argument(
                entry.subject.label(),
                operation,
            ));
        }

        trace!("dispatch {}.{}({:?})", id, operation, arg);
        entry.subject.perform(operation, arg, out)
    }
}
