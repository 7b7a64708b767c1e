use crate::console::{Console, Tee};
use crate::error::{CapabilityError, HarnessError};
use crate::registry::Registry;
use crate::scenario::{Scenario, Step};
use log::{debug, error, info};

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: usize,
    pub lines: usize,
    pub checked: usize,
}

/// Replays a scenario's steps, in order, against the variants it declares.
pub struct Harness {
    name: String,
    registry: Registry,
    steps: Vec<Step>,
    verify: bool,
}

impl Harness {
    /// Builds every declared variant and checks that each step targets one.
    pub fn new(scenario: Scenario) -> Result<Self, HarnessError> {
        let name = scenario.label().to_string();
        let mut registry = Registry::new();
        for decl in &scenario.variants {
            registry.register(decl.id.clone(), decl.kind.instantiate())?;
        }

        for (index, step) in scenario.steps.iter().enumerate() {
            if !registry.contains(&step.target) {
                return Err(HarnessError::Step {
                    step: index + 1,
                    target: step.target.clone(),
                    operation: step.operation.clone(),
                    source: CapabilityError::UnknownVariant {
                        id: step.target.clone(),
                    },
                });
            }
        }

        info!(
            "scenario '{}': {} variants, {} steps",
            name,
            registry.len(),
            scenario.steps.len()
        );
        Ok(Self {
            name,
            registry,
            steps: scenario.steps,
            verify: true,
        })
    }

    /// Turns expected-output checking on or off.
    pub fn verify(mut self, on: bool) -> Self {
        self.verify = on;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Runs every step, stopping at the first failure.
    pub fn run(&mut self, out: &mut dyn Console) -> Result<RunSummary, HarnessError> {
        let mut summary = RunSummary::default();
        let mut previous: Option<String> = None;

        for (index, step) in self.steps.iter().enumerate() {
            let number = index + 1;
            let arg = if step.uses_previous() {
                Some(
                    previous
                        .clone()
                        .ok_or(HarnessError::NoPreviousValue { step: number })?,
                )
            } else {
                step.arg.clone()
            };

            debug!("step {}: {}.{}", number, step.target, step.operation);
            let mut tee = Tee::new(&mut *out);
            let value = self
                .registry
                .invoke(&step.target, &step.operation, arg.as_deref(), &mut tee)
                .map_err(|source| HarnessError::Step {
                    step: number,
                    target: step.target.clone(),
                    operation: step.operation.clone(),
                    source,
                })?;
            let printed = tee.into_captured();

            if self.verify {
                if let Some(expected) = &step.expect {
                    if *expected != printed {
                        error!("step {} output differs from expectation", number);
                        return Err(HarnessError::OutputMismatch {
                            step: number,
                            target: step.target.clone(),
                            operation: step.operation.clone(),
                            expected: expected.clone(),
                            actual: printed,
                        });
                    }
                    summary.checked += 1;
                }
            }

            summary.steps += 1;
            summary.lines += printed.len();
            if value.is_some() {
                previous = value;
            }
        }

        info!(
            "scenario '{}' finished: {} steps, {} checked",
            self.name, summary.steps, summary.checked
        );
        Ok(summary)
    }
}
