//! Liskov Substitution: every `Bird` can stand in for any other because the
//! base contract only promises what all birds do. Flying and swimming are
//! separate capabilities, so a penguin is never asked to fly.

use crate::capability::{Capability, Subject};
use crate::console::Console;
use crate::error::CapabilityError;

pub trait Bird {
    fn name(&self) -> &'static str;

    fn lay_eggs(&self, out: &mut dyn Console);
}

fn lay(out: &mut dyn Console) {
    out.line("Laying eggs...".to_string());
}

pub trait Flyer: Bird {
    fn fly(&self, out: &mut dyn Console);
}

pub trait Swimmer: Bird {
    fn swim(&self, out: &mut dyn Console);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FlyingBird;

impl Bird for FlyingBird {
    fn name(&self) -> &'static str {
        "FlyingBird"
    }

    fn lay_eggs(&self, out: &mut dyn Console) {
        lay(out);
    }
}

impl Flyer for FlyingBird {
    fn fly(&self, out: &mut dyn Console) {
        out.line("Flying...".to_string());
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Penguin;

impl Bird for Penguin {
    fn name(&self) -> &'static str {
        "Penguin"
    }

    fn lay_eggs(&self, out: &mut dyn Console) {
        lay(out);
    }
}

impl Swimmer for Penguin {
    fn swim(&self, out: &mut dyn Console) {
        out.line("Swimming...".to_string());
    }
}

/// Asks every bird for the one thing every bird can do.
pub fn lay_all(birds: &[Box<dyn Bird>], out: &mut dyn Console) {
    for bird in birds {
        bird.lay_eggs(out);
    }
}

impl Subject for FlyingBird {
    fn label(&self) -> &str {
        self.name()
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Flying]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["lay_eggs", "fly"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "lay_eggs" => self.lay_eggs(out),
            "fly" => self.fly(out),
            _ => return Err(CapabilityError::unimplemented(self.name(), operation)),
        }
        Ok(None)
    }
}

impl Subject for Penguin {
    fn label(&self) -> &str {
        self.name()
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Swimming]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["lay_eggs", "swim"]
    }

    fn perform(
        &mut self,
        operation: &str,
        _arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "lay_eggs" => self.lay_eggs(out),
            "swim" => self.swim(out),
            _ => return Err(CapabilityError::unimplemented(self.name(), operation)),
        }
        Ok(None)
    }
}
