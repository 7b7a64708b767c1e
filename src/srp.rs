//! Single Responsibility: creating a report and printing it are two jobs,
//! so they live in two types that change for different reasons.

use crate::capability::{require_arg, Capability, Subject};
use crate::console::Console;
use crate::error::CapabilityError;
use serde_json::Value;

/// Turns raw data into report text. Knows nothing about output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportCreator;

impl ReportCreator {
    pub fn create_report(&self, data: &Value) -> String {
        format!("Report: {}", data)
    }
}

/// Writes finished reports. Knows nothing about how they were built.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReportPrinter;

impl ReportPrinter {
    pub fn print(&self, report: &str, out: &mut dyn Console) {
        out.line(format!("Printing: {}", report));
    }
}

impl Subject for ReportCreator {
    fn label(&self) -> &str {
        "ReportCreator"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::ReportCreation]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["create_report"]
    }

    fn perform(
        &mut self,
        operation: &str,
        arg: Option<&str>,
        _out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "create_report" => {
                let raw = require_arg(self.label(), operation, arg)?;
                // Non-JSON input is reported as a plain string.
                let data = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.into()));
                Ok(Some(self.create_report(&data)))
            }
            _ => Err(CapabilityError::unimplemented(self.label(), operation)),
        }
    }
}

impl Subject for ReportPrinter {
    fn label(&self) -> &str {
        "ReportPrinter"
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::ReportPrinting]
    }

    fn operations(&self) -> &'static [&'static str] {
        &["print"]
    }

    fn perform(
        &mut self,
        operation: &str,
        arg: Option<&str>,
        out: &mut dyn Console,
    ) -> Result<Option<String>, CapabilityError> {
        match operation {
            "print" => {
                self.print(require_arg(self.label(), operation, arg)?, out);
                Ok(None)
            }
            _ => Err(CapabilityError::unimplemented(self.label(), operation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;
    use serde_json::json;

    #[test]
    fn test_report_is_compact_json() {
        let report = ReportCreator.create_report(&json!({ "sales": 100 }));
        assert_eq!(report, r#"Report: {"sales":100}"#);
    }

    #[test]
    fn test_printer_emits_one_line() {
        let mut out = Transcript::new();
        ReportPrinter.print(r#"Report: {"sales":100}"#, &mut out);
        assert_eq!(out.lines(), [r#"Printing: Report: {"sales":100}"#]);
    }

    #[test]
    fn test_creator_subject_returns_report_without_printing() {
        let mut out = Transcript::new();
        let value = ReportCreator
            .perform("create_report", Some(r#"{"sales": 100}"#), &mut out)
            .unwrap();

        assert_eq!(value.as_deref(), Some(r#"Report: {"sales":100}"#));
        assert!(out.is_empty());
    }

    #[test]
    fn test_creator_cannot_print() {
        let mut out = Transcript::new();
        let err = ReportCreator.perform("print", Some("x"), &mut out).unwrap_err();
        assert_eq!(err, CapabilityError::unimplemented("ReportCreator", "print"));
    }
}
