//! Configuration errors and the diagnostics collector.
//!
//! Validation never stops at the first problem: every check pushes into a
//! [`ConfigDiagnostics`], which is reported once, grouped by the top-level
//! section (`locales`, `theme`, `plugins`, ...) the problem lives in.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Validation(String),

    #[error("locale prefix `{0}` is already defined")]
    DuplicateLocale(String),

    // no #[from]: a source() would print the report twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Rejects the configuration.
    Error,
    /// Tolerated by the framework, reported anyway.
    Warning,
}

impl Severity {
    fn label(self) -> String {
        match self {
            Self::Error => "error".red().bold().to_string(),
            Self::Warning => "warning".yellow().bold().to_string(),
        }
    }
}

/// One problem at one config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.severity.label(),
            self.field.as_str().cyan(),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", "hint:".bright_cyan())?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: ConfigDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    fn add(&mut self, severity: Severity, field: FieldPath, message: String, hint: Option<String>) {
        self.push(ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        });
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.add(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.add(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.add(Severity::Warning, field, message.into(), None);
    }

    /// Print warnings to stderr, one per line.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "{}", crate::utils::plural_count(self.warnings.len(), "warning"));
        for warning in &self.warnings {
            eprintln!("  {warning}");
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of errors. Warnings are not counted.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when there are no errors, even if warnings were collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// `Err(self)` when any error was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }

    fn errors_by_section(&self) -> BTreeMap<&str, Vec<&ConfigDiagnostic>> {
        let mut sections: BTreeMap<&str, Vec<&ConfigDiagnostic>> = BTreeMap::new();
        for error in &self.errors {
            sections.entry(error.field.section()).or_default().push(error);
        }
        sections
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format!(
                "invalid configuration ({})",
                crate::utils::plural_count(self.errors.len(), "error")
            )
            .red()
            .bold()
        )?;
        for (section, errors) in self.errors_by_section() {
            write!(f, "\n\n{}", format!("[{section}]").dimmed())?;
            for error in errors {
                write!(f, "\n  {error}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
