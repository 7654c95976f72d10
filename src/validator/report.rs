use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Outcome of one validation check
#[derive(Debug, Clone, PartialEq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed with warnings
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    /// Whether the check passed without warnings
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    /// Whether the check failed
    pub fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }

    fn symbol(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "✓",
            CheckStatus::Warning(_) => "⚠",
            CheckStatus::Failed(_) => "✗",
        }
    }
}

/// A named check and its outcome
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Name of the check, e.g. "Reading interval"
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }

    /// Whether the check produced a warning
    pub fn is_warning(&self) -> bool {
        matches!(self.status, CheckStatus::Warning(_))
    }
}

/// All checks run against one project
#[derive(Debug)]
pub struct ValidationReport {
    /// Checks in the order they ran
    pub checks: Vec<ValidationCheck>,
    /// File path (or project name) the checks ran against
    pub file_path: String,
}

impl ValidationReport {
    /// Create an empty report
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            file_path: file_path.into(),
        }
    }

    /// Record a check
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// Whether any check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// Whether any check warned
    pub fn has_warnings(&self) -> bool {
        self.checks.iter().any(ValidationCheck::is_warning)
    }

    /// Number of clean passes
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_warning()).count()
    }

    /// Number of failures
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Validation FAILED"
        } else if self.has_warnings() {
            "Validation PASSED with warnings"
        } else {
            "Validation PASSED"
        }
    }

    fn summary(&self) -> String {
        format!(
            "{} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )
    }

    /// Render with terminal colors when the `colorized_output` feature is on
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut out = String::new();
            out.push_str(&format!("{}\n", style("Project Validation Report").bold().cyan()));
            out.push_str(&format!("{}\n", style("=========================").cyan()));
            out.push_str(&format!("{}: {}\n\n", style("File").bold(), self.file_path));

            for check in &self.checks {
                let symbol = check.status.symbol();
                let line = match &check.status {
                    CheckStatus::Ok => format!("[{}] {}", style(symbol).green(), check.name),
                    CheckStatus::Warning(msg) => format!(
                        "[{}] {} - {}: {}",
                        style(symbol).yellow(),
                        check.name,
                        style("WARNING").yellow().bold(),
                        msg
                    ),
                    CheckStatus::Failed(msg) => format!(
                        "[{}] {} - {}: {}",
                        style(symbol).red(),
                        check.name,
                        style("FAILED").red().bold(),
                        msg
                    ),
                };
                out.push_str(&line);
                out.push('\n');
            }

            out.push_str(&format!("\n{}: {}\n\n", style("Summary").bold(), self.summary()));
            let verdict = if self.has_failures() {
                style(self.verdict()).red().bold()
            } else if self.has_warnings() {
                style(self.verdict()).yellow().bold()
            } else {
                style(self.verdict()).green().bold()
            };
            out.push_str(&format!("{}\n", verdict));
            out
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project Validation Report")?;
        writeln!(f, "=========================")?;
        writeln!(f, "File: {}", self.file_path)?;
        writeln!(f)?;

        for check in &self.checks {
            write!(f, "[{}] {}", check.status.symbol(), check.name)?;
            match &check.status {
                CheckStatus::Ok => writeln!(f)?,
                CheckStatus::Warning(msg) => writeln!(f, " - WARNING: {}", msg)?,
                CheckStatus::Failed(msg) => writeln!(f, " - FAILED: {}", msg)?,
            }
        }

        writeln!(f)?;
        writeln!(f, "Summary: {}", self.summary())?;
        writeln!(f)?;
        writeln!(f, "{}", self.verdict())
    }
}
