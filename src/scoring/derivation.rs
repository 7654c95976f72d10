use std::fmt;
use std::time::Duration;

const RULE_WIDTH: usize = 80;

/// Ordered, human-readable record of every quantity a scoring pass computed.
///
/// The body is deterministic for a given project. The header carries the
/// elapsed time of the pass, which is the only line that varies between runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DerivationLog {
    title: String,
    elapsed: Option<Duration>,
    body: Vec<String>,
}

impl DerivationLog {
    /// Start an empty log for the named project
    pub fn new(project_name: &str) -> Self {
        Self {
            title: format!("Evaluating results for {}...", project_name),
            elapsed: None,
            body: Vec::new(),
        }
    }

    /// Append a free-form line
    pub fn line(&mut self, text: impl Into<String>) {
        self.body.push(text.into());
    }

    /// Append an empty line
    pub fn gap(&mut self) {
        self.body.push(String::new());
    }

    /// Close a section with a horizontal rule and an empty line
    pub fn rule(&mut self) {
        self.body.push("-".repeat(RULE_WIDTH));
        self.body.push(String::new());
    }

    /// Record a derived quantity: its formula, the substituted values, and the value.
    pub fn derivation(
        &mut self,
        quantity: &str,
        formula: &str,
        substituted: Option<String>,
        value: impl fmt::Display,
    ) {
        self.body.push(format!("{}: {}", quantity, formula));
        if let Some(substituted) = substituted {
            self.body.push(format!("{}: {}", quantity, substituted));
        }
        self.body.push(format!("{}: {}", quantity, value));
    }

    /// Record how long the pass took
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed = Some(elapsed);
    }

    /// Time recorded by [`DerivationLog::finish`]
    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    /// Lines without the header, identical across runs over the same data
    pub fn body(&self) -> &[String] {
        &self.body
    }

    /// Header lines followed by the body
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.body.len() + 5);
        lines.push(self.title.clone());
        lines.push(String::new());
        if let Some(elapsed) = self.elapsed {
            lines.push(format!("Finished in {:.3} s", elapsed.as_secs_f64()));
        }
        lines.push("-".repeat(RULE_WIDTH));
        lines.push(String::new());
        lines.extend(self.body.iter().cloned());
        lines
    }
}

impl fmt::Display for DerivationLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
