//! `--explain` texts: what each command computes.

use colored::Colorize;

/// Command explanation builder.
///
/// Explanations go to stderr so they never mix with JSON/YAML on stdout.
pub struct Explain {
    title: String,
    description: String,
    formula: Option<String>,
    steps: Vec<String>,
    note: Option<String>,
}

impl Explain {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            formula: None,
            steps: Vec::new(),
            note: None,
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn formula(mut self, formula: &str) -> Self {
        self.formula = Some(formula.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.steps.push(step.to_string());
        self
    }

    fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// Render as plain text lines (no colors).
    fn lines(&self) -> Vec<String> {
        let mut out = vec![format!("=== {} ===", self.title), self.description.clone(), String::new()];
        if !self.steps.is_empty() {
            out.push("How it works:".to_string());
            for (i, step) in self.steps.iter().enumerate() {
                out.push(format!("  {}. {}", i + 1, step));
            }
            out.push(String::new());
        }
        if let Some(formula) = &self.formula {
            out.push(format!("Formula: {formula}"));
        }
        if let Some(note) = &self.note {
            out.push(format!("Note: {note}"));
        }
        out
    }

    /// Print the explanation to stderr, title highlighted.
    pub fn print(&self) {
        let mut lines = self.lines().into_iter();
        eprintln!();
        if let Some(title) = lines.next() {
            eprintln!("{}", title.bold().cyan());
        }
        for line in lines {
            eprintln!("{line}");
        }
        eprintln!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn run() -> Self {
        Self::new("Demonstration Run")
            .description("Builds the node network from the configured distribution and runs one full round.")
            .step("Creates nodes region by region with sequential IDs from 0")
            .step("Activates the resonance bridge (skip with --no-bridge)")
            .step("Synchronizes every node against the reference frequency")
            .step("Describes the acoustic output for one sync cycle")
            .step("Evaluates the watchdog: optimal only if all nodes are synced and the bridge is up")
    }

    pub fn sync(frequency: f64) -> Self {
        Self::new("Synchronization Round")
            .description(&format!(
                "Synchronizes every node against {frequency} Hz using one shared timestamp."
            ))
            .step("Reads the clock once (or uses --at)")
            .step("Keeps only the fractional part of t * f")
            .step("Scales that fraction to radians")
            .step("Marks every node synchronized with the same timestamp")
            .formula("phase = (t*f - floor(t*f)) * 2π")
            .note("The same timestamp and frequency always give the same phase.")
    }

    pub fn status() -> Self {
        Self::new("Architecture Status")
            .description("Runs one round, then reports version, uptime, constant, node totals, bridge and watchdog.")
    }

    pub fn constant() -> Self {
        Self::new("Reference Constant")
            .description("Derives wavelength and period from the reference frequency.")
            .formula("wavelength = v / f, period = 1 / f")
            .note("v is the speed of sound, 343 m/s at 20 °C by default.")
    }

    pub fn roi() -> Self {
        Self::new("Stability ROI")
            .description("Scores prosperity against risk.")
            .step("risk = 1 at or beyond 125 nm, else 125 / max(distance, 1)")
            .step("prosperity = gas_flow / 175 + funding / 606")
            .formula("roi = round(prosperity / risk, 2)")
    }
}
