//! Styled stderr reporting for the CLI.

use std::fmt::Display;
use std::path::Path;

use console::{Style, Term};
use folio_site::{BuildReport, SiteLint};

/// Writes command progress, lints and summaries to stderr.
pub(crate) struct Output {
    term: Term,
    label: Style,
    ok: Style,
    lint: Style,
    failure: Style,
    heading: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().dim(),
            ok: Style::new().green(),
            lint: Style::new().yellow(),
            failure: Style::new().red().bold(),
            heading: Style::new().cyan().bold(),
        }
    }

    fn line(&self, text: &str) {
        let _ = self.term.write_line(text);
    }

    /// `Source:` / `Output:` style key-value line.
    pub(crate) fn path(&self, label: &str, path: &Path) {
        self.line(&format!(
            "{} {}",
            self.label.apply_to(format!("{label}:")),
            path.display()
        ));
    }

    pub(crate) fn heading(&self, text: &str) {
        self.line(&self.heading.apply_to(text).to_string());
    }

    pub(crate) fn lint(&self, lint: &SiteLint) {
        self.line(&format!("{} {lint}", self.lint.apply_to("warning:")));
    }

    pub(crate) fn success(&self, text: &str) {
        self.line(&self.ok.apply_to(text).to_string());
    }

    /// Final line of a successful build.
    pub(crate) fn built(&self, report: &BuildReport, output_dir: &Path) {
        self.success(&format!(
            "Built {} pages, {} assets, {} public files to {}",
            report.pages,
            report.assets,
            report.public_files,
            output_dir.display()
        ));
    }

    pub(crate) fn error(&self, err: &dyn Display) {
        self.line(&format!("{} {err}", self.failure.apply_to("Error:")));
    }
}
