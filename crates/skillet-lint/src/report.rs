use serde::Serialize;
use skillet_core::{Diagnostic, Severity};

/// Outcome of a corpus lint run.
#[derive(Debug, Default, Serialize)]
pub struct LintReport {
    /// Number of skill directories checked.
    pub checked: usize,
    /// Every finding, in check order.
    pub diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.by_severity(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&Diagnostic> {
        self.by_severity(Severity::Info)
    }

    fn by_severity(&self, severity: Severity) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().len()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Human rendering: counts, findings grouped by severity, verdict.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Skills found: {}\n", self.checked));
        out.push_str(&format!("Errors: {}\n", self.error_count()));
        out.push_str(&format!("Warnings: {}\n", self.warning_count()));

        let errors = self.errors();
        if !errors.is_empty() {
            out.push_str("\n❌ ERRORS:\n");
            for d in errors {
                push_finding(&mut out, d);
            }
        }

        let warnings = self.warnings();
        if !warnings.is_empty() {
            out.push_str("\n⚠️  WARNINGS:\n");
            for d in warnings {
                push_finding(&mut out, d);
            }
        }

        let infos = self.infos();
        if !infos.is_empty() {
            out.push_str("\n💡 INFO:\n");
            for d in infos {
                push_finding(&mut out, d);
            }
        }

        if self.has_errors() {
            out.push_str("\n❌ Validation failed!\n");
        } else {
            out.push_str("\n✅ All skills pass validation!\n");
        }

        out
    }
}

fn push_finding(out: &mut String, d: &Diagnostic) {
    out.push_str(&format!("  {}: {}\n", d.subject, d.message));
    if let Some(hint) = &d.hint {
        out.push_str(&format!("     ↳ {hint}\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_partitions() {
        let mut report = LintReport {
            checked: 3,
            diagnostics: vec![],
        };
        report
            .diagnostics
            .push(Diagnostic::error("a", "broken frontmatter"));
        report
            .diagnostics
            .push(Diagnostic::warning("b", "No reference/ directory"));
        report.diagnostics.push(Diagnostic::info("c", "note"));

        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert!(report.has_warnings());
        assert_eq!(report.infos().len(), 1);
    }

    #[test]
    fn render_clean_report() {
        let report = LintReport {
            checked: 5,
            diagnostics: vec![],
        };
        let text = report.render_text();
        assert!(text.contains("Skills found: 5"));
        assert!(text.contains("Errors: 0"));
        assert!(text.contains("✅ All skills pass validation!"));
        assert!(!text.contains("ERRORS:"));
    }

    #[test]
    fn render_failing_report() {
        let report = LintReport {
            checked: 1,
            diagnostics: vec![
                Diagnostic::error("bad-skill", "Missing 'name' in frontmatter"),
                Diagnostic::warning("bad-skill", "No reference/ directory")
                    .with_hint("Create reference/playbook.md"),
            ],
        };
        let text = report.render_text();
        assert!(text.contains("❌ ERRORS:"));
        assert!(text.contains("  bad-skill: Missing 'name' in frontmatter"));
        assert!(text.contains("⚠️  WARNINGS:"));
        assert!(text.contains("↳ Create reference/playbook.md"));
        assert!(text.contains("❌ Validation failed!"));
    }
}
