use regex::Regex;
use skillet_core::Diagnostic;

/// Lint the text of a `playwright.config.ts` for known gaps and
/// anti-patterns.
///
/// Checks are textual substring and pattern checks, not a TypeScript
/// parse. Absent settings warn with the default behavior they fall back
/// to; `waitForTimeout` and malformed cloud project names are errors.
pub fn lint_playwright_config(content: &str) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    if !content.contains("defineConfig") {
        diags.push(
            Diagnostic::warning("defineConfig", "Not using defineConfig()")
                .with_hint("Wrap the config for type safety"),
        );
    }
    if !content.contains("testDir") {
        diags.push(
            Diagnostic::warning("testDir", "No testDir specified")
                .with_hint("Defaults to '.' which runs all .spec files"),
        );
    }
    if !content.contains("timeout") {
        diags.push(
            Diagnostic::warning("timeout", "No timeout configured").with_hint("Defaults to 30s"),
        );
    }
    if content.contains("waitForTimeout") {
        diags.push(
            Diagnostic::error("waitForTimeout", "Found 'waitForTimeout' in config")
                .with_hint("Anti-pattern; use web-first assertions instead"),
        );
    }
    if !content.contains("retries") {
        diags.push(
            Diagnostic::warning("retries", "No retries configured")
                .with_hint("Consider retries: process.env.CI ? 2 : 0"),
        );
    }
    if !content.contains("projects") {
        diags.push(
            Diagnostic::warning("projects", "No projects defined")
                .with_hint("Tests will only run on the default browser"),
        );
    }

    // Cloud project names encode browser, version, and platform before the
    // @lambdatest suffix.
    let cloud_name = Regex::new(r#"name:\s*['"]([^'"]*@lambdatest)['"]"#).unwrap();
    for captures in cloud_name.captures_iter(content) {
        let project = &captures[1];
        let prefix = project.split("@lambdatest").next().unwrap_or("");
        let parts = prefix.split(':').count();
        if parts < 3 {
            diags.push(
                Diagnostic::error(
                    "projects",
                    format!(
                        "Cloud project '{project}' should follow format 'browserName:version:platform@lambdatest'"
                    ),
                )
                .with_hint(format!("Got {parts} parts, expected 3")),
            );
        }
    }

    if !content.contains("trace") {
        diags.push(
            Diagnostic::warning("trace", "No trace configured")
                .with_hint("Consider trace: 'on-first-retry' for debugging"),
        );
    }
    if !content.contains("reporter") {
        diags.push(
            Diagnostic::warning("reporter", "No reporter configured")
                .with_hint("Consider [['html'], ['list']]"),
        );
    }
    if !content.contains("baseURL") {
        diags.push(
            Diagnostic::warning("baseURL", "No baseURL")
                .with_hint("Tests will need full URLs in page.goto()"),
        );
    }
    if !content.contains("webServer") {
        diags.push(
            Diagnostic::warning("webServer", "No webServer")
                .with_hint("App must be running before tests start"),
        );
    }

    if content.contains("@lambdatest")
        && !content.contains("LT_USERNAME")
        && !content.contains("lambdatest-setup")
    {
        diags.push(
            Diagnostic::warning(
                "projects",
                "Cloud projects found but LT_USERNAME not referenced in config",
            )
            .with_hint("Ensure lambdatest-setup.ts handles auth"),
        );
    }

    diags
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CONFIG: &str = r#"
import { defineConfig } from '@playwright/test';
import './lambdatest-setup';

export default defineConfig({
  testDir: './tests',
  timeout: 60_000,
  retries: process.env.CI ? 2 : 0,
  reporter: [['html'], ['list']],
  use: {
    baseURL: 'http://localhost:3000',
    trace: 'on-first-retry',
  },
  webServer: { command: 'npm start', port: 3000 },
  projects: [
    { name: 'chromium' },
    { name: 'pw-chromium:latest:Windows 11@lambdatest' },
  ],
});
"#;

    #[test]
    fn good_config_is_clean() {
        assert!(lint_playwright_config(GOOD_CONFIG).is_empty());
    }

    #[test]
    fn empty_config_warns_on_everything() {
        let diags = lint_playwright_config("export default {};");
        assert!(diags.iter().all(|d| !d.is_error()));
        let subjects: Vec<_> = diags.iter().map(|d| d.subject.as_str()).collect();
        for expected in [
            "defineConfig",
            "testDir",
            "timeout",
            "retries",
            "projects",
            "trace",
            "reporter",
            "baseURL",
            "webServer",
        ] {
            assert!(subjects.contains(&expected), "missing warning for {expected}");
        }
    }

    #[test]
    fn wait_for_timeout_is_an_error() {
        let content = format!("{GOOD_CONFIG}\n// await page.waitForTimeout(5000);\n");
        let diags = lint_playwright_config(&content);
        assert!(
            diags
                .iter()
                .any(|d| d.is_error() && d.message == "Found 'waitForTimeout' in config")
        );
    }

    #[test]
    fn malformed_cloud_project_name() {
        let content = GOOD_CONFIG.replace(
            "pw-chromium:latest:Windows 11@lambdatest",
            "pw-chromium@lambdatest",
        );
        let diags = lint_playwright_config(&content);
        let err = diags.iter().find(|d| d.is_error()).unwrap();
        assert!(err.message.contains("'pw-chromium@lambdatest'"));
        assert_eq!(err.hint.as_deref(), Some("Got 1 parts, expected 3"));
    }

    #[test]
    fn cloud_without_auth_reference_warns() {
        let content = GOOD_CONFIG.replace("import './lambdatest-setup';", "");
        let diags = lint_playwright_config(&content);
        assert!(
            diags
                .iter()
                .any(|d| d.message.contains("LT_USERNAME not referenced"))
        );
    }

    #[test]
    fn single_quoted_names_match() {
        let content = "projects: [{ name: 'chrome:128:Windows 11@lambdatest' }]";
        let diags = lint_playwright_config(content);
        assert!(diags.iter().all(|d| !d.is_error()));
    }
}
