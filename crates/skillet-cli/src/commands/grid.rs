use std::path::PathBuf;

use skillet_core::{Diagnostic, SkilletError};
use skillet_lint::{lint_playwright_config, validate_capabilities_json};

/// Exit codes: 0 valid, 1 validation errors, 2 bad input.
pub(super) fn cmd_caps(
    file: Option<PathBuf>,
    inline: Option<String>,
    json: bool,
) -> skillet_core::Result<()> {
    let content = match (file, inline) {
        (_, Some(raw)) => raw,
        (Some(path), None) => match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                println!("❌ Failed to read {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        (None, None) => {
            println!("Usage: skillet caps <file.json>");
            println!("       skillet caps --inline '<json>'");
            std::process::exit(2);
        }
    };

    let diagnostics = match validate_capabilities_json(&content) {
        Ok(d) => d,
        Err(SkilletError::Input(reason)) => {
            println!("❌ Failed to parse input: {reason}");
            std::process::exit(2);
        }
        Err(e) => return Err(e),
    };

    let error_count = diagnostics.iter().filter(|d| d.is_error()).count();

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        // Warnings and recommendations first, then the error block or verdict
        for d in diagnostics.iter().filter(|d| !d.is_error()) {
            println!("{d}");
        }
        if error_count == 0 {
            println!("\n✅ Capabilities are valid");
        } else {
            println!("\n❌ {error_count} validation error(s):");
            render_bullets(diagnostics.iter().filter(|d| d.is_error()));
        }
    }

    if error_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Exit codes: 0 valid (warnings allowed), 1 errors, 2 missing file.
pub(super) fn cmd_pwconfig(path: Option<PathBuf>, json: bool) -> skillet_core::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("playwright.config.ts"));

    if !path.is_file() {
        println!("❌ File not found: {}", path.display());
        std::process::exit(2);
    }
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            println!("❌ Failed to read {}: {}", path.display(), e);
            std::process::exit(2);
        }
    };

    let diagnostics = lint_playwright_config(&content);
    let error_count = diagnostics.iter().filter(|d| d.is_error()).count();
    let warning_count = diagnostics.len() - error_count;

    if json {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        if warning_count > 0 {
            println!("⚠️  {warning_count} warning(s):");
            render_bullets(diagnostics.iter().filter(|d| !d.is_error()));
        }
        if error_count == 0 {
            println!("\n✅ Config is valid ({warning_count} warning(s))");
        } else {
            println!("\n❌ {error_count} error(s):");
            render_bullets(diagnostics.iter().filter(|d| d.is_error()));
        }
    }

    if error_count > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn render_bullets<'a>(diagnostics: impl Iterator<Item = &'a Diagnostic>) {
    for d in diagnostics {
        println!("   • {}: {}", d.subject, d.message);
        if let Some(ref hint) = d.hint {
            println!("     ↳ {hint}");
        }
    }
}
