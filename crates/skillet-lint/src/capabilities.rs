use serde_json::Value;
use skillet_core::Diagnostic;

/// Browser names the cloud grid accepts in `browserName`.
pub const VALID_BROWSERS: &[&str] = &[
    "Chrome",
    "MicrosoftEdge",
    "pw-chromium",
    "pw-firefox",
    "pw-webkit",
    "Firefox",
    "Safari",
];

/// Desktop platforms the grid accepts in `LT:Options.platform`.
pub const VALID_PLATFORMS: &[&str] = &[
    "Windows 11",
    "Windows 10",
    "macOS Sequoia",
    "macOS Sonoma",
    "macOS Ventura",
    "macOS Monterey",
    "macOS Big Sur",
    "macOS Catalina",
];

/// `LT:Options.platformName` values that select the mobile rule set.
pub const VALID_MOBILE_PLATFORMS: &[&str] = &["android", "ios"];

/// `LT:Options` keys the grid understands.
pub const VALID_LT_OPTIONS: &[&str] = &[
    "platform",
    "build",
    "name",
    "user",
    "accessKey",
    "network",
    "video",
    "console",
    "tunnel",
    "tunnelName",
    "geoLocation",
    "resolution",
    "playwrightClientVersion",
    "platformName",
    "deviceName",
    "platformVersion",
    "isRealMobile",
    "isPwMobileWebviewTest",
];

/// Parse and validate a capabilities JSON document.
///
/// A parse failure is an input error, not a validation finding; the CLI
/// maps it to exit code 2.
pub fn validate_capabilities_json(input: &str) -> skillet_core::Result<Vec<Diagnostic>> {
    let caps: Value = serde_json::from_str(input).map_err(|e| {
        skillet_core::SkilletError::Input(format!("failed to parse capabilities JSON: {e}"))
    })?;
    Ok(validate_capabilities(&caps))
}

/// Validate a W3C-style capabilities object with a vendor `LT:Options`
/// block.
///
/// Checks follow what the grid actually enforces: browser and platform
/// constants, credentials, and the mobile/desktop field split. Missing
/// `LT:Options` short-circuits the option-level checks. Recommendations
/// (build name, video, network logs) are `Info` findings and never fail
/// a run.
pub fn validate_capabilities(caps: &Value) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    let browser_name = match caps.get("browserName") {
        Some(v) if truthy(Some(v)) => {
            let name = value_string(v);
            if !VALID_BROWSERS.contains(&name.as_str()) {
                diags.push(
                    Diagnostic::error("browserName", format!("Invalid browserName '{name}'"))
                        .with_hint(format!("Valid: {}", sorted_list(VALID_BROWSERS))),
                );
            }
            Some(name)
        }
        _ => {
            diags.push(
                Diagnostic::error("browserName", "Missing 'browserName'")
                    .with_hint(format!("Valid: {}", sorted_list(VALID_BROWSERS))),
            );
            None
        }
    };

    let lt = caps.get("LT:Options");
    let Some(lt) = lt.filter(|v| truthy(Some(v))).and_then(Value::as_object) else {
        diags.push(Diagnostic::error("LT:Options", "Missing 'LT:Options' object"));
        return diags;
    };

    let mut unknown: Vec<&str> = lt
        .keys()
        .map(String::as_str)
        .filter(|k| !VALID_LT_OPTIONS.contains(k))
        .collect();
    unknown.sort_unstable();
    if !unknown.is_empty() {
        diags.push(Diagnostic::warning(
            "LT:Options",
            format!("Unknown keys (may be ignored): {}", unknown.join(", ")),
        ));
    }

    // Credentials. The literal string "None" shows up when a shell
    // expanded an unset variable through Python's str().
    let user = lt.get("user");
    if !truthy(user) || user.and_then(Value::as_str) == Some("None") {
        diags.push(
            Diagnostic::error("LT:Options.user", "Missing 'user'")
                .with_hint("Set the LT_USERNAME env var"),
        );
    }
    let access_key = lt.get("accessKey");
    if !truthy(access_key) || access_key.and_then(Value::as_str) == Some("None") {
        diags.push(
            Diagnostic::error("LT:Options.accessKey", "Missing 'accessKey'")
                .with_hint("Set the LT_ACCESS_KEY env var"),
        );
    }

    let platform_name = lt
        .get("platformName")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_lowercase();

    if VALID_MOBILE_PLATFORMS.contains(&platform_name.as_str()) {
        if !truthy(lt.get("deviceName")) {
            diags.push(
                Diagnostic::error("LT:Options.deviceName", "Mobile test requires 'deviceName'")
                    .with_hint("e.g. 'Pixel 7' or 'iPhone 16'"),
            );
        }
        if !truthy(lt.get("platformVersion")) {
            diags.push(
                Diagnostic::error(
                    "LT:Options.platformVersion",
                    "Mobile test requires 'platformVersion'",
                )
                .with_hint("e.g. '14' or '18'"),
            );
        }
        if !truthy(lt.get("isRealMobile")) {
            diags.push(
                Diagnostic::warning("LT:Options.isRealMobile", "isRealMobile not set")
                    .with_hint("Add isRealMobile: true for real device testing"),
            );
        }
        if platform_name == "ios"
            && let Some(browser) = &browser_name
        {
            let lowered = browser.to_lowercase();
            if lowered != "pw-webkit" && lowered != "webkit" {
                diags.push(Diagnostic::error(
                    "browserName",
                    format!("iOS MUST use webkit/pw-webkit browser, not '{browser}'"),
                ));
            }
        }
    } else {
        let platform = lt.get("platform");
        if !truthy(platform) {
            diags.push(
                Diagnostic::error("LT:Options.platform", "Desktop test requires 'platform'")
                    .with_hint("e.g. 'Windows 11'"),
            );
        } else if let Some(v) = platform {
            let name = value_string(v);
            if !VALID_PLATFORMS.contains(&name.as_str()) {
                diags.push(
                    Diagnostic::error(
                        "LT:Options.platform",
                        format!("Invalid platform '{name}'"),
                    )
                    .with_hint(format!("Valid: {}", sorted_list(VALID_PLATFORMS))),
                );
            }
        }
    }

    if !truthy(lt.get("build")) {
        diags.push(Diagnostic::info(
            "LT:Options.build",
            "Consider adding 'build' to group tests in dashboard",
        ));
    }
    if !truthy(lt.get("video")) {
        diags.push(Diagnostic::info(
            "LT:Options.video",
            "Consider adding 'video: true' for debugging",
        ));
    }
    if !truthy(lt.get("network")) {
        diags.push(Diagnostic::info(
            "LT:Options.network",
            "Consider adding 'network: true' for network logs",
        ));
    }

    diags
}

/// Truthiness as the grid tooling treats capability values: absent, null,
/// false, 0, empty string, empty array, and empty object are all falsy.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

/// Render a JSON value the way it would appear in a message.
fn value_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn sorted_list(set: &[&str]) -> String {
    let mut items: Vec<&str> = set.to_vec();
    items.sort_unstable();
    items.join(", ")
}
