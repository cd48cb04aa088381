use thiserror::Error;

/// Raw frontmatter fields parsed from the YAML block of a SKILL.md.
///
/// Optional fields stay `None` when the key is absent; a key that is
/// present with an empty value parses to `Some("")`. The linter cares
/// about the difference (a present-but-empty `name` is not a missing
/// `name`), so this type preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub triggers: Vec<String>,
    pub languages: Vec<String>,
    pub category: Option<String>,
}

/// Structural failure while locating the frontmatter block.
///
/// The two cases render as distinct lint diagnostics, so they are kept
/// apart instead of collapsing into one parse error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterError {
    #[error("missing opening --- in frontmatter")]
    MissingOpen,
    #[error("missing closing --- in frontmatter")]
    MissingClose,
}

/// Split a SKILL.md into its frontmatter block and Markdown body.
///
/// The file must open with a `---` line; the frontmatter ends at the next
/// line that is exactly `---` (a closing delimiter at end-of-file without
/// a trailing newline is accepted). CRLF line endings are tolerated.
pub fn split(content: &str) -> Result<(&str, &str), FrontmatterError> {
    let open_len = if content.starts_with("---\n") {
        4
    } else if content.starts_with("---\r\n") {
        5
    } else {
        return Err(FrontmatterError::MissingOpen);
    };

    let mut pos = open_len;
    for line in content[open_len..].split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            let frontmatter = &content[open_len..pos];
            let body = &content[pos + line.len()..];
            return Ok((frontmatter, body));
        }
        pos += line.len();
    }

    Err(FrontmatterError::MissingClose)
}

/// Parse a frontmatter block into its known fields.
///
/// Handles the pragmatic YAML subset skill authors actually use:
/// `key: value` scalars, quoted values, inline arrays `[a, b]`, and block
/// sequences (`- item` lines under a key). Comment lines and unknown keys
/// are ignored.
pub fn parse(yaml: &str) -> Frontmatter {
    // Which list key an indented `- item` line belongs to.
    enum ListField {
        Triggers,
        Languages,
        Ignored,
    }

    let mut fm = Frontmatter::default();
    let mut active: Option<ListField> = None;

    for raw in yaml.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Block sequence item under the most recent list key.
        if let Some(item) = trimmed.strip_prefix('-') {
            let item = unquote(item.trim());
            if item.is_empty() {
                continue;
            }
            match active {
                Some(ListField::Triggers) => fm.triggers.push(item),
                Some(ListField::Languages) => fm.languages.push(item),
                Some(ListField::Ignored) | None => {}
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "name" => {
                fm.name = Some(unquote(value));
                active = None;
            }
            "description" => {
                fm.description = Some(unquote(value));
                active = None;
            }
            "category" => {
                fm.category = Some(unquote(value));
                active = None;
            }
            "triggers" => {
                if value.is_empty() {
                    active = Some(ListField::Triggers);
                } else {
                    fm.triggers = parse_inline_list(value);
                    active = None;
                }
            }
            "languages" => {
                if value.is_empty() {
                    active = Some(ListField::Languages);
                } else {
                    fm.languages = parse_inline_list(value);
                    active = None;
                }
            }
            _ => {
                // Unknown keys may open their own block sequence; swallow it.
                active = Some(ListField::Ignored);
            }
        }
    }

    fm
}

/// Parse `[a, b, c]` or a bare `a, b, c` into items.
fn parse_inline_list(value: &str) -> Vec<String> {
    let inner = value.trim_start_matches('[').trim_end_matches(']');
    inner
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .collect()
}

/// Remove surrounding quotes from a YAML value.
fn unquote(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}
