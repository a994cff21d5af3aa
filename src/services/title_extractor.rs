/// Best-effort extraction of movie titles from free-form AI text
///
/// The AI endpoint promises no format, so this is a heuristic rather than a grammar.
/// Each non-empty line yields exactly one candidate, however poor; a whitespace-only
/// line yields an empty one. Output that does
/// not look like a list degrades to junk candidates, which the resolver then fails
/// to find; nothing here ever errors.
use std::sync::LazyLock;

use regex::Regex;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quoted title pattern"));

static ENUMERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.?\s*").expect("enumeration pattern"));

const BY_SEPARATOR: &str = " by ";

/// Splits `raw_text` on `\n` into candidate titles, one per non-empty line, in line order.
///
/// Duplicates are kept and results are not validated.
pub fn extract_titles(raw_text: &str) -> Vec<String> {
    raw_text
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(extract_title)
        .collect()
}

/// Candidate title for a single line
fn extract_title(line: &str) -> String {
    if let Some(quoted) = QUOTED.captures(line).and_then(|caps| caps.get(1)) {
        return quoted.as_str().trim().to_string();
    }

    let unnumbered = ENUMERATION.replace(line, "");
    unnumbered
        .split(BY_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}
