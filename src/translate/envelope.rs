use regex::Regex;
use std::sync::OnceLock;

use super::interface::TranslateError;

fn element_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^<string(?:\s[^>]*)?>(.*)</string>$").expect("valid envelope pattern")
    })
}

fn empty_element_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^<string(?:\s[^>]*)?/>$").expect("valid empty envelope pattern")
    })
}

/// Unwrap the `<string xmlns="...">...</string>` envelope the translator
/// wraps its result in.
///
/// Bodies that do not start with markup are returned trimmed as plain text.
pub fn unwrap_markup(body: &str) -> Result<String, TranslateError> {
    let body = body.trim_start_matches('\u{feff}').trim();

    if !body.starts_with('<') {
        return Ok(body.to_string());
    }

    // Some deployments prepend an XML declaration
    let body = match body.strip_prefix("<?xml") {
        Some(rest) => match rest.find("?>") {
            Some(end) => rest[end + 2..].trim_start(),
            None => return Err(TranslateError::Envelope("unterminated XML declaration".to_string())),
        },
        None => body,
    };

    if empty_element_pattern().is_match(body) {
        return Ok(String::new());
    }

    let inner = element_pattern()
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| TranslateError::Envelope(format!("unexpected markup: {}", preview(body))))?;

    Ok(html_escape::decode_html_entities(inner).into_owned())
}

fn preview(body: &str) -> String {
    body.chars().take(80).collect()
}
