//! Structural heading handling for fetched verse text.
//!
//! The text service delivers section headings inline ahead of the verse:
//! each heading starts with an uppercase letter or digit and is terminated
//! by a double space. Depending on the display configuration they are
//! either kept as `{{heading}}` markers (followed by a newline) or
//! stripped entirely.

use versicle_core::collapse_whitespace;

/// Split leading headings off a fetched verse text and either mark or
/// strip them. The verse body is normalized to single spaces so its
/// tokens line up with the masking word boundaries.
pub fn apply_heading_markers(text: &str, keep: bool) -> String {
    let mut rest = text.trim_start_matches(' ');
    let mut headings: Vec<&str> = Vec::new();
    loop {
        let Some(first) = rest.chars().next() else {
            break;
        };
        if !(first.is_uppercase() || first.is_ascii_digit()) {
            break;
        }
        let Some(end) = rest.find("  ") else {
            break;
        };
        let candidate = rest[..end].trim();
        if candidate.is_empty() {
            break;
        }
        headings.push(candidate);
        rest = rest[end + 2..].trim_start_matches(' ');
    }

    let body = collapse_whitespace(rest);
    if !keep || headings.is_empty() {
        return body;
    }
    let mut out = String::new();
    for heading in headings {
        out.push_str("{{");
        out.push_str(heading);
        out.push_str("}}\n");
    }
    out.push_str(&body);
    out
}
