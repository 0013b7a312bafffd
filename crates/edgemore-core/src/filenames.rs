//! Attachment filename conventions.
//!
//! Pure string functions. The submitter's name ends up in a MIME header, so
//! it is reduced to a safe character set first.

pub const ATTACHMENT_PREFIX: &str = "Edgemore_Estimate_";

const FALLBACK_STEM: &str = "client";

/// Reduce a free-text name to alphanumerics, `-` and `_`.
///
/// Leading and trailing underscores are trimmed. A blank input or an empty
/// result yields `client`.
pub fn sanitize_filename(name: &str) -> String {
    let kept: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    let trimmed = kept.trim_matches('_');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Attachment filename for a submitter, e.g. `Edgemore_Estimate_JohnDoe.pdf`.
pub fn estimate_attachment(name: &str) -> String {
    format!("{ATTACHMENT_PREFIX}{}.pdf", sanitize_filename(name))
}
