//! Sanitization and truncation for user-authored text.
//!
//! Guestbook nicknames and contents come from arbitrary visitors. Before any
//! of it reaches the terminal it is stripped of control characters so payload
//! text cannot smuggle escape sequences into the output stream; everything
//! else renders literally. Curated catalog fields (titles, descriptions) are
//! passed through the same filter, the backend's word on their content is
//! not taken on trust.

/// Strip control characters, keeping newlines.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect()
}

/// Single-line form: control characters stripped, newlines collapsed to spaces.
pub fn sanitize_line(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}

/// Truncate to `max` characters, appending an ellipsis when cut.
pub fn truncate(raw: &str, max: usize) -> String {
    if raw.chars().count() <= max {
        raw.to_string()
    } else {
        let mut out: String = raw.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
