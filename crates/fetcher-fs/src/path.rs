//! Filesystem-safe name sanitization

/// Replace characters that are not allowed in Windows folder/file names.
///
/// Applies a fixed substitution table in a single left-to-right pass, so a
/// replacement can never reintroduce a character the table already handled.
/// The result may be empty when every input character is stripped; callers
/// combine it with fixed suffixes or fallback names.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '/' => out.push('.'),
            '"' => out.push('\''),
            '\\' => out.push_str(".."),
            ':' => out.push_str(" - "),
            '*' => out.push('X'),
            '<' => out.push_str(" Lt "),
            '>' => out.push_str(" Gt "),
            '|' => out.push('I'),
            '?' => {}
            _ => out.push(c),
        }
    }
    out
}
