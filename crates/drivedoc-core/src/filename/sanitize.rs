//! Linux-safe filename sanitization.

/// Linux `NAME_MAX`, in bytes.
pub const NAME_MAX: usize = 255;

/// Sanitizes a candidate filename for use on Linux.
///
/// Path separators, NUL, whitespace and control characters become `_`
/// (runs collapsed); leading/trailing dots, spaces and underscores are
/// trimmed; the result is capped at 255 bytes on a char boundary.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    truncate_bytes(trimmed, NAME_MAX).to_string()
}

/// Longest prefix of `s` that fits in `max` bytes without splitting a char.
pub(crate) fn truncate_bytes(s: &str, max: usize) -> &str {
    let mut take = s.len().min(max);
    while !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
