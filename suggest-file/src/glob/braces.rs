//! Brace alternation expansion.
//!
//! The `glob` crate has no alternation syntax, so groups are expanded into
//! separate patterns before matching. Groups may nest, and an alternative
//! may span several path segments (`{src,tests/unit}/*.rs`).

/// Expands every `{a,b}` group in `pattern`.
///
/// Escaped braces and braces inside `[...]` classes are left alone. An
/// unterminated group is returned untouched; see [`unclosed_group`].
pub(crate) fn expand_braces(pattern: &str) -> Vec<String> {
    let Some((open, close)) = find_group(pattern) else {
        return vec![pattern.to_string()];
    };

    let prefix = &pattern[..open];
    let suffix = &pattern[close + 1..];

    split_alternatives(&pattern[open + 1..close])
        .into_iter()
        .flat_map(|alternative| expand_braces(&format!("{prefix}{alternative}{suffix}")))
        .collect()
}

/// Byte offsets of the first top-level `{` and its matching `}`.
fn find_group(pattern: &str) -> Option<(usize, usize)> {
    let bytes = pattern.as_bytes();
    let mut open = None;
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => {
                if let Some(end) = class_end(bytes, i) {
                    i = end + 1;
                    continue;
                }
            }
            b'{' => {
                open.get_or_insert(i);
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return open.map(|start| (start, i));
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Byte offset of the first `{` that is never closed, if any.
pub(crate) fn unclosed_group(pattern: &str) -> Option<usize> {
    let bytes = pattern.as_bytes();
    let mut open = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => {
                if let Some(end) = class_end(bytes, i) {
                    i = end + 1;
                    continue;
                }
            }
            b'{' => open.push(i),
            b'}' => {
                open.pop();
            }
            _ => {}
        }
        i += 1;
    }

    open.first().copied()
}

/// Splits a group body at its top-level commas.
fn split_alternatives(body: &str) -> Vec<&str> {
    let bytes = body.as_bytes();
    let mut alternatives = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 2;
                continue;
            }
            b'[' => {
                if let Some(end) = class_end(bytes, i) {
                    i = end + 1;
                    continue;
                }
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                alternatives.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    alternatives.push(&body[start..]);
    alternatives
}

/// Offset of the `]` closing the class that opens at `start`.
///
/// A `]` directly after `[` (or `[!`, `[^`) is a member, not the terminator.
pub(crate) fn class_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if matches!(bytes.get(j), Some(b'!' | b'^')) {
        j += 1;
    }
    if bytes.get(j) == Some(&b']') {
        j += 1;
    }
    bytes[j.min(bytes.len())..]
        .iter()
        .position(|&b| b == b']')
        .map(|offset| j + offset)
}
