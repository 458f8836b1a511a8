//! File name normalization

/// Split a file name into a normalized base name and its extension.
///
/// Any directory part is dropped first. The extension is whatever follows
/// the last period and is kept verbatim; only the base name is normalized.
#[must_use]
pub fn split_file_name(file_name: &str) -> (String, String) {
    let file_name = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);

    match file_name.rfind('.') {
        Some(dot) => (
            normalize_file_name(&file_name[..dot]),
            file_name[dot + 1..].to_string(),
        ),
        None => (normalize_file_name(file_name), String::new()),
    }
}

/// Remove commas and periods and collapse every whitespace run to `_`.
///
/// Removed characters do not break a whitespace run: `"a . b"` becomes `"a_b"`.
#[must_use]
pub fn normalize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for ch in name.chars() {
        match ch {
            ',' | '.' => {}
            c if c.is_whitespace() => {
                if !in_whitespace {
                    out.push('_');
                    in_whitespace = true;
                }
            }
            c => {
                out.push(c);
                in_whitespace = false;
            }
        }
    }

    out
}
