/// Canonical lookup key for a raw violation code.
///
/// Uppercases, then drops parentheses, whitespace, the `§` section mark, and
/// zero-width characters that leak in from spreadsheet exports, so
/// `"396.3(a)(1)"` becomes `"396.3A1"`. Never fails; empty in, empty out.
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| !is_stripped(*c))
        .collect()
}

fn is_stripped(c: char) -> bool {
    matches!(c, '(' | ')' | '§' | '\u{feff}' | '\u{200b}') || c.is_whitespace()
}
