/// True when the value still contains something after trimming whitespace
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// True when the value has at most `n` characters
///
/// Counts Unicode scalar values, not bytes, so "héllo" is five characters.
pub fn max_chars(value: &str, n: usize) -> bool {
    value.chars().count() <= n
}

/// True when `value` is one of `permitted`
pub fn permitted_int(value: i64, permitted: &[i64]) -> bool {
    permitted.contains(&value)
}
