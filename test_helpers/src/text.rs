//! Text normalisation for behavioural step placeholders.

/// Strips one layer of matching single or double quotes from a value.
#[must_use]
pub fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            trimmed
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn removes_single_outer_quotes() {
        assert_eq!(unquote("'ready'"), "ready");
        assert_eq!(unquote("\"ready\""), "ready");
    }

    #[test]
    fn leaves_unbalanced_quotes() {
        assert_eq!(unquote(" \"ready' "), "\"ready'");
        assert_eq!(unquote("ready"), "ready");
    }
}
