//! Replacement Variables - `%%name%%` Placeholder Substitution
//!
//! Unknown placeholders stay verbatim. Substituted values are not re-scanned.

use std::collections::BTreeMap;

const DELIMITER: &str = "%%";

fn is_var_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Replace every known `%%name%%` token in `template` with its value.
pub fn replace(template: &str, vars: &BTreeMap<String, String>) -> String {
    if vars.is_empty() || !template.contains(DELIMITER) {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(DELIMITER) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + DELIMITER.len()..];

        let name_len = after_open
            .find(|c: char| !is_var_char(c))
            .unwrap_or(after_open.len());
        let name = &after_open[..name_len];
        let closed = after_open[name_len..].starts_with(DELIMITER);

        match vars.get(name) {
            Some(value) if closed && !name.is_empty() => {
                out.push_str(value);
                rest = &after_open[name_len + DELIMITER.len()..];
            }
            _ => {
                // Keep the opening delimiter and rescan from the next char so a
                // closing `%%` can open the following token.
                out.push_str(&rest[start..start + 1]);
                rest = &rest[start + 1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replaces_known_tokens() {
        let v = vars(&[("title", "Hello"), ("sitename", "Example")]);
        assert_eq!(replace("%%title%% %%sep%% %%sitename%%", &v), "Hello %%sep%% Example");
    }

    #[test]
    fn test_unknown_and_stray_delimiters_verbatim() {
        let v = vars(&[("title", "T")]);
        assert_eq!(replace("50%% off %%nope%%", &v), "50%% off %%nope%%");
        assert_eq!(replace("%%%%title%%", &v), "%%T");
        assert_eq!(replace("trailing %%", &v), "trailing %%");
    }

    #[test]
    fn test_adjacent_tokens() {
        let v = vars(&[("a", "1"), ("b", "2")]);
        assert_eq!(replace("%%a%%%%b%%", &v), "12");
    }

    #[test]
    fn test_values_not_rescanned() {
        let v = vars(&[("a", "%%b%%"), ("b", "oops")]);
        assert_eq!(replace("%%a%%", &v), "%%b%%");
    }

    #[test]
    fn test_empty_mapping_is_identity() {
        assert_eq!(replace("%%title%%", &BTreeMap::new()), "%%title%%");
    }

    #[test]
    fn test_non_ascii_text_preserved() {
        let v = vars(&[("title", "Ünïcödé")]);
        assert_eq!(replace("→ %%title%% ←", &v), "→ Ünïcödé ←");
    }
}
