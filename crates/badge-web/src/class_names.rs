//! Style-class composition for `class=` attributes.

/// Join class tokens into one attribute value.
///
/// Absent and blank tokens are skipped, surrounding whitespace is trimmed and
/// the remaining tokens keep their order.
pub fn class_names<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for token in tokens.into_iter().flatten().map(str::trim).filter(|t| !t.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order() {
        assert_eq!(class_names([Some("a"), Some("b c")]), "a b c");
    }

    #[test]
    fn skips_absent_and_blank() {
        assert_eq!(class_names([None, Some("base"), Some(""), Some("   "), None]), "base");
    }

    #[test]
    fn trims_tokens() {
        assert_eq!(class_names([Some(" base "), Some("\textra\n")]), "base extra");
    }

    #[test]
    fn empty_input() {
        assert_eq!(class_names(std::iter::empty::<Option<&str>>()), "");
    }
}
