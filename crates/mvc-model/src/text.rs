/// Rewrites double quotes to single quotes so free text can be embedded in a
/// double-quoted FSH field without escaping.
pub fn normalize_quotes(text: &str) -> String {
    text.replace('"', "'")
}

#[cfg(test)]
mod tests {
    use super::normalize_quotes;

    #[test]
    fn replaces_every_double_quote() {
        assert_eq!(normalize_quotes("say \"hi\" twice \"\""), "say 'hi' twice ''");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(normalize_quotes("no quotes here"), "no quotes here");
    }
}
