//! Small HTML writing helpers.

use folio_core::spec::{AnimationSpec, MOTION_ATTRIBUTE};

use crate::error::RenderResult;

/// Escape text content.
#[must_use]
pub fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attr(input: &str) -> String {
    escape_text(input)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// ` data-motion="..."` for `spec`, or an empty string when `spec` is `None`.
///
/// # Errors
///
/// Returns an error if the descriptor cannot be serialized.
pub fn motion_attr(spec: Option<&AnimationSpec>) -> RenderResult<String> {
    match spec {
        Some(spec) => Ok(format!(
            " {MOTION_ATTRIBUTE}=\"{}\"",
            escape_attr(&spec.to_attribute()?)
        )),
        None => Ok(String::new()),
    }
}

/// Reduce a URL to something safe for `href`: only http(s), mailto and tel
/// schemes plus in-page anchors pass; anything else becomes `#`.
#[must_use]
pub fn safe_href(url: &str) -> String {
    let lower = url.trim().to_ascii_lowercase();
    let allowed = ["https://", "http://", "mailto:", "tel:", "#"];
    if allowed.iter().any(|prefix| lower.starts_with(prefix)) {
        escape_attr(url.trim())
    } else {
        "#".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::RevealConfig;

    #[test]
    fn text_escaping() {
        assert_eq!(escape_text("A < B & C > D"), "A &lt; B &amp; C &gt; D");
    }

    #[test]
    fn attr_escaping_covers_quotes() {
        assert_eq!(escape_attr(r#"say "hi" it's"#), "say &quot;hi&quot; it&#39;s");
    }

    #[test]
    fn motion_attr_is_escaped_json() {
        let spec = AnimationSpec::Reveal(RevealConfig::default());
        let attr = motion_attr(Some(&spec)).expect("attr");
        assert!(attr.starts_with(" data-motion=\"{&quot;kind&quot;:&quot;reveal&quot;"));
        assert!(!attr[14..attr.len() - 1].contains('"'));
    }

    #[test]
    fn motion_attr_none_is_empty() {
        assert_eq!(motion_attr(None).expect("attr"), "");
    }

    #[test]
    fn unsafe_schemes_are_neutralized() {
        assert_eq!(safe_href("javascript:alert(1)"), "#");
        assert_eq!(safe_href("https://example.com/?a=1&b=2"), "https://example.com/?a=1&amp;b=2");
        assert_eq!(safe_href("mailto:me@example.com"), "mailto:me@example.com");
    }
}
