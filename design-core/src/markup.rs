//! Small HTML text helpers shared by the emitter and the element inferencer.

/// Escape text content: `&`, `<` and `>`.
#[must_use]
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a double-quoted attribute value.
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    escape_text(value)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape text and turn each newline into a `<br>`.
#[must_use]
pub fn text_with_breaks(text: &str) -> String {
    text.split('\n')
        .map(escape_text)
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Class name for the `counter`-th node named `name`.
///
/// Every character outside `[A-Za-z0-9]` becomes `-`, so the result is always
/// a valid CSS identifier.
#[must_use]
pub fn class_name(counter: usize, name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("node-{counter}-{sanitized}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"Tom's "logo" <1>"#),
            "Tom&#39;s &quot;logo&quot; &lt;1&gt;"
        );
    }

    #[test]
    fn test_text_with_breaks() {
        assert_eq!(text_with_breaks("Hi\nThere"), "Hi<br>There");
        assert_eq!(text_with_breaks("<b>\n\n"), "&lt;b&gt;<br><br>");
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name(0, "Login Button"), "node-0-Login-Button");
        assert_eq!(class_name(12, "Ünïcode/Name_1"), "node-12--n-code-Name-1");
        assert_eq!(class_name(3, ""), "node-3-");
    }
}
