use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Built once, shared by every writer thread
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Returns true for characters that XML 1.0 does not allow anywhere in a document.
#[inline]
fn is_forbidden(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Escape text for use in XML content or attribute values.
///
/// The five markup characters are replaced by their entities. Control
/// characters that XML 1.0 cannot represent are dropped, so caller-supplied
/// text never produces a malformed part.
///
/// # Examples
///
/// ```
/// use docpack::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    if s.chars().any(is_forbidden) {
        let cleaned: String = s.chars().filter(|&c| !is_forbidden(c)).collect();
        XML_ESCAPER.replace_all(&cleaned, &REPLACEMENTS)
    } else {
        XML_ESCAPER.replace_all(s, &REPLACEMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_entities() {
        assert_eq!(
            escape_xml(r#"<foo & "bar" 'baz'>"#),
            "&lt;foo &amp; &quot;bar&quot; &apos;baz&apos;&gt;"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_xml("4–8 GB of available RAM"), "4–8 GB of available RAM");
    }

    #[test]
    fn test_tabs_and_newlines_are_kept() {
        assert_eq!(escape_xml("a\tb\nc"), "a\tb\nc");
    }

    #[test]
    fn test_forbidden_control_characters_dropped() {
        assert_eq!(escape_xml("a\u{0}b\u{1B}c<"), "abc&lt;");
    }
}
