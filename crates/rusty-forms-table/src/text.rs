//! Text extraction from cell HTML

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([A-Za-z][A-Za-z0-9-]*)[^>]*?(/?)>").expect("valid tag regex")
});

static ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z]+);").expect("valid entity regex"));

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Lowercases `text` and strips diacritics ("Crème Brûlée" becomes "creme brulee").
pub fn to_lower_case_no_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Decodes named and numeric character references. Unknown references are kept.
pub fn decode_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &regex::Captures| {
            let reference = &caps[1];
            let decoded = match reference {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => reference
                    .strip_prefix("#x")
                    .or_else(|| reference.strip_prefix("#X"))
                    .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                    .or_else(|| reference.strip_prefix('#').and_then(|dec| dec.parse().ok()))
                    .and_then(char::from_u32),
            };

            match decoded {
                Some(c) => c.to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Text of the HTML fragment at element depth `min_depth` or deeper.
fn text_at_depth(html: &str, min_depth: usize) -> String {
    let mut text = String::new();
    let mut depth = 0usize;
    let mut last = 0;

    for caps in TAG.captures_iter(html) {
        let Some(whole) = caps.get(0) else { continue };

        if depth >= min_depth {
            text.push_str(&html[last..whole.start()]);
        }
        last = whole.end();

        let closing = !caps[1].is_empty();
        let self_closing = !caps[3].is_empty();
        let name = caps[2].to_ascii_lowercase();

        if closing {
            depth = depth.saturating_sub(1);
        } else if !self_closing && !VOID_ELEMENTS.contains(&name.as_str()) {
            depth += 1;
        }
    }

    if depth >= min_depth {
        text.push_str(&html[last..]);
    }

    decode_entities(&text)
}

/// All text of an HTML fragment.
pub fn text_content(html: &str) -> String {
    text_at_depth(html, 0)
}

/// Text inside the elements of an HTML fragment, ignoring text directly in the
/// fragment.
pub fn child_element_text(html: &str) -> String {
    text_at_depth(html, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Crème Brûlée", "creme brulee")]
    #[case("ÅNGSTRÖM", "angstrom")]
    #[case("plain", "plain")]
    #[case("", "")]
    fn test_to_lower_case_no_diacritics(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(to_lower_case_no_diacritics(text), expected);
    }

    #[rstest]
    #[case("Tom &amp; Jerry", "Tom & Jerry")]
    #[case("&lt;b&gt;", "<b>")]
    #[case("&quot;x&quot; &#39;y&#39;", "\"x\" 'y'")]
    #[case("&#x20AC;5", "€5")]
    #[case("&unknown; &#xZZ;", "&unknown; &#xZZ;")]
    fn test_decode_entities(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(decode_entities(text), expected);
    }

    #[test]
    fn test_text_content() {
        assert_eq!(text_content("a<b>b</b><br>c"), "abc");
        assert_eq!(text_content("<div class=\"x\">Fish &amp; Chips</div>"), "Fish & Chips");
    }

    #[test]
    fn test_child_element_text() {
        assert_eq!(child_element_text("ignored<span>kept</span> also ignored"), "kept");
        assert_eq!(child_element_text("<a href=\"/x\">one<br/>two</a>"), "onetwo");
        assert_eq!(child_element_text("<div><span>nested</span> text</div>"), "nested text");
        assert_eq!(child_element_text("no elements"), "");
    }
}
