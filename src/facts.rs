use anyhow::Result;
use regex::Regex;

use crate::models::{Anchor, DocumentFacts, HreflangLink};

/// Anchors beyond this count are not collected.
pub const MAX_ANCHORS: usize = 100;

/// Extract normalized localization facts from raw page markup.
///
/// Scanning is tolerant rather than strict: tag and attribute names match
/// case-insensitively, attributes may appear in any order with double, single,
/// or no quotes, and anything unparseable degrades to "absent" instead of
/// failing the extraction.
pub fn extract(html: &str) -> Result<DocumentFacts> {
    Ok(DocumentFacts {
        html_lang: extract_html_lang(html)?,
        hreflang_links: extract_hreflang_links(html)?,
        anchors: extract_anchors(html)?,
        raw_html_lower: html.to_lowercase(),
    })
}

/// Extract the trimmed `<title>` text, if the page has one.
pub fn extract_title(html: &str) -> Result<Option<String>> {
    let re = Regex::new(r"(?is)<title[^>]*>(.*?)</title>")?;
    Ok(re.captures(html).map(|caps| strip_tags(&caps[1])))
}

fn extract_html_lang(html: &str) -> Result<Option<String>> {
    let re = Regex::new(r"(?is)<html\b[^>]*>")?;
    let Some(tag) = re.find(html) else {
        return Ok(None);
    };
    Ok(attr_value(tag.as_str(), "lang")?.filter(|lang| !lang.is_empty()))
}

/// Collect every `<link>` tag carrying an hreflang attribute, in document
/// order. A missing href degrades to an empty string.
fn extract_hreflang_links(html: &str) -> Result<Vec<HreflangLink>> {
    let re = Regex::new(r"(?is)<link\b[^>]*>")?;
    let mut links = Vec::new();

    for tag in re.find_iter(html) {
        let tag = tag.as_str();
        if let Some(hreflang) = attr_value(tag, "hreflang")? {
            let href = attr_value(tag, "href")?.unwrap_or_default();
            links.push(HreflangLink { hreflang, href });
        }
    }

    Ok(links)
}

/// Collect anchors that have an href, up to [`MAX_ANCHORS`]. Visible text is
/// tag-stripped and whitespace-collapsed.
fn extract_anchors(html: &str) -> Result<Vec<Anchor>> {
    let re = Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a>")?;
    let mut anchors = Vec::new();

    for caps in re.captures_iter(html) {
        if anchors.len() == MAX_ANCHORS {
            break;
        }
        let Some(href) = attr_value(&caps[1], "href")? else {
            continue;
        };
        anchors.push(Anchor {
            href,
            text: strip_tags(&caps[2]),
        });
    }

    Ok(anchors)
}

/// Pull a named attribute's value out of a single tag's text. Handles
/// double-quoted, single-quoted, and bare values.
fn attr_value(tag: &str, name: &str) -> Result<Option<String>> {
    let re = Regex::new(&format!(
        r#"(?i)\b{}\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#,
        name
    ))?;
    Ok(re
        .captures(tag)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().trim().to_string()))
}

/// Drop markup tags from a fragment and collapse whitespace runs.
fn strip_tags(fragment: &str) -> String {
    let mut text = String::new();
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!DOCTYPE html>
<HTML class="no-js" LANG="en-US">
<head>
  <title>  Acme  Corp </title>
  <link rel="alternate" hreflang="en" href="https://acme.example/en/">
  <LINK HREF='https://acme.example/fr/' REL='alternate' HREFLANG='fr'>
  <link rel=alternate hreflang=de href=https://acme.example/de/>
  <link rel="stylesheet" href="/main.css">
</head>
<body>
  <a href="/about">About <b>us</b></a>
  <a class="nav" href="/contact">Contact</a>
  <a name="no-href-anchor">skip me</a>
</body>
</HTML>"#;

    #[test]
    fn test_extract_html_lang_tolerates_case_and_order() {
        let facts = extract(PAGE).unwrap();
        assert_eq!(facts.html_lang.as_deref(), Some("en-US"));
    }

    #[test]
    fn test_hreflang_links_in_document_order() {
        let facts = extract(PAGE).unwrap();
        let locales: Vec<&str> = facts
            .hreflang_links
            .iter()
            .map(|l| l.hreflang.as_str())
            .collect();
        assert_eq!(locales, ["en", "fr", "de"]);
        assert_eq!(facts.hreflang_links[1].href, "https://acme.example/fr/");
        assert_eq!(facts.hreflang_links[2].href, "https://acme.example/de/");
    }

    #[test]
    fn test_plain_stylesheet_links_are_ignored() {
        let facts = extract(PAGE).unwrap();
        assert!(facts
            .hreflang_links
            .iter()
            .all(|l| !l.href.ends_with(".css")));
    }

    #[test]
    fn test_anchors_require_href_and_strip_markup() {
        let facts = extract(PAGE).unwrap();
        assert_eq!(facts.anchors.len(), 2);
        assert_eq!(facts.anchors[0].href, "/about");
        assert_eq!(facts.anchors[0].text, "About us");
        assert_eq!(facts.anchors[1].text, "Contact");
    }

    #[test]
    fn test_anchor_collection_caps_at_limit() {
        let mut html = String::from("<html><body>");
        for i in 0..150 {
            html.push_str(&format!("<a href=\"/p/{}\">Page {}</a>", i, i));
        }
        html.push_str("</body></html>");

        let facts = extract(&html).unwrap();
        assert_eq!(facts.anchors.len(), MAX_ANCHORS);
        assert_eq!(facts.anchors[99].href, "/p/99");
    }

    #[test]
    fn test_raw_html_is_lowercased() {
        let facts = extract("<SCRIPT SRC=\"/I18NEXT.JS\"></SCRIPT>").unwrap();
        assert!(facts.raw_html_lower.contains("i18next"));
    }

    #[test]
    fn test_title_is_trimmed_and_collapsed() {
        assert_eq!(extract_title(PAGE).unwrap().as_deref(), Some("Acme Corp"));
        assert_eq!(extract_title("<html></html>").unwrap(), None);
    }

    #[test]
    fn test_missing_lang_attribute() {
        let facts = extract("<html><body></body></html>").unwrap();
        assert_eq!(facts.html_lang, None);

        let facts = extract("<html lang=\"\"><body></body></html>").unwrap();
        assert_eq!(facts.html_lang, None);
    }

    #[test]
    fn test_attr_value_does_not_match_hreflang_for_href() {
        // "href" must not match the prefix of a sole "hreflang" attribute.
        let value = attr_value("<link hreflang=\"en\">", "href").unwrap();
        assert_eq!(value, None);
    }
}
