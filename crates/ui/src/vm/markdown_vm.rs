use std::collections::{HashMap, HashSet};

/// Renders plan text (markdown) to sanitized HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_TASKLISTS);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "em", "strong", "del", "code",
        "pre", "blockquote", "ul", "ol", "li", "table", "thead", "tbody", "tr", "th", "td", "a",
        "input",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("input", ["type", "checked", "disabled"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// First `max_chars` characters, with an ellipsis when something was cut.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.char_indices();
    match chars.nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_lists() {
        let html = markdown_to_html("## Week 1\n\n- Kinematics\n- **Vectors**");
        assert!(html.contains("<h2>Week 1</h2>"), "{html}");
        assert!(html.contains("<li>Kinematics</li>"), "{html}");
        assert!(html.contains("<strong>Vectors</strong>"), "{html}");
    }

    #[test]
    fn strips_scripts() {
        let html = markdown_to_html("Day 1\n\n<script>alert(1)</script>");
        assert!(!html.contains("<script"), "{html}");
        assert!(html.contains("Day 1"));
    }

    #[test]
    fn preview_cuts_on_char_boundaries() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ééééé", 2), "éé...");
    }
}
