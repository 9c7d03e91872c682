//! HTML page rendering. Every page is a fragment dropped into the site
//! layout template by [`render_with_layout`].

pub mod blog;
pub mod marketing;

use chrono::{DateTime, Datelike, Utc};
use htmlescape::encode_minimal;

use crate::catalogue::{LEGAL_PAGES, NAV_ITEMS};
use crate::hot_reload::HOT_RELOAD_SCRIPT;

/// Used when the content directory has no `layout.html`.
pub const DEFAULT_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{{ title }}</title>
<meta name="description" content="{{ description }}">
<link rel="alternate" type="application/atom+xml" title="Atom feed" href="/atom">
{{ head }}
</head>
<body>
<header>{{ nav }}</header>
<main>{{ content }}</main>
<footer>{{ footer }}</footer>
</body>
</html>
"#;

/// Used when the content directory has no `not_found.html`. Supports
/// `{{ path }}`.
pub const DEFAULT_NOT_FOUND: &str = r#"<section class="not-found">
<h1>Page not found</h1>
<p>Nothing lives at <code>{{ path }}</code>.</p>
<p><a href="/">Back to the home page</a></p>
</section>"#;

/// Per-page values for the layout's `<head>`.
pub struct PageMeta {
    pub title: String,
    pub description: String,
    /// Extra markup for `<head>`, inserted verbatim.
    pub head: String,
    /// Request path, used to highlight the active navigation entry.
    pub path: String,
}

impl PageMeta {
    pub fn new(title: &str, description: &str, path: &str) -> Self {
        PageMeta {
            title: title.to_string(),
            description: description.to_string(),
            head: String::new(),
            path: path.to_string(),
        }
    }
}

pub fn render_with_layout(
    layout: &str,
    site_name: &str,
    meta: &PageMeta,
    content: &str,
    is_development: bool,
) -> String {
    let title = if meta.title == site_name {
        site_name.to_string()
    } else {
        format!("{} | {}", meta.title, site_name)
    };

    let nav = navigation(site_name, &meta.path);
    let footer_html = footer(site_name);
    let mut page = fill_placeholders(layout, |name| match name {
        "title" => Some(encode_minimal(&title)),
        "description" => Some(encode_minimal(&meta.description)),
        "head" => Some(meta.head.clone()),
        "nav" => Some(nav.clone()),
        "footer" => Some(footer_html.clone()),
        "content" => Some(content.to_string()),
        _ => None,
    });

    if is_development {
        page = page.replace("</body>", &format!("{}</body>", HOT_RELOAD_SCRIPT));
    }

    page
}

pub fn render_not_found(template: &str, path: &str) -> String {
    fill_placeholders(template, |name| (name == "path").then(|| encode_minimal(path)))
}

/// Replaces each `{{ name }}` in `template` with `value(name)` in a single
/// pass, so substituted text is never scanned again. Unknown names are kept
/// verbatim.
fn fill_placeholders(template: &str, value: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        let Some(len) = rest[start..].find("}}") else {
            break;
        };
        let tag = &rest[start..start + len + 2];
        out.push_str(&rest[..start]);
        match value(tag[2..tag.len() - 2].trim()) {
            Some(replacement) => out.push_str(&replacement),
            None => out.push_str(tag),
        }
        rest = &rest[start + len + 2..];
    }
    out.push_str(rest);
    out
}

fn navigation(site_name: &str, current: &str) -> String {
    let mut items = String::new();
    for item in NAV_ITEMS {
        let active = current == item.href
            || (item.href != "/" && current.starts_with(&format!("{}/", item.href)));
        items.push_str(&format!(
            "<li><a href=\"{}\"{}>{}</a></li>",
            item.href,
            if active { " aria-current=\"page\"" } else { "" },
            encode_minimal(item.label)
        ));
    }
    format!(
        "<nav><a class=\"brand\" href=\"/\">{}</a><ul>{}</ul></nav>",
        encode_minimal(site_name),
        items
    )
}

fn footer(site_name: &str) -> String {
    let links: Vec<String> = LEGAL_PAGES
        .iter()
        .map(|page| {
            format!(
                "<a href=\"{}\">{}</a>",
                page.path(),
                encode_minimal(page.title)
            )
        })
        .collect();
    format!(
        "<p class=\"legal\">{}</p><p>&copy; {} {}. All rights reserved.</p>",
        links.join(" "),
        Utc::now().year(),
        encode_minimal(site_name)
    )
}

/// `18 November 2025`, always in UTC.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

/// Shared closing call-to-action block.
pub(crate) fn cta_section() -> &'static str {
    r#"<section class="cta">
<h2>Ready to build responsibly with AI?</h2>
<p>Let's discuss partnerships, press or collaboration opportunities.</p>
<a class="button" href="/contact">Get in Touch</a>
</section>"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates_like_the_site() {
        let date = Utc.with_ymd_and_hms(2025, 11, 8, 23, 59, 0).unwrap();
        assert_eq!(format_date(&date), "8 November 2025");
    }

    #[test]
    fn layout_substitution() {
        let meta = PageMeta::new("Blog", "Posts <&>", "/blog/welcome");
        let page = render_with_layout(DEFAULT_LAYOUT, "McCaigs AI", &meta, "<p>hi</p>", false);
        assert!(page.contains("<title>Blog | McCaigs AI</title>"));
        assert!(page.contains("content=\"Posts &lt;&amp;&gt;\""));
        assert!(page.contains("<main><p>hi</p></main>"));
        assert!(page.contains("<a href=\"/blog\" aria-current=\"page\">Blog</a>"));
        assert!(page.contains("<a href=\"/\">Home</a>"));
        assert!(page.contains("<a href=\"/privacy-policy\">Privacy Policy</a>"));
        assert!(!page.contains("{{"));
        assert!(!page.contains("WebSocket"));
    }

    #[test]
    fn development_pages_get_reload_script() {
        let meta = PageMeta::new("McCaigs AI", "", "/");
        let page = render_with_layout(DEFAULT_LAYOUT, "McCaigs AI", &meta, "", true);
        assert!(page.contains("<title>McCaigs AI</title>"));
        assert!(page.contains("new WebSocket"));
    }

    #[test]
    fn not_found_escapes_path() {
        let body = render_not_found(DEFAULT_NOT_FOUND, "/blog/<script>");
        assert!(body.contains("/blog/&lt;script&gt;"));
    }

    #[test]
    fn placeholders_in_values_stay_literal() {
        let mut meta = PageMeta::new("Templating with {{ content }} and {{ nav }}", "Uses {{ footer }}", "/blog/t");
        meta.head = "<meta name=\"x\" content=\"{{ title }}\">".to_string();
        let page = render_with_layout(DEFAULT_LAYOUT, "McCaigs AI", &meta, "<p>BODY {{ head }}</p>", false);
        assert!(page.contains("<title>Templating with {{ content }} and {{ nav }} | McCaigs AI</title>"));
        assert!(page.contains("content=\"Uses {{ footer }}\""));
        assert!(page.contains("<meta name=\"x\" content=\"{{ title }}\">"));
        assert!(page.contains("<main><p>BODY {{ head }}</p></main>"));
        assert_eq!(page.matches("<p>BODY").count(), 1);
        assert_eq!(page.matches("<nav>").count(), 1);
    }

    #[test]
    fn unknown_and_unclosed_placeholders_are_kept() {
        assert_eq!(fill_placeholders("a {{ x }} b {{ y", |_| None), "a {{ x }} b {{ y");
        assert_eq!(
            fill_placeholders("{{path}}/{{ path }}", |n| (n == "path").then(|| "p".to_string())),
            "p/p"
        );
    }
}
