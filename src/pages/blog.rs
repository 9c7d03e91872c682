use chrono::SecondsFormat;
use htmlescape::encode_minimal;
use serde_json::json;

use super::{format_date, PageMeta};
use crate::config::Config;
use crate::models::Post;

fn tag_badges<'a>(tags: impl Iterator<Item = &'a String>) -> String {
    tags.map(|tag| format!("<span class=\"tag\">{}</span>", encode_minimal(tag)))
        .collect()
}

pub fn index(config: &Config, posts: &[Post]) -> (PageMeta, String) {
    let cards = if posts.is_empty() {
        "<p class=\"empty\">No blog posts yet. Check back soon!</p>".to_string()
    } else {
        posts
            .iter()
            .map(|post| {
                format!(
                    r#"<a class="post-card" href="{href}">
<img src="{image}" alt="{title}">
<div class="tags">{tags}</div>
<h2>{title}</h2>
<p class="meta"><time datetime="{datetime}">{date}</time> &bull; {author}</p>
<p>{excerpt}</p>
</a>"#,
                    href = post.path(),
                    image = encode_minimal(post.image_or(&config.default_image)),
                    title = encode_minimal(&post.title),
                    tags = tag_badges(post.tags.iter().take(2)),
                    datetime = post.date.to_rfc3339_opts(SecondsFormat::Secs, true),
                    date = format_date(&post.date),
                    author = encode_minimal(&post.author),
                    excerpt = encode_minimal(&post.excerpt),
                )
            })
            .collect()
    };

    let body = format!(
        r#"<section>
<h1>{site} Blog</h1>
<p>Insights, updates, and thought leadership on AI innovation, education technology, and privacy-first systems.</p>
</section>
<section class="post-grid">
{cards}
</section>"#,
        site = encode_minimal(&config.site_name),
        cards = cards,
    );

    (
        PageMeta::new(
            "Blog",
            "Insights on AI innovation, education, and privacy-first technology.",
            "/blog",
        ),
        body,
    )
}

/// Structured data for Google News and rich results.
pub fn news_article_json_ld(config: &Config, post: &Post) -> serde_json::Value {
    let canonical = config.absolute_url(&post.path());
    let published = post.date.to_rfc3339_opts(SecondsFormat::Millis, true);
    let image = post.image_or(&config.default_image);
    let image = if image.starts_with('/') {
        config.absolute_url(image)
    } else {
        image.to_string()
    };

    json!({
        "@context": "https://schema.org",
        "@type": "NewsArticle",
        "headline": post.title,
        "description": post.excerpt,
        "image": [image],
        "datePublished": published,
        "dateModified": published,
        "author": {
            "@type": "Person",
            "name": post.author,
            "url": config.site_url,
        },
        "publisher": {
            "@type": "Organization",
            "name": config.site_name,
            "url": config.site_url,
            "logo": {
                "@type": "ImageObject",
                "url": config.absolute_url("/assets/logo-light.svg"),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": canonical,
        },
        "keywords": post.tags.join(", "),
        "articleSection": post.tags.first().map(String::as_str).unwrap_or("Technology"),
        "isAccessibleForFree": true,
        "inLanguage": "en-GB",
    })
}

/// `rendered_body` is trusted HTML from the markdown renderer.
pub fn post(config: &Config, post: &Post, rendered_body: &str) -> (PageMeta, String) {
    let datetime = post.date.to_rfc3339_opts(SecondsFormat::Secs, true);
    let date = format_date(&post.date);
    let image = post
        .image
        .as_deref()
        .map(|src| {
            format!(
                "<img class=\"featured\" src=\"{}\" alt=\"{}\">",
                encode_minimal(src),
                encode_minimal(&post.title)
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"<a class="back" href="/blog">Back to Blog</a>
<article>
<header>
<div class="tags">{tags}</div>
<h1>{title}</h1>
<p class="meta"><time datetime="{datetime}">{date}</time> &bull; {author}</p>
{image}
</header>
<div class="prose">
{rendered_body}
</div>
<footer>
<p>Published by <strong>{author}</strong> on <time datetime="{datetime}">{date}</time></p>
<p><a href="/blog">&larr; Back to all posts</a> <a class="button" href="/contact">Get in Touch</a></p>
</footer>
</article>"#,
        tags = tag_badges(post.tags.iter()),
        title = encode_minimal(&post.title),
        author = encode_minimal(&post.author),
    );

    let canonical = config.absolute_url(&post.path());
    // `</` cannot appear inside a script element.
    let json_ld = news_article_json_ld(config, post)
        .to_string()
        .replace("</", "<\\/");

    let mut meta = PageMeta::new(&post.title, &post.excerpt, &post.path());
    meta.head = format!(
        "<link rel=\"canonical\" href=\"{canonical}\">\n\
         <meta name=\"author\" content=\"{author}\">\n\
         <meta name=\"news_keywords\" content=\"{keywords}\">\n\
         <meta property=\"og:type\" content=\"article\">\n\
         <meta property=\"article:published_time\" content=\"{datetime}\">\n\
         <script type=\"application/ld+json\">{json_ld}</script>",
        canonical = encode_minimal(&canonical),
        author = encode_minimal(&post.author),
        keywords = encode_minimal(&post.tags.join(", ")),
    );
    (meta, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use scraper::{Html, Selector};

    fn sample(image: Option<&str>, tags: &[&str]) -> Post {
        Post {
            slug: "welcome".to_string(),
            title: "Welcome <to> the blog".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            author: "McCaigs AI Team".to_string(),
            excerpt: "First post".to_string(),
            image: image.map(str::to_string),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: String::new(),
        }
    }

    #[test]
    fn index_uses_default_image_and_two_tags() {
        let config = Config::default();
        let (_, body) = index(&config, &[sample(None, &["AI", "Schools", "Policy"])]);
        let doc = Html::parse_fragment(&body);
        let img = doc.select(&Selector::parse("a.post-card img").unwrap()).next().unwrap();
        assert_eq!(img.value().attr("src"), Some(config.default_image.as_str()));
        assert_eq!(doc.select(&Selector::parse(".tag").unwrap()).count(), 2);
        assert!(body.contains("1 January 2025"));
        assert!(body.contains("Welcome &lt;to&gt; the blog"));
    }

    #[test]
    fn empty_index_says_so() {
        let (_, body) = index(&Config::default(), &[]);
        assert!(body.contains("No blog posts yet"));
    }

    #[test]
    fn post_page_embeds_body_and_structured_data() {
        let config = Config::default();
        let mut post = sample(Some("/assets/blog/welcome.png"), &["AI"]);
        post.excerpt = "Ends </script> early".to_string();
        let (meta, body) = super::post(&config, &post, "<h2 id=\"intro\">Intro</h2>");
        assert!(body.contains("<h2 id=\"intro\">Intro</h2>"));
        assert!(body.contains("src=\"/assets/blog/welcome.png\""));
        assert!(meta.head.contains("href=\"https://www.mccaigs.ai/blog/welcome\""));
        assert!(!meta.head.contains("</script> early"));
        assert_eq!(meta.head.matches("</script>").count(), 1);

        let ld = news_article_json_ld(&config, &post);
        assert_eq!(ld["@type"], "NewsArticle");
        assert_eq!(ld["datePublished"], "2025-01-01T00:00:00.000Z");
        assert_eq!(ld["image"][0], "https://www.mccaigs.ai/assets/blog/welcome.png");
        assert_eq!(ld["articleSection"], "AI");
    }

    #[test]
    fn post_without_image_or_tags() {
        let config = Config::default();
        let post = sample(None, &[]);
        let (_, body) = super::post(&config, &post, "");
        assert!(!body.contains("class=\"featured\""));
        assert_eq!(news_article_json_ld(&config, &post)["articleSection"], "Technology");
    }
}
