//! Atom 1.0 feed of the blog.

use atom_syndication::{Category, Content, Entry, Feed, Link, Person, Text};
use chrono::{DateTime, Datelike, Utc};

use crate::config::Config;
use crate::models::Post;

/// Renders the feed. `updated` is the newest post's date, falling back to
/// `now` for an empty blog.
pub fn atom_feed(config: &Config, posts: &[Post], now: DateTime<Utc>) -> String {
    let updated = posts.iter().map(|p| p.date).max().unwrap_or(now);

    let feed = Feed {
        title: Text::plain(format!("{} Blog", config.site_name)),
        subtitle: Some(Text::plain(format!(
            "Insights, updates, and thought leadership from {}. Privacy-first AI solutions for education and enterprise.",
            config.site_name
        ))),
        id: config.site_url.clone(),
        updated: updated.fixed_offset(),
        links: vec![
            Link {
                href: config.site_url.clone(),
                rel: "alternate".to_string(),
                ..Default::default()
            },
            Link {
                href: config.absolute_url("/atom"),
                rel: "self".to_string(),
                mime_type: Some("application/atom+xml".to_string()),
                ..Default::default()
            },
        ],
        authors: vec![team(config)],
        icon: Some(config.absolute_url("/favicon.ico")),
        logo: Some(config.absolute_url("/assets/logo-light.svg")),
        rights: Some(Text::plain(format!(
            "© {} {}. All rights reserved.",
            now.year(),
            config.site_name
        ))),
        lang: Some("en".to_string()),
        entries: posts.iter().map(|post| entry(config, post)).collect(),
        ..Default::default()
    };

    feed.to_string()
}

fn team(config: &Config) -> Person {
    Person {
        name: format!("{} Team", config.site_name),
        email: Some(config.feed_email.clone()),
        uri: Some(config.site_url.clone()),
        ..Default::default()
    }
}

fn entry(config: &Config, post: &Post) -> Entry {
    let url = config.absolute_url(&post.path());
    let date = post.date.fixed_offset();
    Entry {
        id: url.clone(),
        title: Text::plain(post.title.clone()),
        updated: date,
        published: Some(date),
        authors: vec![Person {
            name: post.author.clone(),
            email: Some(config.feed_email.clone()),
            uri: Some(config.site_url.clone()),
            ..Default::default()
        }],
        links: vec![Link {
            href: url,
            rel: "alternate".to_string(),
            ..Default::default()
        }],
        summary: Some(Text::plain(post.excerpt.clone())),
        content: Some(Content {
            value: Some(post.excerpt.clone()),
            content_type: Some("text".to_string()),
            ..Default::default()
        }),
        categories: post
            .tags
            .iter()
            .map(|tag| Category {
                term: tag.clone(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atom_syndication::Feed;
    use chrono::TimeZone;

    fn post(slug: &str, day: u32, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: format!("Title {slug}"),
            date: Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap(),
            author: "Jane Doe".to_string(),
            excerpt: format!("Summary of {slug}"),
            image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: String::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_feed_is_valid_atom() {
        let xml = atom_feed(&Config::default(), &[], now());
        let feed: Feed = xml.parse().unwrap();
        assert!(feed.entries().is_empty());
        assert_eq!(feed.title().as_str(), "McCaigs AI Blog");
        assert_eq!(feed.updated().with_timezone(&Utc), now());
    }

    #[test]
    fn entries_follow_posts() {
        let posts = vec![post("second", 2, &["AI", "Policy"]), post("first", 1, &[])];
        let xml = atom_feed(&Config::default(), &posts, now());
        let feed: Feed = xml.parse().unwrap();

        assert_eq!(feed.updated().with_timezone(&Utc), posts[0].date);
        assert_eq!(feed.entries().len(), 2);
        let first = &feed.entries()[0];
        assert_eq!(first.id(), "https://www.mccaigs.ai/blog/second");
        assert_eq!(first.links()[0].href(), "https://www.mccaigs.ai/blog/second");
        assert_eq!(first.title().as_str(), "Title second");
        assert_eq!(first.summary().map(|s| s.as_str()), Some("Summary of second"));
        let content = first.content().unwrap();
        assert_eq!(content.value(), Some("Summary of second"));
        assert_eq!(content.content_type(), Some("text"));
        assert_eq!(first.authors()[0].email(), Some("hello@mccaigs.ai"));
        assert_eq!(first.authors()[0].name(), "Jane Doe");
        let terms: Vec<_> = first.categories().iter().map(|c| c.term()).collect();
        assert_eq!(terms, ["AI", "Policy"]);
        assert!(feed.entries()[1].categories().is_empty());
    }

    #[test]
    fn same_input_same_output() {
        let posts = vec![post("a", 3, &["x"])];
        assert_eq!(
            atom_feed(&Config::default(), &posts, now()),
            atom_feed(&Config::default(), &posts, now())
        );
    }
}
