//! Google News sitemap.
//!
//! News crawlers only consider articles from the last two years, and only
//! the last 48 hours matter for Top Stories, so recent posts are advertised
//! as `hourly` / `1.0` and everything else inside the window as
//! `daily` / `0.9`.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::{finish, new_document, push_cdata, push_text, SITEMAP_NS};
use crate::config::Config;
use crate::error::Result;
use crate::models::Post;

pub const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

const RECENT_HOURS: i64 = 48;
const WINDOW_DAYS: i64 = 2 * 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Recent,
    Archive,
}

impl Freshness {
    pub fn of(date: DateTime<Utc>, now: DateTime<Utc>) -> Option<Freshness> {
        if date >= now - Duration::hours(RECENT_HOURS) {
            Some(Freshness::Recent)
        } else if date >= now - Duration::days(WINDOW_DAYS) {
            Some(Freshness::Archive)
        } else {
            None
        }
    }

    pub fn changefreq(self) -> &'static str {
        match self {
            Freshness::Recent => "hourly",
            Freshness::Archive => "daily",
        }
    }

    pub fn priority(self) -> &'static str {
        match self {
            Freshness::Recent => "1.0",
            Freshness::Archive => "0.9",
        }
    }
}

pub fn news_sitemap(config: &Config, posts: &[Post], now: DateTime<Utc>) -> Result<String> {
    let mut writer = new_document()?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:news", NEWS_NS));
    writer.write_event(Event::Start(urlset))?;

    for post in posts {
        let Some(freshness) = Freshness::of(post.date, now) else {
            continue;
        };
        let published = post.date.to_rfc3339_opts(SecondsFormat::Millis, true);

        writer.write_event(Event::Start(BytesStart::new("url")))?;
        push_text(&mut writer, "loc", &config.absolute_url(&post.path()))?;

        writer.write_event(Event::Start(BytesStart::new("news:news")))?;
        writer.write_event(Event::Start(BytesStart::new("news:publication")))?;
        push_text(&mut writer, "news:name", &config.site_name)?;
        push_text(&mut writer, "news:language", "en")?;
        writer.write_event(Event::End(BytesEnd::new("news:publication")))?;
        push_text(&mut writer, "news:publication_date", &published)?;
        push_cdata(&mut writer, "news:title", &post.title)?;
        if !post.tags.is_empty() {
            push_text(&mut writer, "news:keywords", &post.tags.join(", "))?;
        }
        writer.write_event(Event::End(BytesEnd::new("news:news")))?;

        push_text(&mut writer, "lastmod", &published)?;
        push_text(&mut writer, "changefreq", freshness.changefreq())?;
        push_text(&mut writer, "priority", freshness.priority())?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(finish(writer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 18, 12, 0, 0).unwrap()
    }

    fn post(slug: &str, date: DateTime<Utc>, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            title: format!("{slug} title"),
            date,
            author: "A".to_string(),
            excerpt: "E".to_string(),
            image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            body: String::new(),
        }
    }

    /// The `<url>` block for `slug`, if present.
    fn url_block<'a>(xml: &'a str, slug: &str) -> Option<&'a str> {
        let loc = format!("<loc>https://www.mccaigs.ai/blog/{slug}</loc>");
        let start = xml.find(&loc)?;
        let end = xml[start..].find("</url>")? + start;
        Some(&xml[start..end])
    }

    #[test]
    fn applies_recency_and_window() {
        let now = now();
        let posts = vec![
            post("now", now, &["AI"]),
            post("hour-ago", now - Duration::hours(1), &[]),
            post("three-days", now - Duration::days(3), &["Policy", "Schools"]),
            post("three-years", now - Duration::days(3 * 365), &[]),
        ];
        let xml = news_sitemap(&Config::default(), &posts, now).unwrap();

        for slug in ["now", "hour-ago"] {
            let block = url_block(&xml, slug).unwrap();
            assert!(block.contains("<changefreq>hourly</changefreq>"), "{block}");
            assert!(block.contains("<priority>1.0</priority>"), "{block}");
        }
        let old = url_block(&xml, "three-days").unwrap();
        assert!(old.contains("<changefreq>daily</changefreq>"));
        assert!(old.contains("<priority>0.9</priority>"));
        assert!(old.contains("<news:keywords>Policy, Schools</news:keywords>"));
        assert!(url_block(&xml, "three-years").is_none());
        assert!(!url_block(&xml, "hour-ago").unwrap().contains("news:keywords"));
    }

    #[test]
    fn boundaries() {
        let now = now();
        assert_eq!(Freshness::of(now - Duration::hours(48), now), Some(Freshness::Recent));
        assert_eq!(
            Freshness::of(now - Duration::hours(48) - Duration::seconds(1), now),
            Some(Freshness::Archive)
        );
        assert_eq!(Freshness::of(now - Duration::days(730), now), Some(Freshness::Archive));
        assert_eq!(Freshness::of(now - Duration::days(731), now), None);
        assert_eq!(Freshness::of(now + Duration::days(1), now), Some(Freshness::Recent));
    }

    #[test]
    fn entry_details() {
        let now = now();
        let mut p = post("launch", Utc.with_ymd_and_hms(2025, 11, 17, 8, 30, 0).unwrap(), &["AI"]);
        p.title = "Launch & <beyond>".to_string();
        let xml = news_sitemap(&Config::default(), &[p], now).unwrap();
        assert!(xml.contains("<news:publication_date>2025-11-17T08:30:00.000Z</news:publication_date>"));
        assert!(xml.contains("<lastmod>2025-11-17T08:30:00.000Z</lastmod>"));
        assert!(xml.contains("<news:title><![CDATA[Launch & <beyond>]]></news:title>"));
        assert!(xml.contains("<news:name>McCaigs AI</news:name><news:language>en</news:language>"));
    }

    #[test]
    fn empty_list_is_an_empty_urlset() {
        let xml = news_sitemap(&Config::default(), &[], now()).unwrap();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\" xmlns:news=\"http://www.google.com/schemas/sitemap-news/0.9\"></urlset>"
        );
    }
}
