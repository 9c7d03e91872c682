//! `sitemap.xml` and `robots.txt`.

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::{finish, new_document, push_text, SITEMAP_NS};
use crate::catalogue::{BRANDS, CASE_STUDIES, LEGAL_PAGES, MODELS, SECTORS};
use crate::config::Config;
use crate::error::Result;
use crate::models::Post;

const STATIC_PATHS: &[&str] = &["/", "/about", "/what-we-do", "/brands", "/blog", "/contact"];

fn priority(path: &str) -> &'static str {
    match path {
        "/" | "/blog" => "1.0",
        _ => "0.9",
    }
}

/// Every page of the site, blog posts included regardless of age.
pub fn site_sitemap(config: &Config, posts: &[Post], now: DateTime<Utc>) -> Result<String> {
    let mut pages: Vec<(String, DateTime<Utc>)> = STATIC_PATHS
        .iter()
        .map(|path| (path.to_string(), now))
        .collect();
    pages.extend(BRANDS.iter().map(|b| (format!("/brands/{}", b.slug), now)));
    pages.extend(SECTORS.iter().map(|s| (format!("/what-we-do/{}", s.slug), now)));
    pages.extend(CASE_STUDIES.iter().map(|c| (format!("/case-studies/{}", c.slug), now)));
    pages.extend(MODELS.iter().map(|m| (format!("/models/{}", m.slug), now)));
    pages.extend(LEGAL_PAGES.iter().map(|p| (p.path(), now)));
    pages.extend(posts.iter().map(|p| (p.path(), p.date)));

    let mut writer = new_document()?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    for (path, lastmod) in &pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        push_text(&mut writer, "loc", &config.absolute_url(path))?;
        push_text(
            &mut writer,
            "lastmod",
            &lastmod.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        push_text(&mut writer, "changefreq", "daily")?;
        push_text(&mut writer, "priority", priority(path))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    Ok(finish(writer))
}

pub fn robots_txt(config: &Config) -> String {
    format!(
        "User-agent: *\nAllow: /\n\n\
         User-agent: GPTBot\nDisallow: /private\n\n\
         User-agent: Googlebot-News\nAllow: /\n\n\
         Host: {site}\n\n\
         Sitemap: {sitemap}\n\
         Sitemap: {news}\n",
        site = config.site_url,
        sitemap = config.absolute_url("/sitemap.xml"),
        news = config.absolute_url("/news-sitemap.xml"),
    )
}
