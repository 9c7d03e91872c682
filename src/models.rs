use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

/// Header block of a blog post file.
#[derive(Deserialize, Debug, Clone)]
pub struct FrontMatter {
    pub title: String,
    pub date: String,
    pub author: String,
    pub excerpt: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub author: String,
    pub excerpt: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub body: String,
}

impl Post {
    pub fn image_or<'a>(&'a self, default_image: &'a str) -> &'a str {
        self.image.as_deref().unwrap_or(default_image)
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Accepts RFC 3339, naive date-times (read as UTC) and plain dates
/// (midnight UTC).
pub fn parse_post_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
