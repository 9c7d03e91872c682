use std::collections::HashMap;
use std::path::{Path, PathBuf};

use gray_matter::{engine::YAML, Matter};
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{Result, SiteError};
use crate::models::{parse_post_date, FrontMatter, Post};
use crate::pages::{DEFAULT_LAYOUT, DEFAULT_NOT_FOUND};
use crate::state::AppState;

/// Layout and not-found templates from `content_dir`, falling back to the
/// built-in ones for whichever file is missing.
pub async fn load_templates(content_dir: &Path) -> (String, String) {
    let layout = read_template(&content_dir.join("layout.html"), DEFAULT_LAYOUT).await;
    let not_found = read_template(&content_dir.join("not_found.html"), DEFAULT_NOT_FOUND).await;
    (layout, not_found)
}

async fn read_template(path: &Path, fallback: &str) -> String {
    match fs::read_to_string(path).await {
        Ok(template) => template,
        Err(e) => {
            warn!(path = %path.display(), "using built-in template: {}", e);
            fallback.to_string()
        }
    }
}

pub async fn reload_templates(app_state: &AppState) {
    info!("Reloading templates...");
    let (layout, not_found) = load_templates(&app_state.config.content_dir).await;
    app_state.replace_templates(layout, not_found).await;
    info!("Templates reloaded.");
}

/// The Markdown body of a legal page, or `None` when the file is absent.
pub async fn read_legal_page(dir: &Path, file_name: &str) -> Option<String> {
    let path = dir.join(file_name);
    match fs::read_to_string(&path).await {
        Ok(source) => Some(source),
        Err(e) => {
            debug!(path = %path.display(), "legal page unavailable: {}", e);
            None
        }
    }
}

/// File extensions treated as blog posts, in lookup order.
pub const CONTENT_EXTENSIONS: [&str; 2] = ["mdx", "md"];

/// Authoring template kept alongside the posts. Never listed or served.
pub const TEMPLATE_SLUG: &str = "template";

/// Every post in `dir`, newest first.
///
/// A missing directory is an empty blog. Files with broken front matter are
/// logged and skipped so one bad post cannot take the listing down. When a
/// stem exists with several extensions only the file [`get_post`] serves is
/// listed. Posts sharing a date keep directory enumeration order, which the
/// filesystem does not guarantee.
pub async fn list_posts(dir: &Path) -> Vec<Post> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), "content directory unavailable: {}", e);
            return Vec::new();
        }
    };

    // slug -> (extension rank, path)
    let mut files: HashMap<String, (usize, PathBuf)> = HashMap::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                warn!(dir = %dir.display(), "stopped reading content directory: {}", e);
                break;
            }
        };

        let path = entry.path();
        let Some((slug, rank)) = post_slug(&path) else {
            continue;
        };
        let slug = slug.to_string();
        match files.get(&slug) {
            Some((kept_rank, kept)) if *kept_rank <= rank => {
                warn!(kept = %kept.display(), "ignoring {}: same slug", path.display());
            }
            Some((_, shadowed)) => {
                warn!(kept = %path.display(), "ignoring {}: same slug", shadowed.display());
                files.insert(slug, (rank, path));
            }
            None => {
                files.insert(slug, (rank, path));
            }
        }
    }

    let mut posts = Vec::with_capacity(files.len());
    for (slug, (_, path)) in files {
        match read_post(&path, &slug).await {
            Ok(post) => posts.push(post),
            Err(e) => warn!("skipping post: {}", e),
        }
    }

    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}

/// The post whose file stem is exactly `slug`.
pub async fn get_post(dir: &Path, slug: &str) -> Option<Post> {
    if !is_valid_slug(slug) {
        return None;
    }

    for ext in CONTENT_EXTENSIONS {
        let path = dir.join(format!("{slug}.{ext}"));
        if !fs::try_exists(&path).await.unwrap_or(false) {
            continue;
        }
        return match read_post(&path, slug).await {
            Ok(post) => Some(post),
            Err(e) => {
                warn!("refusing to serve post: {}", e);
                None
            }
        };
    }
    None
}

/// Any file stem except the template, hidden files and anything that could
/// step outside the content directory.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != TEMPLATE_SLUG
        && !slug.starts_with('.')
        && !slug.contains(['/', '\\'])
        && !slug.contains("..")
}

/// Slug and extension rank for a listable content file, `None` for anything
/// else.
fn post_slug(path: &Path) -> Option<(&str, usize)> {
    let ext = path.extension()?.to_str()?;
    let rank = CONTENT_EXTENSIONS.iter().position(|known| *known == ext)?;
    let stem = path.file_stem()?.to_str()?;
    is_valid_slug(stem).then_some((stem, rank))
}

async fn read_post(path: &Path, slug: &str) -> Result<Post> {
    let source = fs::read_to_string(path).await.map_err(|source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_post(path, slug, &source)
}

pub fn parse_post(path: &Path, slug: &str, source: &str) -> Result<Post> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse::<FrontMatter>(source)
        .map_err(|e| SiteError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let front_matter = parsed.data.ok_or_else(|| SiteError::MissingFrontMatter {
        path: path.to_path_buf(),
    })?;
    let date = parse_post_date(&front_matter.date).ok_or_else(|| SiteError::InvalidDate {
        path: path.to_path_buf(),
        value: front_matter.date.clone(),
    })?;

    Ok(Post {
        slug: slug.to_string(),
        title: front_matter.title,
        date,
        author: front_matter.author,
        excerpt: front_matter.excerpt,
        image: front_matter.image.filter(|image| !image.trim().is_empty()),
        tags: front_matter.tags,
        body: parsed.content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn post_source(title: &str, date: &str) -> String {
        format!(
            "---\ntitle: \"{title}\"\ndate: \"{date}\"\nauthor: \"McCaigs AI Team\"\nexcerpt: \"About {title}\"\ntags:\n  - AI\n  - Education\n---\n\n## Overview\n\nBody of {title}.\n"
        )
    }

    fn write(dir: &TempDir, name: &str, contents: &str) {
        std_fs::write(dir.path().join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn lists_newest_first() {
        let dir = TempDir::new().unwrap();
        write(&dir, "older.mdx", &post_source("Older", "2024-06-01"));
        write(&dir, "newest.mdx", &post_source("Newest", "2025-03-01T12:00:00Z"));
        write(&dir, "middle.md", &post_source("Middle", "2025-01-15"));

        let posts = list_posts(dir.path()).await;
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["newest", "middle", "older"]);
        for pair in posts.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[tokio::test]
    async fn skips_template_and_foreign_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "welcome.mdx", &post_source("Welcome", "2025-01-01"));
        write(&dir, "template.mdx", &post_source("Template", "2025-01-02"));
        write(&dir, "notes.txt", &post_source("Notes", "2025-01-03"));
        write(&dir, "README", "not a post");
        std_fs::create_dir(dir.path().join("drafts.mdx")).unwrap();

        let posts = list_posts(dir.path()).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "welcome");
        assert_eq!(posts[0].title, "Welcome");
        assert_eq!(posts[0].tags, ["AI", "Education"]);
        assert!(posts[0].body.contains("## Overview"));
        assert!(!posts[0].body.contains("excerpt:"));
    }

    #[tokio::test]
    async fn missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(list_posts(&dir.path().join("nope")).await.is_empty());
        assert!(get_post(&dir.path().join("nope"), "welcome").await.is_none());
    }

    #[tokio::test]
    async fn malformed_posts_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "good.mdx", &post_source("Good", "2025-01-01"));
        write(&dir, "no-date.mdx", "---\ntitle: \"No date\"\nauthor: \"A\"\nexcerpt: \"E\"\n---\nbody\n");
        write(&dir, "bad-date.mdx", &post_source("Bad date", "someday"));
        write(&dir, "bare.mdx", "# Just markdown\n");

        let posts = list_posts(dir.path()).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
        assert!(get_post(dir.path(), "no-date").await.is_none());
        assert!(get_post(dir.path(), "bare").await.is_none());
    }

    #[tokio::test]
    async fn same_date_posts_are_both_listed() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.mdx", &post_source("A", "2025-02-02"));
        write(&dir, "b.mdx", &post_source("B", "2025-02-02"));

        let posts = list_posts(dir.path()).await;
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.clone()).collect();
        slugs.sort();
        // relative order of equal dates is not specified
        assert_eq!(slugs, ["a", "b"]);
    }

    #[tokio::test]
    async fn one_post_per_stem() {
        let dir = TempDir::new().unwrap();
        write(&dir, "launch.md", &post_source("MD", "2025-03-03"));
        write(&dir, "launch.mdx", &post_source("MDX", "2025-03-03"));

        let posts = list_posts(dir.path()).await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "launch");
        assert_eq!(posts[0].title, "MDX");
        assert_eq!(get_post(dir.path(), "launch").await.unwrap().title, "MDX");
    }

    #[tokio::test]
    async fn dotted_stems_are_posts() {
        let dir = TempDir::new().unwrap();
        write(&dir, "release-v1.2.mdx", &post_source("Release 1.2", "2025-04-04"));
        write(&dir, ".hidden.mdx", &post_source("Hidden", "2025-04-05"));

        let posts = list_posts(dir.path()).await;
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["release-v1.2"]);
        assert_eq!(get_post(dir.path(), "release-v1.2").await.unwrap().title, "Release 1.2");
        for slug in [".hidden", "..", "../release-v1.2", "release-v1..2"] {
            assert!(get_post(dir.path(), slug).await.is_none(), "{slug:?} should not resolve");
        }
    }

    #[tokio::test]
    async fn get_post_matches_exact_slug_only() {
        let dir = TempDir::new().unwrap();
        write(&dir, "welcome-to-the-blog.mdx", &post_source("Welcome", "2025-01-01"));
        write(&dir, "template.mdx", &post_source("Template", "2025-01-01"));

        let post = get_post(dir.path(), "welcome-to-the-blog").await.unwrap();
        assert_eq!(post.date, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(post.excerpt, "About Welcome");

        for slug in ["welcome", "welcome-to-the", "to-the-blog", "template", "", "../welcome-to-the-blog", "welcome-to-the-blog.mdx"] {
            assert!(get_post(dir.path(), slug).await.is_none(), "{slug:?} should not resolve");
        }
    }

    #[tokio::test]
    async fn templates_fall_back_to_built_ins() {
        let dir = TempDir::new().unwrap();
        write(&dir, "layout.html", "<html>{{ content }}</html>");

        let (layout, not_found) = load_templates(dir.path()).await;
        assert_eq!(layout, "<html>{{ content }}</html>");
        assert_eq!(not_found, DEFAULT_NOT_FOUND);
    }

    #[tokio::test]
    async fn legal_pages_are_optional() {
        let dir = TempDir::new().unwrap();
        write(&dir, "terms.md", "# Terms\n");
        assert_eq!(read_legal_page(dir.path(), "terms.md").await.as_deref(), Some("# Terms\n"));
        assert!(read_legal_page(dir.path(), "privacy-policy.md").await.is_none());
    }

    #[test]
    fn optional_fields_default() {
        let post = parse_post(
            Path::new("p.mdx"),
            "p",
            "---\ntitle: T\ndate: 2025-05-05\nauthor: A\nexcerpt: E\nimage: \"\"\n---\nText",
        )
        .unwrap();
        assert!(post.tags.is_empty());
        assert_eq!(post.image, None);
        assert_eq!(post.image_or("/default.png"), "/default.png");
        assert_eq!(post.path(), "/blog/p");
    }
}
