//! Markdown to HTML for blog bodies and legal pages.
//!
//! Raw HTML in the source is emitted verbatim. Content is authored in-house
//! and committed to the repository; nothing user-submitted reaches this
//! renderer, and it must stay that way because the output is not sanitised.

use std::collections::HashMap;

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

pub fn render_markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, markdown_options());
    let events = anchor_headings(parser);

    let mut html_out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut html_out, events.into_iter());
    html_out
}

/// Hands out heading ids for one document. Same text, same id; repeats get
/// `-1`, `-2`, ... appended.
#[derive(Default)]
pub struct HeadingSlugger {
    seen: HashMap<String, usize>,
}

impl HeadingSlugger {
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while self.seen.contains_key(&candidate) {
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            candidate = format!("{}-{}", base, count);
        }
        self.seen.insert(candidate.clone(), 0);
        candidate
    }
}

/// Lowercases, keeps letters, digits, `-` and `_`, turns spaces into `-`
/// and drops everything else.
fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            slug.extend(ch.to_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        }
    }
    slug
}

/// Gives each heading an id and wraps its contents in a link to itself.
fn anchor_headings<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut slugger = HeadingSlugger::default();
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut heading: Option<Vec<Event<'a>>> = None;
    let mut heading_text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                heading_text.clear();
                heading = Some(vec![event]);
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some(mut buffered) = heading.take() else {
                    events.push(event);
                    continue;
                };
                if heading_text.trim().is_empty() {
                    events.append(&mut buffered);
                    events.push(event);
                    continue;
                }

                let id = slugger.slug(&heading_text);
                let mut inner = buffered.split_off(1);
                if let Some(Event::Start(Tag::Heading { level, classes, attrs, .. })) = buffered.pop() {
                    events.push(Event::Start(Tag::Heading {
                        level,
                        id: Some(CowStr::from(id.clone())),
                        classes,
                        attrs,
                    }));
                }
                events.push(Event::InlineHtml(CowStr::from(format!("<a href=\"#{}\">", id))));
                events.append(&mut inner);
                events.push(Event::InlineHtml(CowStr::Borrowed("</a>")));
                events.push(event);
            }
            Event::Text(ref text) | Event::Code(ref text) if heading.is_some() => {
                heading_text.push_str(text);
                if let Some(buffered) = heading.as_mut() {
                    buffered.push(event);
                }
            }
            other => match heading.as_mut() {
                Some(buffered) => buffered.push(other),
                None => events.push(other),
            },
        }
    }

    events
}
