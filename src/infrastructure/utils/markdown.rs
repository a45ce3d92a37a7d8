use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};
use ammonia::{Builder, UrlRelative};

use crate::domain::toc::{AnchorRegistry, TableOfContents, TocEntry};

const WORDS_PER_MINUTE: usize = 200;
const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

#[derive(Debug, Clone)]
pub struct RenderedMarkdown {
    pub html: String,
    pub toc: TableOfContents,
}

/// Converts Markdown content to sanitized HTML, giving every heading a unique
/// anchor id and collecting the headings into a table of contents.
pub fn render_markdown(markdown: &str) -> RenderedMarkdown {
    let parser = Parser::new_ext(markdown, Options::all());
    let mut events: Vec<Event<'_>> = parser.collect();

    let mut anchors = AnchorRegistry::default();
    let mut toc = TableOfContents::default();

    for i in 0..events.len() {
        let (level, explicit_id) = match &events[i] {
            Event::Start(Tag::Heading { level, id, .. }) => {
                (*level, id.as_ref().map(|s| s.to_string()))
            }
            _ => continue,
        };

        let text = heading_text(&events[i + 1..]);
        let anchor = anchors.assign(explicit_id.as_deref(), &text);

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(anchor.clone()));
        }

        toc.push(TocEntry { id: anchor, text, level: level as u8 });
    }

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, events.into_iter());

    RenderedMarkdown {
        html: sanitize_html(&raw_html),
        toc,
    }
}

/// Converts Markdown content to sanitized HTML to prevent XSS attacks.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    render_markdown(markdown).html
}

/// Sanitizes rendered HTML, keeping heading anchors and in-page links.
pub fn sanitize_html(content: &str) -> String {
    let mut builder = Builder::default();
    builder
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::PassThrough);
    for tag in HEADING_TAGS {
        builder.add_tag_attributes(tag, &["id"]);
    }
    builder.clean(content).to_string()
}

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_time_minutes(markdown: &str) -> u32 {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_string()
}
