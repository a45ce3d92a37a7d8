//! `sitemap.xml` and `robots.txt` bodies.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::entities::post::Post;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFreq {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
    pub change_freq: ChangeFreq,
    pub priority: f32,
}

const STATIC_PAGES: [(&str, ChangeFreq, f32); 4] = [
    ("", ChangeFreq::Monthly, 1.0),
    ("/blog", ChangeFreq::Daily, 0.9),
    ("/projects", ChangeFreq::Monthly, 0.8),
    ("/about", ChangeFreq::Monthly, 0.7),
];

/// Static pages first, then one weekly entry per published post.
pub fn sitemap_entries(site_url: &str, posts: &[Post], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = site_url.trim_end_matches('/');

    let statics = STATIC_PAGES.iter().map(|(path, change_freq, priority)| SitemapEntry {
        loc: format!("{base}{path}"),
        last_modified: now,
        change_freq: *change_freq,
        priority: *priority,
    });

    let posts = posts.iter().filter(|p| p.published).map(|post| SitemapEntry {
        loc: format!("{base}{}", post.path()),
        last_modified: post.updated_at,
        change_freq: ChangeFreq::Weekly,
        priority: 0.8,
    });

    statics.chain(posts).collect()
}

pub fn build_sitemap(site_url: &str, posts: &[Post], now: DateTime<Utc>) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in sitemap_entries(site_url, posts, now) {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            escape_xml(&entry.loc),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
            entry.change_freq.as_str(),
            entry.priority,
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn build_robots(site_url: &str) -> String {
    format!(
        "User-Agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
