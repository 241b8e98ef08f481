//! RSS 2.0 feed
//!
//! Items carry metadata and the excerpt only; post bodies never appear in
//! the feed.

use chrono::{DateTime, Utc};

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{day_rfc822, rfc822, Helpers};

/// Render the feed document for posts in their display order
pub fn render_feed(config: &SiteConfig, posts: &[Post], build_time: &DateTime<Utc>) -> String {
    let helpers = Helpers::new(config);

    let mut feed = String::new();
    feed.push_str(r#"<?xml version="1.0" encoding="UTF-8" ?>"#);
    feed.push('\n');
    feed.push_str(r#"<rss version="2.0">"#);
    feed.push('\n');
    feed.push_str("<channel>\n");
    feed.push_str(&format!("    <title>{}</title>\n", escape_xml(&config.title)));
    feed.push_str(&format!("    <link>{}</link>\n", escape_xml(config.base_url())));
    feed.push_str(&format!(
        "    <description>{}</description>\n",
        escape_xml(&config.description)
    ));
    feed.push_str(&format!(
        "    <language>{}</language>\n",
        escape_xml(&config.language)
    ));
    feed.push_str(&format!(
        "    <lastBuildDate>{}</lastBuildDate>\n",
        rfc822(build_time)
    ));

    for post in posts {
        let link = escape_xml(&helpers.post_url(post));
        feed.push_str("    <item>\n");
        feed.push_str(&format!("        <title>{}</title>\n", cdata(&post.title)));
        feed.push_str(&format!("        <link>{}</link>\n", link));
        feed.push_str(&format!("        <guid>{}</guid>\n", link));
        // Undated posts have no meaningful publish date
        if let Some(day) = post.date.to_naive() {
            feed.push_str(&format!("        <pubDate>{}</pubDate>\n", day_rfc822(day)));
        }
        feed.push_str(&format!(
            "        <description>{}</description>\n",
            cdata(&post.excerpt)
        ));
        feed.push_str("    </item>\n");
    }

    feed.push_str("</channel>\n");
    feed.push_str("</rss>\n");
    feed
}

/// Wrap text in a CDATA section, splitting any `]]>` it contains
fn cdata(s: &str) -> String {
    let clean = strip_invalid_xml_chars(s);
    format!("<![CDATA[{}]]>", clean.replace("]]>", "]]]]><![CDATA[>"))
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    strip_invalid_xml_chars(s)
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Strip invalid XML control characters (except tab, newline, carriage return)
/// XML 1.0 only allows: #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
fn strip_invalid_xml_chars(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c == '\t'
                || c == '\n'
                || c == '\r'
                || ('\u{0020}'..='\u{D7FF}').contains(&c)
                || ('\u{E000}'..='\u{FFFD}').contains(&c)
                || ('\u{10000}'..='\u{10FFFF}').contains(&c)
        })
        .collect()
}
