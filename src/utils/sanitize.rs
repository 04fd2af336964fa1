//! HTML sanitization for user-supplied free text.
//!
//! Donation content, names and registration notes may carry light markup. Only
//! a fixed set of formatting tags and attributes survives; script-bearing
//! markup is dropped together with its content, every other disallowed tag is
//! unwrapped so its text stays visible.
//!
//! Content is dropped for `script style iframe noscript noembed noframes xmp
//! textarea title svg math template video audio head`.
//!
//! # Allowed Markup
//!
//! - Text: `p br strong em u s del code pre`
//! - Headings: `h1`-`h6`
//! - Lists: `ul ol li`
//! - Links and images: `a img`
//! - Blocks and tables: `blockquote table thead tbody tr th td div span hr`
//! - Attributes: `href src alt title class id target rel width height`
//! - URL schemes: `http https ftp ftps mailto tel callto sms cid xmpp`, plus relative URLs

use ammonia::Builder;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

const ALLOWED_TAGS: &[&str] = &[
    // text
    "p", "br", "strong", "em", "u", "s", "del", "code", "pre",
    // headings
    "h1", "h2", "h3", "h4", "h5", "h6",
    // lists
    "ul", "ol", "li",
    // links and images
    "a", "img",
    // blocks and tables
    "blockquote", "table", "thead", "tbody", "tr", "th", "td",
    "div", "span", "hr",
];

const ALLOWED_ATTRIBUTES: &[&str] = &[
    "href", "src", "alt", "title", "class", "id", "target", "rel", "width", "height",
];

// Dropped together with everything inside them.
const CONTENT_STRIPPED_TAGS: &[&str] = &[
    "script", "style", "iframe", "noscript", "noembed", "noframes", "xmp", "textarea",
    "title", "svg", "math", "template", "video", "audio", "head",
];

const ALLOWED_URL_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "tel", "callto", "sms", "cid", "xmpp",
];

static SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .clean_content_tags(CONTENT_STRIPPED_TAGS.iter().copied().collect::<HashSet<_>>())
        .tag_attributes(HashMap::new())
        .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect::<HashSet<_>>())
        .url_schemes(ALLOWED_URL_SCHEMES.iter().copied().collect::<HashSet<_>>())
        // `rel` is an allowed attribute, so ammonia must not manage it.
        .link_rel(None);
    builder
});

/// Strips disallowed markup from `content` and trims the result.
///
/// Empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use donation_service::utils::sanitize::sanitize_content;
///
/// assert_eq!(sanitize_content("<p onclick=\"x()\">Hi</p>"), "<p>Hi</p>");
/// assert_eq!(sanitize_content("<script>alert(1)</script>"), "");
/// ```
pub fn sanitize_content(content: &str) -> String {
    if content.trim().is_empty() {
        return String::new();
    }

    SANITIZER.clean(content).to_string().trim().to_string()
}

/// Returns `true` if `content` still has something left after sanitization.
pub fn is_valid_content(content: &str) -> bool {
    !sanitize_content(content).is_empty()
}

/// Sanitizes an optional field.
///
/// `None` stays `None`; `Some` becomes `Some("")` when nothing survives, so the
/// caller can decide whether that is an error.
pub fn sanitize_optional(content: Option<&str>) -> Option<String> {
    content.map(sanitize_content)
}
