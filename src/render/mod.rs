//! SVG template composition.
//!
//! Every renderer returns a self-contained SVG document as a `String`.
//! User-supplied text is always passed through [`escape_xml`] before it is
//! interpolated into markup.

pub mod assets;
pub mod icon;
pub mod logo;

pub use assets::{render_favicon, render_social_card};
pub use icon::render_fallback_icon;
pub use logo::{render_text_logo, wrap_image_url};

/// Escapes text for use in SVG character data and attribute values.
///
/// # Examples
///
/// ```
/// use brandkit::render::escape_xml;
///
/// assert_eq!(escape_xml("R&D <Labs>"), "R&amp;D &lt;Labs&gt;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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
