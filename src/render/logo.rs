//! Typographic logo templates.

use std::fmt::Write as _;

use super::escape_xml;
use crate::models::{style_for, LogoLayout};

/// Fill color of the brand name in text logos.
const NAME_FILL: &str = "#1a1a1a";

/// Fill color of the tagline in stacked logos.
const TAGLINE_FILL: &str = "#666";

/// Renders a text-only logo for `name` in the given vibe and layout.
///
/// The vibe's text case is baked into the name. A stacked logo with a
/// non-blank tagline puts the uppercased tagline under a centered name; every
/// other combination renders the name on a single line.
///
/// # Examples
///
/// ```
/// use brandkit::models::LogoLayout;
/// use brandkit::render::render_text_logo;
///
/// let svg = render_text_logo("Acme", None, "futuristic", LogoLayout::Horizontal);
/// assert!(svg.contains("ACME"));
/// assert!(svg.contains("Space Grotesk, sans-serif"));
/// ```
pub fn render_text_logo(
    name: &str,
    tagline: Option<&str>,
    vibe: &str,
    layout: LogoLayout,
) -> String {
    let profile = style_for(vibe);
    let display_name = escape_xml(&profile.text_case.apply(name));
    let font_family = escape_xml(profile.font_family);
    let tagline = tagline.map(str::trim).filter(|t| !t.is_empty());

    let mut svg = String::new();

    match (layout, tagline) {
        (LogoLayout::Stacked, Some(tagline)) => {
            svg.push_str(r#"<svg width="300" height="120" xmlns="http://www.w3.org/2000/svg">"#);
            svg.push('\n');
            let _ = writeln!(
                svg,
                r#"  <text x="150" y="60" text-anchor="middle" font-family="{}" font-size="36" font-weight="{}" fill="{}" letter-spacing="{}">{}</text>"#,
                font_family, profile.font_weight, NAME_FILL, profile.letter_spacing, display_name
            );
            let _ = writeln!(
                svg,
                r#"  <text x="150" y="85" text-anchor="middle" font-family="{}" font-size="14" fill="{}" letter-spacing="0.1em">{}</text>"#,
                font_family,
                TAGLINE_FILL,
                escape_xml(&tagline.to_uppercase())
            );
        }
        _ => {
            svg.push_str(r#"<svg width="350" height="80" xmlns="http://www.w3.org/2000/svg">"#);
            svg.push('\n');
            let _ = writeln!(
                svg,
                r#"  <text x="20" y="50" font-family="{}" font-size="42" font-weight="{}" fill="{}" letter-spacing="{}">{}</text>"#,
                font_family, profile.font_weight, NAME_FILL, profile.letter_spacing, display_name
            );
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Wraps a remote image URL in a 400x200 SVG so it displays like the text logos.
pub fn wrap_image_url(url: &str) -> String {
    format!(
        r#"<svg width="400" height="200" xmlns="http://www.w3.org/2000/svg">
  <image href="{}" x="0" y="0" width="400" height="200" preserveAspectRatio="xMidYMid meet"/>
</svg>"#,
        escape_xml(url)
    )
}
