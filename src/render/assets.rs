//! Brand-kit assets: favicon and social card.

use std::fmt::Write as _;

use super::escape_xml;
use crate::models::{Palette, Vibe};

/// Product credit printed at the bottom of social cards.
const SOCIAL_CARD_CREDIT: &str = "Generated with BrandKit";

/// Renders a 32x32 favicon: the first letter of the name, white on `color`.
pub fn render_favicon(name: &str, color: &str, vibe: Vibe) -> String {
    let initial: String = name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    format!(
        r#"<svg width="32" height="32" xmlns="http://www.w3.org/2000/svg">
  <rect width="32" height="32" fill="{}"/>
  <text x="16" y="22" text-anchor="middle" font-family="system-ui" font-size="18" font-weight="{}" fill="white">{}</text>
</svg>"#,
        escape_xml(color),
        vibe.emblem_weight(),
        escape_xml(&initial)
    )
}

/// Renders a 1200x630 Open Graph style card.
pub fn render_social_card(
    name: &str,
    tagline: Option<&str>,
    palette: &Palette,
    vibe: Vibe,
) -> String {
    let mut svg = String::new();

    svg.push_str(r#"<svg width="1200" height="630" xmlns="http://www.w3.org/2000/svg">"#);
    svg.push('\n');
    svg.push_str(r#"  <rect width="1200" height="630" fill="white"/>"#);
    svg.push('\n');
    let _ = writeln!(
        svg,
        r#"  <text x="600" y="300" text-anchor="middle" font-family="system-ui" font-size="72" font-weight="{}" fill="{}" text-transform="{}">{}</text>"#,
        vibe.emblem_weight(),
        escape_xml(&palette.primary),
        vibe.headline_case(),
        escape_xml(&vibe.headline_case().apply(name))
    );

    if let Some(tagline) = tagline.map(str::trim).filter(|t| !t.is_empty()) {
        let _ = writeln!(
            svg,
            r#"  <text x="600" y="360" text-anchor="middle" font-family="system-ui" font-size="24" fill="{}">{}</text>"#,
            escape_xml(&palette.accent),
            escape_xml(tagline)
        );
    }

    let _ = writeln!(
        svg,
        r##"  <text x="600" y="580" text-anchor="middle" font-family="system-ui" font-size="16" fill="#666">{}</text>"##,
        SOCIAL_CARD_CREDIT
    );
    svg.push_str("</svg>");
    svg
}
