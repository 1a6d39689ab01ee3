//! Geometric glyphs used when AI icon generation is unavailable.

use crate::models::Vibe;

const MEME_ICON: &str = r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <circle cx="32" cy="32" r="20" fill="none" stroke="#000" stroke-width="3"/>
  <path d="M20 32 L32 20 L44 32 L32 44 Z" fill="#000"/>
</svg>"##;

/// Returns a 64x64 stand-in icon for the vibe key.
///
/// Unknown vibes get the minimalist circle.
pub fn render_fallback_icon(vibe: &str, meme_mode: bool) -> &'static str {
    if meme_mode {
        return MEME_ICON;
    }

    match Vibe::from_key_or_default(vibe) {
        Vibe::Minimalist => {
            r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <circle cx="32" cy="32" r="24" fill="none" stroke="#000" stroke-width="2"/>
</svg>"##
        }
        Vibe::Futuristic => {
            r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <polygon points="32,8 56,32 32,56 8,32" fill="none" stroke="#000" stroke-width="2"/>
</svg>"##
        }
        Vibe::Elegant => {
            r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <ellipse cx="32" cy="32" rx="20" ry="28" fill="none" stroke="#000" stroke-width="2"/>
</svg>"##
        }
        Vibe::Rounded => {
            r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <rect x="12" y="12" width="40" height="40" rx="20" fill="none" stroke="#000" stroke-width="2"/>
</svg>"##
        }
        Vibe::Brutalist => {
            r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <rect x="12" y="12" width="40" height="40" fill="#000"/>
</svg>"##
        }
        Vibe::Monospace => {
            r##"<svg width="64" height="64" xmlns="http://www.w3.org/2000/svg">
  <rect x="16" y="16" width="8" height="8" fill="#000"/>
  <rect x="40" y="16" width="8" height="8" fill="#000"/>
  <rect x="16" y="40" width="8" height="8" fill="#000"/>
  <rect x="40" y="40" width="8" height="8" fill="#000"/>
  <rect x="28" y="28" width="8" height="8" fill="#000"/>
</svg>"##
        }
    }
}
