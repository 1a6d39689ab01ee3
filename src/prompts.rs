//! Prompt text sent to the generative API, and parsing of its replies.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{LogoLayout, Vibe};

/// Maximum number of tagline suggestions returned to the studio.
pub const MAX_TAGLINES: usize = 5;

/// System message for tagline generation.
pub const TAGLINE_SYSTEM_PROMPT: &str =
    "You are a creative brand copywriter. Generate short, punchy taglines for brands.";

/// Taglines offered when the chat call fails in meme mode.
pub const MEME_FALLBACK_TAGLINES: [&str; 5] = [
    "To the moon 🚀",
    "Diamond hands 💎",
    "WAGMI ✨",
    "Wen lambo?",
    "This is the way",
];

/// Taglines offered when the chat call fails.
pub const FALLBACK_TAGLINES: [&str; 5] = [
    "Innovation simplified",
    "Build different",
    "Future forward",
    "Made simple",
    "Think ahead",
];

const ICON_BASE_PROMPT: &str = "Minimal, flat, geometric icon. No letters or text, no gradients, simple silhouette, centered, white background, vector-like style.";

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("ordinal pattern is valid"));

static EDGE_QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["']|["']$"#).expect("quote pattern is valid"));

/// Art direction paragraph for a logo in the given vibe.
const fn logo_vibe_direction(vibe: Vibe) -> &'static str {
    match vibe {
        Vibe::Minimalist => "Ultra clean minimalist design. Simple typography, lots of white space, geometric precision. Think Apple, Airbnb. Modern sans-serif font. Monochromatic or very limited color palette.",
        Vibe::Futuristic => "Futuristic tech company aesthetic. Angular, sleek, modern. Think Tesla, SpaceX. Bold sans-serif, possibly with subtle geometric elements. High-tech feeling.",
        Vibe::Elegant => "Sophisticated, premium, luxury brand aesthetic. Think Chanel, Tiffany. Elegant serif or refined sans-serif typography. Classic, timeless design.",
        Vibe::Rounded => "Friendly, approachable, rounded design. Think Google, Spotify. Soft corners, organic shapes, friendly typography. Warm and welcoming.",
        Vibe::Brutalist => "Bold, raw, architectural aesthetic. Think Balenciaga, architectural firms. Heavy typography, strong geometric shapes, bold contrast.",
        Vibe::Monospace => "Technical, developer-focused aesthetic. Think GitHub, coding tools. Monospace typography, grid-based, precise, technical feeling.",
    }
}

const fn layout_direction(layout: LogoLayout) -> &'static str {
    match layout {
        LogoLayout::Horizontal => "Horizontal layout, company name in single line.",
        LogoLayout::Stacked => {
            "Stacked layout, company name stacked vertically or with tagline below."
        }
        LogoLayout::Wordmark => "Pure wordmark, focus entirely on typography treatment.",
    }
}

/// Builds the image prompt for an AI logo variant.
///
/// The brand name is repeated several times because image models tend to
/// misspell it otherwise.
pub fn logo_prompt(
    name: &str,
    tagline: Option<&str>,
    vibe: &str,
    meme_mode: bool,
    layout: LogoLayout,
) -> String {
    let mut prompt = format!(
        "Professional logo design. Company name is \"{name}\" - spell this EXACTLY as written. "
    );
    if let Some(tagline) = tagline {
        prompt.push_str(&format!("Tagline is \"{tagline}\". "));
    }
    prompt.push_str(&format!(
        "CRITICAL: The text \"{name}\" must be spelled correctly letter by letter. "
    ));

    if meme_mode {
        prompt.push_str(&format!(
            "Crypto/meme culture inspired, playful but still professional. Bold typography, crypto aesthetics, modern and clean. No emojis, no clipart. Vector-style logo design. White background. IMPORTANT: Text must be \"{name}\" spelled exactly."
        ));
        return prompt;
    }

    prompt.push_str(logo_vibe_direction(Vibe::from_key_or_default(vibe)));
    prompt.push(' ');
    prompt.push_str(layout_direction(layout));
    prompt.push_str(&format!(
        " Professional logo design, vector-style, clean, scalable. White background. No clipart, no stock imagery. REMEMBER: The company name \"{name}\" must be spelled exactly as provided."
    ));
    prompt
}

/// Builds the image prompt for a standalone brand icon.
///
/// Unknown vibes get the base description alone.
pub fn icon_prompt(vibe: &str, meme_mode: bool) -> String {
    if meme_mode {
        return format!(
            "{ICON_BASE_PROMPT} Crypto/meme culture inspired. Abstract, playful, slightly chaotic but clean."
        );
    }

    let suffix = match Vibe::from_key(vibe) {
        Some(Vibe::Minimalist) => "Ultra clean, simple geometric shapes, maximum whitespace.",
        Some(Vibe::Futuristic) => "Angular, tech-inspired, circuit-like patterns, sleek.",
        Some(Vibe::Elegant) => "Sophisticated, classic shapes, refined proportions.",
        Some(Vibe::Rounded) => "Soft curves, friendly shapes, organic forms.",
        Some(Vibe::Brutalist) => "Bold geometric shapes, strong angles, powerful forms.",
        Some(Vibe::Monospace) => "Grid-based, pixel-inspired, technical precision.",
        None => return ICON_BASE_PROMPT.to_string(),
    };

    format!("{ICON_BASE_PROMPT} {suffix}")
}

/// Builds the user message asking for tagline ideas.
pub fn tagline_prompt(name: &str, vibe: &str, meme_mode: bool) -> String {
    let tone = if meme_mode {
        "Make them satirical and crypto/startup culture aware."
    } else {
        "Avoid clichés and trademarks. Keep them professional."
    };

    format!(
        "Create {MAX_TAGLINES} short, original taglines (max 6 words) for a {vibe} brand named '{name}'. {tone} Return only the taglines, one per line."
    )
}

/// Extracts taglines from a chat reply with one tagline per line.
///
/// Drops blank lines, a leading "N." ordinal, and a quote at either end.
///
/// # Examples
///
/// ```
/// use brandkit::prompts::parse_taglines;
///
/// let parsed = parse_taglines("1. \"Build different\"\n\n2. Think ahead");
/// assert_eq!(parsed, vec!["Build different", "Think ahead"]);
/// ```
pub fn parse_taglines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let line = ORDINAL_PREFIX.replace(line, "");
            EDGE_QUOTES.replace_all(&line, "").trim().to_string()
        })
        .take(MAX_TAGLINES)
        .collect()
}

/// Fixed taglines used when suggestions cannot be generated.
pub fn fallback_taglines(meme_mode: bool) -> Vec<String> {
    let list = if meme_mode {
        &MEME_FALLBACK_TAGLINES
    } else {
        &FALLBACK_TAGLINES
    };
    list.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_prompt_mentions_name_and_tagline() {
        let prompt = logo_prompt(
            "Acme",
            Some("Build different"),
            "elegant",
            false,
            LogoLayout::Stacked,
        );
        assert!(prompt.starts_with("Professional logo design. Company name is \"Acme\""));
        assert!(prompt.contains("Tagline is \"Build different\". "));
        assert!(prompt.contains("Think Chanel, Tiffany."));
        assert!(prompt.contains("Stacked layout"));
        assert!(prompt.ends_with("must be spelled exactly as provided."));
    }

    #[test]
    fn test_logo_prompt_meme_mode() {
        let prompt = logo_prompt("Doge", None, "elegant", true, LogoLayout::Horizontal);
        assert!(!prompt.contains("Tagline"));
        assert!(prompt.contains("Crypto/meme culture inspired"));
        assert!(!prompt.contains("Chanel"));
        assert!(prompt.ends_with("Text must be \"Doge\" spelled exactly."));
    }

    #[test]
    fn test_logo_prompt_unknown_vibe_uses_minimalist() {
        let prompt = logo_prompt("Acme", None, "grunge", false, LogoLayout::Wordmark);
        assert!(prompt.contains("Think Apple, Airbnb."));
        assert!(prompt.contains("Pure wordmark"));
    }

    #[test]
    fn test_icon_prompt() {
        assert!(icon_prompt("futuristic", false).ends_with("circuit-like patterns, sleek."));
        assert!(icon_prompt("rounded", true).contains("slightly chaotic"));
        assert_eq!(icon_prompt("unknown", false), ICON_BASE_PROMPT);
    }

    #[test]
    fn test_tagline_prompt_tone() {
        let serious = tagline_prompt("Acme", "minimalist", false);
        assert!(serious.contains("for a minimalist brand named 'Acme'"));
        assert!(serious.contains("Keep them professional."));
        assert!(tagline_prompt("Acme", "minimalist", true).contains("satirical"));
    }

    #[test]
    fn test_parse_taglines_cleans_lines() {
        let reply = "1. \"Build different\"\n2. 'Think ahead'\n\n   \n3.Future forward\nMade simple";
        assert_eq!(
            parse_taglines(reply),
            vec!["Build different", "Think ahead", "Future forward", "Made simple"]
        );
    }

    #[test]
    fn test_parse_taglines_caps_at_five() {
        let reply = "a\nb\nc\nd\ne\nf\ng";
        assert_eq!(parse_taglines(reply).len(), MAX_TAGLINES);
    }

    #[test]
    fn test_fallback_taglines() {
        assert_eq!(fallback_taglines(false)[0], "Innovation simplified");
        assert_eq!(fallback_taglines(true)[2], "WAGMI ✨");
    }
}
