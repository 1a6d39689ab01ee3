//! Brand kit assembly and archive export.
//!
//! A kit bundles the chosen logos with color conversions, typography
//! guidance, a favicon, and a social card. [`write_archive`] packs a kit into
//! a zip file for download.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::branding::KIT_MANIFEST_NAME;
use crate::models::brand::non_blank;
use crate::models::{hex_to_hsl, hex_to_rgb, style_for, LogoStyle, LogoVariant, Palette, Vibe};
use crate::render;

/// Reasons a kit cannot be assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KitError {
    /// Brand name blank or no logo variants.
    MissingInput,
}

impl std::fmt::Display for KitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput => f.write_str("Brand name and variants are required"),
        }
    }
}

impl std::error::Error for KitError {}

/// Input for kit assembly, as posted by the studio.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportRequest {
    /// Brand name.
    pub brand_name: String,
    /// Logos to include.
    pub variants: Vec<LogoVariant>,
    /// Brand palette.
    pub palette: Palette,
    /// Vibe key.
    pub vibe: String,
    /// Optional tagline.
    pub tagline: Option<String>,
}

/// One color in three notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSpec {
    /// Hex as supplied.
    pub hex: String,
    /// CSS `rgb()` form.
    pub rgb: String,
    /// CSS `hsl()` form.
    pub hsl: String,
}

impl ColorSpec {
    /// Converts `hex`; malformed input converts to black.
    pub fn from_hex(hex: &str) -> Self {
        Self {
            hex: hex.to_string(),
            rgb: hex_to_rgb(hex),
            hsl: hex_to_hsl(hex),
        }
    }
}

/// Primary and accent colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitColors {
    /// Primary brand color.
    pub primary: ColorSpec,
    /// Accent color.
    pub accent: ColorSpec,
}

/// Typography guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typography {
    /// Font stack.
    pub primary: String,
    /// Light, regular, and bold weights.
    pub weights: Vec<String>,
    /// Letter-spacing.
    pub spacing: String,
    /// Text-transform keyword.
    pub case: String,
}

/// Download links for a logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadUrls {
    /// SVG download endpoint.
    pub svg: String,
}

/// A logo entry in the kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitLogo {
    /// Variant id the logo came from.
    #[serde(skip)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// SVG markup.
    pub svg: String,
    /// CSS description.
    pub style: LogoStyle,
    /// Download links.
    pub download_urls: DownloadUrls,
}

/// Generated brand assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitAssets {
    /// 32x32 SVG favicon.
    pub favicon: String,
    /// 1200x630 SVG social card.
    pub social_card: String,
}

/// Usage guidelines shipped with every kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guidelines {
    /// Clear-space advice.
    pub spacing: &'static str,
    /// Color usage advice.
    pub colors: &'static str,
    /// Background advice.
    pub backgrounds: &'static str,
    /// Minimum reproduction size.
    pub min_size: &'static str,
}

impl Default for Guidelines {
    fn default() -> Self {
        Self {
            spacing: "Maintain consistent spacing around the logo",
            colors: "Use primary color for main logo, accent for highlights",
            backgrounds: "Logo works on both light and dark backgrounds",
            min_size: "Minimum size: 24px height for digital, 0.5 inch for print",
        }
    }
}

/// The assembled brand kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandKit {
    /// Brand name.
    pub brand_name: String,
    /// Tagline, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Vibe key as requested.
    pub vibe: String,
    /// Assembly time (RFC 3339).
    pub generated_at: String,
    /// Palette conversions.
    pub colors: KitColors,
    /// Typography guidance.
    pub typography: Typography,
    /// Logos with download links.
    pub logos: Vec<KitLogo>,
    /// Favicon and social card.
    pub assets: KitAssets,
    /// Usage guidelines.
    pub guidelines: Guidelines,
}

/// Builds the SVG download URL for a text variant.
///
/// # Examples
///
/// ```
/// use brandkit::kit::svg_download_url;
///
/// assert_eq!(
///     svg_download_url("text-1", "Acme & Co", "elegant", None),
///     "/api/download/svg?variant=text-1&brand=Acme+%26+Co&vibe=elegant"
/// );
/// ```
pub fn svg_download_url(variant_id: &str, brand: &str, vibe: &str, tagline: Option<&str>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("variant", variant_id)
        .append_pair("brand", brand)
        .append_pair("vibe", vibe);
    if let Some(tagline) = tagline {
        query.append_pair("tagline", tagline);
    }
    format!("/api/download/svg?{}", query.finish())
}

impl BrandKit {
    /// Assembles a kit from an export request.
    pub fn assemble(request: &ExportRequest, generated_at: DateTime<Utc>) -> Result<Self, KitError> {
        let brand_name = non_blank(&request.brand_name).ok_or(KitError::MissingInput)?;
        if request.variants.is_empty() {
            return Err(KitError::MissingInput);
        }

        let tagline = request.tagline.as_deref().and_then(non_blank);
        let vibe = Vibe::from_key_or_default(&request.vibe);
        let profile = style_for(&request.vibe);

        let logos = request
            .variants
            .iter()
            .map(|variant| KitLogo {
                id: variant.id.clone(),
                name: variant.name.clone(),
                svg: variant.svg.clone(),
                style: variant.style.clone(),
                download_urls: DownloadUrls {
                    svg: svg_download_url(&variant.id, brand_name, vibe.key(), tagline),
                },
            })
            .collect();

        Ok(Self {
            brand_name: brand_name.to_string(),
            tagline: tagline.map(ToString::to_string),
            vibe: request.vibe.clone(),
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            colors: KitColors {
                primary: ColorSpec::from_hex(&request.palette.primary),
                accent: ColorSpec::from_hex(&request.palette.accent),
            },
            typography: Typography {
                primary: profile.font_family.to_string(),
                weights: vibe.weight_ladder().iter().map(ToString::to_string).collect(),
                spacing: profile.letter_spacing.to_string(),
                case: profile.text_case.as_css().to_string(),
            },
            logos,
            assets: KitAssets {
                favicon: render::render_favicon(brand_name, &request.palette.primary, vibe),
                social_card: render::render_social_card(brand_name, tagline, &request.palette, vibe),
            },
            guidelines: Guidelines::default(),
        })
    }
}

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveInfo {
    /// Archive size in bytes.
    pub size: u64,
    /// Hex SHA-256 of the archive.
    pub sha256: String,
    /// Paths of the entries, in write order.
    pub entries: Vec<String>,
}

/// File-system friendly form of a name (e.g., "AI Horizontal" -> "ai-horizontal").
pub fn slug(name: &str) -> String {
    let mut out = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "logo".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Entry names for the kit's logos, made unique with a numeric suffix.
fn logo_entry_names(kit: &BrandKit) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(kit.logos.len());
    for logo in &kit.logos {
        let base = slug(&logo.name);
        let mut candidate = format!("logos/{base}.svg");
        let mut n = 2;
        while names.contains(&candidate) {
            candidate = format!("logos/{base}-{n}.svg");
            n += 1;
        }
        names.push(candidate);
    }
    names
}

fn write_entries<W: Write + Seek>(kit: &BrandKit, writer: W) -> Result<(W, Vec<String>)> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::new();

    let manifest = serde_json::to_string_pretty(kit).context("Failed to serialize brand kit")?;
    let mut files: Vec<(String, &str)> = vec![(KIT_MANIFEST_NAME.to_string(), manifest.as_str())];
    for (name, logo) in logo_entry_names(kit).into_iter().zip(&kit.logos) {
        files.push((name, logo.svg.as_str()));
    }
    files.push(("favicon.svg".to_string(), kit.assets.favicon.as_str()));
    files.push(("social-card.svg".to_string(), kit.assets.social_card.as_str()));

    for (name, content) in files {
        zip.start_file(name.as_str(), options)
            .context(format!("Failed to start archive entry: {name}"))?;
        zip.write_all(content.as_bytes())
            .context(format!("Failed to write archive entry: {name}"))?;
        entries.push(name);
    }

    let writer = zip.finish().context("Failed to finish archive")?;
    Ok((writer, entries))
}

/// Suggested download name for a kit archive (e.g., "acme-brand-kit.zip").
pub fn archive_file_name(kit: &BrandKit) -> String {
    format!("{}-brand-kit.zip", slug(&kit.brand_name))
}

/// Packs a kit into an in-memory zip archive.
pub fn archive_bytes(kit: &BrandKit) -> Result<Vec<u8>> {
    let (cursor, _) = write_entries(kit, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Writes a kit as a zip archive at `path`.
///
/// The archive holds `brand-kit.json`, one SVG per logo under `logos/`,
/// `favicon.svg`, and `social-card.svg`.
pub fn write_archive(kit: &BrandKit, path: &Path) -> Result<ArchiveInfo> {
    let (cursor, entries) = write_entries(kit, Cursor::new(Vec::new()))?;
    let bytes = cursor.into_inner();

    let mut file =
        File::create(path).context(format!("Failed to create archive: {}", path.display()))?;
    file.write_all(&bytes)
        .context(format!("Failed to write archive: {}", path.display()))?;

    let sha256 = format!("{:x}", Sha256::digest(&bytes));
    info!("Wrote brand kit archive {} ({} bytes)", path.display(), bytes.len());

    Ok(ArchiveInfo {
        size: bytes.len() as u64,
        sha256,
        entries,
    })
}
