//! Static catalog of canvas format presets.
//!
//! Presets are plain data tables, one per [`PresetCategory`]. The same size
//! can appear in several categories under different names (1920x1080 is
//! "Full HD", "Widescreen" and "1080p"), so a preset is identified by its
//! category plus its name.

use crate::{Dimensions, SelectionError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A named canvas size shown as a card in the format gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatPreset {
    /// Card title, unique within its category
    pub name: &'static str,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Optional subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// Icon key, opaque to everything but the renderer
    pub icon: &'static str,
}

impl FormatPreset {
    const fn new(name: &'static str, width: u32, height: u32, icon: &'static str) -> Self {
        Self {
            name,
            width,
            height,
            description: None,
            icon,
        }
    }

    const fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Size of this preset.
    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// Gallery tabs of the format dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    /// General-purpose screen sizes
    Common,
    /// Social network posts, stories and banners
    Social,
    /// Slide decks
    Presentation,
    /// Paper sizes at 300 DPI
    Print,
    /// Video frames
    Video,
}

impl PresetCategory {
    /// All categories in gallery order.
    pub const ALL: [PresetCategory; 5] = [
        PresetCategory::Common,
        PresetCategory::Social,
        PresetCategory::Presentation,
        PresetCategory::Print,
        PresetCategory::Video,
    ];

    /// Stable lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            PresetCategory::Common => "common",
            PresetCategory::Social => "social",
            PresetCategory::Presentation => "presentation",
            PresetCategory::Print => "print",
            PresetCategory::Video => "video",
        }
    }

    /// Tab title.
    pub fn title(&self) -> &'static str {
        match self {
            PresetCategory::Common => "Common",
            PresetCategory::Social => "Social Media",
            PresetCategory::Presentation => "Presentation",
            PresetCategory::Print => "Print",
            PresetCategory::Video => "Video",
        }
    }

    /// Presets of this category in display order.
    pub fn presets(&self) -> &'static [FormatPreset] {
        match self {
            PresetCategory::Common => COMMON,
            PresetCategory::Social => SOCIAL,
            PresetCategory::Presentation => PRESENTATION,
            PresetCategory::Print => PRINT,
            PresetCategory::Video => VIDEO,
        }
    }

    /// True when `preset` is one of this category's entries.
    pub fn contains(&self, preset: &FormatPreset) -> bool {
        self.presets().iter().any(|p| p == preset)
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for PresetCategory {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        PresetCategory::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| SelectionError::UnknownCategory(s.to_string()))
    }
}

static COMMON: &[FormatPreset] = &[
    FormatPreset::new("Full HD", 1920, 1080, "monitor").described("Standard widescreen"),
    FormatPreset::new("4K UHD", 3840, 2160, "monitor").described("Ultra high definition"),
    FormatPreset::new("HD", 1280, 720, "monitor"),
    FormatPreset::new("Square", 1080, 1080, "square"),
    FormatPreset::new("Standard", 1024, 768, "monitor").described("Classic 4:3 screen"),
];

static SOCIAL: &[FormatPreset] = &[
    FormatPreset::new("Instagram Post", 1080, 1080, "instagram").described("Square feed post"),
    FormatPreset::new("Instagram Portrait", 1080, 1350, "instagram")
        .described("Portrait feed post"),
    FormatPreset::new("Instagram Story", 1080, 1920, "instagram").described("Stories and Reels"),
    FormatPreset::new("Facebook Post", 1200, 630, "facebook"),
    FormatPreset::new("Facebook Cover", 820, 312, "facebook").described("Page cover photo"),
    FormatPreset::new("Twitter Post", 1600, 900, "twitter"),
    FormatPreset::new("Twitter Header", 1500, 500, "twitter").described("Profile banner"),
    FormatPreset::new("LinkedIn Post", 1200, 627, "linkedin"),
    FormatPreset::new("Pinterest Pin", 1000, 1500, "pinterest"),
    FormatPreset::new("YouTube Thumbnail", 1280, 720, "youtube"),
];

static PRESENTATION: &[FormatPreset] = &[
    FormatPreset::new("Widescreen", 1920, 1080, "presentation").described("16:9 slides"),
    FormatPreset::new("Standard", 1024, 768, "presentation").described("4:3 slides"),
    FormatPreset::new("Widescreen 16:10", 1920, 1200, "presentation"),
    FormatPreset::new("Square Slide", 1080, 1080, "presentation"),
];

static PRINT: &[FormatPreset] = &[
    FormatPreset::new("A4 Portrait", 2480, 3508, "file").described("210 x 297 mm at 300 DPI"),
    FormatPreset::new("A4 Landscape", 3508, 2480, "file").described("297 x 210 mm at 300 DPI"),
    FormatPreset::new("A5 Portrait", 1748, 2480, "file").described("148 x 210 mm at 300 DPI"),
    FormatPreset::new("US Letter", 2550, 3300, "file").described("8.5 x 11 in at 300 DPI"),
    FormatPreset::new("Business Card", 1050, 600, "card").described("3.5 x 2 in at 300 DPI"),
    FormatPreset::new("Poster 18x24", 5400, 7200, "file").described("18 x 24 in at 300 DPI"),
];

static VIDEO: &[FormatPreset] = &[
    FormatPreset::new("1080p", 1920, 1080, "video").described("Full HD video"),
    FormatPreset::new("720p", 1280, 720, "video"),
    FormatPreset::new("4K", 3840, 2160, "video"),
    FormatPreset::new("Vertical Video", 1080, 1920, "smartphone")
        .described("Shorts, Reels, TikTok"),
    FormatPreset::new("Square Video", 1080, 1080, "video"),
];

/// Iterate over every category with its presets.
pub fn catalog() -> impl Iterator<Item = (PresetCategory, &'static [FormatPreset])> {
    PresetCategory::ALL.into_iter().map(|c| (c, c.presets()))
}

/// Find a preset by its exact name within a category.
pub fn find_preset(category: PresetCategory, name: &str) -> Option<&'static FormatPreset> {
    category.presets().iter().find(|p| p.name == name)
}

/// Find a preset by a loosely typed name ("instagram post", "InstagramPost").
///
/// Case, spaces and punctuation are ignored.
pub fn lookup_preset(category: PresetCategory, query: &str) -> Option<&'static FormatPreset> {
    let key = normalize_name(query);
    category
        .presets()
        .iter()
        .find(|p| normalize_name(p.name) == key)
}

/// Every catalog preset whose size equals `dims`, in gallery order.
pub fn presets_matching(dims: Dimensions) -> Vec<(PresetCategory, &'static FormatPreset)> {
    catalog()
        .flat_map(|(category, presets)| presets.iter().map(move |p| (category, p)))
        .filter(|(_, p)| p.dimensions() == dims)
        .collect()
}

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique_within_category() {
        for (category, presets) in catalog() {
            let names: HashSet<_> = presets.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), presets.len(), "duplicate name in {}", category);
        }
    }

    #[test]
    fn test_all_presets_positive() {
        for (_, presets) in catalog() {
            for preset in presets {
                assert!(preset.dimensions().is_positive(), "{} has a zero side", preset.name);
            }
        }
    }

    #[test]
    fn test_instagram_post() {
        let preset = find_preset(PresetCategory::Social, "Instagram Post").unwrap();
        assert_eq!((preset.width, preset.height), (1080, 1080));
        assert!(PresetCategory::Social.contains(preset));
        assert!(!PresetCategory::Print.contains(preset));
    }

    #[test]
    fn test_find_preset_is_exact() {
        assert!(find_preset(PresetCategory::Social, "instagram post").is_none());
        assert!(find_preset(PresetCategory::Common, "Instagram Post").is_none());
    }

    #[test]
    fn test_lookup_preset_is_loose() {
        let preset = lookup_preset(PresetCategory::Social, "instagram-post").unwrap();
        assert_eq!(preset.name, "Instagram Post");
        let preset = lookup_preset(PresetCategory::Print, "a4portrait").unwrap();
        assert_eq!(preset.width, 2480);
    }

    #[test]
    fn test_same_size_in_several_categories() {
        let matches = presets_matching(Dimensions::new(1920, 1080));
        let names: Vec<_> = matches.iter().map(|(c, p)| (*c, p.name)).collect();
        assert_eq!(
            names,
            vec![
                (PresetCategory::Common, "Full HD"),
                (PresetCategory::Presentation, "Widescreen"),
                (PresetCategory::Video, "1080p"),
            ]
        );
    }

    #[test]
    fn test_same_name_in_several_categories() {
        let common = find_preset(PresetCategory::Common, "Standard").unwrap();
        let slides = find_preset(PresetCategory::Presentation, "Standard").unwrap();
        assert_eq!(common.dimensions(), slides.dimensions());
        assert_ne!(common, slides);
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Social".parse::<PresetCategory>().unwrap(), PresetCategory::Social);
        assert_eq!(" print ".parse::<PresetCategory>().unwrap(), PresetCategory::Print);
        assert!(matches!(
            "billboard".parse::<PresetCategory>(),
            Err(SelectionError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_preset_serialization() {
        let preset = find_preset(PresetCategory::Common, "HD").unwrap();
        let json = serde_json::to_value(preset).unwrap();
        assert_eq!(json["name"], "HD");
        assert_eq!(json["width"], 1280);
        assert!(json.get("description").is_none());
    }
}
