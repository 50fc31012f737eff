// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering configuration.

use peniko::Color;

use crate::color::parse_hex;
use crate::theme::BackgroundTheme;

/// The visual language of the frame drawn around the code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DesignSystem {
    /// A desktop window with traffic-light buttons and a layered soft shadow.
    #[default]
    ElevatedWindow,
    /// A Material 3 card with toolbar icons and key/ambient shadows.
    MaterialCard,
}

impl DesignSystem {
    /// Every design system.
    pub const ALL: [Self; 2] = [Self::ElevatedWindow, Self::MaterialCard];

    /// Canonical name, as accepted by [`parse`](Self::parse).
    pub const fn name(self) -> &'static str {
        match self {
            Self::ElevatedWindow => "macos",
            Self::MaterialCard => "material",
        }
    }

    /// Strict, case-insensitive lookup.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("macos") || name.eq_ignore_ascii_case("elevated") {
            Some(Self::ElevatedWindow)
        } else if name.eq_ignore_ascii_case("material") {
            Some(Self::MaterialCard)
        } else {
            None
        }
    }

    /// Lookup that falls back to [`DesignSystem::ElevatedWindow`].
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            log::debug!("unknown design system {name:?}, using elevated window");
            Self::ElevatedWindow
        })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DesignSystem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DesignSystem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

/// Everything about the look of a rendered snippet.
///
/// Presets are plain constructors: [`StyleConfig::default`], [`StyleConfig::light`],
/// [`StyleConfig::presentation`] and [`StyleConfig::compact`]. Individual fields can be
/// overridden afterwards through the `with_*` methods or by assigning the public fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct StyleConfig {
    /// Content width in logical pixels. `None` or zero sizes to content.
    pub width: Option<u32>,
    /// Content height in logical pixels, excluding the header. `None` or zero sizes to content.
    pub height: Option<u32>,
    /// Requested padding. Layout margins are fixed per design system, so this only
    /// distinguishes presets.
    pub padding: u32,
    /// Code font size in logical pixels.
    pub font_size: f32,
    /// Preferred code font family, tried before the design system's fallbacks.
    pub font_family: String,
    /// Multiplier applied to the font's natural line spacing.
    pub line_height: f32,
    /// Window background as a `#RRGGBB` or `#AARRGGBB` string.
    pub background_color: String,
    /// Default text color as a `#RRGGBB` or `#AARRGGBB` string.
    pub text_color: String,
    /// Optional title shown in the header.
    pub title: Option<String>,
    /// Backdrop painted around the window.
    pub background_theme: BackgroundTheme,
    /// Frame style.
    pub design_system: DesignSystem,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            padding: 40,
            font_size: 18.0,
            font_family: "JetBrains Mono".into(),
            line_height: 1.4,
            background_color: "#1e1e1e".into(),
            text_color: "#ffffff".into(),
            title: None,
            background_theme: BackgroundTheme::Darcula,
            design_system: DesignSystem::ElevatedWindow,
        }
    }
}

impl StyleConfig {
    /// Dark text on a white window.
    pub fn light() -> Self {
        Self {
            background_color: "#ffffff".into(),
            text_color: "#333333".into(),
            ..Self::default()
        }
    }

    /// Large, fixed-size output for slides.
    pub fn presentation() -> Self {
        Self {
            width: Some(1920),
            height: Some(1080),
            padding: 60,
            font_size: 24.0,
            line_height: 1.5,
            ..Self::default()
        }
    }

    /// Small, fixed-size output for social media.
    pub fn compact() -> Self {
        Self {
            width: Some(800),
            height: Some(600),
            padding: 20,
            font_size: 14.0,
            line_height: 1.3,
            ..Self::default()
        }
    }

    /// Looks a preset up by name, ignoring case. Unknown names give the default preset.
    pub fn preset(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            "presentation" => Self::presentation(),
            "compact" => Self::compact(),
            "default" | "" => Self::default(),
            other => {
                log::debug!("unknown preset {other:?}, using default");
                Self::default()
            }
        }
    }

    /// Sets the content size; zero leaves that axis auto-sized.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the backdrop theme.
    #[must_use]
    pub fn with_background_theme(mut self, theme: BackgroundTheme) -> Self {
        self.background_theme = theme;
        self
    }

    /// Sets the design system.
    #[must_use]
    pub fn with_design_system(mut self, design_system: DesignSystem) -> Self {
        self.design_system = design_system;
        self
    }

    /// Sets the code font family and size.
    #[must_use]
    pub fn with_font(mut self, family: impl Into<String>, size: f32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    /// Explicit width, if one was given.
    pub fn fixed_width(&self) -> Option<u32> {
        self.width.filter(|&w| w > 0)
    }

    /// Explicit height, if one was given.
    pub fn fixed_height(&self) -> Option<u32> {
        self.height.filter(|&h| h > 0)
    }

    /// The parsed window background.
    pub fn background(&self) -> Color {
        parse_hex(&self.background_color)
    }

    /// The parsed default text color.
    pub fn text(&self) -> Color {
        parse_hex(&self.text_color)
    }

    /// The title, if it has any visible content.
    pub fn visible_title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }
}
