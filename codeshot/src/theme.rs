// Copyright 2026 the Codeshot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The catalog of backdrop themes painted behind the code window.

use peniko::Color;

use crate::color::blend;

/// A named backdrop palette.
///
/// The outer canvas is filled with a vertical gradient derived from these colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BackgroundTheme {
    /// Dark neutral grays.
    #[default]
    Darcula,
    /// Soft blue-green blend.
    Chatgpt5,
    /// Classic dev theme with warm accents.
    SolarizedDark,
    /// Cool arctic blues and grays.
    Nord,
    /// Balanced dark tone.
    OneDark,
    /// Slightly warmer dark background.
    Monokai,
    /// Clean white, for screenshots or prints.
    PureWhite,
    /// GitHub dark mode colors.
    GithubDark,
}

/// The colors and labels of a [`BackgroundTheme`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    /// The dominant backdrop color.
    pub base: Color,
    /// Color at the top edge of the canvas.
    pub gradient_top: Color,
    /// Color at the bottom edge of the canvas.
    pub gradient_bottom: Color,
    /// Human readable name.
    pub display_name: &'static str,
    /// One line description.
    pub description: &'static str,
}

impl BackgroundTheme {
    /// Every theme, in catalog order.
    pub const ALL: [Self; 8] = [
        Self::Darcula,
        Self::Chatgpt5,
        Self::SolarizedDark,
        Self::Nord,
        Self::OneDark,
        Self::Monokai,
        Self::PureWhite,
        Self::GithubDark,
    ];

    /// The stable identifier of this theme.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Darcula => "darcula",
            Self::Chatgpt5 => "chatgpt5",
            Self::SolarizedDark => "solarized_dark",
            Self::Nord => "nord",
            Self::OneDark => "one_dark",
            Self::Monokai => "monokai",
            Self::PureWhite => "pure_white",
            Self::GithubDark => "github_dark",
        }
    }

    /// Identifiers of every theme, in catalog order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }

    /// Looks a theme up by identifier or display name, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|theme| {
            theme.name().eq_ignore_ascii_case(name)
                || theme.palette().display_name.eq_ignore_ascii_case(name)
        })
    }

    /// Like [`parse`](Self::parse), but blank or unknown names give the default theme.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            if !name.trim().is_empty() {
                log::debug!("unknown background theme {name:?}, using {}", Self::default().name());
            }
            Self::default()
        })
    }

    /// The colors of this theme.
    pub fn palette(self) -> ThemePalette {
        match self {
            Self::Darcula => ThemePalette {
                base: Color::from_rgb8(43, 43, 43),
                gradient_top: Color::from_rgb8(38, 38, 38),
                gradient_bottom: Color::from_rgb8(48, 48, 48),
                display_name: "IntelliJ Darcula",
                description: "Dark neutral grays, easy on the eyes",
            },
            Self::Chatgpt5 => ThemePalette {
                base: Color::from_rgb8(0x0C, 0x1E, 0x25),
                gradient_top: Color::from_rgb8(0x0C, 0x1E, 0x25),
                gradient_bottom: Color::from_rgb8(0x1F, 0x3B, 0x4D),
                display_name: "ChatGPT-5 Gradient",
                description: "Soft blue-green blend, modern and calm",
            },
            Self::SolarizedDark => ThemePalette {
                base: Color::from_rgb8(0x00, 0x2B, 0x36),
                gradient_top: Color::from_rgb8(0x00, 0x2B, 0x36),
                gradient_bottom: Color::from_rgb8(0x07, 0x36, 0x42),
                display_name: "Solarized Dark",
                description: "Classic dev theme with warm accents",
            },
            Self::Nord => ThemePalette {
                base: Color::from_rgb8(46, 52, 64),
                gradient_top: Color::from_rgb8(46, 52, 64),
                gradient_bottom: Color::from_rgb8(59, 66, 82),
                display_name: "Nord",
                description: "Cool Arctic blues and grays",
            },
            Self::OneDark => ThemePalette {
                base: Color::from_rgb8(40, 44, 52),
                gradient_top: Color::from_rgb8(40, 44, 52),
                gradient_bottom: Color::from_rgb8(50, 54, 62),
                display_name: "One Dark Pro",
                description: "VS Code-inspired balanced dark tone",
            },
            Self::Monokai => ThemePalette {
                base: Color::from_rgb8(39, 40, 34),
                gradient_top: Color::from_rgb8(39, 40, 34),
                gradient_bottom: Color::from_rgb8(49, 50, 44),
                display_name: "Monokai Pro",
                description: "Slightly warmer dark background",
            },
            Self::PureWhite => ThemePalette {
                base: Color::from_rgb8(255, 255, 255),
                gradient_top: Color::from_rgb8(255, 255, 255),
                gradient_bottom: Color::from_rgb8(245, 245, 245),
                display_name: "Pure White Minimal",
                description: "Clean, for screenshots or prints",
            },
            Self::GithubDark => ThemePalette {
                base: Color::from_rgb8(13, 17, 23),
                gradient_top: Color::from_rgb8(13, 17, 23),
                gradient_bottom: Color::from_rgb8(21, 26, 34),
                display_name: "GitHub Dark",
                description: "Familiar GitHub dark mode colors",
            },
        }
    }

    /// Offsets and colors of the backdrop gradient, top to bottom.
    pub fn gradient_stops(self) -> [(f32, Color); 4] {
        let p = self.palette();
        [
            (0.0, p.gradient_top),
            (0.4, blend(p.gradient_top, p.base, 0.3)),
            (0.8, blend(p.base, p.gradient_bottom, 0.5)),
            (1.0, p.gradient_bottom),
        ]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BackgroundTheme {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BackgroundTheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}
