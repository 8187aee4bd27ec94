use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideKind {
    Cover,
    Content,
}

/// Topic glyphs a slide can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideIcon {
    Settings,
    Target,
    Database,
    Search,
    FolderOpen,
    Link,
    BarChart,
}

impl SlideIcon {
    pub const ALL: [SlideIcon; 7] = [
        SlideIcon::Settings,
        SlideIcon::Target,
        SlideIcon::Database,
        SlideIcon::Search,
        SlideIcon::FolderOpen,
        SlideIcon::Link,
        SlideIcon::BarChart,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Settings => "Settings",
            Self::Target => "Target",
            Self::Database => "Database",
            Self::Search => "Search",
            Self::FolderOpen => "Folder",
            Self::Link => "Link",
            Self::BarChart => "Bar chart",
        }
    }
}

/// 24-bit colour, written as `#RRGGBB` in deck files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

impl FromStr for Rgb {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DeckError::invalid_color(s));
        }
        let hex = u32::from_str_radix(digits, 16).map_err(|_| DeckError::invalid_color(s))?;
        Ok(Self::from_hex(hex))
    }
}

impl TryFrom<String> for Rgb {
    type Error = DeckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_focus: Option<String>,
    pub kind: SlideKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<SlideIcon>,
    pub background_color: Rgb,
    pub primary_color: Rgb,
    pub secondary_color: Rgb,
    pub icon_color: Rgb,
}

impl SlideDescriptor {
    pub fn is_cover(&self) -> bool {
        self.kind == SlideKind::Cover
    }
}
