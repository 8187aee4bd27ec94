//! The slide store: an ordered, validated sequence of slide descriptors.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    domain::{Rgb, SlideDescriptor, SlideIcon, SlideKind},
    error::DeckError,
    navigation::Navigator,
};

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(default)]
    slides: Vec<SlideDescriptor>,
}

/// Immutable deck. Always holds at least one slide, with the cover first.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    slides: Vec<SlideDescriptor>,
}

impl Deck {
    pub fn new(slides: Vec<SlideDescriptor>) -> Result<Self, DeckError> {
        validate(&slides)?;
        Ok(Self { slides })
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, DeckError> {
        let file: DeckFile = toml::from_str(raw)?;
        Self::new(file.slides)
    }

    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let raw = fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), slides = deck.len(), "loaded deck file");
        Ok(deck)
    }

    /// The Syntex implementation lifecycle deck shipped with the presenter.
    pub fn builtin() -> Self {
        Self {
            slides: builtin_slides(),
        }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[SlideDescriptor] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&SlideDescriptor> {
        self.slides.get(index)
    }

    /// Slide at `index`, reduced modulo the deck length.
    pub fn slide(&self, index: usize) -> &SlideDescriptor {
        &self.slides[index % self.slides.len()]
    }

    pub fn cover(&self) -> &SlideDescriptor {
        &self.slides[0]
    }

    /// Every slide after the cover, in deck order.
    pub fn topics(&self) -> &[SlideDescriptor] {
        &self.slides[1..]
    }

    pub fn topic_count(&self) -> usize {
        self.slides.len() - 1
    }

    pub fn navigator(&self) -> Navigator {
        Navigator::new(self.len())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate(slides: &[SlideDescriptor]) -> Result<(), DeckError> {
    if slides.is_empty() {
        return Err(DeckError::Empty);
    }

    let mut covers = slides
        .iter()
        .enumerate()
        .filter(|(_, slide)| slide.kind == SlideKind::Cover)
        .map(|(index, _)| index);
    match covers.next() {
        None => return Err(DeckError::MissingCover),
        Some(0) => {}
        Some(index) => return Err(DeckError::CoverNotFirst { index }),
    }
    if let Some(index) = covers.next() {
        return Err(DeckError::MultipleCovers { index });
    }

    for (index, slide) in slides.iter().enumerate().skip(1) {
        let missing = if slide.content.is_none() {
            Some("content")
        } else if slide.key_focus.is_none() {
            Some("key_focus")
        } else if slide.icon.is_none() {
            Some("icon")
        } else {
            None
        };
        if let Some(field) = missing {
            return Err(DeckError::MissingField { index, field });
        }
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn topic(
    title: &str,
    content: &str,
    key_focus: &str,
    icon: SlideIcon,
    background: u32,
    primary: u32,
    secondary: u32,
    icon_color: u32,
) -> SlideDescriptor {
    SlideDescriptor {
        title: title.to_string(),
        subtitle: None,
        content: Some(content.to_string()),
        key_focus: Some(key_focus.to_string()),
        kind: SlideKind::Content,
        icon: Some(icon),
        background_color: Rgb::from_hex(background),
        primary_color: Rgb::from_hex(primary),
        secondary_color: Rgb::from_hex(secondary),
        icon_color: Rgb::from_hex(icon_color),
    }
}

fn builtin_slides() -> Vec<SlideDescriptor> {
    vec![
        SlideDescriptor {
            title: "Microsoft Syntex Implementation Lifecycle".to_string(),
            subtitle: Some("Enhancing Content Intelligence in the Enterprise".to_string()),
            content: None,
            key_focus: None,
            kind: SlideKind::Cover,
            icon: None,
            background_color: Rgb::from_hex(0xF5F5F5),
            primary_color: Rgb::from_hex(0x2563EB),
            secondary_color: Rgb::from_hex(0x90CAF9),
            icon_color: Rgb::from_hex(0x2563EB),
        },
        topic(
            "Setup & Configuration",
            "Install and configure Microsoft Syntex, ensuring seamless integration with Microsoft 365 and SharePoint environments.",
            "Technical configuration, model setup, and system preparation for intelligent document processing.",
            SlideIcon::Settings,
            0xF8F8F8,
            0x3498DB,
            0x4B5563,
            0xFFC107,
        ),
        topic(
            "Target Selection",
            "Strategically select initial documents for implementation, focusing on high-impact areas.",
            "Identifying crucial documents to demonstrate Syntex's transformative potential.",
            SlideIcon::Target,
            0xF2F2F2,
            0x2196F3,
            0x90CAF9,
            0xFF6384,
        ),
        topic(
            "Data Extraction",
            "Leverage Syntex's AI capabilities to extract valuable data from selected documents.",
            "Utilizing AI-driven models for intelligent metadata and key information extraction.",
            SlideIcon::Database,
            0xF5F5F5,
            0xFF5722,
            0xFFEB3B,
            0x00BCD4,
        ),
        topic(
            "Search Optimization",
            "Enhance search efficiency and accuracy using the extracted metadata and content understanding.",
            "Improving content discoverability and relevance in document libraries.",
            SlideIcon::Search,
            0xF8F8F8,
            0x673AB7,
            0x00BCD4,
            0x4CAF50,
        ),
        topic(
            "Document Organization",
            "Restructure document libraries leveraging Syntex-extracted metadata for improved navigation.",
            "Implementing intelligent categorization and tagging for streamlined content management.",
            SlideIcon::FolderOpen,
            0xF2F2F2,
            0x9C27B0,
            0x4B5563,
            0xFFEB3B,
        ),
        topic(
            "Data Integration",
            "Centralize extracted data in SQL Azure for comprehensive content intelligence.",
            "Creating a unified data repository for advanced analytics and reporting.",
            SlideIcon::Link,
            0xF5F5F5,
            0x90CAF9,
            0x2196F3,
            0xFFC107,
        ),
        topic(
            "Dashboard Creation",
            "Generate insightful visual dashboards using Tableau and the centralized SQL Azure data.",
            "Transforming raw data into actionable insights for informed decision-making.",
            SlideIcon::BarChart,
            0xF8F8F8,
            0xF44336,
            0x00BCD4,
            0x90CAF9,
        ),
    ]
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
