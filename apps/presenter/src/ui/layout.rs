//! Projection of a slide descriptor into what the page shows.

use deck::{Deck, Position, SlideDescriptor, SlideIcon, SlideKind};

#[derive(Debug, Clone, PartialEq)]
pub struct CoverTile<'a> {
    pub icon: Option<SlideIcon>,
    pub label: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlideLayout<'a> {
    Cover {
        title: &'a str,
        subtitle: Option<&'a str>,
        tiles: Vec<CoverTile<'a>>,
    },
    Content {
        title: &'a str,
        body: &'a str,
        key_focus: &'a str,
        icon: Option<SlideIcon>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout<'a> {
    pub slide: &'a SlideDescriptor,
    pub body: SlideLayout<'a>,
    pub position: Position,
    pub dots: Vec<bool>,
}

pub fn slide_layout<'a>(deck: &'a Deck, slide: &'a SlideDescriptor) -> SlideLayout<'a> {
    match slide.kind {
        SlideKind::Cover => SlideLayout::Cover {
            title: &slide.title,
            subtitle: slide.subtitle.as_deref(),
            tiles: deck
                .topics()
                .iter()
                .map(|topic| CoverTile {
                    icon: topic.icon,
                    label: &topic.title,
                })
                .collect(),
        },
        SlideKind::Content => SlideLayout::Content {
            title: &slide.title,
            body: slide.content.as_deref().unwrap_or_default(),
            key_focus: slide.key_focus.as_deref().unwrap_or_default(),
            icon: slide.icon,
        },
    }
}

/// Everything painted for slide `index` of a deck of `deck.len()` slides.
pub fn page_layout(deck: &Deck, index: usize) -> PageLayout<'_> {
    let nav = deck::Navigator::starting_at(deck.len(), index);
    let slide = deck.slide(nav.current());
    PageLayout {
        slide,
        body: slide_layout(deck, slide),
        position: nav.position(),
        dots: nav.dots().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_shows_one_tile_per_topic_in_deck_order() {
        let deck = Deck::builtin();
        let page = page_layout(&deck, 0);
        let SlideLayout::Cover { title, tiles, .. } = page.body else {
            panic!("index 0 should be the cover");
        };
        assert_eq!(title, "Microsoft Syntex Implementation Lifecycle");
        assert_eq!(tiles.len(), 7);
        for (tile, topic) in tiles.iter().zip(deck.topics()) {
            assert_eq!(tile.label, topic.title);
            assert_eq!(tile.icon, topic.icon);
        }
    }

    #[test]
    fn content_slide_exposes_text_and_icon() {
        let deck = Deck::builtin();
        let page = page_layout(&deck, 3);
        assert_eq!(
            page.body,
            SlideLayout::Content {
                title: "Data Extraction",
                body: "Leverage Syntex's AI capabilities to extract valuable data from selected documents.",
                key_focus: "Utilizing AI-driven models for intelligent metadata and key information extraction.",
                icon: Some(SlideIcon::Database),
            }
        );
    }

    #[test]
    fn last_slide_indicator_reads_seven_of_seven() {
        let deck = Deck::builtin();
        let page = page_layout(&deck, 7);
        assert_eq!(page.position.to_string(), "7 / 7");
        assert_eq!(page.dots.len(), 8);
        assert_eq!(page.dots.iter().position(|active| *active), Some(7));
    }
}
