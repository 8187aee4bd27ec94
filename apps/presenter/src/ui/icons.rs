//! Topic glyphs, drawn from egui's bundled emoji and icon fonts.

use deck::SlideIcon;
use eframe::egui;

pub const CHEVRON_LEFT: &str = "⏴";
pub const CHEVRON_RIGHT: &str = "⏵";

pub fn glyph(icon: SlideIcon) -> &'static str {
    match icon {
        SlideIcon::Settings => "⚙",
        SlideIcon::Target => "🎯",
        SlideIcon::Database => "🗄",
        SlideIcon::Search => "🔍",
        SlideIcon::FolderOpen => "📂",
        SlideIcon::Link => "🔗",
        SlideIcon::BarChart => "📊",
    }
}

/// Paints `icon` centred in `rect`.
pub fn paint_icon(
    painter: &egui::Painter,
    rect: egui::Rect,
    icon: SlideIcon,
    size: f32,
    color: egui::Color32,
) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph(icon),
        egui::FontId::proportional(size),
        color,
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_icon_has_a_distinct_glyph() {
        let glyphs: HashSet<&str> = SlideIcon::ALL.iter().map(|icon| glyph(*icon)).collect();
        assert_eq!(glyphs.len(), SlideIcon::ALL.len());
    }
}
