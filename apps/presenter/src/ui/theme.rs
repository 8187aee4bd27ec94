use deck::{Rgb, SlideDescriptor};
use eframe::egui;

pub const CARD_FILL: egui::Color32 = egui::Color32::WHITE;
pub const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);
pub const CHEVRON: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);
pub const INDICATOR_TEXT: egui::Color32 = egui::Color32::from_rgb(156, 163, 175);
pub const DOT_ACTIVE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
pub const DOT_IDLE: egui::Color32 = egui::Color32::from_rgb(209, 213, 219);
pub const CALLOUT_ACCENT: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

pub fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

pub fn lighten_color(c: egui::Color32, t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |channel: u8| -> u8 {
        let channel = channel as f32;
        (channel + (255.0 - channel) * t).round().clamp(0.0, 255.0) as u8
    };
    egui::Color32::from_rgba_unmultiplied(mix(c.r()), mix(c.g()), mix(c.b()), c.a())
}

/// Resolved colours for painting one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePalette {
    pub background: egui::Color32,
    pub text: egui::Color32,
    pub secondary: egui::Color32,
    pub icon: egui::Color32,
}

impl SlidePalette {
    pub fn for_slide(slide: &SlideDescriptor) -> Self {
        Self {
            background: color32(slide.background_color),
            text: color32(slide.primary_color),
            secondary: color32(slide.secondary_color),
            icon: color32(slide.icon_color),
        }
    }
}

pub fn visuals_for_slide(palette: SlidePalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(palette.text);
    visuals.panel_fill = palette.background;
    visuals.window_fill = CARD_FILL;
    visuals.extreme_bg_color = CARD_FILL;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, CARD_STROKE);
    visuals.selection.bg_fill = palette.text;
    visuals
}
