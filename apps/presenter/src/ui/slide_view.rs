//! Paints one page: position dots, the cover or content body, the metrics
//! chart, navigation buttons, and the `current / total` indicator.

use deck::ChartPoint;
use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::ui::{
    icons,
    layout::{CoverTile, PageLayout, SlideLayout},
    theme::{self, SlidePalette},
    transition::{ease_out_cubic, progress, SlideTransition},
};

const PAGE_MARGIN: f32 = 48.0;
const DOTS_BAND: f32 = 64.0;
const CONTROLS_BAND: f32 = 128.0;
const NAV_BUTTON_SIZE: f32 = 64.0;
const TILE_SIZE: f32 = 128.0;
const TILE_GAP: f32 = 32.0;
const BADGE_SIZE: f32 = 192.0;
const CHART_HEIGHT: f32 = 200.0;
const DOT_RADIUS: f32 = 6.0;
const DOT_GAP: f32 = 12.0;
const DOT_STAGGER: f64 = 0.1;
const DOT_REVEAL: f64 = 0.3;

/// Staggered reveal steps used by the page; the last one settles the transition.
pub const REVEAL_STEPS: u32 = 3;

pub struct SlideFrame<'a> {
    pub page: PageLayout<'a>,
    pub chart: &'a [ChartPoint],
    pub transition: &'a SlideTransition,
    pub now: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SlideActions {
    pub previous: bool,
    pub next: bool,
}

fn ui_in_rect(ui: &mut egui::Ui, rect: egui::Rect, add: impl FnOnce(&mut egui::Ui)) {
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Center)),
    );
    child.set_clip_rect(rect);
    add(&mut child);
}

/// Adds content that fades in while sliding from `from` back to its place.
fn reveal(ui: &mut egui::Ui, t: f32, from: egui::Vec2, add: impl FnOnce(&mut egui::Ui)) {
    let eased = ease_out_cubic(t);
    let shift = from * (1.0 - eased);
    let rect = ui.available_rect_before_wrap();
    let mut child = ui.new_child(
        egui::UiBuilder::new()
            .max_rect(rect.translate(shift))
            .layout(*ui.layout()),
    );
    child.multiply_opacity(eased);
    add(&mut child);
    ui.allocate_rect(child.min_rect().translate(-shift), egui::Sense::hover());
}

pub fn show_slide(ctx: &egui::Context, frame: SlideFrame<'_>) -> SlideActions {
    let palette = SlidePalette::for_slide(frame.page.slide);
    let mut actions = SlideActions::default();

    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(palette.background))
        .show(ctx, |ui| {
            let page_rect = ui.max_rect();
            paint_position_dots(ui, page_rect, &frame.page.dots, frame.now);

            let opacity = frame.transition.slide_opacity(frame.now);
            let body_rect = egui::Rect::from_min_max(
                page_rect.min + egui::vec2(PAGE_MARGIN, DOTS_BAND),
                page_rect.max - egui::vec2(PAGE_MARGIN, CONTROLS_BAND),
            );
            ui_in_rect(ui, body_rect, |ui| {
                ui.multiply_opacity(opacity);
                centered_vertically(ui, |ui| match &frame.page.body {
                    SlideLayout::Cover {
                        title,
                        subtitle,
                        tiles,
                    } => show_cover(ui, &frame, palette, title, *subtitle, tiles),
                    SlideLayout::Content {
                        title,
                        body,
                        key_focus,
                        icon,
                    } => show_content(ui, &frame, palette, title, body, key_focus, *icon),
                });
            });

            actions = paint_controls(ui, page_rect, &frame, opacity);
        });

    actions
}

/// Pads the top so content measured last frame sits in the middle of `ui`.
fn centered_vertically(ui: &mut egui::Ui, add: impl FnOnce(&mut egui::Ui)) {
    let id = ui.id().with("content_height");
    let last_height = ui.ctx().data(|d| d.get_temp::<f32>(id)).unwrap_or(0.0);
    ui.add_space(((ui.available_height() - last_height) * 0.5).max(0.0));
    let top = ui.cursor().top();
    add(ui);
    let height = ui.min_rect().bottom() - top;
    ui.ctx().data_mut(|d| d.insert_temp(id, height));
}

fn show_cover(
    ui: &mut egui::Ui,
    frame: &SlideFrame<'_>,
    palette: SlidePalette,
    title: &str,
    subtitle: Option<&str>,
    tiles: &[CoverTile<'_>],
) {
    let t = frame.transition;
    reveal(ui, t.reveal(frame.now, 1), egui::vec2(0.0, 50.0), |ui| {
        ui.label(
            egui::RichText::new(title)
                .size(52.0)
                .strong()
                .color(palette.text),
        );
    });
    ui.add_space(24.0);
    if let Some(subtitle) = subtitle {
        reveal(ui, t.reveal(frame.now, 2), egui::vec2(0.0, 50.0), |ui| {
            ui.label(egui::RichText::new(subtitle).size(28.0).color(palette.text));
        });
    }
    ui.add_space(48.0);
    reveal(ui, t.reveal(frame.now, 3), egui::vec2(0.0, 24.0), |ui| {
        let per_row = ((ui.available_width() + TILE_GAP) / (TILE_SIZE + TILE_GAP))
            .floor()
            .max(1.0) as usize;
        for row in tiles.chunks(per_row) {
            let row_width = row.len() as f32 * (TILE_SIZE + TILE_GAP) - TILE_GAP;
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = TILE_GAP;
                ui.add_space(((ui.available_width() - row_width) * 0.5).max(0.0));
                for tile in row {
                    cover_tile(ui, tile, palette);
                }
            });
            ui.add_space(TILE_GAP);
        }
    });
}

fn cover_tile(ui: &mut egui::Ui, tile: &CoverTile<'_>, palette: SlidePalette) {
    ui.allocate_ui(egui::vec2(TILE_SIZE, TILE_SIZE + 40.0), |ui| {
        ui.vertical_centered(|ui| {
            ui.set_width(TILE_SIZE);
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(TILE_SIZE, TILE_SIZE), egui::Sense::hover());
            let shadow = if response.hovered() { 40 } else { 20 };
            ui.painter().rect_filled(
                rect.translate(egui::vec2(0.0, 4.0)),
                egui::CornerRadius::same(8),
                egui::Color32::from_black_alpha(shadow),
            );
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(8), theme::CARD_FILL);
            if let Some(icon) = tile.icon {
                icons::paint_icon(ui.painter(), rect, icon, 56.0, palette.icon);
            }
            ui.add_space(8.0);
            ui.add(
                egui::Label::new(egui::RichText::new(tile.label).size(14.0).color(palette.text))
                    .wrap(),
            );
        });
    });
}

#[allow(clippy::too_many_arguments)]
fn show_content(
    ui: &mut egui::Ui,
    frame: &SlideFrame<'_>,
    palette: SlidePalette,
    title: &str,
    body: &str,
    key_focus: &str,
    icon: Option<deck::SlideIcon>,
) {
    let t = frame.transition;
    let from_left = egui::vec2(-50.0, 0.0);
    ui.columns(2, |cols| {
        let [left, right] = cols else {
            return;
        };
        left.spacing_mut().item_spacing.y = 24.0;
        left.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            reveal(ui, t.reveal(frame.now, 0), from_left, |ui| {
                ui.label(
                    egui::RichText::new(title)
                        .size(44.0)
                        .strong()
                        .color(palette.text),
                );
            });
            reveal(ui, t.reveal(frame.now, 1), from_left, |ui| {
                ui.label(egui::RichText::new(body).size(20.0).color(palette.text));
            });
            reveal(ui, t.reveal(frame.now, 2), from_left, |ui| {
                key_focus_callout(ui, key_focus, palette);
            });
        });

        right.vertical_centered(|ui| {
            reveal(ui, t.reveal(frame.now, 1), egui::vec2(0.0, 20.0), |ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(BADGE_SIZE, BADGE_SIZE),
                    egui::Sense::hover(),
                );
                ui.painter().circle_filled(
                    rect.center() + egui::vec2(0.0, 6.0),
                    BADGE_SIZE * 0.5,
                    egui::Color32::from_black_alpha(30),
                );
                ui.painter()
                    .circle_filled(rect.center(), BADGE_SIZE * 0.5, theme::CARD_FILL);
                if let Some(icon) = icon {
                    icons::paint_icon(ui.painter(), rect, icon, 96.0, palette.icon);
                }
            });
            ui.add_space(48.0);
            reveal(ui, t.reveal(frame.now, 2), egui::vec2(0.0, 50.0), |ui| {
                metrics_card(ui, frame.chart, palette);
            });
        });
    });
}

fn key_focus_callout(ui: &mut egui::Ui, key_focus: &str, palette: SlidePalette) {
    let response = egui::Frame::new()
        .fill(theme::CARD_FILL)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(32))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Key Focus")
                    .size(24.0)
                    .strong()
                    .color(palette.text),
            );
            ui.add_space(12.0);
            ui.label(egui::RichText::new(key_focus).size(18.0).color(palette.text));
        })
        .response;
    let bar = egui::Rect::from_min_size(response.rect.min, egui::vec2(4.0, response.rect.height()));
    ui.painter()
        .rect_filled(bar, egui::CornerRadius::ZERO, theme::CALLOUT_ACCENT);
}

fn metrics_card(ui: &mut egui::Ui, chart: &[ChartPoint], palette: SlidePalette) {
    egui::Frame::new()
        .fill(theme::CARD_FILL)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                ui.label(
                    egui::RichText::new("Implementation Metrics")
                        .size(24.0)
                        .strong()
                        .color(palette.text),
                );
                ui.add_space(16.0);
                metrics_chart(ui, chart, palette);
            });
        });
}

fn series(chart: &[ChartPoint], value: impl Fn(&ChartPoint) -> f64) -> Vec<[f64; 2]> {
    chart
        .iter()
        .enumerate()
        .map(|(i, point)| [i as f64, value(point)])
        .collect()
}

/// Day label for an x-axis grid mark; blank between days.
pub fn day_label(chart: &[ChartPoint], x: f64) -> String {
    let rounded = x.round();
    if (x - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    chart
        .get(rounded as usize)
        .map(|point| point.day.clone())
        .unwrap_or_default()
}

fn metrics_chart(ui: &mut egui::Ui, chart: &[ChartPoint], palette: SlidePalette) {
    let efficiency = series(chart, |p| p.efficiency);
    let accuracy = series(chart, |p| p.accuracy);
    let axis_labels = chart.to_vec();
    let tooltip_labels = chart.to_vec();

    Plot::new("implementation_metrics")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .include_y(100.0)
        .legend(Legend::default())
        .x_axis_formatter(move |mark, _range| day_label(&axis_labels, mark.value))
        .label_formatter(move |name, value| {
            let day = day_label(&tooltip_labels, value.x);
            if name.is_empty() || day.is_empty() {
                String::new()
            } else {
                format!("{day}\n{name}: {:.1}", value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("efficiency", PlotPoints::from(efficiency.clone()))
                    .color(palette.text)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new("efficiency", PlotPoints::from(efficiency))
                    .color(palette.text)
                    .radius(3.0),
            );
            plot_ui.line(
                Line::new("accuracy", PlotPoints::from(accuracy.clone()))
                    .color(palette.secondary)
                    .width(2.0),
            );
            plot_ui.points(
                Points::new("accuracy", PlotPoints::from(accuracy))
                    .color(palette.secondary)
                    .radius(3.0),
            );
        });
}

fn paint_position_dots(ui: &egui::Ui, page_rect: egui::Rect, dots: &[bool], now: f64) {
    let count = dots.len() as f32;
    let width = count * DOT_RADIUS * 2.0 + (count - 1.0).max(0.0) * DOT_GAP;
    let y = page_rect.top() + DOTS_BAND * 0.5;
    let mut x = page_rect.center().x - width * 0.5 + DOT_RADIUS;
    for (index, active) in dots.iter().enumerate() {
        let t = ease_out_cubic(progress(now - index as f64 * DOT_STAGGER, DOT_REVEAL));
        let fill = if *active {
            theme::DOT_ACTIVE
        } else {
            theme::DOT_IDLE
        };
        ui.painter().circle_filled(
            egui::pos2(x, y),
            DOT_RADIUS * (0.8 + 0.2 * t),
            fill.gamma_multiply(t),
        );
        x += DOT_RADIUS * 2.0 + DOT_GAP;
    }
}

fn paint_controls(
    ui: &mut egui::Ui,
    page_rect: egui::Rect,
    frame: &SlideFrame<'_>,
    opacity: f32,
) -> SlideActions {
    let center_y = page_rect.bottom() - PAGE_MARGIN - NAV_BUTTON_SIZE * 0.5;
    let size = egui::vec2(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE);
    let offset = NAV_BUTTON_SIZE * 0.5 + 16.0;
    let prev_rect =
        egui::Rect::from_center_size(egui::pos2(page_rect.center().x - offset, center_y), size);
    let next_rect =
        egui::Rect::from_center_size(egui::pos2(page_rect.center().x + offset, center_y), size);

    let actions = SlideActions {
        previous: nav_button(ui, prev_rect, "previous_slide", icons::CHEVRON_LEFT, opacity),
        next: nav_button(ui, next_rect, "next_slide", icons::CHEVRON_RIGHT, opacity),
    };

    let mut painter = ui.painter().clone();
    painter.multiply_opacity(opacity);
    painter.text(
        egui::pos2(page_rect.right() - 32.0, page_rect.bottom() - 32.0),
        egui::Align2::RIGHT_BOTTOM,
        frame.page.position.to_string(),
        egui::FontId::proportional(24.0),
        theme::INDICATOR_TEXT,
    );

    actions
}

fn nav_button(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    id_salt: &str,
    glyph: &str,
    opacity: f32,
) -> bool {
    let response = ui
        .interact(rect, ui.id().with(id_salt), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let scale = if response.is_pointer_button_down_on() {
        0.9
    } else if response.hovered() {
        1.1
    } else {
        1.0
    };
    let fill = if response.hovered() {
        theme::lighten_color(theme::DOT_IDLE, 0.85)
    } else {
        theme::CARD_FILL
    };

    let mut painter = ui.painter().clone();
    painter.multiply_opacity(opacity);
    painter.circle_filled(
        rect.center() + egui::vec2(0.0, 3.0),
        rect.width() * 0.5 * scale,
        egui::Color32::from_black_alpha(25),
    );
    painter.circle_filled(rect.center(), rect.width() * 0.5 * scale, fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        glyph,
        egui::FontId::proportional(28.0 * scale),
        theme::CHEVRON,
    );

    response.clicked()
}

#[cfg(test)]
mod tests {
    use deck::{generate_chart_data, Deck};

    use super::*;

    struct Zero;

    impl rand::RngCore for Zero {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn axis_labels_only_on_whole_days() {
        let chart = generate_chart_data(1, &mut Zero);
        assert_eq!(day_label(&chart, 0.0), "Day 1");
        assert_eq!(day_label(&chart, 6.0), "Day 7");
        assert_eq!(day_label(&chart, 2.5), "");
        assert_eq!(day_label(&chart, -1.0), "");
        assert_eq!(day_label(&chart, 7.0), "");
    }

    #[test]
    fn series_pairs_day_index_with_metric() {
        let chart = generate_chart_data(2, &mut Zero);
        let efficiency = series(&chart, |p| p.efficiency);
        assert_eq!(efficiency.len(), 7);
        assert_eq!(efficiency[0], [0.0, 28.0]);
        assert_eq!(efficiency[6], [6.0, 40.0]);
    }

    #[test]
    fn renders_every_builtin_slide_headlessly() {
        let deck = Deck::builtin();
        let ctx = egui::Context::default();
        for index in 0..deck.len() {
            let transition =
                SlideTransition::new(index, 0.0, crate::ui::transition::TransitionTiming::default());
            let chart = generate_chart_data(index, &mut Zero);
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                let actions = show_slide(
                    ctx,
                    SlideFrame {
                        page: crate::ui::layout::page_layout(&deck, index),
                        chart: &chart,
                        transition: &transition,
                        now: 2.0,
                    },
                );
                assert_eq!(actions, SlideActions::default());
            });
        }
    }
}
