use deck::{chart_data_for, ChartPoint, Deck, Navigator};
use eframe::egui;

use crate::controller::{
    events::{commands_from_input, NavCommand},
    orchestration::{apply_command, NavOutcome},
};
use crate::ui::{
    layout::page_layout,
    slide_view::{self, SlideFrame, REVEAL_STEPS},
    theme::{visuals_for_slide, SlidePalette},
    transition::{SlideTransition, TransitionTiming},
};

pub struct PresenterApp {
    deck: Deck,
    nav: Navigator,
    transition: SlideTransition,
    chart: Vec<ChartPoint>,
    styled_for: Option<usize>,
}

impl PresenterApp {
    pub fn new(deck: Deck, start_slide: usize, timing: TransitionTiming) -> Self {
        let nav = Navigator::starting_at(deck.len(), start_slide);
        let shown = nav.current();
        Self {
            chart: chart_data_for(shown),
            transition: SlideTransition::new(shown, 0.0, timing),
            deck,
            nav,
            styled_for: None,
        }
    }

    pub fn current(&self) -> usize {
        self.nav.current()
    }

    pub fn shown(&self) -> usize {
        self.transition.shown()
    }

    pub fn chart(&self) -> &[ChartPoint] {
        &self.chart
    }

    /// Applies `commands` and advances the transition to `now`.
    /// Returns `true` when a close was requested.
    pub fn step(&mut self, commands: &[NavCommand], now: f64) -> bool {
        let mut close = false;
        for cmd in commands {
            match apply_command(&mut self.nav, *cmd) {
                NavOutcome::Moved { to, .. } => {
                    self.transition.request(to, now);
                    tracing::trace!(
                        current = self.current(),
                        pending = ?self.transition.pending(),
                        exiting = self.transition.is_exiting(),
                        "slide change queued"
                    );
                }
                NavOutcome::Unchanged => {}
                NavOutcome::CloseRequested => close = true,
            }
        }

        if let Some(shown) = self.transition.tick(now) {
            self.chart = chart_data_for(shown);
        }

        close
    }

    fn apply_slide_style(&mut self, ctx: &egui::Context) {
        let shown = self.shown();
        if self.styled_for == Some(shown) {
            return;
        }
        let palette = SlidePalette::for_slide(self.deck.slide(shown));
        ctx.set_visuals(visuals_for_slide(palette));
        self.styled_for = Some(shown);
    }
}

impl eframe::App for PresenterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input(|i| i.time);
        let commands = ctx.input(commands_from_input);
        if self.step(&commands, now) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        self.apply_slide_style(ctx);

        let actions = slide_view::show_slide(
            ctx,
            SlideFrame {
                page: page_layout(&self.deck, self.shown()),
                chart: self.chart(),
                transition: &self.transition,
                now,
            },
        );

        let mut clicked = Vec::new();
        if actions.previous {
            clicked.push(NavCommand::Previous);
        }
        if actions.next {
            clicked.push(NavCommand::Next);
        }
        if !clicked.is_empty() {
            self.step(&clicked, now);
        }

        if self.transition.is_animating(now, REVEAL_STEPS) || !clicked.is_empty() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PresenterApp {
        PresenterApp::new(Deck::builtin(), 0, TransitionTiming::default())
    }

    #[test]
    fn starts_on_cover_with_fresh_chart() {
        let app = app();
        assert_eq!(app.current(), 0);
        assert_eq!(app.shown(), 0);
        assert_eq!(app.chart().len(), deck::CHART_HORIZON);
    }

    #[test]
    fn start_slide_is_reduced_modulo_deck_length() {
        let app = PresenterApp::new(Deck::builtin(), 10, TransitionTiming::default());
        assert_eq!(app.current(), 2);
        assert_eq!(app.shown(), 2);
    }

    #[test]
    fn shown_slide_follows_navigation_after_exit_fade() {
        let mut app = app();
        assert!(!app.step(&[NavCommand::Next], 1.0));
        assert_eq!(app.current(), 1);
        assert_eq!(app.shown(), 0);

        app.step(&[], 1.6);
        assert_eq!(app.shown(), 1);
        assert_eq!(app.chart().len(), deck::CHART_HORIZON);
    }

    #[test]
    fn eight_nexts_return_to_the_cover() {
        let mut app = app();
        let mut now = 1.0;
        for _ in 0..8 {
            app.step(&[NavCommand::Next], now);
            now += 1.0;
            app.step(&[], now);
        }
        assert_eq!(app.shown(), 0);
        assert_eq!(
            app.deck.slide(app.shown()).title,
            "Microsoft Syntex Implementation Lifecycle"
        );
    }

    #[test]
    fn chart_ramp_tracks_the_shown_slide() {
        let mut app = app();
        app.step(&[NavCommand::Last], 1.0);
        app.step(&[], 2.0);
        assert_eq!(app.shown(), 7);
        // Slide 7 starts at 98 + jitter and saturates by day 2.
        assert!(app.chart().iter().skip(1).all(|p| p.efficiency == 100.0));
    }

    #[test]
    fn escape_requests_close_without_moving() {
        let mut app = app();
        assert!(app.step(&[NavCommand::Close], 1.0));
        assert_eq!(app.current(), 0);
    }
}
