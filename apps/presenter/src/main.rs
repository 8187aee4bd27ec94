use std::path::{Path, PathBuf};

mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use deck::Deck;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::Settings;
use crate::ui::{transition::TransitionTiming, PresenterApp};

#[derive(Parser, Debug)]
#[command(version, about = "Full-window slide deck presenter")]
struct Args {
    /// Deck file to present instead of the built-in deck.
    #[arg(long)]
    deck: Option<PathBuf>,
    /// Slide index to open on (wraps around the deck).
    #[arg(long)]
    start: Option<usize>,
    /// Config file; defaults to ./presenter.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Slide fade duration in milliseconds.
    #[arg(long)]
    transition_ms: Option<u64>,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(deck) = &self.deck {
            settings.deck_path = Some(deck.clone());
        }
        if let Some(start) = self.start {
            settings.start_slide = start;
        }
        if let Some(ms) = self.transition_ms {
            settings.transition_ms = ms;
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_deck(path: Option<&Path>) -> anyhow::Result<Deck> {
    match path {
        Some(path) => Deck::load(path)
            .with_context(|| format!("failed to load deck '{}'", path.display())),
        None => Ok(Deck::builtin()),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    args.apply_to(&mut settings);
    init_tracing(&settings.log_filter);

    tracing::info!(
        deck_path = ?settings.deck_path,
        start_slide = settings.start_slide,
        transition_ms = settings.transition_ms,
        "starting presenter"
    );

    let deck = load_deck(settings.deck_path.as_deref())
        .inspect_err(|err| tracing::error!("{err:#}"))?;
    tracing::info!(
        slides = deck.len(),
        topics = deck.topic_count(),
        title = %deck.cover().title,
        "deck ready"
    );

    let title = deck.cover().title.clone();
    let timing = TransitionTiming::from_millis(settings.transition_ms);
    let start_slide = settings.start_slide;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size(settings.window_size())
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(PresenterApp::new(deck, start_slide, timing)))),
    )
    .map_err(|err| anyhow::anyhow!("presenter window failed: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_settings() {
        let args = Args::parse_from([
            "presenter",
            "--deck",
            "review.toml",
            "--start",
            "4",
            "--transition-ms",
            "120",
        ]);
        let mut settings = Settings {
            start_slide: 2,
            ..Settings::default()
        };
        args.apply_to(&mut settings);

        assert_eq!(settings.deck_path, Some(PathBuf::from("review.toml")));
        assert_eq!(settings.start_slide, 4);
        assert_eq!(settings.transition_ms, 120);
    }

    #[test]
    fn absent_flags_keep_settings() {
        let args = Args::parse_from(["presenter"]);
        let mut settings = Settings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn default_deck_is_builtin() {
        let deck = load_deck(None).expect("builtin deck");
        assert_eq!(deck, Deck::builtin());
    }

    #[test]
    fn unreadable_deck_reports_path() {
        let err = load_deck(Some(Path::new("/nonexistent/deck.toml"))).expect_err("missing deck");
        assert!(format!("{err:#}").contains("/nonexistent/deck.toml"));
    }
}
