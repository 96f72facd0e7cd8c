use std::time::Instant;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::catalog::WordCatalog;
use crate::catalog::level::Level;
use crate::config::Config;
use crate::error::DrillError;
use crate::session::drill::{Feedback, SessionState};
use crate::session::feedback::FlashTimer;
use crate::session::result::SessionSummary;
use crate::ui::components::level_menu::{LevelMenu, SLOGANS};
use crate::ui::components::scoreboard::ScoreboardStats;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    Drill,
    Summary,
}

pub struct App {
    pub screen: AppScreen,
    pub menu: LevelMenu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub session: SessionState,
    pub flash: FlashTimer,
    pub last_summary: Option<SessionSummary>,
    pub should_quit: bool,
    catalog: Box<dyn WordCatalog>,
    rng: SmallRng,
}

impl App {
    pub fn new(config: Config, catalog: Box<dyn WordCatalog>, rng: SmallRng) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let menu = LevelMenu::new(theme, config.default_level);
        let flash = FlashTimer::new(config.success_flash(), config.error_flash());

        let mut app = Self {
            screen: AppScreen::Menu,
            menu,
            theme,
            config,
            session: SessionState::idle(),
            flash,
            last_summary: None,
            should_quit: false,
            catalog,
            rng,
        };
        app.pick_slogan();
        app
    }

    fn pick_slogan(&mut self) {
        self.menu.slogan = SLOGANS.choose(&mut self.rng).copied().unwrap_or(SLOGANS[0]);
    }

    /// Start a session at the level highlighted in the menu.
    pub fn start_session(&mut self) {
        let level = self.menu.selected_level();
        self.start_level(level);
    }

    pub fn start_level(&mut self, level: Level) {
        self.menu.select(level);
        self.flash.cancel();
        match SessionState::start(level, self.catalog.as_ref(), &mut self.rng) {
            Ok(session) => {
                log::info!(
                    "session started: level={} words={}",
                    level,
                    session.sequence.len()
                );
                self.session = session;
                self.menu.notice = None;
                self.last_summary = None;
                self.screen = AppScreen::Drill;
            }
            Err(err) => {
                log::warn!("{err}");
                self.menu.notice = Some(match err {
                    DrillError::InvalidLevel(level) => {
                        format!("{} seviyesinde kelime yok", level.label())
                    }
                    other => other.to_string(),
                });
                self.screen = AppScreen::Menu;
            }
        }
    }

    pub fn type_char(&mut self, ch: char) {
        if self.screen == AppScreen::Drill {
            self.session.type_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.screen == AppScreen::Drill {
            self.session.backspace();
        }
    }

    pub fn submit(&mut self) {
        self.submit_at(Instant::now());
    }

    pub fn submit_at(&mut self, now: Instant) {
        if self.screen != AppScreen::Drill {
            return;
        }
        if self.session.submit_input_at(now).is_none() {
            return;
        }
        if let Some(kind) = self.session.take_feedback() {
            self.flash.arm(kind, now);
            log::debug!(
                "answer {:?} at {}/{}",
                kind,
                self.session.position,
                self.session.sequence.len()
            );
        }
        if self.session.is_complete() {
            self.finish_session();
        }
    }

    pub fn hint(&mut self) {
        if self.screen == AppScreen::Drill && self.session.request_hint() {
            log::debug!("hint revealed {} chars", self.session.hint_len);
        }
    }

    fn finish_session(&mut self) {
        self.flash.cancel();
        let Some(summary) = SessionSummary::from_session(&self.session) else {
            return;
        };
        match serde_json::to_string(&summary) {
            Ok(json) => log::info!("session complete: {json}"),
            Err(err) => log::warn!("could not serialize session summary: {err}"),
        }
        self.last_summary = Some(summary);
        self.screen = AppScreen::Summary;
    }

    /// Abandon the running session, discarding its progress.
    pub fn end_session(&mut self) {
        if self.session.is_active() {
            log::info!(
                "session ended early at {}/{}",
                self.session.position,
                self.session.sequence.len()
            );
        }
        self.go_to_menu();
    }

    pub fn go_to_menu(&mut self) {
        self.session.end();
        self.flash.cancel();
        self.pick_slogan();
        self.screen = AppScreen::Menu;
    }

    /// Play the level that just finished again with a fresh order.
    pub fn restart(&mut self) {
        let level = self
            .last_summary
            .as_ref()
            .map(|s| s.level)
            .unwrap_or_else(|| self.menu.selected_level());
        self.start_level(level);
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.flash.poll(now);
    }

    pub fn active_flash(&self) -> Option<Feedback> {
        self.flash.active()
    }

    pub fn scoreboard_stats(&self) -> ScoreboardStats {
        self.scoreboard_stats_at(Instant::now())
    }

    pub fn scoreboard_stats_at(&self, now: Instant) -> ScoreboardStats {
        ScoreboardStats {
            elapsed_secs: self.session.elapsed_secs_at(now),
            correct: self.session.correct,
            incorrect: self.session.incorrect,
            wpm: self.session.words_per_minute_at(now),
            accuracy: self.session.accuracy_percent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;

    use super::*;
    use crate::catalog::dictionary::Dictionary;
    use crate::session::drill::Phase;

    const CATALOG: &str = r#"{
        "A1": [{"tr": "elma", "en": "apple"}, {"tr": "kitap", "en": "book"}],
        "A2": []
    }"#;

    fn app() -> App {
        let catalog = Dictionary::from_json(CATALOG).unwrap();
        App::new(Config::default(), Box::new(catalog), SmallRng::seed_from_u64(7))
    }

    fn answer(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.type_char(ch);
        }
        app.submit();
    }

    fn answer_current(app: &mut App) {
        let target = app.session.current_word().unwrap().target.clone();
        answer(app, &target);
    }

    #[test]
    fn opens_on_menu_with_configured_level() {
        let mut config = Config::default();
        config.default_level = Level::A2;
        let catalog = Dictionary::from_json(CATALOG).unwrap();
        let app = App::new(config, Box::new(catalog), SmallRng::seed_from_u64(1));
        assert_eq!(app.screen, AppScreen::Menu);
        assert_eq!(app.menu.selected_level(), Level::A2);
        assert!(SLOGANS.contains(&app.menu.slogan));
    }

    #[test]
    fn start_session_enters_drill() {
        let mut app = app();
        app.start_session();
        assert_eq!(app.screen, AppScreen::Drill);
        assert_eq!(app.session.phase, Phase::Active);
        assert_eq!(app.session.sequence.len(), 2);
    }

    #[test]
    fn empty_level_stays_on_menu_with_notice() {
        let mut app = app();
        app.start_level(Level::A2);
        assert_eq!(app.screen, AppScreen::Menu);
        assert_eq!(app.session.phase, Phase::Idle);
        assert!(app.menu.notice.is_some());
    }

    #[test]
    fn wrong_answer_arms_error_flash() {
        let mut app = app();
        app.start_session();
        answer(&mut app, "zzz");
        assert_eq!(app.active_flash(), Some(Feedback::Incorrect));
        assert_eq!(app.session.incorrect, 1);
        assert_eq!(app.session.position, 0);
        assert!(app.session.input.is_empty());
    }

    #[test]
    fn flash_clears_after_tick() {
        let mut app = app();
        app.start_session();
        let now = Instant::now();
        app.type_char('x');
        app.submit_at(now);
        app.on_tick(now + Duration::from_millis(100));
        assert_eq!(app.active_flash(), Some(Feedback::Incorrect));
        app.on_tick(now + Duration::from_millis(400));
        assert_eq!(app.active_flash(), None);
    }

    #[test]
    fn blank_submit_does_nothing() {
        let mut app = app();
        app.start_session();
        answer(&mut app, "   ");
        assert_eq!(app.active_flash(), None);
        assert_eq!(app.session.incorrect, 0);
    }

    #[test]
    fn completing_all_words_shows_summary() {
        let mut app = app();
        app.start_session();
        answer(&mut app, "nope");
        answer_current(&mut app);
        answer_current(&mut app);

        assert_eq!(app.screen, AppScreen::Summary);
        let summary = app.last_summary.as_ref().unwrap();
        assert_eq!(summary.level, Level::A1);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.incorrect, 1);
        assert_eq!(summary.accuracy, 67);
        assert_eq!(summary.missed.len(), 1);
        assert_eq!(app.active_flash(), None);
    }

    #[test]
    fn typing_outside_drill_is_ignored() {
        let mut app = app();
        app.type_char('a');
        app.hint();
        app.submit();
        assert!(app.session.input.is_empty());
        assert_eq!(app.session.hints_used, 0);
    }

    #[test]
    fn hint_reveals_a_letter() {
        let mut app = app();
        app.start_session();
        app.hint();
        assert_eq!(app.session.hint_len, 1);
        assert_eq!(app.session.hints_used, 1);
    }

    #[test]
    fn end_session_resets_to_menu() {
        let mut app = app();
        app.start_session();
        answer_current(&mut app);
        app.end_session();
        assert_eq!(app.screen, AppScreen::Menu);
        assert_eq!(app.session.phase, Phase::Idle);
        assert_eq!(app.session.correct, 0);
        assert_eq!(app.active_flash(), None);
    }

    #[test]
    fn restart_replays_finished_level() {
        let mut app = app();
        app.start_session();
        answer_current(&mut app);
        answer_current(&mut app);
        assert_eq!(app.screen, AppScreen::Summary);

        app.restart();
        assert_eq!(app.screen, AppScreen::Drill);
        assert_eq!(app.session.level, Some(Level::A1));
        assert_eq!(app.session.position, 0);
        assert_eq!(app.session.correct, 0);
        assert!(app.last_summary.is_none());
    }

    #[test]
    fn scoreboard_reflects_session() {
        let mut app = app();
        app.start_session();
        answer(&mut app, "nope");
        let stats = app.scoreboard_stats();
        assert_eq!(stats.correct, 0);
        assert_eq!(stats.incorrect, 1);
        assert_eq!(stats.accuracy, 0);
        assert_eq!(stats.wpm, 0);
    }
}
