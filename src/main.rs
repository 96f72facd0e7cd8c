use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use refleks::app::{App, AppScreen};
use refleks::catalog::WordCatalog;
use refleks::catalog::dictionary::Dictionary;
use refleks::catalog::level::Level;
use refleks::config::Config;
use refleks::event::{AppEvent, EventHandler, is_text_entry};
use refleks::logging;
use refleks::ui::components::answer_input::AnswerInput;
use refleks::ui::components::progress_bar::ProgressBar;
use refleks::ui::components::scoreboard::Scoreboard;
use refleks::ui::components::summary::Summary;
use refleks::ui::components::word_display::WordDisplay;
use refleks::ui::layout::{DrillLayout, LayoutTier, centered_rect};
use refleks::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "refleks",
    version,
    about = "Turkish to English vocabulary drills in the terminal"
)]
struct Cli {
    #[arg(short, long, help = "Start a session right away (A1, A2, B1, B2, mixed)")]
    level: Option<Level>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "JSON word catalog to use instead of the bundled lists")]
    words: Option<PathBuf>,

    #[arg(long, help = "Seed for a reproducible word order")]
    seed: Option<u64>,

    #[arg(long, help = "Log filter, e.g. info or refleks=debug")]
    log_level: Option<String>,

    #[arg(long, help = "Write the effective settings to the config file")]
    save_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(filter) = cli.log_level {
        config.log_level = filter;
    }

    let log_path = logging::default_log_path();
    if let Err(err) = logging::init(&config.log_level, &log_path) {
        eprintln!("logging disabled: {err:#}");
    }
    if let Some(err) = config_err {
        log::warn!("using default config: {err:#}");
    }

    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(path) = cli.words {
        config.catalog_path = Some(path.to_string_lossy().into_owned());
    }
    config.normalize(&Theme::available_themes());

    if cli.save_config {
        config.save()?;
        log::info!("saved config to {}", Config::config_path().display());
    }

    let catalog: Box<dyn WordCatalog> = match config.catalog_path.as_deref() {
        Some(path) => Box::new(Dictionary::load(Path::new(path))?),
        None => Box::new(Dictionary::embedded()),
    };
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let tick_rate = config.tick_rate();
    let mut app = App::new(config, catalog, rng);
    if let Some(level) = cli.level {
        app.start_level(level);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        log::error!("{err:#}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick | AppEvent::Resize => {}
        }
        app.on_tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::Drill => handle_drill_key(app, key),
        AppScreen::Summary => handle_summary_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.menu.next()
        }
        KeyCode::Char(ch @ '1'..='5') => {
            let idx = ch as usize - '1' as usize;
            if let Some(&level) = Level::ALL.get(idx) {
                app.menu.select(level);
            }
        }
        KeyCode::Enter => app.start_session(),
        _ => {}
    }
}

fn handle_drill_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.end_session(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit(),
        KeyCode::Tab => app.hint(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(ch) if is_text_entry(&key) => app.type_char(ch),
        _ => {}
    }
}

fn handle_summary_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') | KeyCode::Enter => app.restart(),
        KeyCode::Char('m') | KeyCode::Char('q') | KeyCode::Esc => app.go_to_menu(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::Drill => render_drill(frame, app),
        AppScreen::Summary => render_summary(frame, app),
    }
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let menu_area = centered_rect(80, 70, frame.area());
    frame.render_widget(&app.menu, menu_area);
}

fn render_drill(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let Some(word) = app.session.current_word() else {
        return;
    };

    let layout = DrillLayout::new(frame.area());
    let flash = app.active_flash();
    let hint = app.session.hint_text();

    frame.render_widget(
        Scoreboard::new(app.scoreboard_stats(), app.theme)
            .compact(layout.tier == LayoutTier::Narrow),
        layout.scoreboard,
    );
    frame.render_widget(
        WordDisplay::new(
            word,
            app.session.position,
            app.session.sequence.len(),
            app.theme,
        )
        .hint(&hint)
        .flash(flash),
        layout.word,
    );
    frame.render_widget(
        AnswerInput::new(&app.session.input, flash, app.theme),
        layout.input,
    );
    if let Some(progress) = layout.progress {
        frame.render_widget(
            ProgressBar::new("İlerleme", app.session.progress(), app.theme),
            progress,
        );
    }

    let level = app.session.level.map(Level::label).unwrap_or_default();
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {level} "),
            Style::default().fg(colors.header_fg()).bg(colors.header_bg()),
        ),
        Span::styled(
            "  [Enter] Kontrol  [Tab] İpucu  [Esc] Bitir",
            Style::default().fg(colors.dim()),
        ),
    ]));
    frame.render_widget(footer, layout.footer);
}

fn render_summary(frame: &mut ratatui::Frame, app: &App) {
    if let Some(ref summary) = app.last_summary {
        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Summary::new(summary, app.theme), area);
    }
}
