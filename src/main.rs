use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use tui_typing_tutor::app::App;
use tui_typing_tutor::config::Config;
use tui_typing_tutor::engine::Engine;
use tui_typing_tutor::engine::passage::Passage;
use tui_typing_tutor::event::{AppEvent, EventHandler};
use tui_typing_tutor::keyboard::layout::LAYOUT_NAMES;
use tui_typing_tutor::logging;
use tui_typing_tutor::ui::components::header::Header;
use tui_typing_tutor::ui::components::keyboard_diagram::KeyboardDiagram;
use tui_typing_tutor::ui::components::stats_sidebar::StatsSidebar;
use tui_typing_tutor::ui::components::status_bar::StatusBar;
use tui_typing_tutor::ui::components::typing_area::TypingArea;
use tui_typing_tutor::ui::layout::AppLayout;
use tui_typing_tutor::ui::theme::Theme;

#[derive(Parser)]
#[command(
    name = "tui-typing-tutor",
    version,
    about = "Terminal typing tutor with an on-screen Tarmak keyboard"
)]
struct Cli {
    #[arg(short, long, help = "Passage text file (defaults to the bundled sample)")]
    passage: Option<PathBuf>,

    #[arg(short, long, allow_negative_numbers = true, help = "Characters per display row")]
    width: Option<i64>,

    #[arg(long, help = "Words-per-minute ceiling; bounds the passage length")]
    wpm: Option<u32>,

    #[arg(short, long, help = "Consecutive misses before suggesting a break (0 disables)")]
    frustration: Option<u32>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Keyboard layout (tarmak2-dhm, colemak-dh, qwerty)")]
    layout: Option<String>,

    #[arg(long, help = "Log level when TUI_TYPING_TUTOR_LOG is unset")]
    log_level: Option<String>,

    #[arg(long, help = "Write the effective configuration to the config file and exit")]
    write_config: bool,

    #[arg(long, help = "List bundled themes and keyboard layouts and exit")]
    list: bool,
}

impl Cli {
    fn apply(self, config: &mut Config) {
        if let Some(path) = self.passage {
            config.passage_path = Some(path);
        }
        if let Some(width) = self.width {
            config.row_width = width;
        }
        if let Some(wpm) = self.wpm {
            config.wpm_ceiling = wpm;
        }
        if let Some(threshold) = self.frustration {
            config.frustration_threshold = threshold;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(layout) = self.layout {
            config.keyboard_layout = layout;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        println!("themes:  {}", Theme::available_themes().join(", "));
        println!("layouts: {}", LAYOUT_NAMES.join(", "));
        return Ok(());
    }

    let write_config = cli.write_config;
    let mut config = Config::load()?;
    cli.apply(&mut config);
    let settings = config.validate()?;

    if write_config {
        let path = Config::config_path();
        config.save(&path)?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let log_path = logging::init(&config.log_level)?;
    tracing::info!(log = %log_path.display(), ?settings, "starting");

    let passage = match &config.passage_path {
        Some(path) => Passage::load(path, settings.wpm_ceiling)?,
        None => Passage::bundled(settings.wpm_ceiling),
    };
    let layout = config.layout()?;
    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "unknown theme, using default");
        Theme::default()
    });

    let engine = Engine::new(passage, &settings);
    let mut app = App::new(engine, layout, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("typing session failed")
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Tick | AppEvent::Resize => {}
        }

        if app.should_quit {
            tracing::info!(
                index = app.engine.exercise().index(),
                complete = app.engine.exercise().is_complete(),
                "quitting"
            );
            return Ok(());
        }
    }
}

fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    let theme = &app.theme;

    frame.render_widget(Header::new(&app.layout.name, theme), layout.header);
    frame.render_widget(TypingArea::new(&app.engine, theme), layout.typing);

    if let Some(sidebar) = layout.sidebar {
        frame.render_widget(StatsSidebar::new(&app.engine, theme), sidebar);
    }

    if let Some(keyboard) = layout.keyboard {
        let diagram =
            KeyboardDiagram::new(&app.layout, app.hit_key.as_ref(), app.next_key(), theme);
        frame.render_widget(diagram, keyboard);
    }

    let (message, tone) = app.status();
    frame.render_widget(
        StatusBar::new(app.engine.exercise().progress(), &message, tone, theme),
        layout.footer,
    );
}
