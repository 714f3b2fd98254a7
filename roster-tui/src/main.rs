//! Employee roster terminal UI
//!
//! Run: cargo run -p roster-tui -- [LOCATION]
//!
//! LOCATION overrides `ROSTER_LOCATION`, e.g. `"/management-employee?page=2&limit=10"`.

mod app;
mod command;
mod logger;
mod ui;

use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use roster_core::Config;
use std::io::{self, Stdout};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // 1. 环境变量 (.env)
    dotenv::dotenv().ok();

    // 2. 加载配置, 命令行位置参数优先
    let mut config = Config::from_env();
    if let Some(location) = std::env::args().nth(1) {
        config = config.with_location(location);
    }

    // 3. 日志
    logger::init_logger(&config)?;
    tracing::info!(location = %config.location, "roster starting");
    tracing::info!("Press 'a' to add, '/' for commands, 'q' to quit");

    // 4. 终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app, Duration::from_millis(config.tick_ms));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    tick: Duration,
) -> anyhow::Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        if app.should_quit {
            tracing::info!("roster exiting");
            return Ok(());
        }
    }
}
