use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use adventide::admin::AdminAccess;
use adventide::app::App;
use adventide::config::{self, Config};
use adventide::content::ContentStore;
use adventide::handlers::{self, Effect};
use adventide::kv::{FsStore, KvStore, MemStore};
use adventide::progress::ProgressStore;
use adventide::ui;

fn main() -> Result<(), io::Error> {
    let args: Vec<String> = std::env::args().collect();

    if args.get(1).map(String::as_str) == Some("init") {
        return match Config::init() {
            Ok(true) => {
                println!(
                    "Created config file at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Ok(false) => {
                println!(
                    "Config file already exists at: {}",
                    config::get_config_path().display()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("Failed to create config file: {e}");
                Err(e)
            }
        };
    }

    // The admin surface only exists when asked for out of band; there is
    // no path to it from inside the UI.
    let admin_access = (args.iter().any(|a| a == "--admin")
        || std::env::var_os("ADVENTIDE_ADMIN").is_some())
    .then(AdminAccess::grant);

    let config = Config::load().unwrap_or_default();
    let content = ContentStore::new(open_store(config.overrides_dir()));
    let progress = ProgressStore::new(open_store(config.progress_dir()));
    let app = App::new(config, content, progress, admin_access);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Per-namespace store, falling back to memory if the data directory is
/// unusable. The calendar stays interactive either way.
fn open_store(dir: std::path::PathBuf) -> Box<dyn KvStore> {
    match FsStore::open(dir.clone()) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("cannot open {}: {e}; persistence disabled", dir.display());
            Box::new(MemStore::new())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);

        terminal.draw(|f| ui::render_app(f, &app, now))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            app.status_message = None;

            match handlers::handle_key(&mut app, key, Instant::now()) {
                Effect::None => {}
                Effect::ExportDraft(json) => export_to_clipboard(&mut app, json),
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn export_to_clipboard(app: &mut App, json: String) {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(json)) {
        Ok(()) => app.status_message = Some("Draft copied to clipboard".to_string()),
        Err(e) => app.status_message = Some(format!("Clipboard unavailable: {e}")),
    }
}
