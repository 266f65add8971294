use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

use rollcall::App;
use rollcall::config::{self, Config, ConfigResult};
use rollcall::directory::{LayoutMode, SortKey};
use rollcall::repository::{BotFilter, ContributorRepository, DirectoryLoader};

/// Browse contributors merged from leaderboard snapshots
#[derive(Parser, Debug)]
#[command(version, about = "Terminal contributor directory built from leaderboard snapshots")]
struct Args {
    /// Directory holding the per-period leaderboard JSON files
    data_dir: Option<PathBuf>,

    /// Initial layout of the contributor list
    #[arg(long, value_enum)]
    layout: Option<LayoutMode>,

    /// Initial sort order of the contributor list
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Print the merged directory as JSON and exit
    #[arg(long)]
    dump: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(dir) = &self.data_dir {
            config.data.dir = dir.clone();
        }
        if let Some(layout) = self.layout {
            config.directory.layout = layout;
        }
        if let Some(sort) = self.sort {
            config.directory.sort = sort;
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/rollcall-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/rollcall-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    let now = chrono::Local::now();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        now.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== ROLLCALL DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let mut config_result = config::load_config();
    let args = Args::parse();
    args.apply_to(&mut config_result.config);

    let repository = ContributorRepository::new(
        config_result.config.data.dir.clone(),
        BotFilter::with_extra_patterns(&config_result.config.bots.extra_patterns),
    );

    if args.dump {
        return dump(&repository);
    }

    let terminal = init_terminal()?;

    // The first frame draws while the files are still being merged
    let loader = DirectoryLoader::spawn_load(repository);
    let app = App::new_with_loader(loader, &config_result.config);
    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== ROLLCALL DEBUG SESSION ENDED ===");

    Ok(())
}

/// Merge synchronously and print the directory as pretty JSON
fn dump(repository: &ContributorRepository) -> Result<()> {
    let directory = repository.load()?;
    for skipped in &directory.skipped {
        eprintln!("Skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    println!("{}", serde_json::to_string_pretty(&directory)?);
    Ok(())
}

/// Raw mode, alternate screen, bracketed paste and mouse capture
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    if let Err(e) = execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e.into())
        }
    }
}

fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render so loaded data shows on this frame
        app.poll_loader();

        terminal.draw(|frame| app.render(frame))?;
        app.frame_rendered();

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
