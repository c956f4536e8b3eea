use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use autofill::app::App;
use autofill::config::{self, ConfigResult};
use autofill::dataset::Dataset;

/// Pick a label/value pair from a dataset with an autocomplete field
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file of [label, value] pairs or {label, value} objects ("-" reads stdin)
    #[arg(value_name = "DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/autofill/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the selection as JSON
    #[arg(long)]
    json: bool,

    /// Write debug logs to this file (filter with AUTOFILL_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    let data = match &args.data_file {
        Some(path) => Dataset::read(path)
            .wrap_err_with(|| format!("failed to load dataset from {}", path.display()))?,
        None => Dataset::provinces(),
    };
    log::debug!("loaded {} entries", data.len());

    let app = App::new(data, &config).with_warning(warning);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    // Restore terminal before printing anything
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    let app = result?;
    if let Some((label, value)) = app.selection() {
        if args.json {
            let output = serde_json::json!({ "label": label, "value": value });
            println!("{}", output);
        } else {
            println!("{}\t{}", label, value);
        }
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }
    Ok(app)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("AUTOFILL_LOG", "debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
