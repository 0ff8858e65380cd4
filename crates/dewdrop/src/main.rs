use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use dewdrop_config::Config;
use dewdrop_core::{DropSize, Theme};
use ratatui::DefaultTerminal;

mod app;
mod logging;
mod overlay;
mod pointer;

use app::App;

#[derive(Parser, Debug)]
#[command(name = "dewdrop", version)]
#[command(about = "Seasonal particles with a draggable liquid drop, in your terminal")]
struct Cli {
    /// Config file. Defaults to $DEWDROP_CONFIG, then the platform config dir.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme: spring, summer, autumn, winter or dark
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Show the liquid drop at startup
    #[arg(short, long)]
    drop: bool,

    /// Drop size in pixels (100 to 500, steps of 10)
    #[arg(short = 's', long, value_name = "PX")]
    drop_size: Option<u32>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Command-line flags win over the config file.
    fn apply(&self, config: &mut Config) {
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if self.drop {
            config.show_drop = true;
        }
        if let Some(px) = self.drop_size {
            config.drop_size = DropSize::new(px);
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let (mut config, config_error) = Config::load(cli.config.as_deref());
    cli.apply(&mut config);

    if cli.print_config {
        if let Some(e) = &config_error {
            eprintln!("warning: {e}");
        }
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    logging::init(config.log_file.as_deref())?;
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "config not loaded, using defaults");
    }
    tracing::info!(theme = %config.theme, fps = config.fps, "starting");

    let terminal = ratatui::init();
    let result = run(terminal, config);
    ratatui::restore();
    result
}

fn run(terminal: DefaultTerminal, config: Config) -> color_eyre::Result<()> {
    let capture = MouseCapture::enable();
    let size = terminal.size()?;
    let mut app = App::new(config, size.width, size.height);
    app.set_exclusive_capture(capture.active);
    app.run(terminal)
}

/// Mouse reporting for the lifetime of the value.
struct MouseCapture {
    active: bool,
}

impl MouseCapture {
    fn enable() -> Self {
        match execute!(io::stdout(), EnableMouseCapture) {
            Ok(()) => Self { active: true },
            Err(e) => {
                tracing::warn!(error = %e, "mouse capture unavailable, drag tracking is shared");
                Self { active: false }
            }
        }
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        if self.active
            && let Err(e) = execute!(io::stdout(), DisableMouseCapture)
        {
            tracing::warn!(error = %e, "failed to disable mouse capture");
        }
    }
}
