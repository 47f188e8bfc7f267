// File: crates/chartrun/src/cli.rs
// Summary: Command-line definition (clap derive) and its mapping onto a run configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use chartrun_core::types::Insets;
use chartrun_core::{FileNaming, OutputTarget, RenderOptions, Theme};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run built-in chart scripts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub script: ScriptCmd,

    /// Write PNGs instead of showing each chart in a window
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub save: bool,

    /// Output directory for saved charts [default: plots, or . with --flat]
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub out_dir: Option<PathBuf>,

    /// File name prefix for saved charts
    #[arg(long, global = true, default_value = "plot")]
    pub prefix: String,

    /// Name files {prefix}_{n}.png, without the run id
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub flat: bool,

    #[arg(long, global = true, value_enum, default_value_t = ThemeOpt::Classic)]
    pub theme: ThemeOpt,

    /// Canvas width in pixels
    #[arg(long, global = true, default_value_t = 1024)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(long, global = true, default_value_t = 640)]
    pub height: i32,

    /// Debug-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ScriptCmd {
    /// Line, histogram, heatmap, bar, pie, scatter and box plot over inline data
    Showcase,
    /// Scatter, box and pie charts with explicit colors and percentages
    ScatterBox,
    /// Charts over two columns of a CSV file
    Table(TableArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct TableArgs {
    /// CSV file with a header row
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Column for the x axis (numeric, or categories)
    #[arg(long)]
    pub x: String,

    /// Numeric column for the y axis
    #[arg(long)]
    pub y: String,

    /// Parse the x column as dates (YYYY-MM-DD) and draw a timeline
    #[arg(long, action = ArgAction::SetTrue)]
    pub dates: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeOpt {
    Classic,
    Light,
    Dark,
}

impl ThemeOpt {
    pub fn theme(self) -> Theme {
        match self {
            ThemeOpt::Classic => Theme::classic(),
            ThemeOpt::Light => Theme::light(),
            ThemeOpt::Dark => Theme::dark(),
        }
    }
}

/// Everything a run needs, resolved from the command line.
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub target: OutputTarget,
    pub render: RenderOptions,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        let target = if self.save {
            let naming = if self.flat {
                let dir = self.out_dir.clone().unwrap_or_else(|| PathBuf::from("."));
                FileNaming::new(dir, self.prefix.clone(), None)
            } else {
                let dir = self.out_dir.clone().unwrap_or_else(|| PathBuf::from("plots"));
                FileNaming::timestamped(dir, self.prefix.clone())
            };
            OutputTarget::File(naming)
        } else {
            OutputTarget::Display
        };
        let render = RenderOptions {
            width: self.width.max(64),
            height: self.height.max(64),
            insets: Insets::default(),
            theme: self.theme.theme(),
            draw_labels: true,
        };
        RunConfig { target, render }
    }

    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
