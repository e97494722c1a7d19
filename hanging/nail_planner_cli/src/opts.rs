#![deny(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::{ThemeArg, UnitSystemArg};

#[derive(Parser, Debug)]
#[command(name = "nail_planner")]
#[command(bin_name = "nail_planner")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    /// Preferences and presets file
    #[arg(long, env = "NAIL_PLANNER_STORE", default_value = "nail_planner.json")]
    pub(crate) store: PathBuf,

    #[command(subcommand)]
    pub(crate) command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Calculate the nail height
    Calculate {
        /// Frame height, e.g. '24', '30 1/2' or '61.5'
        #[arg(long, allow_hyphen_values = true)]
        frame: String,

        /// Distance from the top of the frame down to the hanging point
        #[arg(long, allow_hyphen_values = true)]
        anchor: String,

        /// Height of the center of the frame above the floor, defaults to 60in or 150cm
        #[arg(long, allow_hyphen_values = true)]
        center: Option<String>,

        /// Unit system of the values, defaults to the unit preference
        #[arg(long)]
        unit: Option<UnitSystemArg>,

        /// Output the full report, including the diagram layout, as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Convert a value, as typed, to another unit system
    Convert {
        /// Value, e.g. '30 1/2'
        #[arg(allow_hyphen_values = true)]
        raw: String,

        /// Unit system of the value
        #[arg(long)]
        from: UnitSystemArg,

        /// Unit system to convert to
        #[arg(long)]
        to: UnitSystemArg,
    },

    /// Show or set the unit preference
    Unit {
        /// The unit system to use for subsequent calculations
        unit: Option<UnitSystemArg>,
    },

    /// Show or set the theme preference
    Theme {
        /// The theme
        theme: Option<ThemeArg>,
    },

    /// Manage presets
    #[command(subcommand)]
    Preset(PresetCommand),
}

#[derive(Debug, Subcommand)]
pub(crate) enum PresetCommand {
    /// Save a preset, replacing any preset with the same name
    Save {
        /// Name of the preset, e.g. 'Hallway'
        #[arg(long)]
        name: String,

        /// Frame height
        #[arg(long, allow_hyphen_values = true)]
        frame: String,

        /// Distance from the top of the frame down to the hanging point
        #[arg(long, allow_hyphen_values = true)]
        anchor: String,

        /// Height of the center of the frame above the floor
        #[arg(long, allow_hyphen_values = true)]
        center: Option<String>,

        /// Unit system of the values, defaults to the unit preference
        #[arg(long)]
        unit: Option<UnitSystemArg>,
    },

    /// List the presets
    List,

    /// Show a preset and its calculation
    Show {
        /// Name of the preset
        name: String,

        /// Unit system to show the values in, defaults to the unit preference
        #[arg(long)]
        unit: Option<UnitSystemArg>,
    },

    /// Delete a preset
    Delete {
        /// Name of the preset
        name: String,
    },

    /// Restore the last deleted preset
    Undo,
}
