use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `kitty-theme` binary.
#[derive(Parser, Debug)]
#[command(
    name = "kitty-theme",
    version,
    long_version = long_version(),
    about = "Set, toggle and live-apply kitty terminal themes",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short = 'l',
        long = "list",
        group = "action",
        help = "List available themes"
    )]
    pub(crate) list: bool,
    #[arg(
        short = 's',
        long = "show",
        group = "action",
        help = "Show the current theme configuration (default action)"
    )]
    pub(crate) show: bool,
    #[arg(
        long = "test",
        group = "action",
        help = "Try THEME in the active kitty window without saving it"
    )]
    pub(crate) test: bool,
    #[arg(
        long = "cycle",
        group = "action",
        help = "Preview every theme in turn, pressing Enter to advance and q to stop"
    )]
    pub(crate) cycle: bool,
    #[arg(
        short = 't',
        long = "toggle",
        group = "action",
        help = "Toggle between the light and dark themes"
    )]
    pub(crate) toggle: bool,
    #[arg(
        long = "setl",
        group = "action",
        help = "Set THEME as the light theme"
    )]
    pub(crate) set_light: bool,
    #[arg(
        long = "setd",
        group = "action",
        help = "Set THEME as the dark theme"
    )]
    pub(crate) set_dark: bool,
    #[arg(
        long = "help-config",
        group = "action",
        help = "Explain how to set up kitty and the kitty-theme config file"
    )]
    pub(crate) help_config: bool,
    #[arg(
        short = 'L',
        long = "live",
        help = "Update running kitty windows; on its own, re-apply the active theme"
    )]
    pub(crate) live: bool,
    #[arg(
        short = 'a',
        long = "activate",
        help = "Make the slot set by --setl/--setd the active one (default: only if already active)"
    )]
    pub(crate) activate: bool,
    #[arg(
        value_name = "THEME",
        help = "Theme name to use; see --list for the available themes"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "KITTY_THEME_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long = "theme-dir",
        value_name = "PATH",
        help = "Directory containing theme files (default: <kitty config>/themes)"
    )]
    pub(crate) theme_dir: Option<PathBuf>,
    #[arg(
        long = "conf-dir",
        value_name = "PATH",
        help = "kitty configuration directory holding the theme links (default: ~/.config/kitty)"
    )]
    pub(crate) conf_dir: Option<PathBuf>,
    #[arg(
        long,
        value_name = "ADDRESS",
        help = "kitty remote control socket (default: unix:/tmp/kittysocket)"
    )]
    pub(crate) socket: Option<String>,
    #[arg(
        long = "timeout-ms",
        value_name = "MS",
        help = "How long to wait for each kitty window to answer (default: 1500)"
    )]
    pub(crate) timeout_ms: Option<u64>,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase logging verbosity (repeatable)"
    )]
    pub(crate) verbose: u8,
    #[arg(
        short = 'd',
        long = "debug",
        help = "Enable all debugging output"
    )]
    pub(crate) debug: bool,
}
