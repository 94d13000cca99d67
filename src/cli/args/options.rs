use clap::error::ErrorKind;
use clap::{CommandFactory, ValueEnum};
use kitty_theme::ThemeSlot;

use super::definitions::CliArgs;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// The single operation a run performs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    List,
    Show,
    Preview(String),
    Cycle,
    Toggle { live: bool },
    Set {
        slot: ThemeSlot,
        theme: String,
        activate: bool,
        live: bool,
    },
    /// Re-apply the active theme to running windows.
    Live,
    /// Print setup guidance; needs no configuration.
    HelpConfig,
}

impl Action {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Show => "show",
            Action::Preview(_) => "test",
            Action::Cycle => "cycle",
            Action::Toggle { .. } => "toggle",
            Action::Set {
                slot: ThemeSlot::Light,
                ..
            } => "setl",
            Action::Set {
                slot: ThemeSlot::Dark,
                ..
            } => "setd",
            Action::Live => "live",
            Action::HelpConfig => "help-config",
        }
    }
}

impl CliArgs {
    /// Decide which action the flags ask for, requiring a theme name where
    /// the action needs one.
    pub(crate) fn action(&self) -> Result<Action, clap::Error> {
        let slot = if self.set_light {
            Some(ThemeSlot::Light)
        } else if self.set_dark {
            Some(ThemeSlot::Dark)
        } else {
            None
        };

        if let Some(slot) = slot {
            let theme = self.required_theme(if self.set_light { "--setl" } else { "--setd" })?;
            return Ok(Action::Set {
                slot,
                theme,
                activate: self.activate,
                live: self.live,
            });
        }
        if self.help_config {
            return Ok(Action::HelpConfig);
        }
        if self.test {
            return Ok(Action::Preview(self.required_theme("--test")?));
        }
        if self.list {
            return Ok(Action::List);
        }
        if self.cycle {
            return Ok(Action::Cycle);
        }
        if self.toggle {
            return Ok(Action::Toggle { live: self.live });
        }
        if self.live {
            return Ok(Action::Live);
        }
        Ok(Action::Show)
    }

    fn required_theme(&self, flag: &str) -> Result<String, clap::Error> {
        match self.theme.as_deref().map(str::trim) {
            Some(theme) if !theme.is_empty() => Ok(theme.to_string()),
            _ => Err(CliArgs::command().error(
                ErrorKind::MissingRequiredArgument,
                format!("the {flag} action requires a theme name"),
            )),
        }
    }
}
