use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::str::FromStr;

use crate::error::StorefrontError;
use crate::prefs::ThemeValue;
use crate::view::{NameOrder, PriceOrder, RatingOrder};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Browse, search and sort a product catalog")]
#[command(version)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `storefront=trace` (overrides STOREFRONT_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive product browser (default)
    #[command(visible_alias = "b")]
    Browse,

    /// Fetch the catalog once and print the filtered, sorted list
    #[command(visible_alias = "ls")]
    List {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Name order: all, a-z, z-a
        #[arg(long, default_value = "all", value_parser = parse_name_order)]
        name: NameOrder,

        /// Price order: default, low-high, high-low
        #[arg(long, default_value = "default", value_parser = parse_price_order)]
        price: PriceOrder,

        /// Rating order: default, 1-5, 5-1
        #[arg(long, default_value = "default", value_parser = parse_rating_order)]
        rating: RatingOrder,

        /// Product listing endpoint (overrides config and STOREFRONT_ENDPOINT)
        #[arg(long)]
        endpoint: Option<String>,

        /// Number of products to request
        #[arg(long, value_parser = parse_limit)]
        limit: Option<u32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the dark mode preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the stored value (enabled or disabled)
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Flip dark mode and store the new value
    Toggle,
    /// Store an explicit value
    Set {
        /// enabled or disabled
        #[arg(value_parser = parse_theme_value)]
        value: ThemeValue,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (endpoint, limit, timeout, like_window)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (endpoint, limit, timeout, like_window)
        key: String,
    },
}

impl Cli {
    /// True when the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Browse))
    }

    pub async fn run(self) -> crate::error::Result<()> {
        self.command.unwrap_or(Commands::Browse).run().await
    }
}

impl Commands {
    /// Execute the command, dispatching to the appropriate handler.
    pub async fn run(self) -> crate::error::Result<()> {
        use crate::commands::{
            ListOptions, cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_list,
            cmd_theme_set, cmd_theme_show, cmd_theme_toggle,
        };

        match self {
            Commands::Browse => cmd_browse().await,

            Commands::List {
                search,
                name,
                price,
                rating,
                endpoint,
                limit,
                json,
            } => {
                cmd_list(ListOptions {
                    search,
                    name,
                    price,
                    rating,
                    endpoint,
                    limit,
                    json,
                })
                .await
            }

            Commands::Theme { action } => match action {
                ThemeAction::Show { json } => cmd_theme_show(json),
                ThemeAction::Toggle => cmd_theme_toggle(),
                ThemeAction::Set { value } => cmd_theme_set(value),
            },

            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
                ConfigAction::Get { key } => cmd_config_get(&key),
            },

            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Parse an option value, turning the crate error into clap's message
fn parse_option<T>(s: &str) -> Result<T, String>
where
    T: FromStr<Err = StorefrontError>,
{
    T::from_str(s).map_err(|e| e.to_string())
}

fn parse_name_order(s: &str) -> Result<NameOrder, String> {
    parse_option(s)
}

fn parse_price_order(s: &str) -> Result<PriceOrder, String> {
    parse_option(s)
}

fn parse_rating_order(s: &str) -> Result<RatingOrder, String> {
    parse_option(s)
}

fn parse_theme_value(s: &str) -> Result<ThemeValue, String> {
    parse_option(s)
}

fn parse_limit(s: &str) -> Result<u32, String> {
    match s.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("invalid limit '{s}'. Expected a positive integer")),
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "storefront", &mut io::stdout());
}
