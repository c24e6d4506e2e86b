//! Command-line interface for inspecting and growing an island

use crate::app::catalog::Catalog;
use crate::app::session::Session;
use crate::io::configuration::{
    DEFAULT_ASSET_DIR, DEFAULT_CATALOG_FILE, DEFAULT_DATA_FILE, DEFAULT_PREFIX,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use crate::io::error::Result;
use crate::io::progress::RevealProgress;
use crate::island::layout::Viewport;
use crate::island::model::IslandConfig;
use crate::island::reveal::{self, SystemClock};
use crate::render::canvas::export_island_png;
use crate::render::loader::ImageLoader;
use crate::store::Storage;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "islet")]
#[command(author, version, about = "Grow a persistent island of tiles")]
/// Command-line arguments for the island shell
pub struct Cli {
    /// Store document holding island state and currency
    #[arg(long, value_name = "FILE", default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Keep all state in memory, ignoring the data file
    #[arg(long)]
    pub memory: bool,

    /// Upgrade catalog file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CATALOG_FILE)]
    pub catalog: PathBuf,

    /// Directory holding tile artwork
    #[arg(long, value_name = "DIR", default_value = DEFAULT_ASSET_DIR)]
    pub assets: PathBuf,

    /// Viewport width in pixels, sampled once for responsive scaling
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_WIDTH)]
    pub width: f64,

    /// Viewport height in pixels, sampled once for responsive scaling
    #[arg(long, default_value_t = DEFAULT_VIEWPORT_HEIGHT)]
    pub height: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// What to do with the island
    #[command(subcommand)]
    pub command: Command,
}

/// Shell subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Show island size, level, and balance
    Status,
    /// List catalog upgrades and which one is purchasable
    Upgrades,
    /// Purchase the next upgrade and reveal the new tiles
    Buy,
    /// Render the island to a PNG snapshot
    Render {
        /// Output path for the snapshot
        #[arg(short, long, value_name = "FILE", default_value = "island.png")]
        output: PathBuf,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one shell invocation against the persisted island
pub struct Shell {
    cli: Cli,
}

impl Shell {
    /// Create a shell from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the upgrade catalog cannot be loaded, a purchase
    /// is unavailable or unaffordable, or snapshot rendering fails.
    pub fn run(&self) -> Result<()> {
        let catalog = Catalog::from_file(&self.cli.catalog)?;
        let storage = if self.cli.memory {
            Storage::in_memory(DEFAULT_PREFIX)
        } else {
            Storage::open(DEFAULT_PREFIX, &self.cli.data)
        };
        let config = IslandConfig {
            viewport: Viewport::new(self.cli.width, self.cli.height),
            ..IslandConfig::default()
        };
        let mut session = Session::new(storage, catalog, config);

        match self.cli.command {
            Command::Status => {
                Self::print_status(&session);
                Ok(())
            }
            Command::Upgrades => {
                Self::print_upgrades(&session);
                Ok(())
            }
            Command::Buy => self.buy(&mut session),
            Command::Render { ref output } => {
                let mut loader = ImageLoader::new();
                export_island_png(session.island(), &mut loader, &self.cli.assets, output)
            }
        }
    }

    // Allow print for user-facing status output
    #[allow(clippy::print_stdout)]
    fn print_status(session: &Session) {
        let island = session.island();
        println!("Island size: {0}x{0}", island.size());
        println!("Level: {}", island.level());
        println!("Balance: {} coins", format_money(session.money()));
        match session.next_upgrade() {
            Some(upgrade) => println!(
                "Next upgrade: {} ({} coins)",
                upgrade.label,
                format_money(upgrade.cost)
            ),
            None => println!("Next upgrade: none"),
        }
    }

    // Allow print for user-facing catalog output
    #[allow(clippy::print_stdout)]
    fn print_upgrades(session: &Session) {
        let purchasable_level = session.island().level() + 1;
        for upgrade in session.catalog().upgrades() {
            let marker = if upgrade.level == purchasable_level {
                ">"
            } else {
                " "
            };
            println!(
                "{marker} [{}] {}: {} coins, +{} size, {} tiles",
                upgrade.level,
                upgrade.label,
                format_money(upgrade.cost),
                upgrade.size_increase,
                upgrade.tile_type
            );
        }
    }

    // Allow print for user feedback after the purchase completes
    #[allow(clippy::print_stdout)]
    fn buy(&self, session: &mut Session) -> Result<()> {
        let label = session.next_upgrade().map(|upgrade| upgrade.label.clone());

        let mut batch = session.purchase_next()?;
        let progress =
            RevealProgress::new(batch.steps().len(), self.cli.should_show_progress());
        let mut clock = SystemClock;
        reveal::play(
            session.island_mut(),
            &mut batch,
            &mut clock,
            |revealed, _total| progress.update(revealed),
        );
        progress.finish();

        if !self.cli.quiet {
            println!(
                "Purchased {}: island is now {1}x{1} at level {2}, balance {3} coins",
                label.unwrap_or_default(),
                session.island().size(),
                session.island().level(),
                format_money(session.money())
            );
        }
        Ok(())
    }
}

/// Group a currency amount into thousands for display
pub fn format_money(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
