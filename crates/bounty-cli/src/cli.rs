//! Command definitions and handlers.
//!
//! Implements the parameter wrapper pattern: each command has a
//! CLI-specific argument struct with clap derives that converts into
//! the framework-free core parameter type, so the core stays
//! interface-agnostic while help text and parsing live here.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker ops
//! ```

use anyhow::Result;
use bounty_core::{
    params::{ItemId, ListMissions, MissionId, SetInitialBalance, SetVisible},
    BalanceSheet, MissionBoard, OperationStatus, PurchaseResult, ShopCatalog, Tracker,
};
use clap::{Args, Subcommand};
use jiff::Timestamp;
use log::info;

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Arguments for commands addressing a single mission
#[derive(Args)]
pub struct MissionIdArg {
    /// Identifier of the mission (see `bp mission list`)
    pub id: String,
}

impl From<MissionIdArg> for MissionId {
    fn from(val: MissionIdArg) -> Self {
        MissionId { id: val.id }
    }
}

/// Arguments for listing missions
#[derive(Args)]
pub struct ListMissionsArgs {
    /// Include hidden missions
    #[arg(short, long)]
    pub all: bool,
}

impl From<ListMissionsArgs> for ListMissions {
    fn from(val: ListMissionsArgs) -> Self {
        ListMissions { all: val.all }
    }
}

/// Arguments for setting the initial balance adjustment
#[derive(Args)]
pub struct SetBalanceArgs {
    /// New initial BP amount (must be non-negative)
    #[arg(allow_hyphen_values = true)]
    pub amount: i64,
}

impl From<SetBalanceArgs> for SetInitialBalance {
    fn from(val: SetBalanceArgs) -> Self {
        SetInitialBalance { amount: val.amount }
    }
}

/// Arguments for buying a shop item
#[derive(Args)]
pub struct BuyArgs {
    /// Identifier of the item (see `bp shop list`)
    pub id: String,
}

impl From<BuyArgs> for ItemId {
    fn from(val: BuyArgs) -> Self {
        ItemId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum MissionCommands {
    /// List missions with progress and the current balance
    #[command(alias = "ls")]
    List(ListMissionsArgs),
    /// Toggle a mission's completion flag
    #[command(alias = "t")]
    Toggle(MissionIdArg),
    /// Increment a mission's progress counter
    #[command(alias = "+")]
    Up(MissionIdArg),
    /// Decrement a mission's progress counter
    #[command(alias = "-")]
    Down(MissionIdArg),
    /// Hide a mission from the default board
    Hide(MissionIdArg),
    /// Show a hidden mission on the board again
    Unhide(MissionIdArg),
}

#[derive(Subcommand)]
pub enum BalanceCommands {
    /// Show the balance breakdown (default)
    Show,
    /// Set the initial BP adjustment
    Set(SetBalanceArgs),
}

#[derive(Subcommand)]
pub enum ShopCommands {
    /// List shop items with affordability and cooldown state
    #[command(alias = "ls")]
    List,
    /// Buy an item if affordable and off cooldown
    Buy(BuyArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Command handler owning the tracker and the terminal renderer.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Runs the daily reset check once, before any command.
    pub fn check_reset(&mut self) {
        if self.tracker.maybe_reset(Timestamp::now()) {
            info!("Daily reset applied");
        }
    }

    pub fn handle_mission_command(&mut self, command: MissionCommands) -> Result<()> {
        match command {
            MissionCommands::List(args) => self.list_missions(&args.into()),
            MissionCommands::Toggle(args) => {
                let mission = self.tracker.toggle_complete(&args.into())?.clone();
                self.render_mission_update(&mission)
            }
            MissionCommands::Up(args) => {
                let mission = self.tracker.increment(&args.into())?.clone();
                self.render_mission_update(&mission)
            }
            MissionCommands::Down(args) => {
                let mission = self.tracker.decrement(&args.into())?.clone();
                self.render_mission_update(&mission)
            }
            MissionCommands::Hide(args) => self.set_visible(args.into(), false),
            MissionCommands::Unhide(args) => self.set_visible(args.into(), true),
        }
    }

    pub fn handle_balance_command(&mut self, command: Option<BalanceCommands>) -> Result<()> {
        match command {
            None | Some(BalanceCommands::Show) => self.show_balance(),
            Some(BalanceCommands::Set(args)) => {
                let params: SetInitialBalance = args.into();
                let amount = self.tracker.set_initial_balance(params.amount)?;
                let status =
                    OperationStatus::success(format!("Initial balance set to {amount} BP"));
                self.renderer.render(&format!("{status}"))
            }
        }
    }

    pub fn handle_shop_command(&mut self, command: ShopCommands) -> Result<()> {
        match command {
            ShopCommands::List => {
                let catalog = ShopCatalog(self.tracker.shop_view(Timestamp::now()));
                let output = format!(
                    "# Shop\n\n{catalog}\nAvailable: {} BP\n",
                    self.tracker.available_balance()
                );
                self.renderer.render(&output)
            }
            ShopCommands::Buy(args) => {
                let outcome = self.tracker.purchase(&args.into(), Timestamp::now())?;
                self.renderer.render(&format!("{}", PurchaseResult(outcome)))
            }
        }
    }

    /// Renders the mission board plus the current balance line.
    pub fn list_missions(&mut self, params: &ListMissions) -> Result<()> {
        let missions = if params.all {
            self.tracker.missions().to_vec()
        } else {
            self.tracker
                .visible_missions()
                .into_iter()
                .cloned()
                .collect()
        };
        let board = MissionBoard::new(missions, self.tracker.multipliers().factor());
        let output = format!(
            "# Missions\n\n{board}\nAvailable: {} BP\n",
            self.tracker.available_balance()
        );
        self.renderer.render(&output)
    }

    fn set_visible(&mut self, params: MissionId, visible: bool) -> Result<()> {
        let mission = self
            .tracker
            .set_visible(&SetVisible {
                id: params.id,
                visible,
            })?
            .clone();
        let status = OperationStatus::success(format!(
            "Mission '{}' is now {}",
            mission.id,
            if visible { "visible" } else { "hidden" }
        ));
        self.renderer.render(&format!("{status}"))
    }

    fn show_balance(&mut self) -> Result<()> {
        let sheet = BalanceSheet {
            earned: self.tracker.earned_bp(),
            factor: self.tracker.multipliers().factor(),
            adjustment: self.tracker.manual_adjustment(),
            spend: self.tracker.cumulative_spend(),
            available: self.tracker.available_balance(),
        };
        self.renderer.render(&format!("{sheet}"))
    }

    fn render_mission_update(&mut self, mission: &bounty_core::Mission) -> Result<()> {
        let output = format!(
            "{mission}\nAvailable: {} BP\n",
            self.tracker.available_balance()
        );
        self.renderer.render(&output)
    }
}
