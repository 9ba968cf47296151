//! Tactics CLI
//!
//! Tactical counter calculator from the terminal: full JSON requests, quick
//! flag-driven evaluations and formation-meta counter presets.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use tactics_cli::{
    default_context, load_calculator, read_request, run_evaluate, run_formations, run_preset,
    run_quick, run_schema, run_styles, OutputFormat, QuickInput, SchemaKind,
};
use tactics_core::api::ResultView;
use tactics_core::models::{Competition, Formation, TeamProfile};
use tactics_core::tactics::formation_meta::Strength;

#[derive(Parser)]
#[command(name = "tactics-cli")]
#[command(about = "Recommend a tactical counter against an opponent", long_about = None)]
struct Cli {
    /// Engine tuning file (JSON or YAML); overrides TACTICS_TUNING_PATH
    #[arg(long, global = true)]
    tuning: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a JSON request file
    Evaluate {
        /// Request file path, or "-" for stdin
        #[arg(long)]
        request: String,
    },

    /// Evaluate from command-line flags
    Quick(QuickArgs),

    /// Counter preset for an opponent formation code
    Preset {
        /// Formation-meta code (e.g. "433A")
        #[arg(long)]
        opponent: String,

        /// Opponent strength relative to us
        #[arg(long, default_value = "equal")]
        strength: Strength,
    },

    /// List the styles of play
    Styles,

    /// List supported formations
    Formations {
        /// Show the formation-meta catalogue instead
        #[arg(long)]
        meta: bool,
    },

    /// Print a JSON Schema
    Schema {
        #[arg(value_enum, default_value_t = SchemaKind::Request)]
        kind: SchemaKind,
    },
}

#[derive(clap::Args)]
struct QuickArgs {
    #[arg(long, default_value = "4-4-2")]
    my_formation: Formation,
    #[arg(long, default_value_t = 70)]
    my_overall: u8,
    #[arg(long, default_value_t = 70)]
    my_attack: u8,
    #[arg(long, default_value_t = 70)]
    my_midfield: u8,
    #[arg(long, default_value_t = 70)]
    my_defense: u8,

    #[arg(long, default_value = "4-4-2")]
    opp_formation: Formation,
    #[arg(long, default_value_t = 70)]
    opp_overall: u8,
    #[arg(long, default_value_t = 70)]
    opp_attack: u8,
    #[arg(long, default_value_t = 70)]
    opp_midfield: u8,
    #[arg(long, default_value_t = 70)]
    opp_defense: u8,

    /// Play away from home
    #[arg(long)]
    away: bool,
    #[arg(long, default_value = "League Match")]
    competition: Competition,
    #[arg(long)]
    high_press: bool,
    #[arg(long)]
    long_ball: bool,
    #[arg(long)]
    wingers: bool,
    #[arg(long)]
    offside_trap: bool,

    /// Only show formation and style of play
    #[arg(long)]
    preview: bool,
}

impl QuickArgs {
    fn into_input(self) -> QuickInput {
        QuickInput {
            my_team: TeamProfile::new(
                self.my_formation,
                self.my_overall,
                self.my_attack,
                self.my_midfield,
                self.my_defense,
            ),
            opponent_team: TeamProfile::new(
                self.opp_formation,
                self.opp_overall,
                self.opp_attack,
                self.opp_midfield,
                self.opp_defense,
            ),
            context: default_context(!self.away, self.competition)
                .with_high_press(self.high_press)
                .with_long_ball(self.long_ball)
                .with_wingers(self.wingers)
                .with_offside_trap(self.offside_trap),
            view: if self.preview { ResultView::Preview } else { ResultView::Full },
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tactics_core=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let format = cli.format;

    let output = match cli.command {
        Commands::Evaluate { request } => {
            let calculator = load_calculator(cli.tuning.as_deref())?;
            let body = read_request(&request)?;
            run_evaluate(&calculator, &body, format)?
        }
        Commands::Quick(args) => {
            let calculator = load_calculator(cli.tuning.as_deref())?;
            run_quick(&calculator, args.into_input(), format)?
        }
        Commands::Preset { opponent, strength } => run_preset(&opponent, strength, format)?,
        Commands::Styles => run_styles(format)?,
        Commands::Formations { meta } => run_formations(meta, format)?,
        Commands::Schema { kind } => run_schema(kind)?,
    };

    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
