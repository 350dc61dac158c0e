use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mined",
    about = "Mine research, earn MINED, and watch the supply curve bend.",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short = 's', long = "state", global = true, help = "Ledger file (defaults to ~/.mined/ledger.bin)")]
    pub state_path: Option<PathBuf>,

    #[arg(short = 'c', long = "config", global = true, help = "Tokenomics config (JSON)")]
    pub config_path: Option<PathBuf>,

    #[arg(short = 'k', long = "identity", global = true, help = "Identity file (defaults to ~/.mined/id.json)")]
    pub identity_path: Option<PathBuf>,

    #[arg(long = "as", global = true, help = "Act as this address instead of the identity file")]
    pub signer: Option<String>,

    #[arg(short = 'v', long = "verbose", help = "Print verbose output", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {

    // Mining Commands

    Mine {
        #[arg(short = 'w', long = "work-type", default_value_t = 0)]
        work_type: u8,

        #[arg(short = 'd', long = "difficulty", default_value_t = 16)]
        difficulty: u16,

        #[arg(long = "complexity", default_value_t = 50)]
        complexity: u8,

        #[arg(long = "significance", default_value_t = 5)]
        significance: u8,

        #[arg(short = 'r', long = "rounds", default_value_t = 1, help = "Sessions to mine back to back")]
        rounds: u32,

        #[arg(long = "max-attempts", help = "Give up on a session after this many nonces")]
        max_attempts: Option<u64>,
    },
    Simulate {
        #[arg(short = 'm', long = "miners", default_value_t = 4)]
        miners: u64,

        #[arg(short = 'r', long = "rounds", default_value_t = 5)]
        rounds: u32,

        #[arg(short = 'd', long = "difficulty", default_value_t = 8)]
        difficulty: u16,
    },

    // Research Commands

    Discover {
        #[arg(short = 'w', long = "work-type")]
        work_type: u8,

        #[arg(long = "complexity")]
        complexity: u8,

        #[arg(long = "significance")]
        significance: u8,

        #[arg(long = "research-value")]
        research_value: u128,

        #[arg(long = "collaborative")]
        collaborative: bool,
    },
    Validate {
        #[arg(help = "Discovery id to validate")]
        discovery_id: u64,
    },

    // Staking Commands

    Stake {
        #[arg(help = "Amount in MINED, e.g. 1000 or 0.5")]
        amount: String,
    },
    Unstake {
        #[arg(help = "Amount in MINED, e.g. 1000 or 0.5")]
        amount: String,
    },
    Transfer {
        #[arg(help = "Recipient address")]
        to: String,

        #[arg(help = "Amount in MINED")]
        amount: String,
    },

    // Admin Commands

    Init {
        #[arg(long = "force", help = "Overwrite an existing ledger")]
        force: bool,
    },

    #[command(hide = true)]
    Pause {},

    #[command(hide = true)]
    Unpause {},

    #[command(hide = true)]
    SetValidator {
        #[arg(help = "Validator address")]
        validator: String,

        #[arg(long = "active", action = clap::ArgAction::Set)]
        active: bool,
    },

    #[command(hide = true)]
    Advance {
        #[arg(help = "Blocks to advance the clock by")]
        blocks: u64,
    },

    // Misc Commands

    Info {},
    Whoami {},
    Balance {
        #[arg(help = "Address (defaults to the signer)")]
        address: Option<String>,
    },
    GetSession {
        #[arg(help = "Session id")]
        id: u64,
    },
    GetResult {
        #[arg(help = "Result id")]
        id: u64,
    },
    GetDiscovery {
        #[arg(help = "Discovery id")]
        id: u64,
    },
    GetValidator {
        #[arg(help = "Validator address")]
        address: String,
    },
    Validators {},
    Export {
        #[arg(help = "Where to write the JSON export")]
        output: PathBuf,
    },
}

impl Commands {
    /// Commands that change the ledger and are persisted afterwards.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Commands::Mine { .. }
                | Commands::Discover { .. }
                | Commands::Validate { .. }
                | Commands::Stake { .. }
                | Commands::Unstake { .. }
                | Commands::Transfer { .. }
                | Commands::Pause { .. }
                | Commands::Unpause { .. }
                | Commands::SetValidator { .. }
                | Commands::Advance { .. }
        )
    }
}
