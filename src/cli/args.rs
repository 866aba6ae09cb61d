//! CLI argument parsing using clap.
//!
//! Contains the Cli struct, Commands enum, and all subcommand enums.

use clap::{
    Parser, Subcommand, ValueEnum,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Calculator, person record and control-flow demonstrations
#[derive(Parser, Debug)]
#[command(
    name = "rudiments",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calculator, person record and control-flow demonstrations",
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output JSON where the command supports it (overrides settings)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize project
    #[command(about = "Set up .rudiments directory with default configuration")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,

    /// Run one calculator operation
    #[command(
        about = "Add, subtract, multiply or divide two integers",
        allow_negative_numbers = true,
        after_help = "Examples:\n  rudiments calc add 5 3\n  rudiments calc divide -7 2\n  rudiments --json calc multiply 6 7"
    )]
    Calc {
        /// Operation to perform
        #[arg(value_enum)]
        op: Operation,
        /// Left operand
        a: i32,
        /// Right operand
        b: i32,
    },

    /// Build a person record and report on it
    #[command(
        about = "Show a person record and whether it is an adult",
        after_help = "Examples:\n  rudiments person --name \"John Doe\" --age 25 --email john@example.com\n  rudiments person --name Ann --age 17 --email ann@example.com --set-age 18"
    )]
    Person {
        #[arg(long)]
        name: String,
        /// Initial age, stored as given
        #[arg(long, allow_negative_numbers = true)]
        age: i32,
        #[arg(long)]
        email: String,
        /// Replace the age after construction (rejects negatives)
        #[arg(long, allow_negative_numbers = true)]
        set_age: Option<i32>,
    },

    /// Control-flow demonstrations
    #[command(about = "Branching, counting and weekday dispatch")]
    Flow {
        #[command(subcommand)]
        action: FlowAction,
    },

    /// Run the sample walkthroughs
    #[command(about = "Run the built-in demonstrations")]
    Demo {
        #[arg(value_enum, default_value_t = DemoTarget::All)]
        target: DemoTarget,
    },
}

#[derive(Subcommand, Debug)]
pub enum FlowAction {
    /// Report whether a number is positive, negative or zero
    #[command(allow_negative_numbers = true)]
    Sign { n: i32 },

    /// Count from 1 up to a limit
    #[command(allow_negative_numbers = true)]
    Count { limit: i32 },

    /// Count from start to end inclusive
    #[command(allow_negative_numbers = true)]
    Range { start: i32, end: i32 },

    /// Name the weekday for a number 1-7
    #[command(allow_negative_numbers = true)]
    Day { day: i32 },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoTarget {
    Calculator,
    Person,
    ControlFlow,
    All,
}
