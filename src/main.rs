use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use lang_basics::config::DEFAULT_LOG_FILTER;
use lang_basics::{checked_add, hello, Describer, Point, MAX_VALUE};

#[derive(Parser)]
#[command(name = "lang-basics")]
#[command(author, version, about = "Greeter, adder and point basics")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the greeting
    Hello,

    /// Print the sum of two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Print the description of a point
    Describe {
        #[arg(allow_negative_numbers = true)]
        x: i64,
        #[arg(allow_negative_numbers = true)]
        y: i64,

        /// Emit a JSON object instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the shared maximum value
    MaxValue,
}

#[derive(Serialize)]
struct DescribeOutput {
    #[serde(flatten)]
    point: Point,
    description: String,
}

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Hello) {
        Commands::Hello => hello(),
        Commands::Add { a, b } => {
            info!("Adding {} and {}", a, b);
            let Some(sum) = checked_add(a, b) else {
                bail!("integer overflow adding {} and {}", a, b);
            };
            println!("{}", sum);
        }
        Commands::Describe { x, y, json } => {
            let point = Point::new(x, y);
            if json {
                let output = DescribeOutput {
                    point,
                    description: point.describe(),
                };
                let line = serde_json::to_string(&output).context("Failed to serialize point")?;
                println!("{}", line);
            } else {
                println!("{}", point.describe());
            }
        }
        Commands::MaxValue => println!("{}", MAX_VALUE),
    }

    Ok(())
}
