use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use states_ranker::config::{Overrides, WeightOverride};
use states_ranker::scoring::{AttributeKey, WeightConfig};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 4;
const EXIT_NOT_FOUND: i32 = 5;

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// List states sorted by score (default if no subcommand)
    List,
    /// Show the score breakdown of one state
    Show {
        /// State name (case-insensitive) or 1-based position in the list
        target: String,
    },
    /// Write a config file with every attribute listed
    Init {
        /// Ask for priorities and weights instead of writing defaults
        #[arg(short, long)]
        interactive: bool,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "states-ranker")]
#[command(about = "Rank U.S. states by weighted priorities", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/states-ranker/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV dataset to rank instead of the bundled 50 states
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Prioritize an attribute (repeatable), e.g. --prioritize low-crime
    #[arg(short, long = "prioritize", global = true)]
    prioritize: Vec<AttributeKey>,

    /// Attribute weight from 0 to 2 (repeatable), e.g. --weight cost=1.5
    #[arg(short, long = "weight", global = true)]
    weight: Vec<WeightOverride>,

    /// Best yearly average temperature in Fahrenheit (20-80)
    #[arg(long, global = true)]
    ideal_temp: Option<String>,

    /// Best population per square mile (20-80)
    #[arg(long, global = true)]
    ideal_density: Option<String>,

    /// Output format for the list
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Commands::List);

    if let Err(e) = states_ranker::telemetry::init(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    if let Commands::Init { interactive, force } = command {
        let path = match cli.config.clone() {
            Some(p) => Ok(p),
            None => states_ranker::config::get_config_path(),
        };
        let result = path.and_then(|p| {
            states_ranker::config::init::run_init(&p, interactive, force)?;
            Ok(p)
        });
        match result {
            Ok(p) => {
                println!("Config written to {}", p.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match states_ranker::config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Command-line flags win over the file
    let mut raw_weights = config.weights.clone();
    let overrides = Overrides {
        prioritize: cli.prioritize.clone(),
        weights: cli.weight.clone(),
        ideal_average_temp: cli.ideal_temp.clone(),
        ideal_population_density: cli.ideal_density.clone(),
    };
    overrides.apply(&mut raw_weights);

    // Malformed values fall back to defaults; say which ones
    if let Err(errors) = states_ranker::scoring::validate_weights(&raw_weights) {
        for error in errors {
            tracing::warn!("{} (using default)", error);
        }
    }
    let weights = WeightConfig::from_raw(&raw_weights);

    // Load dataset
    let data_path = cli.data.clone().or(config.data.clone());
    let states = match data_path {
        Some(ref path) => states_ranker::states::load_states(path),
        None => states_ranker::states::default_states(),
    };
    let states = match states {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Data error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let prioritized: Vec<&str> = AttributeKey::ALL
        .iter()
        .filter(|k| weights.is_prioritized(**k))
        .map(|k| k.config_key())
        .collect();
    tracing::debug!(states = states.len(), ?prioritized, "scoring");

    let ranked = states_ranker::scoring::rank_states(&states, &weights);
    let use_colors = !cli.no_color && states_ranker::output::should_use_colors();

    // Route based on subcommand
    match command {
        Commands::List => match cli.format {
            OutputFormat::Table => {
                println!("{}", states_ranker::output::format_ranked_table(&ranked, use_colors));
            }
            OutputFormat::Tsv => {
                let output = states_ranker::output::format_tsv(&ranked);
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            OutputFormat::Json => match states_ranker::output::format_json(&ranked) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Output error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            },
        },
        Commands::Show { target } => {
            let Some(position) = states_ranker::scoring::find_ranked(&ranked, &target) else {
                eprintln!(
                    "No state '{}'. Use a name or a position between 1 and {}.",
                    target,
                    ranked.len()
                );
                std::process::exit(EXIT_NOT_FOUND);
            };

            println!(
                "{}",
                states_ranker::output::format_state_detail(
                    &ranked[position],
                    position,
                    ranked.len(),
                    use_colors
                )
            );
        }
        Commands::Init { .. } => {}
    }

    std::process::exit(EXIT_SUCCESS);
}
