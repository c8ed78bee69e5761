use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::process::ExitCode;

use fatloss::cli::{handle_calc_command, CalcArgs, PromptOutcome, PromptWizard};
use fatloss::config::{paths::FatLossPaths, settings::Settings};
use fatloss::logging::{init_file_logging, init_stderr_logging};

#[derive(Parser)]
#[command(
    name = "fatloss",
    author = "Kaylee Beyene",
    version,
    about = "Terminal body fat loss calculator",
    long_about = "fatloss walks you through a short wizard (weight, body fat %, \
                  body fat % to lose, daily calorie deficit) and estimates how \
                  much fat you need to lose and how many days it will take."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Run the wizard as plain line prompts
    Wizard,

    /// Compute an estimate directly from arguments
    Calc(CalcArgs),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the settings file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let paths = FatLossPaths::new()?;

    // `config` still reports the paths when the settings file is broken
    if let Some(Commands::Config { init }) = cli.command {
        return handle_config_command(&paths, init);
    }

    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            // The TUI owns the terminal, so logs go to a file
            paths.ensure_directories()?;
            init_file_logging(&paths.log_file(), &settings.log_level)?;
            fatloss::tui::run_tui(&settings)?;
        }
        Some(Commands::Wizard) => {
            init_stderr_logging(&settings.log_level);
            let stdin = io::stdin();
            let outcome = PromptWizard::new(stdin.lock(), io::stdout(), &settings).run()?;
            if outcome == PromptOutcome::Quit {
                println!();
                println!("Goodbye!");
            }
        }
        Some(Commands::Calc(args)) => {
            init_stderr_logging(&settings.log_level);
            let mut stdout = io::stdout();
            if let Err(e) = handle_calc_command(&settings, &args, &mut stdout) {
                if e.is_validation() {
                    eprintln!("{}", e);
                    return Ok(ExitCode::FAILURE);
                }
                return Err(e.into());
            }
        }
        Some(Commands::Config { .. }) => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn handle_config_command(paths: &FatLossPaths, init: bool) -> Result<ExitCode> {
    let loaded = Settings::load_or_create(paths);
    let level = match &loaded {
        Ok(settings) => settings.log_level.clone(),
        Err(_) => "warn".to_string(),
    };
    init_stderr_logging(&level);

    if init {
        if let Ok(settings) = &loaded {
            settings.save(paths)?;
            println!("Saved settings to {}", paths.settings_file().display());
            println!();
        }
    }

    println!("fatloss Configuration");
    println!("=====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();

    match loaded {
        Ok(settings) => {
            println!("Settings:");
            println!("  kcal per kg of fat: {}", settings.kcal_per_kg_fat);
            println!("  Default format:     {}", settings.default_format);
            println!("  Log level:          {}", settings.log_level);
            println!("  Show goal date:     {}", settings.show_goal_date);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
