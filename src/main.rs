use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{format, mask, validate};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "brtools")]
#[command(version = VERSION)]
#[command(about = "Validation, masking, and formatting for Brazilian application data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate CPF, CNPJ, email, telephone, or password input
    Validate(validate::ValidateArgs),
    /// Apply or clear display masks
    Mask(mask::MaskArgs),
    /// Format currency, dates, names, and slugs
    Format(format::FormatArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => validate::run(args),
        Commands::Mask(args) => mask::run(args),
        Commands::Format(args) => format::run(args),
    };

    let exit_code = match &result {
        Ok(_) => 0,
        Err(err) => err.code.exit_code(),
    };

    if output::print_result(result).is_err() {
        std::process::exit(1);
    }
    std::process::exit(exit_code);
}
