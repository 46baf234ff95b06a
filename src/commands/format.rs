use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use brtools::currency::format_real;
use brtools::dates::convert_date_format;
use brtools::names::normalize_name;
use brtools::slug::create_slug;
use brtools::Error;

use super::CmdResult;

#[derive(Args)]
pub struct FormatArgs {
    #[command(subcommand)]
    command: FormatCommand,
}

#[derive(Subcommand)]
enum FormatCommand {
    /// Format an amount as Brazilian Real
    Currency { amount: f64 },
    /// Flip a date between yyyy-mm-dd and dd/mm/yyyy
    Date { value: String },
    /// Normalize a person's name capitalization
    Name { value: String },
    /// Build a URL-friendly slug
    Slug { value: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatOutput {
    input: String,
    output: String,
}

fn to_value(input: String, output: String) -> CmdResult<Value> {
    serde_json::to_value(FormatOutput { input, output })
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize output".to_string())))
}

pub fn run(args: FormatArgs) -> CmdResult<Value> {
    match args.command {
        FormatCommand::Currency { amount } => {
            to_value(amount.to_string(), format_real(amount))
        }
        FormatCommand::Date { value } => {
            let output = convert_date_format(&value)?;
            to_value(value, output)
        }
        FormatCommand::Name { value } => {
            let output = normalize_name(&value);
            to_value(value, output)
        }
        FormatCommand::Slug { value } => {
            let output = create_slug(&value);
            to_value(value, output)
        }
    }
}
