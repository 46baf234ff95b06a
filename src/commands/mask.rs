use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use brtools::masks::{
    brazilian_telephone_mask, brazilian_zipcode_mask, clear_mask, cpf_or_cnpj_mask,
};
use brtools::phone::global_cellphone_mask;
use brtools::Error;

use super::CmdResult;

#[derive(Args)]
pub struct MaskArgs {
    #[command(subcommand)]
    command: MaskCommand,
}

#[derive(Subcommand)]
enum MaskCommand {
    /// Mask a CPF or CNPJ, dispatching on digit count
    Document { value: String },
    /// Mask a CEP postal code (xxxxx-xxx)
    Zipcode { value: String },
    /// Mask a Brazilian telephone number
    Telephone { value: String },
    /// Mask a phone number using a country's template
    Cellphone {
        /// Two-letter country code (e.g. US, BR)
        country: String,
        value: String,
    },
    /// Strip all formatting, leaving bare digits
    Clear { value: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MaskOutput {
    input: String,
    output: String,
}

fn to_value(input: String, output: String) -> CmdResult<Value> {
    serde_json::to_value(MaskOutput { input, output })
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize output".to_string())))
}

pub fn run(args: MaskArgs) -> CmdResult<Value> {
    match args.command {
        MaskCommand::Document { value } => {
            let output = cpf_or_cnpj_mask(&value);
            to_value(value, output)
        }
        MaskCommand::Zipcode { value } => {
            let output = brazilian_zipcode_mask(&value);
            to_value(value, output)
        }
        MaskCommand::Telephone { value } => {
            let output = brazilian_telephone_mask(&value);
            to_value(value, output)
        }
        MaskCommand::Cellphone { country, value } => {
            let output = global_cellphone_mask(&country, &value);
            to_value(value, output)
        }
        MaskCommand::Clear { value } => {
            let output = clear_mask(&value);
            to_value(value, output)
        }
    }
}
