use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use brtools::documents::{brazilian_cnpj_validator, brazilian_cpf_validator};
use brtools::email::email_is_valid;
use brtools::password::password_strength;
use brtools::phone::brazilian_telephone_validator;
use brtools::Error;

use super::CmdResult;

#[derive(Args)]
pub struct ValidateArgs {
    #[command(subcommand)]
    command: ValidateCommand,
}

#[derive(Subcommand)]
enum ValidateCommand {
    /// Validate a CPF (any formatting accepted)
    Cpf { value: String },
    /// Validate a CNPJ (any formatting accepted)
    Cnpj { value: String },
    /// Validate an email address
    Email { value: String },
    /// Validate a Brazilian telephone number
    Telephone { value: String },
    /// Check password strength criteria
    Password { value: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationOutput {
    input: String,
    valid: bool,
}

fn to_value<T: Serialize>(data: T) -> CmdResult<Value> {
    serde_json::to_value(data)
        .map_err(|e| Error::internal_json(e.to_string(), Some("serialize output".to_string())))
}

pub fn run(args: ValidateArgs) -> CmdResult<Value> {
    match args.command {
        ValidateCommand::Cpf { value } => to_value(ValidationOutput {
            valid: brazilian_cpf_validator(&value),
            input: value,
        }),
        ValidateCommand::Cnpj { value } => to_value(ValidationOutput {
            valid: brazilian_cnpj_validator(&value),
            input: value,
        }),
        ValidateCommand::Email { value } => to_value(ValidationOutput {
            valid: email_is_valid(&value),
            input: value,
        }),
        ValidateCommand::Telephone { value } => to_value(ValidationOutput {
            valid: brazilian_telephone_validator(&value),
            input: value,
        }),
        ValidateCommand::Password { value } => to_value(password_strength(&value)),
    }
}
