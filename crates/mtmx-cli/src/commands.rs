//! Command implementations.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use mtmx_core::Converter;
use mtmx_model::{ConversionResult, MessageType};

use crate::cli::ConvertArgs;

/// Run the `convert` command. Returns the process exit code.
pub fn run_convert(args: &ConvertArgs) -> Result<i32> {
    let raw = read_input(args.input.as_deref())?;

    let converter = Converter::new();
    let result = converter.convert_named(&raw, args.message_type.as_deref());

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("serialize result")?;
        emit(args.output.as_deref(), &json)?;
        return Ok(if result.is_success() { 0 } else { 1 });
    }

    match &result {
        ConversionResult::Success(success) => {
            emit(args.output.as_deref(), &success.xml)?;
            Ok(0)
        }
        ConversionResult::Failure(failure) => {
            eprintln!("conversion failed ({}):", failure.fingerprint);
            for message in failure.error.messages() {
                eprintln!("  {message}");
            }
            Ok(1)
        }
    }
}

/// Run the `types` command.
pub fn run_types() {
    for message_type in MessageType::ALL {
        println!("{}  ->  {}", message_type, message_type.target_identifier());
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("read stdin")?;
            Ok(raw)
        }
    }
}

fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("write {}", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
