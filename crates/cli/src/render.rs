//! The `render` subcommand: run a notepad file through the pipeline and
//! print one display row per line.

use std::error::Error;
use std::fs;
use std::path::Path;

use reckon_core::adapter::HttpRateProvider;
use reckon_core::{
    DisplayToken, DocumentEvaluator, EnglishCatalog, RateTable,
};
use reckon_eval::Calculator;

use crate::output::format_number;
use crate::OutputFormat;

fn rate_table(
    rates_file: Option<&Path>,
    home: Option<&str>,
    fetch: bool,
) -> Result<RateTable, Box<dyn Error>> {
    let mut table = if let Some(path) = rates_file {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)?
    } else if fetch {
        RateTable::from_provider(&HttpRateProvider::new())
    } else {
        RateTable::fallback()
    };
    if let Some(code) = home {
        table.home_currency = code.to_uppercase();
    }
    Ok(table)
}

pub fn run(
    file: &Path,
    rates_file: Option<&Path>,
    home: Option<&str>,
    fetch: bool,
    output: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let text = fs::read_to_string(file)?;
    let table = rate_table(rates_file, home, fetch)?;

    let mut engine = DocumentEvaluator::new(Box::new(Calculator), table);
    engine.update(&text);
    let results = engine.results(&EnglishCatalog);

    match output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Text => {
            for token in &results {
                match token {
                    DisplayToken::Null => println!(),
                    DisplayToken::Variable { name, value } => match value {
                        Some(v) => println!("{} = {}", name, format_number(*v)),
                        None => println!("{} =", name),
                    },
                    DisplayToken::Result { value } => println!("{}", format_number(*value)),
                    DisplayToken::Error { value } => println!("error: {}", value),
                }
            }
        }
    }
    Ok(())
}
