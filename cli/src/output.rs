//! Output formatting

use anyhow::Result;
use bloom_order::{OrderForm, SubmissionOutcome};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn parse(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }

    /// Print a list; table format renders real columns
    pub fn print_rows<T: Serialize + Tabled>(&self, rows: &[T]) -> Result<()> {
        match self {
            OutputFormat::Table => println!("{}", Table::new(rows)),
            _ => self.print(rows)?,
        }
        Ok(())
    }

    pub fn print<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        match self {
            OutputFormat::Yaml => print!("{}", serde_yaml::to_string(data)?),
            // no table layout for nested data
            OutputFormat::Json | OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(data)?)
            }
        }
        Ok(())
    }
}

/// Inline errors, in form field order
pub fn print_field_errors(form: &OrderForm) {
    for field in form.schema().fields() {
        let message = form.error(&field.name);
        if !message.is_empty() {
            eprintln!("{} {}", format!("{}:", field.name).bold(), message.red());
        }
    }
}

pub fn print_outcome(outcome: &SubmissionOutcome) {
    match outcome {
        SubmissionOutcome::Succeeded(m) => println!("{}", m.green().bold()),
        SubmissionOutcome::Failed(m) => eprintln!("{}", m.red().bold()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("YAML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::parse("csv"), None);
    }
}
