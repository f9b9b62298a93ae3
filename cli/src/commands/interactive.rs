//! Interactive order form
//!
//! Prompts for each field in form order. A field with an error is asked
//! again until it passes.

use anyhow::{bail, Result};
use bloom_order::domain::schema::{FULL_NAME, SIZE};
use bloom_order::{OrderService, Size};
use colored::Colorize;
use std::io::{self, BufRead, Write};

use super::{log_events, Settings};
use crate::output;

pub async fn handle(settings: &Settings) -> Result<()> {
    let service = settings.service()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "{}", "Order Your Pizza".bold())?;
    fill(&service, &mut input, &mut out)?;

    loop {
        let outcome = match service.submit().await? {
            Some(outcome) => outcome,
            None => bail!("order form has invalid fields, nothing was sent"),
        };
        log_events(service.take_events());
        output::print_outcome(&outcome);

        if outcome.is_success() || !confirm(&mut input, &mut out, "Try again?")? {
            return Ok(());
        }
    }
}

/// Walk the user through every field
pub fn fill<R: BufRead, W: Write>(service: &OrderService, input: &mut R, out: &mut W) -> Result<()> {
    ask_until_valid(service, input, out, FULL_NAME, "Full name")?;

    let menu: Vec<_> = Size::ALL.iter().map(|s| format!("{}={}", s.code(), s.label())).collect();
    ask_until_valid(service, input, out, SIZE, &format!("Size ({})", menu.join(", ")))?;

    let toppings: Vec<_> = service.inspect(|form| form.catalog().iter().cloned().collect());
    for topping in toppings {
        let wanted = confirm(input, out, &topping.label)?;
        service.edit(&topping.field, wanted)?;
    }
    Ok(())
}

fn ask_until_valid<R: BufRead, W: Write>(
    service: &OrderService,
    input: &mut R,
    out: &mut W,
    field: &str,
    prompt: &str,
) -> Result<()> {
    loop {
        let answer = read_line(input, out, &format!("{}: ", prompt))?;
        service.edit(field, answer)?;

        let error = service.inspect(|form| form.error(field).to_string());
        if error.is_empty() {
            return Ok(());
        }
        writeln!(out, "{}", error.red())?;
    }
}

fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    let answer = read_line(input, out, &format!("{}? [y/N] ", question.trim_end_matches('?')))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the order was complete");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
