//! Order command

use anyhow::{bail, Result};
use bloom_order::domain::schema::{FULL_NAME, SIZE};
use bloom_order::{OrderPayload, OrderService};

use super::{log_events, Settings};
use crate::output::{self, OutputFormat};
use crate::OrderArgs;

pub async fn handle(args: OrderArgs, settings: &Settings) -> Result<()> {
    let service = settings.service()?;
    fill(&service, &args)?;

    let form = service.snapshot();
    output::print_field_errors(&form);
    if !form.is_enabled() {
        bail!("order form has invalid fields, nothing was sent");
    }

    if args.dry_run {
        let payload = OrderPayload::build(form.values(), form.catalog());
        return settings.format.print(&payload);
    }

    let outcome = service.submit().await?;
    log_events(service.take_events());

    match outcome {
        Some(outcome) => {
            match settings.format {
                OutputFormat::Table => output::print_outcome(&outcome),
                format => format.print(&outcome)?,
            }
            if !outcome.is_success() {
                bail!("order was not placed");
            }
            Ok(())
        }
        None => bail!("order form has invalid fields, nothing was sent"),
    }
}

/// Apply every flag as an edit, the way the form fields would be typed in
fn fill(service: &OrderService, args: &OrderArgs) -> Result<()> {
    service.edit(FULL_NAME, args.name.clone().unwrap_or_default())?;
    service.edit(SIZE, args.size.clone().unwrap_or_default())?;

    for topping in &args.toppings {
        let known = service.inspect(|form| form.catalog().contains_field(topping));
        if !known {
            bail!("unknown topping: {} (see `bloom-pizza toppings`)", topping);
        }
        service.edit(topping, true)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloom_order::IntakeConfig;

    fn args(name: &str, size: &str, toppings: &[&str]) -> OrderArgs {
        OrderArgs {
            name: Some(name.into()),
            size: Some(size.into()),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
            dry_run: true,
        }
    }

    fn service() -> OrderService {
        let settings = Settings { intake: IntakeConfig::default(), format: OutputFormat::Json };
        settings.service().unwrap()
    }

    #[test]
    fn test_fill_valid_order() {
        let service = service();
        fill(&service, &args("Ann Lee", "L", &["ham", "pepperoni"])).unwrap();

        let form = service.snapshot();
        assert!(form.is_enabled());
        let payload = OrderPayload::build(form.values(), form.catalog());
        assert_eq!(payload.toppings, vec!["1", "5"]);
    }

    #[test]
    fn test_fill_reports_field_errors() {
        let service = service();
        fill(&service, &args("Al", "XL", &[])).unwrap();

        let form = service.snapshot();
        assert!(!form.is_enabled());
        assert_eq!(form.error(FULL_NAME), "Full name must be at least 3 characters");
        assert_eq!(form.error(SIZE), "Size must be S or M or L");
    }

    #[test]
    fn test_missing_flags_show_required() {
        let service = service();
        let args = OrderArgs { name: None, size: None, toppings: vec![], dry_run: true };
        fill(&service, &args).unwrap();

        let form = service.snapshot();
        assert_eq!(form.error(FULL_NAME), "Full name is required");
        assert_eq!(form.error(SIZE), "Size is required");
    }

    #[test]
    fn test_unknown_topping() {
        let service = service();
        assert!(fill(&service, &args("Ann", "M", &["anchovies"])).is_err());
        // a form field that is not a topping is refused too
        assert!(fill(&service, &args("Ann", "M", &["size"])).is_err());
    }
}
