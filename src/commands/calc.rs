use anyhow::{bail, Result};
use colored::Colorize;
use cost_compare::{
    calculator::{calculate, CostInputs, CostReport},
    config,
    format::{format_currency, format_number, format_percent, CurrencyFormat},
};
use std::collections::HashMap;
use std::path::Path;

/// Execute the calc command
///
/// Inputs go through the same parsing as the web form.
pub fn execute(config_path: &Path, fields: &[String], json: bool) -> Result<()> {
    let form = parse_pairs(fields)?;
    let inputs = CostInputs::from_form(&form)?;
    let report = calculate(&inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let cfg = config::load_config(config_path)?;
    print_report(&report, &CurrencyFormat::from(&cfg.report));
    Ok(())
}

fn parse_pairs(fields: &[String]) -> Result<HashMap<String, String>> {
    let mut form = HashMap::with_capacity(fields.len());
    for pair in fields {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("Expected FIELD=VALUE, got '{}'", pair);
        };
        if name.is_empty() {
            bail!("Missing field name in '{}'", pair);
        }
        form.insert(name.to_string(), value.to_string());
    }
    Ok(form)
}

fn print_report(report: &CostReport, fmt: &CurrencyFormat) {
    let money = |value| format_currency(value, fmt);

    println!("{}", "Human workforce".bold());
    println!("  {}: {}", "Annual cost".cyan(), money(report.total_human_annual));
    println!(
        "  {}: {}",
        "Cost per interaction".cyan(),
        money(report.cost_per_interaction_human)
    );
    println!(
        "  {}: {}",
        "Interactions / year".cyan(),
        format_number(report.breakdown.total_interactions_annual, fmt.thousands_separator)
    );
    println!();

    println!("{}", "AI automation".bold());
    println!("  {}: {}", "Annual opex".cyan(), money(report.total_ai_annual_opex));
    println!("  {}: {}", "Year 1 total".cyan(), money(report.total_ai_y1));
    println!();

    let savings = money(report.savings_y1);
    println!("{}", "Return".bold());
    println!(
        "  {}: {}",
        "Year 1 savings".cyan(),
        if report.savings_y1 >= 0.0 { savings.green() } else { savings.red() }
    );
    println!(
        "  {}: {}",
        "ROI".cyan(),
        format_percent(report.roi_percentage, fmt.decimal_separator)
    );
    println!("  {}: {}", "Payback".cyan(), report.payback_month);
    println!();

    println!("{}", "Cumulative cost".bold());
    let chart = &report.chart_payload;
    for ((label, human), ai) in chart.labels.iter().zip(&chart.human).zip(&chart.ai) {
        println!("  {:<8} {:>20} {:>20}", label, money(*human), money(*ai));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let form = parse_pairs(&["salary_monthly=2500".to_string(), "setup_fee=".to_string()])
            .unwrap();
        assert_eq!(form["salary_monthly"], "2500");
        assert_eq!(form["setup_fee"], "");
    }

    #[test]
    fn test_parse_pairs_rejects_malformed() {
        assert!(parse_pairs(&["salary_monthly".to_string()]).is_err());
        assert!(parse_pairs(&["=10".to_string()]).is_err());
    }

    #[test]
    fn test_calc_surfaces_invalid_input() {
        let result = execute(
            Path::new("does-not-exist.toml"),
            &["cost_per_msg=abc".to_string()],
            true,
        );
        assert!(result.unwrap_err().to_string().contains("cost_per_msg"));
    }
}
