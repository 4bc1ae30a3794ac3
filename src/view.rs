//! HTML rendering for the index form and the report page
//!
//! Templates are embedded at compile time and filled by placeholder
//! replacement. All interpolated text goes through `html_escape`.

use html_escape::{encode_double_quoted_attribute, encode_script, encode_text};

use crate::calculator::{CostInputs, CostReport};
use crate::config::ReportConfig;
use crate::format::{format_currency, format_number, format_percent, CurrencyFormat};

const INDEX_TEMPLATE: &str = include_str!("templates/index.html");
const REPORT_TEMPLATE: &str = include_str!("templates/report.html");

/// How an input value is displayed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EchoedValue {
    Currency(f64),
    Count(f64),
    Percent(f64),
}

/// One input echoed back on the report page
#[derive(Debug, Clone, PartialEq)]
pub struct EchoedField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: EchoedValue,
}

/// Typed copy of the submitted inputs, for display next to the results
#[derive(Debug, Clone, PartialEq)]
pub struct EchoedInputs {
    pub human: Vec<EchoedField>,
    pub ai: Vec<EchoedField>,
}

impl From<&CostInputs> for EchoedInputs {
    fn from(inputs: &CostInputs) -> Self {
        use EchoedValue::*;

        let field = |name: &'static str, label: &'static str, value: EchoedValue| EchoedField {
            name,
            label,
            value,
        };

        Self {
            human: vec![
                field("num_agents", "Número de atendentes", Count(inputs.num_agents)),
                field("salary_monthly", "Salário mensal", Currency(inputs.salary_monthly)),
                field(
                    "social_charges_rate",
                    "Encargos sociais",
                    Percent(inputs.social_charges_rate),
                ),
                field("benefits_monthly", "Benefícios mensais", Currency(inputs.benefits_monthly)),
                field("mgmt_fee_rate", "Taxa de gestão", Percent(inputs.mgmt_fee_rate)),
                field(
                    "platform_cost_monthly",
                    "Plataforma mensal",
                    Currency(inputs.platform_cost_monthly),
                ),
                field("work_days_month", "Dias úteis por mês", Count(inputs.work_days_month)),
                field(
                    "interactions_per_day",
                    "Interações por dia",
                    Count(inputs.interactions_per_day),
                ),
            ],
            ai: vec![
                field("setup_fee", "Taxa de implantação", Currency(inputs.setup_fee)),
                field("monthly_sub", "Assinatura mensal", Currency(inputs.monthly_sub)),
                field("cost_per_msg", "Custo por mensagem", Currency(inputs.cost_per_msg)),
            ],
        }
    }
}

impl EchoedInputs {
    fn iter(&self) -> impl Iterator<Item = &EchoedField> {
        self.human.iter().chain(self.ai.iter())
    }
}

fn display_value(value: EchoedValue, fmt: &CurrencyFormat) -> String {
    match value {
        EchoedValue::Currency(v) => format_currency(v, fmt),
        EchoedValue::Count(v) => format_number(v, fmt.thousands_separator),
        EchoedValue::Percent(v) => format_percent(v, fmt.decimal_separator),
    }
}

/// Render the input form, pre-filled with the calculator defaults
pub fn render_index(cfg: &ReportConfig) -> String {
    let defaults = EchoedInputs::from(&CostInputs::default());

    INDEX_TEMPLATE
        .replace("{{{TITLE}}}", &encode_text(&cfg.title))
        .replace("{{{HUMAN_FIELDS}}}", &form_fields(&defaults.human))
        .replace("{{{AI_FIELDS}}}", &form_fields(&defaults.ai))
}

fn form_fields(fields: &[EchoedField]) -> String {
    fields
        .iter()
        .map(|field| {
            let raw = match field.value {
                EchoedValue::Currency(v) | EchoedValue::Count(v) | EchoedValue::Percent(v) => v,
            };
            format!(
                "      <label>{}<input type=\"number\" step=\"any\" name=\"{}\" value=\"{}\"></label>",
                encode_text(field.label),
                field.name,
                encode_double_quoted_attribute(&raw.to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the report page
pub fn render_report(
    cfg: &ReportConfig,
    inputs: &EchoedInputs,
    report: &CostReport,
) -> Result<String, serde_json::Error> {
    let fmt = CurrencyFormat::from(cfg);
    let chart_json = serde_json::to_string(&report.chart_payload)?;

    let rows = inputs
        .iter()
        .map(|field| {
            format!(
                "      <tr><td>{}</td><td>{}</td></tr>",
                encode_text(field.label),
                encode_text(&display_value(field.value, &fmt)),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let html = REPORT_TEMPLATE
        .replace("{{{TITLE}}}", &encode_text(&cfg.title))
        .replace(
            "{{{TOTAL_HUMAN_ANNUAL}}}",
            &encode_text(&format_currency(report.total_human_annual, &fmt)),
        )
        .replace(
            "{{{COST_PER_INTERACTION_HUMAN}}}",
            &encode_text(&format_currency(report.cost_per_interaction_human, &fmt)),
        )
        .replace(
            "{{{TOTAL_AI_ANNUAL_OPEX}}}",
            &encode_text(&format_currency(report.total_ai_annual_opex, &fmt)),
        )
        .replace(
            "{{{TOTAL_AI_Y1}}}",
            &encode_text(&format_currency(report.total_ai_y1, &fmt)),
        )
        .replace(
            "{{{SAVINGS_Y1}}}",
            &encode_text(&format_currency(report.savings_y1, &fmt)),
        )
        .replace(
            "{{{ROI_PERCENTAGE}}}",
            &encode_text(&format_percent(report.roi_percentage, fmt.decimal_separator)),
        )
        .replace("{{{PAYBACK_MONTH}}}", &encode_text(&report.payback_month.to_string()))
        .replace("{{{AI_BAR_HEIGHT}}}", &format!("{:.2}", bar_height(report.ai_bar_height)))
        .replace("{{{INPUT_ROWS}}}", &rows)
        .replace("{{{CHART_JSON}}}", &encode_script(&chart_json));

    Ok(html)
}

/// CSS height for the AI bar; the human bar is always 100%
fn bar_height(ai_bar_height: f64) -> f64 {
    ai_bar_height.clamp(0.0, 100.0)
}
