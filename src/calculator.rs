//! Human workforce vs AI automation cost comparison
//!
//! Pure calculation core: a flat set of numeric inputs goes in, a
//! [`CostReport`] comes out. No I/O, no shared state.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Annual provisions as a multiple of the monthly salary.
///
/// Empirical constant from the source spreadsheet, not an accrual formula.
pub const PROVISIONS_FACTOR: f64 = 1.665;

/// Number of months simulated for the payback chart
pub const PAYBACK_MONTHS: u32 = 12;

const MONTHS_PER_YEAR: f64 = 12.0;

/// A submitted field could not be read as a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid value for '{field}': {value:?} is not a number")]
pub struct InvalidInputError {
    pub field: &'static str,
    pub value: String,
}

/// Calculator inputs
///
/// Rates are percentages (40 means 40 %).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostInputs {
    // AI side
    pub setup_fee: f64,
    pub monthly_sub: f64,
    pub cost_per_msg: f64,

    // Human side
    pub num_agents: f64,
    pub salary_monthly: f64,
    pub social_charges_rate: f64,
    pub benefits_monthly: f64,
    pub mgmt_fee_rate: f64,
    pub platform_cost_monthly: f64,
    pub work_days_month: f64,
    pub interactions_per_day: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            setup_fee: 0.0,
            monthly_sub: 0.0,
            cost_per_msg: 0.0,
            num_agents: 1.0,
            salary_monthly: 0.0,
            social_charges_rate: 40.0,
            benefits_monthly: 0.0,
            mgmt_fee_rate: 8.0,
            platform_cost_monthly: 0.0,
            work_days_month: 22.0,
            interactions_per_day: 48.0,
        }
    }
}

impl CostInputs {
    /// Form field names paired with the input they set, in checking order
    const FIELD_TABLE: [(&'static str, FieldSlot); 11] = [
        ("setup_fee", |i| &mut i.setup_fee),
        ("monthly_sub", |i| &mut i.monthly_sub),
        ("cost_per_msg", |i| &mut i.cost_per_msg),
        ("num_agents", |i| &mut i.num_agents),
        ("salary_monthly", |i| &mut i.salary_monthly),
        ("social_charges_rate", |i| &mut i.social_charges_rate),
        ("benefits_monthly", |i| &mut i.benefits_monthly),
        ("mgmt_fee_rate", |i| &mut i.mgmt_fee_rate),
        ("platform_cost_monthly", |i| &mut i.platform_cost_monthly),
        ("work_days_month", |i| &mut i.work_days_month),
        ("interactions_per_day", |i| &mut i.interactions_per_day),
    ];

    /// Field names accepted by [`CostInputs::from_form`], in checking order
    pub const FIELDS: [&'static str; 11] = {
        let mut names = [""; 11];
        let mut idx = 0;
        while idx < Self::FIELD_TABLE.len() {
            names[idx] = Self::FIELD_TABLE[idx].0;
            idx += 1;
        }
        names
    };

    /// Build inputs from a submitted form
    ///
    /// Absent fields take their default. Present fields must parse as a
    /// finite number, an empty value included. Unknown keys are ignored.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, InvalidInputError> {
        let mut inputs = Self::default();
        for (field, slot) in Self::FIELD_TABLE {
            if let Some(raw) = form.get(field) {
                *slot(&mut inputs) = parse_field(field, raw)?;
            }
        }
        Ok(inputs)
    }
}

type FieldSlot = fn(&mut CostInputs) -> &mut f64;

fn parse_field(field: &'static str, raw: &str) -> Result<f64, InvalidInputError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidInputError {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Per-agent and workforce cost components ("CTA" breakdown)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HumanCostBreakdown {
    pub annual_salary: f64,
    pub annual_provisions: f64,
    pub total_base_salary: f64,
    pub annual_social_charges: f64,
    /// Management fee, charged on the annual salary only (provisions excluded)
    pub annual_mgmt_cost: f64,
    pub annual_platform: f64,
    pub annual_benefits: f64,
    pub cta_per_agent: f64,
    pub total_human_cost_monthly: f64,
    pub total_interactions_annual: f64,
}

/// Month at which cumulative human cost catches up with cumulative AI cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payback {
    /// No upfront investment to recover
    Immediate,
    /// First month (1-indexed) where human cost >= AI cost
    Month(u32),
    Beyond12Months,
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => write!(f, "Immediate"),
            Self::Month(month) => write!(f, "{} meses", month),
            Self::Beyond12Months => write!(f, "> 12 months"),
        }
    }
}

impl Serialize for Payback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Cumulative cost series for the 12-month chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub human: Vec<f64>,
    pub ai: Vec<f64>,
}

/// Calculator output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostReport {
    pub total_human_annual: f64,
    pub cost_per_interaction_human: f64,
    pub total_ai_annual_opex: f64,
    pub total_ai_y1: f64,
    pub savings_annual: f64,
    pub savings_y1: f64,
    pub roi_percentage: f64,
    pub payback_month: Payback,
    /// AI opex as a percentage of human cost, unclamped
    pub ai_bar_height: f64,
    pub chart_payload: ChartPayload,
    pub breakdown: HumanCostBreakdown,
}

/// Compute the full comparison report
pub fn calculate(inputs: &CostInputs) -> CostReport {
    let breakdown = human_cost(inputs);
    let total_human_annual = breakdown.cta_per_agent * inputs.num_agents;

    let cost_per_interaction_human = ratio_or_zero(
        total_human_annual,
        breakdown.total_interactions_annual,
        breakdown.total_interactions_annual != 0.0,
    );

    // AI handles the same volume the workforce would
    let ai_volume_monthly = breakdown.total_interactions_annual / MONTHS_PER_YEAR;
    let ai_variable_annual = ai_volume_monthly * inputs.cost_per_msg * MONTHS_PER_YEAR;
    let ai_fixed_annual = inputs.monthly_sub * MONTHS_PER_YEAR;
    let ai_opex_annual = ai_fixed_annual + ai_variable_annual;
    let ai_total_y1 = inputs.setup_fee + ai_opex_annual;

    let savings_annual = total_human_annual - ai_opex_annual;
    let savings_y1 = total_human_annual - ai_total_y1;
    let roi_percentage = ratio_or_zero(savings_y1, ai_total_y1, ai_total_y1 > 0.0) * 100.0;

    let (payback_month, chart_payload) = payback_timeline(
        inputs.setup_fee,
        breakdown.total_human_cost_monthly,
        ai_opex_annual / MONTHS_PER_YEAR,
    );

    let ai_bar_height =
        ratio_or_zero(ai_opex_annual, total_human_annual, total_human_annual > 0.0) * 100.0;

    CostReport {
        total_human_annual,
        cost_per_interaction_human,
        total_ai_annual_opex: ai_opex_annual,
        total_ai_y1: ai_total_y1,
        savings_annual,
        savings_y1,
        roi_percentage,
        payback_month,
        ai_bar_height,
        chart_payload,
        breakdown,
    }
}

fn human_cost(inputs: &CostInputs) -> HumanCostBreakdown {
    let social_charges_rate = inputs.social_charges_rate / 100.0;
    let mgmt_fee_rate = inputs.mgmt_fee_rate / 100.0;

    let annual_salary = inputs.salary_monthly * MONTHS_PER_YEAR;
    let annual_provisions = inputs.salary_monthly * PROVISIONS_FACTOR;
    let total_base_salary = annual_salary + annual_provisions;
    let annual_social_charges = total_base_salary * social_charges_rate;
    let annual_mgmt_cost = annual_salary * mgmt_fee_rate;
    let annual_platform = inputs.platform_cost_monthly * MONTHS_PER_YEAR;
    let annual_benefits = inputs.benefits_monthly * MONTHS_PER_YEAR;

    let cta_per_agent = total_base_salary
        + annual_social_charges
        + annual_benefits
        + annual_mgmt_cost
        + annual_platform;

    let interactions_per_agent_annual =
        inputs.interactions_per_day * inputs.work_days_month * MONTHS_PER_YEAR;

    HumanCostBreakdown {
        annual_salary,
        annual_provisions,
        total_base_salary,
        annual_social_charges,
        annual_mgmt_cost,
        annual_platform,
        annual_benefits,
        cta_per_agent,
        total_human_cost_monthly: cta_per_agent * inputs.num_agents / MONTHS_PER_YEAR,
        total_interactions_annual: interactions_per_agent_annual * inputs.num_agents,
    }
}

/// Walk 12 months of cumulative cost; the first crossing sets the payback month
fn payback_timeline(setup_fee: f64, human_monthly: f64, ai_monthly: f64) -> (Payback, ChartPayload) {
    let mut payback = if setup_fee <= 0.0 {
        Payback::Immediate
    } else {
        Payback::Beyond12Months
    };

    let mut chart = ChartPayload {
        labels: Vec::with_capacity(PAYBACK_MONTHS as usize),
        human: Vec::with_capacity(PAYBACK_MONTHS as usize),
        ai: Vec::with_capacity(PAYBACK_MONTHS as usize),
    };

    let mut curr_human = 0.0;
    let mut curr_ai = setup_fee;

    for month in 1..=PAYBACK_MONTHS {
        curr_human += human_monthly;
        curr_ai += ai_monthly;

        chart.labels.push(format!("Mês {}", month));
        chart.human.push(round2(curr_human));
        chart.ai.push(round2(curr_ai));

        if payback == Payback::Beyond12Months && curr_human >= curr_ai {
            payback = Payback::Month(month);
        }
    }

    (payback, chart)
}

fn ratio_or_zero(numerator: f64, denominator: f64, defined: bool) -> f64 {
    if defined {
        numerator / denominator
    } else {
        0.0
    }
}

/// Two-decimal rounding with ties to even on the exact binary value
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
