/// Integration tests for the cost comparison calculator
use cost_compare::calculator::{calculate, CostInputs, Payback};
use proptest::prelude::*;

fn non_negative_inputs() -> impl Strategy<Value = CostInputs> {
    (
        (0.0..50_000.0f64, 0.0..20_000.0f64, 0.0..5.0f64),
        (0.0..200.0f64, 0.0..20_000.0f64, 0.0..100.0f64, 0.0..3_000.0f64),
        (0.0..30.0f64, 0.0..5_000.0f64, 0.0..31.0f64, 0.0..500.0f64),
    )
        .prop_map(|((setup, sub, msg), (agents, salary, social, benefits), (mgmt, platform, days, per_day))| {
            CostInputs {
                setup_fee: setup,
                monthly_sub: sub,
                cost_per_msg: msg,
                num_agents: agents.floor(),
                salary_monthly: salary,
                social_charges_rate: social,
                benefits_monthly: benefits,
                mgmt_fee_rate: mgmt,
                platform_cost_monthly: platform,
                work_days_month: days.floor(),
                interactions_per_day: per_day.floor(),
            }
        })
}

fn reference_inputs() -> CostInputs {
    CostInputs {
        salary_monthly: 2500.0,
        social_charges_rate: 40.0,
        mgmt_fee_rate: 8.0,
        num_agents: 1.0,
        benefits_monthly: 0.0,
        platform_cost_monthly: 0.0,
        work_days_month: 22.0,
        interactions_per_day: 48.0,
        setup_fee: 5000.0,
        monthly_sub: 1000.0,
        cost_per_msg: 0.5,
    }
}

#[test]
fn test_reference_scenario_totals() {
    let report = calculate(&reference_inputs());

    assert!((report.total_human_annual - 50227.5).abs() < 1e-9);
    assert!((report.total_ai_annual_opex - 18336.0).abs() < 1e-9);
    assert!((report.total_ai_y1 - 23336.0).abs() < 1e-9);
    assert!((report.savings_y1 - 26891.5).abs() < 1e-9);
    assert!((report.roi_percentage - 115.236).abs() < 0.001);
    assert!((report.cost_per_interaction_human - 50227.5 / 12672.0).abs() < 1e-9);
}

#[test]
fn test_management_fee_excludes_provisions() {
    let report = calculate(&reference_inputs());
    // 8% of 30000, not of 34162.5
    assert!((report.breakdown.annual_mgmt_cost - 2400.0).abs() < 1e-9);
}

#[test]
fn test_rerun_is_identical() {
    let inputs = reference_inputs();
    let first = serde_json::to_string(&calculate(&inputs)).unwrap();
    let second = serde_json::to_string(&calculate(&inputs)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_volume_cost_per_interaction_is_zero() {
    for inputs in [
        CostInputs { num_agents: 0.0, ..reference_inputs() },
        CostInputs { interactions_per_day: 0.0, ..reference_inputs() },
        CostInputs { work_days_month: 0.0, ..reference_inputs() },
    ] {
        assert_eq!(calculate(&inputs).cost_per_interaction_human, 0.0);
    }
}

#[test]
fn test_free_ai_has_zero_roi() {
    let inputs = CostInputs {
        setup_fee: 0.0,
        monthly_sub: 0.0,
        cost_per_msg: 0.0,
        ..reference_inputs()
    };
    let report = calculate(&inputs);
    assert_eq!(report.total_ai_y1, 0.0);
    assert_eq!(report.roi_percentage, 0.0);
    assert_eq!(report.payback_month, Payback::Immediate);
}

proptest! {
    #[test]
    fn prop_cta_decomposes_additively(inputs in non_negative_inputs()) {
        let report = calculate(&inputs);
        let b = &report.breakdown;

        let sum = b.annual_salary + b.annual_provisions
            + b.annual_social_charges
            + b.annual_benefits
            + b.annual_mgmt_cost
            + b.annual_platform;
        prop_assert!((b.cta_per_agent - sum).abs() <= 1e-6 * sum.max(1.0));
        prop_assert_eq!(report.total_human_annual, b.cta_per_agent * inputs.num_agents);
    }

    #[test]
    fn prop_chart_series_are_non_decreasing(inputs in non_negative_inputs()) {
        let chart = calculate(&inputs).chart_payload;

        prop_assert_eq!(chart.labels.len(), 12);
        prop_assert_eq!(chart.human.len(), 12);
        prop_assert_eq!(chart.ai.len(), 12);
        for pair in chart.human.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
        for pair in chart.ai.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn prop_payback_immediate_without_setup_fee(inputs in non_negative_inputs()) {
        let inputs = CostInputs { setup_fee: 0.0, ..inputs };
        prop_assert_eq!(calculate(&inputs).payback_month, Payback::Immediate);
    }

    #[test]
    fn prop_payback_is_first_crossing(inputs in non_negative_inputs()) {
        prop_assume!(inputs.setup_fee > 0.0);
        let report = calculate(&inputs);
        let human_monthly = report.breakdown.total_human_cost_monthly;
        let ai_monthly = report.total_ai_annual_opex / 12.0;

        let mut human = 0.0;
        let mut ai = inputs.setup_fee;
        let mut expected = Payback::Beyond12Months;
        for month in 1..=12 {
            human += human_monthly;
            ai += ai_monthly;
            if human >= ai {
                expected = Payback::Month(month);
                break;
            }
        }
        prop_assert_eq!(report.payback_month, expected);
    }
}
