//! Retirement projection and 401(k) generators

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, percent};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

/// Employee elective deferral limit
pub const CONTRIBUTION_LIMIT: f64 = 23_500.0;

/// Additional deferral allowed from age 50
pub const CATCH_UP_LIMIT: f64 = 7_500.0;

pub const CATCH_UP_AGE: u32 = 50;

/// Sustainable first-year withdrawal rate
const SAFE_WITHDRAWAL_RATE: f64 = 4.0;

/// Annual return assumed when neither input nor context gives one
const DEFAULT_RETURN: f64 = 7.0;

/// Employer match rate (percent of each matched dollar) when none is given
const DEFAULT_MATCH_RATE: f64 = 100.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetirementInput {
    pub current_age: f64,
    pub retirement_age: f64,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub expected_return: f64,
    pub projected_savings: f64,
    #[serde(alias = "targetSavings")]
    pub retirement_goal: f64,
    pub annual_expenses: f64,
}

fn current_age(input_age: f64, ctx: &UserContext) -> Option<u32> {
    if input_age > 0.0 {
        Some(input_age.round() as u32)
    } else {
        ctx.age
    }
}

pub fn retirement(input: &RetirementInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let age = current_age(input.current_age, ctx);
    let retire_at = if input.retirement_age > 0.0 {
        input.retirement_age
    } else {
        67.0
    };
    let years = age.map_or(0.0, |a| (retire_at - a as f64).max(0.0));
    let months_left = (years * 12.0).round() as u32;
    let planning_return = ctx
        .risk_tolerance
        .map_or(DEFAULT_RETURN, |r| r.planning_return());
    let rate = if input.expected_return > 0.0 {
        input.expected_return
    } else {
        planning_return
    };

    let projected = if input.projected_savings > 0.0 {
        input.projected_savings
    } else {
        finance::future_value(input.current_savings, rate, years)
            + finance::future_value_of_series(input.monthly_contribution, rate, months_left)
    };
    let goal = if input.retirement_goal > 0.0 {
        input.retirement_goal
    } else {
        input.annual_expenses * 100.0 / SAFE_WITHDRAWAL_RATE
    };
    let shortfall = (goal - projected).max(0.0);

    if shortfall > 0.0 {
        let needed =
            finance::required_monthly_contribution(goal, input.current_savings, rate, months_left);
        let extra = (needed - input.monthly_contribution).max(0.0);
        let mut rec = Recommendation::warning(
            Priority::High,
            "Retirement Savings Shortfall",
            format!(
                "You're projected to reach {} against a goal of {}, a gap of {}.",
                currency(projected),
                currency(goal),
                currency(shortfall)
            ),
        )
        .with_actions([
            "Raise contributions by 1% of pay each year",
            "Capture any employer match in full",
            "Consider working a few years longer",
        ]);
        if months_left > 0 {
            rec = rec.with_impact(format!(
                "Saving an extra {} a month closes the gap",
                currency(extra)
            ));
        }
        b.recommend(rec);
    }

    if input.expected_return > planning_return + 1.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Optimistic Return Assumption",
            format!(
                "Your plan assumes {} a year. Re-run it at {} to see a more conservative outcome.",
                percent(input.expected_return),
                percent(planning_return)
            ),
        ));
    }

    if age.map_or(false, |a| a >= CATCH_UP_AGE) {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Use Catch-Up Contributions",
                format!(
                    "From age {} you can contribute an extra {} a year to a 401(k).",
                    CATCH_UP_AGE,
                    currency(CATCH_UP_LIMIT)
                ),
            )
            .with_actions(["Raise your 401(k) deferral to include catch-up amounts"]),
        );
    }

    if let Some(rate_pct) = finance::percent_of(input.annual_expenses, projected)
        .filter(|r| *r > SAFE_WITHDRAWAL_RATE)
    {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Withdrawal Rate Above 4%",
            format!(
                "Covering {} a year from {} means withdrawing {} annually, which risks running out of money.",
                currency(input.annual_expenses),
                currency(projected),
                percent(rate_pct)
            ),
        ));
    }

    if let Some(save_rate) = ctx
        .income
        .and_then(|income| finance::percent_of(input.monthly_contribution * 12.0, income))
        .filter(|r| *r < 15.0)
    {
        b.recommend(Recommendation::optimization(
            Priority::Medium,
            "Aim to Save 15% of Income",
            format!(
                "You're saving {} of your income for retirement; 15% is a common target.",
                percent(save_rate)
            ),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "On Track for Retirement",
        "Your projected savings meet your goal. Keep contributing consistently.",
    ));

    b.insight(format!("Projected savings at {}: {}", retire_at, currency(projected)));
    if goal > 0.0 {
        b.insight(format!("Retirement goal: {}", currency(goal)));
    }
    b.insight(format!("Years until retirement: {}", years.round()));
    if let Some(risk) = ctx.risk_tolerance {
        b.insight(format!(
            "Planning return for a {} investor: {}",
            risk.as_str(),
            percent(planning_return)
        ));
    }
    b.insight(format!(
        "Annual income at a 4% withdrawal: {}",
        currency(projected * SAFE_WITHDRAWAL_RATE / 100.0)
    ));

    if years < 10.0 && shortfall > 0.0 {
        b.risk("Less than ten years remain to close the savings gap");
    }
    b.risk("Market downturns near retirement can reduce savings significantly");
    b.risk("Inflation erodes the purchasing power of fixed savings");

    b.steps([
        "Review your contribution rate annually",
        "Rebalance your portfolio toward your target allocation",
        "Estimate Social Security benefits at ssa.gov",
    ]);

    let summary = if shortfall > 0.0 {
        format!(
            "You're projected to save {} by age {}, {} short of your {} goal.",
            currency(projected),
            retire_at,
            currency(shortfall),
            currency(goal)
        )
    } else {
        format!(
            "You're projected to save {} by age {}.",
            currency(projected),
            retire_at
        )
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FourOhOneKInput {
    #[serde(alias = "salary")]
    pub annual_salary: f64,
    pub contribution_percent: f64,
    pub employer_match_percent: f64,
    pub employer_match_limit: f64,
    pub current_balance: f64,
    pub current_age: f64,
    pub retirement_age: f64,
    pub projected_balance: f64,
}

pub fn four_oh_one_k(input: &FourOhOneKInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let salary = if input.annual_salary > 0.0 {
        input.annual_salary
    } else {
        ctx.income.unwrap_or(0.0)
    };
    let age = current_age(input.current_age, ctx);
    let contribution = salary * input.contribution_percent / 100.0;
    // "Matches up to 6%" with no rate given means dollar-for-dollar
    let match_rate = if input.employer_match_percent > 0.0 {
        input.employer_match_percent / 100.0
    } else {
        DEFAULT_MATCH_RATE / 100.0
    };
    let matched_percent = input.contribution_percent.min(input.employer_match_limit);
    let employer_match = salary * matched_percent / 100.0 * match_rate;
    let limit = if age.map_or(false, |a| a >= CATCH_UP_AGE) {
        CONTRIBUTION_LIMIT + CATCH_UP_LIMIT
    } else {
        CONTRIBUTION_LIMIT
    };

    let forgone = if input.contribution_percent < input.employer_match_limit {
        salary * (input.employer_match_limit - input.contribution_percent) / 100.0 * match_rate
    } else {
        0.0
    };

    if forgone > 0.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Missing Employer Match",
                format!(
                    "Your employer matches up to {} of salary, but you contribute {}. You're leaving {} a year on the table.",
                    percent(input.employer_match_limit),
                    percent(input.contribution_percent),
                    currency(forgone)
                ),
            )
            .with_actions([format!(
                "Raise your contribution to at least {}",
                percent(input.employer_match_limit)
            )])
            .with_savings(forgone)
            .with_impact("Free money added to your account every year"),
        );
    }

    if contribution > limit {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Contribution Exceeds the IRS Limit",
            format!(
                "{} exceeds the {} annual limit; the excess must be withdrawn to avoid penalties.",
                currency(contribution),
                currency(limit)
            ),
        ));
    } else if age.map_or(false, |a| a >= CATCH_UP_AGE) && contribution < limit {
        b.recommend(Recommendation::opportunity(
            Priority::Medium,
            "Make Catch-Up Contributions",
            format!(
                "At {} or older you can defer up to {} a year. You have {} of room left.",
                CATCH_UP_AGE,
                currency(limit),
                currency(limit - contribution)
            ),
        ));
    }

    if input.contribution_percent >= input.employer_match_limit
        && input.contribution_percent < 10.0
        && contribution > 0.0
    {
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Increase Contribution by 1% a Year",
                "You're capturing the match; gradual increases build savings without a noticeable pay cut.",
            )
            .with_actions(["Enable automatic annual escalation if your plan offers it"]),
        );
    }

    if input.contribution_percent >= 15.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Strong Savings Rate",
            format!(
                "Contributing {} of pay puts you ahead of most savers.",
                percent(input.contribution_percent)
            ),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Review Your Investment Options",
        "Check that your funds have low expense ratios and suit your time horizon.",
    ));

    b.insight(format!("Your annual contribution: {}", currency(contribution)));
    b.insight(format!("Employer match: {}", currency(employer_match)));
    b.insight(format!(
        "Total going in each year: {}",
        currency(contribution + employer_match)
    ));
    if input.projected_balance > 0.0 {
        b.insight(format!(
            "Projected balance at retirement: {}",
            currency(input.projected_balance)
        ));
    }

    if input.employer_match_limit > 0.0 {
        b.risk("Employer contributions may be subject to a vesting schedule");
    }
    b.risk("Early withdrawals trigger taxes and a 10% penalty");

    b.steps([
        "Confirm your contribution rate with HR or your plan portal",
        "Review fund expense ratios",
        "Name or update your beneficiaries",
    ]);

    b.build(format!(
        "Contributing {} of a {} salary puts {} a year into your 401(k), plus {} from your employer.",
        percent(input.contribution_percent),
        currency(salary),
        currency(contribution),
        currency(employer_match)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecommendationType, RiskTolerance};

    #[test]
    fn test_four_oh_one_k_missing_match() {
        let input = FourOhOneKInput {
            annual_salary: 80_000.0,
            contribution_percent: 3.0,
            employer_match_percent: 100.0,
            employer_match_limit: 6.0,
            ..Default::default()
        };
        let resp = four_oh_one_k(&input, &UserContext::default());
        let rec = resp.recommendation("Missing Employer Match").unwrap();
        assert_eq!(rec.kind, RecommendationType::Warning);
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.potential_savings, Some(2_400.0));
    }

    #[test]
    fn test_four_oh_one_k_match_rate_defaults_to_full() {
        let input = FourOhOneKInput {
            annual_salary: 90_000.0,
            contribution_percent: 3.0,
            employer_match_limit: 6.0,
            ..Default::default()
        };
        let resp = four_oh_one_k(&input, &UserContext::default());
        let rec = resp.recommendation("Missing Employer Match").unwrap();
        assert_eq!(rec.potential_savings, Some(2_700.0));
        assert!(rec.description.contains("$2,700"));
    }

    #[test]
    fn test_four_oh_one_k_no_salary_skips_match_warning() {
        let input = FourOhOneKInput {
            contribution_percent: 3.0,
            employer_match_percent: 50.0,
            employer_match_limit: 6.0,
            ..Default::default()
        };
        let resp = four_oh_one_k(&input, &UserContext::default());
        assert!(resp.recommendation("Missing Employer Match").is_none());
    }

    #[test]
    fn test_four_oh_one_k_catch_up_and_limit() {
        let input = FourOhOneKInput {
            annual_salary: 120_000.0,
            contribution_percent: 10.0,
            employer_match_percent: 50.0,
            employer_match_limit: 6.0,
            current_age: 55.0,
            ..Default::default()
        };
        let resp = four_oh_one_k(&input, &UserContext::default());
        assert!(resp.recommendation("Missing Employer Match").is_none());
        assert!(resp.recommendation("Make Catch-Up Contributions").is_some());

        let input = FourOhOneKInput {
            annual_salary: 300_000.0,
            contribution_percent: 10.0,
            current_age: 35.0,
            ..Default::default()
        };
        let resp = four_oh_one_k(&input, &UserContext::default());
        assert!(resp
            .recommendation("Contribution Exceeds the IRS Limit")
            .is_some());
    }

    #[test]
    fn test_retirement_shortfall() {
        let input = RetirementInput {
            current_age: 45.0,
            retirement_age: 65.0,
            current_savings: 50_000.0,
            monthly_contribution: 300.0,
            expected_return: 6.0,
            retirement_goal: 1_000_000.0,
            ..Default::default()
        };
        let resp = retirement(&input, &UserContext::default());
        let rec = resp.recommendation("Retirement Savings Shortfall").unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.estimated_impact.is_some());
        assert!(resp.summary.contains("short of"));
    }

    #[test]
    fn test_retirement_optimistic_return_uses_context() {
        let input = RetirementInput {
            current_age: 30.0,
            retirement_age: 65.0,
            current_savings: 100_000.0,
            monthly_contribution: 1_000.0,
            expected_return: 8.0,
            ..Default::default()
        };
        let ctx = UserContext {
            risk_tolerance: Some(RiskTolerance::Conservative),
            ..Default::default()
        };
        let resp = retirement(&input, &ctx);
        assert!(resp.recommendation("Optimistic Return Assumption").is_some());

        let ctx = UserContext {
            risk_tolerance: Some(RiskTolerance::Aggressive),
            ..Default::default()
        };
        let resp = retirement(&input, &ctx);
        assert!(resp.recommendation("Optimistic Return Assumption").is_none());
    }

    #[test]
    fn test_retirement_on_track() {
        let input = RetirementInput {
            current_age: 30.0,
            retirement_age: 65.0,
            current_savings: 200_000.0,
            monthly_contribution: 2_000.0,
            expected_return: 7.0,
            retirement_goal: 1_000_000.0,
            ..Default::default()
        };
        let resp = retirement(&input, &UserContext::default());
        assert_eq!(resp.recommendations.len(), 1);
        assert_eq!(resp.recommendations[0].title, "On Track for Retirement");
    }
}
