//! Saving, budgeting, and net worth generators

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, months, percent};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

/// Rate a high-yield savings account typically pays
const HIGH_YIELD_RATE: f64 = 4.5;

const DEFAULT_EMERGENCY_MONTHS: f64 = 6.0;

/// Month-by-month simulation limit for goal projections
const MAX_GOAL_MONTHS: u32 = 1200;

/// Months until `present` plus monthly deposits reaches `goal`
fn months_to_reach(goal: f64, present: f64, monthly: f64, annual_rate: f64) -> Option<u32> {
    let r = annual_rate / 100.0 / 12.0;
    let mut balance = present;
    let mut n = 0;
    while balance < goal {
        if n >= MAX_GOAL_MONTHS || (monthly <= 0.0 && r <= 0.0) {
            return None;
        }
        balance = balance * (1.0 + r) + monthly;
        n += 1;
    }
    Some(n)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SavingsGoalInput {
    #[serde(alias = "targetAmount")]
    pub goal_amount: f64,
    pub current_savings: f64,
    pub monthly_contribution: f64,
    pub interest_rate: f64,
    pub months_to_goal: f64,
    /// Months the user wants to reach the goal in
    pub target_months: f64,
}

pub fn savings_goal(input: &SavingsGoalInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let remaining = (input.goal_amount - input.current_savings).max(0.0);
    let projected_months = if input.months_to_goal > 0.0 {
        Some(input.months_to_goal)
    } else {
        months_to_reach(
            input.goal_amount,
            input.current_savings,
            input.monthly_contribution,
            input.interest_rate,
        )
        .map(f64::from)
    };
    let progress = finance::percent_of(input.current_savings, input.goal_amount).unwrap_or(0.0);

    if remaining <= 0.0 && input.goal_amount > 0.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Goal Reached",
            "You've already saved enough. Consider setting your next goal.",
        ));
    }

    if remaining > 0.0 && input.monthly_contribution <= 0.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "No Monthly Contribution",
                "Without regular deposits this goal depends entirely on interest.",
            )
            .with_actions(["Set up an automatic transfer on payday"]),
        );
    }

    if input.target_months > 0.0 && remaining > 0.0 {
        let behind = projected_months.map_or(true, |m| m > input.target_months);
        if behind {
            let needed = finance::required_monthly_contribution(
                input.goal_amount,
                input.current_savings,
                input.interest_rate,
                input.target_months.round() as u32,
            );
            b.recommend(
                Recommendation::warning(
                    Priority::High,
                    "Behind Your Target Date",
                    format!(
                        "To reach {} in {} you need to save {} a month.",
                        currency(input.goal_amount),
                        months(input.target_months),
                        currency(needed)
                    ),
                )
                .with_actions([
                    format!(
                        "Increase your monthly deposit by {}",
                        currency((needed - input.monthly_contribution).max(0.0))
                    ),
                    "Or push the target date back".to_string(),
                ]),
            );
        }
    }

    if let Some(m) = projected_months.filter(|m| *m > 12.0) {
        if input.interest_rate < 3.0 {
            let n = m.round() as u32;
            let at_high_yield = finance::future_value(input.current_savings, HIGH_YIELD_RATE, m / 12.0)
                + finance::future_value_of_series(input.monthly_contribution, HIGH_YIELD_RATE, n);
            let at_current = finance::future_value(input.current_savings, input.interest_rate, m / 12.0)
                + finance::future_value_of_series(input.monthly_contribution, input.interest_rate, n);
            b.recommend(
                Recommendation::optimization(
                    Priority::Medium,
                    "Use a High-Yield Savings Account",
                    format!(
                        "Earning {} instead of {} adds about {} while you save.",
                        percent(HIGH_YIELD_RATE),
                        percent(input.interest_rate),
                        currency(at_high_yield - at_current)
                    ),
                )
                .with_savings(at_high_yield - at_current),
            );
        }
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "On Pace for Your Goal",
        "Keep your deposits consistent and you'll get there on schedule.",
    ));

    b.insight(format!("Progress: {} of {}", percent(progress), currency(input.goal_amount)));
    b.insight(format!("Remaining: {}", currency(remaining)));
    match projected_months {
        Some(m) => b.insight(format!("Time to goal: {}", months(m))),
        None => b.insight("At the current pace the goal is not reached"),
    };

    if projected_months.map_or(true, |m| m > 60.0) && remaining > 0.0 {
        b.risk("Long timelines leave room for the goal amount to change");
    }
    b.risk("Dipping into these savings early resets your progress");

    b.steps([
        "Keep goal savings in a separate account",
        "Automate deposits on payday",
        "Review progress monthly",
    ]);

    let summary = match projected_months {
        Some(m) if remaining > 0.0 => format!(
            "Saving {} a month, you'll reach {} in {}.",
            currency(input.monthly_contribution),
            currency(input.goal_amount),
            months(m)
        ),
        Some(_) => format!(
            "You've reached your {} goal.",
            currency(input.goal_amount)
        ),
        None => format!(
            "At your current pace you won't reach {}; you still need {}.",
            currency(input.goal_amount),
            currency(remaining)
        ),
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmergencyFundInput {
    pub monthly_expenses: f64,
    #[serde(alias = "currentFund")]
    pub current_savings: f64,
    pub target_months: f64,
    pub target_amount: f64,
}

pub fn emergency_fund(input: &EmergencyFundInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let target_months = if input.target_months > 0.0 {
        input.target_months
    } else {
        DEFAULT_EMERGENCY_MONTHS
    };
    let target = if input.target_amount > 0.0 {
        input.target_amount
    } else {
        input.monthly_expenses * target_months
    };
    // No expenses means no month count; fall back to comparing against the target
    let covered = (input.monthly_expenses > 0.0)
        .then(|| input.current_savings / input.monthly_expenses);
    let gap = (target - input.current_savings).max(0.0);

    match covered {
        Some(held) if held < 1.0 => {
            b.recommend(
                Recommendation::warning(
                    Priority::High,
                    "Emergency Fund Critically Low",
                    format!(
                        "Your savings cover less than one month of expenses ({}). A single surprise bill could push you into debt.",
                        currency(input.monthly_expenses)
                    ),
                )
                .with_actions([
                    format!(
                        "Save {} as a first milestone",
                        currency(input.monthly_expenses)
                    ),
                    "Pause extra debt payments until one month is covered".to_string(),
                    "Sell unused items for a quick boost".to_string(),
                ]),
            );
        }
        Some(held) if held < 3.0 => {
            b.recommend(Recommendation::warning(
                Priority::Medium,
                "Build to Three Months First",
                format!(
                    "You have {:.1} months covered. Three months handles most short-term shocks.",
                    held
                ),
            ));
        }
        Some(_) => {}
        None if gap > 0.0 => {
            b.recommend(
                Recommendation::opportunity(
                    Priority::Medium,
                    "Keep Building Toward Your Target",
                    format!(
                        "You're {} short of your {} target. Saving {} a month gets you there within a year.",
                        currency(gap),
                        currency(target),
                        currency(gap / 12.0)
                    ),
                )
                .with_actions([
                    "Add your monthly expenses to see how many months you're covered",
                    "Schedule an automatic transfer to a separate savings account",
                ]),
            );
        }
        None => {}
    }

    if ctx.has_dependents() && target_months < DEFAULT_EMERGENCY_MONTHS {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Consider a Larger Cushion",
            "With dependents relying on you, six months of expenses is a safer target.",
        ));
    }

    if gap > 0.0 && covered.is_some_and(|held| held >= 1.0) {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Automate Savings to Close the Gap",
                format!(
                    "Saving {} a month fully funds your emergency fund within a year.",
                    currency(gap / 12.0)
                ),
            )
            .with_actions(["Schedule an automatic transfer to a separate savings account"]),
        );
    }

    if covered.is_some_and(|held| held > 12.0) {
        let excess = input.current_savings - input.monthly_expenses * target_months;
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Put Excess Cash to Work",
                format!(
                    "You hold {} more than your target. Investing it could earn roughly {} a year.",
                    currency(excess),
                    currency(excess * HIGH_YIELD_RATE / 100.0)
                ),
            )
            .with_savings(excess * HIGH_YIELD_RATE / 100.0),
        );
    }

    if covered.is_none() && target <= 0.0 {
        b.otherwise(Recommendation::insight(
            Priority::Low,
            "Add Your Monthly Expenses",
            "Enter your typical monthly spending to see how many months your fund covers.",
        ));
    } else {
        b.otherwise(Recommendation::insight(
            Priority::Low,
            "Emergency Fund Fully Funded",
            "You're protected against most financial surprises.",
        ));
    }

    b.insight(format!("Current savings: {}", currency(input.current_savings)));
    if let Some(held) = covered {
        b.insight(format!("Months covered: {:.1}", held));
    }
    if target > 0.0 {
        b.insight(format!(
            "Target: {} ({} months)",
            currency(target),
            target_months
        ));
    }
    if gap > 0.0 {
        b.insight(format!("Still needed: {}", currency(gap)));
    }

    if covered.is_some_and(|held| held < 3.0) {
        b.risk("A job loss or medical bill would likely require borrowing");
    }
    b.risk("Keeping the fund in a low-yield account loses value to inflation");

    b.steps([
        "Keep the fund in a high-yield savings account",
        "Only use it for true emergencies",
        "Refill it promptly after any withdrawal",
    ]);

    let summary = match covered {
        Some(held) => format!(
            "Your {} in savings covers {:.1} months of expenses against a {}-month target of {}.",
            currency(input.current_savings),
            held,
            target_months,
            currency(target)
        ),
        None if target > 0.0 => format!(
            "Your {} in savings is {} of your {} emergency fund target.",
            currency(input.current_savings),
            percent(input.current_savings / target * 100.0),
            currency(target)
        ),
        None => format!(
            "You have {} set aside for emergencies. Add your monthly expenses to see how many months it covers.",
            currency(input.current_savings)
        ),
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BudgetInput {
    #[serde(alias = "income")]
    pub monthly_income: f64,
    pub housing: f64,
    pub transportation: f64,
    pub food: f64,
    pub utilities: f64,
    pub insurance: f64,
    pub healthcare: f64,
    pub entertainment: f64,
    pub savings: f64,
    pub debt_payments: f64,
    pub other: f64,
    pub total_expenses: f64,
}

pub fn budget(input: &BudgetInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let income = if input.monthly_income > 0.0 {
        input.monthly_income
    } else {
        ctx.monthly_income().unwrap_or(0.0)
    };
    let needs = input.housing
        + input.transportation
        + input.food
        + input.utilities
        + input.insurance
        + input.healthcare
        + input.debt_payments;
    let wants = input.entertainment + input.other;
    let spending = if input.total_expenses > 0.0 {
        input.total_expenses
    } else {
        needs + wants
    };
    let share = |amount: f64| finance::percent_of(amount, income).unwrap_or(0.0);
    let needs_pct = share(needs);
    let wants_pct = share(wants);
    let savings_pct = share(input.savings);

    if income > 0.0 && spending + input.savings > income {
        let deficit = spending + input.savings - income;
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Spending Exceeds Income",
                format!(
                    "Your budget runs {} a month over your income.",
                    currency(deficit)
                ),
            )
            .with_actions([
                "Cut discretionary spending first",
                "Look for a cheaper plan on recurring bills",
            ]),
        );
    }

    if share(input.housing) > 30.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Housing Costs Are High",
            format!(
                "Housing takes {} of income; 30% or less leaves room for everything else.",
                percent(share(input.housing))
            ),
        ));
    }

    if needs_pct > 50.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Essentials Above 50%",
            format!(
                "Needs take {} of income against a 50% guideline.",
                percent(needs_pct)
            ),
        ));
    }

    if wants_pct > 30.0 {
        let trim = (wants - income * 0.3) * 12.0;
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Trim Discretionary Spending",
                format!(
                    "Wants take {} of income. Bringing them to 30% frees {} a year.",
                    percent(wants_pct),
                    currency(trim)
                ),
            )
            .with_savings(trim),
        );
    }

    if income > 0.0 && savings_pct < 20.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Increase Savings to 20%",
                format!(
                    "You save {} of income. Reaching 20% means saving {} a month.",
                    percent(savings_pct),
                    currency(income * 0.2)
                ),
            )
            .with_actions(["Pay yourself first with an automatic transfer"]),
        );
    }

    if share(input.debt_payments) > 20.0 {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Debt Payments Crowd Out Savings",
            format!(
                "Debt payments take {} of income.",
                percent(share(input.debt_payments))
            ),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Balanced Budget",
        "Your spending fits the 50/30/20 guideline.",
    ));

    b.insight(format!("Needs: {} ({})", currency(needs), percent(needs_pct)));
    b.insight(format!("Wants: {} ({})", currency(wants), percent(wants_pct)));
    b.insight(format!(
        "Savings: {} ({})",
        currency(input.savings),
        percent(savings_pct)
    ));
    b.insight(format!(
        "Left over each month: {}",
        currency(income - spending - input.savings)
    ));

    if input.savings <= 0.0 {
        b.risk("No savings leaves you exposed to unexpected expenses");
    }
    b.risk("Irregular expenses (car repairs, gifts) often go unbudgeted");

    b.steps([
        "Track spending for 30 days against this budget",
        "Automate savings and bill payments",
        "Review the budget every quarter",
    ]);

    b.build(format!(
        "On {} a month you spend {} and save {}: {} needs, {} wants, {} savings.",
        currency(income),
        currency(spending),
        currency(input.savings),
        percent(needs_pct),
        percent(wants_pct),
        percent(savings_pct)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetWorthInput {
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub liquid_assets: f64,
    pub retirement_assets: f64,
}

pub fn net_worth(input: &NetWorthInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let worth = if input.net_worth != 0.0 {
        input.net_worth
    } else {
        input.total_assets - input.total_liabilities
    };
    let debt_ratio = finance::percent_of(input.total_liabilities, input.total_assets);
    // Age × income ÷ 10 rule of thumb
    let benchmark = match (ctx.age, ctx.income) {
        (Some(age), Some(income)) if income > 0.0 => Some(age as f64 * income / 10.0),
        _ => None,
    };

    if worth < 0.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Negative Net Worth",
                format!(
                    "You owe {} more than you own. Focus on paying down high-interest debt first.",
                    currency(-worth)
                ),
            )
            .with_actions([
                "List debts by interest rate",
                "Avoid taking on new debt",
            ]),
        );
    } else if let Some(ratio) = debt_ratio.filter(|r| *r > 50.0) {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "High Debt-to-Asset Ratio",
            format!("Liabilities equal {} of your assets.", percent(ratio)),
        ));
    }

    if input.liquid_assets > 0.0 || input.total_assets > 0.0 {
        if let Some(liquid) =
            finance::percent_of(input.liquid_assets, input.total_assets).filter(|l| *l < 10.0)
        {
            b.recommend(Recommendation::warning(
                Priority::Medium,
                "Low Liquidity",
                format!(
                    "Only {} of your assets are liquid. Keep enough cash to handle emergencies without selling investments.",
                    percent(liquid)
                ),
            ));
        }
    }

    if let Some(target) = benchmark {
        if worth < target {
            b.recommend(Recommendation::opportunity(
                Priority::Medium,
                "Below Age-Based Benchmark",
                format!(
                    "A common benchmark for your age and income is {}. Raising your savings rate closes the gap over time.",
                    currency(target)
                ),
            ));
        } else {
            b.recommend(Recommendation::insight(
                Priority::Low,
                "Ahead of Your Peers",
                format!(
                    "Your net worth exceeds the age-and-income benchmark of {}.",
                    currency(target)
                ),
            ));
        }
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Healthy Balance Sheet",
        "Your assets comfortably exceed your liabilities.",
    ));

    b.insight(format!("Net worth: {}", currency(worth)));
    b.insight(format!("Total assets: {}", currency(input.total_assets)));
    b.insight(format!(
        "Total liabilities: {}",
        currency(input.total_liabilities)
    ));
    if let Some(share) = finance::percent_of(input.retirement_assets, input.total_assets) {
        b.insight(format!("Retirement accounts: {} of assets", percent(share)));
    }

    if debt_ratio.map_or(false, |r| r > 50.0) {
        b.risk("High leverage magnifies losses if asset values fall");
    }
    b.risk("Home and vehicle values can fluctuate");

    b.steps([
        "Recalculate your net worth every six months",
        "Direct extra cash to high-interest debt or investments",
    ]);

    b.build(format!(
        "Your net worth is {}: {} in assets against {} in liabilities.",
        currency(worth),
        currency(input.total_assets),
        currency(input.total_liabilities)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_to_reach() {
        assert_eq!(months_to_reach(1_200.0, 0.0, 100.0, 0.0), Some(12));
        assert_eq!(months_to_reach(1_000.0, 0.0, 0.0, 0.0), None);
        assert_eq!(months_to_reach(500.0, 800.0, 0.0, 0.0), Some(0));
    }

    #[test]
    fn test_emergency_fund_under_one_month() {
        let input = EmergencyFundInput {
            monthly_expenses: 4_000.0,
            current_savings: 1_500.0,
            ..Default::default()
        };
        let resp = emergency_fund(&input, &UserContext::default());
        let rec = resp.recommendation("Emergency Fund Critically Low").unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert!(resp.summary.contains("6-month"));
    }

    #[test]
    fn test_emergency_fund_dependents_and_excess() {
        let ctx = UserContext {
            dependents: Some(2),
            ..Default::default()
        };
        let input = EmergencyFundInput {
            monthly_expenses: 3_000.0,
            current_savings: 10_000.0,
            target_months: 3.0,
            ..Default::default()
        };
        let resp = emergency_fund(&input, &ctx);
        assert!(resp.recommendation("Consider a Larger Cushion").is_some());

        let input = EmergencyFundInput {
            monthly_expenses: 2_000.0,
            current_savings: 40_000.0,
            ..Default::default()
        };
        let resp = emergency_fund(&input, &UserContext::default());
        let rec = resp.recommendation("Put Excess Cash to Work").unwrap();
        assert_eq!(rec.potential_savings, Some(1_260.0));
    }

    #[test]
    fn test_emergency_fund_without_expenses_uses_target() {
        let input = EmergencyFundInput {
            current_savings: 20_000.0,
            target_amount: 15_000.0,
            ..Default::default()
        };
        let resp = emergency_fund(&input, &UserContext::default());
        assert!(resp.recommendation("Emergency Fund Critically Low").is_none());
        assert!(resp.recommendation("Build to Three Months First").is_none());
        assert!(resp.recommendation("Emergency Fund Fully Funded").is_some());
        assert!(!resp.summary.contains("months of expenses"));
        assert!(resp.key_insights.iter().all(|i| !i.starts_with("Months covered")));

        let input = EmergencyFundInput {
            current_savings: 5_000.0,
            target_amount: 15_000.0,
            ..Default::default()
        };
        let resp = emergency_fund(&input, &UserContext::default());
        let rec = resp.recommendation("Keep Building Toward Your Target").unwrap();
        assert_eq!(rec.priority, Priority::Medium);
        assert!(rec.description.contains("$10,000"));
        assert!(resp.summary.contains("33.3%"));
    }

    #[test]
    fn test_savings_goal_behind_target() {
        let input = SavingsGoalInput {
            goal_amount: 20_000.0,
            current_savings: 2_000.0,
            monthly_contribution: 300.0,
            target_months: 24.0,
            ..Default::default()
        };
        let resp = savings_goal(&input, &UserContext::default());
        assert!(resp.recommendation("Behind Your Target Date").is_some());
        assert!(resp
            .recommendation("Use a High-Yield Savings Account")
            .is_some());
        assert!(resp.summary.contains("5 years"));
    }

    #[test]
    fn test_budget_over_income() {
        let input = BudgetInput {
            monthly_income: 5_000.0,
            housing: 2_000.0,
            transportation: 600.0,
            food: 800.0,
            utilities: 300.0,
            entertainment: 1_200.0,
            savings: 200.0,
            ..Default::default()
        };
        let resp = budget(&input, &UserContext::default());
        assert!(resp.recommendation("Spending Exceeds Income").is_some());
        assert!(resp.recommendation("Housing Costs Are High").is_some());
        assert!(resp.recommendation("Increase Savings to 20%").is_some());
    }

    #[test]
    fn test_net_worth_negative_and_benchmark() {
        let ctx = UserContext {
            age: Some(40),
            income: Some(100_000.0),
            ..Default::default()
        };
        let input = NetWorthInput {
            total_assets: 50_000.0,
            total_liabilities: 80_000.0,
            liquid_assets: 10_000.0,
            ..Default::default()
        };
        let resp = net_worth(&input, &ctx);
        assert!(resp.recommendation("Negative Net Worth").is_some());
        assert!(resp.recommendation("Below Age-Based Benchmark").is_some());
        assert!(resp.summary.contains("-$30,000"));
    }
}
