//! Revolving and multi-debt generators

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, months, percent};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;
use super::loans::EXTREME_APR;

/// Typical balance transfer fee
const TRANSFER_FEE_RATE: f64 = 0.03;

/// Typical 0% intro period (months)
const TRANSFER_INTRO_MONTHS: f64 = 15.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditCardInput {
    #[serde(alias = "currentBalance")]
    pub balance: f64,
    #[serde(alias = "interestRate")]
    pub apr: f64,
    pub monthly_payment: f64,
    pub minimum_payment: f64,
    pub credit_limit: f64,
    pub months_to_payoff: f64,
    pub total_interest: f64,
}

pub fn credit_card(input: &CreditCardInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let balance = input.balance;
    let apr = input.apr;
    let payment = if input.monthly_payment > 0.0 {
        input.monthly_payment
    } else {
        input.minimum_payment
    };
    let simulated = finance::payoff(balance, apr, payment);
    let payoff_months = if input.months_to_payoff > 0.0 {
        Some(input.months_to_payoff)
    } else {
        simulated.map(|p| p.months as f64)
    };
    let total_interest = if input.total_interest > 0.0 {
        input.total_interest
    } else {
        simulated.map_or(0.0, |p| p.total_interest)
    };
    let utilization = finance::percent_of(balance, input.credit_limit);
    let monthly_interest = balance * apr / 100.0 / 12.0;

    if balance > 0.0 && payoff_months.is_none() {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Payment Doesn't Cover Interest",
                format!(
                    "Your balance accrues about {} in interest each month, so a {} payment will never pay it off.",
                    currency(monthly_interest),
                    currency(payment)
                ),
            )
            .with_actions([
                format!(
                    "Pay at least {} a month to make progress",
                    currency(monthly_interest + balance * 0.01)
                ),
                "Stop using the card until the balance is under control".to_string(),
            ]),
        );
    }

    if apr > EXTREME_APR {
        let intro_interest = monthly_interest * TRANSFER_INTRO_MONTHS;
        let capped = if total_interest > 0.0 {
            intro_interest.min(total_interest)
        } else {
            intro_interest
        };
        let saved = capped - balance * TRANSFER_FEE_RATE;
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Extremely High Interest Rate",
                format!(
                    "An APR of {} costs you about {} a month in interest. Moving the balance to a 0% intro card could save roughly {}.",
                    percent(apr),
                    currency(monthly_interest),
                    currency(saved.max(0.0))
                ),
            )
            .with_actions([
                "Apply for a 0% balance transfer card (expect a 3%-5% fee)",
                "Call your issuer and ask for a lower APR",
                "Consider a lower-rate personal consolidation loan",
                "Pay more than the minimum every month",
            ])
            .with_savings(saved)
            .with_impact("Eliminates interest during the intro period"),
        );
    } else if apr > 18.0 {
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Ask for a Lower APR",
                format!(
                    "At {}, a quick call to your issuer can often shave a few points off your rate.",
                    percent(apr)
                ),
            )
            .with_actions([
                "Mention your payment history and competing offers",
                "Ask about hardship programs if you're struggling",
            ]),
        );
    }

    if let Some(util) = utilization.filter(|u| *u > 30.0) {
        let priority = if util > 50.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        b.recommend(
            Recommendation::warning(
                priority,
                "High Credit Utilization",
                format!(
                    "You're using {} of your credit limit. Utilization above 30% can lower your credit score.",
                    percent(util)
                ),
            )
            .with_actions([
                format!(
                    "Pay the balance below {} (30% of your limit)",
                    currency(input.credit_limit * 0.3)
                ),
                "Make a mid-cycle payment before the statement closes".to_string(),
            ]),
        );
    }

    if input.minimum_payment > 0.0 && payment <= input.minimum_payment * 1.1 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Paying Only the Minimum",
                "Minimum payments are designed to keep you in debt for years; most of each payment goes to interest.",
            )
            .with_actions([
                "Set a fixed payment above the minimum",
                "Put windfalls (tax refunds, bonuses) toward the balance",
            ]),
        );
    }

    if balance > 0.0 && payment > 0.0 {
        if let Some((saved, months_saved)) =
            finance::extra_payment_savings(balance, apr, payment, payment)
        {
            if saved > 0.0 {
                b.recommend(
                    Recommendation::opportunity(
                        Priority::Medium,
                        "Double Your Payment",
                        format!(
                            "Paying {} a month instead of {} saves about {} in interest and clears the card {} sooner.",
                            currency(payment * 2.0),
                            currency(payment),
                            currency(saved),
                            months(months_saved as f64)
                        ),
                    )
                    .with_savings(saved),
                );
            }
        }
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "You're on Track",
        "Your payment plan clears the balance efficiently.",
    ));

    b.insight(format!("Current balance: {}", currency(balance)));
    match payoff_months {
        Some(m) => b.insight(format!("Time to pay off: {}", months(m))),
        None => b.insight("At this payment the balance never reaches zero"),
    };
    b.insight(format!("Total interest: {}", currency(total_interest)));
    if let Some(util) = utilization {
        b.insight(format!("Credit utilization: {}", percent(util)));
    }

    if payoff_months.map_or(true, |m| m > 60.0) {
        b.risk("A payoff horizon beyond five years leaves you exposed to rate increases");
    }
    if apr > EXTREME_APR {
        b.risk("Penalty APRs can rise further after a late payment");
    }

    b.steps([
        "Stop adding new charges to this card",
        "Automate a fixed monthly payment",
        "Check your credit report for errors",
    ]);

    let summary = match payoff_months {
        Some(m) => format!(
            "Paying {} a month on a {} balance at {} APR clears it in {} with {} in interest.",
            currency(payment),
            currency(balance),
            percent(apr),
            months(m),
            currency(total_interest)
        ),
        None => format!(
            "A {} payment does not cover the interest on your {} balance at {} APR.",
            currency(payment),
            currency(balance),
            percent(apr)
        ),
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebtPayoffInput {
    pub total_debt: f64,
    #[serde(alias = "debtCount")]
    pub number_of_debts: f64,
    pub monthly_payment: f64,
    pub months_to_payoff: f64,
    pub total_interest: f64,
    /// "avalanche" or "snowball"
    pub strategy: Option<String>,
    pub highest_interest_rate: f64,
}

pub fn debt_payoff(input: &DebtPayoffInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let strategy = input
        .strategy
        .as_deref()
        .map(|s| s.trim().to_ascii_lowercase())
        .unwrap_or_default();
    let payoff_months = input.months_to_payoff;
    let debts = input.number_of_debts.round() as u32;

    if strategy == "snowball" && input.highest_interest_rate > 15.0 {
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Switch to the Avalanche Method",
                format!(
                    "With debt at {} APR, paying the highest-rate balance first minimizes total interest. Snowball trades some savings for quick wins.",
                    percent(input.highest_interest_rate)
                ),
            )
            .with_actions([
                "List debts by interest rate, highest first",
                "Keep minimums on everything else",
            ]),
        );
    } else if strategy == "avalanche" {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "You're Using the Interest-Saving Method",
            "The avalanche method pays the least interest overall.",
        ));
    }

    if payoff_months > 60.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Long Payoff Timeline",
                format!(
                    "At this pace you'll be paying for {}. Look for ways to raise your monthly payment.",
                    months(payoff_months)
                ),
            )
            .with_actions([
                "Trim discretionary spending and redirect it to debt",
                "Pick up extra income temporarily",
            ]),
        );
    } else if payoff_months > 36.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Payoff Takes More Than Three Years",
            format!(
                "You'll be debt-free in {}; even small extra payments shorten that.",
                months(payoff_months)
            ),
        ));
    }

    if let Some(ratio) = ctx
        .income
        .and_then(|income| finance::percent_of(input.total_debt, income))
        .filter(|r| *r > 40.0)
    {
        b.recommend(Recommendation::warning(
            Priority::High,
            "High Debt Relative to Income",
            format!(
                "Your debt equals {} of annual income. Consider speaking with a nonprofit credit counselor.",
                percent(ratio)
            ),
        ));
    }

    if debts >= 3 && input.highest_interest_rate > 10.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Consider Consolidating",
                format!(
                    "Rolling {} debts into one lower-rate loan simplifies payments and can cut interest.",
                    debts
                ),
            )
            .with_actions([
                "Prequalify for a consolidation loan",
                "Only consolidate if the new rate is lower than your weighted average",
            ]),
        );
    }

    if input.highest_interest_rate > 20.0 {
        b.recommend(Recommendation::optimization(
            Priority::Medium,
            "Move High-Rate Balances",
            format!(
                "Balances at {} are good candidates for a 0% balance transfer.",
                percent(input.highest_interest_rate)
            ),
        ));
    }

    if input.monthly_payment > 0.0 && input.total_debt > 0.0 {
        let base = input.total_debt / input.monthly_payment;
        let faster = input.total_debt / (input.monthly_payment + 100.0);
        b.recommend(Recommendation::opportunity(
            Priority::Low,
            "Add $100 a Month",
            format!(
                "An extra $100 a month could shorten payoff by roughly {}, before counting interest savings.",
                months(base - faster)
            ),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Solid Payoff Plan",
        "Your plan clears the debt on a reasonable timeline.",
    ));

    b.insight(format!("Total debt: {}", currency(input.total_debt)));
    b.insight(format!(
        "Monthly payment: {}",
        currency(input.monthly_payment)
    ));
    if payoff_months > 0.0 {
        b.insight(format!("Debt-free in {}", months(payoff_months)));
    }
    b.insight(format!(
        "Total interest: {}",
        currency(input.total_interest)
    ));

    if input.highest_interest_rate > 20.0 {
        b.risk("High-rate balances grow quickly if payments slip");
    }
    b.risk("New charges during payoff extend the timeline");

    b.steps([
        "List every debt with balance, rate, and minimum payment",
        "Automate minimum payments on all accounts",
        "Direct every extra dollar to your target debt",
    ]);

    b.build(format!(
        "Paying {} a month toward {} of debt{} clears it in {} with {} in interest.",
        currency(input.monthly_payment),
        currency(input.total_debt),
        if strategy.is_empty() {
            String::new()
        } else {
            format!(" using the {} method", strategy)
        },
        months(payoff_months),
        currency(input.total_interest)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecommendationType;

    #[test]
    fn test_credit_card_extreme_apr() {
        let input = CreditCardInput {
            balance: 5_000.0,
            apr: 27.99,
            monthly_payment: 200.0,
            ..Default::default()
        };
        let resp = credit_card(&input, &UserContext::default());
        let rec = resp.recommendation("Extremely High Interest Rate").unwrap();
        assert_eq!(rec.kind, RecommendationType::Warning);
        assert_eq!(rec.priority, Priority::High);
        assert!(rec.potential_savings.is_some());
    }

    #[test]
    fn test_credit_card_never_pays_off() {
        let input = CreditCardInput {
            balance: 10_000.0,
            apr: 24.0,
            monthly_payment: 150.0,
            ..Default::default()
        };
        let resp = credit_card(&input, &UserContext::default());
        assert!(resp.recommendation("Payment Doesn't Cover Interest").is_some());
        assert!(resp.summary.contains("does not cover"));
    }

    #[test]
    fn test_credit_card_utilization_and_minimum() {
        let input = CreditCardInput {
            balance: 4_000.0,
            apr: 19.0,
            monthly_payment: 120.0,
            minimum_payment: 115.0,
            credit_limit: 5_000.0,
            ..Default::default()
        };
        let resp = credit_card(&input, &UserContext::default());
        assert_eq!(
            resp.recommendation("High Credit Utilization")
                .unwrap()
                .priority,
            Priority::High
        );
        assert!(resp.recommendation("Paying Only the Minimum").is_some());
        assert!(resp.recommendation("Ask for a Lower APR").is_some());
        assert!(resp.recommendation("Double Your Payment").is_some());
    }

    #[test]
    fn test_debt_payoff_snowball_switch() {
        let input = DebtPayoffInput {
            total_debt: 25_000.0,
            number_of_debts: 4.0,
            monthly_payment: 600.0,
            months_to_payoff: 52.0,
            total_interest: 6_200.0,
            strategy: Some("Snowball".to_string()),
            highest_interest_rate: 24.0,
        };
        let ctx = UserContext {
            income: Some(50_000.0),
            ..Default::default()
        };
        let resp = debt_payoff(&input, &ctx);
        assert!(resp.recommendation("Switch to the Avalanche Method").is_some());
        assert!(resp
            .recommendation("Payoff Takes More Than Three Years")
            .is_some());
        assert!(resp.recommendation("High Debt Relative to Income").is_some());
        assert!(resp.recommendation("Consider Consolidating").is_some());
        assert!(resp.summary.contains("snowball"));
    }
}
