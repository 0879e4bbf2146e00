//! Growth, return, and inflation generators

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, percent, years};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

/// Long-run average inflation used for real-return comparisons
const LONG_RUN_INFLATION: f64 = 3.0;

/// Long-run broad market return used as a yardstick
const MARKET_BENCHMARK: f64 = 10.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompoundInterestInput {
    #[serde(alias = "initialAmount")]
    pub principal: f64,
    pub monthly_contribution: f64,
    #[serde(alias = "annualRate")]
    pub interest_rate: f64,
    pub years: f64,
    #[serde(alias = "futureValue")]
    pub final_balance: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

pub fn compound_interest(input: &CompoundInterestInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let months = (input.years * 12.0).round().max(0.0) as u32;
    let rate = input.interest_rate;
    let final_balance = if input.final_balance > 0.0 {
        input.final_balance
    } else {
        finance::future_value(input.principal, rate, input.years)
            + finance::future_value_of_series(input.monthly_contribution, rate, months)
    };
    let contributions = if input.total_contributions > 0.0 {
        input.total_contributions
    } else {
        input.principal + input.monthly_contribution * months as f64
    };
    let interest = if input.total_interest > 0.0 {
        input.total_interest
    } else {
        (final_balance - contributions).max(0.0)
    };

    if rate > 0.0 && rate < LONG_RUN_INFLATION {
        b.recommend(
            Recommendation::optimization(
                Priority::High,
                "Return Below Inflation",
                format!(
                    "At {} your money barely keeps pace with {} inflation. High-yield savings or diversified index funds may do better for long horizons.",
                    percent(rate),
                    percent(LONG_RUN_INFLATION)
                ),
            )
            .with_actions([
                "Compare high-yield savings and CD rates",
                "Use index funds for money you won't need for 5+ years",
            ]),
        );
    } else if rate > MARKET_BENCHMARK {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Return Assumption Is Aggressive",
            format!(
                "{} a year exceeds the long-run market average of about {}. Plan with a lower rate too.",
                percent(rate),
                percent(MARKET_BENCHMARK)
            ),
        ));
    }

    if input.monthly_contribution <= 0.0 && months > 0 {
        let boost = finance::future_value_of_series(100.0, rate, months);
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Add Monthly Contributions",
                format!(
                    "Adding just $100 a month would grow to {} over {}.",
                    currency(boost),
                    years(input.years)
                ),
            )
            .with_impact(format!("{} more at the end of the period", currency(boost))),
        );
    } else if input.monthly_contribution > 0.0 && months > 0 {
        let extra = finance::future_value_of_series(input.monthly_contribution * 0.1, rate, months);
        b.recommend(Recommendation::opportunity(
            Priority::Low,
            "Raise Contributions by 10%",
            format!(
                "Bumping your monthly deposit to {} adds about {} by the end.",
                currency(input.monthly_contribution * 1.1),
                currency(extra)
            ),
        ));
    }

    if input.years > 0.0 && input.years < 10.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Time Is Your Biggest Lever",
            "Compounding accelerates in later years; extending the horizon multiplies growth.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Compounding Is Working for You",
        "Stay consistent and let time do the heavy lifting.",
    ));

    b.insight(format!("Final balance: {}", currency(final_balance)));
    b.insight(format!("Total contributions: {}", currency(contributions)));
    b.insight(format!("Interest earned: {}", currency(interest)));
    if let Some(share) = finance::percent_of(interest, final_balance).filter(|s| *s > 50.0) {
        b.insight(format!(
            "Growth makes up {} of your final balance",
            percent(share)
        ));
    }

    b.risk("Actual returns vary year to year");
    b.risk("Inflation reduces the real value of the final balance");

    b.steps([
        "Automate your monthly contribution",
        "Use tax-advantaged accounts first",
        "Revisit your rate assumption once a year",
    ]);

    b.build(format!(
        "Investing {} plus {} a month at {} for {} grows to {}, including {} of interest.",
        currency(input.principal),
        currency(input.monthly_contribution),
        percent(rate),
        years(input.years),
        currency(final_balance),
        currency(interest)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentReturnInput {
    pub initial_investment: f64,
    pub final_value: f64,
    pub years: f64,
    /// Total return in percent
    pub total_return: f64,
    pub annualized_return: f64,
}

pub fn investment_return(input: &InvestmentReturnInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let gain = input.final_value - input.initial_investment;
    let total_return = if input.total_return != 0.0 {
        input.total_return
    } else {
        finance::percent_of(gain, input.initial_investment).unwrap_or(0.0)
    };
    let annualized = if input.annualized_return != 0.0 {
        Some(input.annualized_return)
    } else {
        finance::cagr(input.initial_investment, input.final_value, input.years)
    };

    if total_return < 0.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Investment Lost Value",
                format!(
                    "This investment is down {} overall. Decide whether the original thesis still holds before adding more.",
                    percent(-total_return)
                ),
            )
            .with_actions([
                "Review why you bought it and whether that has changed",
                "Consider harvesting the loss to offset gains",
            ]),
        );
    } else if let Some(rate) = annualized.filter(|r| *r < LONG_RUN_INFLATION) {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Return Below Inflation",
            format!(
                "An annualized {} trails inflation, so your purchasing power shrank.",
                percent(rate)
            ),
        ));
    }

    if let Some(rate) = annualized.filter(|r| *r > 15.0) {
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Lock In Some Gains",
                format!(
                    "{} a year is exceptional. Rebalancing keeps one winner from dominating your portfolio.",
                    percent(rate)
                ),
            )
            .with_actions(["Trim back to your target allocation"]),
        );
    }

    if input.years > 0.0 && input.years < 1.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Short Holding Period",
            "Gains held under a year are taxed as ordinary income.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Solid Long-Term Return",
        "Your return is in a healthy range. Keep costs low and stay diversified.",
    ));

    b.insight(format!("Gain: {}", currency(gain)));
    b.insight(format!("Total return: {}", percent(total_return)));
    if let Some(rate) = annualized {
        b.insight(format!("Annualized return: {}", percent(rate)));
        let versus = if rate >= MARKET_BENCHMARK {
            "at or above"
        } else {
            "below"
        };
        b.insight(format!(
            "That is {} the long-run market average of {}",
            versus,
            percent(MARKET_BENCHMARK)
        ));
    }

    b.risk("Past performance does not guarantee future results");
    if annualized.map_or(false, |r| r > 15.0) {
        b.risk("Concentrated positions amplify losses as well as gains");
    }

    b.steps([
        "Compare against a low-cost index benchmark",
        "Account for fees and taxes in your real return",
    ]);

    b.build(format!(
        "{} grew to {} over {}, a total return of {}{}.",
        currency(input.initial_investment),
        currency(input.final_value),
        years(input.years),
        percent(total_return),
        annualized
            .map(|r| format!(" ({} a year)", percent(r)))
            .unwrap_or_default()
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InflationInput {
    #[serde(alias = "currentAmount")]
    pub amount: f64,
    pub inflation_rate: f64,
    pub years: f64,
    /// Future cost of today's purchase
    pub future_value: f64,
    /// Future buying power of today's money
    pub purchasing_power: f64,
}

pub fn inflation(input: &InflationInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let growth = (1.0 + input.inflation_rate / 100.0).powf(input.years.max(0.0));
    let future_cost = if input.future_value > 0.0 {
        input.future_value
    } else {
        input.amount * growth
    };
    let buying_power = if input.purchasing_power > 0.0 {
        input.purchasing_power
    } else if growth > 0.0 {
        input.amount / growth
    } else {
        input.amount
    };
    let lost = (input.amount - buying_power).max(0.0);

    if input.inflation_rate > 5.0 {
        b.recommend(Recommendation::warning(
            Priority::High,
            "High Inflation Erodes Savings",
            format!(
                "At {} a year, prices double in about {}. Cash sitting idle loses value fast.",
                percent(input.inflation_rate),
                years((72.0 / input.inflation_rate).round())
            ),
        ));
    }

    b.recommend(
        Recommendation::opportunity(
            Priority::Medium,
            "Invest to Outpace Inflation",
            format!(
                "Money you won't need soon should earn more than {} to hold its value.",
                percent(input.inflation_rate)
            ),
        )
        .with_actions([
            "Consider I bonds or TIPS for inflation protection",
            "Hold long-term money in diversified stock funds",
            "Keep only your emergency fund in cash",
        ]),
    );

    b.insight(format!(
        "{} today will cost {} in {}",
        currency(input.amount),
        currency(future_cost),
        years(input.years)
    ));
    b.insight(format!(
        "{} will buy what {} buys today",
        currency(input.amount),
        currency(buying_power)
    ));
    b.insight(format!("Purchasing power lost: {}", currency(lost)));

    if input.years >= 20.0 {
        b.risk("Over long horizons even modest inflation cuts purchasing power in half");
    }
    b.risk("Fixed incomes and cash savings fall behind rising prices");

    b.steps([
        "Check that your savings rate beats inflation",
        "Revisit budget targets each year for price changes",
    ]);

    b.build(format!(
        "At {} inflation, {} today has the buying power of {} in {}.",
        percent(input.inflation_rate),
        currency(input.amount),
        currency(buying_power),
        years(input.years)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_interest_low_rate_and_no_contribution() {
        let input = CompoundInterestInput {
            principal: 10_000.0,
            interest_rate: 1.5,
            years: 20.0,
            ..Default::default()
        };
        let resp = compound_interest(&input, &UserContext::default());
        assert_eq!(
            resp.recommendation("Return Below Inflation").unwrap().priority,
            Priority::High
        );
        assert!(resp.recommendation("Add Monthly Contributions").is_some());
        assert!(resp.summary.contains("$10,000"));
    }

    #[test]
    fn test_compound_interest_growth_share() {
        let input = CompoundInterestInput {
            principal: 10_000.0,
            monthly_contribution: 500.0,
            interest_rate: 8.0,
            years: 30.0,
            ..Default::default()
        };
        let resp = compound_interest(&input, &UserContext::default());
        assert!(resp
            .key_insights
            .iter()
            .any(|i| i.starts_with("Growth makes up")));
    }

    #[test]
    fn test_investment_return_loss() {
        let input = InvestmentReturnInput {
            initial_investment: 10_000.0,
            final_value: 8_000.0,
            years: 3.0,
            ..Default::default()
        };
        let resp = investment_return(&input, &UserContext::default());
        assert!(resp.recommendation("Investment Lost Value").is_some());
    }

    #[test]
    fn test_investment_return_strong() {
        let input = InvestmentReturnInput {
            initial_investment: 10_000.0,
            final_value: 40_000.0,
            years: 5.0,
            ..Default::default()
        };
        let resp = investment_return(&input, &UserContext::default());
        assert!(resp.recommendation("Lock In Some Gains").is_some());
        assert!(resp.summary.contains("300%"));
    }

    #[test]
    fn test_inflation_high_rate() {
        let input = InflationInput {
            amount: 10_000.0,
            inflation_rate: 8.0,
            years: 10.0,
            ..Default::default()
        };
        let resp = inflation(&input, &UserContext::default());
        assert_eq!(resp.recommendations[0].title, "High Inflation Erodes Savings");
        // 10,000 / 1.08^10 is about 4,632
        assert!(resp.summary.contains("$4,632"));
    }

    #[test]
    fn test_year_counts_read_naturally() {
        let input = InflationInput {
            amount: 1_000.0,
            inflation_rate: 3.0,
            years: 1.0,
            ..Default::default()
        };
        let resp = inflation(&input, &UserContext::default());
        assert!(resp.summary.ends_with("in 1 year."));
        assert!(!resp.summary.contains("1 years"));

        let input = InvestmentReturnInput {
            initial_investment: 10_000.0,
            final_value: 12_000.0,
            years: 2.5000000001,
            ..Default::default()
        };
        let resp = investment_return(&input, &UserContext::default());
        assert!(resp.summary.contains("over 2.5 years,"));
    }
}
