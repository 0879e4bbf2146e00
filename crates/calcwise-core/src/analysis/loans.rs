//! Installment loan generators: auto, personal, student

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, months, percent};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

/// APR above which a personal loan is considered predatory-adjacent
pub const EXTREME_APR: f64 = 25.0;

/// 150% of the 2024 federal poverty guideline for a single person
const IDR_INCOME_EXEMPTION: f64 = 22_590.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoLoanInput {
    #[serde(alias = "carPrice")]
    pub vehicle_price: f64,
    pub down_payment: f64,
    pub trade_in_value: f64,
    pub loan_amount: f64,
    pub interest_rate: f64,
    /// Months
    pub loan_term: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
}

pub fn auto_loan(input: &AutoLoanInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let loan = if input.loan_amount > 0.0 {
        input.loan_amount
    } else {
        (input.vehicle_price - input.down_payment - input.trade_in_value).max(0.0)
    };
    let term = if input.loan_term > 0.0 {
        input.loan_term.round() as u32
    } else {
        60
    };
    let rate = input.interest_rate;
    let payment = if input.monthly_payment > 0.0 {
        input.monthly_payment
    } else {
        finance::monthly_payment(loan, rate, term)
    };
    let total_interest = if input.total_interest > 0.0 {
        input.total_interest
    } else {
        finance::total_interest(loan, rate, term)
    };
    let upfront = input.down_payment + input.trade_in_value;
    let down_pct = finance::percent_of(upfront, input.vehicle_price);

    if term > 60 {
        let priority = if term > 72 {
            Priority::High
        } else {
            Priority::Medium
        };
        b.recommend(
            Recommendation::warning(
                priority,
                "Long Loan Term Increases Risk",
                format!(
                    "A {}-month loan keeps you paying while the car depreciates, making it likely you'll owe more than it's worth for years.",
                    term
                ),
            )
            .with_actions([
                "Choose a term of 60 months or less",
                "Consider a less expensive vehicle",
                "Add GAP insurance if you keep the long term",
            ]),
        );
    }

    if let Some(down) = down_pct.filter(|d| *d < 20.0) {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "Small Down Payment",
                format!(
                    "You're putting {} down. New cars lose about 20% of their value in the first year, so a small down payment means immediate negative equity.",
                    percent(down)
                ),
            )
            .with_actions([format!(
                "Aim for at least {} down (20%)",
                currency(input.vehicle_price * 0.2)
            )]),
        );
    }

    if rate > 6.0 && loan > 0.0 {
        let target = (rate - 2.0).max(rate * 0.5);
        let saved = total_interest - finance::total_interest(loan, target, term);
        let priority = if rate > 10.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        b.recommend(
            Recommendation::optimization(
                priority,
                "Shop for a Better Auto Loan Rate",
                format!(
                    "At {}, getting pre-approved at around {} could save about {} in interest.",
                    percent(rate),
                    percent(target),
                    currency(saved)
                ),
            )
            .with_actions([
                "Get pre-approved by a credit union before visiting the dealer",
                "Ask the dealer to beat your pre-approved rate",
                "Check manufacturer promotional financing",
            ])
            .with_savings(saved),
        );
    }

    if term > 48 && loan > 0.0 {
        let short_payment = finance::monthly_payment(loan, rate, 48);
        let saved = total_interest - finance::total_interest(loan, rate, 48);
        if saved > 0.0 {
            b.recommend(
                Recommendation::opportunity(
                    Priority::Medium,
                    "Choose a Shorter Term",
                    format!(
                        "A 48-month loan would cost {} a month and save about {} in interest.",
                        currency(short_payment),
                        currency(saved)
                    ),
                )
                .with_savings(saved),
            );
        }
    }

    if let Some(income) = ctx.monthly_income() {
        if let Some(share) = finance::percent_of(payment, income) {
            if share > 15.0 {
                b.recommend(Recommendation::warning(
                    Priority::High,
                    "Car Payment Exceeds 15% of Income",
                    format!(
                        "Your payment is {} of gross monthly income. Keeping total car costs under 10%-15% protects the rest of your budget.",
                        percent(share)
                    ),
                ));
            } else if share > 10.0 {
                b.recommend(Recommendation::warning(
                    Priority::Medium,
                    "Car Payment Is a Large Share of Income",
                    format!(
                        "Your payment is {} of gross monthly income, above the 10% guideline.",
                        percent(share)
                    ),
                ));
            }
        }
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Solid Auto Loan Terms",
        "Your down payment, rate, and term all meet the 20/4/10 guideline.",
    ));

    b.insight(format!("Monthly payment: {}", currency(payment)));
    b.insight(format!(
        "Total interest over {}: {}",
        months(term as f64),
        currency(total_interest)
    ));
    b.insight(format!(
        "Total cost including down payment: {}",
        currency(loan + total_interest + upfront)
    ));
    if let Some(down) = down_pct {
        b.insight(format!("Down payment and trade-in: {} of price", percent(down)));
    }

    if term > 60 {
        b.risk("Negative equity is likely for much of the loan if you need to sell early");
    }
    if rate > 10.0 {
        b.risk("A double-digit rate suggests room to improve your credit profile");
    }
    b.risk("Insurance, maintenance, and fuel add to the true cost of ownership");

    b.steps([
        "Get pre-approved before negotiating price",
        "Negotiate the out-the-door price, not the monthly payment",
        "Compare insurance quotes for this vehicle",
    ]);

    b.build(format!(
        "Financing {} over {} months at {} costs {} a month and {} in total interest.",
        currency(loan),
        term,
        percent(rate),
        currency(payment),
        currency(total_interest)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalLoanInput {
    pub loan_amount: f64,
    /// APR
    #[serde(alias = "apr")]
    pub interest_rate: f64,
    /// Months
    pub loan_term: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Percent of the loan amount
    #[serde(alias = "originationFeePercent")]
    pub origination_fee: f64,
}

pub fn personal_loan(input: &PersonalLoanInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let loan = input.loan_amount;
    let apr = input.interest_rate;
    let term = if input.loan_term > 0.0 {
        input.loan_term.round() as u32
    } else {
        36
    };
    let payment = if input.monthly_payment > 0.0 {
        input.monthly_payment
    } else {
        finance::monthly_payment(loan, apr, term)
    };
    let total_interest = if input.total_interest > 0.0 {
        input.total_interest
    } else {
        finance::total_interest(loan, apr, term)
    };
    let fee = loan * input.origination_fee / 100.0;

    if apr > EXTREME_APR {
        let saved = total_interest - finance::total_interest(loan, 12.0, term);
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Extremely High Interest Rate",
                format!(
                    "An APR of {} is well above typical personal loan rates. Borrowing at 12% instead would save about {}.",
                    percent(apr),
                    currency(saved)
                ),
            )
            .with_actions([
                "Check rates at credit unions, which cap most APRs at 18%",
                "Consider a secured loan or a co-signer",
                "Look at 0% balance transfer offers for smaller amounts",
                "Improve your credit score before borrowing if you can wait",
            ])
            .with_savings(saved)
            .with_impact("Lowering your rate is the single biggest lever on total cost"),
        );
        b.risk(format!(
            "At {} APR, missed payments compound quickly",
            percent(apr)
        ));
    } else if apr > 15.0 {
        let saved = total_interest - finance::total_interest(loan, 10.0, term);
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Compare Lower-Rate Options",
                format!(
                    "At {}, borrowers with good credit can often find rates near 10%, saving about {}.",
                    percent(apr),
                    currency(saved)
                ),
            )
            .with_actions([
                "Prequalify with several lenders (soft credit pull)",
                "Ask about autopay rate discounts",
            ])
            .with_savings(saved),
        );
    }

    if input.origination_fee > 5.0 {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "High Origination Fee",
                format!(
                    "A {} origination fee costs {} up front and is usually deducted from the funds you receive.",
                    percent(input.origination_fee),
                    currency(fee)
                ),
            )
            .with_actions(["Look for lenders that charge no origination fee"])
            .with_savings(fee),
        );
    }

    if let Some(share) = finance::percent_of(total_interest, loan).filter(|s| *s > 50.0) {
        b.recommend(Recommendation::insight(
            Priority::Medium,
            "Interest Adds Significantly to Cost",
            format!(
                "You'll pay {} in interest, {} of the amount borrowed.",
                currency(total_interest),
                percent(share)
            ),
        ));
    }

    if loan > 0.0 {
        if let Some((saved, months_saved)) =
            finance::extra_payment_savings(loan, apr, payment, 50.0)
        {
            if saved > 0.0 {
                b.recommend(
                    Recommendation::opportunity(
                        Priority::Low,
                        "Pay a Little Extra Each Month",
                        format!(
                            "An extra $50 a month saves about {} and finishes {} sooner.",
                            currency(saved),
                            months(months_saved as f64)
                        ),
                    )
                    .with_actions(["Confirm there is no prepayment penalty"])
                    .with_savings(saved),
                );
            }
        }
    }

    if let Some(share) = ctx
        .monthly_income()
        .and_then(|income| finance::percent_of(payment, income))
        .filter(|s| *s > 20.0)
    {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Payment Strains Your Budget",
            format!(
                "This payment is {} of gross monthly income.",
                percent(share)
            ),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Reasonable Loan Terms",
        "Your rate and fees are in line with typical personal loan offers.",
    ));

    b.insight(format!("Monthly payment: {}", currency(payment)));
    b.insight(format!("Total interest: {}", currency(total_interest)));
    if fee > 0.0 {
        b.insight(format!("Origination fee: {}", currency(fee)));
    }
    b.insight(format!(
        "Total repaid: {}",
        currency(loan + total_interest + fee)
    ));

    if term > 60 {
        b.risk("Terms longer than five years raise total interest substantially");
    }
    b.risk("Personal loans are unsecured; late payments hit your credit quickly");

    b.steps([
        "Prequalify with at least three lenders",
        "Read the fee schedule and prepayment terms",
        "Set up autopay to avoid missed payments",
    ]);

    b.build(format!(
        "Borrowing {} at {} APR for {} months costs {} a month and {} in interest.",
        currency(loan),
        percent(apr),
        term,
        currency(payment),
        currency(total_interest)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentLoanInput {
    #[serde(alias = "balance")]
    pub loan_balance: f64,
    pub interest_rate: f64,
    /// Years
    pub loan_term: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// "federal" or "private"
    pub loan_type: Option<String>,
    pub annual_income: f64,
}

pub fn student_loan(input: &StudentLoanInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let balance = input.loan_balance;
    let rate = input.interest_rate;
    let term_months = if input.loan_term > 0.0 {
        (input.loan_term * 12.0).round() as u32
    } else {
        120
    };
    let payment = if input.monthly_payment > 0.0 {
        input.monthly_payment
    } else {
        finance::monthly_payment(balance, rate, term_months)
    };
    let total_interest = if input.total_interest > 0.0 {
        input.total_interest
    } else {
        finance::total_interest(balance, rate, term_months)
    };
    let is_private = input
        .loan_type
        .as_deref()
        .map_or(false, |t| t.eq_ignore_ascii_case("private"));
    let income = if input.annual_income > 0.0 {
        input.annual_income
    } else {
        ctx.income.unwrap_or(0.0)
    };

    if !is_private && income > 0.0 {
        let discretionary = (income - IDR_INCOME_EXEMPTION).max(0.0);
        let idr_payment = discretionary * 0.10 / 12.0;
        if payment > idr_payment {
            b.recommend(
                Recommendation::opportunity(
                    Priority::High,
                    "Consider Income-Driven Repayment",
                    format!(
                        "Based on {} of income, an income-driven plan could cap your payment near {} a month instead of {}.",
                        currency(income),
                        currency(idr_payment),
                        currency(payment)
                    ),
                )
                .with_actions([
                    "Compare plans with the Loan Simulator at studentaid.gov",
                    "Recertify income every year to keep the plan",
                    "Weigh lower payments against more interest over time",
                ])
                .with_savings((payment - idr_payment) * 12.0)
                .with_impact("Annual payment reduction"),
            );
        }
    }

    if !is_private {
        b.recommend(
            Recommendation::insight(
                Priority::Low,
                "Check Forgiveness Eligibility",
                "Government and qualifying nonprofit employees may have remaining federal balances forgiven after 120 qualifying payments.",
            )
            .with_actions(["Submit the PSLF employer certification form"]),
        );
    }

    if is_private && rate > 7.0 {
        let target = rate - 2.0;
        let saved = total_interest - finance::total_interest(balance, target, term_months);
        b.recommend(
            Recommendation::optimization(
                Priority::High,
                "Refinance Private Loans",
                format!(
                    "At {}, refinancing to around {} could save about {}.",
                    percent(rate),
                    percent(target),
                    currency(saved)
                ),
            )
            .with_actions([
                "Compare refinance offers from several lenders",
                "Consider a co-signer to qualify for a lower rate",
            ])
            .with_savings(saved),
        );
    }

    if !is_private && rate > 7.0 {
        b.risk("Refinancing federal loans into a private loan gives up income-driven plans and forgiveness");
    }

    if income > 0.0 && balance > income {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Balance Exceeds Annual Income",
            format!(
                "You owe {} against {} of income. Plan repayment carefully and prioritize these payments.",
                currency(balance),
                currency(income)
            ),
        ));
    }

    if balance > 0.0 {
        if let Some((saved, months_saved)) =
            finance::extra_payment_savings(balance, rate, payment, 100.0)
        {
            if saved > 0.0 {
                b.recommend(
                    Recommendation::opportunity(
                        Priority::Medium,
                        "Add $100 to Each Payment",
                        format!(
                            "Paying $100 extra a month saves about {} and gets you debt-free {} sooner.",
                            currency(saved),
                            months(months_saved as f64)
                        ),
                    )
                    .with_savings(saved),
                );
            }
        }
    }

    b.insight(format!("Monthly payment: {}", currency(payment)));
    b.insight(format!("Total interest: {}", currency(total_interest)));
    b.insight(format!(
        "Loan type: {}",
        if is_private { "private" } else { "federal" }
    ));
    if income > 0.0 {
        if let Some(share) = finance::percent_of(payment * 12.0, income) {
            b.insight(format!("Payments use {} of your income", percent(share)));
        }
    }

    b.risk("Deferment and forbearance let interest keep growing");

    b.steps([
        "Log in to your servicer and confirm your balance and rate",
        "Sign up for autopay (often a 0.25% rate discount)",
        "Review repayment plan options once a year",
    ]);

    b.build(format!(
        "Your {} student loan balance of {} at {} costs {} a month, with {} in total interest.",
        if is_private { "private" } else { "federal" },
        currency(balance),
        percent(rate),
        currency(payment),
        currency(total_interest)
    ))
}
