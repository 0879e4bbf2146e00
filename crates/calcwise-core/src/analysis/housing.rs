//! Housing generators: mortgage, refinance, rent vs. buy, home affordability

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, months, percent, years};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

/// LTV above which lenders require PMI
const PMI_LTV_THRESHOLD: f64 = 80.0;

/// Front-end housing ratio guideline (percent of gross income)
const HOUSING_RATIO_LIMIT: f64 = 28.0;

/// Back-end debt-to-income guideline
const DTI_COMFORT_LIMIT: f64 = 36.0;

/// Qualified-mortgage DTI ceiling
const DTI_LENDING_LIMIT: f64 = 43.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MortgageInput {
    pub home_price: f64,
    pub down_payment: f64,
    pub loan_amount: f64,
    pub interest_rate: f64,
    /// Years
    #[serde(alias = "loanTermYears")]
    pub loan_term: f64,
    pub monthly_payment: f64,
    pub total_interest: f64,
    /// Annual
    pub property_tax: f64,
    /// Annual
    pub home_insurance: f64,
    /// Monthly
    pub pmi: f64,
    /// Monthly
    #[serde(alias = "hoa")]
    pub hoa_fees: f64,
}

pub fn mortgage(input: &MortgageInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let loan = if input.loan_amount > 0.0 {
        input.loan_amount
    } else {
        (input.home_price - input.down_payment).max(0.0)
    };
    let term_years = if input.loan_term > 0.0 {
        input.loan_term
    } else {
        30.0
    };
    let term_months = (term_years * 12.0).round() as u32;
    let rate = input.interest_rate;
    let payment = if input.monthly_payment > 0.0 {
        input.monthly_payment
    } else {
        finance::monthly_payment(loan, rate, term_months)
    };
    let total_interest = if input.total_interest > 0.0 {
        input.total_interest
    } else {
        finance::total_interest(loan, rate, term_months)
    };
    let ltv = finance::percent_of(loan, input.home_price);
    let down_pct = finance::percent_of(input.down_payment, input.home_price);
    let escrow =
        input.property_tax / 12.0 + input.home_insurance / 12.0 + input.pmi + input.hoa_fees;
    let full_payment = payment + escrow;

    if let Some(ltv) = ltv.filter(|l| *l > PMI_LTV_THRESHOLD) {
        let annual_pmi = if input.pmi > 0.0 {
            input.pmi * 12.0
        } else {
            loan * 0.0075
        };
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "High Loan-to-Value Ratio",
                format!(
                    "Your loan-to-value ratio is {}. Lenders typically require private mortgage insurance (PMI) above {}, adding roughly {} a year until you reach 20% equity.",
                    percent(ltv),
                    percent(PMI_LTV_THRESHOLD),
                    currency(annual_pmi)
                ),
            )
            .with_actions([
                format!(
                    "Increase your down payment to {} (20%) to avoid PMI",
                    currency(input.home_price * 0.2)
                ),
                "Compare PMI rates and cancellation terms across lenders".to_string(),
                "Ask about lender-paid or single-premium PMI".to_string(),
                "Request PMI removal once your balance reaches 80% of the original value"
                    .to_string(),
            ])
            .with_savings(annual_pmi)
            .with_impact("Avoiding PMI typically saves 0.5%-1% of the loan amount per year"),
        );

        if ltv > 90.0 {
            b.risk(format!(
                "Only {} equity leaves little cushion if home values fall",
                percent(100.0 - ltv)
            ));
        }
    }

    if rate > 6.0 && loan > 0.0 {
        let reduction = if rate > 7.0 { 0.5 } else { 0.25 };
        let lower = finance::monthly_payment(loan, rate - reduction, term_months);
        let lifetime = (payment - lower).max(0.0) * term_months as f64;
        let priority = if rate > 7.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        b.recommend(
            Recommendation::optimization(
                priority,
                "Shop for a Lower Interest Rate",
                format!(
                    "At {}, a rate just {} points lower would cut your payment by about {} a month.",
                    percent(rate),
                    reduction,
                    currency(payment - lower)
                ),
            )
            .with_actions([
                "Request Loan Estimates from at least three lenders on the same day",
                "Improve your credit score before locking a rate",
                "Ask about the cost of buying discount points",
                "Consider a credit union or mortgage broker",
            ])
            .with_savings(lifetime)
            .with_impact(format!(
                "{} over the life of the loan",
                currency(lifetime)
            )),
        );
    }

    if term_years >= 30.0 && loan > 0.0 {
        let short_rate = (rate - 0.5).max(0.0);
        let short_payment = finance::monthly_payment(loan, short_rate, 180);
        let short_interest = finance::total_interest(loan, short_rate, 180);
        let saved = total_interest - short_interest;
        if saved > 0.0 {
            b.recommend(
                Recommendation::opportunity(
                    Priority::Medium,
                    "Consider a 15-Year Loan Term",
                    format!(
                        "A 15-year mortgage at roughly {} would raise your payment to {} but cut total interest by about {}.",
                        percent(short_rate),
                        currency(short_payment),
                        currency(saved)
                    ),
                )
                .with_actions([
                    "Compare 15- and 30-year quotes side by side",
                    "Confirm the higher payment fits your budget with room to spare",
                ])
                .with_savings(saved),
            );
        }
    }

    if loan > 0.0 && payment > 0.0 {
        if let Some((saved, months_saved)) =
            finance::extra_payment_savings(loan, rate, payment, payment / 12.0)
        {
            if saved > 0.0 {
                b.recommend(
                    Recommendation::opportunity(
                        Priority::Low,
                        "Make One Extra Payment Per Year",
                        format!(
                            "Adding {} a month (one extra payment a year) would save about {} in interest and pay off the loan {} early.",
                            currency(payment / 12.0),
                            currency(saved),
                            months(months_saved as f64)
                        ),
                    )
                    .with_actions([
                        "Set up biweekly payments if your servicer supports them",
                        "Mark extra payments as principal-only",
                    ])
                    .with_savings(saved),
                );
            }
        }
    }

    if let Some(monthly_income) = ctx.monthly_income() {
        if let Some(ratio) = finance::percent_of(full_payment, monthly_income) {
            if ratio > HOUSING_RATIO_LIMIT {
                b.recommend(
                    Recommendation::warning(
                        Priority::High,
                        "Housing Costs Exceed 28% of Income",
                        format!(
                            "Your total housing payment of {} is {} of gross monthly income. Lenders and planners recommend staying under {}.",
                            currency(full_payment),
                            percent(ratio),
                            percent(HOUSING_RATIO_LIMIT)
                        ),
                    )
                    .with_actions([
                        "Consider a lower purchase price",
                        "Increase your down payment",
                        "Build a larger emergency fund before buying",
                    ]),
                );
                if ratio > DTI_COMFORT_LIMIT {
                    b.risk(format!(
                        "Housing costs consume {} of gross income, leaving little room for other debts or savings",
                        percent(ratio)
                    ));
                }
            } else {
                b.insight(format!(
                    "Housing costs are {} of gross monthly income, within the 28% guideline",
                    percent(ratio)
                ));
            }
        }
    }

    if loan > 0.0 && total_interest > loan {
        b.recommend(Recommendation::insight(
            Priority::Medium,
            "Interest Exceeds the Amount Borrowed",
            format!(
                "Over the full term you'll pay {} in interest, more than the {} you borrowed.",
                currency(total_interest),
                currency(loan)
            ),
        ));
    }

    if input.property_tax <= 0.0 && input.home_insurance <= 0.0 && loan > 0.0 {
        b.recommend(
            Recommendation::insight(
                Priority::Low,
                "Budget for Taxes and Insurance",
                "This payment excludes property tax and homeowners insurance, which commonly add 25%-35% to the monthly cost.",
            )
            .with_actions([
                "Look up the property tax rate for the home's county",
                "Get a homeowners insurance quote before making an offer",
            ]),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Your Mortgage Looks Well-Structured",
        "Your down payment, rate, and term are all within common guidelines.",
    ));

    let mut payment_line = format!("Monthly principal & interest: {}", currency(payment));
    if escrow > 0.0 {
        payment_line.push_str(&format!(
            " ({} including taxes, insurance, and fees)",
            currency(full_payment)
        ));
    }
    b.insight(payment_line);
    if let (Some(ltv), Some(down)) = (ltv, down_pct) {
        b.insight(format!(
            "Loan-to-value ratio: {} ({} down)",
            percent(ltv),
            percent(down)
        ));
    }
    b.insight(format!(
        "Total interest over {}: {}",
        years(term_years),
        currency(total_interest)
    ));
    b.insight(format!(
        "Total cost of the loan: {}",
        currency(loan + total_interest)
    ));

    if rate > 7.0 {
        b.risk("Rates above 7% leave room to refinance if rates fall; watch the market");
    }
    if term_years >= 30.0 {
        b.risk("A 30-year term builds equity slowly in the early years");
    }

    b.step("Get Loan Estimates from at least three lenders");
    b.step("Get pre-approved to strengthen your offer");
    if ltv.map_or(false, |l| l > PMI_LTV_THRESHOLD) {
        b.step("Explore first-time buyer and down payment assistance programs");
    }
    b.step("Review the Closing Disclosure for fees before signing");

    let mut summary = format!(
        "Your mortgage of {} over {} at {} costs {} per month in principal and interest, with {} in total interest.",
        currency(loan),
        years(term_years),
        percent(rate),
        currency(payment),
        currency(total_interest)
    );
    if ltv.map_or(false, |l| l > PMI_LTV_THRESHOLD) {
        summary.push_str(" With less than 20% down, expect to pay PMI.");
    }
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefinanceInput {
    #[serde(alias = "loanBalance")]
    pub current_balance: f64,
    pub current_rate: f64,
    pub new_rate: f64,
    #[serde(alias = "currentMonthlyPayment")]
    pub current_payment: f64,
    #[serde(alias = "newMonthlyPayment")]
    pub new_payment: f64,
    pub closing_costs: f64,
    /// Years left on the current loan
    pub remaining_term: f64,
    /// Years on the new loan
    pub new_term: f64,
    pub break_even_months: f64,
    pub lifetime_savings: f64,
}

pub fn refinance(input: &RefinanceInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let remaining_months = (input.remaining_term.max(0.0) * 12.0).round() as u32;
    let new_months = if input.new_term > 0.0 {
        (input.new_term * 12.0).round() as u32
    } else {
        remaining_months
    };
    let current_payment = if input.current_payment > 0.0 {
        input.current_payment
    } else {
        finance::monthly_payment(input.current_balance, input.current_rate, remaining_months)
    };
    let new_payment = if input.new_payment > 0.0 {
        input.new_payment
    } else {
        finance::monthly_payment(input.current_balance, input.new_rate, new_months)
    };
    let monthly_savings = current_payment - new_payment;
    let break_even = if input.break_even_months > 0.0 {
        Some(input.break_even_months)
    } else if monthly_savings > 0.0 {
        Some(input.closing_costs / monthly_savings)
    } else {
        None
    };
    let lifetime = if input.lifetime_savings != 0.0 {
        input.lifetime_savings
    } else {
        current_payment * remaining_months as f64
            - (new_payment * new_months as f64 + input.closing_costs)
    };
    let rate_drop = input.current_rate - input.new_rate;

    if monthly_savings <= 0.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Refinancing Won't Lower Your Payment",
                format!(
                    "The new payment of {} is not lower than your current {}.",
                    currency(new_payment),
                    currency(current_payment)
                ),
            )
            .with_actions([
                "Only refinance this way to shorten the term or remove PMI",
                "Wait for rates to fall further",
            ]),
        );
    }

    if let Some(be) = break_even.filter(|m| *m > 60.0) {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Long Break-Even Period",
                format!(
                    "It takes {} to recover {} in closing costs. If you move or refinance again before then, you lose money.",
                    months(be),
                    currency(input.closing_costs)
                ),
            )
            .with_actions([
                "Negotiate lower closing costs",
                "Confirm how long you plan to keep the home",
            ]),
        );
    }

    if rate_drop > 0.0 && rate_drop < 0.75 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Small Rate Reduction",
            format!(
                "Your rate only drops {} points. A reduction of at least 0.75 points is usually needed to justify closing costs.",
                (rate_drop * 100.0).round() / 100.0
            ),
        ));
    }

    if new_months > remaining_months && remaining_months > 0 {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "Refinancing Resets Your Loan Clock",
                format!(
                    "The new loan adds {} of payments beyond your current payoff date, which can erase the interest savings.",
                    months((new_months - remaining_months) as f64)
                ),
            )
            .with_actions([
                "Ask for a term that matches your remaining years",
                "Keep making your old payment amount to pay off on schedule",
            ]),
        );
    }

    if lifetime < 0.0 {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Refinancing Costs More Over the Life of the Loan",
            format!(
                "Despite the lower payment, you'd pay about {} more in total.",
                currency(-lifetime)
            ),
        ));
    } else if monthly_savings > 0.0 && break_even.map_or(false, |m| m <= 36.0) {
        b.recommend(
            Recommendation::opportunity(
                Priority::High,
                "Refinancing Looks Worthwhile",
                format!(
                    "You'd save {} a month and recover closing costs in {}.",
                    currency(monthly_savings),
                    months(break_even.unwrap_or_default())
                ),
            )
            .with_actions([
                "Lock your rate once you choose a lender",
                "Gather pay stubs, tax returns, and statements",
            ])
            .with_savings(lifetime),
        );
    }

    if input.closing_costs > 0.0 {
        b.recommend(
            Recommendation::optimization(
                Priority::Low,
                "Negotiate Closing Costs",
                "Origination, application, and title fees are often negotiable.",
            )
            .with_actions([
                "Ask lenders to itemize and waive junk fees",
                "Shop title insurance separately",
            ])
            .with_savings(input.closing_costs * 0.2),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Refinance Numbers Look Neutral",
        "Neither a clear win nor a clear loss; revisit if rates move.",
    ));

    b.insight(format!(
        "Rate change: {} → {}",
        percent(input.current_rate),
        percent(input.new_rate)
    ));
    b.insight(format!(
        "Monthly payment change: {} → {} ({} per month)",
        currency(current_payment),
        currency(new_payment),
        currency(monthly_savings)
    ));
    if let Some(be) = break_even {
        b.insight(format!("Break-even point: {}", months(be)));
    }
    b.insight(format!("Net lifetime impact: {}", currency(lifetime)));

    if break_even.map_or(false, |m| m > 36.0) {
        b.risk(format!(
            "You need to stay in the home at least {} to benefit",
            months(break_even.unwrap_or_default())
        ));
    }
    b.risk("Closing costs rolled into the loan increase your balance");

    b.steps([
        "Compare offers from at least three lenders",
        "Check your credit report before applying",
        "Calculate break-even using the lender's actual fees",
    ]);

    let summary = if monthly_savings > 0.0 {
        format!(
            "Refinancing from {} to {} lowers your payment by {} a month, with a net lifetime impact of {}.",
            percent(input.current_rate),
            percent(input.new_rate),
            currency(monthly_savings),
            currency(lifetime)
        )
    } else {
        format!(
            "Refinancing from {} to {} does not lower your monthly payment.",
            percent(input.current_rate),
            percent(input.new_rate)
        )
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentVsBuyInput {
    pub monthly_rent: f64,
    pub home_price: f64,
    pub down_payment: f64,
    #[serde(alias = "yearsToLive")]
    pub years_to_stay: f64,
    pub total_rent_cost: f64,
    pub total_buy_cost: f64,
    pub break_even_years: f64,
}

pub fn rent_vs_buy(input: &RentVsBuyInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let annual_rent = input.monthly_rent * 12.0;
    let price_to_rent = if annual_rent > 0.0 {
        Some(input.home_price / annual_rent)
    } else {
        None
    };
    let both_costs = input.total_rent_cost > 0.0 && input.total_buy_cost > 0.0;
    let buying_cheaper = both_costs && input.total_buy_cost < input.total_rent_cost;
    let difference = (input.total_rent_cost - input.total_buy_cost).abs();

    if input.break_even_years > 0.0 && input.years_to_stay > 0.0 {
        if input.years_to_stay < input.break_even_years {
            b.recommend(
                Recommendation::warning(
                    Priority::High,
                    "Your Stay Is Shorter Than the Break-Even Point",
                    format!(
                        "Buying breaks even after {}, but you plan to stay {}. Renting is likely the better choice.",
                        years(input.break_even_years),
                        years(input.years_to_stay)
                    ),
                )
                .with_actions([
                    "Keep renting and invest the down payment",
                    "Revisit the decision if your plans become longer-term",
                ]),
            );
        } else {
            b.recommend(Recommendation::opportunity(
                Priority::Medium,
                "Buying Pays Off Over Your Timeline",
                format!(
                    "You plan to stay {}, beyond the break-even point of {}.",
                    years(input.years_to_stay),
                    years(input.break_even_years)
                ),
            ));
        }
    }

    if let Some(ratio) = price_to_rent {
        if ratio > 20.0 {
            b.recommend(Recommendation::insight(
                Priority::Medium,
                "Prices Are High Relative to Rents",
                format!(
                    "A price-to-rent ratio of {:.1} means homes cost more than 20 years of rent, which generally favors renting.",
                    ratio
                ),
            ));
        } else if ratio < 15.0 {
            b.recommend(Recommendation::opportunity(
                Priority::Medium,
                "Prices Are Favorable Relative to Rents",
                format!(
                    "A price-to-rent ratio of {:.1} is below 15, which generally favors buying.",
                    ratio
                ),
            ));
        }
    }

    if both_costs && difference > 0.0 {
        let (title, cheaper) = if buying_cheaper {
            ("Buying Costs Less Overall", "buying")
        } else {
            ("Renting Costs Less Overall", "renting")
        };
        b.recommend(
            Recommendation::insight(
                Priority::Medium,
                title,
                format!(
                    "Over your timeline, {} comes out about {} ahead.",
                    cheaper,
                    currency(difference)
                ),
            )
            .with_savings(difference),
        );
    }

    if let Some(down_pct) = finance::percent_of(input.down_payment, input.home_price) {
        if down_pct < 20.0 {
            b.recommend(Recommendation::warning(
                Priority::Medium,
                "Down Payment Below 20%",
                format!(
                    "A {} down payment usually means paying PMI, which raises the cost of buying.",
                    percent(down_pct)
                ),
            ));
        }
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Renting and Buying Are Closely Matched",
        "The financial difference is small; lifestyle and flexibility should drive the decision.",
    ));

    if let Some(ratio) = price_to_rent {
        b.insight(format!("Price-to-rent ratio: {:.1}", ratio));
    }
    if both_costs {
        b.insight(format!(
            "Total cost of renting: {} vs. buying: {}",
            currency(input.total_rent_cost),
            currency(input.total_buy_cost)
        ));
    }
    if input.break_even_years > 0.0 {
        b.insight(format!(
            "Break-even point: {}",
            years(input.break_even_years)
        ));
    }
    b.insight(format!(
        "Planned time in the home: {}",
        years(input.years_to_stay)
    ));

    if input.years_to_stay > 0.0 && input.years_to_stay < 5.0 {
        b.risk("Buying and selling costs (often 8%-10% of the price) are hard to recover in under 5 years");
    }
    b.risk("Home values and rents can change faster than these projections assume");

    b.steps([
        "Factor in maintenance (about 1% of the home's value per year)",
        "Compare local rent growth with home appreciation",
        "Get pre-approved to learn your real borrowing cost",
    ]);

    let summary = if both_costs {
        format!(
            "Over {}, {} looks cheaper by about {}.",
            years(input.years_to_stay),
            if buying_cheaper { "buying" } else { "renting" },
            currency(difference)
        )
    } else {
        format!(
            "Comparing {} a month in rent against a {} home over {}.",
            currency(input.monthly_rent),
            currency(input.home_price),
            years(input.years_to_stay)
        )
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeAffordabilityInput {
    pub annual_income: f64,
    pub monthly_debts: f64,
    pub down_payment: f64,
    pub interest_rate: f64,
    #[serde(alias = "maxPrice")]
    pub max_home_price: f64,
    #[serde(alias = "maxPayment")]
    pub max_monthly_payment: f64,
    #[serde(alias = "dtiRatio")]
    pub debt_to_income_ratio: f64,
}

pub fn home_affordability(input: &HomeAffordabilityInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let annual_income = if input.annual_income > 0.0 {
        input.annual_income
    } else {
        ctx.income.unwrap_or(0.0)
    };
    let monthly_income = annual_income / 12.0;
    let dti = if input.debt_to_income_ratio > 0.0 {
        Some(input.debt_to_income_ratio)
    } else {
        finance::percent_of(input.monthly_debts + input.max_monthly_payment, monthly_income)
    };
    let front_end = finance::percent_of(input.max_monthly_payment, monthly_income);
    let down_pct = finance::percent_of(input.down_payment, input.max_home_price);

    if let Some(dti) = dti {
        if dti > DTI_LENDING_LIMIT {
            b.recommend(
                Recommendation::warning(
                    Priority::High,
                    "Debt-to-Income Above Lending Limits",
                    format!(
                        "A debt-to-income ratio of {} exceeds the {} most lenders allow for a qualified mortgage.",
                        percent(dti),
                        percent(DTI_LENDING_LIMIT)
                    ),
                )
                .with_actions([
                    "Pay off smaller debts before applying",
                    "Lower your target price",
                    "Consider a co-borrower",
                ]),
            );
        } else if dti > DTI_COMFORT_LIMIT {
            b.recommend(Recommendation::warning(
                Priority::Medium,
                "Debt-to-Income Is Stretched",
                format!(
                    "At {}, you may qualify but will have limited room in your budget.",
                    percent(dti)
                ),
            ));
        }

        if input.monthly_debts > 0.0 && dti > DTI_COMFORT_LIMIT {
            let per_hundred = finance::principal_for_payment(100.0, input.interest_rate, 360);
            b.recommend(
                Recommendation::optimization(
                    Priority::Medium,
                    "Pay Down Existing Debt to Buy More Home",
                    format!(
                        "Each $100 of monthly debt you eliminate supports roughly {} more in mortgage at {}.",
                        currency(per_hundred),
                        percent(input.interest_rate)
                    ),
                )
                .with_actions([
                    "Target debts with the highest monthly payments first",
                    "Avoid new car loans or credit lines before closing",
                ]),
            );
        }
    }

    if let Some(down_pct) = down_pct.filter(|d| *d < 20.0) {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Plan for Private Mortgage Insurance",
            format!(
                "A {} down payment at the maximum price means PMI until you reach 20% equity.",
                percent(down_pct)
            ),
        ));
    }

    if input.interest_rate > 7.0 && input.max_monthly_payment > 0.0 {
        let at_lower = finance::principal_for_payment(
            input.max_monthly_payment,
            input.interest_rate - 1.0,
            360,
        );
        let at_current =
            finance::principal_for_payment(input.max_monthly_payment, input.interest_rate, 360);
        b.recommend(Recommendation::insight(
            Priority::Medium,
            "Rates Reduce Your Buying Power",
            format!(
                "A rate one point lower would let the same payment support about {} more in loan.",
                currency(at_lower - at_current)
            ),
        ));
    }

    if input.max_home_price > 0.0 {
        b.recommend(
            Recommendation::insight(
                Priority::Low,
                "Aim Below Your Maximum",
                format!(
                    "A target around {} (85% of your maximum) leaves room for maintenance, savings, and surprises.",
                    currency(input.max_home_price * 0.85)
                ),
            )
            .with_actions(["Set a search ceiling below your approval amount"]),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Enter Your Income and Debts",
        "Affordability guidance depends on income and existing monthly debts.",
    ));

    b.insight(format!(
        "Maximum home price: {}",
        currency(input.max_home_price)
    ));
    b.insight(format!(
        "Maximum monthly payment: {}",
        currency(input.max_monthly_payment)
    ));
    if let Some(dti) = dti {
        b.insight(format!("Debt-to-income ratio: {}", percent(dti)));
    }
    if let Some(down_pct) = down_pct {
        b.insight(format!(
            "Down payment: {} ({} of price)",
            currency(input.down_payment),
            percent(down_pct)
        ));
    }

    if let Some(front) = front_end.filter(|f| *f > HOUSING_RATIO_LIMIT) {
        b.risk(format!(
            "The maximum payment uses {} of gross income; a lower price target is safer",
            percent(front)
        ));
    }
    b.risk("Property taxes, insurance, and HOA fees vary widely by location");

    b.steps([
        "Check your credit reports and scores",
        "Get pre-approved with two or three lenders",
        "Keep three to six months of expenses in reserve after closing",
    ]);

    b.build(format!(
        "With {} in annual income, you can afford a home up to about {} with a monthly payment of {}.",
        currency(annual_income),
        currency(input.max_home_price),
        currency(input.max_monthly_payment)
    ))
}
