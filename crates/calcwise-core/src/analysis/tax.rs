//! Income tax and paycheck generators

use serde::Deserialize;
use serde_json::Value;

use crate::finance;
use crate::format::{currency, currency_cents, percent};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;
use super::retirement::CONTRIBUTION_LIMIT;

/// Annual HSA limit for self-only coverage
const HSA_LIMIT: f64 = 4_150.0;

const DEFAULT_PAY_PERIODS: f64 = 26.0;

/// Federal filing status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingStatus {
    Single,
    Married,
    HeadOfHousehold,
}

impl FilingStatus {
    /// Lenient parse; anything unrecognized files as single
    pub fn parse(value: Option<&str>) -> Self {
        let normalized: String = value
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "married" | "marriedjoint" | "marriedfilingjointly" | "joint" | "mfj" => {
                FilingStatus::Married
            }
            "headofhousehold" | "hoh" | "head" => FilingStatus::HeadOfHousehold,
            _ => FilingStatus::Single,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStatus::Single => "single",
            FilingStatus::Married => "married filing jointly",
            FilingStatus::HeadOfHousehold => "head of household",
        }
    }

    pub fn standard_deduction(&self) -> f64 {
        match self {
            FilingStatus::Single => 14_600.0,
            FilingStatus::Married => 29_200.0,
            FilingStatus::HeadOfHousehold => 21_900.0,
        }
    }

    /// Upper bounds of the 10/12/22/24/32/35% brackets; income above the last is taxed at 37%
    fn bracket_tops(&self) -> [f64; 6] {
        match self {
            FilingStatus::Single => [11_600.0, 47_150.0, 100_525.0, 191_950.0, 243_725.0, 609_350.0],
            FilingStatus::Married => {
                [23_200.0, 94_300.0, 201_050.0, 383_900.0, 487_450.0, 731_200.0]
            }
            FilingStatus::HeadOfHousehold => {
                [16_550.0, 63_100.0, 100_500.0, 191_950.0, 243_700.0, 609_350.0]
            }
        }
    }
}

const BRACKET_RATES: [f64; 7] = [10.0, 12.0, 22.0, 24.0, 32.0, 35.0, 37.0];

/// Federal tax owed and the marginal rate for a taxable income
pub fn federal_tax(taxable: f64, status: FilingStatus) -> (f64, f64) {
    if taxable <= 0.0 {
        return (0.0, BRACKET_RATES[0]);
    }
    let tops = status.bracket_tops();
    let mut tax = 0.0;
    let mut floor = 0.0;
    for (i, rate) in BRACKET_RATES.iter().enumerate() {
        let top = tops.get(i).copied().unwrap_or(f64::INFINITY);
        if taxable <= top {
            tax += (taxable - floor) * rate / 100.0;
            return (tax, *rate);
        }
        tax += (top - floor) * rate / 100.0;
        floor = top;
    }
    (tax, BRACKET_RATES[BRACKET_RATES.len() - 1])
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IncomeTaxInput {
    #[serde(alias = "annualIncome")]
    pub gross_income: f64,
    pub filing_status: Option<String>,
    pub deductions: f64,
    pub taxable_income: f64,
    pub total_tax: f64,
    pub effective_rate: f64,
    pub marginal_rate: f64,
    pub retirement_contributions: f64,
}

pub fn income_tax(input: &IncomeTaxInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let status = FilingStatus::parse(input.filing_status.as_deref());
    let gross = if input.gross_income > 0.0 {
        input.gross_income
    } else {
        ctx.income.unwrap_or(0.0)
    };
    let standard = status.standard_deduction();
    let deduction = input.deductions.max(standard);
    let taxable = if input.taxable_income > 0.0 {
        input.taxable_income
    } else {
        (gross - deduction - input.retirement_contributions).max(0.0)
    };
    let (computed_tax, computed_marginal) = federal_tax(taxable, status);
    let tax = if input.total_tax > 0.0 {
        input.total_tax
    } else {
        computed_tax
    };
    let marginal = if input.marginal_rate > 0.0 {
        input.marginal_rate
    } else {
        computed_marginal
    };
    let effective = if input.effective_rate > 0.0 {
        input.effective_rate
    } else {
        finance::percent_of(tax, gross).unwrap_or(0.0)
    };

    let room = (CONTRIBUTION_LIMIT - input.retirement_contributions).max(0.0);
    if room > 0.0 && marginal >= 22.0 {
        let extra = room.min(gross * 0.05);
        let saved = extra * marginal / 100.0;
        b.recommend(
            Recommendation::opportunity(
                Priority::High,
                "Contribute More Pre-Tax",
                format!(
                    "At a {} marginal rate, moving {} more into a traditional 401(k) cuts this year's tax by about {}.",
                    percent(marginal),
                    currency(extra),
                    currency(saved)
                ),
            )
            .with_actions([
                "Raise your 401(k) deferral percentage",
                "Consider a traditional IRA if eligible",
            ])
            .with_savings(saved)
            .with_impact("Lowers taxable income dollar for dollar"),
        );
    }

    if input.deductions > 0.0 && input.deductions < standard {
        b.recommend(Recommendation::insight(
            Priority::Medium,
            "Take the Standard Deduction",
            format!(
                "Your itemized deductions ({}) are below the {} standard deduction for {} filers.",
                currency(input.deductions),
                currency(standard),
                status.as_str()
            ),
        ));
    }

    if marginal >= 22.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Fund a Health Savings Account",
                format!(
                    "If you have a high-deductible health plan, an HSA deduction of up to {} saves about {}.",
                    currency(HSA_LIMIT),
                    currency(HSA_LIMIT * marginal / 100.0)
                ),
            )
            .with_savings(HSA_LIMIT * marginal / 100.0),
        );
    }

    if marginal >= 32.0 {
        b.recommend(Recommendation::optimization(
            Priority::Medium,
            "Plan Around a High Bracket",
            "Tax-loss harvesting, charitable bunching, and municipal bonds can reduce tax at higher brackets.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Low Tax Bracket",
        "Roth contributions are especially attractive while your rate is low.",
    ));

    b.insight(format!("Taxable income: {}", currency(taxable)));
    b.insight(format!("Federal tax: {}", currency(tax)));
    b.insight(format!("Effective rate: {}", percent(effective)));
    b.insight(format!("Marginal rate: {}", percent(marginal)));

    b.risk("State and local taxes are not included in this estimate");
    if input.total_tax <= 0.0 {
        b.risk("Credits such as the child tax credit can lower the final bill");
    }

    b.steps([
        "Check your withholding against this estimate",
        "Gather receipts for deductible expenses",
        "Review retirement and HSA contribution room before year end",
    ]);

    b.build(format!(
        "Filing as {} on {} of income, you owe about {} in federal tax: an effective rate of {} with a {} marginal rate.",
        status.as_str(),
        currency(gross),
        currency(tax),
        percent(effective),
        percent(marginal)
    ))
}

/// Pay periods per year from a frequency name or an explicit count
fn pay_periods(frequency: &Value) -> f64 {
    match frequency {
        Value::Number(n) => n.as_f64().filter(|n| *n > 0.0).unwrap_or(DEFAULT_PAY_PERIODS),
        Value::String(s) => {
            let key: String = s
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase();
            match key.as_str() {
                "weekly" => 52.0,
                "biweekly" => 26.0,
                "semimonthly" => 24.0,
                "monthly" => 12.0,
                "annual" | "annually" | "yearly" => 1.0,
                _ => DEFAULT_PAY_PERIODS,
            }
        }
        _ => DEFAULT_PAY_PERIODS,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SalaryInput {
    pub annual_salary: f64,
    pub pay_frequency: Value,
    pub gross_pay: f64,
    pub net_pay: f64,
    pub federal_tax: f64,
    pub state_tax: f64,
    pub social_security: f64,
    pub medicare: f64,
    pub pre_tax_deductions: f64,
}

pub fn salary(input: &SalaryInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let periods = pay_periods(&input.pay_frequency);
    let annual = if input.annual_salary > 0.0 {
        input.annual_salary
    } else {
        ctx.income.unwrap_or(input.gross_pay * periods)
    };
    let gross = if input.gross_pay > 0.0 {
        input.gross_pay
    } else {
        annual / periods
    };
    let withheld = input.federal_tax
        + input.state_tax
        + input.social_security
        + input.medicare
        + input.pre_tax_deductions;
    let net = if input.net_pay > 0.0 {
        input.net_pay
    } else {
        (gross - withheld).max(0.0)
    };
    let take_home = finance::percent_of(net, gross).unwrap_or(0.0);
    let federal_share = finance::percent_of(input.federal_tax, gross).unwrap_or(0.0);

    if gross > 0.0 && take_home < 65.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Large Share of Pay Withheld",
            format!(
                "You take home {} of each paycheck. Check that withholding and deductions are what you expect.",
                percent(take_home)
            ),
        ));
    }

    if federal_share > 22.0 {
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Review Your W-4 Withholding",
                format!(
                    "Federal withholding is {} of gross pay, which may produce a large refund you could have had all year.",
                    percent(federal_share)
                ),
            )
            .with_actions(["Run the IRS withholding estimator", "Submit an updated W-4"]),
        );
    }

    if input.pre_tax_deductions <= 0.0 && gross > 0.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Use Pre-Tax Benefits",
                "Contributing to a 401(k), HSA, or FSA lowers your taxable pay.",
            )
            .with_actions(["Enroll in your employer's retirement plan", "Check FSA/HSA eligibility"]),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Paycheck Looks Healthy",
        "Your withholding and deductions are in a normal range.",
    ));

    b.insight(format!("Gross pay per period: {}", currency_cents(gross)));
    b.insight(format!("Take-home pay per period: {}", currency_cents(net)));
    b.insight(format!("Annual take-home: {}", currency(net * periods)));
    if input.state_tax <= 0.0 {
        b.insight("No state income tax withheld");
    }

    b.risk("Bonuses are often withheld at a flat 22%");
    b.risk("Changes in benefits elections alter take-home pay");

    b.steps([
        "Compare this estimate to your latest pay stub",
        "Revisit your W-4 after major life changes",
    ]);

    b.build(format!(
        "On a {} salary paid {} times a year, you take home {} of {} per paycheck ({}).",
        currency(annual),
        periods,
        currency_cents(net),
        currency_cents(gross),
        percent(take_home)
    ))
}
