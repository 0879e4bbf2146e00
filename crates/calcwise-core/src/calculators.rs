//! Calculator catalog
//!
//! Every calculator the frontend can ask about has a variant here. The
//! canonical tag is kebab-case; parsing accepts the spellings the frontend
//! has used over time (camelCase, snake_case, a trailing "-calculator").

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Broad grouping used by the catalog listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Financial,
    Health,
    Math,
    Utility,
    Viral,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Math => "math",
            Category::Utility => "utility",
            Category::Viral => "viral",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Category::Financial,
            Category::Health,
            Category::Math,
            Category::Utility,
            Category::Viral,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "financial" | "finance" => Ok(Category::Financial),
            "health" => Ok(Category::Health),
            "math" => Ok(Category::Math),
            "utility" => Ok(Category::Utility),
            "viral" => Ok(Category::Viral),
            _ => {
                let known: Vec<&str> = Category::all().iter().map(Category::as_str).collect();
                Err(format!(
                    "Unknown category: {} (expected one of: {})",
                    s,
                    known.join(", ")
                ))
            }
        }
    }
}

/// A supported calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorType {
    // Financial
    Mortgage,
    AutoLoan,
    PersonalLoan,
    CreditCard,
    DebtPayoff,
    StudentLoan,
    Refinance,
    RentVsBuy,
    HomeAffordability,
    Retirement,
    FourOhOneK,
    CompoundInterest,
    InvestmentReturn,
    SavingsGoal,
    EmergencyFund,
    Budget,
    IncomeTax,
    Salary,
    NetWorth,
    Inflation,
    // Health
    Bmi,
    Calorie,
    BodyFat,
    IdealWeight,
    WaterIntake,
    HeartRate,
    Sleep,
    // Math
    Percentage,
    Gpa,
    // Utility
    Tip,
    Discount,
    FuelCost,
    // Viral
    CoffeeSavings,
    ScreenTime,
    SubscriptionCost,
    LifeExpectancy,
}

impl CalculatorType {
    /// Canonical tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mortgage => "mortgage",
            Self::AutoLoan => "auto-loan",
            Self::PersonalLoan => "personal-loan",
            Self::CreditCard => "credit-card",
            Self::DebtPayoff => "debt-payoff",
            Self::StudentLoan => "student-loan",
            Self::Refinance => "refinance",
            Self::RentVsBuy => "rent-vs-buy",
            Self::HomeAffordability => "home-affordability",
            Self::Retirement => "retirement",
            Self::FourOhOneK => "401k",
            Self::CompoundInterest => "compound-interest",
            Self::InvestmentReturn => "investment-return",
            Self::SavingsGoal => "savings-goal",
            Self::EmergencyFund => "emergency-fund",
            Self::Budget => "budget",
            Self::IncomeTax => "income-tax",
            Self::Salary => "salary",
            Self::NetWorth => "net-worth",
            Self::Inflation => "inflation",
            Self::Bmi => "bmi",
            Self::Calorie => "calorie",
            Self::BodyFat => "body-fat",
            Self::IdealWeight => "ideal-weight",
            Self::WaterIntake => "water-intake",
            Self::HeartRate => "heart-rate",
            Self::Sleep => "sleep",
            Self::Percentage => "percentage",
            Self::Gpa => "gpa",
            Self::Tip => "tip",
            Self::Discount => "discount",
            Self::FuelCost => "fuel-cost",
            Self::CoffeeSavings => "coffee-savings",
            Self::ScreenTime => "screen-time",
            Self::SubscriptionCost => "subscription-cost",
            Self::LifeExpectancy => "life-expectancy",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mortgage => "Mortgage",
            Self::AutoLoan => "Auto Loan",
            Self::PersonalLoan => "Personal Loan",
            Self::CreditCard => "Credit Card Payoff",
            Self::DebtPayoff => "Debt Payoff",
            Self::StudentLoan => "Student Loan",
            Self::Refinance => "Refinance",
            Self::RentVsBuy => "Rent vs. Buy",
            Self::HomeAffordability => "Home Affordability",
            Self::Retirement => "Retirement",
            Self::FourOhOneK => "401(k)",
            Self::CompoundInterest => "Compound Interest",
            Self::InvestmentReturn => "Investment Return",
            Self::SavingsGoal => "Savings Goal",
            Self::EmergencyFund => "Emergency Fund",
            Self::Budget => "Budget",
            Self::IncomeTax => "Income Tax",
            Self::Salary => "Salary & Paycheck",
            Self::NetWorth => "Net Worth",
            Self::Inflation => "Inflation",
            Self::Bmi => "BMI",
            Self::Calorie => "Calorie & TDEE",
            Self::BodyFat => "Body Fat",
            Self::IdealWeight => "Ideal Weight",
            Self::WaterIntake => "Water Intake",
            Self::HeartRate => "Heart Rate Zones",
            Self::Sleep => "Sleep",
            Self::Percentage => "Percentage",
            Self::Gpa => "GPA",
            Self::Tip => "Tip",
            Self::Discount => "Discount",
            Self::FuelCost => "Fuel Cost",
            Self::CoffeeSavings => "Coffee Savings",
            Self::ScreenTime => "Screen Time",
            Self::SubscriptionCost => "Subscription Cost",
            Self::LifeExpectancy => "Life Expectancy",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Mortgage
            | Self::AutoLoan
            | Self::PersonalLoan
            | Self::CreditCard
            | Self::DebtPayoff
            | Self::StudentLoan
            | Self::Refinance
            | Self::RentVsBuy
            | Self::HomeAffordability
            | Self::Retirement
            | Self::FourOhOneK
            | Self::CompoundInterest
            | Self::InvestmentReturn
            | Self::SavingsGoal
            | Self::EmergencyFund
            | Self::Budget
            | Self::IncomeTax
            | Self::Salary
            | Self::NetWorth
            | Self::Inflation => Category::Financial,
            Self::Bmi
            | Self::Calorie
            | Self::BodyFat
            | Self::IdealWeight
            | Self::WaterIntake
            | Self::HeartRate
            | Self::Sleep => Category::Health,
            Self::Percentage | Self::Gpa => Category::Math,
            Self::Tip | Self::Discount | Self::FuelCost => Category::Utility,
            Self::CoffeeSavings | Self::ScreenTime | Self::SubscriptionCost | Self::LifeExpectancy => {
                Category::Viral
            }
        }
    }

    /// Every calculator in catalog order
    pub fn all() -> &'static [CalculatorType] {
        &[
            Self::Mortgage,
            Self::AutoLoan,
            Self::PersonalLoan,
            Self::CreditCard,
            Self::DebtPayoff,
            Self::StudentLoan,
            Self::Refinance,
            Self::RentVsBuy,
            Self::HomeAffordability,
            Self::Retirement,
            Self::FourOhOneK,
            Self::CompoundInterest,
            Self::InvestmentReturn,
            Self::SavingsGoal,
            Self::EmergencyFund,
            Self::Budget,
            Self::IncomeTax,
            Self::Salary,
            Self::NetWorth,
            Self::Inflation,
            Self::Bmi,
            Self::Calorie,
            Self::BodyFat,
            Self::IdealWeight,
            Self::WaterIntake,
            Self::HeartRate,
            Self::Sleep,
            Self::Percentage,
            Self::Gpa,
            Self::Tip,
            Self::Discount,
            Self::FuelCost,
            Self::CoffeeSavings,
            Self::ScreenTime,
            Self::SubscriptionCost,
            Self::LifeExpectancy,
        ]
    }

    /// Catalog entry for listing endpoints
    pub fn info(&self) -> CalculatorInfo {
        CalculatorInfo {
            id: *self,
            name: self.display_name(),
            category: self.category(),
        }
    }
}

impl fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CalculatorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for CalculatorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = normalize_tag(s);
        let found = match tag.as_str() {
            "tdee" | "calories" => Some(Self::Calorie),
            "roi" => Some(Self::InvestmentReturn),
            "paycheck" | "take-home-pay" => Some(Self::Salary),
            "latte-factor" | "coffee" => Some(Self::CoffeeSavings),
            "subscriptions" => Some(Self::SubscriptionCost),
            "rent-or-buy" => Some(Self::RentVsBuy),
            "loan" => Some(Self::PersonalLoan),
            "tax" => Some(Self::IncomeTax),
            other => Self::all().iter().copied().find(|c| c.as_str() == other),
        };
        found.ok_or_else(|| format!("Unknown calculator type: {}", s))
    }
}

/// Serializable catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorInfo {
    pub id: CalculatorType,
    pub name: &'static str,
    pub category: Category,
}

/// Normalize a tag to kebab-case
///
/// `autoLoan`, `auto_loan`, `Auto Loan` and `auto-loan-calculator` all become
/// `auto-loan`. Parentheses are dropped so `401(k)` becomes `401k`.
pub fn normalize_tag(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev_lower = false;

    for ch in raw.trim().chars() {
        match ch {
            '(' | ')' | '.' => continue,
            '_' | ' ' | '-' | '/' => {
                if !out.is_empty() && !out.ends_with('-') {
                    out.push('-');
                }
                prev_lower = false;
            }
            c if c.is_ascii_uppercase() => {
                if prev_lower && !out.ends_with('-') {
                    out.push('-');
                }
                out.push(c.to_ascii_lowercase());
                prev_lower = false;
            }
            c => {
                out.push(c);
                prev_lower = c.is_ascii_lowercase();
            }
        }
    }

    let trimmed = out.trim_end_matches('-');
    trimmed
        .strip_suffix("-calculator")
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tag_round_trips() {
        for calc in CalculatorType::all() {
            assert_eq!(calc.as_str().parse::<CalculatorType>().unwrap(), *calc);
        }
    }

    #[test]
    fn test_normalize_spellings() {
        assert_eq!(normalize_tag("autoLoan"), "auto-loan");
        assert_eq!(normalize_tag("auto_loan"), "auto-loan");
        assert_eq!(normalize_tag("Auto Loan"), "auto-loan");
        assert_eq!(normalize_tag("mortgage-calculator"), "mortgage");
        assert_eq!(normalize_tag("401(k)"), "401k");
        assert_eq!(normalize_tag("BMI"), "bmi");
        assert_eq!(normalize_tag("  rent_vs_buy "), "rent-vs-buy");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            "tdee".parse::<CalculatorType>().unwrap(),
            CalculatorType::Calorie
        );
        assert_eq!(
            "ROI".parse::<CalculatorType>().unwrap(),
            CalculatorType::InvestmentReturn
        );
        assert_eq!(
            "latteFactor".parse::<CalculatorType>().unwrap(),
            CalculatorType::CoffeeSavings
        );
    }

    #[test]
    fn test_unknown_tag() {
        assert!("time-machine".parse::<CalculatorType>().is_err());
        assert!("".parse::<CalculatorType>().is_err());
    }

    #[test]
    fn test_unknown_category_lists_choices() {
        assert_eq!("Finance".parse::<Category>().unwrap(), Category::Financial);

        let err = "astrology".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            "Unknown category: astrology (expected one of: financial, health, math, utility, viral)"
        );
    }

    #[test]
    fn test_categories_cover_catalog() {
        let financial = CalculatorType::all()
            .iter()
            .filter(|c| c.category() == Category::Financial)
            .count();
        assert_eq!(financial, 20);
        assert_eq!(CalculatorType::Bmi.category(), Category::Health);
        assert_eq!(CalculatorType::ScreenTime.category(), Category::Viral);
    }

    #[test]
    fn test_info_serializes_tag() {
        let json = serde_json::to_value(CalculatorType::AutoLoan.info()).unwrap();
        assert_eq!(json["id"], "auto-loan");
        assert_eq!(json["name"], "Auto Loan");
        assert_eq!(json["category"], "financial");
    }
}
