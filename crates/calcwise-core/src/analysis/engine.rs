//! Analysis engine - dispatches requests to calculator generators

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::calculators::CalculatorType;
use crate::config::AnalysisSettings;
use crate::error::{Error, Result};
use crate::models::{AnalysisRequest, AnalysisResponse, Priority, Recommendation, UserContext};

use super::{
    debt, everyday, health, housing, investing, loans, retirement, savings, tax, viral,
};

/// A recommendation generator for one calculator
pub trait Analyzer: Send + Sync {
    /// Calculator this analyzer handles
    fn id(&self) -> CalculatorType;

    /// Decode the calculator payload and produce an analysis
    fn analyze(&self, data: Value, ctx: &UserContext) -> Result<AnalysisResponse>;
}

/// Adapter from a typed generator function to [`Analyzer`]
pub struct Generator<I> {
    id: CalculatorType,
    run: fn(&I, &UserContext) -> AnalysisResponse,
}

impl<I> Generator<I> {
    pub fn new(id: CalculatorType, run: fn(&I, &UserContext) -> AnalysisResponse) -> Self {
        Self { id, run }
    }
}

impl<I> Analyzer for Generator<I>
where
    I: DeserializeOwned + 'static,
{
    fn id(&self) -> CalculatorType {
        self.id
    }

    fn analyze(&self, data: Value, ctx: &UserContext) -> Result<AnalysisResponse> {
        let input: I = serde_json::from_value(normalize_payload(data)).map_err(|e| {
            Error::InvalidData(format!("Invalid {} data: {}", self.id.display_name(), e))
        })?;
        Ok((self.run)(&input, ctx))
    }
}

/// Post-processing applied to every generated response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub sort_by_priority: bool,
    /// 0 means unlimited
    pub max_recommendations: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            sort_by_priority: true,
            max_recommendations: 0,
        }
    }
}

impl From<&AnalysisSettings> for AnalysisOptions {
    fn from(settings: &AnalysisSettings) -> Self {
        Self {
            sort_by_priority: settings.sort_by_priority,
            max_recommendations: settings.max_recommendations,
        }
    }
}

/// The dispatcher that routes a calculator tag to its generator
pub struct AnalysisEngine {
    analyzers: HashMap<CalculatorType, Box<dyn Analyzer>>,
    options: AnalysisOptions,
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisEngine {
    /// Create an engine with every built-in generator registered
    pub fn new() -> Self {
        Self::with_options(AnalysisOptions::default())
    }

    pub fn with_options(options: AnalysisOptions) -> Self {
        let mut engine = Self {
            analyzers: HashMap::new(),
            options,
        };

        use CalculatorType as C;

        engine.register(Box::new(Generator::new(C::Mortgage, housing::mortgage)));
        engine.register(Box::new(Generator::new(C::Refinance, housing::refinance)));
        engine.register(Box::new(Generator::new(C::RentVsBuy, housing::rent_vs_buy)));
        engine.register(Box::new(Generator::new(
            C::HomeAffordability,
            housing::home_affordability,
        )));

        engine.register(Box::new(Generator::new(C::AutoLoan, loans::auto_loan)));
        engine.register(Box::new(Generator::new(C::PersonalLoan, loans::personal_loan)));
        engine.register(Box::new(Generator::new(C::StudentLoan, loans::student_loan)));

        engine.register(Box::new(Generator::new(C::CreditCard, debt::credit_card)));
        engine.register(Box::new(Generator::new(C::DebtPayoff, debt::debt_payoff)));

        engine.register(Box::new(Generator::new(C::Retirement, retirement::retirement)));
        engine.register(Box::new(Generator::new(C::FourOhOneK, retirement::four_oh_one_k)));

        engine.register(Box::new(Generator::new(
            C::CompoundInterest,
            investing::compound_interest,
        )));
        engine.register(Box::new(Generator::new(
            C::InvestmentReturn,
            investing::investment_return,
        )));
        engine.register(Box::new(Generator::new(C::Inflation, investing::inflation)));

        engine.register(Box::new(Generator::new(C::SavingsGoal, savings::savings_goal)));
        engine.register(Box::new(Generator::new(C::EmergencyFund, savings::emergency_fund)));
        engine.register(Box::new(Generator::new(C::Budget, savings::budget)));
        engine.register(Box::new(Generator::new(C::NetWorth, savings::net_worth)));

        engine.register(Box::new(Generator::new(C::IncomeTax, tax::income_tax)));
        engine.register(Box::new(Generator::new(C::Salary, tax::salary)));

        engine.register(Box::new(Generator::new(C::Bmi, health::bmi)));
        engine.register(Box::new(Generator::new(C::Calorie, health::calorie)));
        engine.register(Box::new(Generator::new(C::BodyFat, health::body_fat)));
        engine.register(Box::new(Generator::new(C::IdealWeight, health::ideal_weight)));
        engine.register(Box::new(Generator::new(C::WaterIntake, health::water_intake)));
        engine.register(Box::new(Generator::new(C::HeartRate, health::heart_rate)));
        engine.register(Box::new(Generator::new(C::Sleep, health::sleep)));

        engine.register(Box::new(Generator::new(C::Percentage, everyday::percentage)));
        engine.register(Box::new(Generator::new(C::Gpa, everyday::gpa)));
        engine.register(Box::new(Generator::new(C::Tip, everyday::tip)));
        engine.register(Box::new(Generator::new(C::Discount, everyday::discount)));
        engine.register(Box::new(Generator::new(C::FuelCost, everyday::fuel_cost)));

        engine.register(Box::new(Generator::new(C::CoffeeSavings, viral::coffee_savings)));
        engine.register(Box::new(Generator::new(C::ScreenTime, viral::screen_time)));
        engine.register(Box::new(Generator::new(
            C::SubscriptionCost,
            viral::subscription_cost,
        )));
        engine.register(Box::new(Generator::new(
            C::LifeExpectancy,
            viral::life_expectancy,
        )));

        engine
    }

    /// Register (or replace) the analyzer for a calculator
    pub fn register(&mut self, analyzer: Box<dyn Analyzer>) {
        self.analyzers.insert(analyzer.id(), analyzer);
    }

    /// Calculators with a registered analyzer, in catalog order
    pub fn calculator_types(&self) -> Vec<CalculatorType> {
        CalculatorType::all()
            .iter()
            .copied()
            .filter(|c| self.analyzers.contains_key(c))
            .collect()
    }

    pub fn options(&self) -> AnalysisOptions {
        self.options
    }

    /// Analyze a request
    ///
    /// Unknown calculator tags produce the generic fallback response. A known
    /// tag with a payload that cannot be decoded is an error.
    pub fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let ctx = request.user_context.unwrap_or_default();

        let analyzer = request
            .calculator_type
            .parse::<CalculatorType>()
            .ok()
            .and_then(|c| self.analyzers.get(&c));

        let Some(analyzer) = analyzer else {
            tracing::warn!(
                calculator = %request.calculator_type,
                "Unknown calculator type, returning fallback analysis"
            );
            return Ok(fallback_response(&request.calculator_type));
        };

        let mut response = analyzer.analyze(request.data, &ctx)?;
        self.post_process(&mut response);

        tracing::debug!(
            calculator = analyzer.id().as_str(),
            recommendations = response.recommendations.len(),
            risks = response.risk_factors.len(),
            "Analysis complete"
        );

        Ok(response)
    }

    /// Convenience wrapper around [`AnalysisEngine::analyze`]
    pub fn analyze_value(
        &self,
        calculator_type: &str,
        data: Value,
        ctx: Option<UserContext>,
    ) -> Result<AnalysisResponse> {
        self.analyze(AnalysisRequest {
            calculator_type: calculator_type.to_string(),
            data,
            user_context: ctx,
        })
    }

    fn post_process(&self, response: &mut AnalysisResponse) {
        if self.options.sort_by_priority {
            // Stable: rules keep their relative order within a priority
            response
                .recommendations
                .sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        }
        if self.options.max_recommendations > 0 {
            response
                .recommendations
                .truncate(self.options.max_recommendations);
        }
    }
}

/// Generic response for calculators without a dedicated generator
pub fn fallback_response(calculator_type: &str) -> AnalysisResponse {
    let label = if calculator_type.trim().is_empty() {
        "this calculator".to_string()
    } else {
        format!("the \"{}\" calculator", calculator_type.trim())
    };

    AnalysisResponse {
        summary: format!(
            "Your results from {} are ready. Detailed analysis is not yet available for this calculator type.",
            label
        ),
        recommendations: vec![Recommendation::insight(
            Priority::Low,
            "Review Your Results",
            "Double-check the values you entered and compare the results against your goals.",
        )
        .with_actions([
            "Verify each input for accuracy",
            "Try a few alternative scenarios",
            "Save your results for future reference",
        ])],
        key_insights: vec!["Your calculation has been completed successfully".to_string()],
        risk_factors: vec![],
        next_steps: vec![
            "Review the calculated results".to_string(),
            "Consult a qualified professional for personalized advice".to_string(),
        ],
    }
}

/// Make frontend payloads decodable
///
/// Form values frequently arrive as strings and unset fields as `null`.
/// Numeric strings become numbers, "true"/"false" become booleans, and null
/// object members are dropped so field defaults apply.
pub fn normalize_payload(value: Value) -> Value {
    match value {
        Value::Null => Value::Object(Default::default()),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, normalize_value(v)))
                .collect(),
        ),
        other => other,
    }
}

fn normalize_value(value: Value) -> Value {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            let numeric = trimmed.trim_start_matches('$').replace(',', "");
            let numeric = numeric.trim_end_matches('%');
            if let Ok(n) = numeric.parse::<f64>() {
                if let Some(num) = serde_json::Number::from_f64(n) {
                    return Value::Number(num);
                }
            }
            match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" => Value::Bool(true),
                "false" | "no" => Value::Bool(false),
                _ => Value::String(s),
            }
        }
        Value::Object(_) => normalize_payload(value),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_value).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_engine_registers_whole_catalog() {
        let engine = AnalysisEngine::new();
        assert_eq!(engine.calculator_types().len(), CalculatorType::all().len());
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let engine = AnalysisEngine::new();
        let resp = engine
            .analyze_value("time-machine", json!({"years": 10}), None)
            .unwrap();

        assert!(resp.summary.contains("time-machine"));
        assert_eq!(resp.recommendations.len(), 1);
        assert_eq!(resp.recommendations[0].title, "Review Your Results");
        assert!(resp.risk_factors.is_empty());
        assert!(!resp.next_steps.is_empty());
    }

    #[test]
    fn test_invalid_payload_is_error() {
        let engine = AnalysisEngine::new();
        let err = engine
            .analyze_value("mortgage", json!({"homePrice": {"nested": true}}), None)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_normalize_payload() {
        let normalized = normalize_payload(json!({
            "homePrice": "$350,000",
            "rate": "6.5%",
            "smoker": "yes",
            "filingStatus": "single",
            "missing": null,
            "nested": {"a": "1"}
        }));

        assert_eq!(normalized["homePrice"], 350000.0);
        assert_eq!(normalized["rate"], 6.5);
        assert_eq!(normalized["smoker"], true);
        assert_eq!(normalized["filingStatus"], "single");
        assert!(normalized.get("missing").is_none());
        assert_eq!(normalized["nested"]["a"], 1.0);
    }

    #[test]
    fn test_null_payload_uses_defaults() {
        let engine = AnalysisEngine::new();
        let resp = engine.analyze_value("tip", Value::Null, None).unwrap();
        assert!(!resp.summary.is_empty());
    }

    #[test]
    fn test_max_recommendations_caps_output() {
        let engine = AnalysisEngine::with_options(AnalysisOptions {
            sort_by_priority: true,
            max_recommendations: 1,
        });
        let resp = engine
            .analyze_value(
                "credit-card",
                json!({"balance": 8000, "apr": 29.9, "monthlyPayment": 200, "minimumPayment": 190, "creditLimit": 10000}),
                None,
            )
            .unwrap();
        assert_eq!(resp.recommendations.len(), 1);
        assert_eq!(resp.recommendations[0].priority, Priority::High);
    }

    #[test]
    fn test_sorted_by_priority() {
        let engine = AnalysisEngine::new();
        let resp = engine
            .analyze_value(
                "mortgage",
                json!({
                    "homePrice": 400000, "downPayment": 20000, "loanAmount": 380000,
                    "interestRate": 7.5, "loanTerm": 30, "monthlyPayment": 2657,
                    "totalInterest": 576520
                }),
                None,
            )
            .unwrap();

        let ranks: Vec<u8> = resp.recommendations.iter().map(|r| r.priority.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranks, sorted);
    }

    #[test]
    fn test_register_replaces_analyzer() {
        fn canned(_: &serde_json::Map<String, Value>, _: &UserContext) -> AnalysisResponse {
            fallback_response("custom")
        }

        let mut engine = AnalysisEngine::new();
        engine.register(Box::new(Generator::new(CalculatorType::Tip, canned)));
        let resp = engine.analyze_value("tip", json!({}), None).unwrap();
        assert!(resp.summary.contains("custom"));
    }
}
