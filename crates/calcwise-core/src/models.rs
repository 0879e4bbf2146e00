//! Request/response shapes for calculator analysis
//!
//! These mirror the JSON the frontend sends and expects, so field names are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Incoming analysis request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Calculator tag, e.g. "mortgage" or "auto-loan"
    pub calculator_type: String,
    /// Calculator-specific output already computed by the frontend
    #[serde(default)]
    pub data: serde_json::Value,
    /// Optional demographic/financial context
    #[serde(default)]
    pub user_context: Option<UserContext>,
}

impl AnalysisRequest {
    pub fn new(calculator_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            calculator_type: calculator_type.into(),
            data,
            user_context: None,
        }
    }

    pub fn with_context(mut self, ctx: UserContext) -> Self {
        self.user_context = Some(ctx);
        self
    }
}

/// Analysis returned to the frontend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
    pub key_insights: Vec<String>,
    pub risk_factors: Vec<String>,
    pub next_steps: Vec<String>,
}

impl AnalysisResponse {
    /// Find a recommendation by exact title
    pub fn recommendation(&self, title: &str) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.title == title)
    }

    /// Sum of all quantified savings across recommendations
    pub fn total_potential_savings(&self) -> f64 {
        self.recommendations
            .iter()
            .filter_map(|r| r.potential_savings)
            .sum()
    }
}

/// Kind of recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    /// A way to do the same thing for less
    Optimization,
    /// Something that needs attention
    Warning,
    /// Something worth pursuing
    Opportunity,
    /// Context, no action strictly needed
    Insight,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::Optimization => "optimization",
            RecommendationType::Warning => "warning",
            RecommendationType::Opportunity => "opportunity",
            RecommendationType::Insight => "insight",
        }
    }
}

impl fmt::Display for RecommendationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric rank for sorting (higher = more urgent)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured suggestion shown alongside calculator results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potential_savings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_impact: Option<String>,
}

impl Recommendation {
    pub fn new(
        kind: RecommendationType,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            priority,
            title: title.into(),
            description: description.into(),
            action_items: Vec::new(),
            potential_savings: None,
            estimated_impact: None,
        }
    }

    pub fn warning(priority: Priority, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(RecommendationType::Warning, priority, title, description)
    }

    pub fn optimization(
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(RecommendationType::Optimization, priority, title, description)
    }

    pub fn opportunity(
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(RecommendationType::Opportunity, priority, title, description)
    }

    pub fn insight(priority: Priority, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(RecommendationType::Insight, priority, title, description)
    }

    /// Add action items
    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_items.extend(actions.into_iter().map(Into::into));
        self
    }

    /// Attach a dollar figure; non-positive or non-finite amounts are dropped
    pub fn with_savings(mut self, amount: f64) -> Self {
        if amount.is_finite() && amount > 0.0 {
            self.potential_savings = Some((amount * 100.0).round() / 100.0);
        }
        self
    }

    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.estimated_impact = Some(impact.into());
        self
    }
}

/// How much investment risk the user is comfortable with
///
/// Deserializes leniently through [`FromStr`], so `"Balanced"` or `"high"` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

impl RiskTolerance {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Aggressive => "aggressive",
        }
    }

    /// Long-run annual return (percent) that is reasonable to plan around
    pub fn planning_return(&self) -> f64 {
        match self {
            RiskTolerance::Conservative => 5.0,
            RiskTolerance::Moderate => 7.0,
            RiskTolerance::Aggressive => 9.0,
        }
    }
}

impl FromStr for RiskTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" | "low" => Ok(RiskTolerance::Conservative),
            "moderate" | "medium" | "balanced" => Ok(RiskTolerance::Moderate),
            "aggressive" | "high" => Ok(RiskTolerance::Aggressive),
            _ => Err(format!("Unknown risk tolerance: {}", s)),
        }
    }
}

impl TryFrom<String> for RiskTolerance {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Optional context about the person using the calculator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserContext {
    pub age: Option<u32>,
    /// Annual gross income
    #[serde(alias = "annualIncome")]
    pub income: Option<f64>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub dependents: Option<u32>,
    pub location: Option<String>,
}

impl UserContext {
    /// Monthly gross income, when a positive annual income is known
    pub fn monthly_income(&self) -> Option<f64> {
        self.income.filter(|i| *i > 0.0).map(|i| i / 12.0)
    }

    pub fn has_dependents(&self) -> bool {
        self.dependents.unwrap_or(0) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = Recommendation::warning(Priority::High, "Title", "Desc")
            .with_actions(["Do this"])
            .with_savings(120.456);

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["type"], "warning");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["actionItems"][0], "Do this");
        assert_eq!(json["potentialSavings"], 120.46);
        assert!(json.get("estimatedImpact").is_none());
    }

    #[test]
    fn test_with_savings_drops_non_positive() {
        let rec = Recommendation::insight(Priority::Low, "T", "D").with_savings(-5.0);
        assert!(rec.potential_savings.is_none());

        let rec = Recommendation::insight(Priority::Low, "T", "D").with_savings(f64::NAN);
        assert!(rec.potential_savings.is_none());
    }

    #[test]
    fn test_priority_rank() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn test_request_deserializes_user_context() {
        let json = serde_json::json!({
            "calculatorType": "retirement",
            "data": {"currentAge": 40},
            "userContext": {"age": 40, "annualIncome": 90000, "riskTolerance": "aggressive"}
        });

        let req: AnalysisRequest = serde_json::from_value(json).unwrap();
        let ctx = req.user_context.unwrap();
        assert_eq!(ctx.age, Some(40));
        assert_eq!(ctx.income, Some(90000.0));
        assert_eq!(ctx.risk_tolerance, Some(RiskTolerance::Aggressive));
        assert_eq!(ctx.monthly_income(), Some(7500.0));
    }

    #[test]
    fn test_request_without_data_or_context() {
        let req: AnalysisRequest =
            serde_json::from_value(serde_json::json!({"calculatorType": "bmi"})).unwrap();
        assert!(req.data.is_null());
        assert!(req.user_context.is_none());
    }

    #[test]
    fn test_risk_tolerance_from_str() {
        assert_eq!(
            "Balanced".parse::<RiskTolerance>().unwrap(),
            RiskTolerance::Moderate
        );
        assert!("yolo".parse::<RiskTolerance>().is_err());
    }

    #[test]
    fn test_user_context_accepts_risk_tolerance_synonyms() {
        let ctx: UserContext =
            serde_json::from_value(serde_json::json!({"riskTolerance": "Balanced"})).unwrap();
        assert_eq!(ctx.risk_tolerance, Some(RiskTolerance::Moderate));

        let ctx: UserContext =
            serde_json::from_value(serde_json::json!({"riskTolerance": " HIGH "})).unwrap();
        assert_eq!(ctx.risk_tolerance, Some(RiskTolerance::Aggressive));

        let err = serde_json::from_value::<UserContext>(serde_json::json!({"riskTolerance": "yolo"}))
            .unwrap_err();
        assert!(err.to_string().contains("Unknown risk tolerance"));

        let out = serde_json::to_value(RiskTolerance::Moderate).unwrap();
        assert_eq!(out, "moderate");
    }
}
