//! Integration tests for calcwise-core
//!
//! These tests exercise the full request → engine → response workflow
//! through the public API, the way the server and CLI use it.

use calcwise_core::{
    AnalysisEngine, AnalysisOptions, AnalysisRequest, AppConfig, CalculatorType, Error, Priority,
    RecommendationType, UserContext,
};
use serde_json::{json, Value};

/// A realistic payload for every calculator in the catalog
fn sample_payloads() -> Vec<(&'static str, Value)> {
    vec![
        (
            "mortgage",
            json!({"homePrice": 400000, "downPayment": 40000, "interestRate": 6.8, "loanTerm": 30}),
        ),
        (
            "refinance",
            json!({"currentBalance": 280000, "currentRate": 7.2, "newRate": 6.0, "closingCosts": 6000, "remainingTerm": 27, "newTerm": 30}),
        ),
        (
            "rent-vs-buy",
            json!({"monthlyRent": 2200, "homePrice": 450000, "downPayment": 90000, "interestRate": 6.5, "yearsToStay": 4}),
        ),
        (
            "home-affordability",
            json!({"annualIncome": 110000, "monthlyDebts": 900, "downPayment": 50000, "interestRate": 6.5}),
        ),
        (
            "auto-loan",
            json!({"vehiclePrice": 35000, "downPayment": 3000, "interestRate": 8.5, "loanTerm": 72}),
        ),
        (
            "personal-loan",
            json!({"loanAmount": 15000, "apr": 19.5, "loanTerm": 48, "originationFee": 6}),
        ),
        (
            "student-loan",
            json!({"loanBalance": 42000, "interestRate": 6.2, "loanTerm": 10, "loanType": "federal"}),
        ),
        (
            "credit-card",
            json!({"balance": 6500, "apr": 24.99, "monthlyPayment": 180, "minimumPayment": 165, "creditLimit": 9000}),
        ),
        (
            "debt-payoff",
            json!({"totalDebt": 32000, "numberOfDebts": 4, "monthlyPayment": 900, "monthsToPayoff": 44, "totalInterest": 7400, "strategy": "snowball", "highestInterestRate": 22.9}),
        ),
        (
            "retirement",
            json!({"currentAge": 38, "retirementAge": 65, "currentSavings": 85000, "monthlyContribution": 700, "expectedReturn": 7, "retirementGoal": 1500000}),
        ),
        (
            "401k",
            json!({"annualSalary": 95000, "contributionPercent": 4, "employerMatchPercent": 50, "employerMatchLimit": 6, "currentAge": 33}),
        ),
        (
            "compound-interest",
            json!({"principal": 5000, "monthlyContribution": 250, "interestRate": 7, "years": 20}),
        ),
        (
            "investment-return",
            json!({"initialInvestment": 12000, "finalValue": 19000, "years": 6}),
        ),
        (
            "inflation",
            json!({"amount": 50000, "inflationRate": 3.2, "years": 15}),
        ),
        (
            "savings-goal",
            json!({"goalAmount": 25000, "currentSavings": 4000, "monthlyContribution": 450, "interestRate": 0.5}),
        ),
        (
            "emergency-fund",
            json!({"monthlyExpenses": 3800, "currentSavings": 7600, "targetMonths": 6}),
        ),
        (
            "budget",
            json!({"monthlyIncome": 6200, "housing": 1900, "transportation": 450, "food": 700, "utilities": 250, "insurance": 300, "entertainment": 600, "savings": 600, "other": 300}),
        ),
        (
            "income-tax",
            json!({"grossIncome": 120000, "filingStatus": "married", "retirementContributions": 6000}),
        ),
        (
            "salary",
            json!({"annualSalary": 72000, "payFrequency": "semi-monthly", "federalTax": 420, "stateTax": 150, "socialSecurity": 186, "medicare": 43.5, "preTaxDeductions": 180}),
        ),
        (
            "net-worth",
            json!({"totalAssets": 420000, "totalLiabilities": 260000, "liquidAssets": 30000, "retirementAssets": 120000}),
        ),
        ("bmi", json!({"weight": 82, "height": 178})),
        (
            "calorie",
            json!({"age": 34, "gender": "male", "weight": 82, "height": 178, "activityLevel": "moderate", "goal": "lose"}),
        ),
        (
            "body-fat",
            json!({"bodyFatPercent": 22, "gender": "male", "weight": 82}),
        ),
        (
            "ideal-weight",
            json!({"currentWeight": 82, "height": 178, "gender": "male"}),
        ),
        (
            "water-intake",
            json!({"weight": 82, "activityMinutes": 45, "currentIntake": 2.0}),
        ),
        (
            "heart-rate",
            json!({"age": 34, "restingHeartRate": 68}),
        ),
        ("sleep", json!({"age": 34, "hoursPerNight": 6.5, "wakeUps": 1})),
        ("percentage", json!({"value": 250, "percentage": 18})),
        (
            "gpa",
            json!({"gpa": 3.1, "totalCredits": 60, "targetGpa": 3.4, "plannedCredits": 30}),
        ),
        (
            "tip",
            json!({"billAmount": 86.4, "tipPercent": 18, "numberOfPeople": 3}),
        ),
        (
            "discount",
            json!({"originalPrice": 129.99, "discountPercent": 25}),
        ),
        (
            "fuel-cost",
            json!({"distance": 30, "fuelEfficiency": 28, "fuelPrice": 3.6, "tripsPerMonth": 40}),
        ),
        (
            "coffee-savings",
            json!({"dailyCost": 6.25, "daysPerWeek": 5, "years": 20, "expectedReturn": 7}),
        ),
        ("screen-time", json!({"dailyHours": 5.5, "age": 29})),
        (
            "subscription-cost",
            json!({"monthlyTotal": 87, "subscriptionCount": 7, "unusedCount": 2}),
        ),
        (
            "life-expectancy",
            json!({"currentAge": 45, "estimatedLifeExpectancy": 81, "smoker": false, "exerciseDaysPerWeek": 2}),
        ),
    ]
}

// =============================================================================
// Catalog Coverage
// =============================================================================

#[test]
fn test_sample_payloads_cover_catalog() {
    let tags: Vec<&str> = sample_payloads().iter().map(|(t, _)| *t).collect();
    for calc in CalculatorType::all() {
        assert!(
            tags.contains(&calc.as_str()),
            "no sample payload for {}",
            calc
        );
    }
}

#[test]
fn test_every_calculator_produces_complete_response() {
    let engine = AnalysisEngine::new();

    for (tag, data) in sample_payloads() {
        let resp = engine
            .analyze(AnalysisRequest::new(tag, data))
            .unwrap_or_else(|e| panic!("{} failed: {}", tag, e));

        assert!(!resp.summary.is_empty(), "{}: empty summary", tag);
        assert!(!resp.recommendations.is_empty(), "{}: no recommendations", tag);
        assert!(!resp.key_insights.is_empty(), "{}: no key insights", tag);
        assert!(!resp.next_steps.is_empty(), "{}: no next steps", tag);
    }
}

#[test]
fn test_every_calculator_accepts_empty_payload() {
    let engine = AnalysisEngine::new();

    for calc in CalculatorType::all() {
        let resp = engine
            .analyze(AnalysisRequest::new(calc.as_str(), Value::Null))
            .unwrap_or_else(|e| panic!("{} failed on empty payload: {}", calc, e));
        assert!(!resp.summary.is_empty());
        assert!(!resp.recommendations.is_empty(), "{}: no recommendations", calc);
    }
}

#[test]
fn test_responses_are_deterministic() {
    let engine = AnalysisEngine::new();
    let ctx = UserContext {
        age: Some(41),
        income: Some(88_000.0),
        dependents: Some(2),
        ..Default::default()
    };

    for (tag, data) in sample_payloads() {
        let request = AnalysisRequest::new(tag, data).with_context(ctx.clone());
        let first = engine.analyze(request.clone()).unwrap();
        let second = engine.analyze(request).unwrap();
        assert_eq!(first, second, "{} is not deterministic", tag);
    }
}

#[test]
fn test_priority_order_is_non_increasing() {
    let engine = AnalysisEngine::new();

    for (tag, data) in sample_payloads() {
        let resp = engine.analyze(AnalysisRequest::new(tag, data)).unwrap();
        let ranks: Vec<u8> = resp
            .recommendations
            .iter()
            .map(|r| r.priority.rank())
            .collect();
        assert!(
            ranks.windows(2).all(|w| w[0] >= w[1]),
            "{} not sorted: {:?}",
            tag,
            ranks
        );
    }
}

// =============================================================================
// Threshold Behaviors
// =============================================================================

#[test]
fn test_mortgage_small_down_payment_mentions_pmi() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value(
            "mortgage",
            json!({"homePrice": 400000, "downPayment": 20000, "interestRate": 7, "loanTerm": 30}),
            None,
        )
        .unwrap();

    let rec = resp.recommendation("High Loan-to-Value Ratio").unwrap();
    assert_eq!(rec.kind, RecommendationType::Warning);
    assert_eq!(rec.priority, Priority::High);
    assert!(rec.description.contains("PMI") || resp.summary.contains("PMI"));
}

#[test]
fn test_extreme_apr_is_high_priority_warning() {
    let engine = AnalysisEngine::new();

    for (tag, data) in [
        (
            "credit-card",
            json!({"balance": 3000, "apr": 29.99, "monthlyPayment": 150}),
        ),
        (
            "personal-loan",
            json!({"loanAmount": 8000, "apr": 32, "loanTerm": 36}),
        ),
    ] {
        let resp = engine.analyze_value(tag, data, None).unwrap();
        let rec = resp
            .recommendation("Extremely High Interest Rate")
            .unwrap_or_else(|| panic!("{} missing APR warning", tag));
        assert_eq!(rec.kind, RecommendationType::Warning);
        assert_eq!(rec.priority, Priority::High);
    }
}

#[test]
fn test_missing_match_reports_forgone_dollars() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value(
            "401k",
            json!({"annualSalary": "$60,000", "contributionPercent": "2", "employerMatchPercent": 100, "employerMatchLimit": 5}),
            None,
        )
        .unwrap();

    let rec = resp.recommendation("Missing Employer Match").unwrap();
    assert_eq!(rec.priority, Priority::High);
    assert_eq!(rec.potential_savings, Some(1_800.0));
}

#[test]
fn test_emergency_fund_under_one_month() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value(
            "emergencyFund",
            json!({"monthlyExpenses": 3000, "currentSavings": 900}),
            None,
        )
        .unwrap();

    assert_eq!(resp.recommendations[0].priority, Priority::High);
    assert_eq!(resp.recommendations[0].kind, RecommendationType::Warning);
}

#[test]
fn test_bmi_category_guidance() {
    let engine = AnalysisEngine::new();
    let cases = [
        (17.0, "Below Healthy Weight Range"),
        (22.0, "Healthy Weight Range"),
        (27.0, "Small Changes, Big Results"),
        (33.0, "Weight-Related Health Risk"),
    ];
    for (value, title) in cases {
        let resp = engine.analyze_value("bmi", json!({"bmi": value}), None).unwrap();
        assert!(resp.recommendation(title).is_some(), "bmi {} → {}", value, title);
    }
}

// =============================================================================
// Missing Denominators
// =============================================================================

#[test]
fn test_emergency_fund_without_monthly_expenses() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value(
            "emergency-fund",
            json!({"currentSavings": 20000, "targetAmount": 15000}),
            None,
        )
        .unwrap();

    assert!(resp.recommendation("Emergency Fund Critically Low").is_none());
    assert!(resp.recommendation("Build to Three Months First").is_none());
    assert!(!resp.summary.contains("0.0 months"));
    assert!(!resp.key_insights.iter().any(|i| i.starts_with("Months covered")));
}

#[test]
fn test_fuel_cost_without_mpg() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value("fuel-cost", json!({"distance": 300, "fuelPrice": 4}), None)
        .unwrap();

    assert!(resp.recommendation("Low Fuel Efficiency").is_none());
    assert!(!resp.summary.contains(" 0 mpg"));
}

#[test]
fn test_subscription_cost_without_count() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value(
            "subscription-cost",
            json!({"monthlyTotal": 80, "unusedCount": 2}),
            None,
        )
        .unwrap();

    assert!(resp.recommendation("Cancel Unused Subscriptions").is_none());
    assert!(!resp.key_insights.iter().any(|i| i.contains("inf") || i.contains("NaN")));
}

#[test]
fn test_bmi_without_height() {
    let engine = AnalysisEngine::new();
    let resp = engine.analyze_value("bmi", json!({"weight": 82}), None).unwrap();

    for title in [
        "Below Healthy Weight Range",
        "Healthy Weight Range",
        "Small Changes, Big Results",
        "Weight-Related Health Risk",
    ] {
        assert!(resp.recommendation(title).is_none(), "unexpected {}", title);
    }
    assert!(resp.recommendation("Add Your Height and Weight").is_some());
}

// =============================================================================
// Fallback, Errors, Options
// =============================================================================

#[test]
fn test_unknown_calculator_gets_fallback() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value("mortgage-insurance-estimator", json!({"x": 1}), None)
        .unwrap();

    assert!(resp.summary.contains("mortgage-insurance-estimator"));
    assert_eq!(resp.recommendations.len(), 1);
    assert_eq!(resp.recommendations[0].priority, Priority::Low);
    assert!(resp.risk_factors.is_empty());
}

#[test]
fn test_non_object_payload_is_invalid_data() {
    let engine = AnalysisEngine::new();
    let err = engine
        .analyze_value("mortgage", json!("400000 at 6.5%"), None)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_aliases_resolve() {
    let engine = AnalysisEngine::new();
    let direct = engine
        .analyze_value("calorie", json!({"weight": 70, "height": 170}), None)
        .unwrap();
    let aliased = engine
        .analyze_value("TDEE", json!({"weight": 70, "height": 170}), None)
        .unwrap();
    assert_eq!(direct, aliased);
}

#[test]
fn test_config_options_flow_into_engine() {
    let config = AppConfig::from_toml(
        r#"
[analysis]
sort_by_priority = true
max_recommendations = 2
"#,
    )
    .unwrap();

    let engine = AnalysisEngine::with_options(AnalysisOptions::from(&config.analysis));
    for (tag, data) in sample_payloads() {
        let resp = engine.analyze(AnalysisRequest::new(tag, data)).unwrap();
        assert!(resp.recommendations.len() <= 2, "{} not capped", tag);
    }
}

#[test]
fn test_response_json_shape() {
    let engine = AnalysisEngine::new();
    let resp = engine
        .analyze_value(
            "credit-card",
            json!({"balance": 5000, "apr": 27, "monthlyPayment": 200}),
            None,
        )
        .unwrap();

    let json = serde_json::to_value(&resp).unwrap();
    for key in [
        "summary",
        "recommendations",
        "keyInsights",
        "riskFactors",
        "nextSteps",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    let first = &json["recommendations"][0];
    assert_eq!(first["priority"], "high");
    assert!(first.get("actionItems").is_some());
}
