//! Calculator analysis
//!
//! Turns a calculator's already-computed output into a written analysis:
//! a summary, prioritized recommendations, key insights, risk factors, and
//! next steps. Each calculator has a generator that threshold-checks its
//! typed input and assembles copy from templates.
//!
//! ## Generator groups
//!
//! - **housing** - mortgage, refinance, rent vs. buy, home affordability
//! - **loans** - auto, personal, student loans
//! - **debt** - credit card payoff, multi-debt payoff
//! - **retirement** - retirement projection, 401(k)
//! - **investing** - compound interest, investment return, inflation
//! - **savings** - savings goal, emergency fund, budget, net worth
//! - **tax** - income tax, salary/paycheck
//! - **health** - BMI, calories, body fat, ideal weight, water, heart rate, sleep
//! - **everyday** - percentage, GPA, tip, discount, fuel cost
//! - **viral** - coffee savings, screen time, subscriptions, life expectancy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use calcwise_core::analysis::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new();
//! let response = engine.analyze(request)?;
//! ```

pub mod builder;
pub mod debt;
pub mod engine;
pub mod everyday;
pub mod health;
pub mod housing;
pub mod investing;
pub mod loans;
pub mod retirement;
pub mod savings;
pub mod tax;
pub mod viral;

pub use builder::ResponseBuilder;
pub use engine::{
    fallback_response, normalize_payload, AnalysisEngine, AnalysisOptions, Analyzer, Generator,
};
