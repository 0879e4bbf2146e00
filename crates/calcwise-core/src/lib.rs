//! CalcWise Core Library
//!
//! Shared functionality for the CalcWise calculator analysis service:
//! - Calculator catalog and tolerant tag parsing
//! - Per-calculator recommendation generators
//! - Analysis engine with priority ordering and capping
//! - Time-value-of-money helpers and copy formatting
//! - Layered TOML configuration

pub mod analysis;
pub mod calculators;
pub mod config;
pub mod error;
pub mod finance;
pub mod format;
pub mod models;

pub use analysis::{AnalysisEngine, AnalysisOptions, Analyzer};
pub use calculators::{CalculatorInfo, CalculatorType, Category};
pub use config::{AnalysisSettings, AppConfig, ServerSettings};
pub use error::{Error, Result};
pub use models::{
    AnalysisRequest, AnalysisResponse, Priority, Recommendation, RecommendationType,
    RiskTolerance, UserContext,
};
