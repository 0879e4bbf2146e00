//! Accumulator for generator output

use crate::models::{AnalysisResponse, Recommendation};

/// Collects recommendations and text while a generator walks its rules
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    recommendations: Vec<Recommendation>,
    key_insights: Vec<String>,
    risk_factors: Vec<String>,
    next_steps: Vec<String>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recommend(&mut self, rec: Recommendation) -> &mut Self {
        self.recommendations.push(rec);
        self
    }

    pub fn insight(&mut self, text: impl Into<String>) -> &mut Self {
        self.key_insights.push(text.into());
        self
    }

    pub fn risk(&mut self, text: impl Into<String>) -> &mut Self {
        self.risk_factors.push(text.into());
        self
    }

    pub fn step(&mut self, text: impl Into<String>) -> &mut Self {
        self.next_steps.push(text.into());
        self
    }

    pub fn steps<I, S>(&mut self, steps: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_steps.extend(steps.into_iter().map(Into::into));
        self
    }

    /// Whether any recommendation so far carries the given title
    pub fn has_title(&self, title: &str) -> bool {
        self.recommendations.iter().any(|r| r.title == title)
    }

    /// Add `rec` only when no other rule fired
    pub fn otherwise(&mut self, rec: Recommendation) -> &mut Self {
        if self.recommendations.is_empty() {
            self.recommendations.push(rec);
        }
        self
    }

    pub fn build(self, summary: impl Into<String>) -> AnalysisResponse {
        AnalysisResponse {
            summary: summary.into(),
            recommendations: self.recommendations,
            key_insights: self.key_insights,
            risk_factors: self.risk_factors,
            next_steps: self.next_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn test_otherwise_only_when_empty() {
        let mut b = ResponseBuilder::new();
        b.otherwise(Recommendation::insight(Priority::Low, "Fallback", "x"));
        assert!(b.has_title("Fallback"));

        let mut b = ResponseBuilder::new();
        b.recommend(Recommendation::warning(Priority::High, "Real", "x"));
        b.otherwise(Recommendation::insight(Priority::Low, "Fallback", "x"));
        let resp = b.build("done");
        assert_eq!(resp.recommendations.len(), 1);
        assert_eq!(resp.recommendations[0].title, "Real");
    }

    #[test]
    fn test_build_collects_text() {
        let mut b = ResponseBuilder::new();
        b.insight("i").risk("r").step("s").steps(["t", "u"]);
        let resp = b.build("summary");
        assert_eq!(resp.summary, "summary");
        assert_eq!(resp.key_insights, vec!["i"]);
        assert_eq!(resp.risk_factors, vec!["r"]);
        assert_eq!(resp.next_steps, vec!["s", "t", "u"]);
    }
}
