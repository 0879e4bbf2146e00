//! Shareable "what does this habit really cost" generators

use serde::Deserialize;

use crate::finance;
use crate::format::{currency, currency_cents, number, percent, years};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

const DEFAULT_RETURN: f64 = 7.0;

/// Cost of a home-brewed cup
const HOME_BREW_COST: f64 = 0.5;

/// Age used as a reference lifespan for screen-time projections
const REFERENCE_LIFESPAN: f64 = 80.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoffeeSavingsInput {
    #[serde(alias = "cupPrice")]
    pub daily_cost: f64,
    pub days_per_week: f64,
    pub years: f64,
    pub expected_return: f64,
}

pub fn coffee_savings(input: &CoffeeSavingsInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let days = if input.days_per_week > 0.0 {
        input.days_per_week.min(7.0)
    } else {
        5.0
    };
    let horizon = if input.years > 0.0 { input.years } else { 10.0 };
    let rate = if input.expected_return > 0.0 {
        input.expected_return
    } else {
        DEFAULT_RETURN
    };
    let annual = input.daily_cost * days * 52.0;
    let invested =
        finance::future_value_of_series(annual / 12.0, rate, (horizon * 12.0).round() as u32);

    if input.daily_cost > HOME_BREW_COST {
        let saved = (input.daily_cost - HOME_BREW_COST) * days * 52.0;
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Brew at Home",
                format!(
                    "Making coffee at home for about {} a cup saves {} a year.",
                    currency_cents(HOME_BREW_COST),
                    currency(saved)
                ),
            )
            .with_actions([
                "Invest in a decent coffee maker or French press",
                "Keep café visits as a weekly treat",
            ])
            .with_savings(saved),
        );
    }

    if annual > 0.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Invest the Difference",
                format!(
                    "Investing {} a year at {} grows to {} in {}.",
                    currency(annual),
                    percent(rate),
                    currency(invested),
                    years(horizon)
                ),
            )
            .with_impact(format!("{} after {}", currency(invested), years(horizon))),
        );
    }

    if annual > 1_500.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "That's a Vacation",
            format!("{} a year could pay for a trip.", currency(annual)),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Modest Habit",
        "Your coffee spending is small. Enjoy it.",
    ));

    b.insight(format!("Weekly spend: {}", currency(input.daily_cost * days)));
    b.insight(format!("Annual spend: {}", currency(annual)));
    b.insight(format!(
        "Total over {}: {}",
        years(horizon),
        currency(annual * horizon)
    ));

    b.steps([
        "Track small daily purchases for one month",
        "Redirect what you cut to an automatic investment",
    ]);

    b.build(format!(
        "Your {} coffee habit costs {} a year; invested instead, it would grow to {} in {}.",
        currency(input.daily_cost),
        currency(annual),
        currency(invested),
        years(horizon)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScreenTimeInput {
    pub daily_hours: f64,
    pub age: f64,
}

pub fn screen_time(input: &ScreenTimeInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let age = if input.age > 0.0 {
        Some(input.age)
    } else {
        ctx.age.map(f64::from)
    };
    let hours = input.daily_hours;
    let yearly_hours = hours * 365.0;
    let yearly_days = yearly_hours / 24.0;
    let remaining_years = age.map(|a| (REFERENCE_LIFESPAN - a).max(0.0));

    if hours > 7.0 {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "High Screen Time",
                format!(
                    "{} hours a day adds up to {} full days a year.",
                    hours,
                    number(yearly_days)
                ),
            )
            .with_actions([
                "Turn on app time limits",
                "Keep your phone out of the bedroom",
            ]),
        );
    }

    if age.map_or(false, |a| a < 18.0) && hours > 2.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Above Recommended Youth Limits",
            "Pediatric guidance suggests limiting recreational screen time to about two hours a day.",
        ));
    }

    if hours > 4.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Reclaim an Hour a Day",
                "Cutting just one hour gives you back 365 hours a year, more than nine 40-hour work weeks.",
            )
            .with_impact("365 hours a year"),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Balanced Screen Time",
        "Your daily screen time is moderate.",
    ));

    b.insight(format!("Hours per year: {}", number(yearly_hours)));
    b.insight(format!("Full days per year: {}", number(yearly_days)));
    if let Some(left) = remaining_years {
        b.insight(format!(
            "Years of screen time by age {}: {:.1}",
            REFERENCE_LIFESPAN,
            hours / 24.0 * left
        ));
    }

    b.risk("Late-night screen use delays sleep");

    b.steps([
        "Check your device's weekly screen time report",
        "Schedule one screen-free evening a week",
    ]);

    b.build(format!(
        "At {} hours a day you spend {} days a year looking at screens.",
        hours,
        number(yearly_days)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubscriptionCostInput {
    #[serde(alias = "monthlyCost")]
    pub monthly_total: f64,
    pub subscription_count: f64,
    pub unused_count: f64,
}

pub fn subscription_cost(input: &SubscriptionCostInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let annual = input.monthly_total * 12.0;
    let average = (input.subscription_count > 0.0)
        .then(|| input.monthly_total / input.subscription_count);
    let invested = finance::future_value_of_series(input.monthly_total, DEFAULT_RETURN, 120);

    if let Some(average) = average.filter(|_| input.unused_count > 0.0) {
        let wasted = average * input.unused_count * 12.0;
        b.recommend(
            Recommendation::optimization(
                Priority::High,
                "Cancel Unused Subscriptions",
                format!(
                    "You pay for {} services you don't use, about {} a year.",
                    number(input.unused_count),
                    currency(wasted)
                ),
            )
            .with_actions([
                "Cancel them today",
                "Set calendar reminders before free trials end",
            ])
            .with_savings(wasted),
        );
    }

    if input.monthly_total > 100.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Subscriptions Add Up",
            format!("{} a month is {} a year.", currency(input.monthly_total), currency(annual)),
        ));
    }

    if input.subscription_count >= 5.0 {
        b.recommend(Recommendation::opportunity(
            Priority::Medium,
            "Rotate Streaming Services",
            "Keep one or two services at a time and switch each month.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Lean Subscription List",
        "You're keeping recurring costs under control.",
    ));

    b.insight(format!("Annual cost: {}", currency(annual)));
    if let Some(average) = average {
        b.insight(format!("Average per service: {}", currency(average)));
    }
    b.insight(format!("Invested for 10 years instead: {}", currency(invested)));

    b.risk("Prices for subscriptions tend to rise every year");

    b.steps([
        "Review bank statements for recurring charges",
        "Audit subscriptions every quarter",
    ]);

    let summary = if input.subscription_count > 0.0 {
        format!(
            "Your {} subscriptions cost {} a month, {} a year.",
            number(input.subscription_count),
            currency(input.monthly_total),
            currency(annual)
        )
    } else {
        format!(
            "Your subscriptions cost {} a month, {} a year.",
            currency(input.monthly_total),
            currency(annual)
        )
    };
    b.build(summary)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifeExpectancyInput {
    #[serde(alias = "age")]
    pub current_age: f64,
    #[serde(alias = "lifeExpectancy")]
    pub estimated_life_expectancy: f64,
    pub smoker: bool,
    pub exercise_days_per_week: f64,
}

pub fn life_expectancy(input: &LifeExpectancyInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let age = if input.current_age > 0.0 {
        input.current_age
    } else {
        ctx.age.map(f64::from).unwrap_or(0.0)
    };
    let expectancy = if input.estimated_life_expectancy > 0.0 {
        input.estimated_life_expectancy
    } else {
        79.0
    };
    let remaining = (expectancy - age).max(0.0);

    if input.smoker {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Quit Smoking",
                "Smoking shortens life by about ten years on average. Quitting at any age recovers much of that.",
            )
            .with_actions([
                "Call a quitline or talk to your doctor about cessation aids",
                "Set a quit date within the next two weeks",
            ]),
        );
    }

    if input.exercise_days_per_week < 3.0 {
        b.recommend(Recommendation::opportunity(
            Priority::Medium,
            "Move More",
            "Regular moderate exercise is linked to three or more extra years of life.",
        ));
    } else if input.exercise_days_per_week >= 5.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Active Lifestyle",
            "Exercising most days is one of the strongest predictors of longevity.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Healthy Habits",
        "Keep up your routine and regular check-ups.",
    ));

    b.insight(format!("Estimated life expectancy: {}", expectancy.round()));
    b.insight(format!("Years remaining: {}", remaining.round()));
    b.insight(format!("Weeks remaining: {}", number(remaining * 52.0)));
    b.insight(format!("Summers remaining: {}", remaining.round()));

    b.risk("Estimates are population averages, not predictions");

    b.steps([
        "Schedule an annual physical",
        "Pick one habit to improve this month",
    ]);

    b.build(format!(
        "At {}, you can expect about {} more, roughly {} weeks.",
        age,
        years(remaining.round()),
        number(remaining * 52.0)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coffee_savings() {
        let input = CoffeeSavingsInput {
            daily_cost: 5.0,
            days_per_week: 5.0,
            years: 10.0,
            ..Default::default()
        };
        let resp = coffee_savings(&input, &UserContext::default());
        // 5 × 5 × 52
        assert!(resp.summary.contains("$1,300 a year"));
        let brew = resp.recommendation("Brew at Home").unwrap();
        assert_eq!(brew.potential_savings, Some(1_170.0));
        assert!(resp.recommendation("Invest the Difference").is_some());
    }

    #[test]
    fn test_subscription_unused() {
        let input = SubscriptionCostInput {
            monthly_total: 120.0,
            subscription_count: 8.0,
            unused_count: 2.0,
        };
        let resp = subscription_cost(&input, &UserContext::default());
        let rec = resp.recommendation("Cancel Unused Subscriptions").unwrap();
        assert_eq!(rec.priority, Priority::High);
        assert_eq!(rec.potential_savings, Some(360.0));
        assert!(resp.recommendation("Rotate Streaming Services").is_some());
    }

    #[test]
    fn test_screen_time_youth() {
        let input = ScreenTimeInput {
            daily_hours: 8.0,
            age: 15.0,
        };
        let resp = screen_time(&input, &UserContext::default());
        assert!(resp.recommendation("High Screen Time").is_some());
        assert!(resp
            .recommendation("Above Recommended Youth Limits")
            .is_some());
        assert!(resp.summary.contains("122 days"));
    }

    #[test]
    fn test_life_expectancy_smoker() {
        let input = LifeExpectancyInput {
            current_age: 40.0,
            estimated_life_expectancy: 75.0,
            smoker: true,
            exercise_days_per_week: 1.0,
        };
        let resp = life_expectancy(&input, &UserContext::default());
        assert_eq!(resp.recommendations[0].title, "Quit Smoking");
        assert!(resp.recommendation("Move More").is_some());
        assert!(resp.summary.contains("35 more years"));
    }
}
