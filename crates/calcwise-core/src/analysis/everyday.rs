//! Math and utility generators

use serde::Deserialize;

use crate::format::{currency, currency_cents, number, percent};
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PercentageInput {
    pub value: f64,
    pub percentage: f64,
    pub result: f64,
    /// Percent change between two values, when that mode was used
    pub change_percent: f64,
}

pub fn percentage(input: &PercentageInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let result = if input.result != 0.0 {
        input.result
    } else {
        input.value * input.percentage / 100.0
    };
    let change = input.change_percent;

    if change.abs() > 50.0 {
        b.recommend(Recommendation::insight(
            Priority::Medium,
            "Large Change",
            format!(
                "A {} {} is substantial; check that both values use the same units.",
                percent(change.abs()),
                if change > 0.0 { "increase" } else { "decrease" }
            ),
        ));
    }

    if change != 0.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Percent vs. Percentage Points",
            "A change from 10% to 12% is 2 percentage points but a 20% increase. Say which one you mean.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Quick Check",
        format!(
            "10% of {} is {}; use that to sanity-check bigger percentages.",
            input.value,
            input.value / 10.0
        ),
    ));

    b.insight(format!(
        "{} of {} is {}",
        percent(input.percentage),
        input.value,
        result
    ));
    if change != 0.0 {
        b.insight(format!("Percent change: {}", percent(change)));
    }

    b.steps(["Round only the final answer to avoid compounding errors"]);

    b.build(if change != 0.0 {
        format!("The value changed by {}.", percent(change))
    } else {
        format!(
            "{} of {} is {}.",
            percent(input.percentage),
            input.value,
            result
        )
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GpaInput {
    #[serde(alias = "currentGpa")]
    pub gpa: f64,
    pub total_credits: f64,
    pub target_gpa: f64,
    pub planned_credits: f64,
}

pub fn gpa(input: &GpaInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let needed = if input.target_gpa > input.gpa && input.planned_credits > 0.0 {
        Some(
            (input.target_gpa * (input.total_credits + input.planned_credits)
                - input.gpa * input.total_credits)
                / input.planned_credits,
        )
    } else {
        None
    };

    if input.gpa > 0.0 && input.gpa < 2.0 {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Academic Probation Risk",
                "Most schools require a 2.0 to stay in good standing.",
            )
            .with_actions([
                "Meet with your academic advisor",
                "Use tutoring and office hours",
                "Consider a lighter course load next term",
            ]),
        );
    }

    match needed {
        Some(n) if n > 4.0 => {
            b.recommend(Recommendation::warning(
                Priority::Medium,
                "Target Not Reachable This Term",
                format!(
                    "Reaching {:.2} would need a {:.2} average over {} credits, above a 4.0.",
                    input.target_gpa, n, input.planned_credits
                ),
            ));
        }
        Some(n) => {
            b.recommend(Recommendation::opportunity(
                Priority::Medium,
                "Path to Your Target GPA",
                format!(
                    "Average {:.2} over your next {} credits to reach {:.2}.",
                    n, input.planned_credits, input.target_gpa
                ),
            ));
        }
        None => {}
    }

    if input.gpa >= 3.5 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Dean's List Territory",
            "Your GPA is strong. Highlight it on scholarship and internship applications.",
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Steady Progress",
        "Consistent grades in upcoming terms keep your GPA on track.",
    ));

    b.insight(format!("Current GPA: {:.2}", input.gpa));
    b.insight(format!("Credits completed: {}", input.total_credits));
    if let Some(n) = needed {
        b.insight(format!("Required term GPA: {:.2}", n));
    }

    if input.total_credits > 90.0 {
        b.risk("With many credits completed, each new term moves your GPA less");
    }

    b.steps(["Check your school's grading scale and repeat policy"]);

    b.build(format!(
        "Your GPA is {:.2} across {} credits.",
        input.gpa, input.total_credits
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TipInput {
    #[serde(alias = "bill")]
    pub bill_amount: f64,
    #[serde(alias = "tipPercentage")]
    pub tip_percent: f64,
    pub tip_amount: f64,
    #[serde(alias = "people")]
    pub number_of_people: f64,
    pub per_person: f64,
}

pub fn tip(input: &TipInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let tip = if input.tip_amount > 0.0 {
        input.tip_amount
    } else {
        input.bill_amount * input.tip_percent / 100.0
    };
    let total = input.bill_amount + tip;
    let people = input.number_of_people.max(1.0);
    let per_person = if input.per_person > 0.0 {
        input.per_person
    } else {
        total / people
    };

    if input.bill_amount > 0.0 && input.tip_percent < 15.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Below Customary Tip",
            "In the US, 15%-20% is customary for table service.",
        ));
    } else if input.tip_percent > 25.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Generous Tip",
            "Tipping above 25% is a generous thank-you for great service.",
        ));
    }

    if people > 1.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Splitting the Bill",
            format!(
                "Each of {} people pays {}.",
                people,
                currency_cents(per_person)
            ),
        ));
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Standard Tip",
        "Your tip is in the customary range.",
    ));

    b.insight(format!("Tip: {}", currency_cents(tip)));
    b.insight(format!("Total: {}", currency_cents(total)));
    if people > 1.0 {
        b.insight(format!("Per person: {}", currency_cents(per_person)));
    }

    b.steps(["Check whether a service charge is already included"]);

    b.build(format!(
        "A {} tip on {} brings the total to {}.",
        percent(input.tip_percent),
        currency_cents(input.bill_amount),
        currency_cents(total)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscountInput {
    #[serde(alias = "price")]
    pub original_price: f64,
    pub discount_percent: f64,
    pub final_price: f64,
    pub savings: f64,
}

pub fn discount(input: &DiscountInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let savings = if input.savings > 0.0 {
        input.savings
    } else {
        input.original_price * input.discount_percent / 100.0
    };
    let final_price = if input.final_price > 0.0 {
        input.final_price
    } else {
        input.original_price - savings
    };

    if input.discount_percent >= 50.0 {
        b.recommend(Recommendation::insight(
            Priority::Medium,
            "Deep Discount",
            "Check the price history; some retailers inflate the original price before a sale.",
        ));
    } else if input.discount_percent > 0.0 && input.discount_percent < 10.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Small Discount",
            "Bigger sales often come around holidays. Waiting may save more if you don't need it now.",
        ));
    }

    b.recommend(
        Recommendation::opportunity(
            Priority::Low,
            "Stack Your Savings",
            "Cashback portals, card rewards, and coupon codes often combine with sale prices.",
        )
        .with_actions(["Search for a coupon code before checkout"]),
    );

    b.insight(format!("You save {}", currency_cents(savings)));
    b.insight(format!("Final price: {}", currency_cents(final_price)));

    b.risk("A discount only saves money on something you planned to buy");

    b.steps(["Compare the final price at one or two other stores"]);

    b.build(format!(
        "{} off {} brings the price to {}, saving {}.",
        percent(input.discount_percent),
        currency_cents(input.original_price),
        currency_cents(final_price),
        currency_cents(savings)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuelCostInput {
    pub distance: f64,
    /// Miles per gallon
    #[serde(alias = "mpg")]
    pub fuel_efficiency: f64,
    #[serde(alias = "gasPrice")]
    pub fuel_price: f64,
    pub total_cost: f64,
    pub trips_per_month: f64,
}

pub fn fuel_cost(input: &FuelCostInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let gallons = if input.fuel_efficiency > 0.0 {
        input.distance / input.fuel_efficiency
    } else {
        0.0
    };
    let trip_cost = if input.total_cost > 0.0 {
        input.total_cost
    } else {
        gallons * input.fuel_price
    };
    let trips = if input.trips_per_month > 0.0 {
        input.trips_per_month
    } else {
        1.0
    };
    let annual = trip_cost * trips * 12.0;

    if input.fuel_efficiency > 0.0 && input.fuel_efficiency < 25.0 {
        let efficient = input.distance / 35.0 * input.fuel_price * trips * 12.0;
        b.recommend(
            Recommendation::optimization(
                Priority::Medium,
                "Low Fuel Efficiency",
                format!(
                    "At {} mpg, a 35 mpg vehicle would cut this driving cost by {} a year.",
                    number(input.fuel_efficiency),
                    currency(annual - efficient)
                ),
            )
            .with_savings(annual - efficient),
        );
    }

    if trip_cost * trips > 200.0 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Carpool or Combine Trips",
                "Sharing rides or batching errands can cut fuel spending by a fifth.",
            )
            .with_savings(annual * 0.2),
        );
    }

    b.recommend(
        Recommendation::opportunity(
            Priority::Low,
            "Keep Tires Inflated",
            "Properly inflated tires improve mileage by up to 3%.",
        )
        .with_savings(annual * 0.03),
    );

    b.insight(format!("Cost per trip: {}", currency_cents(trip_cost)));
    b.insight(format!("Monthly fuel cost: {}", currency(trip_cost * trips)));
    b.insight(format!("Annual fuel cost: {}", currency(annual)));

    b.risk("Fuel prices can swing 20% or more within a year");

    b.steps(["Use a fuel price app to find cheaper stations nearby"]);

    let summary = if input.fuel_efficiency > 0.0 {
        format!(
            "Driving {} miles at {} mpg costs {} per trip, about {} a year.",
            number(input.distance),
            number(input.fuel_efficiency),
            currency_cents(trip_cost),
            currency(annual)
        )
    } else {
        format!(
            "Driving {} miles costs {} per trip, about {} a year. Add your vehicle's mpg for a fuller picture.",
            number(input.distance),
            currency_cents(trip_cost),
            currency(annual)
        )
    };
    b.build(summary)
}
