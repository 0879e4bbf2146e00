//! Health and fitness generators
//!
//! Weights are kilograms and heights centimeters. Guidance is general
//! wellness information, so every response ends by pointing to a clinician.

use serde::Deserialize;
use serde_json::Value;

use crate::format::number;
use crate::models::{AnalysisResponse, Priority, Recommendation, UserContext};

use super::builder::ResponseBuilder;

const SEE_A_PROFESSIONAL: &str = "Talk with a healthcare provider before making major changes";

fn is_female(gender: Option<&str>) -> bool {
    matches!(
        gender.map(|g| g.trim().to_ascii_lowercase()).as_deref(),
        Some("female" | "f" | "woman")
    )
}

fn age_or_context(age: f64, ctx: &UserContext) -> Option<f64> {
    if age > 0.0 {
        Some(age)
    } else {
        ctx.age.map(f64::from)
    }
}

fn height_m(height_cm: f64) -> f64 {
    height_cm / 100.0
}

/// Standard adult BMI categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "underweight" => Some(BmiCategory::Underweight),
            "normal" | "normal weight" | "healthy" => Some(BmiCategory::Normal),
            "overweight" => Some(BmiCategory::Overweight),
            "obese" | "obesity" => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal weight",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BmiInput {
    pub bmi: f64,
    pub weight: f64,
    pub height: f64,
    pub category: Option<String>,
}

pub fn bmi(input: &BmiInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let h = height_m(input.height);
    let value = if input.bmi > 0.0 {
        Some(input.bmi)
    } else if h > 0.0 && input.weight > 0.0 {
        Some(input.weight / (h * h))
    } else {
        None
    };
    let category = value.map(BmiCategory::from_bmi).or_else(|| {
        input
            .category
            .as_deref()
            .and_then(BmiCategory::from_label)
    });

    match category {
        None => b.recommend(
            Recommendation::insight(
                Priority::Low,
                "Add Your Height and Weight",
                "BMI needs both height and weight. Enter both to see which range you fall in.",
            )
            .with_actions(["Measure height without shoes for an accurate reading"]),
        ),
        Some(BmiCategory::Underweight) => b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "Below Healthy Weight Range",
                "A BMI under 18.5 can signal nutritional gaps or underlying health issues.",
            )
            .with_actions([
                "Add nutrient-dense foods like nuts, dairy, and whole grains",
                "Include strength training to build muscle",
                "Discuss your weight with a doctor",
            ]),
        ),
        Some(BmiCategory::Normal) => b.recommend(
            Recommendation::insight(
                Priority::Low,
                "Healthy Weight Range",
                "Your BMI is in the healthy range. Focus on maintaining your habits.",
            )
            .with_actions(["Keep up 150 minutes of weekly activity"]),
        ),
        Some(BmiCategory::Overweight) => b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Small Changes, Big Results",
                "Losing 5%-10% of body weight measurably lowers blood pressure and diabetes risk.",
            )
            .with_actions([
                "Aim for a 300-500 calorie daily deficit",
                "Walk 30 minutes most days",
                "Cut back on sugary drinks",
            ]),
        ),
        Some(BmiCategory::Obese) => b.recommend(
            Recommendation::warning(
                Priority::High,
                "Weight-Related Health Risk",
                "A BMI of 30 or more raises the risk of heart disease, diabetes, and joint problems.",
            )
            .with_actions([
                "Schedule a check-up to review blood pressure and blood sugar",
                "Ask about a supervised weight management plan",
            ]),
        ),
    };

    match (value, category) {
        (Some(v), Some(c)) => b.insight(format!("BMI: {:.1} ({})", v, c.as_str())),
        (None, Some(c)) => b.insight(format!("BMI category: {}", c.as_str())),
        _ => b.insight("BMI could not be calculated without height and weight"),
    };
    if h > 0.0 {
        b.insight(format!(
            "Healthy weight for your height: {:.1}-{:.1} kg",
            18.5 * h * h,
            24.9 * h * h
        ));
    }

    b.risk("BMI does not distinguish muscle from fat");
    if category == Some(BmiCategory::Obese) {
        b.risk("Elevated risk of type 2 diabetes and cardiovascular disease");
    }

    b.steps(["Track your weight trend monthly", SEE_A_PROFESSIONAL]);

    let summary = match (value, category) {
        (Some(v), Some(c)) => format!("Your BMI of {:.1} falls in the {} category.", v, c.as_str()),
        (None, Some(c)) => format!("Your BMI falls in the {} category.", c.as_str()),
        _ => "Enter your height and weight to see your BMI category.".to_string(),
    };
    b.build(summary)
}

/// Activity multiplier for a level name or an explicit factor
fn activity_factor(level: &Value) -> f64 {
    match level {
        Value::Number(n) => n.as_f64().filter(|f| *f >= 1.0).unwrap_or(1.2),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "sedentary" => 1.2,
            "light" | "lightly active" => 1.375,
            "moderate" | "moderately active" => 1.55,
            "active" | "very active" => 1.725,
            "extra" | "extra active" | "athlete" => 1.9,
            _ => 1.2,
        },
        _ => 1.2,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalorieInput {
    pub age: f64,
    pub gender: Option<String>,
    pub weight: f64,
    pub height: f64,
    pub activity_level: Value,
    pub bmr: f64,
    pub tdee: f64,
    /// "lose", "maintain", or "gain"
    pub goal: Option<String>,
    pub target_calories: f64,
}

pub fn calorie(input: &CalorieInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let female = is_female(input.gender.as_deref());
    let age = age_or_context(input.age, ctx).unwrap_or(30.0);
    // Mifflin-St Jeor
    let bmr = if input.bmr > 0.0 {
        input.bmr
    } else {
        let offset = if female { -161.0 } else { 5.0 };
        (10.0 * input.weight + 6.25 * input.height - 5.0 * age + offset).max(0.0)
    };
    let factor = activity_factor(&input.activity_level);
    let tdee = if input.tdee > 0.0 { input.tdee } else { bmr * factor };
    let goal = input
        .goal
        .as_deref()
        .map(|g| g.trim().to_ascii_lowercase())
        .unwrap_or_else(|| "maintain".to_string());
    let target = if input.target_calories > 0.0 {
        input.target_calories
    } else {
        match goal.as_str() {
            "lose" => tdee - 500.0,
            "gain" => tdee + 300.0,
            _ => tdee,
        }
    };
    let floor = if female { 1_200.0 } else { 1_500.0 };

    if target > 0.0 && target < floor {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Calorie Target Too Low",
            format!(
                "Eating under {} calories a day makes it hard to meet nutrient needs.",
                number(floor)
            ),
        ));
    }

    if goal == "lose" && tdee - target > 1_000.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Aggressive Deficit",
            "A deficit over 1,000 calories a day risks muscle loss. Aim for 0.5-1 kg per week.",
        ));
    }

    if input.weight > 0.0 {
        b.recommend(Recommendation::opportunity(
            Priority::Medium,
            "Prioritize Protein",
            format!(
                "About {} g of protein a day supports muscle while you {} weight.",
                number(input.weight * 1.6),
                if goal == "gain" { "gain" } else { "manage" }
            ),
        ));
    }

    if factor <= 1.2 {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Add Daily Movement",
                "Moving from sedentary to lightly active burns roughly 15% more energy each day.",
            )
            .with_actions(["Take a 10-minute walk after meals"]),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Balanced Energy Plan",
        "Your calorie target fits your goal and activity level.",
    ));

    b.insight(format!("BMR: {} calories", number(bmr)));
    b.insight(format!("Maintenance (TDEE): {} calories", number(tdee)));
    b.insight(format!("Daily target: {} calories", number(target)));

    b.risk("Calorie formulas can be off by 10% or more for individuals");

    b.steps([
        "Log meals for two weeks to calibrate",
        "Adjust the target based on your weekly weight trend",
        SEE_A_PROFESSIONAL,
    ]);

    b.build(format!(
        "You burn about {} calories a day; to {} weight, aim for {} calories.",
        number(tdee),
        goal,
        number(target)
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BodyFatInput {
    #[serde(alias = "bodyFat")]
    pub body_fat_percent: f64,
    pub gender: Option<String>,
    pub weight: f64,
}

pub fn body_fat(input: &BodyFatInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let female = is_female(input.gender.as_deref());
    let pct = input.body_fat_percent;
    // essential, athletic, fitness, average upper bounds
    let [essential, athletic, fitness, average] = if female {
        [14.0, 21.0, 25.0, 32.0]
    } else {
        [6.0, 14.0, 18.0, 25.0]
    };
    let label = if pct < essential {
        "below essential"
    } else if pct < athletic {
        "athletic"
    } else if pct < fitness {
        "fitness"
    } else if pct < average {
        "average"
    } else {
        "obese"
    };

    if pct < essential {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Body Fat Below Essential Levels",
            "Very low body fat can disrupt hormones and immune function.",
        ));
    } else if pct >= average {
        b.recommend(
            Recommendation::warning(
                Priority::High,
                "Body Fat in Obese Range",
                format!(
                    "{:.1}% body fat raises cardiovascular and metabolic risk.",
                    pct
                ),
            )
            .with_actions([
                "Combine strength training with a modest calorie deficit",
                "Have blood pressure and cholesterol checked",
            ]),
        );
    } else if pct >= fitness {
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Add Strength Training",
                "Two to three resistance sessions a week shift body composition toward lean mass.",
            )
            .with_actions(["Start with compound lifts: squats, rows, presses"]),
        );
    } else {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Healthy Body Composition",
            format!("You're in the {} range. Maintain it with consistent training.", label),
        ));
    }

    b.insight(format!("Body fat: {:.1}% ({})", pct, label));
    if input.weight > 0.0 {
        let fat = input.weight * pct / 100.0;
        b.insight(format!("Fat mass: {:.1} kg", fat));
        b.insight(format!("Lean mass: {:.1} kg", input.weight - fat));
    }

    b.risk("Home measurement methods can vary by several percentage points");

    b.steps(["Re-measure monthly under the same conditions", SEE_A_PROFESSIONAL]);

    b.build(format!(
        "Your body fat of {:.1}% is in the {} range for {}.",
        pct,
        label,
        if female { "women" } else { "men" }
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdealWeightInput {
    #[serde(alias = "weight")]
    pub current_weight: f64,
    pub height: f64,
    pub gender: Option<String>,
    pub ideal_weight_low: f64,
    pub ideal_weight_high: f64,
}

pub fn ideal_weight(input: &IdealWeightInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let h = height_m(input.height);
    let low = if input.ideal_weight_low > 0.0 {
        input.ideal_weight_low
    } else {
        18.5 * h * h
    };
    let high = if input.ideal_weight_high > 0.0 {
        input.ideal_weight_high
    } else {
        24.9 * h * h
    };
    let current = input.current_weight;

    if current > high && high > 0.0 {
        let diff = current - high;
        b.recommend(
            Recommendation::opportunity(
                Priority::Medium,
                "Gradual Weight Loss",
                format!(
                    "You're {:.1} kg above your ideal range. At 0.5 kg a week that's about {} weeks.",
                    diff,
                    (diff / 0.5).ceil()
                ),
            )
            .with_actions(["Set a 500 calorie daily deficit", "Track progress weekly"]),
        );
    } else if current > 0.0 && current < low {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Below Your Ideal Range",
            format!(
                "You're {:.1} kg under the low end of your ideal range.",
                low - current
            ),
        ));
    } else {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Within Your Ideal Range",
            "Your weight is in a healthy range for your height.",
        ));
    }

    b.insight(format!("Ideal range: {:.1}-{:.1} kg", low, high));
    if input.height > 0.0 {
        // Devine formula
        let inches_over_five_feet = (input.height / 2.54 - 60.0).max(0.0);
        let base = if is_female(input.gender.as_deref()) { 45.5 } else { 50.0 };
        b.insight(format!(
            "Devine formula estimate: {:.1} kg",
            base + 2.3 * inches_over_five_feet
        ));
    }

    b.risk("Ideal weight formulas ignore frame size and muscle mass");

    b.steps(["Focus on habits rather than a single number", SEE_A_PROFESSIONAL]);

    b.build(format!(
        "Your ideal weight range is {:.1}-{:.1} kg; you currently weigh {:.1} kg.",
        low, high, current
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaterIntakeInput {
    pub weight: f64,
    #[serde(alias = "exerciseMinutes")]
    pub activity_minutes: f64,
    pub recommended_liters: f64,
    /// Liters per day
    pub current_intake: f64,
}

pub fn water_intake(input: &WaterIntakeInput, _ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let recommended = if input.recommended_liters > 0.0 {
        input.recommended_liters
    } else {
        input.weight * 0.033 + input.activity_minutes / 30.0 * 0.35
    };

    if input.current_intake > 0.0 && input.current_intake < recommended * 0.75 {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "You May Be Under-Hydrated",
                format!(
                    "You drink {:.1} L against a target of {:.1} L.",
                    input.current_intake, recommended
                ),
            )
            .with_actions([
                "Keep a refillable bottle within reach",
                "Drink a glass of water with every meal",
            ]),
        );
    } else if input.current_intake > 4.0 && input.current_intake > recommended * 1.8 {
        b.recommend(Recommendation::warning(
            Priority::Low,
            "Very High Water Intake",
            "Drinking far beyond your needs can dilute blood sodium.",
        ));
    }

    b.recommend(Recommendation::opportunity(
        Priority::Low,
        "Build a Hydration Habit",
        "Tie drinking water to routines you already have, like brushing teeth or starting work.",
    ));

    b.insight(format!("Recommended daily intake: {:.1} L", recommended));
    b.insight(format!("About {} glasses of water", (recommended / 0.25).round()));
    if input.activity_minutes > 0.0 {
        b.insight(format!(
            "Exercise adds about {:.1} L",
            input.activity_minutes / 30.0 * 0.35
        ));
    }

    b.risk("Hot weather and illness raise fluid needs");

    b.steps(["Check urine color as a quick hydration gauge", SEE_A_PROFESSIONAL]);

    b.build(format!(
        "You need about {:.1} L of water a day based on your weight and activity.",
        recommended
    ))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeartRateInput {
    pub age: f64,
    pub resting_heart_rate: f64,
    pub max_heart_rate: f64,
}

pub fn heart_rate(input: &HeartRateInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let age = age_or_context(input.age, ctx).unwrap_or(30.0);
    let max = if input.max_heart_rate > 0.0 {
        input.max_heart_rate
    } else {
        220.0 - age
    };
    let resting = input.resting_heart_rate;

    if resting > 100.0 {
        b.recommend(Recommendation::warning(
            Priority::High,
            "Elevated Resting Heart Rate",
            format!(
                "A resting rate of {} bpm is above the normal range. Have it checked by a doctor.",
                resting
            ),
        ));
    } else if resting > 80.0 {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "Resting Heart Rate Is on the High Side",
                "Regular aerobic exercise, better sleep, and less caffeine can bring it down.",
            )
            .with_actions(["Add three 30-minute cardio sessions a week"]),
        );
    } else if resting > 0.0 && resting < 40.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Unusually Low Resting Heart Rate",
            "Below 40 bpm is common only in trained athletes. Mention it to your doctor if you feel dizzy or tired.",
        ));
    } else if resting > 0.0 && resting < 60.0 {
        b.recommend(Recommendation::insight(
            Priority::Low,
            "Athletic Resting Heart Rate",
            "A low resting rate usually reflects good cardiovascular fitness.",
        ));
    }

    b.recommend(Recommendation::opportunity(
        Priority::Low,
        "Train in Zone 2",
        format!(
            "Most aerobic gains come from steady work at {}-{} bpm.",
            (max * 0.6).round(),
            (max * 0.7).round()
        ),
    ));

    b.insight(format!("Estimated max heart rate: {} bpm", max.round()));
    b.insight(format!(
        "Moderate intensity: {}-{} bpm",
        (max * 0.5).round(),
        (max * 0.7).round()
    ));
    b.insight(format!(
        "Vigorous intensity: {}-{} bpm",
        (max * 0.7).round(),
        (max * 0.85).round()
    ));

    b.risk("Medications such as beta blockers change heart rate targets");

    b.steps(["Measure resting rate first thing in the morning", SEE_A_PROFESSIONAL]);

    b.build(if resting > 0.0 {
        format!(
            "Your resting heart rate is {} bpm with an estimated max of {} bpm.",
            resting,
            max.round()
        )
    } else {
        format!("Your estimated max heart rate is {} bpm.", max.round())
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SleepInput {
    pub age: f64,
    #[serde(alias = "hoursOfSleep")]
    pub hours_per_night: f64,
    pub wake_ups: f64,
}

/// Recommended nightly sleep range in hours
fn sleep_range(age: f64) -> (f64, f64) {
    if age < 13.0 {
        (9.0, 12.0)
    } else if age < 18.0 {
        (8.0, 10.0)
    } else if age < 65.0 {
        (7.0, 9.0)
    } else {
        (7.0, 8.0)
    }
}

pub fn sleep(input: &SleepInput, ctx: &UserContext) -> AnalysisResponse {
    let mut b = ResponseBuilder::new();

    let age = age_or_context(input.age, ctx).unwrap_or(30.0);
    let (min, max) = sleep_range(age);
    let hours = input.hours_per_night;

    if hours < min {
        let priority = if hours < 6.0 {
            Priority::High
        } else {
            Priority::Medium
        };
        b.recommend(
            Recommendation::warning(
                priority,
                "Not Enough Sleep",
                format!(
                    "You average {:.1} hours; {}-{} hours is recommended at your age.",
                    hours, min, max
                ),
            )
            .with_actions([
                "Set a consistent bedtime, even on weekends",
                "Stop screens an hour before bed",
                "Keep the bedroom cool and dark",
            ]),
        );
    } else if hours > max + 1.0 {
        b.recommend(Recommendation::warning(
            Priority::Medium,
            "Sleeping More Than Recommended",
            "Regularly sleeping well beyond the recommended range can signal other health issues.",
        ));
    }

    if input.wake_ups >= 3.0 {
        b.recommend(
            Recommendation::warning(
                Priority::Medium,
                "Frequent Night Waking",
                format!(
                    "Waking {} times a night fragments sleep and reduces its quality.",
                    input.wake_ups
                ),
            )
            .with_actions(["Limit alcohol and caffeine after noon"]),
        );
    }

    b.otherwise(Recommendation::insight(
        Priority::Low,
        "Healthy Sleep Pattern",
        "You're getting the recommended amount of sleep.",
    ));

    b.insight(format!("Recommended: {}-{} hours", min, max));
    b.insight(format!("You average: {:.1} hours", hours));
    if hours < min {
        b.insight(format!(
            "Weekly sleep debt: {:.1} hours",
            (min - hours) * 7.0
        ));
    }

    if hours < 6.0 {
        b.risk("Chronic short sleep is linked to heart disease and weakened immunity");
    }
    b.risk("Persistent poor sleep can indicate a sleep disorder");

    b.steps(["Keep a sleep diary for two weeks", SEE_A_PROFESSIONAL]);

    b.build(format!(
        "You sleep {:.1} hours a night against a recommended {}-{} hours.",
        hours, min, max
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_category_bounds() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_drives_guidance() {
        let input = BmiInput {
            weight: 100.0,
            height: 175.0,
            ..Default::default()
        };
        let resp = bmi(&input, &UserContext::default());
        assert_eq!(resp.recommendations[0].title, "Weight-Related Health Risk");
        assert_eq!(resp.recommendations[0].priority, Priority::High);
        assert!(resp.summary.contains("32.7"));

        let input = BmiInput {
            bmi: 22.0,
            ..Default::default()
        };
        let resp = bmi(&input, &UserContext::default());
        assert_eq!(resp.recommendations[0].title, "Healthy Weight Range");
    }

    #[test]
    fn test_bmi_falls_back_to_label() {
        let input = BmiInput {
            category: Some("Underweight".into()),
            ..Default::default()
        };
        let resp = bmi(&input, &UserContext::default());
        assert_eq!(resp.recommendations[0].title, "Below Healthy Weight Range");
    }

    #[test]
    fn test_calorie_target_floor() {
        let input = CalorieInput {
            gender: Some("female".into()),
            weight: 50.0,
            height: 155.0,
            age: 60.0,
            goal: Some("lose".into()),
            ..Default::default()
        };
        let resp = calorie(&input, &UserContext::default());
        assert!(resp.recommendation("Calorie Target Too Low").is_some());
        assert!(resp.recommendation("Add Daily Movement").is_some());
    }

    #[test]
    fn test_body_fat_ranges() {
        let input = BodyFatInput {
            body_fat_percent: 28.0,
            gender: Some("male".into()),
            weight: 90.0,
        };
        let resp = body_fat(&input, &UserContext::default());
        assert!(resp.recommendation("Body Fat in Obese Range").is_some());

        let input = BodyFatInput {
            body_fat_percent: 28.0,
            gender: Some("female".into()),
            weight: 70.0,
        };
        let resp = body_fat(&input, &UserContext::default());
        assert!(resp.recommendation("Add Strength Training").is_some());
    }

    #[test]
    fn test_heart_rate_elevated_uses_context_age() {
        let input = HeartRateInput {
            resting_heart_rate: 105.0,
            ..Default::default()
        };
        let ctx = UserContext {
            age: Some(40),
            ..Default::default()
        };
        let resp = heart_rate(&input, &ctx);
        assert_eq!(resp.recommendations[0].priority, Priority::High);
        assert!(resp.summary.contains("180 bpm"));
    }

    #[test]
    fn test_sleep_short() {
        let input = SleepInput {
            age: 35.0,
            hours_per_night: 5.5,
            wake_ups: 3.0,
        };
        let resp = sleep(&input, &UserContext::default());
        assert_eq!(
            resp.recommendation("Not Enough Sleep").unwrap().priority,
            Priority::High
        );
        assert!(resp.recommendation("Frequent Night Waking").is_some());
        assert!(resp
            .key_insights
            .iter()
            .any(|i| i == "Weekly sleep debt: 10.5 hours"));
    }

    #[test]
    fn test_ideal_weight_above_range() {
        let input = IdealWeightInput {
            current_weight: 85.0,
            height: 170.0,
            ..Default::default()
        };
        let resp = ideal_weight(&input, &UserContext::default());
        assert!(resp.recommendation("Gradual Weight Loss").is_some());
    }

    #[test]
    fn test_water_under_hydrated() {
        let input = WaterIntakeInput {
            weight: 80.0,
            activity_minutes: 60.0,
            current_intake: 1.5,
            ..Default::default()
        };
        let resp = water_intake(&input, &UserContext::default());
        assert!(resp.recommendation("You May Be Under-Hydrated").is_some());
    }
}
