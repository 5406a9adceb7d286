//! Recommendations for the metrics that age the subject most.

use trueage_core::models::metric::MetricId;

use crate::bio_age::BioAgeScore;

/// How many age-worsening metrics contribute advice.
pub const TOP_FACTORS: usize = 3;

/// Shown when no metric pushes the estimate above chronological age.
pub const AFFIRMATION: &str = "Your markers look great. Keep it up!";

pub fn advice_for(id: MetricId) -> &'static [&'static str] {
    match id {
        MetricId::Bmi => &[
            "Control total calories and carbohydrates; prioritize protein",
            "Do resistance training at least twice a week",
        ],
        MetricId::Whtr => &[
            "Reduce abdominal fat by cutting sugar and alcohol",
            "Add core training such as planks and crunches",
        ],
        MetricId::Sbp => &[
            "Cut sodium and eat more potassium-rich produce",
            "Get 150 minutes of moderate aerobic exercise a week",
        ],
        MetricId::Dbp => &[
            "Manage stress with slow breathing",
            "Do regular aerobic endurance training",
        ],
        MetricId::Rhr => &[
            "Build aerobic endurance with running or swimming",
            "Protect sleep and recovery",
        ],
        MetricId::Vo2max => &[
            "Add high-intensity interval training",
            "Increase total aerobic volume",
        ],
        MetricId::Hdl => &[
            "Eat more healthy fats such as fish and nuts",
            "Stop smoking and stay aerobically active",
        ],
        MetricId::Ldl => &[
            "Cut saturated and trans fats",
            "Eat more dietary fiber",
        ],
        MetricId::Tg => &[
            "Limit refined sugar and alcohol",
            "Add omega-3 fatty acids",
        ],
        MetricId::Hba1c => &[
            "Favor low-glycemic-index foods",
            "Take a light walk after meals",
        ],
        MetricId::Fpg => &[
            "Eat fewer carbohydrates at dinner and skip late snacks",
            "Work on insulin sensitivity",
        ],
        MetricId::Crp => &[
            "Follow an anti-inflammatory diet rich in produce and fish",
            "Avoid late nights",
        ],
        MetricId::Egfr => &[
            "Stay well hydrated",
            "Use kidney-straining medications with care",
        ],
        MetricId::Alt => &[
            "Limit alcohol and lose excess weight",
            "Get screened for fatty liver",
        ],
        MetricId::Ast => &[
            "Limit alcohol and keep a regular routine",
            "Monitor liver function",
        ],
        MetricId::Uric => &[
            "Eat a low-purine diet and limit alcohol",
            "Drink more water",
        ],
        MetricId::Sleep => &[
            "Keep a fixed schedule with 7-9 hours of sleep",
            "Avoid blue light before bed",
        ],
    }
}

/// Advice for the top age-worsening metrics of `score`, in rank order, cut
/// to at most `limit` items.
pub fn select_advice(score: &BioAgeScore, limit: usize) -> Vec<String> {
    let mut advice: Vec<String> = score
        .breakdown
        .iter()
        .filter(|c| c.years > 0.0)
        .take(TOP_FACTORS)
        .flat_map(|c| advice_for(c.id).iter().map(|s| s.to_string()))
        .collect();

    if advice.is_empty() {
        advice.push(AFFIRMATION.to_string());
    }
    advice.truncate(limit);
    advice
}
