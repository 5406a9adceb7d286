//! Weighted-component scoring shared by the lifestyle and sleep scorers.

/// One 0–100 component score and its nominal weight.
#[derive(Debug, Clone, Copy)]
pub struct Component {
    pub score: Option<f64>,
    pub weight: f64,
}

impl Component {
    pub fn new(score: Option<f64>, weight: f64) -> Self {
        Self { score, weight }
    }
}

/// Weighted mean over the components that have a finite score, with the
/// weights renormalized to what is present. `None` when nothing is.
pub fn weighted_mean(components: &[Component]) -> Option<f64> {
    let (sum, weight_sum) = components
        .iter()
        .filter_map(|c| c.score.filter(|s| s.is_finite()).map(|s| (s, c.weight)))
        .fold((0.0, 0.0), |(sum, weight_sum), (score, weight)| {
            (sum + score * weight, weight_sum + weight)
        });

    if weight_sum > 0.0 {
        Some(sum / weight_sum)
    } else {
        None
    }
}

/// 100 inside `[opt_low, opt_high]`, falling linearly to 0 at `min` below
/// the band and at `max` above it.
pub fn range_score(x: f64, opt_low: f64, opt_high: f64, min: f64, max: f64) -> f64 {
    if x < opt_low {
        (100.0 - (opt_low - x) / (opt_low - min) * 100.0).clamp(0.0, 100.0)
    } else if x > opt_high {
        (100.0 - (x - opt_high) / (max - opt_high) * 100.0).clamp(0.0, 100.0)
    } else {
        100.0
    }
}
