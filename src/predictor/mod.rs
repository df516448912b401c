//! Placeholder delay predictor.
//!
//! Generates synthetic predictions without consulting query history. A real
//! model would take the route, stop, and requested time into account; until
//! one exists the values are drawn uniformly from fixed ranges.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Predictions at or below this many minutes count as on time. Applied to
/// the prediction label, the dashboard percentage, and the per-route
/// percentage alike.
pub const ON_TIME_THRESHOLD_MINUTES: i64 = 2;

const MAX_DELAY_MINUTES: i64 = 15;
const CONFIDENCE_RANGE: std::ops::RangeInclusive<i64> = 70..=95;

const WEATHER_CONDITIONS: [&str; 4] = ["Clear", "Rainy", "Cloudy", "Snowy"];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DelayLabel {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
}

impl DelayLabel {
    pub fn from_delay(delay_minutes: i64) -> Self {
        if delay_minutes <= ON_TIME_THRESHOLD_MINUTES {
            DelayLabel::OnTime
        } else {
            DelayLabel::Delayed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DelayLabel::OnTime => "On Time",
            DelayLabel::Delayed => "Delayed",
        }
    }
}

/// One synthetic prediction.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub delay_minutes: i64,
    pub confidence: f64,
    pub weather: &'static str,
    pub label: DelayLabel,
}

impl Prediction {
    /// Draws a prediction: delay in 0..=15 minutes, confidence in 70..=95
    /// percent, and one of the fixed weather conditions.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let delay_minutes = rng.gen_range(0..=MAX_DELAY_MINUTES);
        let confidence = rng.gen_range(CONFIDENCE_RANGE) as f64;
        let weather = *WEATHER_CONDITIONS
            .choose(rng)
            .unwrap_or(&WEATHER_CONDITIONS[0]);

        Self {
            delay_minutes,
            confidence,
            weather,
            label: DelayLabel::from_delay(delay_minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let prediction = Prediction::generate(&mut rng);
            assert!((0..=15).contains(&prediction.delay_minutes));
            assert!(prediction.confidence >= 70.0 && prediction.confidence <= 95.0);
            assert!(WEATHER_CONDITIONS.contains(&prediction.weather));
        }
    }

    #[test]
    fn label_matches_threshold() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let prediction = Prediction::generate(&mut rng);
            let expected = prediction.delay_minutes <= ON_TIME_THRESHOLD_MINUTES;
            assert_eq!(prediction.label == DelayLabel::OnTime, expected);
        }
    }

    #[test]
    fn label_boundary_cases() {
        assert_eq!(DelayLabel::from_delay(0), DelayLabel::OnTime);
        assert_eq!(DelayLabel::from_delay(2), DelayLabel::OnTime);
        assert_eq!(DelayLabel::from_delay(3), DelayLabel::Delayed);
        assert_eq!(DelayLabel::from_delay(-5), DelayLabel::OnTime);
    }

    #[test]
    fn label_serializes_with_spaces() {
        let json = serde_json::to_string(&DelayLabel::OnTime).unwrap();
        assert_eq!(json, "\"On Time\"");
        let json = serde_json::to_string(&DelayLabel::Delayed).unwrap();
        assert_eq!(json, "\"Delayed\"");
    }
}
