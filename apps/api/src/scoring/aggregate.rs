use serde::{Deserialize, Serialize};

use super::ScoreBreakdown;

/// Per-dimension weights for the overall score. Sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    pub clarity: f64,
    pub specificity: f64,
    pub context: f64,
    pub structure: f64,
    pub domain_knowledge: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            clarity: 0.15,
            specificity: 0.25,
            context: 0.20,
            structure: 0.15,
            domain_knowledge: 0.25,
        }
    }
}

impl ScoringWeights {
    pub fn weighted_sum(&self, b: &ScoreBreakdown) -> f64 {
        f64::from(b.clarity) * self.clarity
            + f64::from(b.specificity) * self.specificity
            + f64::from(b.context) * self.context
            + f64::from(b.structure) * self.structure
            + f64::from(b.domain_knowledge) * self.domain_knowledge
    }
}

/// Weighted sum rounded to the nearest integer and clamped to [0, 100].
pub fn aggregate(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u32 {
    round_clamped(weights.weighted_sum(breakdown))
}

pub fn round_clamped(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn breakdown(v: [u32; 5]) -> ScoreBreakdown {
        ScoreBreakdown {
            clarity: v[0],
            specificity: v[1],
            context: v[2],
            structure: v[3],
            domain_knowledge: v[4],
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let sum = w.clarity + w.specificity + w.context + w.structure + w.domain_knowledge;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_breakdown_aggregates_to_same_value() {
        let w = ScoringWeights::default();
        assert_eq!(aggregate(&breakdown([70; 5]), &w), 70);
        assert_eq!(aggregate(&breakdown([0; 5]), &w), 0);
        assert_eq!(aggregate(&breakdown([100; 5]), &w), 100);
    }

    #[test]
    fn test_known_vector() {
        // 50*.15 + 40*.25 + 30*.2 + 35*.15 + 25*.25 = 35.0
        let w = ScoringWeights::default();
        assert_eq!(aggregate(&breakdown([50, 40, 30, 35, 25]), &w), 35);
    }

    #[test]
    fn test_aggregate_matches_weighted_round_on_random_vectors() {
        let w = ScoringWeights::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..500 {
            let v = [
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
                rng.gen_range(0..=100),
            ];
            let expected = (f64::from(v[0]) * 0.15
                + f64::from(v[1]) * 0.25
                + f64::from(v[2]) * 0.20
                + f64::from(v[3]) * 0.15
                + f64::from(v[4]) * 0.25)
                .round() as u32;
            let got = aggregate(&breakdown(v), &w);
            assert_eq!(got, expected, "vector {v:?}");
            assert!(got <= 100);
        }
    }

    #[test]
    fn test_round_clamped_bounds() {
        assert_eq!(round_clamped(-3.2), 0);
        assert_eq!(round_clamped(120.0), 100);
        assert_eq!(round_clamped(49.5), 50);
        assert_eq!(round_clamped(f64::NAN), 0);
    }
}
