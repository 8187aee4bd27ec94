//! Synthetic per-slide trend data for the "Implementation Metrics" chart.
//!
//! There is no real data source: values ramp with the slide index and pick up
//! bounded random jitter, then get clamped to `[0, 100]`.

use rand::Rng;
use serde::Serialize;

/// Points per chart, one per day.
pub const CHART_HORIZON: usize = 7;

pub const METRIC_MIN: f64 = 0.0;
pub const METRIC_MAX: f64 = 100.0;

const EFFICIENCY_PHASE_STEP: f64 = 14.0;
const EFFICIENCY_DAY_STEP: f64 = 2.0;
const EFFICIENCY_JITTER: f64 = 10.0;
const ACCURACY_PHASE_STEP: f64 = 12.0;
const ACCURACY_DAY_STEP: f64 = 3.0;
const ACCURACY_JITTER: f64 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub day: String,
    pub efficiency: f64,
    pub accuracy: f64,
}

pub fn generate_chart_data<R: Rng + ?Sized>(phase: usize, rng: &mut R) -> Vec<ChartPoint> {
    let phase = phase as f64;
    (0..CHART_HORIZON)
        .map(|i| {
            let day = i as f64;
            let efficiency = phase * EFFICIENCY_PHASE_STEP
                + day * EFFICIENCY_DAY_STEP
                + rng.random_range(0.0..EFFICIENCY_JITTER);
            let accuracy = phase * ACCURACY_PHASE_STEP
                + day * ACCURACY_DAY_STEP
                + rng.random_range(0.0..ACCURACY_JITTER);
            ChartPoint {
                day: format!("Day {}", i + 1),
                efficiency: efficiency.clamp(METRIC_MIN, METRIC_MAX),
                accuracy: accuracy.clamp(METRIC_MIN, METRIC_MAX),
            }
        })
        .collect()
}

/// Fresh, unseeded data for `phase`.
pub fn chart_data_for(phase: usize) -> Vec<ChartPoint> {
    let points = generate_chart_data(phase, &mut rand::rng());
    tracing::trace!(phase, points = points.len(), "regenerated chart data");
    points
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, RngCore, SeedableRng};

    use super::*;

    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(self.0 as u8);
        }
    }

    fn assert_in_bounds(points: &[ChartPoint]) {
        assert_eq!(points.len(), CHART_HORIZON);
        for point in points {
            assert!((METRIC_MIN..=METRIC_MAX).contains(&point.efficiency), "{point:?}");
            assert!((METRIC_MIN..=METRIC_MAX).contains(&point.accuracy), "{point:?}");
        }
    }

    #[test]
    fn always_seven_points_within_bounds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for phase in 0..12 {
                assert_in_bounds(&generate_chart_data(phase, &mut rng));
            }
        }
    }

    #[test]
    fn extreme_jitter_draws_stay_clamped() {
        for bits in [0, u64::MAX] {
            for phase in 0..12 {
                assert_in_bounds(&generate_chart_data(phase, &mut ConstRng(bits)));
            }
        }
    }

    #[test]
    fn labels_days_one_through_seven() {
        let points = generate_chart_data(1, &mut StdRng::seed_from_u64(7));
        let labels: Vec<&str> = points.iter().map(|p| p.day.as_str()).collect();
        assert_eq!(
            labels,
            ["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7"]
        );
    }

    #[test]
    fn ramp_follows_phase_and_day_without_jitter() {
        let points = generate_chart_data(2, &mut ConstRng(0));
        assert_eq!(points[0].efficiency, 28.0);
        assert_eq!(points[0].accuracy, 24.0);
        assert_eq!(points[6].efficiency, 40.0);
        assert_eq!(points[6].accuracy, 42.0);
    }

    #[test]
    fn late_phases_saturate_at_the_ceiling() {
        let points = generate_chart_data(7, &mut ConstRng(0));
        assert_eq!(points[6].efficiency, METRIC_MAX);
        assert_eq!(points[6].accuracy, METRIC_MAX);
    }

    #[test]
    fn unseeded_generation_respects_bounds() {
        for phase in 0..8 {
            assert_in_bounds(&chart_data_for(phase));
        }
    }
}
