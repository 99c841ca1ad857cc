//! Bar reputation — a slow-moving 0–5 score nudged by every customer.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Resource, Debug, Clone)]
pub struct Reputation {
    pub value: f32,
}

impl Default for Reputation {
    fn default() -> Self {
        Self {
            value: REPUTATION_START,
        }
    }
}

impl Reputation {
    /// Applies a delta, clamped into the 0–5 band.
    pub fn apply_delta(&mut self, delta: f32) {
        self.value = (self.value + delta).clamp(REPUTATION_MIN, REPUTATION_MAX);
    }
}

/// Folds each settled customer's reputation delta into the score.
pub fn apply_reputation(
    mut finished: EventReader<CustomerFinishedEvent>,
    mut reputation: ResMut<Reputation>,
) {
    for event in finished.read() {
        let before = reputation.value;
        reputation.apply_delta(event.result.reputation_delta);
        info!(
            "[Economy] Reputation {:+.2} from {} — {:.2} → {:.2}.",
            event.result.reputation_delta, event.result.customer_id, before, reputation.value
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reputation_starts_at_midpoint() {
        assert_eq!(Reputation::default().value, 2.5);
    }

    #[test]
    fn test_apply_delta_moves_and_clamps() {
        let mut rep = Reputation::default();
        rep.apply_delta(0.25);
        assert!((rep.value - 2.75).abs() < 1e-6);

        for _ in 0..20 {
            rep.apply_delta(0.25);
        }
        assert_eq!(rep.value, REPUTATION_MAX);

        for _ in 0..30 {
            rep.apply_delta(-0.5);
        }
        assert_eq!(rep.value, REPUTATION_MIN);
    }
}
