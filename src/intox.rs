//! Intoxication accounting — how a night of drinks turns into a stage.
//!
//! Each drink contributes its pure-alcohol volume (`ml × abv / 100`); the
//! session total is scaled by the customer's tolerance and mapped onto
//! the discrete `IntoxStage` ladder. Points only accumulate during a
//! session, so the stage never moves backwards.

use crate::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Stage thresholds (points are ml of pure alcohol, tolerance-adjusted)
// ─────────────────────────────────────────────────────────────────────────────

const TIPSY_AT: f32 = 8.0;
const FLUSHED_AT: f32 = 16.0;
const WOOZY_AT: f32 = 26.0;
const SLOSHED_AT: f32 = 38.0;
const BLACKOUT_AT: f32 = 52.0;

/// Raw (tolerance-free) contribution of a single drink.
pub fn drink_points(drink: &Drink) -> f32 {
    drink.total_ml * drink.final_abv / 100.0
}

/// Total intoxication points for a session's served drinks, scaled by the
/// customer's tolerance. Weak drinkers accumulate 25% faster, strong
/// drinkers 25% slower.
pub fn points_for(drinks: &[Drink], tolerance: Tolerance) -> f32 {
    let raw: f32 = drinks.iter().map(drink_points).sum();
    raw * tolerance.multiplier()
}

/// Maps accumulated points onto the stage ladder. Monotone in points.
pub fn stage_for(points: f32) -> IntoxStage {
    if points >= BLACKOUT_AT {
        IntoxStage::Blackout
    } else if points >= SLOSHED_AT {
        IntoxStage::Sloshed
    } else if points >= WOOZY_AT {
        IntoxStage::Woozy
    } else if points >= FLUSHED_AT {
        IntoxStage::Flushed
    } else if points >= TIPSY_AT {
        IntoxStage::Tipsy
    } else {
        IntoxStage::Sober
    }
}
