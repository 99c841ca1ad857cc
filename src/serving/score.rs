//! Pure scoring: how a drink measures up to an order.
//!
//! Satisfaction is a composite of four parts:
//! - emotion match: how close the blend sits to the order's keywords,
//! - ABV fit: whether the proof lands inside the requested range,
//! - serve-ware correctness: technique / glass / garnish expectations,
//! - ice preference: a flat bonus or penalty when ice was used.
//!
//! The raw composite runs 0–100. The presented score is `raw × 1.2` plus
//! the ice adjustment, clamped to 0–135 — a perfect drink with a welcome
//! ice cube lands exactly on the ceiling.

use crate::intox;
use crate::shared::*;

/// Weighting of the three raw components. Sums to 1.
const EMOTION_WEIGHT: f32 = 0.55;
const ABV_WEIGHT: f32 = 0.30;
const META_WEIGHT: f32 = 0.15;

/// Serve-ware split inside the meta component.
const TECHNIQUE_SHARE: f32 = 0.4;
const GLASS_SHARE: f32 = 0.3;
const GARNISH_SHARE: f32 = 0.3;

// ─────────────────────────────────────────────────────────────────────────────
// Components
// ─────────────────────────────────────────────────────────────────────────────

/// Similarity between the drink's blend and the order's keyword profile,
/// in [0, 1]. The target is the mean of the keyword distributions;
/// matching uses histogram intersection. An order with no resolvable
/// keywords is trivially satisfied.
pub fn emotion_match(drink: &Drink, order: &Order, keywords: &KeywordRegistry) -> f32 {
    let mut target = EmotionVector::ZERO;
    let mut found = 0;
    for id in &order.keywords {
        if let Some(def) = keywords.get(id) {
            target = target.add_weighted(&def.profile, 1.0);
            found += 1;
        }
    }
    if found == 0 {
        return 1.0;
    }
    drink.emotions.overlap(&target.normalized(found as f32))
}

/// 1.0 inside the requested range, decaying linearly to 0 over
/// `ABV_FALLOFF` percentage points outside it.
pub fn abv_fit(final_abv: f32, order: &Order) -> f32 {
    if order.abv_in_range(final_abv) {
        return 1.0;
    }
    let distance = if final_abv < order.abv_min {
        order.abv_min - final_abv
    } else {
        final_abv - order.abv_max
    };
    (1.0 - distance / ABV_FALLOFF).max(0.0)
}

/// Serve-ware correctness in [0, 1]. Each component the order leaves
/// unspecified is a free pass; a stated expectation must be met.
pub fn meta_correctness(meta: &ServeMeta, order: &Order) -> f32 {
    let technique_ok = match &order.expected_technique {
        Some(expected) => meta.technique.as_ref() == Some(expected),
        None => true,
    };
    let glass_ok = match &order.expected_glass {
        Some(expected) => meta.glass.as_ref() == Some(expected),
        None => true,
    };
    let garnish_ok = match &order.expected_garnish {
        Some(expected) => meta.garnishes.contains(expected),
        None => true,
    };

    let mut score = 0.0;
    if technique_ok {
        score += TECHNIQUE_SHARE;
    }
    if glass_ok {
        score += GLASS_SHARE;
    }
    if garnish_ok {
        score += GARNISH_SHARE;
    }
    score
}

/// Flat adjustment applied after scaling. Only ice actually in the drink
/// counts — a preference for ice that went unserved is neutral.
pub fn ice_adjustment(preference: IcePreference, used_ice: bool) -> f32 {
    if !used_ice {
        return 0.0;
    }
    match preference {
        IcePreference::Like => ICE_LIKED_BONUS,
        IcePreference::Dislike => ICE_DISLIKED_PENALTY,
        IcePreference::Neutral => 0.0,
    }
}

/// Tips step with the presented score; they stay integral by design.
pub fn tip_for(satisfaction: f32) -> i64 {
    match satisfaction {
        s if s >= 115.0 => 18,
        s if s >= 95.0 => 12,
        s if s >= 70.0 => 8,
        s if s >= 45.0 => 4,
        s if s >= WALK_AWAY_THRESHOLD => 1,
        _ => 0,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-drink and per-customer results
// ─────────────────────────────────────────────────────────────────────────────

/// Scores one served drink against its order.
pub fn score_drink(
    order: &Order,
    drink: &Drink,
    meta: &ServeMeta,
    profile: &CustomerProfile,
    keywords: &KeywordRegistry,
) -> DrinkResult {
    let emotion = emotion_match(drink, order, keywords);
    let abv = abv_fit(drink.final_abv, order);
    let serve_ware = meta_correctness(meta, order);

    let raw = 100.0 * (EMOTION_WEIGHT * emotion + ABV_WEIGHT * abv + META_WEIGHT * serve_ware);
    let adjustment = ice_adjustment(profile.ice_preference, meta.used_ice);
    let satisfaction = (raw * SATISFACTION_SCALE + adjustment).clamp(0.0, SATISFACTION_MAX);

    DrinkResult {
        satisfaction,
        satisfaction_raw: raw,
        tip: tip_for(satisfaction),
        customer_left: satisfaction < WALK_AWAY_THRESHOLD,
    }
}

/// Reputation delta buckets over the scaled average satisfaction. Walking
/// out overrides everything.
pub fn reputation_delta(average_satisfaction: f32, left_early: bool) -> f32 {
    if left_early {
        return -0.25;
    }
    match average_satisfaction {
        s if s >= 81.0 => 0.25,
        s if s >= 61.0 => 0.10,
        s if s >= 41.0 => 0.0,
        s if s >= 21.0 => -0.25,
        _ => -0.5,
    }
}

/// Folds a finished session into its `CustomerResult`. `drinks` and
/// `results` run parallel, in serve order.
pub fn build_customer_result(
    profile: &CustomerProfile,
    drinks: &[Drink],
    results: &[DrinkResult],
    left_early: bool,
) -> CustomerResult {
    let count = results.len().max(1) as f32;
    let average = results.iter().map(|r| r.satisfaction).sum::<f32>() / count;
    let average_raw = results.iter().map(|r| r.satisfaction_raw).sum::<f32>() / count;
    let total_tip: i64 = results.iter().map(|r| r.tip).sum();

    let intox_points = intox::points_for(drinks, profile.tolerance);
    let intox_stage = intox::stage_for(intox_points);

    CustomerResult {
        customer_id: profile.id.clone(),
        drink_results: results.to_vec(),
        average_satisfaction: average,
        average_satisfaction_raw: average_raw,
        total_tip,
        reputation_delta: reputation_delta(average, left_early),
        left_early,
        intox_points,
        intox_stage,
        can_sleep_at_inn: !left_early && intox_stage.fit_to_rest(),
        is_over: intox_stage.over_served(),
    }
}
