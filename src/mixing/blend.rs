//! Pure blending math: portions in, one `Drink` out.
//!
//! The blend is a volume-weighted average, so it is independent of the
//! order portions were poured in — the load-bearing property of the
//! whole mixing subsystem.

use bevy::prelude::*;

use crate::shared::*;

/// Blends the accumulated portions into a finished drink.
///
/// Volumes and ABV sum linearly; emotions accumulate volume-weighted and
/// are normalized by the total volume at the end. When `use_ice` is set,
/// a fixed 20 ml of implicit ice (ABV 0, pure neutral) joins both sums,
/// diluting proof and feeling proportionally.
///
/// Idempotent: reads the portion list, mutates nothing. An empty mix
/// yields the well-defined zero drink. Portions referencing an ingredient
/// missing from the registry are skipped with an error — pours are
/// validated on entry, so that only happens on a corrupted catalog.
pub fn compute_drink(portions: &[Portion], registry: &IngredientRegistry, use_ice: bool) -> Drink {
    let mut total = 0.0_f32;
    let mut abv_sum = 0.0_f32;
    let mut blend = EmotionVector::ZERO;
    let mut kept: Vec<Portion> = Vec::with_capacity(portions.len());

    for portion in portions {
        let Some(def) = registry.get(&portion.ingredient) else {
            error!(
                "[Mixing] Portion references unknown ingredient '{}' — skipping it.",
                portion.ingredient
            );
            continue;
        };
        total += portion.ml;
        abv_sum += def.abv * portion.ml;
        blend = blend.add_weighted(&def.emotions, portion.ml);
        kept.push(portion.clone());
    }

    if use_ice {
        total += ICE_VOLUME_ML;
        blend = blend.add_weighted(&EmotionVector::NEUTRAL, ICE_VOLUME_ML);
    }

    let final_abv = if total > 0.0 { abv_sum / total } else { 0.0 };

    Drink {
        portions: kept,
        emotions: blend.normalized(total),
        final_abv,
        total_ml: total,
    }
}
