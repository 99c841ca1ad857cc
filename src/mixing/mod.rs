//! Mixing domain — pours, ice, serve-ware selections.
//!
//! Accumulates `Portion`s and the bartender's presentation choices in
//! `MixState`. The actual blend math lives in `blend.rs`; the serving
//! domain calls it when a drink is submitted.
//!
//! Failure policy: a bad pour (unknown bottle, non-positive volume) is
//! dropped with a warning and nothing else happens. A garnish toggle past
//! the unlocked slot count is refused the same way.

pub mod blend;
pub mod jigger;

use bevy::prelude::*;

use crate::economy::upgrades::BarLevel;
use crate::shared::*;

pub struct MixingPlugin;

impl Plugin for MixingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MixState>().add_systems(
            Update,
            (
                handle_pour,
                handle_reset_mix,
                handle_set_ice,
                handle_select_technique,
                handle_select_glass,
                handle_toggle_garnish,
            )
                .run_if(in_state(ServiceState::Open)),
        );
    }
}

// ─── Systems ─────────────────────────────────────────────────────────────────

/// Appends a portion to the mix. Rejects (no-op, warn) when the bottle is
/// unknown or the volume is not positive.
pub fn handle_pour(
    mut pours: EventReader<PourRequest>,
    registry: Res<IngredientRegistry>,
    mut mix: ResMut<MixState>,
) {
    for pour in pours.read() {
        if pour.ml <= 0.0 {
            warn!(
                "[Mixing] Ignoring pour of {} ml '{}' — volume must be positive.",
                pour.ml, pour.ingredient
            );
            continue;
        }
        let Some(def) = registry.get(&pour.ingredient) else {
            warn!(
                "[Mixing] Ignoring pour of unknown ingredient '{}'.",
                pour.ingredient
            );
            continue;
        };

        mix.portions.push(Portion {
            ingredient: pour.ingredient.clone(),
            ml: pour.ml,
        });
        info!(
            "[Mixing] Poured {} ml of {} (portions: {}).",
            pour.ml,
            def.name,
            mix.portion_count()
        );
    }
}

pub fn handle_reset_mix(mut resets: EventReader<ResetMixRequest>, mut mix: ResMut<MixState>) {
    for _ in resets.read() {
        mix.clear_pour();
        info!("[Mixing] Mix reset.");
    }
}

pub fn handle_set_ice(mut requests: EventReader<SetIceRequest>, mut mix: ResMut<MixState>) {
    for req in requests.read() {
        mix.use_ice = req.0;
        info!("[Mixing] Ice {}.", if req.0 { "in" } else { "out" });
    }
}

pub fn handle_select_technique(
    mut requests: EventReader<SelectTechniqueRequest>,
    serveware: Res<ServewareRegistry>,
    mut mix: ResMut<MixState>,
) {
    for req in requests.read() {
        match &req.0 {
            Some(id) if !serveware.techniques.contains_key(id) => {
                warn!("[Mixing] Unknown technique '{}' — selection unchanged.", id);
            }
            selection => {
                mix.technique = selection.clone();
                info!(
                    "[Mixing] Technique: {}.",
                    mix.technique.as_deref().unwrap_or("none")
                );
            }
        }
    }
}

pub fn handle_select_glass(
    mut requests: EventReader<SelectGlassRequest>,
    serveware: Res<ServewareRegistry>,
    mut mix: ResMut<MixState>,
) {
    for req in requests.read() {
        match &req.0 {
            Some(id) if !serveware.glasses.contains_key(id) => {
                warn!("[Mixing] Unknown glass '{}' — selection unchanged.", id);
            }
            selection => {
                mix.glass = selection.clone();
                info!(
                    "[Mixing] Glass: {}.",
                    mix.glass.as_deref().unwrap_or("none")
                );
            }
        }
    }
}

/// Garnish slots are gated by the bar's upgrade level: Lv1 = one slot,
/// Lv3 = three. Toggling a garnish on past the limit is refused.
pub fn handle_toggle_garnish(
    mut requests: EventReader<ToggleGarnishRequest>,
    serveware: Res<ServewareRegistry>,
    bar_level: Res<BarLevel>,
    mut mix: ResMut<MixState>,
) {
    for req in requests.read() {
        if !req.on {
            mix.garnishes.retain(|g| *g != req.garnish);
            continue;
        }
        if !serveware.garnishes.contains_key(&req.garnish) {
            warn!("[Mixing] Unknown garnish '{}'.", req.garnish);
            continue;
        }
        if mix.garnishes.contains(&req.garnish) {
            continue;
        }
        let slots = bar_level.max_garnish_slots() as usize;
        if mix.garnishes.len() >= slots {
            warn!(
                "[Mixing] Garnish '{}' refused — all {} slot(s) in use.",
                req.garnish, slots
            );
            continue;
        }
        mix.garnishes.push(req.garnish.clone());
        info!(
            "[Mixing] Garnish on: {} ({}/{}).",
            req.garnish,
            mix.garnishes.len(),
            slots
        );
    }
}
