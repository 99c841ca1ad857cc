//! Bar upgrades — a three-tier ladder paid from the till.
//!
//! Each level unlocks one more garnish slot on the mixing counter
//! (Lv1 = 1 slot … Lv3 = 3 slots).

use bevy::prelude::*;

use crate::shared::*;

use super::till::Till;

const LEVEL_2_COST: i64 = 200;
const LEVEL_3_COST: i64 = 500;

#[derive(Resource, Debug, Clone)]
pub struct BarLevel {
    pub level: u8,
}

impl Default for BarLevel {
    fn default() -> Self {
        Self { level: 1 }
    }
}

impl BarLevel {
    pub fn max_garnish_slots(&self) -> u8 {
        self.level
    }

    pub fn can_upgrade(&self) -> bool {
        self.level < BAR_MAX_LEVEL
    }

    /// Cost of the next tier, or `None` at the top.
    pub fn next_cost(&self) -> Option<i64> {
        match self.level {
            1 => Some(LEVEL_2_COST),
            2 => Some(LEVEL_3_COST),
            _ => None,
        }
    }
}

/// Buys the next tier when the till can cover it. The funds check
/// happens here; the actual debit flows through `TillChangeEvent`.
pub fn handle_upgrade_requests(
    mut requests: EventReader<BarUpgradeRequest>,
    mut bar_level: ResMut<BarLevel>,
    till: Res<Till>,
    mut changes: EventWriter<TillChangeEvent>,
) {
    for _ in requests.read() {
        let Some(cost) = bar_level.next_cost() else {
            warn!("[Upgrades] The bar is already at its top level.");
            continue;
        };
        if till.money < cost {
            warn!(
                "[Upgrades] Not enough money: need {}, have {}.",
                cost, till.money
            );
            continue;
        }

        changes.send(TillChangeEvent {
            amount: -cost,
            reason: format!("bar upgrade to level {}", bar_level.level + 1),
        });
        bar_level.level += 1;
        info!(
            "[Upgrades] Bar upgraded to level {} ({} garnish slots).",
            bar_level.level,
            bar_level.max_garnish_slots()
        );
    }
}
