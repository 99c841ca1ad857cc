//! The till — running money balance plus lifetime takings statistics.

use bevy::prelude::*;

use crate::shared::*;

#[derive(Resource, Debug, Clone, Default)]
pub struct Till {
    pub money: i64,
}

/// Lifetime counters, independent of the daily ledger.
#[derive(Resource, Debug, Clone, Default)]
pub struct TillStats {
    pub tips_collected: i64,
    pub money_spent: i64,
    pub customers_paid: u64,
}

/// Credits each settled customer's tips to the till.
pub fn collect_tips(
    mut finished: EventReader<CustomerFinishedEvent>,
    mut till: ResMut<Till>,
    mut stats: ResMut<TillStats>,
) {
    for event in finished.read() {
        let tip = event.result.total_tip;
        till.money += tip;
        stats.tips_collected += tip;
        stats.customers_paid += 1;
        info!(
            "[Economy] {} tipped {} — till at {}.",
            event.result.customer_id, tip, till.money
        );
    }
}

/// Applies other money movements (upgrade purchases, adjustments).
/// Spending past the balance should have been validated by the sender;
/// if it happens anyway the till is clamped at zero with a warning
/// rather than going negative.
pub fn apply_till_changes(
    mut changes: EventReader<TillChangeEvent>,
    mut till: ResMut<Till>,
    mut stats: ResMut<TillStats>,
) {
    for change in changes.read() {
        if change.amount >= 0 {
            till.money += change.amount;
            info!(
                "[Economy] +{}: {}. Till at {}.",
                change.amount, change.reason, till.money
            );
        } else {
            let cost = -change.amount;
            if till.money >= cost {
                till.money -= cost;
                stats.money_spent += cost;
                info!(
                    "[Economy] -{}: {}. Till at {}.",
                    cost, change.reason, till.money
                );
            } else {
                warn!(
                    "[Economy] Tried to spend {} with only {} in the till ({}). Clamping to 0.",
                    cost, till.money, change.reason
                );
                stats.money_spent += till.money;
                till.money = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_till_starts_empty() {
        let till = Till::default();
        assert_eq!(till.money, 0);
        let stats = TillStats::default();
        assert_eq!(stats.tips_collected, 0);
        assert_eq!(stats.customers_paid, 0);
    }
}
