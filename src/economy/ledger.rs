//! Daily ledger — snapshots the till and reputation when the doors open,
//! counts the day's service, and publishes the deltas when they close.

use bevy::prelude::*;

use crate::shared::*;

use super::reputation::Reputation;
use super::till::Till;

#[derive(Resource, Debug, Clone, Default)]
pub struct DailyLedger {
    pub day_start_money: i64,
    pub day_start_reputation: f32,
    pub served_customers: u32,
    pub served_drinks: u32,
    pub slept_customers: u32,
}

impl DailyLedger {
    pub fn income_delta(&self, till: &Till) -> i64 {
        till.money - self.day_start_money
    }

    pub fn reputation_delta(&self, reputation: &Reputation) -> f32 {
        reputation.value - self.day_start_reputation
    }
}

/// Day start: snapshot balances and zero the counters.
pub fn snapshot_on_day_start(
    mut day_started: EventReader<DayStartedEvent>,
    till: Res<Till>,
    reputation: Res<Reputation>,
    mut ledger: ResMut<DailyLedger>,
) {
    for event in day_started.read() {
        ledger.day_start_money = till.money;
        ledger.day_start_reputation = reputation.value;
        ledger.served_customers = 0;
        ledger.served_drinks = 0;
        ledger.slept_customers = 0;
        info!(
            "[Ledger] Day {} snapshot: {} in the till, reputation {:.2}.",
            event.day, till.money, reputation.value
        );
    }
}

pub fn record_customers(
    mut finished: EventReader<CustomerFinishedEvent>,
    mut ledger: ResMut<DailyLedger>,
) {
    for event in finished.read() {
        ledger.served_customers += 1;
        ledger.served_drinks += event.result.drink_results.len() as u32;
    }
}

pub fn record_sleeps(
    mut slept: EventReader<CustomerSleptEvent>,
    mut ledger: ResMut<DailyLedger>,
) {
    for _ in slept.read() {
        ledger.slept_customers += 1;
    }
}

/// Day end: publish the report for the day that just closed.
pub fn close_on_day_end(
    mut day_ended: EventReader<DayEndedEvent>,
    till: Res<Till>,
    reputation: Res<Reputation>,
    ledger: Res<DailyLedger>,
    mut reports: EventWriter<DayReportEvent>,
) {
    for event in day_ended.read() {
        let report = DayReport {
            day: event.day,
            income_delta: ledger.income_delta(&till),
            reputation_delta: ledger.reputation_delta(&reputation),
            served_customers: ledger.served_customers,
            served_drinks: ledger.served_drinks,
            slept_customers: ledger.slept_customers,
        };
        info!(
            "[Ledger] Day {} closed: income {:+}, reputation {:+.2}, {} customer(s), {} drink(s), {} slept.",
            report.day,
            report.income_delta,
            report.reputation_delta,
            report.served_customers,
            report.served_drinks,
            report.slept_customers
        );
        reports.send(DayReportEvent { report });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_against_snapshot() {
        let ledger = DailyLedger {
            day_start_money: 120,
            day_start_reputation: 2.5,
            ..DailyLedger::default()
        };
        let till = Till { money: 185 };
        let reputation = Reputation { value: 2.85 };

        assert_eq!(ledger.income_delta(&till), 65);
        assert!((ledger.reputation_delta(&reputation) - 0.35).abs() < 1e-6);
    }

    #[test]
    fn test_losing_day_reports_negative_deltas() {
        let ledger = DailyLedger {
            day_start_money: 80,
            day_start_reputation: 3.0,
            ..DailyLedger::default()
        };
        let till = Till { money: 80 };
        let reputation = Reputation { value: 2.25 };

        assert_eq!(ledger.income_delta(&till), 0);
        assert!(ledger.reputation_delta(&reputation) < 0.0);
    }
}
