//! Economy domain — everything downstream of a settled customer:
//! tips into the till, reputation movement, the daily ledger, the inn
//! queue, and bar upgrades.
//!
//! All inputs arrive as `crate::shared` events; no serving internals are
//! touched here.

use bevy::prelude::*;

pub mod inn;
pub mod ledger;
pub mod reputation;
pub mod till;
pub mod upgrades;

use inn::{
    handle_evict_requests, handle_sleep_requests, queue_sleepers, refresh_rooms_on_day_start,
    InnRooms, PendingInnDecisions,
};
use ledger::{close_on_day_end, record_customers, record_sleeps, snapshot_on_day_start, DailyLedger};
use reputation::{apply_reputation, Reputation};
use till::{apply_till_changes, collect_tips, Till, TillStats};
use upgrades::{handle_upgrade_requests, BarLevel};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Till>()
            .init_resource::<TillStats>()
            .init_resource::<Reputation>()
            .init_resource::<DailyLedger>()
            .init_resource::<InnRooms>()
            .init_resource::<PendingInnDecisions>()
            .init_resource::<BarLevel>();

        // Day-boundary and settlement bookkeeping runs unconditionally:
        // the events carry the state, and missing one would desync the
        // ledger. Snapshots run before recorders, recorders before the
        // close-out.
        app.add_systems(
            Update,
            (
                snapshot_on_day_start,
                refresh_rooms_on_day_start,
                collect_tips,
                apply_reputation,
                record_customers,
                queue_sleepers,
                handle_sleep_requests,
                handle_evict_requests,
                record_sleeps,
                handle_upgrade_requests,
                apply_till_changes,
                close_on_day_end,
            )
                .chain(),
        );

        info!("[Economy] EconomyPlugin registered.");
    }
}
