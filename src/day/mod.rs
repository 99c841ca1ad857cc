//! Day cycle — the two lifecycle events the whole bar runs on.
//!
//! `StartDayRequest` opens service and broadcasts `DayStartedEvent`
//! (everything per-day resets on it: ledger snapshot, inn rooms, the
//! customer docket). `EndDayRequest` broadcasts `DayEndedEvent` (the
//! ledger closes on it), advances the day counter, and shuts the doors.
//! There are no other process-wide lifecycle events.

use bevy::prelude::*;

use crate::serving::session::ActiveSession;
use crate::shared::*;

#[derive(Resource, Debug, Clone)]
pub struct DayCycle {
    pub day: u32,
}

impl Default for DayCycle {
    fn default() -> Self {
        Self { day: 1 }
    }
}

pub struct DayCyclePlugin;

impl Plugin for DayCyclePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DayCycle>()
            .add_systems(Update, (handle_start_day, handle_end_day));
    }
}

// ─── Systems ─────────────────────────────────────────────────────────────────

/// Opens the bar for the current day. Only valid while closed.
pub fn handle_start_day(
    mut requests: EventReader<StartDayRequest>,
    state: Res<State<ServiceState>>,
    mut next_state: ResMut<NextState<ServiceState>>,
    cycle: Res<DayCycle>,
    mut day_started: EventWriter<DayStartedEvent>,
) {
    for _ in requests.read() {
        if *state.get() != ServiceState::Closed {
            warn!(
                "[Day] Cannot start day {} — service is {:?}.",
                cycle.day,
                state.get()
            );
            continue;
        }
        info!("[Day] Day {} — doors open.", cycle.day);
        next_state.set(ServiceState::Open);
        day_started.send(DayStartedEvent { day: cycle.day });
    }
}

/// Settles the day and shuts the doors. Refused while a customer is
/// still seated — they have to be finished first.
pub fn handle_end_day(
    mut requests: EventReader<EndDayRequest>,
    state: Res<State<ServiceState>>,
    session: Res<ActiveSession>,
    mut next_state: ResMut<NextState<ServiceState>>,
    mut cycle: ResMut<DayCycle>,
    mut day_ended: EventWriter<DayEndedEvent>,
) {
    for _ in requests.read() {
        if *state.get() != ServiceState::Open {
            warn!("[Day] Cannot end the day — service is {:?}.", state.get());
            continue;
        }
        if session.0.is_some() {
            warn!("[Day] Cannot settle the day with a customer still seated.");
            continue;
        }
        info!("[Day] Day {} — doors closed.", cycle.day);
        day_ended.send(DayEndedEvent { day: cycle.day });
        cycle.day += 1;
        next_state.set(ServiceState::Closed);
    }
}
