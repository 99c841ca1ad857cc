//! The inn upstairs — a handful of rooms and the queue of customers
//! waiting for the innkeeper's verdict.
//!
//! Customers who finish the night fit to rest (and did not storm out)
//! are queued for a decision: bed them (`InnSleepRequest`) or send them
//! home (`InnEvictRequest`). Beds are finite; a sleep attempt with no
//! free room fails and the customer goes home anyway.

use bevy::prelude::*;
use std::collections::VecDeque;

use crate::shared::*;

/// Free beds tonight. Refreshed every morning.
#[derive(Resource, Debug, Clone)]
pub struct InnRooms {
    pub free: u8,
}

impl Default for InnRooms {
    fn default() -> Self {
        Self {
            free: INN_ROOMS_PER_DAY,
        }
    }
}

/// FIFO queue of results awaiting an innkeeper decision.
#[derive(Resource, Debug, Default)]
pub struct PendingInnDecisions {
    queue: VecDeque<CustomerResult>,
}

impl PendingInnDecisions {
    /// Only customers actually fit to rest are queued; anyone else is
    /// refused and the call reports it.
    pub fn enqueue(&mut self, result: CustomerResult) -> bool {
        if !result.can_sleep_at_inn {
            return false;
        }
        self.queue.push_back(result);
        true
    }

    pub fn pop(&mut self) -> Option<CustomerResult> {
        self.queue.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn count(&self) -> usize {
        self.queue.len()
    }
}

// ─── Systems ─────────────────────────────────────────────────────────────────

pub fn refresh_rooms_on_day_start(
    mut day_started: EventReader<DayStartedEvent>,
    mut rooms: ResMut<InnRooms>,
) {
    for _ in day_started.read() {
        rooms.free = INN_ROOMS_PER_DAY;
    }
}

/// Queues every settled customer who qualifies for a bed.
pub fn queue_sleepers(
    mut finished: EventReader<CustomerFinishedEvent>,
    mut pending: ResMut<PendingInnDecisions>,
) {
    for event in finished.read() {
        if pending.enqueue(event.result.clone()) {
            info!(
                "[Inn] {} is in no state to walk home — queued for a room ({} waiting).",
                event.result.customer_id,
                pending.count()
            );
        }
    }
}

/// Beds the front of the queue if a room is free. The customer leaves
/// the queue either way.
pub fn handle_sleep_requests(
    mut requests: EventReader<InnSleepRequest>,
    mut pending: ResMut<PendingInnDecisions>,
    mut rooms: ResMut<InnRooms>,
    mut slept: EventWriter<CustomerSleptEvent>,
) {
    for _ in requests.read() {
        let Some(result) = pending.pop() else {
            warn!("[Inn] Nobody is waiting for a room.");
            continue;
        };
        if rooms.free == 0 {
            warn!(
                "[Inn] No rooms left — {} is sent home after all.",
                result.customer_id
            );
            continue;
        }
        rooms.free -= 1;
        info!(
            "[Inn] {} gets a room ({} left).",
            result.customer_id, rooms.free
        );
        slept.send(CustomerSleptEvent {
            customer_id: result.customer_id,
        });
    }
}

/// Sends the front of the queue home. No other effect.
pub fn handle_evict_requests(
    mut requests: EventReader<InnEvictRequest>,
    mut pending: ResMut<PendingInnDecisions>,
) {
    for _ in requests.read() {
        match pending.pop() {
            Some(result) => info!("[Inn] {} is sent home.", result.customer_id),
            None => warn!("[Inn] Nobody is waiting for a room."),
        }
    }
}
