//! Serving domain — scoring drinks against orders and settling customers.
//!
//! `score.rs` holds the pure math; `session.rs` holds the seat/serve/
//! settle lifecycle. Everything downstream of a settled customer (tips,
//! reputation, ledger, inn queue) lives in the economy domain and is fed
//! by `CustomerFinishedEvent`.

pub mod score;
pub mod session;

use bevy::prelude::*;

use crate::shared::ServiceState;
use session::{begin_customer, finish_customer, serve_drink, ActiveSession};

pub struct ServingPlugin;

impl Plugin for ServingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveSession>().add_systems(
            Update,
            (begin_customer, serve_drink, finish_customer)
                .chain()
                .run_if(in_state(ServiceState::Open)),
        );
    }
}
