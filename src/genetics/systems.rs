//! Handler systems that apply request events to the store and emit
//! notifications. Randomness enters only here, at the system boundary; the
//! store itself takes the generator as an argument.

use bevy::prelude::*;
use rand::thread_rng;

use super::events::{
    BreedRequested, BreedingCompleted, CollectionReset, DragonCreated, DragonRenamed,
    RenameDragonRequested, ResetRequested, SelectParentRequested, SetLevelRequested,
};
use super::state::GeneticsState;

pub fn handle_breed_requests(
    mut state: ResMut<GeneticsState>,
    mut requests: EventReader<BreedRequested>,
    mut created: EventWriter<DragonCreated>,
    mut completed: EventWriter<BreedingCompleted>,
) {
    let mut rng = thread_rng();
    for request in requests.read() {
        match state.breed(request.parent_a, request.parent_b, &mut rng) {
            Ok(child) => {
                info!(
                    "dragon {child} hatched from {} and {}",
                    request.parent_a, request.parent_b
                );
                created.send(DragonCreated { id: child });
                completed.send(BreedingCompleted {
                    child,
                    parent_a: request.parent_a,
                    parent_b: request.parent_b,
                });
            }
            Err(err) => warn!("breed request dropped: {err}"),
        }
    }
}

pub fn handle_rename_requests(
    mut state: ResMut<GeneticsState>,
    mut requests: EventReader<RenameDragonRequested>,
    mut renamed: EventWriter<DragonRenamed>,
) {
    for request in requests.read() {
        match state.rename_dragon(request.id, request.name.clone()) {
            Ok(()) => {
                renamed.send(DragonRenamed { id: request.id });
            }
            Err(err) => warn!("rename request dropped: {err}"),
        }
    }
}

pub fn handle_select_parent_requests(
    mut state: ResMut<GeneticsState>,
    mut requests: EventReader<SelectParentRequested>,
) {
    for request in requests.read() {
        if let Err(err) = state.select_parent(request.slot, request.id) {
            warn!("parent selection dropped: {err}");
        }
    }
}

pub fn handle_level_requests(
    mut state: ResMut<GeneticsState>,
    mut requests: EventReader<SetLevelRequested>,
    mut reset: EventWriter<CollectionReset>,
) {
    for request in requests.read() {
        // Unchanged level: no reset, no notification.
        if state.set_level(request.level) {
            info!("difficulty switched to {}", request.level);
            reset.send(CollectionReset);
        }
    }
}

pub fn handle_reset_requests(
    mut state: ResMut<GeneticsState>,
    mut requests: EventReader<ResetRequested>,
    mut reset: EventWriter<CollectionReset>,
) {
    for _ in requests.read() {
        state.reset();
        reset.send(CollectionReset);
    }
}
