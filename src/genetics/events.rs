//! Request and notification events bridging the presentation layer and the
//! genetics store. The presentation layer never mutates the store directly:
//! it sends request events, and handler systems answer with notifications.

use bevy::prelude::*;

use super::genotype::DragonId;
use super::state::ParentSlot;
use super::traits::DifficultyLevel;

// --- Requests (presentation layer -> store) ---

#[derive(Event, Debug)]
pub struct BreedRequested {
    pub parent_a: DragonId,
    pub parent_b: DragonId,
}

#[derive(Event, Debug)]
pub struct RenameDragonRequested {
    pub id: DragonId,
    pub name: String,
}

#[derive(Event, Debug)]
pub struct SelectParentRequested {
    pub slot: ParentSlot,
    pub id: DragonId,
}

#[derive(Event, Debug)]
pub struct SetLevelRequested {
    pub level: DifficultyLevel,
}

#[derive(Event, Debug)]
pub struct ResetRequested;

// --- Notifications (store -> presentation layer) ---

/// A dragon was appended to the collection.
#[derive(Event, Debug)]
pub struct DragonCreated {
    pub id: DragonId,
}

#[derive(Event, Debug)]
pub struct DragonRenamed {
    pub id: DragonId,
}

/// Breeding finished; the hatchling is already in the collection.
#[derive(Event, Debug)]
pub struct BreedingCompleted {
    pub child: DragonId,
    pub parent_a: DragonId,
    pub parent_b: DragonId,
}

/// The collection was cleared and the starters respawned. Carries no
/// payload; listeners re-read the store.
#[derive(Event, Debug)]
pub struct CollectionReset;
