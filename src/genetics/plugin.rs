use bevy::prelude::*;

use super::events::{
    BreedRequested, BreedingCompleted, CollectionReset, DragonCreated, DragonRenamed,
    RenameDragonRequested, ResetRequested, SelectParentRequested, SetLevelRequested,
};
use super::state::GeneticsState;
use super::systems::{
    handle_breed_requests, handle_level_requests, handle_rename_requests, handle_reset_requests,
    handle_select_parent_requests,
};
use super::traits::{DifficultyLevel, TraitLibrary};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GeneticsSystemSet {
    /// Level switches, resets, selection, renames.
    Collection,
    /// Breeding, after the collection has settled for the frame.
    Breeding,
}

/// Installs the genetics store, its events, and the request handlers.
pub struct GeneticsPlugin {
    pub library: TraitLibrary,
    pub level: DifficultyLevel,
}

impl Default for GeneticsPlugin {
    fn default() -> Self {
        Self {
            library: TraitLibrary::default(),
            level: DifficultyLevel::default(),
        }
    }
}

impl Plugin for GeneticsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GeneticsState::new(self.library.clone(), self.level))
            .add_event::<BreedRequested>()
            .add_event::<RenameDragonRequested>()
            .add_event::<SelectParentRequested>()
            .add_event::<SetLevelRequested>()
            .add_event::<ResetRequested>()
            .add_event::<DragonCreated>()
            .add_event::<DragonRenamed>()
            .add_event::<BreedingCompleted>()
            .add_event::<CollectionReset>()
            .configure_sets(
                Update,
                (GeneticsSystemSet::Collection, GeneticsSystemSet::Breeding).chain(),
            )
            .add_systems(
                Update,
                (
                    handle_level_requests,
                    handle_reset_requests,
                    handle_select_parent_requests,
                    handle_rename_requests,
                )
                    .in_set(GeneticsSystemSet::Collection),
            )
            .add_systems(
                Update,
                handle_breed_requests.in_set(GeneticsSystemSet::Breeding),
            );
    }
}
