pub mod alleles;
pub mod events;
pub mod genotype;
pub mod plugin;
pub mod punnett;
pub mod state;
pub mod systems;
pub mod traits;

// Re-export the types most callers need.
pub use alleles::AllelePair;
pub use events::{
    BreedRequested, BreedingCompleted, CollectionReset, DragonCreated, DragonRenamed,
    RenameDragonRequested, ResetRequested, SelectParentRequested, SetLevelRequested,
};
pub use genotype::{Dragon, DragonId, Genotype, Phenotype};
pub use plugin::{GeneticsPlugin, GeneticsSystemSet};
pub use punnett::{DihybridCell, DihybridSquare, Gamete, PunnettSquare};
pub use state::{BreedingSelection, GeneticsState, ParentSlot};
pub use traits::{DifficultyLevel, DragonTrait, TraitDef, TraitLibrary};
