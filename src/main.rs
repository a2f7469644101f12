//! Headless demo driver: spawns a dihybrid session, crosses two double
//! heterozygotes through the request events, and logs the resulting tables
//! and hatchling.

use std::path::Path;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use dragon_genetics::config::TraitConfig;
use dragon_genetics::genetics::{
    BreedRequested, BreedingCompleted, DifficultyLevel, DragonTrait, GeneticsPlugin,
    GeneticsState, GeneticsSystemSet, Genotype, ParentSlot, SelectParentRequested, TraitLibrary,
};
use dragon_genetics::GeneticsError;

const TRAIT_CONFIG: &str = "assets/traits.ron";

fn main() -> anyhow::Result<()> {
    let library = match TraitConfig::load(Path::new(TRAIT_CONFIG)) {
        Ok(config) => config.into_library(),
        // Running without the asset directory is fine; a malformed file is not.
        Err(GeneticsError::ConfigIo { .. }) => TraitLibrary::default(),
        Err(err) => return Err(err.into()),
    };

    App::new()
        .add_plugins(MinimalPlugins.set(ScheduleRunnerPlugin::run_once()))
        .add_plugins(LogPlugin::default())
        .add_plugins(GeneticsPlugin {
            library,
            level: DifficultyLevel::Dihybrid,
        })
        .add_systems(Startup, queue_demo_cross)
        .add_systems(
            Update,
            report_hatchlings.after(GeneticsSystemSet::Breeding),
        )
        .run();

    Ok(())
}

/// Adds two double heterozygotes, prints the cross tables for them, and
/// queues the breeding request the handlers pick up this frame.
fn queue_demo_cross(
    mut state: ResMut<GeneticsState>,
    mut select: EventWriter<SelectParentRequested>,
    mut breed: EventWriter<BreedRequested>,
) {
    for dragon in state.dragons() {
        info!(
            "starter {} {}: {} ({})",
            dragon.id, dragon.name, dragon.genotype, dragon.phenotype
        );
    }

    let heterozygous = Genotype::heterozygous(state.active_traits().collect::<Vec<_>>());
    let sire = state.add_dragon(heterozygous.clone(), Some("Cinder".into()));
    let dam = state.add_dragon(heterozygous, Some("Squall".into()));

    let square = state.punnett_square(sire, dam, DragonTrait::Fire);
    info!("Punnett square, Fire, Cinder x Squall:");
    for row in square.cells().chunks(2) {
        info!("  {}  {}", row[0], row[1]);
    }
    for (label, fraction) in state.punnett_probabilities(&square, DragonTrait::Fire) {
        info!("  {label}: {fraction}");
    }

    let dihybrid = state.dihybrid_square(sire, dam, DragonTrait::Fire, DragonTrait::Wings);
    info!("dihybrid outcome distribution:");
    for (label, fraction) in
        state.dihybrid_probabilities(&dihybrid, DragonTrait::Fire, DragonTrait::Wings)
    {
        info!("  {label}: {:.4}", fraction);
    }

    select.send(SelectParentRequested {
        slot: ParentSlot::A,
        id: sire,
    });
    select.send(SelectParentRequested {
        slot: ParentSlot::B,
        id: dam,
    });
    breed.send(BreedRequested {
        parent_a: sire,
        parent_b: dam,
    });
}

fn report_hatchlings(
    state: Res<GeneticsState>,
    mut completed: EventReader<BreedingCompleted>,
) {
    for event in completed.read() {
        if let Some(dragon) = state.dragon(event.child) {
            info!(
                "hatchling {} {}: {} ({}), generation {}",
                dragon.id, dragon.name, dragon.genotype, dragon.phenotype, dragon.generation
            );
        }
    }
}
