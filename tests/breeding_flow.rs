//! Integration tests for the genetics plugin driven through a real Bevy
//! app: request events in, store mutations and notification events out.

use bevy::app::App;
use bevy::ecs::event::Events;

use dragon_genetics::genetics::{
    BreedRequested, BreedingCompleted, CollectionReset, DifficultyLevel, DragonCreated,
    DragonId, DragonRenamed, DragonTrait, GeneticsPlugin, GeneticsState, ParentSlot,
    RenameDragonRequested, ResetRequested, SelectParentRequested, SetLevelRequested,
};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(GeneticsPlugin::default());
    app
}

fn drain<E: bevy::prelude::Event>(app: &mut App) -> Vec<E> {
    app.world_mut()
        .resource_mut::<Events<E>>()
        .drain()
        .collect()
}

#[test]
fn plugin_starts_with_the_two_starters() {
    let app = test_app();
    let state = app.world().resource::<GeneticsState>();

    let dragons = state.dragons();
    assert_eq!(dragons.len(), 2);
    assert_eq!(dragons[0].name, "Blaze");
    assert_eq!(dragons[1].name, "Frost");
    assert_eq!(state.level(), DifficultyLevel::Monohybrid);
}

#[test]
fn breed_request_hatches_a_dragon_and_notifies() {
    let mut app = test_app();
    app.world_mut().send_event(SelectParentRequested {
        slot: ParentSlot::A,
        id: DragonId(0),
    });
    app.world_mut().send_event(SelectParentRequested {
        slot: ParentSlot::B,
        id: DragonId(1),
    });
    app.world_mut().send_event(BreedRequested {
        parent_a: DragonId(0),
        parent_b: DragonId(1),
    });
    app.update();

    {
        let state = app.world().resource::<GeneticsState>();
        assert_eq!(state.dragons().len(), 3);
        assert_eq!(state.selection().pair(), Some((DragonId(0), DragonId(1))));
        let child = state.dragon(DragonId(2)).expect("hatchling");
        assert_eq!(child.generation, 1);
    }

    let completed = drain::<BreedingCompleted>(&mut app);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].child, DragonId(2));
    assert_eq!(completed[0].parent_a, DragonId(0));

    let created = drain::<DragonCreated>(&mut app);
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].id, DragonId(2));
}

#[test]
fn breed_request_with_unknown_parent_is_dropped() {
    let mut app = test_app();
    app.world_mut().send_event(BreedRequested {
        parent_a: DragonId(0),
        parent_b: DragonId(42),
    });
    app.update();

    assert_eq!(app.world().resource::<GeneticsState>().dragons().len(), 2);
    assert!(drain::<BreedingCompleted>(&mut app).is_empty());
    assert!(drain::<DragonCreated>(&mut app).is_empty());
}

#[test]
fn level_switch_resets_once_and_repeat_is_silent() {
    let mut app = test_app();
    app.world_mut().send_event(SetLevelRequested {
        level: DifficultyLevel::Dihybrid,
    });
    app.update();

    {
        let state = app.world().resource::<GeneticsState>();
        assert_eq!(state.level(), DifficultyLevel::Dihybrid);
        assert_eq!(state.dragons().len(), 2);
        assert!(state.dragons()[0].genotype.get(DragonTrait::Wings).is_some());
    }
    assert_eq!(drain::<CollectionReset>(&mut app).len(), 1);

    // Same level again: no reset, no notification.
    app.world_mut().send_event(SetLevelRequested {
        level: DifficultyLevel::Dihybrid,
    });
    app.update();
    assert!(drain::<CollectionReset>(&mut app).is_empty());
}

#[test]
fn rename_request_updates_store_and_notifies() {
    let mut app = test_app();
    app.world_mut().send_event(RenameDragonRequested {
        id: DragonId(1),
        name: "Glacier".into(),
    });
    app.update();

    assert_eq!(
        app.world()
            .resource::<GeneticsState>()
            .dragon(DragonId(1))
            .unwrap()
            .name,
        "Glacier"
    );
    let renamed = drain::<DragonRenamed>(&mut app);
    assert_eq!(renamed.len(), 1);
    assert_eq!(renamed[0].id, DragonId(1));
}

#[test]
fn reset_request_restores_the_starting_collection() {
    let mut app = test_app();
    app.world_mut().send_event(BreedRequested {
        parent_a: DragonId(0),
        parent_b: DragonId(1),
    });
    app.update();
    assert_eq!(app.world().resource::<GeneticsState>().dragons().len(), 3);

    app.world_mut().send_event(ResetRequested);
    app.update();

    {
        let state = app.world().resource::<GeneticsState>();
        assert_eq!(state.dragons().len(), 2);
        assert_eq!(state.dragons()[0].id, DragonId(0));
        assert_eq!(state.selection().pair(), None);
    }
    assert_eq!(drain::<CollectionReset>(&mut app).len(), 1);
}
