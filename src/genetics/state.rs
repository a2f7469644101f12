//! The authoritative genetics store.
//!
//! [`GeneticsState`] owns the dragon collection and the active trait rules,
//! and carries every genotype/phenotype computation: Mendelian inheritance
//! on breeding, Punnett and dihybrid cross tables, and the probability
//! tallies derived from them. It is inserted as a Bevy resource by
//! [`GeneticsPlugin`](super::plugin::GeneticsPlugin) and handed to systems
//! by the scheduler, but every method also works on a plain owned value, so
//! the whole store is testable without an `App`.

use std::collections::BTreeMap;

use bevy::log::error;
use bevy::prelude::Resource;
use rand::Rng;

use crate::error::GeneticsError;

use super::alleles::AllelePair;
use super::genotype::{Dragon, DragonId, Genotype, Phenotype};
use super::punnett::{gametes, DihybridSquare, PunnettSquare};
use super::traits::{DifficultyLevel, DragonTrait, TraitDef, TraitLibrary};

/// Names of the two canonical starter dragons spawned on every reset.
const STARTER_DOMINANT: &str = "Blaze";
const STARTER_RECESSIVE: &str = "Frost";

/// Which breeding slot a selection targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentSlot {
    A,
    B,
}

/// The two optional breeding parents. A dragon can occupy at most one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreedingSelection {
    pub parent_a: Option<DragonId>,
    pub parent_b: Option<DragonId>,
}

impl BreedingSelection {
    /// Both slots filled, ready to breed.
    pub fn pair(&self) -> Option<(DragonId, DragonId)> {
        Some((self.parent_a?, self.parent_b?))
    }
}

/// Single authoritative store of dragons and trait rules.
#[derive(Resource, Debug, Clone)]
pub struct GeneticsState {
    library: TraitLibrary,
    level: DifficultyLevel,
    dragons: Vec<Dragon>,
    next_id: u32,
    selection: BreedingSelection,
}

impl Default for GeneticsState {
    fn default() -> Self {
        Self::new(TraitLibrary::default(), DifficultyLevel::default())
    }
}

impl GeneticsState {
    /// Creates a store with the two canonical starters already spawned.
    pub fn new(library: TraitLibrary, level: DifficultyLevel) -> Self {
        let mut state = Self {
            library,
            level,
            dragons: Vec::new(),
            next_id: 0,
            selection: BreedingSelection::default(),
        };
        state.reset();
        state
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn dragons(&self) -> &[Dragon] {
        &self.dragons
    }

    pub fn dragon(&self, id: DragonId) -> Option<&Dragon> {
        self.dragons.iter().find(|dragon| dragon.id == id)
    }

    pub fn selection(&self) -> BreedingSelection {
        self.selection
    }

    /// Definitions of the traits active at the current level, in table
    /// order.
    pub fn active_traits(&self) -> impl Iterator<Item = &TraitDef> {
        self.level
            .active_traits()
            .iter()
            .filter_map(|id| self.library.get(*id))
    }

    /// The definition for a trait, if that trait is active at the current
    /// level. Inactive or unknown traits resolve to `None` and are skipped
    /// by every computation.
    pub fn trait_def(&self, id: DragonTrait) -> Option<&TraitDef> {
        if self.level.active_traits().contains(&id) {
            self.library.get(id)
        } else {
            None
        }
    }

    /// Adds a starter-generation dragon. Allele pairs are canonicalized and
    /// any active trait the genotype lacks is backfilled homozygous
    /// recessive.
    pub fn add_dragon(&mut self, genotype: Genotype, name: Option<String>) -> DragonId {
        self.spawn_dragon(genotype, name, 0)
    }

    fn spawn_dragon(&mut self, genotype: Genotype, name: Option<String>, generation: u32) -> DragonId {
        let mut normalized = Genotype::new();
        for (id, pair) in genotype.iter() {
            normalized.insert(id, pair.canonical());
        }
        let backfill: Vec<(DragonTrait, AllelePair)> = self
            .active_traits()
            .filter(|def| normalized.get(def.id).is_none())
            .map(|def| (def.id, def.recessive_pair()))
            .collect();
        for (id, pair) in backfill {
            normalized.insert(id, pair);
        }

        let phenotype = self.calculate_phenotype(&normalized);
        let id = DragonId(self.next_id);
        self.next_id += 1;

        self.dragons.push(Dragon {
            id,
            name: name.unwrap_or_else(|| format!("Dragon {}", id.0)),
            genotype: normalized,
            phenotype,
            generation,
        });
        id
    }

    /// Derives the phenotype for a genotype under complete dominance.
    /// Genotype entries for traits outside the active table are silently
    /// skipped.
    pub fn calculate_phenotype(&self, genotype: &Genotype) -> Phenotype {
        let mut phenotype = Phenotype::new();
        for (id, pair) in genotype.iter() {
            if let Some(def) = self.trait_def(id) {
                phenotype.insert(id, def.phenotype_of(pair).to_string());
            }
        }
        phenotype
    }

    /// Breeds two dragons: per active trait, one allele is drawn uniformly
    /// from each parent's pair. A trait either parent lacks a pair for is
    /// skipped here and backfilled homozygous recessive on spawn. Offspring
    /// are always generation 1; deeper ancestry is not tracked.
    pub fn breed<R: Rng + ?Sized>(
        &mut self,
        parent_a: DragonId,
        parent_b: DragonId,
        rng: &mut R,
    ) -> Result<DragonId, GeneticsError> {
        let Some(genotype_a) = self.dragon(parent_a).map(|d| d.genotype.clone()) else {
            error!("breeding failed: unknown parent dragon {parent_a}");
            return Err(GeneticsError::UnknownDragon(parent_a));
        };
        let Some(genotype_b) = self.dragon(parent_b).map(|d| d.genotype.clone()) else {
            error!("breeding failed: unknown parent dragon {parent_b}");
            return Err(GeneticsError::UnknownDragon(parent_b));
        };

        let mut child = Genotype::new();
        let active: Vec<DragonTrait> = self.active_traits().map(|def| def.id).collect();
        for id in active {
            let (Some(pair_a), Some(pair_b)) = (genotype_a.get(id), genotype_b.get(id)) else {
                continue;
            };
            let from_a = if rng.gen_bool(0.5) { pair_a.0 } else { pair_a.1 };
            let from_b = if rng.gen_bool(0.5) { pair_b.0 } else { pair_b.1 };
            child.insert(id, AllelePair(from_a, from_b).canonical());
        }

        Ok(self.spawn_dragon(child, None, 1))
    }

    /// The 2x2 cross table for one trait. Empty when either parent is
    /// unknown or lacks alleles for the trait.
    pub fn punnett_square(
        &self,
        parent_a: DragonId,
        parent_b: DragonId,
        id: DragonTrait,
    ) -> PunnettSquare {
        let (Some(a), Some(b)) = (self.dragon(parent_a), self.dragon(parent_b)) else {
            return PunnettSquare::empty();
        };
        match (a.genotype.get(id), b.genotype.get(id)) {
            (Some(pair_a), Some(pair_b)) => PunnettSquare::cross(pair_a, pair_b),
            _ => PunnettSquare::empty(),
        }
    }

    /// The 4x4 cross table over both parents' gamete sets for two traits.
    pub fn dihybrid_square(
        &self,
        parent_a: DragonId,
        parent_b: DragonId,
        trait_a: DragonTrait,
        trait_b: DragonTrait,
    ) -> DihybridSquare {
        let (Some(a), Some(b)) = (self.dragon(parent_a), self.dragon(parent_b)) else {
            return DihybridSquare::empty();
        };
        let gametes_a = gametes(&a.genotype, trait_a, trait_b);
        let gametes_b = gametes(&b.genotype, trait_a, trait_b);
        if gametes_a.is_empty() || gametes_b.is_empty() {
            return DihybridSquare::empty();
        }
        DihybridSquare::cross(&gametes_a, &gametes_b)
    }

    /// Tallies the phenotype of every cell into a fraction of the table.
    /// Empty when the trait is not active or the square is empty.
    pub fn punnett_probabilities(
        &self,
        square: &PunnettSquare,
        id: DragonTrait,
    ) -> BTreeMap<String, f64> {
        let mut probabilities = BTreeMap::new();
        let Some(def) = self.trait_def(id) else {
            return probabilities;
        };
        if square.is_empty() {
            return probabilities;
        }

        let total = square.cells().len() as f64;
        for cell in square.cells() {
            *probabilities
                .entry(def.phenotype_of(cell).to_string())
                .or_insert(0.0) += 1.0 / total;
        }
        probabilities
    }

    /// Same tally over a dihybrid table, keyed by the concatenated
    /// two-trait phenotype label (`"labelA, labelB"`).
    pub fn dihybrid_probabilities(
        &self,
        square: &DihybridSquare,
        trait_a: DragonTrait,
        trait_b: DragonTrait,
    ) -> BTreeMap<String, f64> {
        let mut probabilities = BTreeMap::new();
        let (Some(def_a), Some(def_b)) = (self.trait_def(trait_a), self.trait_def(trait_b)) else {
            return probabilities;
        };
        if square.is_empty() {
            return probabilities;
        }

        let total = square.cells().len() as f64;
        for cell in square.cells() {
            let label = format!(
                "{}, {}",
                def_a.phenotype_of(&cell.first),
                def_b.phenotype_of(&cell.second)
            );
            *probabilities.entry(label).or_insert(0.0) += 1.0 / total;
        }
        probabilities
    }

    /// Renames a dragon in place.
    pub fn rename_dragon(&mut self, id: DragonId, name: String) -> Result<(), GeneticsError> {
        let dragon = self
            .dragons
            .iter_mut()
            .find(|dragon| dragon.id == id)
            .ok_or(GeneticsError::UnknownDragon(id))?;
        dragon.name = name;
        Ok(())
    }

    /// Assigns a dragon to a breeding slot. Assigning a dragon already in
    /// the other slot vacates that slot first.
    pub fn select_parent(&mut self, slot: ParentSlot, id: DragonId) -> Result<(), GeneticsError> {
        if self.dragon(id).is_none() {
            return Err(GeneticsError::UnknownDragon(id));
        }
        match slot {
            ParentSlot::A => {
                if self.selection.parent_b == Some(id) {
                    self.selection.parent_b = None;
                }
                self.selection.parent_a = Some(id);
            }
            ParentSlot::B => {
                if self.selection.parent_a == Some(id) {
                    self.selection.parent_a = None;
                }
                self.selection.parent_b = Some(id);
            }
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = BreedingSelection::default();
    }

    /// Switches the active trait set and fully resets the collection.
    /// Returns `false` (and does nothing) when the level is unchanged.
    pub fn set_level(&mut self, level: DifficultyLevel) -> bool {
        if level == self.level {
            return false;
        }
        self.level = level;
        self.reset();
        true
    }

    /// Clears the collection and id counter, then respawns the two
    /// canonical starters for the active trait set.
    pub fn reset(&mut self) {
        self.dragons.clear();
        self.next_id = 0;
        self.selection = BreedingSelection::default();

        let dominant = Genotype::homozygous_dominant(self.active_traits());
        let recessive = Genotype::homozygous_recessive(self.active_traits());
        self.spawn_dragon(dominant, Some(STARTER_DOMINANT.into()), 0);
        self.spawn_dragon(recessive, Some(STARTER_RECESSIVE.into()), 0);
    }
}
