use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::alleles::AllelePair;

/// Enumerated trait identifier.
///
/// The trait set is small and known at configuration time, so genotypes key
/// on this enum rather than on free-form strings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum DragonTrait {
    Fire,
    Wings,
}

/// Static rules for one trait: allele symbols and the phenotype labels they
/// express under complete dominance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDef {
    pub id: DragonTrait,
    pub name: String,
    pub dominant_allele: char,
    pub recessive_allele: char,
    pub dominant_phenotype: String,
    pub recessive_phenotype: String,
}

impl TraitDef {
    pub fn dominant_pair(&self) -> AllelePair {
        AllelePair::homozygous(self.dominant_allele)
    }

    pub fn recessive_pair(&self) -> AllelePair {
        AllelePair::homozygous(self.recessive_allele)
    }

    pub fn heterozygous_pair(&self) -> AllelePair {
        AllelePair(self.dominant_allele, self.recessive_allele)
    }

    /// Complete dominance: a single copy of the dominant symbol is enough
    /// for the dominant phenotype.
    pub fn phenotype_of(&self, pair: &AllelePair) -> &str {
        if pair.contains(self.dominant_allele) {
            &self.dominant_phenotype
        } else {
            &self.recessive_phenotype
        }
    }
}

/// Difficulty level selecting how many traits are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum DifficultyLevel {
    /// Level 1: a single trait, 2x2 Punnett squares.
    #[default]
    Monohybrid,
    /// Level 2: two traits, 4x4 dihybrid squares.
    Dihybrid,
}

impl DifficultyLevel {
    pub fn active_traits(self) -> &'static [DragonTrait] {
        match self {
            Self::Monohybrid => &[DragonTrait::Fire],
            Self::Dihybrid => &[DragonTrait::Fire, DragonTrait::Wings],
        }
    }
}

/// All trait definitions known to the simulation, keyed by trait id.
#[derive(Debug, Clone)]
pub struct TraitLibrary {
    defs: BTreeMap<DragonTrait, TraitDef>,
}

impl TraitLibrary {
    /// The built-in trait table, used when no config file overrides it.
    pub fn builtin() -> Self {
        let mut library = Self {
            defs: BTreeMap::new(),
        };
        library.insert(TraitDef {
            id: DragonTrait::Fire,
            name: "Fire Breathing".into(),
            dominant_allele: 'F',
            recessive_allele: 'f',
            dominant_phenotype: "Fire-breathing".into(),
            recessive_phenotype: "Non-fire-breathing".into(),
        });
        library.insert(TraitDef {
            id: DragonTrait::Wings,
            name: "Wings".into(),
            dominant_allele: 'W',
            recessive_allele: 'w',
            dominant_phenotype: "Winged".into(),
            recessive_phenotype: "Wingless".into(),
        });
        library
    }

    pub fn insert(&mut self, def: TraitDef) {
        self.defs.insert(def.id, def);
    }

    pub fn get(&self, id: DragonTrait) -> Option<&TraitDef> {
        self.defs.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TraitDef> {
        self.defs.values()
    }
}

impl Default for TraitLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
