use std::collections::BTreeMap;
use std::fmt::{self, Display};

use super::alleles::AllelePair;
use super::traits::{DragonTrait, TraitDef};

/// Sequential dragon identifier. Ids are process-lifetime unique and never
/// reused; only a full collection reset restarts the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DragonId(pub u32);

impl Display for DragonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The allele pairs a dragon carries, keyed by trait.
///
/// An ordered map keeps display and table output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genotype {
    pairs: BTreeMap<DragonTrait, AllelePair>,
}

impl Genotype {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for literal genotypes in tests and demos.
    pub fn with_pair(mut self, id: DragonTrait, pair: AllelePair) -> Self {
        self.insert(id, pair);
        self
    }

    pub fn insert(&mut self, id: DragonTrait, pair: AllelePair) {
        self.pairs.insert(id, pair);
    }

    pub fn get(&self, id: DragonTrait) -> Option<&AllelePair> {
        self.pairs.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DragonTrait, &AllelePair)> {
        self.pairs.iter().map(|(id, pair)| (*id, pair))
    }

    /// Homozygous dominant across the given traits.
    pub fn homozygous_dominant<'a>(defs: impl IntoIterator<Item = &'a TraitDef>) -> Self {
        let mut genotype = Self::new();
        for def in defs {
            genotype.insert(def.id, def.dominant_pair());
        }
        genotype
    }

    /// Homozygous recessive across the given traits.
    pub fn homozygous_recessive<'a>(defs: impl IntoIterator<Item = &'a TraitDef>) -> Self {
        let mut genotype = Self::new();
        for def in defs {
            genotype.insert(def.id, def.recessive_pair());
        }
        genotype
    }

    /// Heterozygous across the given traits.
    pub fn heterozygous<'a>(defs: impl IntoIterator<Item = &'a TraitDef>) -> Self {
        let mut genotype = Self::new();
        for def in defs {
            genotype.insert(def.id, def.heterozygous_pair());
        }
        genotype
    }
}

impl Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for pair in self.pairs.values() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{pair}")?;
            first = false;
        }
        Ok(())
    }
}

/// Observable trait expression, derived from a genotype under complete
/// dominance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phenotype {
    labels: BTreeMap<DragonTrait, String>,
}

impl Phenotype {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: DragonTrait, label: String) {
        self.labels.insert(id, label);
    }

    pub fn get(&self, id: DragonTrait) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DragonTrait, &str)> {
        self.labels.iter().map(|(id, label)| (*id, label.as_str()))
    }
}

impl Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for label in self.labels.values() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{label}")?;
            first = false;
        }
        Ok(())
    }
}

/// One dragon in the collection.
#[derive(Debug, Clone)]
pub struct Dragon {
    pub id: DragonId,
    pub name: String,
    pub genotype: Genotype,
    pub phenotype: Phenotype,
    /// 0 for the starter "P" generation, 1 for bred offspring. Deeper
    /// ancestry is not tracked.
    pub generation: u32,
}
