//! Punnett square tables for monohybrid and dihybrid crosses.
//!
//! The tables are plain data: the cross of two parents' alleles (2x2) or
//! gamete sets (4x4), cells canonicalized. Probability tallies over them
//! live on [`GeneticsState`](super::state::GeneticsState), which knows the
//! phenotype labels.

use super::alleles::AllelePair;
use super::genotype::Genotype;
use super::traits::DragonTrait;

/// A 2x2 monohybrid cross table.
///
/// Columns come from parent A's alleles, rows from parent B's; cells are
/// stored row-major. An empty table means a parent lacked alleles for the
/// trait.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PunnettSquare {
    cells: Vec<AllelePair>,
}

impl PunnettSquare {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cross(parent_a: &AllelePair, parent_b: &AllelePair) -> Self {
        let mut cells = Vec::with_capacity(4);
        for row in parent_b.alleles() {
            for col in parent_a.alleles() {
                cells.push(AllelePair(col, row).canonical());
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[AllelePair] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// One gamete for a two-trait cross: one allele per trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gamete {
    pub first: char,
    pub second: char,
}

/// The four independent-assortment gamete types a genotype produces for two
/// traits. Empty when the genotype lacks a pair for either trait.
pub fn gametes(genotype: &Genotype, trait_a: DragonTrait, trait_b: DragonTrait) -> Vec<Gamete> {
    let (Some(pair_a), Some(pair_b)) = (genotype.get(trait_a), genotype.get(trait_b)) else {
        return Vec::new();
    };

    let mut combinations = Vec::with_capacity(4);
    for first in pair_a.alleles() {
        for second in pair_b.alleles() {
            combinations.push(Gamete { first, second });
        }
    }
    combinations
}

/// One cell of a dihybrid table: the offspring pair for each of the two
/// traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DihybridCell {
    pub first: AllelePair,
    pub second: AllelePair,
}

/// A 4x4 dihybrid cross table over two parents' gamete sets.
///
/// Same orientation as [`PunnettSquare`]: columns from parent A's gametes,
/// rows from parent B's, cells row-major.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DihybridSquare {
    cells: Vec<DihybridCell>,
}

impl DihybridSquare {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cross(gametes_a: &[Gamete], gametes_b: &[Gamete]) -> Self {
        let mut cells = Vec::with_capacity(gametes_a.len() * gametes_b.len());
        for row in gametes_b {
            for col in gametes_a {
                cells.push(DihybridCell {
                    first: AllelePair(col.first, row.first).canonical(),
                    second: AllelePair(col.second, row.second).canonical(),
                });
            }
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[DihybridCell] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genetics::traits::{DragonTrait, TraitLibrary};

    #[test]
    fn heterozygous_cross_yields_classic_table() {
        let square = PunnettSquare::cross(&AllelePair('F', 'f'), &AllelePair('F', 'f'));
        assert_eq!(
            square.cells(),
            &[
                AllelePair('F', 'F'),
                AllelePair('F', 'f'),
                AllelePair('F', 'f'),
                AllelePair('f', 'f'),
            ]
        );
    }

    #[test]
    fn cells_are_canonicalized() {
        // Parent A contributes the lowercase allele into the upper-right
        // cell; it must still come out dominant-first.
        let square = PunnettSquare::cross(&AllelePair('f', 'f'), &AllelePair('F', 'F'));
        assert!(square.cells().iter().all(|c| *c == AllelePair('F', 'f')));
    }

    #[test]
    fn double_heterozygote_produces_four_gamete_types() {
        let library = TraitLibrary::builtin();
        let genotype = Genotype::heterozygous(library.iter());

        let combos = gametes(&genotype, DragonTrait::Fire, DragonTrait::Wings);
        assert_eq!(
            combos,
            vec![
                Gamete {
                    first: 'F',
                    second: 'W'
                },
                Gamete {
                    first: 'F',
                    second: 'w'
                },
                Gamete {
                    first: 'f',
                    second: 'W'
                },
                Gamete {
                    first: 'f',
                    second: 'w'
                },
            ]
        );
    }

    #[test]
    fn gametes_require_both_trait_pairs() {
        let library = TraitLibrary::builtin();
        let fire_only = Genotype::new().with_pair(
            DragonTrait::Fire,
            library.get(DragonTrait::Fire).unwrap().heterozygous_pair(),
        );
        assert!(gametes(&fire_only, DragonTrait::Fire, DragonTrait::Wings).is_empty());
    }

    #[test]
    fn dihybrid_cross_has_sixteen_canonical_cells() {
        let library = TraitLibrary::builtin();
        let genotype = Genotype::heterozygous(library.iter());
        let set = gametes(&genotype, DragonTrait::Fire, DragonTrait::Wings);

        let square = DihybridSquare::cross(&set, &set);
        assert_eq!(square.cells().len(), 16);
        for cell in square.cells() {
            assert_eq!(cell.first, cell.first.canonical());
            assert_eq!(cell.second, cell.second.canonical());
        }
        // Top-left cell crosses the FW gametes of both parents.
        assert_eq!(
            square.cells()[0],
            DihybridCell {
                first: AllelePair('F', 'F'),
                second: AllelePair('W', 'W'),
            }
        );
    }
}
