//! Educational dragon-breeding simulation teaching Mendelian inheritance.
//!
//! The core is [`genetics::GeneticsState`]: it owns the dragon collection,
//! derives phenotypes from genotypes under complete dominance, performs
//! random Mendelian allele inheritance on breeding, and builds Punnett and
//! dihybrid cross tables with their probability distributions. The
//! [`genetics::GeneticsPlugin`] wires the store into a Bevy app behind
//! request/notification events so presentation code never touches it
//! directly.

pub mod config;
pub mod error;
pub mod genetics;
pub mod quiz;

pub use error::GeneticsError;
