use std::path::PathBuf;

use thiserror::Error;

use crate::genetics::genotype::DragonId;
use crate::genetics::traits::DragonTrait;

/// Errors surfaced by the genetics store and trait configuration.
#[derive(Debug, Error)]
pub enum GeneticsError {
    /// A dragon id that is not (or no longer) present in the collection.
    #[error("no dragon with id {0}")]
    UnknownDragon(DragonId),

    /// A trait definition that cannot express complete dominance.
    #[error("invalid definition for trait {0}: {1}")]
    InvalidTraitDef(DragonTrait, String),

    #[error("failed to read trait config {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse trait config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
