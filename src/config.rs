//! RON-loadable trait definitions.
//!
//! The built-in trait table covers the shipped lesson; a `traits.ron` file
//! can re-label traits or swap allele symbols without recompiling.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GeneticsError;
use crate::genetics::traits::{TraitDef, TraitLibrary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitConfig {
    pub traits: Vec<TraitDef>,
}

impl TraitConfig {
    pub fn load(path: &Path) -> Result<Self, GeneticsError> {
        let text = fs::read_to_string(path).map_err(|source| GeneticsError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TraitConfig =
            ron::from_str(&text).map_err(|source| GeneticsError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), GeneticsError> {
        for def in &self.traits {
            if def.dominant_allele == def.recessive_allele {
                return Err(GeneticsError::InvalidTraitDef(
                    def.id,
                    format!("dominant and recessive allele are both '{}'", def.dominant_allele),
                ));
            }
            if def.dominant_phenotype.is_empty() || def.recessive_phenotype.is_empty() {
                return Err(GeneticsError::InvalidTraitDef(
                    def.id,
                    "phenotype labels must not be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Overlays the configured definitions onto the built-in table, so a
    /// config may redefine one trait without restating the other.
    pub fn into_library(self) -> TraitLibrary {
        let mut library = TraitLibrary::builtin();
        for def in self.traits {
            library.insert(def);
        }
        library
    }
}
