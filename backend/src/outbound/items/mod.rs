//! Item generator adapter over the `dummy-items` catalogue.

use std::sync::Mutex;

use dummy_items::{ItemCatalogue, pick_items};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::domain::ItemCount;
use crate::domain::ports::ItemGenerator;

enum Source {
    ThreadRng,
    Seeded(Mutex<ChaCha8Rng>),
}

/// Picks placeholder items from an [`ItemCatalogue`].
///
/// Draws from the thread RNG by default; [`CatalogueItemGenerator::seeded`]
/// makes the sequence of generated inventories reproducible.
pub struct CatalogueItemGenerator {
    catalogue: ItemCatalogue,
    source: Source,
}

impl CatalogueItemGenerator {
    pub fn new(catalogue: ItemCatalogue) -> Self {
        Self {
            catalogue,
            source: Source::ThreadRng,
        }
    }

    pub fn seeded(catalogue: ItemCatalogue, seed: u64) -> Self {
        Self {
            catalogue,
            source: Source::Seeded(Mutex::new(ChaCha8Rng::seed_from_u64(seed))),
        }
    }
}

impl Default for CatalogueItemGenerator {
    fn default() -> Self {
        Self::new(ItemCatalogue::builtin())
    }
}

impl ItemGenerator for CatalogueItemGenerator {
    fn generate(&self, count: ItemCount) -> Vec<String> {
        match &self.source {
            Source::ThreadRng => pick_items(&self.catalogue, &mut rand::rng(), count.get()),
            Source::Seeded(rng) => {
                // A poisoned lock still holds a usable RNG state.
                let mut rng = rng.lock().unwrap_or_else(|poisoned| {
                    warn!("item generator lock poisoned; continuing");
                    poisoned.into_inner()
                });
                pick_items(&self.catalogue, &mut *rng, count.get())
            }
        }
    }
}
