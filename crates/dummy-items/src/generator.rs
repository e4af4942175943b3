//! Random and seeded item selection from a catalogue.

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalogue::ItemCatalogue;

/// Draws `count` items from the catalogue using the supplied RNG.
///
/// Items are drawn with replacement, so the same name may appear more than
/// once. Because a catalogue is never empty the result always holds exactly
/// `count` names.
///
/// # Example
///
/// ```
/// use dummy_items::{ItemCatalogue, pick_items};
///
/// let items = pick_items(&ItemCatalogue::builtin(), &mut rand::rng(), 3);
/// assert_eq!(items.len(), 3);
/// ```
pub fn pick_items<R>(catalogue: &ItemCatalogue, rng: &mut R, count: usize) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let items = catalogue.items();
    (0..count)
        .filter_map(|_| items.choose(rng).cloned())
        .collect()
}

/// Draws `count` items deterministically from `seed`.
///
/// The same catalogue, seed and count always produce the same list.
#[must_use]
pub fn generate_items(catalogue: &ItemCatalogue, seed: u64, count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    pick_items(catalogue, &mut rng, count)
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn catalogue() -> ItemCatalogue {
        ItemCatalogue::from_json(r#"{"version":1,"items":["Lever","Piston","Hopper"]}"#)
            .expect("valid catalogue")
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(20)]
    fn produces_requested_count(catalogue: ItemCatalogue, #[case] count: usize) {
        assert_eq!(generate_items(&catalogue, 7, count).len(), count);
        assert_eq!(pick_items(&catalogue, &mut rand::rng(), count).len(), count);
    }

    #[rstest]
    fn same_seed_is_reproducible(catalogue: ItemCatalogue) {
        assert_eq!(
            generate_items(&catalogue, 42, 10),
            generate_items(&catalogue, 42, 10)
        );
    }

    #[rstest]
    fn items_come_from_the_catalogue(catalogue: ItemCatalogue) {
        for item in generate_items(&catalogue, 99, 50) {
            assert!(catalogue.items().contains(&item), "unexpected item {item}");
        }
    }

    #[rstest]
    fn single_item_catalogue_repeats_its_item() {
        let catalogue =
            ItemCatalogue::from_json(r#"{"version":1,"items":["TNT"]}"#).expect("valid catalogue");
        assert_eq!(generate_items(&catalogue, 1, 3), vec!["TNT"; 3]);
    }
}
