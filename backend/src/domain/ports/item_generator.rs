//! Driven port supplying placeholder items for new inventories.

use crate::domain::ItemCount;

/// Produces item identifiers for a freshly registered user.
#[cfg_attr(test, mockall::automock)]
pub trait ItemGenerator: Send + Sync {
    /// Return exactly `count` item identifiers.
    fn generate(&self, count: ItemCount) -> Vec<String>;
}

/// Deterministic generator yielding `item-0`, `item-1`, ...
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItemGenerator;

impl ItemGenerator for FixtureItemGenerator {
    fn generate(&self, count: ItemCount) -> Vec<String> {
        (0..count.get()).map(|index| format!("item-{index}")).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(3)]
    #[case(20)]
    fn fixture_generates_exact_count(#[case] count: i64) {
        let items = FixtureItemGenerator.generate(ItemCount::clamped(count));
        assert_eq!(items.len(), usize::try_from(count).expect("small count"));
    }

    #[rstest]
    fn fixture_names_are_sequential() {
        assert_eq!(
            FixtureItemGenerator.generate(ItemCount::clamped(2)),
            vec!["item-0".to_owned(), "item-1".to_owned()]
        );
    }
}
