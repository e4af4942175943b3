//! Behavioural tests for the dummy-items crate.
//!
//! These tests validate catalogue parsing and seeded item generation against
//! Gherkin scenarios.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use dummy_items::{CatalogueError, ItemCatalogue, generate_items};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

const VALID_CATALOGUE_JSON: &str = r#"{
    "version": 1,
    "items": ["Lever (레버)", "Piston (피스톤)", "Hopper (호퍼)"]
}"#;

/// Test world holding the parsed catalogue and generated items.
#[derive(Default, ScenarioState)]
struct World {
    json_input: Slot<String>,
    catalogue_result: Slot<Result<ItemCatalogue, CatalogueError>>,
    first_generation: Slot<Vec<String>>,
    second_generation: Slot<Vec<String>>,
}

impl World {
    fn catalogue(&self) -> ItemCatalogue {
        self.catalogue_result
            .get()
            .expect("catalogue should be set")
            .expect("catalogue should be valid")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a valid item catalogue JSON")]
fn a_valid_item_catalogue_json(world: &World) {
    world.json_input.set(VALID_CATALOGUE_JSON.to_owned());
}

#[given("the built-in catalogue")]
fn the_built_in_catalogue(world: &World) {
    world.catalogue_result.set(Ok(ItemCatalogue::builtin()));
}

#[given("catalogue JSON with an empty items array")]
fn catalogue_json_with_an_empty_items_array(world: &World) {
    world
        .json_input
        .set(r#"{ "version": 1, "items": [] }"#.to_owned());
}

#[when("the catalogue is parsed")]
fn the_catalogue_is_parsed(world: &World) {
    let json = world.json_input.get().expect("JSON input should be set");
    world.catalogue_result.set(ItemCatalogue::from_json(&json));
}

#[when("{count:usize} items are generated twice with seed {seed:u64}")]
fn items_are_generated_twice_with_seed(world: &World, count: usize, seed: u64) {
    let catalogue = world.catalogue();
    world
        .first_generation
        .set(generate_items(&catalogue, seed, count));
    world
        .second_generation
        .set(generate_items(&catalogue, seed, count));
}

#[then("parsing succeeds with {count:usize} items")]
fn parsing_succeeds_with_items(world: &World, count: usize) {
    assert_eq!(world.catalogue().items().len(), count);
}

#[then("both generations produce identical items")]
fn both_generations_produce_identical_items(world: &World) {
    let first = world.first_generation.get().expect("first generation");
    let second = world.second_generation.get().expect("second generation");
    assert_eq!(first, second, "Generations should be deterministic");
}

#[then("every generated item exists in the catalogue")]
fn every_generated_item_exists_in_the_catalogue(world: &World) {
    let catalogue = world.catalogue();
    for item in world.first_generation.get().expect("first generation") {
        assert!(
            catalogue.items().contains(&item),
            "Item {item} not in catalogue"
        );
    }
}

#[then("parsing fails with an empty items error")]
fn parsing_fails_with_an_empty_items_error(world: &World) {
    match world.catalogue_result.get() {
        Some(Err(CatalogueError::EmptyItems)) => {}
        other => panic!("Expected EmptyItems, got: {other:?}"),
    }
}

#[scenario(
    path = "tests/features/dummy_items.feature",
    name = "Valid catalogue parses successfully"
)]
fn valid_catalogue_parses_successfully(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dummy_items.feature",
    name = "Seeded generation is reproducible"
)]
fn seeded_generation_is_reproducible(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dummy_items.feature",
    name = "Generated items stay within the catalogue"
)]
fn generated_items_stay_within_the_catalogue(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/dummy_items.feature",
    name = "Empty catalogue fails parsing"
)]
fn empty_catalogue_fails_parsing(world: World) {
    let _ = world;
}
