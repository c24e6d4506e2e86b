//! Validates coordinate ranges, hydration, expansion, and reveal scheduling

use islet::island::layout::{Layout, Viewport, centering_offset, responsive_factor};
use islet::island::model::{Island, IslandConfig};
use islet::island::range::{Coord, coords_for_size, in_grid, range_for_size};
use islet::island::reveal::{self, Clock, RevealBatch};
use islet::store::Storage;

const EPSILON: f64 = 1e-9;

fn test_config(base_size: u32) -> IslandConfig {
    IslandConfig {
        base_size,
        ..IslandConfig::default()
    }
}

fn fresh_island(base_size: u32) -> (Island, Storage) {
    let mut store = Storage::in_memory("test");
    let island = Island::new(&test_config(base_size), &mut store);
    (island, store)
}

struct VirtualClock {
    now: u64,
    slept: Vec<u64>,
}

impl VirtualClock {
    const fn new() -> Self {
        Self {
            now: 0,
            slept: Vec::new(),
        }
    }
}

impl Clock for VirtualClock {
    fn sleep_ms(&mut self, ms: u64) {
        self.now += ms;
        self.slept.push(ms);
    }
}

#[test]
fn test_range_yields_exactly_size_integers() {
    for size in 1..=64 {
        let range = range_for_size(size);
        assert_eq!(range.len(), size, "size {size} should span {size} integers");
        assert_eq!(
            range.max - range.min,
            size as i32 - 1,
            "max - min should equal size - 1 for size {size}"
        );
        assert!(!range.is_empty());
    }
}

#[test]
fn test_range_examples() {
    let even = range_for_size(20);
    assert_eq!((even.min, even.max), (-10, 9));

    let odd = range_for_size(21);
    assert_eq!((odd.min, odd.max), (-10, 10));
}

#[test]
fn test_enumeration_is_row_major() {
    let coords = coords_for_size(3);
    assert_eq!(coords.len(), 9);
    assert_eq!(coords.first().copied(), Some(Coord::new(-1, -1)));
    assert_eq!(coords.get(1).copied(), Some(Coord::new(0, -1)));
    assert_eq!(coords.last().copied(), Some(Coord::new(1, 1)));

    let keys: Vec<_> = coords.iter().map(|coord| coord.row_major_key()).collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted, "enumeration should already be row-major");
}

#[test]
fn test_in_grid_matches_range() {
    assert!(in_grid(4, Coord::new(-2, 1)));
    assert!(!in_grid(4, Coord::new(2, 0)));
    assert!(in_grid(5, Coord::new(2, -2)));
}

#[test]
fn test_scale_shrinks_exponentially_per_level() {
    let layout = Layout::new(28.0, Viewport::new(1280.0, 800.0));
    assert!((layout.tile_scale(0) - 28.0).abs() < EPSILON);
    let expected = 28.0 * 0.97 * 0.97;
    assert!(
        (layout.tile_scale(2) - expected).abs() < EPSILON,
        "level 2 scale should be ~26.35, got {}",
        layout.tile_scale(2)
    );
}

#[test]
fn test_responsive_factor_only_shrinks_small_viewports() {
    let wide = Viewport::new(1920.0, 1080.0);
    assert!((responsive_factor(wide, 28.0) - 1.0).abs() < EPSILON);

    // 280px along the limiting axis, 560px needed for 20 cells at 28px
    let narrow = Viewport::new(280.0, 900.0);
    assert!((responsive_factor(narrow, 28.0) - 0.5).abs() < EPSILON);
}

#[test]
fn test_centering_offset_even_odd() {
    assert!((centering_offset(20) - 0.5).abs() < EPSILON);
    assert!(centering_offset(21).abs() < EPSILON);
}

#[test]
fn test_tile_positions_are_centred() {
    let layout = Layout::new(28.0, Viewport::new(1280.0, 800.0));
    // Even size: (0 + 0.5) * 28
    let [x, y] = layout.position(Coord::new(0, 0), 2, 0);
    assert!((x - 14.0).abs() < EPSILON);
    assert!((y - 14.0).abs() < EPSILON);
    // Odd size: no centering correction
    let [x, _] = layout.position(Coord::new(1, 0), 3, 0);
    assert!((x - 28.0).abs() < EPSILON);
}

#[test]
fn test_hydration_materializes_full_square() {
    let (island, _store) = fresh_island(4);
    assert_eq!(island.size(), 4);
    assert_eq!(island.level(), 0);
    assert_eq!(island.tile_count(), 16);
    for coord in coords_for_size(4) {
        assert!(
            island.tile(coord).is_some_and(|tile| !tile.entering),
            "tile at {coord} should be materialized and visible"
        );
    }
}

#[test]
fn test_hydration_is_idempotent() {
    let mut store = Storage::in_memory("test");
    let config = test_config(5);

    let first = Island::new(&config, &mut store);
    let kinds: Vec<_> = coords_for_size(5)
        .into_iter()
        .map(|coord| first.tile(coord).map(|tile| tile.kind.clone()))
        .collect();

    let second = Island::new(&config, &mut store);
    let rehydrated: Vec<_> = coords_for_size(5)
        .into_iter()
        .map(|coord| second.tile(coord).map(|tile| tile.kind.clone()))
        .collect();

    assert_eq!(kinds, rehydrated);
}

#[test]
fn test_expansion_grows_size_and_level() {
    let (mut island, mut store) = fresh_island(4);
    let batch = island.expand(&mut store, 2, "sand");

    assert_eq!(island.size(), 6);
    assert_eq!(island.level(), 1);
    assert_eq!(island.tile_count(), 36);
    assert_eq!(batch.steps().len(), 36 - 16);
}

#[test]
fn test_expansion_assigns_fallback_to_new_cells() {
    let (mut island, mut store) = fresh_island(4);
    island.expand(&mut store, 2, "sand");

    for coord in coords_for_size(6) {
        let expected = if in_grid(4, coord) { "tile1" } else { "sand" };
        assert!(
            island
                .tile(coord)
                .is_some_and(|tile| tile.kind == expected),
            "tile at {coord} should have type {expected}"
        );
    }
}

#[test]
fn test_expansion_preserves_previously_assigned_types() {
    let mut store = Storage::in_memory("test");
    // Seed a type outside the starting range before the island exists
    store.set("island:cell:2,2", "{\"type\":\"gold\"}");

    let mut island = Island::new(&test_config(4), &mut store);
    island.expand(&mut store, 2, "sand");

    assert!(
        island
            .tile(Coord::new(2, 2))
            .is_some_and(|tile| tile.kind == "gold"),
        "previously assigned type should win over the expansion fallback"
    );
}

#[test]
fn test_expansion_persists_size_and_level() {
    let mut store = Storage::in_memory("test");
    let mut island = Island::new(&test_config(4), &mut store);
    island.expand(&mut store, 3, "sand");

    // A fresh model over the same store resumes the expanded state
    let resumed = Island::new(&test_config(4), &mut store);
    assert_eq!(resumed.size(), 7);
    assert_eq!(resumed.level(), 1);
    assert_eq!(resumed.tile_count(), 49);
}

#[test]
fn test_expansion_repositions_existing_tiles() {
    let (mut island, mut store) = fresh_island(2);
    island.expand(&mut store, 2, "sand");

    // Size 4 stays even, level 1 shrinks the scale by one decay step
    let expected = (0.0 + 0.5) * 28.0 * 0.97;
    assert!(
        island
            .tile(Coord::new(0, 0))
            .is_some_and(|tile| (tile.position[0] - expected).abs() < EPSILON
                && (tile.position[1] - expected).abs() < EPSILON)
    );
}

#[test]
fn test_reveal_schedule_is_row_major_and_bounded() {
    let (mut island, mut store) = fresh_island(4);
    let batch = island.expand(&mut store, 2, "sand");

    let steps = batch.steps();
    assert_eq!(batch.total_ms(), 3000);

    let mut previous_at = 0;
    let mut previous_key = None;
    for step in steps {
        assert!(step.at_ms >= previous_at, "delays should be non-decreasing");
        assert!(step.at_ms <= 3000, "no reveal may exceed the total duration");
        previous_at = step.at_ms;

        let key = step.coord.row_major_key();
        assert!(
            previous_key.is_none_or(|last| last < key),
            "reveal order should be strictly ascending (y, x)"
        );
        previous_key = Some(key);
    }

    // Evenly divided: 20 new tiles over 3000ms is one reveal per 150ms
    assert_eq!(steps.first().map(|step| step.at_ms), Some(0));
    assert_eq!(steps.last().map(|step| step.at_ms), Some(2850));
}

#[test]
fn test_empty_expansion_completes_immediately() {
    let (mut island, mut store) = fresh_island(4);
    let batch = island.expand(&mut store, 0, "sand");

    assert_eq!(island.size(), 4);
    assert_eq!(island.level(), 1);
    assert!(batch.steps().is_empty());
    assert_eq!(batch.total_ms(), 0);
}

#[test]
fn test_play_reveals_every_entering_tile() {
    let (mut island, mut store) = fresh_island(4);
    let mut batch = island.expand(&mut store, 2, "sand");
    assert!(island.tiles().any(|tile| tile.entering));

    let mut clock = VirtualClock::new();
    let mut observed = 0;
    reveal::play(&mut island, &mut batch, &mut clock, |revealed, total| {
        observed = revealed;
        assert_eq!(total, 20);
    });

    assert_eq!(observed, 20);
    assert!(island.tiles().all(|tile| !tile.entering));
    assert_eq!(
        clock.now, 3000,
        "the driver should wait out the full duration"
    );
    assert_eq!(clock.slept.iter().sum::<u64>(), 3000);
}

#[test]
fn test_cancelled_batch_stops_revealing() {
    let (mut island, mut store) = fresh_island(4);
    let mut batch = island.expand(&mut store, 2, "sand");
    batch.cancel();

    let mut clock = VirtualClock::new();
    reveal::play(&mut island, &mut batch, &mut clock, |_, _| {});

    assert!(island.tiles().any(|tile| tile.entering));
    assert_eq!(clock.now, 0, "a cancelled batch should not wait");
}

#[test]
fn test_take_due_walks_the_schedule_in_order() {
    let mut batch = RevealBatch::new(
        vec![Coord::new(1, 0), Coord::new(0, 0), Coord::new(0, 1)],
        3000,
    );

    // 3 steps over 3000ms: due at 0, 1000, 2000
    assert_eq!(batch.take_due(0), vec![Coord::new(0, 0)]);
    assert_eq!(batch.take_due(999), Vec::<Coord>::new());
    assert_eq!(
        batch.take_due(2500),
        vec![Coord::new(1, 0), Coord::new(0, 1)]
    );
    assert!(batch.is_drained());
}

#[test]
fn test_refresh_layout_restores_positions() {
    let (mut island, _store) = fresh_island(3);
    let before: Vec<_> = coords_for_size(3)
        .into_iter()
        .map(|coord| island.tile(coord).map(|tile| tile.position))
        .collect();

    island.refresh_layout();

    let after: Vec<_> = coords_for_size(3)
        .into_iter()
        .map(|coord| island.tile(coord).map(|tile| tile.position))
        .collect();
    assert_eq!(before, after);
}
