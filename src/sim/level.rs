//! Level generation
//!
//! Bricks sit on a fixed `BRICK_ROWS x BRICKS_PER_ROW` grid spanning the full
//! arena width. Where the special bricks go (counter and bonus columns) comes
//! from a dedicated generator seeded with [`LAYOUT_SEED`], so every level and
//! every run share the same layout. Only the bonus *type* is drawn from the
//! caller's general-purpose generator.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::aabb::Aabb;
use super::state::{BonusKind, Block, BrickColor, INDESTRUCTIBLE};
use crate::consts::*;

/// Per-row special columns, chosen once per layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialColumns {
    pub bonus: [usize; BRICK_ROWS],
    pub counter: [usize; BRICK_ROWS],
}

/// Pick one bonus column and one distinct counter column per row.
///
/// Edge columns are never picked; they hold the top-row walls.
pub fn special_columns() -> SpecialColumns {
    let mut layout_rng = Pcg32::seed_from_u64(LAYOUT_SEED);
    let mut bonus = [0; BRICK_ROWS];
    let mut counter = [0; BRICK_ROWS];

    for row in 0..BRICK_ROWS {
        bonus[row] = layout_rng.random_range(1..BRICKS_PER_ROW - 1);
        counter[row] = loop {
            let col = layout_rng.random_range(1..BRICKS_PER_ROW - 1);
            if col != bonus[row] {
                break col;
            }
        };
    }

    SpecialColumns { bonus, counter }
}

/// Brick width so that the row plus its gaps spans exactly `2 * half_width`
pub fn brick_width(half_width: f32) -> f32 {
    let total_gap = (BRICKS_PER_ROW - 1) as f32 * BRICK_GAP;
    (2.0 * half_width - total_gap) / BRICKS_PER_ROW as f32
}

/// Rectangle of grid slot (row, col)
fn slot_rect(row: usize, col: usize, half_width: f32) -> Aabb {
    let width = brick_width(half_width);
    Aabb::new(
        Vec2::new(
            -half_width + col as f32 * (width + BRICK_GAP),
            BRICK_START_Y - row as f32 * (BRICK_HEIGHT + BRICK_GAP),
        ),
        Vec2::new(width, BRICK_HEIGHT),
    )
}

/// Build a fresh brick grid for an arena of the given half-width
pub fn generate_level<R: Rng>(half_width: f32, rng: &mut R) -> Vec<Block> {
    let specials = special_columns();
    let mut blocks = Vec::with_capacity(BRICK_ROWS * BRICKS_PER_ROW);

    for row in 0..BRICK_ROWS {
        let tier = BrickColor::for_row(row);
        for col in 0..BRICKS_PER_ROW {
            let mut block = Block {
                rect: slot_rect(row, col, half_width),
                color: tier.rgba(false),
                color_kind: tier,
                active: true,
                points: tier.points(),
                hit_counter: 1,
                is_wall: false,
                is_reflective: false,
                bonus: None,
            };

            let outer_edge = col == 0 || col == BRICKS_PER_ROW - 1;
            let inner_edge = col == 1 || col == BRICKS_PER_ROW - 2;

            if row == 0 && outer_edge {
                block.is_wall = true;
                block.hit_counter = INDESTRUCTIBLE;
                block.color_kind = BrickColor::Gray;
                block.color = BrickColor::Gray.rgba(false);
            } else if row == 0 && inner_edge {
                block.is_wall = true;
                block.is_reflective = true;
                block.hit_counter = INDESTRUCTIBLE;
                block.color_kind = BrickColor::White;
                block.color = BrickColor::White.rgba(false);
            } else if col == specials.counter[row] {
                block.hit_counter = 2;
                block.color = tier.rgba(true);
            } else if col == specials.bonus[row] {
                block.bonus = BonusKind::from_index(rng.random_range(0..BonusKind::ALL.len()));
            }

            blocks.push(block);
        }
    }

    log::debug!(
        "Generated {} bricks (half_width={:.3})",
        blocks.len(),
        half_width
    );
    blocks
}

/// Move existing bricks onto the grid for a new arena half-width.
///
/// Only geometry changes; active/type/counter/points state is untouched.
pub fn relayout(blocks: &mut [Block], half_width: f32) {
    for (index, block) in blocks.iter_mut().enumerate() {
        let row = index / BRICKS_PER_ROW;
        let col = index % BRICKS_PER_ROW;
        block.rect = slot_rect(row, col, half_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn placement(blocks: &[Block]) -> Vec<(bool, bool, i32, bool)> {
        blocks
            .iter()
            .map(|b| (b.is_wall, b.is_reflective, b.hit_counter, b.bonus.is_some()))
            .collect()
    }

    #[test]
    fn test_grid_size() {
        let mut rng = Pcg32::seed_from_u64(1);
        let blocks = generate_level(1.0, &mut rng);
        assert_eq!(blocks.len(), BRICK_ROWS * BRICKS_PER_ROW);
        assert!(blocks.iter().all(|b| b.active));
    }

    #[test]
    fn test_row_spans_arena_width() {
        let mut rng = Pcg32::seed_from_u64(1);
        let blocks = generate_level(1.777, &mut rng);
        let first = &blocks[0];
        let last = &blocks[BRICKS_PER_ROW - 1];
        assert!((first.rect.min().x + 1.777).abs() < 1e-5);
        assert!((last.rect.max().x - 1.777).abs() < 1e-4);
    }

    #[test]
    fn test_walls_on_top_row() {
        let mut rng = Pcg32::seed_from_u64(1);
        let blocks = generate_level(1.0, &mut rng);
        for col in [0, BRICKS_PER_ROW - 1] {
            let b = &blocks[col];
            assert!(b.is_wall && !b.is_reflective);
            assert_eq!(b.hit_counter, INDESTRUCTIBLE);
        }
        for col in [1, BRICKS_PER_ROW - 2] {
            let b = &blocks[col];
            assert!(b.is_wall && b.is_reflective);
            assert_eq!(b.color_kind, BrickColor::White);
        }
        assert_eq!(blocks.iter().filter(|b| b.is_wall).count(), 4);
    }

    #[test]
    fn test_special_columns_distinct_and_inside() {
        let specials = special_columns();
        for row in 0..BRICK_ROWS {
            assert_ne!(specials.bonus[row], specials.counter[row]);
            for col in [specials.bonus[row], specials.counter[row]] {
                assert!(col >= 1 && col <= BRICKS_PER_ROW - 2);
            }
        }
    }

    #[test]
    fn test_layout_is_deterministic_across_general_rng() {
        let a = generate_level(1.0, &mut Pcg32::seed_from_u64(1));
        let b = generate_level(1.0, &mut Pcg32::seed_from_u64(999));
        assert_eq!(placement(&a), placement(&b));
    }

    #[test]
    fn test_counter_bricks_are_darker_and_keep_tier() {
        let mut rng = Pcg32::seed_from_u64(1);
        let blocks = generate_level(1.0, &mut rng);
        let specials = special_columns();
        let row = 3;
        let b = &blocks[row * BRICKS_PER_ROW + specials.counter[row]];
        assert_eq!(b.hit_counter, 2);
        assert_eq!(b.color_kind, BrickColor::Orange);
        assert_eq!(b.color, BrickColor::Orange.rgba(true));
        assert_eq!(b.points, 5);
    }

    #[test]
    fn test_relayout_preserves_state() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut blocks = generate_level(1.0, &mut rng);
        blocks[20].active = false;
        blocks[30].hit_counter = 1;
        let before = placement(&blocks);

        relayout(&mut blocks, 2.0);

        assert!(!blocks[20].active);
        assert_eq!(blocks[30].hit_counter, 1);
        assert_eq!(placement(&blocks), before);
        assert!((blocks[0].rect.min().x + 2.0).abs() < 1e-6);
        assert!((blocks[0].rect.size.x - brick_width(2.0)).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_relayout_stays_inside_bounds(half_width in 1.0f32..4.0, half_height in 1.0f32..4.0) {
            let mut blocks = generate_level(1.0, &mut Pcg32::seed_from_u64(0));
            relayout(&mut blocks, half_width);
            // Arena plus a rounding margin on the sides, unbounded below
            let tol = 1e-4;
            let floor = -100.0;
            let arena = Aabb::new(
                Vec2::new(-half_width - tol, floor),
                Vec2::new(2.0 * (half_width + tol), half_height - floor),
            );
            for b in blocks.iter().filter(|b| b.active) {
                prop_assert!(arena.contains(&b.rect));
            }
        }
    }
}
