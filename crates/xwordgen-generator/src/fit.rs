//! Placement legality and candidate positions.
//!
//! A *slot* is a start cell plus a direction. [`fit_score`] decides whether a
//! word may be written into a slot and how good the slot is: 1 for a legal
//! slot, plus one for every letter it shares with a perpendicular word.

use std::cmp::Reverse;

use rand::{Rng, seq::SliceRandom as _};
use xwordgen_core::{Cell, Direction, Grid, Position};

use crate::{AdjacencyRule, SeedPlacement};

/// A legal slot for a word, with its fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slot {
    pub(crate) start: Position,
    pub(crate) direction: Direction,
    pub(crate) score: usize,
}

/// Returns `1 + crossings` if `letters` may be written at `start` in
/// `direction`, or `None` if the placement is illegal.
pub(crate) fn fit_score(
    grid: &Grid,
    letters: &[char],
    start: Position,
    direction: Direction,
    rule: AdjacencyRule,
) -> Option<usize> {
    let last = letters.len().checked_sub(1)?;
    let end = start.forward(direction, last)?;
    if !grid.contains(end) {
        return None;
    }

    // The word must not extend another word in line.
    if start
        .backward(direction, 1)
        .is_some_and(|before| grid.has_letter(before))
    {
        return None;
    }
    if end
        .forward(direction, 1)
        .is_some_and(|after| grid.has_letter(after))
    {
        return None;
    }

    let side = direction.perpendicular();
    let mut crossings = 0;
    for (i, &letter) in letters.iter().enumerate() {
        let pos = start.forward(direction, i)?;
        match grid.get(pos)? {
            Cell::Blocked => return None,
            Cell::Letter(existing) => {
                if existing != letter || grid.occupancy(pos).has(direction) {
                    return None;
                }
                crossings += 1;
            }
            Cell::Open => {
                if touches_letter(grid, pos, side, rule) {
                    return None;
                }
            }
        }
    }
    Some(crossings + 1)
}

/// Returns `true` if a new letter at `pos` would sit next to a letter on the
/// `side` axis that the rule forbids touching.
///
/// The strict rule forbids any such letter. The loose rule only forbids
/// letters of a word running along `side`, which the new letter would extend.
fn touches_letter(grid: &Grid, pos: Position, side: Direction, rule: AdjacencyRule) -> bool {
    let forbidden = |p: Position| {
        grid.has_letter(p)
            && match rule {
                AdjacencyRule::Strict => true,
                AdjacencyRule::Loose => grid.occupancy(p).has(side),
            }
    };
    pos.backward(side, 1).is_some_and(forbidden) || pos.forward(side, 1).is_some_and(forbidden)
}

/// Returns every legal slot where `letters` crosses at least one existing
/// letter, without duplicates.
pub(crate) fn crossing_slots(grid: &Grid, letters: &[char], rule: AdjacencyRule) -> Vec<Slot> {
    let mut slots = Vec::new();
    for (pos, ch) in grid.letters() {
        let occupancy = grid.occupancy(pos);
        for (i, _) in letters.iter().enumerate().filter(|&(_, &l)| l == ch) {
            for direction in Direction::ALL {
                if occupancy.has(direction) {
                    continue;
                }
                let Some(start) = pos.backward(direction, i) else {
                    continue;
                };
                if let Some(score) = fit_score(grid, letters, start, direction, rule) {
                    slots.push(Slot {
                        start,
                        direction,
                        score,
                    });
                }
            }
        }
    }
    slots.sort_unstable_by_key(|slot| (slot.start, slot.direction));
    slots.dedup_by_key(|slot| (slot.start, slot.direction));
    slots
}

/// Picks the highest-scoring slot, breaking ties at random.
pub(crate) fn best_slot<R>(mut slots: Vec<Slot>, rng: &mut R) -> Option<Slot>
where
    R: Rng + ?Sized,
{
    slots.shuffle(rng);
    slots.sort_by_key(|slot| Reverse(slot.score));
    slots.first().copied()
}

/// Returns the preferred slots for the first word of a cycle, in random
/// direction order.
pub(crate) fn seed_slots<R>(
    grid: &Grid,
    len: usize,
    placement: SeedPlacement,
    rng: &mut R,
) -> Vec<(Position, Direction)>
where
    R: Rng + ?Sized,
{
    let mut slots = match placement {
        SeedPlacement::TopLeft => vec![
            (Position::new(0, 0), Direction::Across),
            (Position::new(0, 0), Direction::Down),
        ],
        SeedPlacement::Center => {
            let (rows, cols) = (grid.rows(), grid.cols());
            let mut slots = Vec::with_capacity(2);
            if len <= cols {
                slots.push((Position::new(rows / 2, (cols - len) / 2), Direction::Across));
            }
            if len <= rows {
                slots.push((Position::new((rows - len) / 2, cols / 2), Direction::Down));
            }
            slots
        }
    };
    slots.shuffle(rng);
    slots
}

/// Returns every slot of the grid in random order.
pub(crate) fn shuffled_slots<R>(grid: &Grid, rng: &mut R) -> Vec<(Position, Direction)>
where
    R: Rng + ?Sized,
{
    let mut slots = grid
        .positions()
        .flat_map(|pos| Direction::ALL.map(|direction| (pos, direction)))
        .collect::<Vec<_>>();
    slots.shuffle(rng);
    slots
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;
    use xwordgen_core::Placement;

    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    fn grid_with(rows: usize, cols: usize, words: &[(&str, usize, usize, Direction)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for (i, &(word, row, col, direction)) in words.iter().enumerate() {
            let placement = Placement::new(i, Position::new(row, col), direction, word.len());
            grid.place(&placement, &letters(word)).unwrap();
        }
        grid
    }

    #[test]
    fn test_fit_on_empty_grid() {
        let grid = Grid::new(5, 5).unwrap();
        let cat = letters("CAT");
        let strict = AdjacencyRule::Strict;
        assert_eq!(
            fit_score(&grid, &cat, Position::new(0, 0), Direction::Across, strict),
            Some(1)
        );
        assert_eq!(
            fit_score(&grid, &cat, Position::new(4, 2), Direction::Across, strict),
            Some(1)
        );
        assert_eq!(
            fit_score(&grid, &cat, Position::new(4, 3), Direction::Across, strict),
            None
        );
        assert_eq!(
            fit_score(&grid, &cat, Position::new(3, 0), Direction::Down, strict),
            None
        );
    }

    #[test]
    fn test_fit_counts_crossings() {
        let grid = grid_with(5, 5, &[("CAT", 1, 0, Direction::Across)]);
        let score = fit_score(
            &grid,
            &letters("BAT"),
            Position::new(0, 1),
            Direction::Down,
            AdjacencyRule::Strict,
        );
        assert_eq!(score, Some(2));
    }

    #[test]
    fn test_fit_rejects_conflicting_letter() {
        let grid = grid_with(5, 5, &[("CAT", 1, 0, Direction::Across)]);
        let score = fit_score(
            &grid,
            &letters("DOG"),
            Position::new(0, 1),
            Direction::Down,
            AdjacencyRule::Loose,
        );
        assert_eq!(score, None);
    }

    #[test]
    fn test_fit_rejects_parallel_overlap() {
        let grid = grid_with(5, 5, &[("CAT", 1, 0, Direction::Across)]);
        // Same word on top of itself: every cell matches but runs the same way.
        let score = fit_score(
            &grid,
            &letters("CAT"),
            Position::new(1, 0),
            Direction::Across,
            AdjacencyRule::Loose,
        );
        assert_eq!(score, None);
    }

    #[test]
    fn test_fit_rejects_extending_a_word() {
        let grid = grid_with(5, 5, &[("CAT", 1, 0, Direction::Across)]);
        // "S" directly after CAT would turn it into CATS.
        let score = fit_score(
            &grid,
            &letters("SO"),
            Position::new(1, 3),
            Direction::Down,
            AdjacencyRule::Loose,
        );
        assert_eq!(score, None);

        // "NO" ending right before CAT would read NOCAT.
        let grid = grid_with(5, 5, &[("CAT", 1, 2, Direction::Across)]);
        let score = fit_score(
            &grid,
            &letters("NO"),
            Position::new(1, 0),
            Direction::Across,
            AdjacencyRule::Loose,
        );
        assert_eq!(score, None);
    }

    #[test]
    fn test_strict_rejects_side_by_side_letters() {
        let grid = grid_with(5, 5, &[("CAT", 1, 0, Direction::Across)]);
        let dog = letters("DOG");
        let start = Position::new(2, 0);
        assert_eq!(
            fit_score(&grid, &dog, start, Direction::Across, AdjacencyRule::Strict),
            None
        );
        assert_eq!(
            fit_score(&grid, &dog, start, Direction::Across, AdjacencyRule::Loose),
            Some(1)
        );
        assert_eq!(
            fit_score(&grid, &dog, Position::new(3, 0), Direction::Across, AdjacencyRule::Strict),
            Some(1)
        );
    }

    #[test]
    fn test_fit_rejects_blocked_cell() {
        let grid = Grid::with_blocked(3, 3, [Position::new(0, 1)]).unwrap();
        let score = fit_score(
            &grid,
            &letters("ABC"),
            Position::new(0, 0),
            Direction::Across,
            AdjacencyRule::Strict,
        );
        assert_eq!(score, None);
    }

    #[test]
    fn test_crossing_slots() {
        let grid = grid_with(7, 7, &[("CAT", 3, 2, Direction::Across)]);
        let slots = crossing_slots(&grid, &letters("TACT"), AdjacencyRule::Strict);
        assert!(!slots.is_empty());
        for slot in &slots {
            assert_eq!(slot.direction, Direction::Down);
            assert!(slot.score >= 2);
        }
        // TACT down through the A of CAT starts one row above it.
        assert!(slots.contains(&Slot {
            start: Position::new(2, 3),
            direction: Direction::Down,
            score: 2,
        }));
        let mut keys = slots
            .iter()
            .map(|slot| (slot.start, slot.direction))
            .collect::<Vec<_>>();
        keys.dedup();
        assert_eq!(keys.len(), slots.len());
    }

    #[test]
    fn test_best_slot_prefers_more_crossings() {
        let mut rng = Pcg64::seed_from_u64(7);
        let slot = |row, score| Slot {
            start: Position::new(row, 0),
            direction: Direction::Across,
            score,
        };
        let best = best_slot(vec![slot(0, 2), slot(1, 3), slot(2, 1)], &mut rng);
        assert_eq!(best, Some(slot(1, 3)));
        assert_eq!(best_slot(Vec::new(), &mut rng), None);
    }

    #[test]
    fn test_seed_slots() {
        let mut rng = Pcg64::seed_from_u64(1);
        let grid = Grid::new(5, 9).unwrap();
        let mut top_left = seed_slots(&grid, 3, SeedPlacement::TopLeft, &mut rng);
        top_left.sort();
        assert_eq!(
            top_left,
            [
                (Position::new(0, 0), Direction::Across),
                (Position::new(0, 0), Direction::Down)
            ]
        );
        let center = seed_slots(&grid, 7, SeedPlacement::Center, &mut rng);
        assert_eq!(center, [(Position::new(2, 1), Direction::Across)]);
    }

    #[test]
    fn test_shuffled_slots_cover_grid() {
        let mut rng = Pcg64::seed_from_u64(3);
        let grid = Grid::new(3, 4).unwrap();
        let mut slots = shuffled_slots(&grid, &mut rng);
        assert_eq!(slots.len(), 24);
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), 24);
    }
}
