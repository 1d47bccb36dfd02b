//! Spawn-position patterns for defender swarms.
//!
//! The ordering of each returned list is a contract: callers hand out
//! sequential names and indices in iteration order.

use glam::Vec3;

/// Positions along a line: element `i` is `origin + step * i`.
/// A count of zero yields an empty list.
pub fn line_pattern(count: usize, origin: Vec3, step: Vec3) -> Vec<Vec3> {
    (0..count).map(|i| origin + step * i as f32).collect()
}

/// Positions on a grid of lines, outer-major: for each outer index `o`,
/// every inner index `i` yields `origin + outer_step * o + inner_step * i`.
/// Total length is `outer_count * inner_count`.
pub fn grid_of_lines_pattern(
    outer_count: usize,
    inner_count: usize,
    origin: Vec3,
    outer_step: Vec3,
    inner_step: Vec3,
) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(outer_count * inner_count);
    for o in 0..outer_count {
        let line_origin = origin + outer_step * o as f32;
        for i in 0..inner_count {
            positions.push(line_origin + inner_step * i as f32);
        }
    }
    positions
}

/// Selector for a placement strategy with its parameters. Counts are
/// unsigned, so negative counts cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnPattern {
    /// A single line of positions.
    Line { count: usize, step: Vec3 },
    /// Lines of lines: `outer_count` rows of `inner_count` positions.
    GridOfLines {
        outer_count: usize,
        inner_count: usize,
        outer_step: Vec3,
        inner_step: Vec3,
    },
}

impl SpawnPattern {
    /// Generate the pattern's positions relative to `origin`.
    pub fn positions(&self, origin: Vec3) -> Vec<Vec3> {
        match *self {
            SpawnPattern::Line { count, step } => line_pattern(count, origin, step),
            SpawnPattern::GridOfLines {
                outer_count,
                inner_count,
                outer_step,
                inner_step,
            } => grid_of_lines_pattern(outer_count, inner_count, origin, outer_step, inner_step),
        }
    }

    /// Number of positions the pattern will generate.
    pub fn len(&self) -> usize {
        match *self {
            SpawnPattern::Line { count, .. } => count,
            SpawnPattern::GridOfLines {
                outer_count,
                inner_count,
                ..
            } => outer_count * inner_count,
        }
    }

    /// True when the pattern generates no positions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_pattern_yields_count_elements() {
        for count in [0usize, 1, 4, 100] {
            let positions = line_pattern(count, Vec3::ZERO, Vec3::new(1.0, 1.0, -1.0));
            assert_eq!(positions.len(), count);
        }
    }

    #[test]
    fn line_pattern_steps_from_origin() {
        let origin = Vec3::new(2.0, 0.0, -3.0);
        let step = Vec3::new(1.0, 1.0, -1.0);
        let positions = line_pattern(4, origin, step);
        for (i, pos) in positions.iter().enumerate() {
            assert_eq!(*pos, origin + step * i as f32);
        }
        // The pattern-0 defender layout from the base: offsets from a zero origin.
        let offsets = line_pattern(4, Vec3::ZERO, step);
        assert_eq!(
            offsets,
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, -1.0),
                Vec3::new(2.0, 2.0, -2.0),
                Vec3::new(3.0, 3.0, -3.0),
            ]
        );
    }

    #[test]
    fn grid_pattern_is_outer_major() {
        let outer_step = Vec3::new(-1.0, 0.0, 1.0);
        let inner_step = Vec3::new(1.0, -1.0, -1.0);
        let positions = grid_of_lines_pattern(3, 2, Vec3::ZERO, outer_step, inner_step);

        assert_eq!(positions.len(), 6);
        for o in 0..3 {
            for i in 0..2 {
                let expected = outer_step * o as f32 + inner_step * i as f32;
                assert_eq!(positions[o * 2 + i], expected, "outer {o} inner {i}");
            }
        }
    }

    #[test]
    fn grid_pattern_handles_zero_counts() {
        assert!(grid_of_lines_pattern(0, 5, Vec3::ZERO, Vec3::X, Vec3::Y).is_empty());
        assert!(grid_of_lines_pattern(5, 0, Vec3::ZERO, Vec3::X, Vec3::Y).is_empty());
    }

    #[test]
    fn spawn_pattern_dispatch_matches_free_functions() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let line = SpawnPattern::Line {
            count: 5,
            step: Vec3::X,
        };
        assert_eq!(line.positions(origin), line_pattern(5, origin, Vec3::X));
        assert_eq!(line.len(), 5);
        assert!(!line.is_empty());

        let grid = SpawnPattern::GridOfLines {
            outer_count: 4,
            inner_count: 3,
            outer_step: Vec3::Y,
            inner_step: Vec3::Z,
        };
        assert_eq!(
            grid.positions(origin),
            grid_of_lines_pattern(4, 3, origin, Vec3::Y, Vec3::Z)
        );
        assert_eq!(grid.len(), 12);
    }
}
