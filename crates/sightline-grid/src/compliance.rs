//! Compliance helpers for rasterization and disc enumeration.
//!
//! Each `assert_*` checks one contract over an exhaustive box of inputs;
//! the `run_*` functions bundle them. Reused by the `raster` and `disc`
//! test modules.

use crate::disc::enumerate;
use crate::raster::rasterize;
use sightline_core::{Coordinate, Metric};

/// Every cell of the inclusive box `lo..=hi`, row-major.
fn cells_in_box(lo: Coordinate, hi: Coordinate) -> Vec<Coordinate> {
    (lo.y..=hi.y)
        .flat_map(|y| (lo.x..=hi.x).map(move |x| Coordinate::new(x, y)))
        .collect()
}

/// Assert that every path starts at its start and ends at its end.
pub fn assert_path_endpoints(lo: Coordinate, hi: Coordinate) {
    let cells = cells_in_box(lo, hi);
    for &a in &cells {
        for &b in &cells {
            let path = rasterize(a, b);
            assert_eq!(path.start(), a, "rasterize({a}, {b}) starts at {}", path.start());
            assert_eq!(path.end(), b, "rasterize({a}, {b}) ends at {}", path.end());
        }
    }
}

/// Assert that consecutive waypoints are distinct 8-neighbours.
pub fn assert_path_connected(lo: Coordinate, hi: Coordinate) {
    let cells = cells_in_box(lo, hi);
    for &a in &cells {
        for &b in &cells {
            let path = rasterize(a, b);
            for pair in path.as_slice().windows(2) {
                assert!(
                    pair[0] != pair[1] && pair[0].is_neighbor(pair[1]),
                    "rasterize({a}, {b}) jumps from {} to {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}

/// Assert that a path never revisits a cell and is no longer than
/// `|dx| + |dy| + 1`.
pub fn assert_path_length(lo: Coordinate, hi: Coordinate) {
    let cells = cells_in_box(lo, hi);
    for &a in &cells {
        for &b in &cells {
            let path = rasterize(a, b);
            let limit = a.distance_manhattan(b) as usize + 1;
            assert!(
                path.len() <= limit,
                "rasterize({a}, {b}) has {} cells, limit {limit}",
                path.len()
            );
            let floor = a.distance_chebyshev(b) as usize + 1;
            assert!(
                path.len() >= floor,
                "rasterize({a}, {b}) has {} cells, floor {floor}",
                path.len()
            );
            let mut seen = path.as_slice().to_vec();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), path.len(), "rasterize({a}, {b}) revisits a cell");
        }
    }
}

/// Assert that `rasterize(b, a)` is `rasterize(a, b)` reversed.
pub fn assert_path_reversible(lo: Coordinate, hi: Coordinate) {
    let cells = cells_in_box(lo, hi);
    for &a in &cells {
        for &b in &cells {
            let forward = rasterize(a, b);
            let backward = rasterize(b, a).reversed();
            assert_eq!(forward, backward, "rasterize is not symmetric for {a} and {b}");
        }
    }
}

/// Run all rasterization checks over every pair of cells in `lo..=hi`.
pub fn run_raster_compliance(lo: Coordinate, hi: Coordinate) {
    assert_path_endpoints(lo, hi);
    assert_path_connected(lo, hi);
    assert_path_length(lo, hi);
    assert_path_reversible(lo, hi);
}

/// Assert endpoints, connectivity and reversal for every line from `origin`
/// to a cell within `reach` of it (Chebyshev).
///
/// Catches near-miss corner cuts that only appear on long lines, which a
/// small all-pairs box never produces.
pub fn run_raster_sweep(origin: Coordinate, reach: i32) {
    let lo = origin.offset(-reach, -reach);
    let hi = origin.offset(reach, reach);
    for b in cells_in_box(lo, hi) {
        let path = rasterize(origin, b);
        assert_eq!(path.start(), origin, "rasterize({origin}, {b}) starts at {}", path.start());
        assert_eq!(path.end(), b, "rasterize({origin}, {b}) ends at {}", path.end());
        for pair in path.as_slice().windows(2) {
            assert!(
                pair[0] != pair[1] && pair[0].is_neighbor(pair[1]),
                "rasterize({origin}, {b}) jumps from {} to {}",
                pair[0],
                pair[1]
            );
        }
        let backward = rasterize(b, origin).reversed();
        assert_eq!(path, backward, "rasterize is not symmetric for {origin} and {b}");
    }
}

/// Assert that a zero-radius, zero-tolerance disc is exactly its center.
pub fn assert_disc_base_case(center: Coordinate, metric: Metric) {
    let cells = enumerate(center, 0, 0.0, metric).unwrap();
    assert_eq!(cells.len(), 1, "radius-0 {metric} disc has {} cells", cells.len());
    assert!(cells.contains(&center));
}

/// Assert that the disc equals a brute-force scan of its bounding square.
pub fn assert_disc_exact(center: Coordinate, radius: i32, metric: Metric) {
    let cells = enumerate(center, radius, 0.0, metric).unwrap();
    let reach = Coordinate::new(radius, radius);
    let mut expected = 0usize;
    for p in cells_in_box(center - reach, center + reach) {
        let inside = metric.distance(center, p) <= f64::from(radius);
        assert_eq!(
            cells.contains(&p),
            inside,
            "{metric} disc at {center} radius {radius} disagrees at {p}"
        );
        expected += usize::from(inside);
    }
    assert_eq!(cells.len(), expected, "{metric} disc has stray cells");
}

/// Assert that discs grow with their radius.
pub fn assert_disc_monotone(center: Coordinate, max_radius: i32, metric: Metric) {
    for r in 0..max_radius {
        let inner = enumerate(center, r, 0.0, metric).unwrap();
        let outer = enumerate(center, r + 1, 0.0, metric).unwrap();
        assert!(
            inner.is_subset(&outer),
            "{metric} disc of radius {r} is not inside radius {}",
            r + 1
        );
    }
}

/// Assert that the disc is closed under the eight symmetries of the square.
pub fn assert_disc_symmetric(center: Coordinate, radius: i32, metric: Metric) {
    let cells = enumerate(center, radius, 0.0, metric).unwrap();
    for &p in &cells {
        let d = p - center;
        for image in [
            Coordinate::new(-d.x, d.y),
            Coordinate::new(d.x, -d.y),
            Coordinate::new(d.y, d.x),
        ] {
            assert!(
                cells.contains(&(center + image)),
                "{metric} disc at {center} holds {p} but not its mirror {}",
                center + image
            );
        }
    }
}

/// Assert that each Euclidean disc lies inside the Chebyshev disc of the
/// same radius.
pub fn assert_euclidean_within_chebyshev(center: Coordinate, max_radius: i32) {
    for r in 0..=max_radius {
        let round = enumerate(center, r, 0.0, Metric::Euclidean).unwrap();
        let square = enumerate(center, r, 0.0, Metric::Chebyshev).unwrap();
        assert!(round.is_subset(&square), "radius {r}: Euclidean escapes Chebyshev");
    }
}

/// Run all disc checks for every radius up to `max_radius`.
pub fn run_disc_compliance(center: Coordinate, max_radius: i32, metric: Metric) {
    assert_disc_base_case(center, metric);
    assert_disc_monotone(center, max_radius, metric);
    for r in 0..=max_radius {
        assert_disc_exact(center, r, metric);
        assert_disc_symmetric(center, r, metric);
    }
    assert_euclidean_within_chebyshev(center, max_radius);
}
