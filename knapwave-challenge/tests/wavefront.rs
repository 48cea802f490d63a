use knapwave_challenge::{Phase, Wavefront};
use std::collections::HashMap;

const SHAPES: [(usize, usize); 14] = [
    (0, 0),
    (0, 5),
    (1, 0),
    (5, 0),
    (1, 1),
    (1, 7),
    (7, 1),
    (3, 3),
    (3, 5),
    (5, 3),
    (4, 9),
    (9, 4),
    (6, 7),
    (7, 6),
];

fn visits(wavefront: &Wavefront) -> Vec<(Phase, usize, usize)> {
    let mut visited = Vec::new();
    wavefront.sweep(|phase, i, j| visited.push((phase, i, j)));
    visited
}

#[test]
fn test_sweep_visits_every_cell_once() {
    for (n, c) in SHAPES {
        let wavefront = Wavefront::new(n, c);
        let mut counts: HashMap<(usize, usize), usize> = HashMap::new();
        for (_, i, j) in visits(&wavefront) {
            assert!(i >= 1 && i <= n, "row {} out of range for {:?}", i, (n, c));
            assert!(j <= c, "column {} out of range for {:?}", j, (n, c));
            *counts.entry((i, j)).or_default() += 1;
        }
        assert_eq!(counts.len(), wavefront.num_cells(), "shape {:?}", (n, c));
        assert!(counts.values().all(|&count| count == 1), "shape {:?}", (n, c));
    }
}

#[test]
fn test_each_diagonal_belongs_to_one_phase() {
    for (n, c) in SHAPES {
        let wavefront = Wavefront::new(n, c);
        let mut owners: HashMap<usize, Phase> = HashMap::new();
        for (phase, i, j) in visits(&wavefront) {
            let owner = *owners.entry(i + j).or_insert(phase);
            assert_eq!(owner, phase, "diagonal {} of shape {:?}", i + j, (n, c));
        }
        if n > 0 {
            let mut diagonals: Vec<usize> = owners.keys().cloned().collect();
            diagonals.sort();
            assert_eq!(diagonals, (1..=n + c).collect::<Vec<_>>());
        }
    }
}

#[test]
fn test_dependencies_visited_first() {
    for (n, c) in SHAPES {
        let order: HashMap<(usize, usize), usize> = visits(&Wavefront::new(n, c))
            .into_iter()
            .enumerate()
            .map(|(step, (_, i, j))| ((i, j), step))
            .collect();
        for (&(i, j), &step) in &order {
            if i == 1 {
                continue;
            }
            for k in 0..=j {
                assert!(order[&(i - 1, k)] < step, "({}, {}) before ({}, {})", i - 1, k, i, j);
            }
        }
    }
}

#[test]
fn test_diagonals_are_increasing() {
    let visited = visits(&Wavefront::new(5, 8));
    let diagonals: Vec<usize> = visited.iter().map(|&(_, i, j)| i + j).collect();
    assert!(diagonals.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_phase_ranges_tall_and_wide() {
    let wide = Wavefront::new(3, 5);
    assert_eq!(wide.diagonals(Phase::Leading), 1..=2);
    assert_eq!(wide.diagonals(Phase::Full), 3..=5);
    assert_eq!(wide.diagonals(Phase::Trailing), 6..=8);
    assert_eq!(wide.rows(Phase::Trailing, 7), 2..=3);

    let tall = Wavefront::new(5, 3);
    assert_eq!(tall.diagonals(Phase::Leading), 1..=3);
    assert!(tall.diagonals(Phase::Full).is_empty());
    assert_eq!(tall.diagonals(Phase::Trailing), 4..=8);
    assert_eq!(tall.rows(Phase::Trailing, 4), 1..=4);
    assert_eq!(tall.rows(Phase::Trailing, 8), 5..=5);
}

#[test]
fn test_degenerate_shapes() {
    assert!(visits(&Wavefront::new(0, 10)).is_empty());

    let column = visits(&Wavefront::new(4, 0));
    assert_eq!(
        column,
        (1..=4).map(|i| (Phase::Trailing, i, 0)).collect::<Vec<_>>()
    );
}

#[test]
fn test_huge_shapes_saturate() {
    let wavefront = Wavefront::new(3, usize::MAX);
    assert!(wavefront.diagonals(Phase::Trailing).is_empty());
    assert_eq!(wavefront.diagonals(Phase::Full), 3..=usize::MAX);
    assert_eq!(wavefront.num_cells(), usize::MAX);

    let wavefront = Wavefront::new(usize::MAX, 2);
    assert_eq!(wavefront.diagonals(Phase::Trailing), 3..=usize::MAX);
    assert_eq!(wavefront.num_cells(), usize::MAX);
}
