#![allow(dead_code)]

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use gridstar_core::{GridBuf, GridView, Point, parse_map, render_path};
use rand::rngs::StdRng;
use rand::RngExt;

pub fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

pub fn view(cells: &[u8], width: usize) -> GridView<'_, u8> {
    GridView::new(cells, width, cells.len() / width)
}

/// `.` is open, `#` is a wall.
pub fn map(text: &str) -> GridBuf<u8> {
    parse_map(text, ".", "#").unwrap()
}

pub fn draw(grid: &GridView<'_, u8>, path: &[usize]) -> String {
    render_path(grid, path, '.', '#', '*')
}

fn adjacent(grid: &GridView<'_, u8>, a: usize, b: usize) -> bool {
    let (pa, pb) = (grid.coord_from_index(a), grid.coord_from_index(b));
    (pa.x - pb.x).abs() + (pa.y - pb.y).abs() == 1
}

/// Assert that `path` walks from `start` to `end` over open cells, one
/// cardinal step at a time.
pub fn assert_walkable(grid: &GridView<'_, u8>, start: Point, end: Point, path: &[usize]) {
    let start = grid.index_from_coord(start);
    let end = grid.index_from_coord(end);
    assert_eq!(path.last(), Some(&end), "path does not reach the goal\n{}", draw(grid, path));
    let mut prev = start;
    for &i in path {
        assert_eq!(grid[i], 1, "path crosses a wall at {i}\n{}", draw(grid, path));
        assert!(adjacent(grid, prev, i), "{prev} -> {i} is not a step\n{}", draw(grid, path));
        prev = i;
    }
}

/// Random map with 80% open cells.
pub fn random_map(rng: &mut StdRng, width: usize, height: usize) -> GridBuf<u8> {
    let mut buf = GridBuf::new(width, height, 0u8);
    buf.fill_fn(|_| u8::from(rng.random_bool(0.8)));
    buf
}

pub fn random_point(rng: &mut StdRng, grid: &GridView<'_, u8>) -> Point {
    p(
        rng.random_range(0..grid.width() as i32),
        rng.random_range(0..grid.height() as i32),
    )
}

/// Textbook A* with separate came-from and cost tables, checking the goal
/// when it is popped. Returns the edge count, or -1.
pub fn reference_length(grid: &GridView<'_, u8>, start: Point, end: Point) -> i32 {
    let start = grid.index_from_coord(start);
    let goal = grid.index_from_coord(end);
    if grid[start] != 1 || grid[goal] != 1 {
        return -1;
    }
    let h = |i: usize| {
        let (a, b) = (grid.coord_from_index(i), grid.coord_from_index(goal));
        (a.x - b.x).abs() + (a.y - b.y).abs()
    };

    let mut frontier = BinaryHeap::new();
    let mut cost_so_far: HashMap<usize, i32> = HashMap::new();
    frontier.push(Reverse((0, start)));
    cost_so_far.insert(start, 0);

    while let Some(Reverse((_, current))) = frontier.pop() {
        if current == goal {
            return cost_so_far[&goal];
        }
        let here = grid.coord_from_index(current);
        for d in [p(1, 0), p(0, 1), p(-1, 0), p(0, -1)] {
            let next = here + d;
            if !grid.coordinate_valid(next) || grid[next] != 1 {
                continue;
            }
            let next = grid.index_from_coord(next);
            let cost = cost_so_far[&current] + 1;
            if cost_so_far.get(&next).is_none_or(|&c| cost < c) {
                cost_so_far.insert(next, cost);
                frontier.push(Reverse((cost + h(next), next)));
            }
        }
    }
    -1
}
