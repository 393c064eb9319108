mod common;

use common::{assert_walkable, map, p, view};
use gridstar_core::GridView;
use gridstar_paths::{
    BoundedPath, CardinalNeighbors, Directed, Euclidean, GridSearch, Manhattan, NO_PATH,
    OutputSink, Passable, SearchCache, SearchConfig, SlicePath, StaticPath, UnitCost, find_path,
};

#[test]
fn two_by_two_around_a_wall() {
    let cells = [1, 1, 0, 1];
    let grid = view(&cells, 2);
    let mut out: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(0, 0), p(1, 1), &grid, &mut out), 2);
    assert_eq!(out, vec![1, 3]);

    let mut raw = [0usize; 7];
    let mut slice = SlicePath::new(&mut raw);
    assert_eq!(find_path(p(0, 0), p(1, 1), &grid, &mut slice), 2);
    assert_eq!(slice.as_slice(), &[1, 3]);
}

#[test]
fn walled_off_corner() {
    let cells = [0, 0, 1, 0, 1, 1, 1, 0, 1];
    let grid = view(&cells, 3);
    let mut out = StaticPath::<7>::new();
    assert_eq!(find_path(p(2, 0), p(0, 2), &grid, &mut out), NO_PATH);
    assert!(out.is_empty());
}

#[test]
fn goal_with_a_foreign_marker_is_blocked() {
    let cells = [1, 5, 0, 1];
    let grid = view(&cells, 2);
    assert_eq!(find_path(p(0, 0), p(1, 1), &grid, &mut Vec::<usize>::new()), NO_PATH);
}

#[test]
fn straight_row_and_column() {
    let cells = [1u8; 6];
    let mut out: Vec<usize> = Vec::new();

    assert_eq!(find_path(p(0, 0), p(5, 0), &view(&cells, 6), &mut out), 5);
    assert_eq!(out, vec![1, 2, 3, 4, 5]);

    assert_eq!(find_path(p(0, 0), p(0, 5), &view(&cells, 1), &mut out), 5);
    assert_eq!(out, vec![1, 2, 3, 4, 5]);
}

#[test]
fn single_gap() {
    #[rustfmt::skip]
    let cells = [
        1, 1, 1, 1,
        0, 1, 0, 1,
        0, 1, 1, 1,
    ];
    let mut out = StaticPath::<12>::new();
    assert_eq!(find_path(p(0, 0), p(1, 2), &view(&cells, 4), &mut out), 3);
    assert_eq!(&out[..], &[1, 5, 9]);
}

#[test]
fn corner_to_corner_around_an_obstacle() {
    #[rustfmt::skip]
    let cells = [
        1, 1, 1, 1, 1,
        1, 1, 1, 0, 1,
        1, 1, 1, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ];
    let grid = view(&cells, 5);
    let mut out: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(0, 0), p(4, 4), &grid, &mut out), 8);
    let top = [1, 2, 3, 4, 9, 14, 19, 24];
    let left = [5, 10, 15, 20, 21, 22, 23, 24];
    assert!(out == top || out == left, "unexpected path {out:?}");
}

#[test]
fn into_an_open_ring() {
    #[rustfmt::skip]
    let cells = [
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 1, 0, 1,
        1, 0, 1, 0, 1,
        1, 1, 1, 1, 1,
    ];
    let grid = view(&cells, 5);
    let mut out: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(2, 0), p(2, 2), &grid, &mut out), 10);
    let east = [3, 4, 9, 14, 19, 24, 23, 22, 17, 12];
    let west = [1, 0, 5, 10, 15, 20, 21, 22, 17, 12];
    assert!(out == east || out == west, "unexpected path {out:?}");
}

#[test]
fn into_a_notched_ring() {
    #[rustfmt::skip]
    let cells = [
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 1, 1, 1,
        1, 0, 1, 1, 1,
        1, 1, 1, 1, 1,
    ];
    let grid = view(&cells, 5);
    let mut out: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(0, 0), p(2, 2), &grid, &mut out), 8);
    assert_walkable(&grid, p(0, 0), p(2, 2), &out);
}

#[test]
fn sealed_room() {
    #[rustfmt::skip]
    let cells = [
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 1, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ];
    let mut out: Vec<usize> = vec![3];
    assert_eq!(find_path(p(0, 0), p(2, 2), &view(&cells, 5), &mut out), NO_PATH);
    assert!(out.is_empty());
}

#[test]
fn single_way_in() {
    #[rustfmt::skip]
    let cells = [
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 0,
        1, 0, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ];
    let mut out = StaticPath::<12>::new();
    assert_eq!(find_path(p(0, 0), p(2, 2), &view(&cells, 5), &mut out), 12);
    assert_eq!(&out[..], &[5, 10, 15, 20, 21, 22, 23, 24, 19, 14, 13, 12]);
}

const MAZE: &str = "
....#.....
.##.#.#.#.
.#..#...#.
.#.####.#.
......#.#.
....#..#..
.##...#..#
.##...#..#
.##.#.#...
..#.#...#.
";

#[test]
fn every_capacity_keeps_the_tail() {
    let buf = map(MAZE);
    let grid = buf.view();
    let mut full: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(0, 0), p(9, 9), &grid, &mut full), 20);
    assert_walkable(&grid, p(0, 0), p(9, 9), &full);

    for cap in 0..=22 {
        let mut out = BoundedPath::new(cap);
        assert_eq!(find_path(p(0, 0), p(9, 9), &grid, &mut out), 20);
        let keep = cap.min(full.len());
        assert_eq!(out.as_slice(), &full[full.len() - keep..], "capacity {cap}");
    }
}

#[test]
fn chained_queries_form_one_route() {
    let buf = map(
        "
....#.....
.##.#.#.#.
.#..#...#.
.#.####.#.
......#.#.
....#.....
",
    );
    let grid = buf.view();
    let mut first = BoundedPath::new(32);
    let mut second = BoundedPath::new(16);
    assert_eq!(find_path(p(0, 0), p(4, 4), &grid, &mut first), 8);
    assert_eq!(find_path(p(4, 4), p(9, 0), &grid, &mut second), 11);
    assert_walkable(&grid, p(0, 0), p(4, 4), first.as_slice());
    assert_walkable(&grid, p(4, 4), p(9, 0), second.as_slice());
}

#[test]
fn repeated_query_is_stable() {
    let buf = map(
        "
##......#.
#..#......
.###......
......#...
...##....#
",
    );
    let grid = buf.view();
    let mut a = StaticPath::<16>::new();
    let mut raw = [0usize; 16];
    let mut b = SlicePath::new(&mut raw);
    assert_eq!(find_path(p(8, 4), p(6, 2), &grid, &mut a), 4);
    assert_eq!(find_path(p(8, 4), p(6, 2), &grid, &mut b), 4);
    assert_eq!(&a[..], b.as_slice());
    assert_walkable(&grid, p(8, 4), p(6, 2), &a);
}

#[test]
fn sinks_agree_when_everything_fits() {
    let buf = map(
        "
..........
..##.....#
.#........
.##.##....
..###.....
",
    );
    let grid = buf.view();
    let mut raw = [0usize; 15];
    let mut slice = SlicePath::new(&mut raw);
    let mut fixed = StaticPath::<15>::new();
    let mut grow: Vec<usize> = Vec::new();

    let a = find_path(p(1, 4), p(8, 2), &grid, &mut slice);
    let b = find_path(p(1, 4), p(8, 2), &grid, &mut fixed);
    let c = find_path(p(1, 4), p(8, 2), &grid, &mut grow);
    assert_eq!((a, b, c), (15, 15, 15));
    assert_eq!(grow.len(), 15);
    assert_eq!(slice.as_slice(), &grow[..]);
    assert_eq!(&fixed[..], &grow[..]);
    assert_walkable(&grid, p(1, 4), p(8, 2), &grow);
}

#[test]
fn large_maze() {
    let buf = map(include_str!("data/maze_33x95.txt"));
    let grid = buf.view();
    assert_eq!((grid.width(), grid.height()), (33, 95));

    let mut full: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(32, 35), p(31, 76), &grid, &mut full), 60);
    assert_walkable(&grid, p(32, 35), p(31, 76), &full);

    let mut out = StaticPath::<70>::new();
    assert_eq!(find_path(p(32, 35), p(31, 76), &grid, &mut out), 60);
    assert_eq!(&out[..], &full[..]);
}

#[test]
fn forward_and_reversed_searches_agree() {
    let buf = map(include_str!("data/maze_33x95.txt"));
    let grid = buf.view();
    let forward = GridSearch::new(
        CardinalNeighbors::new(Passable(1u8)),
        Directed(Manhattan),
        UnitCost::<i32>::new(),
    );
    let mut reversed_path: Vec<usize> = Vec::new();
    let mut forward_path: Vec<usize> = Vec::new();
    let a = find_path(p(32, 35), p(31, 76), &grid, &mut reversed_path);
    let b = forward.find_path(p(32, 35), p(31, 76), &grid, &mut forward_path);
    assert_eq!(a, b);
    assert_walkable(&grid, p(32, 35), p(31, 76), &forward_path);

    let mut tail = BoundedPath::new(7);
    assert_eq!(forward.find_path(p(32, 35), p(31, 76), &grid, &mut tail), 60);
    assert_eq!(tail.as_slice(), &forward_path[forward_path.len() - 7..]);
}

#[test]
fn warm_cache_gives_the_same_answer() {
    let buf = map(include_str!("data/maze_33x95.txt"));
    let grid = buf.view();
    let search = gridstar_paths::DefaultSearch::default();
    let mut cache = SearchCache::new();
    let mut cold: Vec<usize> = Vec::new();
    let mut warm: Vec<usize> = Vec::new();

    let n = search.find_path_uncached(p(32, 35), p(31, 76), &grid, &mut cold);
    search.find_path_with(&mut cache, p(0, 0), p(32, 94), &grid, &mut warm);
    assert_eq!(search.find_path_with(&mut cache, p(32, 35), p(31, 76), &grid, &mut warm), n);
    assert_eq!(search.find_path_with(&mut cache, p(32, 35), p(31, 76), &grid, &mut warm), n);
    assert_eq!(warm, cold);
    assert_eq!(cache.stats().hits, 1);
}

#[test]
fn cache_disabled_by_threshold() {
    let buf = map(MAZE);
    let grid = buf.view();
    let search = gridstar_paths::DefaultSearch::default();
    let config = SearchConfig::default().with_cache_threshold(usize::MAX);
    let mut cache = SearchCache::with_config(config).unwrap();
    let mut out: Vec<usize> = Vec::new();
    for _ in 0..3 {
        assert_eq!(search.find_path_with(&mut cache, p(0, 0), p(9, 9), &grid, &mut out), 20);
    }
    assert_eq!(cache.stats().bypasses, 3);
    assert_eq!(cache.stats().hits, 0);
}

#[test]
fn edit_between_queries_is_seen() {
    let mut buf = map(MAZE);
    let mut out: Vec<usize> = Vec::new();
    assert_eq!(find_path(p(0, 0), p(9, 9), &buf.view(), &mut out), 20);
    // Close the only door of the goal's corner.
    buf.set(p(9, 8), 0);
    assert_eq!(find_path(p(0, 0), p(9, 9), &buf.view(), &mut out), NO_PATH);
    assert!(out.is_empty());
}

#[test]
fn queries_from_several_threads() {
    let buf = map(include_str!("data/maze_33x95.txt"));
    let grid: GridView<'_, u8> = buf.view();
    let mut expected: Vec<usize> = Vec::new();
    let n = find_path(p(32, 35), p(31, 76), &grid, &mut expected);

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..5 {
                    let mut out: Vec<usize> = Vec::new();
                    assert_eq!(find_path(p(32, 35), p(31, 76), &grid, &mut out), n);
                    assert_eq!(out, expected);
                }
            });
        }
    });
}

#[test]
fn euclidean_float_costs_match_manhattan_lengths() {
    let euclid = GridSearch::new(
        CardinalNeighbors::new(Passable(1u8)),
        Euclidean,
        UnitCost::<f32>::new(),
    );
    let directed = GridSearch::new(
        CardinalNeighbors::new(Passable(1u8)),
        Directed(Euclidean),
        UnitCost::<f32>::new(),
    );

    #[rustfmt::skip]
    let ring = [
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 1, 0, 1,
        1, 0, 1, 0, 1,
        1, 1, 1, 1, 1,
    ];
    #[rustfmt::skip]
    let sealed = [
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 1, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ];
    let two = [1, 1, 0, 1];
    let maze = map(MAZE);
    let large = map(include_str!("data/maze_33x95.txt"));

    let cases = [
        (view(&two, 2), p(0, 0), p(1, 1)),
        (view(&ring, 5), p(2, 0), p(2, 2)),
        (view(&sealed, 5), p(0, 0), p(2, 2)),
        (maze.view(), p(0, 0), p(9, 9)),
        (large.view(), p(32, 35), p(31, 76)),
        (large.view(), p(0, 0), p(32, 94)),
    ];
    let mut cache = SearchCache::<f32>::new();
    for (grid, start, end) in cases {
        let mut want: Vec<usize> = Vec::new();
        let mut got: Vec<usize> = Vec::new();
        let n = find_path(start, end, &grid, &mut want);

        assert_eq!(euclid.find_path(start, end, &grid, &mut got), n, "{start} -> {end}");
        if n > 0 {
            assert_walkable(&grid, start, end, &got);
        }
        assert_eq!(directed.find_path_uncached(start, end, &grid, &mut got), n);
        if n > 0 {
            assert_walkable(&grid, start, end, &got);
        }

        let cold = euclid.find_path_with(&mut cache, start, end, &grid, &mut got);
        let first = got.clone();
        assert_eq!(euclid.find_path_with(&mut cache, start, end, &grid, &mut got), cold);
        assert_eq!(cold, n);
        assert_eq!(got, first);
    }
    assert!(cache.stats().hits >= 3);
}
