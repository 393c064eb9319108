//! Shortest path on a text map, printed over the map.
//!
//! Run: cargo run --bin astar-ascii -- MAP_FILE SX,SY EX,EY
//!
//! In the map `.` is open and `#` is a wall. Without a file argument a
//! built-in maze is used with its corners as endpoints.

use gridstar_core::{GridBuf, parse_map, render_path};
use gridstar_demos::{far_corner, init_logging, parse_point};
use gridstar_paths::{NO_PATH, find_path};

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

fn load(path: Option<&String>) -> Result<GridBuf<u8>, Box<dyn std::error::Error>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => MAZE.to_string(),
    };
    Ok(parse_map(&text, ".", "#")?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = init_logging() {
        eprintln!("Error: {e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let buf = load(args.first())?;
    let grid = buf.view();

    let start = match args.get(1) {
        Some(s) => parse_point(s).ok_or("start must be written as x,y")?,
        None => gridstar_core::Point::ZERO,
    };
    let end = match args.get(2) {
        Some(s) => parse_point(s).ok_or("end must be written as x,y")?,
        None => far_corner(grid.width(), grid.height()),
    };
    for (name, p) in [("start", start), ("end", end)] {
        if !grid.coordinate_valid(p) {
            return Err(format!("{name} {p} is outside the {}x{} map", grid.width(), grid.height()).into());
        }
    }

    let mut path: Vec<usize> = Vec::new();
    let edges = find_path(start, end, &grid, &mut path);
    println!("{}", render_path(&grid, &path, '.', '#', '*'));
    if edges == NO_PATH {
        println!("no path from {start} to {end}");
    } else {
        println!("{edges} steps from {start} to {end}");
    }
    Ok(())
}
