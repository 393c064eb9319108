//! Corner-to-corner A* on random maps of growing size.
//!
//! Run: cargo run --release --bin astar-bench -- [FROM TO STEP [RUNS [SEED]]]
//!
//! Maps are square, 80% open, with both corners open. Set `GRIDSTAR_LOG=debug`
//! to see every search.

use std::fmt::Display;
use std::str::FromStr;

use gridstar_demos::{init_logging, profile};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, PartialEq)]
struct Sweep {
    from: usize,
    to: usize,
    step: usize,
    runs: usize,
    seed: u64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            from: 100,
            to: 1000,
            step: 100,
            runs: 20,
            seed: 42,
        }
    }
}

fn arg<T>(args: &[String], i: usize, name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    args.get(i)
        .map(|s| s.parse::<T>().map_err(|e| format!("{name}: {e}")))
        .transpose()
}

fn parse_args(args: &[String]) -> Result<Sweep, String> {
    let defaults = Sweep::default();
    let sweep = Sweep {
        from: arg(args, 0, "FROM")?.unwrap_or(defaults.from),
        to: arg(args, 1, "TO")?.unwrap_or(defaults.to),
        step: arg(args, 2, "STEP")?.unwrap_or(defaults.step),
        runs: arg(args, 3, "RUNS")?.unwrap_or(defaults.runs),
        seed: arg(args, 4, "SEED")?.unwrap_or(defaults.seed),
    };
    if sweep.from == 0 || sweep.step == 0 {
        return Err("FROM and STEP must be positive".into());
    }
    Ok(sweep)
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Error: {e}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let sweep = match parse_args(&args) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("usage: astar-bench [FROM TO STEP [RUNS [SEED]]]");
            std::process::exit(2);
        }
    };

    let mut rng = StdRng::seed_from_u64(sweep.seed);
    for side in (sweep.from..=sweep.to).step_by(sweep.step) {
        let p = profile(&mut rng, side, sweep.runs);
        match p.mean() {
            Some(mean) => println!(
                "{side}x{side} | success {:>5.1}% | mean {:.6} s",
                p.success_rate() * 100.0,
                mean.as_secs_f64()
            ),
            None => println!("{side}x{side} | success   0.0% |"),
        }
    }
}
