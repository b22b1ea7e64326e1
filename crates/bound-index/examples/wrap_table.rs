//! Example printing how a range of indices wraps under a boundary condition.
//!
//! This example shows how to:
//! - Select the process-wide boundary condition by name or host integer code
//! - Wrap a range of indices that extends past both edges of an axis
//!
//! # Usage
//!
//! ```sh
//! cargo run --example wrap_table -- --mode neumann --len 4
//! ```
//!
//! Select the mode by integer code, as a host runtime would:
//!
//! ```sh
//! cargo run --example wrap_table -- --code 1 --len 5 --from -10 --to 10
//! ```
//!
//! Print both modes side by side:
//!
//! ```sh
//! cargo run --example wrap_table -- --compare --len 3
//! ```
//!
//! Set `RUST_LOG=debug` to see mode changes.

use std::process;

use bound_index::BoundaryMode;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    #[value(alias = "periodic")]
    Circulant,
    #[value(alias = "reflective")]
    Neumann,
}

impl From<ModeArg> for BoundaryMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Circulant => BoundaryMode::Circulant,
            ModeArg::Neumann => BoundaryMode::Neumann,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Boundary condition to apply.
    #[arg(short, long, value_name = "MODE", default_value = "circulant", conflicts_with = "code")]
    mode: ModeArg,

    /// Host integer code of the boundary condition (0: circulant, 1: neumann).
    #[arg(long, value_name = "CODE", allow_hyphen_values = true)]
    code: Option<i32>,

    /// Extent of the axis being indexed.
    #[arg(short, long, value_name = "LEN", default_value_t = 4)]
    len: usize,

    /// First index to wrap.
    #[arg(long, value_name = "INDEX", allow_hyphen_values = true, default_value_t = -8)]
    from: isize,

    /// Last index to wrap (inclusive).
    #[arg(long, value_name = "INDEX", allow_hyphen_values = true, default_value_t = 8)]
    to: isize,

    /// Print every supported mode side by side.
    #[arg(long)]
    compare: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    if args.len == 0 || isize::try_from(args.len).is_err() {
        eprintln!("--len must be between 1 and {}", isize::MAX);
        process::exit(2);
    }

    if args.compare {
        print_comparison(&args);
        return;
    }

    let selected = match args.code {
        Some(code) => bound_index::set_boundary_code(code),
        None => {
            bound_index::set_boundary_mode(args.mode.into());
            Ok(())
        }
    };
    if let Err(err) = selected {
        eprintln!("{err}");
        process::exit(1);
    }

    let mode = bound_index::boundary_mode();
    println!("{mode} (code {}), len {}", mode.code(), args.len);
    for i in args.from..=args.to {
        println!("{i:>6} -> {}", bound_index::wrap(i, args.len));
    }
}

fn print_comparison(args: &Args) {
    print!("{:>6}", "index");
    for mode in BoundaryMode::ALL {
        print!(" {mode:>10}");
    }
    println!();

    for i in args.from..=args.to {
        print!("{i:>6}");
        for mode in BoundaryMode::ALL {
            print!(" {:>10}", mode.wrap(i, args.len));
        }
        println!();
    }
}
