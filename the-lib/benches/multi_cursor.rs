//! Benchmarks for multi-cursor commands in the-lib.
//!
//! Run with: `cargo bench -p the-lib --bench multi_cursor`

use divan::{
  Bencher,
  black_box,
};
use the_lib::{
  command::{
    Args,
    CommandRegistry,
    Context,
  },
  region::{
    Region,
    RegionSet,
  },
  view::View,
};

fn main() {
  divan::main();
}

fn make_ascii_text(size: usize) -> String {
  let line = "The quick brown fox jumps over the lazy dog.\n";
  let mut s = String::with_capacity(size);
  while s.len() < size {
    s.push_str(line);
  }
  s.truncate(size);
  s
}

fn clamp_count(len: usize, count: usize, span: usize) -> usize {
  let max = if span == 0 { len } else { len / (span + 1) };
  count.min(max.max(1))
}

fn make_regions(len: usize, count: usize, span: usize) -> RegionSet {
  let count = clamp_count(len, count, span);
  let step = len / (count + 1);

  (0..count)
    .map(|i| {
      let start = (i + 1) * step;
      Region::new(start, (start + span).min(len))
    })
    .collect()
}

fn make_view(size: usize, count: usize, span: usize) -> View {
  let mut view = View::new(&make_ascii_text(size));
  let regions = make_regions(view.size(), count, span);
  view.set_selection(regions);
  view
}

// `RegionSet::add` benchmarks.

mod region_set {
  use super::*;

  #[divan::bench(args = [8, 64, 512])]
  fn add_disjoint(bencher: Bencher, count: usize) {
    let regions: Vec<Region> = make_regions(100 * 1024, count, 3).iter().copied().collect();

    bencher.bench(|| {
      let mut set = RegionSet::new();
      set.add_all(black_box(regions.iter().copied()));
      black_box(set);
    });
  }

  #[divan::bench(args = [8, 64, 512])]
  fn add_overlapping(bencher: Bencher, count: usize) {
    let regions: Vec<Region> = (0..count).map(|i| Region::new(i * 2, i * 2 + 5)).collect();

    bencher.bench(|| {
      let mut set = RegionSet::new();
      set.add_all(black_box(regions.iter().copied()));
      black_box(set);
    });
  }
}

// Text command benchmarks through the registry.

mod commands {
  use super::*;

  const SIZE: usize = 100 * 1024;

  fn bench_command(bencher: Bencher, count: usize, span: usize, name: &str, args: Args) {
    let registry = CommandRegistry::new();

    bencher
      .with_inputs(|| (Context::default(), make_view(SIZE, count, span)))
      .bench_local_values(|(mut ctx, mut view)| {
        registry
          .run_text(&mut ctx, &mut view, black_box(name), &args)
          .unwrap();
        black_box(view);
      });
  }

  #[divan::bench(args = [1, 8, 64])]
  fn insert(bencher: Bencher, count: usize) {
    bench_command(bencher, count, 0, "insert", Args::new().with("characters", "xyz"));
  }

  #[divan::bench(args = [1, 8, 64])]
  fn replace_selections(bencher: Bencher, count: usize) {
    bench_command(bencher, count, 3, "insert", Args::new().with("characters", "x"));
  }

  #[divan::bench(args = [1, 8, 64])]
  fn left_delete(bencher: Bencher, count: usize) {
    bench_command(bencher, count, 0, "left_delete", Args::new());
  }

  #[divan::bench(args = [1, 8, 64])]
  fn move_words(bencher: Bencher, count: usize) {
    bench_command(bencher, count, 0, "move", Args::new().with("by", "words"));
  }

  #[divan::bench(args = [1, 8, 64])]
  fn move_lines(bencher: Bencher, count: usize) {
    bench_command(bencher, count, 0, "move", Args::new().with("by", "lines"));
  }

  #[divan::bench(args = [1, 8, 64])]
  fn indent(bencher: Bencher, count: usize) {
    bench_command(bencher, count, 0, "indent", Args::new());
  }
}
