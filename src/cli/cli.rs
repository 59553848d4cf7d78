use std::{io::Read, time::Duration};

use clap::{Args, Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tetracubes::{
    answer::{PuzzleBox, Solution},
    classify::classify,
    expander::generate_tetracubes,
    facts,
    pieces::PieceTable,
    view::{self, ViewState},
};
use tracing_subscriber::EnvFilter;

mod enumerate;
use enumerate::enumerate;

fn finish_bar(bar: &ProgressBar, duration: Duration, classes: usize, n: usize) {
    let time = duration.as_micros();
    let secs = time / 1_000_000;
    let micros = time % 1_000_000;

    bar.finish_with_message(format!(
        "Done! Found {classes} free shapes (N = {n}) in {secs}.{micros:06} s"
    ));
}

pub fn make_bar(len: u64) -> indicatif::ProgressBar {
    let bar = ProgressBar::new(len);

    let pos_width = format!("{len}").len();

    let template =
        format!("[{{elapsed_precise}}] {{bar:40.cyan/blue}} {{pos:>{pos_width}}}/{{len}} {{msg}}");

    bar.set_style(
        ProgressStyle::with_template(&template)
            .unwrap()
            .progress_chars("#>-"),
    );
    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Grow and classify all shapes with a specific amount of cubes
    Enumerate(EnumerateOpts),
    /// Write the solver facts for every orientation of every piece
    Facts(FactsOpts),
    /// Print the classified tetracubes
    Show(ShowOpts),
    /// Draw the pieces placed by a solver answer set
    Place(PlaceOpts),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The number of cubes per shape.
    #[clap(default_value_t = 4)]
    pub n: usize,

    /// Disable parallelism.
    #[clap(long, short = 'p')]
    pub no_parallelism: bool,
}

#[derive(Clone, Args)]
pub struct FactsOpts {
    /// The path to write the facts to.
    #[clap(long, short, default_value = "tetracubes.lp")]
    pub output_path: String,

    /// Compress the written file
    #[clap(long, short = 'z', value_enum, default_value = "none")]
    pub compression: Compression,
}

#[derive(Clone, Args)]
pub struct ShowOpts {
    #[clap(long, short, value_enum, default_value = "free")]
    pub category: Category,

    /// The 1-based index of the shape to show.
    #[clap(long, short, default_value_t = 1)]
    pub index: usize,

    /// Show every shape in the category.
    #[clap(long, short)]
    pub all: bool,
}

#[derive(Clone, Args)]
pub struct PlaceOpts {
    /// The file containing the answer set, or `-` for stdin.
    pub path: String,

    /// The box the pieces were packed into, as DEPTHxHEIGHTxWIDTH.
    #[clap(long = "box", short = 'b', default_value = "2x4x4")]
    pub puzzle_box: PuzzleBox,

    /// Only draw the first COUNT pieces.
    #[clap(long, short = 'n')]
    pub count: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Compression {
    None,
    Gzip,
}

impl From<Compression> for facts::Compression {
    fn from(value: Compression) -> Self {
        match value {
            Compression::None => facts::Compression::None,
            Compression::Gzip => facts::Compression::Gzip,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum Category {
    Free,
    Unilateral,
}

impl From<Category> for view::Category {
    fn from(value: Category) -> Self {
        match value {
            Category::Free => view::Category::Free,
            Category::Unilateral => view::Category::Unilateral,
        }
    }
}

fn write_facts(opts: &FactsOpts) {
    let table = PieceTable::new();
    let path = &opts.output_path;

    match facts::write_file(&table, opts.compression.into(), path) {
        Ok(()) => println!(
            "Wrote {} orientations of {} pieces to {path}",
            table.total_orientations(),
            table.iter().count()
        ),
        Err(e) => {
            println!("Failed to write {path}. Error: {e}");
            std::process::exit(1);
        }
    }
}

fn show(opts: &ShowOpts) {
    let classes = classify(&generate_tetracubes());
    let state = ViewState::default().with_category(opts.category.into());
    let len = state.category.shapes(&classes).len();

    if opts.all {
        let mut state = state;
        for _ in 0..len {
            println!("{}", view::render(&state, &classes));
            state = state.next(len);
        }
        return;
    }

    if opts.index == 0 || opts.index > len {
        println!("Index must be between 1 and {len}");
        std::process::exit(1);
    }

    let state = ViewState {
        index: opts.index - 1,
        ..state
    };

    print!("{}", view::render(&state, &classes));
}

fn read_answer(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

fn place(opts: &PlaceOpts) {
    let text = match read_answer(&opts.path) {
        Ok(t) => t,
        Err(e) => {
            println!("Failed to read {}. Error: {e}", opts.path);
            std::process::exit(1);
        }
    };

    let table = PieceTable::new();
    let placements = match Solution::parse(&text).and_then(|s| s.placements(&table)) {
        Ok(p) => p,
        Err(e) => {
            println!("Error: {e}");
            std::process::exit(1);
        }
    };

    for p in placements.iter() {
        if !p.cells.cells().iter().all(|c| opts.puzzle_box.contains(c)) {
            tracing::warn!(id = p.id, ty = %p.ty, "piece sticks out of the {} box", opts.puzzle_box);
        }
    }

    let shown = opts.count.unwrap_or(placements.len());
    print!("{}", view::render_placements(&placements, opts.puzzle_box, shown));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tetracubes=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(r) => enumerate(&r),
        Opts::Facts(f) => write_facts(&f),
        Opts::Show(s) => show(&s),
        Opts::Place(p) => place(&p),
    }
}
