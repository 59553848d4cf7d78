use std::time::Instant;

use tetracubes::{
    classify::{classify, classify_rayon},
    expander::generate_with_progress,
};

use crate::{finish_bar, make_bar, EnumerateOpts};

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;

    if n == 0 {
        println!("N must be at least 1");
        std::process::exit(1);
    }

    let start = Instant::now();

    let candidates = generate_with_progress(n, |parents| {
        let bar = make_bar(parents);
        bar.set_message("shapes grown");
        bar
    });

    let bar = make_bar(candidates.len() as u64);
    bar.set_message("classifying");

    let classes = if opts.no_parallelism {
        classify(&candidates)
    } else {
        classify_rayon(&candidates)
    };

    bar.set_position(candidates.len() as u64);
    finish_bar(&bar, start.elapsed(), classes.free.len(), n);

    println!("Number of candidates generated: {}", candidates.len());
    println!("Number of free shapes: {}", classes.free.len());
    println!("Number of unilateral shapes: {}", classes.unilateral.len());
}
