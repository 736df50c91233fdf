//! Compares ways of taking square roots of `0..1000`.
//!
//! ```txt
//! cargo run --release --bin sqrt -- --sort time
//! ```

use reptime::{black_box, Suite};

fn main() {
    demos::init_logging();

    let values: Vec<f64> = (0..1000).map(f64::from).collect();
    let values = values.as_slice();

    Suite::default()
        .candidate("sqrt", || black_box(values).iter().map(|x| x.sqrt()).sum::<f64>())
        .candidate("powf", || black_box(values).iter().map(|x| x.powf(0.5)).sum::<f64>())
        .candidate("exp_ln", || {
            black_box(values).iter().map(|x| (0.5 * x.ln()).exp()).sum::<f64>()
        })
        .main();
}
