//! Compares ways of computing `20!`.

use reptime::{black_box, Suite};

const N: u64 = 20;

fn recursive(n: u64) -> u64 {
    if n <= 1 {
        1
    } else {
        n * recursive(n - 1)
    }
}

fn iterative(mut n: u64) -> u64 {
    let mut acc = 1;
    while n > 1 {
        acc *= n;
        n -= 1;
    }
    acc
}

/// Every factorial that fits in `u64`.
const TABLE: [u64; 21] = {
    let mut table = [1; 21];
    let mut i = 1;
    while i < table.len() {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

fn main() {
    demos::init_logging();

    Suite::default()
        .candidate("recursive", || recursive(black_box(N)))
        .candidate("iterative", || iterative(black_box(N)))
        .candidate("fold", || (1..=black_box(N)).fold(1, |acc, n| acc * n))
        .candidate("product", || (1..=black_box(N)).product::<u64>())
        .candidate("table", || TABLE[black_box(N) as usize])
        .main();
}
