//! Compares ways of building a map of squares.

use std::collections::HashMap;

use reptime::{black_box, Suite};

const LEN: u32 = 1000;

fn main() {
    demos::init_logging();

    Suite::default()
        .candidate("collect", || {
            let map: HashMap<u32, u32> = (0..black_box(LEN)).map(|x| (x, x * x)).collect();
            map.len()
        })
        .candidate("for_loop", || {
            let mut map = HashMap::new();
            for x in 0..black_box(LEN) {
                map.insert(x, x * x);
            }
            map.len()
        })
        .candidate("for_loop_with_capacity", || {
            let mut map = HashMap::with_capacity(LEN as usize);
            for x in 0..black_box(LEN) {
                map.insert(x, x * x);
            }
            map.len()
        })
        .main();
}
