use fuzz_ivmap::assign::{Assign, run_differential};

fn main() {
    afl::fuzz!(|data: (u8, Vec<Assign>)| {
        let (default_value, ops) = data;

        run_differential(default_value, &ops);
    });
}
