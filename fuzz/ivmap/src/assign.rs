use arbitrary::Arbitrary;
use ivmap::IntervalMap;

const KEYS: usize = 1 << u8::BITS;

#[derive(Debug, Clone, Copy, Arbitrary)]
pub struct Assign {
    begin: u8,
    end: u8,
    value: u8,
}

/// Replay `ops` against both an interval map and a dense array of every
/// key, checking they agree after each step.
pub fn run_differential(default_value: u8, ops: &[Assign]) {
    let mut map = IntervalMap::new(default_value);
    let mut dense = [default_value; KEYS];

    for &op in ops {
        let Assign { begin, end, value } = op;

        map.assign(begin, end, value);

        if begin < end {
            dense[usize::from(begin)..usize::from(end)].fill(value);
        }

        #[cfg(feature = "trace")]
        {
            eprintln!("{op:?} -> {map:?}");
        }

        map.assert_invariants();

        for (key, expected) in (0..=u8::MAX).zip(dense) {
            assert_eq!(*map.lookup(&key), expected, "key = {key}, map = {map:?}");
        }

        let runs = dense
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count()
            + usize::from(dense[0] != default_value);
        assert_eq!(map.breakpoint_count(), runs, "map = {map:?}");
    }
}
