use crate::prelude::*;

struct Scenario {
    assign: (i32, i32, char),
    expect: &'static [(i32, char)],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        assign: (1, 3, 'B'),
        expect: &[(-1, 'A'), (0, 'A'), (1, 'B'), (2, 'B'), (3, 'A'), (4, 'A')],
    },
    Scenario {
        assign: (2, 5, 'C'),
        expect: &[(1, 'B'), (2, 'C'), (3, 'C'), (4, 'C'), (5, 'A')],
    },
    Scenario {
        assign: (1, 2, 'A'),
        expect: &[(1, 'A'), (2, 'C'), (5, 'A')],
    },
    Scenario {
        assign: (4, 7, 'D'),
        expect: &[(3, 'C'), (4, 'D'), (5, 'D'), (6, 'D'), (7, 'A')],
    },
    Scenario {
        assign: (0, 2, 'E'),
        expect: &[(-1, 'A'), (0, 'E'), (1, 'E'), (2, 'C'), (7, 'A')],
    },
];

/// Apply each scenario in turn to a single map, checking its lookups after
/// every assignment
pub fn run() -> Result {
    let mut map = IntervalMap::new('A');

    for (num, scenario) in (1..).zip(SCENARIOS) {
        let Scenario {
            assign: (begin, end, value),
            expect,
        } = *scenario;

        debug!(begin, end, %value, "Running scenario {num}");
        map.assign(begin, end, value);

        for &(key, expected) in expect {
            let actual = *map.lookup(&key);
            ensure!(
                actual == expected,
                "Scenario {num} failed: key {key} maps to {actual:?}, expected {expected:?}"
            );
        }
    }

    trace!(?map, "Self-check complete");

    Ok(())
}
