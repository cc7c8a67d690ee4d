//! The solutions as the runner sees them: through the plugin registry

use aoc_solutions as _;

use aoc_solver::{PuzzleId, RegistryBuilder, SolverRegistry};
use proptest::prelude::*;

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins should register without duplicates")
        .build()
}

fn id(year: u16, day: u8) -> PuzzleId {
    PuzzleId::new(year, day).unwrap()
}

/// Small inputs for every shipped day
const SAMPLES: &[(u16, u8, &str)] = &[
    (2015, 1, "()())\n"),
    (2015, 2, "2x3x4\n1x1x10\n"),
    (2015, 3, "^v^v^v^v^v\n"),
    (2015, 5, "ugknbfddgicrmopn\nqjhvhtzxzqqjkmpb\nxxyxx\n"),
    (2015, 6, "turn on 0,0 through 9,9\ntoggle 0,0 through 9,0\n"),
    (2025, 1, "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n"),
];

/// Every part's answer, or its error message
fn solve_all(
    registry: &SolverRegistry,
    puzzle: PuzzleId,
    input: &str,
) -> Vec<Result<String, String>> {
    let mut solver = registry.create_solver(puzzle, input).unwrap();
    (1..=solver.parts())
        .map(|part| {
            solver
                .solve(part)
                .map(|solved| solved.answer)
                .map_err(|e| e.to_string())
        })
        .collect()
}

fn answers(registry: &SolverRegistry, puzzle: PuzzleId, input: &str) -> Vec<String> {
    solve_all(registry, puzzle, input)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", puzzle, input, e))
}

#[test]
fn test_shipped_days_are_registered() {
    let registry = registry();
    for &(year, day, _) in SAMPLES {
        let info = registry
            .info(id(year, day))
            .unwrap_or_else(|| panic!("{}/{} should be registered", year, day));
        assert!(!info.title.is_empty());
        assert_eq!(info.parts, 2);
    }
    assert_eq!(registry.len(), SAMPLES.len());
    assert_eq!(registry.years(), vec![2015, 2025]);
}

#[test]
fn test_floors_examples() {
    let registry = registry();
    assert_eq!(solve_all(&registry, id(2015, 1), "(())")[0], Ok("0".to_string()));
    assert_eq!(solve_all(&registry, id(2015, 1), "(((")[0], Ok("3".to_string()));
}

#[test]
fn test_floors_without_basement_fails_only_part_two() {
    let registry = registry();
    let results = solve_all(&registry, id(2015, 1), "(((");
    assert_eq!(results[0], Ok("3".to_string()));
    let err = results[1].as_ref().unwrap_err();
    assert!(err.contains("basement"), "unexpected error: {}", err);
}

#[test]
fn test_samples_are_deterministic() {
    let registry = registry();
    for &(year, day, input) in SAMPLES {
        let first = answers(&registry, id(year, day), input);
        let second = answers(&registry, id(year, day), input);
        assert_eq!(first, second, "{}/{} answers changed between runs", year, day);
    }
}

#[test]
fn test_sample_answers() {
    let registry = registry();
    assert_eq!(answers(&registry, id(2015, 1), SAMPLES[0].2), ["-1", "5"]);
    assert_eq!(answers(&registry, id(2015, 2), SAMPLES[1].2), ["101", "48"]);
    assert_eq!(answers(&registry, id(2015, 6), SAMPLES[4].2), ["90", "120"]);
    assert_eq!(answers(&registry, id(2025, 1), SAMPLES[5].2), ["3", "6"]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_final_floor_is_balance(input in "[()]{0,200}") {
        let registry = registry();
        let mut solver = registry.create_solver(id(2015, 1), &input).unwrap();
        let expected = input.matches('(').count() as i64 - input.matches(')').count() as i64;

        let first = solver.solve(1).unwrap().answer;
        let second = solver.solve(1).unwrap().answer;
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, expected.to_string());
    }
}
