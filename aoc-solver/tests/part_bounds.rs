//! Range checking of part numbers through `SolverExt` and `DynSolver`

use aoc_solver::{
    AocParser, ParseError, PuzzleId, RegistryBuilder, SolveError, Solver, SolverExt,
};
use proptest::prelude::*;

/// Solver whose part count is a const parameter
struct Parts<const N: u8>;

impl<const N: u8> AocParser for Parts<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Parts<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => Parts::<1>::solve_part_checked_range(&mut (), part),
        _ => Parts::<2>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_out_of_range_rejected(max_parts in 1u8..=2, part in any::<u8>()) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    #[test]
    fn prop_instance_enforces_range(part in any::<u8>()) {
        let puzzle = PuzzleId::new(2015, 1).unwrap();
        let registry = RegistryBuilder::new()
            .register_solver::<Parts<1>>(puzzle, "one part", &[])
            .unwrap()
            .build();
        let mut solver = registry.create_solver(puzzle, "").unwrap();

        let result = solver.solve(part);
        if part == 1 {
            prop_assert_eq!(result.unwrap().answer, "part1");
        } else {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        }
    }
}

#[test]
fn test_part_zero_rejected() {
    assert!(matches!(checked(2, 0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_valid_part_delegates() {
    assert_eq!(checked(2, 2).unwrap(), "part2");
}
