//! Parts sharing parsed data and intermediate results through one solver instance

use aoc_solver::{
    AocParser, AocSolver, DynSolver, ParseError, PartSolver, PuzzleId, RegistryBuilder,
    SolveError, Solver,
};
use proptest::prelude::*;

#[derive(Debug)]
struct Numbers {
    values: Vec<i64>,
    sorted: Option<Vec<i64>>,
    sorts: usize,
}

impl Numbers {
    fn sorted(&mut self) -> &[i64] {
        let values = &self.values;
        let sorts = &mut self.sorts;
        self.sorted.get_or_insert_with(|| {
            *sorts += 1;
            let mut v = values.clone();
            v.sort_unstable();
            v
        })
    }
}

/// Part 1 is the minimum, part 2 the median; both reuse one sort
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct Stats;

impl AocParser for Stats {
    type SharedData<'a> = Numbers;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|w| {
                w.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad number {}", w)))
            })
            .collect::<Result<Vec<i64>, _>>()?;
        if values.is_empty() {
            return Err(ParseError::MissingData("no numbers".into()));
        }
        Ok(Numbers {
            values,
            sorted: None,
            sorts: 0,
        })
    }
}

impl PartSolver<1> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.sorted()[0].to_string())
    }
}

impl PartSolver<2> for Stats {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sorted = shared.sorted();
        Ok(sorted[sorted.len() / 2].to_string())
    }
}

#[test]
fn test_intermediate_result_computed_once() {
    let mut shared = Stats::parse("5 3 9 1 7").unwrap();
    assert_eq!(Stats::solve_part(&mut shared, 1).unwrap(), "1");
    assert_eq!(Stats::solve_part(&mut shared, 2).unwrap(), "5");
    assert_eq!(shared.sorts, 1);
}

#[test]
fn test_parse_timing_recorded() {
    let puzzle = PuzzleId::new(2021, 7).unwrap();
    let registry = RegistryBuilder::new()
        .register_solver::<Stats>(puzzle, "Stats", &[])
        .unwrap()
        .build();

    let mut solver: Box<dyn DynSolver + '_> = registry.create_solver(puzzle, "4 2").unwrap();
    assert!(solver.parse_end() >= solver.parse_start());
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let result = solver.solve(1).unwrap();
    assert_eq!(result.answer, "2");
    assert!(result.duration() >= chrono::TimeDelta::zero());
}

#[test]
fn test_missing_data_rejected() {
    assert!(matches!(
        Stats::parse("   "),
        Err(ParseError::MissingData(_))
    ));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_dispatch_matches_part_solver(
        numbers in prop::collection::vec(-1000i64..1000, 1..20),
        part in 1u8..=2,
    ) {
        let input = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        let mut via_solver = Stats::parse(&input).unwrap();
        let mut direct = Stats::parse(&input).unwrap();

        let dispatched = Stats::solve_part(&mut via_solver, part).unwrap();
        let expected = match part {
            1 => <Stats as PartSolver<1>>::solve(&mut direct).unwrap(),
            _ => <Stats as PartSolver<2>>::solve(&mut direct).unwrap(),
        };
        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn prop_repeated_solves_are_deterministic(
        numbers in prop::collection::vec(-1000i64..1000, 1..20),
    ) {
        let input = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        let puzzle = PuzzleId::new(2021, 7).unwrap();
        let registry = RegistryBuilder::new()
            .register_solver::<Stats>(puzzle, "Stats", &[])
            .unwrap()
            .build();

        let mut first = registry.create_solver(puzzle, &input).unwrap();
        let mut second = registry.create_solver(puzzle, &input).unwrap();
        for part in 1..=2 {
            prop_assert_eq!(first.solve(part).unwrap().answer, second.solve(part).unwrap().answer);
        }
    }
}
