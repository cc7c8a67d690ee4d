pub mod day01_safe;
