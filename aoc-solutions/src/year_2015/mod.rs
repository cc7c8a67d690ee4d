pub mod day01_floors;
pub mod day02_wrapping;
pub mod day03_houses;
pub mod day05_naughty;
pub mod day06_lights;
