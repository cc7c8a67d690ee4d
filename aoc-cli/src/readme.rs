//! README index generator
//!
//! Walks `year_YYYY/dayDD_<slug>.rs` under the solutions directory, reads the three-line
//! header every day module starts with, and renders an index into the README template:
//!
//! ```text
//! //! Advent of Code 2015
//! //! Day 1: Not Quite Lisp
//! //! https://adventofcode.com/2015/day/1
//! ```

use crate::config::ReadmeConfig;
use crate::error::ReadmeError;
use aoc_solver::{PuzzleId, days_in_year, event_url};
use itertools::Itertools;
use regex::Regex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

const DEFAULT_TEMPLATE: &str = include_str!("../readme-template.md");
const INDEX_PLACEHOLDER: &str = "{index}";

static YEAR_DIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^year_(\d{4})$").unwrap());
static DAY_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^day(\d\d)_[a-z0-9_]+\.rs$").unwrap());
static HEADER_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//! Advent of Code (\d{4})$").unwrap());
static HEADER_DAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^//! Day (\d{1,2}): (\S.*)$").unwrap());

/// Metadata read from a day module's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayDescription {
    pub puzzle: PuzzleId,
    pub title: String,
    /// Source path relative to the repository root, `/`-separated
    pub path: String,
}

impl DayDescription {
    /// Parse the header at the top of `source`
    ///
    /// # Returns
    /// * `Err(ReadmeError::Description)` - the header is missing or malformed
    pub fn parse(path: &Path, source: &str) -> Result<Self, ReadmeError> {
        let malformed = |reason: &str| ReadmeError::Description {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        let mut lines = source.lines();
        let year = lines
            .next()
            .and_then(|line| HEADER_YEAR.captures(line))
            .and_then(|caps| caps[1].parse::<u16>().ok())
            .ok_or_else(|| malformed("missing `//! Advent of Code YYYY` header line"))?;
        let (day, title) = lines
            .next()
            .and_then(|line| HEADER_DAY.captures(line))
            .and_then(|caps| Some((caps[1].parse::<u8>().ok()?, caps[2].trim().to_string())))
            .ok_or_else(|| malformed("missing `//! Day D: Title` header line"))?;
        let puzzle = PuzzleId::new(year, day).map_err(|e| malformed(&e.to_string()))?;

        let url = lines.next().and_then(|line| line.strip_prefix("//! "));
        if url != Some(puzzle.url().as_str()) {
            return Err(malformed(&format!("expected url {}", puzzle.url())));
        }

        Ok(Self {
            puzzle,
            title,
            path: String::new(),
        })
    }

    pub fn aoc_url(&self) -> String {
        self.puzzle.url()
    }
}

/// Day files found in one `year_YYYY` directory, by day number
#[derive(Debug)]
pub struct YearDir {
    pub year: u16,
    pub days: Vec<(u8, PathBuf)>,
}

/// Find the year directories and their day files, both ascending
pub fn discover(solutions_dir: &Path) -> Result<Vec<YearDir>, ReadmeError> {
    let mut years = Vec::new();
    for (name, path) in list_dir(solutions_dir)? {
        let Some(year) = YEAR_DIR
            .captures(&name)
            .and_then(|caps| caps[1].parse::<u16>().ok())
        else {
            continue;
        };
        if !path.is_dir() {
            continue;
        }

        let mut days: Vec<(u8, PathBuf)> = list_dir(&path)?
            .into_iter()
            .filter_map(|(name, path)| {
                let day = DAY_FILE.captures(&name)?[1].parse::<u8>().ok()?;
                // day00 is the template for new days
                (day > 0).then_some((day, path))
            })
            .collect();
        days.sort();
        years.push(YearDir { year, days });
    }
    years.sort_by_key(|y| y.year);
    Ok(years)
}

fn list_dir(dir: &Path) -> Result<Vec<(String, PathBuf)>, ReadmeError> {
    let io_err = |source| ReadmeError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if let Some(name) = entry.file_name().to_str() {
            entries.push((name.to_string(), entry.path()));
        }
    }
    Ok(entries)
}

/// Read the header of every discovered day file
///
/// Files with an unusable header are skipped with a warning; a header naming a
/// different puzzle than the file's location, or a second file for one puzzle, is an error.
pub fn describe(
    root: &Path,
    years: &[YearDir],
) -> Result<Vec<(u16, Vec<DayDescription>)>, ReadmeError> {
    years
        .iter()
        .map(|year_dir| {
            let mut described: Vec<DayDescription> = Vec::new();
            for (day, path) in &year_dir.days {
                let expected = match PuzzleId::new(year_dir.year, *day) {
                    Ok(puzzle) => puzzle,
                    Err(e) => {
                        warn!(path = %path.display(), "skipping day file: {}", e);
                        continue;
                    }
                };
                if described.last().is_some_and(|d| d.puzzle == expected) {
                    return Err(ReadmeError::Duplicate {
                        path: path.clone(),
                        puzzle: expected,
                    });
                }

                let source = fs::read_to_string(path).map_err(|source| ReadmeError::Io {
                    path: path.clone(),
                    source,
                })?;
                let mut desc = match DayDescription::parse(path, &source) {
                    Ok(desc) => desc,
                    Err(e) => {
                        warn!("skipping day file: {}", e);
                        continue;
                    }
                };
                if desc.puzzle != expected {
                    return Err(ReadmeError::Mismatch {
                        path: path.clone(),
                        expected,
                        found: desc.puzzle,
                    });
                }
                desc.path = relative_path(root, path);
                debug!(puzzle = %desc.puzzle, title = %desc.title, "indexed");
                described.push(desc);
            }
            Ok((year_dir.year, described))
        })
        .collect()
}

fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/")
}

/// Index lines, newest year first
///
/// Skipped days show as `- ...`, as does the tail of a year with days still to come.
pub fn index_lines(years: &[(u16, Vec<DayDescription>)]) -> Vec<String> {
    let mut lines = vec!["## Index".to_string(), String::new()];
    lines.extend(
        years
            .iter()
            .rev()
            .map(|(year, _)| format!("- [{year}](#{year})")),
    );

    for (year, days) in years.iter().rev() {
        lines.extend([
            String::new(),
            String::new(),
            format!("### {}", year),
            String::new(),
            format!("([aoc {} event]({}))", year, event_url(*year)),
            String::new(),
        ]);

        let mut prev_day = 0;
        for desc in days {
            let day = desc.puzzle.day();
            if day > prev_day + 1 {
                lines.push("- ...".to_string());
            }
            prev_day = day;
            lines.push(format!(
                "- ([aoc]({})) Day {}: [{}]({})",
                desc.aoc_url(),
                day,
                desc.title,
                desc.path
            ));
        }
        if prev_day < days_in_year(*year) {
            lines.push("- ...".to_string());
        }
    }

    lines
}

/// Replace the `{index}` line of `template` with `index`
pub fn render(template: &str, index: &[String]) -> Result<String, ReadmeError> {
    let mut out = String::with_capacity(template.len());
    let mut placed = false;
    for line in template.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == INDEX_PLACEHOLDER {
            for index_line in index {
                out.push_str(index_line);
                out.push('\n');
            }
            placed = true;
        } else {
            out.push_str(line);
        }
    }
    if !placed {
        return Err(ReadmeError::MissingPlaceholder);
    }
    Ok(out)
}

/// Produce the full README text for a configuration
pub fn generate(config: &ReadmeConfig) -> Result<String, ReadmeError> {
    let template = match &config.template {
        Some(path) => fs::read_to_string(path).map_err(|source| ReadmeError::Io {
            path: path.clone(),
            source,
        })?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let years = discover(&config.solutions_dir)?;
    let described = describe(&config.root, &years)?;
    render(&template, &index_lines(&described))
}

/// Write the README, or with `check` only compare it against what would be written
pub fn write_readme(config: &ReadmeConfig) -> Result<(), ReadmeError> {
    let text = generate(config)?;

    if config.check {
        let current = match fs::read_to_string(&config.output) {
            Ok(current) => current,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(ReadmeError::Io {
                    path: config.output.clone(),
                    source,
                });
            }
        };
        if current != text {
            return Err(ReadmeError::OutOfDate(config.output.clone()));
        }
        println!("{} is up to date", config.output.display());
        return Ok(());
    }

    fs::write(&config.output, text).map_err(|source| ReadmeError::Io {
        path: config.output.clone(),
        source,
    })?;
    println!("readme text written to {}", config.output.display());
    Ok(())
}
