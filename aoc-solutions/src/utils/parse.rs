//! Input-parsing helpers shared by day modules

use anyhow::{Context, anyhow, bail};
use aoc_solver::ParseError;

/// Parse every non-blank line with `parse_fn`
///
/// Errors are reported as `ParseError::InvalidFormat` prefixed with the 1-based line
/// number, so a bad input points at the offending line.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_fn: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(idx, line)| parse_fn(line).with_context(|| format!("(line {})", idx + 1)))
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
}

/// Split `line` around the literal parts of `pattern`, returning the text matched by each `$`
///
/// ```
/// use aoc_solutions::utils::parse::parse_line;
///
/// let parts = parse_line("toggle 0,0 through 999,0", "toggle $,$ through $,$").unwrap();
/// assert_eq!(parts, ["0", "0", "999", "0"]);
/// assert!(parse_line("turn on 1,2", "toggle $,$").is_err());
/// ```
pub fn parse_line<'a>(line: &'a str, pattern: &str) -> anyhow::Result<Vec<&'a str>> {
    let fixes: Vec<&str> = pattern.split('$').collect();
    let (prefix, rest_fixes) = fixes
        .split_first()
        .ok_or_else(|| anyhow!("empty pattern"))?;

    let mut rest = line
        .strip_prefix(prefix)
        .ok_or_else(|| anyhow!("expected {:?} to start with {:?}", line, prefix))?;
    let mut values = Vec::with_capacity(rest_fixes.len());

    for (idx, fix) in rest_fixes.iter().enumerate() {
        let is_last = idx + 1 == rest_fixes.len();
        if is_last {
            let value = rest
                .strip_suffix(fix)
                .ok_or_else(|| anyhow!("expected {:?} to end with {:?}", line, fix))?;
            values.push(value);
            rest = "";
        } else if fix.is_empty() {
            bail!("pattern {:?} has adjacent placeholders", pattern);
        } else {
            let pos = rest
                .find(fix)
                .ok_or_else(|| anyhow!("{:?} not found in {:?}", fix, rest))?;
            values.push(&rest[..pos]);
            rest = &rest[pos + fix.len()..];
        }
    }

    if !rest.is_empty() {
        bail!("unexpected trailing text {:?}", rest);
    }
    Ok(values)
}
