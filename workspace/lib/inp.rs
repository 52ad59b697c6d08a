//! Reader for the `schrodinger.inp` input format.
//!
//! ```text
//! 2.0                   # mass
//! -2.0 2.0 1999         # xMin xMax nPoint
//! 1 5                   # first and last eigenvalue to print
//! linear                # interpolation type
//! 2                     # number of interpolation points
//! -2.0 0.0              # knot lines: x V(x)
//! 2.0 0.0
//! ```
//!
//! Only the leading tokens of each line are read, so anything after them is
//! free-form commentary.

use std::{ fs, path::Path, str::FromStr };
use anyhow::{ anyhow, bail, Context };
use sgl1d::{ InterpMethod, Params };

/// Name of the input file within an example directory.
pub const INP_FILE: &str = "schrodinger.inp";

// parse the `k`-th whitespace-separated token on a line
fn field<T>(line: &(usize, &str), k: usize, name: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let (lineno, text) = line;
    let tok
        = text.split_whitespace().nth(k)
        .ok_or_else(|| anyhow!("line {}: missing {}", lineno, name))?;
    tok.parse::<T>()
        .with_context(|| format!("line {}: invalid {} '{}'", lineno, name, tok))
}

/// Parse the contents of an input file.
pub fn parse_inp(src: &str) -> anyhow::Result<Params> {
    let mut lines
        = src.lines().enumerate()
        .map(|(k, text)| (k + 1, text))
        .filter(|(_, text)| !text.trim().is_empty());
    let mut next = |what: &str| {
        lines.next().ok_or_else(|| anyhow!("unexpected end of input; expected {}", what))
    };

    let line = next("mass")?;
    let mass: f64 = field(&line, 0, "mass")?;

    let line = next("grid bounds")?;
    let x_min: f64 = field(&line, 0, "xMin")?;
    let x_max: f64 = field(&line, 1, "xMax")?;
    let n_point: usize = field(&line, 2, "nPoint")?;

    let line = next("eigenvalue window")?;
    let first: usize = field(&line, 0, "first")?;
    let last: usize = field(&line, 1, "last")?;

    let line = next("interpolation method")?;
    let method: InterpMethod = field(&line, 0, "interpolation method")?;

    let line = next("number of knots")?;
    let n_knots: usize = field(&line, 0, "number of knots")?;

    let mut x_decl: Vec<f64> = Vec::new();
    let mut y_decl: Vec<f64> = Vec::new();
    for k in 0..n_knots {
        let line = next(&format!("knot {} of {}", k + 1, n_knots))?;
        x_decl.push(field(&line, 0, "knot x")?);
        y_decl.push(field(&line, 1, "knot y")?);
    }
    if let Some((lineno, _)) = lines.next() {
        bail!("line {}: found more than the declared {} knots", lineno, n_knots);
    }

    Ok(Params { mass, x_min, x_max, n_point, first, last, method, x_decl, y_decl })
}

/// Read `schrodinger.inp` from a directory.
pub fn read_inp<P>(dir: P) -> anyhow::Result<Params>
where P: AsRef<Path>
{
    let path = dir.as_ref().join(INP_FILE);
    let src
        = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_inp(&src).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INFINITE_WELL: &str = "\
2.0                   # mass
-2.0 2.0 1999         # xMin xMax nPoint
1 5                   # first and last eigenvalue to print
linear                # interpolation type
2                     # nr. of interpolation points and xy declarations
-2.0 0.0
2.0 0.0
";

    #[test]
    fn parses_infinite_well() {
        let params = parse_inp(INFINITE_WELL).unwrap();
        assert_eq!(
            params,
            Params {
                mass: 2.0,
                x_min: -2.0,
                x_max: 2.0,
                n_point: 1999,
                first: 1,
                last: 5,
                method: InterpMethod::Linear,
                x_decl: vec![-2.0, 2.0],
                y_decl: vec![0.0, 0.0],
            },
        );
    }

    #[test]
    fn tolerates_trailing_blank_lines() {
        let src = format!("{}\n\n   \n", INFINITE_WELL);
        assert!(parse_inp(&src).is_ok());
    }

    #[test]
    fn rejects_missing_knots() {
        let src = INFINITE_WELL.replacen("\n2 ", "\n3 ", 1);
        let err = parse_inp(&src).unwrap_err();
        assert!(err.to_string().contains("knot 3 of 3"));
    }

    #[test]
    fn rejects_extra_knots() {
        let src = format!("{}3.0 1.0\n", INFINITE_WELL);
        assert!(parse_inp(&src).is_err());
    }

    #[test]
    fn huge_knot_count_is_an_error() {
        let src = INFINITE_WELL.replacen("\n2 ", "\n2000000000000000000 ", 1);
        let err = parse_inp(&src).unwrap_err();
        assert!(err.to_string().contains("knot 3 of 2000000000000000000"));
    }

    #[test]
    fn rejects_unknown_method() {
        let src = INFINITE_WELL.replace("linear", "quadratic");
        let err = parse_inp(&src).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown interpolation method"));
    }

    #[test]
    fn rejects_bad_number() {
        let src = INFINITE_WELL.replace("1999", "many");
        let err = parse_inp(&src).unwrap_err();
        assert!(err.to_string().contains("nPoint"));
    }
}
