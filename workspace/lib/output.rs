//! Plain-text result tables.
//!
//! A solved problem is written as four whitespace-separated tables:
//! - `energies.dat`: one energy per line, ascending
//! - `potential.dat`: `x V(x)`, one grid point per line
//! - `wavefuncs.dat`: `x ψ₁(x) ψ₂(x) ...`, one grid point per line
//! - `expvalues.dat`: `<x> Δx`, one state per line
//!
//! Reference tables (`energies.ref`, `potential.ref`) hold one number per line
//! and are compared against the first column of a result table.

use std::{
    fs,
    io::{ BufWriter, Write },
    path::Path,
};
use anyhow::{ bail, Context };
use ndarray as nd;
use sgl1d::Output;

pub const ENERGIES_FILE: &str = "energies.dat";
pub const POTENTIAL_FILE: &str = "potential.dat";
pub const WAVEFUNCS_FILE: &str = "wavefuncs.dat";
pub const EXPVALUES_FILE: &str = "expvalues.dat";

pub const ENERGIES_REF: &str = "energies.ref";
pub const POTENTIAL_REF: &str = "potential.ref";

fn write_rows<P, I, R>(path: P, rows: I) -> anyhow::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = f64>,
{
    let path = path.as_ref();
    let file
        = fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for row in rows.into_iter() {
        let line: Vec<String>
            = row.into_iter().map(|v| format!("{:>23.15e}", v)).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Write all result tables into `dir`, creating it if necessary.
pub fn write_output<P>(dir: P, out: &Output) -> anyhow::Result<()>
where P: AsRef<Path>
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    write_rows(
        dir.join(ENERGIES_FILE),
        out.energies.iter().map(|e| [*e]),
    )?;
    write_rows(
        dir.join(POTENTIAL_FILE),
        out.x.iter().zip(&out.potential).map(|(x, v)| [*x, *v]),
    )?;
    write_rows(
        dir.join(WAVEFUNCS_FILE),
        out.x.iter().zip(out.wavefunctions.columns())
            .map(|(x, col)| std::iter::once(*x).chain(col.into_iter().copied())),
    )?;
    write_rows(
        dir.join(EXPVALUES_FILE),
        out.exp_x.iter().zip(&out.unc_x).map(|(m, s)| [*m, *s]),
    )?;
    Ok(())
}

/// Parse the first column of a whitespace-separated table. Blank lines and
/// lines starting with `#` are skipped.
pub fn parse_column(src: &str) -> anyhow::Result<nd::Array1<f64>> {
    src.lines().enumerate()
        .filter(|(_, text)| {
            let text = text.trim();
            !text.is_empty() && !text.starts_with('#')
        })
        .map(|(k, text)| {
            let tok = text.split_whitespace().next().unwrap_or_default();
            tok.parse::<f64>()
                .with_context(|| format!("line {}: invalid number '{}'", k + 1, tok))
        })
        .collect()
}

/// Read the first column of a table on disk.
pub fn read_column<P>(path: P) -> anyhow::Result<nd::Array1<f64>>
where P: AsRef<Path>
{
    let path = path.as_ref();
    let src
        = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_column(&src).with_context(|| format!("failed to parse {}", path.display()))
}

/// Largest elementwise absolute difference between two columns of equal
/// length.
pub fn max_deviation(a: &nd::Array1<f64>, b: &nd::Array1<f64>) -> anyhow::Result<f64> {
    if a.len() != b.len() {
        bail!("columns have unequal lengths {} and {}", a.len(), b.len());
    }
    Ok(a.iter().zip(b).map(|(ak, bk)| (ak - bk).abs()).fold(0.0, f64::max))
}
