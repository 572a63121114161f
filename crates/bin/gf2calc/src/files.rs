//! reading operands and writing results

use anyhow::{Context, Result};
use gf2_poly::{Gf2Poly, Modulus, Operation};
use std::fs;
use std::path::Path;

fn read_trimmed(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read file {}", path.display()))?;
    Ok(content.trim_matches(|c: char| matches!(c, ' ' | '\n' | '\r')).to_string())
}

/// Modulus file: a single reversed-bit polynomial.
pub fn read_modulus(path: &Path) -> Result<Modulus> {
    let text = read_trimmed(path)?;
    let poly: Gf2Poly = text
        .parse()
        .with_context(|| format!("create polynomial from string {:?}", text))?;
    Modulus::new(poly).with_context(|| format!("modulus in {}", path.display()))
}

/// Operation file: one expression, see [`Operation::parse`].
pub fn read_operation(path: &Path) -> Result<Operation> {
    let text = read_trimmed(path)?;
    Operation::parse(&text).with_context(|| format!("parse expression {:?}", text))
}

/// Results are written space-joined on one line, no trailing newline.
pub fn write_results(path: &Path, polys: &[Gf2Poly]) -> Result<()> {
    let line = polys
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    fs::write(path, line).with_context(|| format!("write file {}", path.display()))
}
