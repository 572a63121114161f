//! gf2calc - evaluate one GF(2) polynomial expression from files
//!
//! # Examples
//!
//! ```bash
//! # x^4 + x + 1 as modulus, multiply two elements
//! echo 11001 > polynom.txt
//! echo '0101*1010' > input.txt
//! gf2calc -p polynom.txt -i input.txt -o output.txt   # output.txt: 001
//!
//! # a lone operand is factorized, no modulus file needed
//! echo 100011 > input.txt
//! gf2calc                                             # output.txt: 111 1101
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

mod files;

#[derive(Parser, Debug)]
#[command(name = "gf2calc")]
#[command(about = "GF(2) polynomial calculator over reversed-bit strings", long_about = None)]
struct Args {
    /// File with the modulus polynomial
    #[arg(short, long = "pol", env = "GF2CALC_POL", default_value = "polynom.txt")]
    pol: PathBuf,

    /// File with the expression to evaluate: a+b, a*b, a/b, a^n, a^-1, or a
    /// single polynomial to factorize
    #[arg(short, long, env = "GF2CALC_INPUT", default_value = "input.txt")]
    input: PathBuf,

    /// File to write the result(s) to
    #[arg(short, long, env = "GF2CALC_OUTPUT", default_value = "output.txt")]
    output: PathBuf,
}

fn main() {
    // initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gf2calc=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args.pol, &args.input, &args.output) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(pol: &Path, input: &Path, output: &Path) -> Result<()> {
    let operation = files::read_operation(input)
        .with_context(|| format!("read input {}", input.display()))?;
    info!("operation: {}", operation.operator());
    debug!(?operation, "parsed input");

    let modulus = if operation.needs_modulus() {
        let m = files::read_modulus(pol)
            .with_context(|| format!("read modulus {}", pol.display()))?;
        info!("modulus: {} (degree {})", m.poly(), m.degree());
        Some(m)
    } else {
        None
    };

    let results = operation
        .evaluate(modulus.as_ref())
        .context("calculating")?;
    debug!(count = results.len(), "evaluated");

    files::write_results(output, &results)?;
    info!("wrote {} polynomial(s) to {}", results.len(), output.display());

    Ok(())
}
