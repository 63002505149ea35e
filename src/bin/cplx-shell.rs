// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

//! A line-oriented calculator over complex numbers.
//!
//! Each input line is either a single number, which is analysed, or
//! two numbers separated by `;`, which are combined with every
//! arithmetic operator. `quit` or end of input stops the loop.

use anyhow::{Context, Result};
use clap::Parser;
use cplx::Complex;
use log::{info, warn};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "cplx-shell")]
#[command(about = "Evaluate complex numbers written as a+bi")]
#[command(version)]
struct Cli {
    /// Print numbers with this many digits after the decimal point
    #[arg(long)]
    precision: Option<usize>,
    /// Report unparsable numbers instead of treating them as zero
    #[arg(long)]
    strict: bool,
}

struct Printer {
    precision: Option<usize>,
}

impl Printer {
    fn complex(&self, c: Complex) -> String {
        match self.precision {
            Some(prec) => format!("{:.*}", prec, c),
            None => c.to_string(),
        }
    }

    fn real(&self, x: f64) -> String {
        match self.precision {
            Some(prec) => format!("{:.*}", prec, x),
            None => x.to_string(),
        }
    }
}

fn read_value(text: &str, strict: bool) -> Result<Complex> {
    match Complex::parse(text) {
        Ok(c) => Ok(c),
        Err(err) if strict => {
            Err(err).with_context(|| format!("cannot parse {:?}", text.trim()))
        }
        Err(err) => {
            warn!("cannot parse {:?} ({}), using 0", text.trim(), err);
            Ok(Complex::ZERO)
        }
    }
}

fn describe(z: Complex, p: &Printer) -> Vec<String> {
    vec![
        format!("z         = {}", p.complex(z)),
        format!("real      = {}", p.real(z.real())),
        format!("imaginary = {}", p.real(z.imag())),
        format!("magnitude = {}", p.real(z.abs())),
        format!("phase     = {}", p.real(z.arg())),
        format!("conjugate = {}", p.complex(z.conj())),
        format!("sqrt      = {}", p.complex(z.sqrt())),
        format!("exp       = {}", p.complex(z.exp())),
        format!("ln        = {}", p.complex(z.ln())),
    ]
}

fn combine(a: Complex, b: Complex, p: &Printer) -> Vec<String> {
    let quotient = match a.checked_div(b) {
        Ok(q) => p.complex(q),
        Err(err) => err.to_string(),
    };
    vec![
        format!("a + b  = {}", p.complex(a + b)),
        format!("a - b  = {}", p.complex(a - b)),
        format!("a * b  = {}", p.complex(a * b)),
        format!("a / b  = {}", quotient),
        format!("a == b = {}", a == b),
    ]
}

fn evaluate(line: &str, cli: &Cli) -> Result<Vec<String>> {
    let printer = Printer {
        precision: cli.precision,
    };
    match line.split_once(';') {
        Some((a, b)) => {
            let a = read_value(a, cli.strict)?;
            let b = read_value(b, cli.strict)?;
            Ok(combine(a, b, &printer))
        }
        None => Ok(describe(read_value(line, cli.strict)?, &printer)),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!(
        "starting with precision {:?}, strict {}",
        cli.precision, cli.strict
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") {
            break;
        }
        match evaluate(line, &cli) {
            Ok(lines) => {
                for l in lines {
                    writeln!(out, "{}", l)?;
                }
            }
            Err(err) => eprintln!("error: {:#}", err),
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{evaluate, read_value, Cli};
    use cplx::complex::ParseComplexError;

    fn cli(precision: Option<usize>, strict: bool) -> Cli {
        Cli { precision, strict }
    }

    #[test]
    fn check_recovery() {
        assert_eq!(read_value("3+4i", false).unwrap(), (3.0, 4.0));
        assert_eq!(read_value("nonsense", false).unwrap(), (0.0, 0.0));
        let err = read_value("nonsense", true).unwrap_err();
        assert_eq!(err.to_string(), "cannot parse \"nonsense\"");
        assert!(err.chain().any(|cause| cause.is::<ParseComplexError>()));
        let full = format!("{:#}", err);
        let expected = "cannot parse \"nonsense\": string is not a valid float";
        assert!(full.starts_with(expected), "{}", full);
    }

    #[test]
    fn check_describe() {
        let lines = evaluate("3 + 4i", &cli(None, false)).unwrap();
        assert_eq!(lines[0], "z         = 3 + 4i");
        assert_eq!(lines[3], "magnitude = 5");
        assert_eq!(lines[5], "conjugate = 3 - 4i");
        let lines = evaluate("-4", &cli(Some(2), false)).unwrap();
        assert_eq!(lines[0], "z         = -4.00");
        assert_eq!(lines[6], "sqrt      = 0.00 + 2.00i");
    }

    #[test]
    fn check_combine() {
        let lines = evaluate("1 + i; 1 - i", &cli(None, false)).unwrap();
        assert_eq!(
            lines,
            [
                "a + b  = 2",
                "a - b  = 2i",
                "a * b  = 2",
                "a / b  = i",
                "a == b = false",
            ]
        );
        let lines = evaluate("2; 0", &cli(None, false)).unwrap();
        assert_eq!(lines[3], "a / b  = division by zero");
        assert!(evaluate("2; x", &cli(None, true)).is_err());
    }
}
