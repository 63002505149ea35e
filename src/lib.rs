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

//! # Double-precision complex numbers
//!
//! The `cplx` crate provides the [`Complex`](struct.Complex.html)
//! type, a complex number with `f64` real and imaginary parts, along
//! with a parser and a formatter for the familiar `a + bi` notation.
//!
//! This crate is free software: you can redistribute it and/or modify
//! it under the terms of the GNU Lesser General Public License as
//! published by the Free Software Foundation, either version 3 of the
//! License, or (at your option) any later version.
//!
//! # Basic use
//!
//! ```rust
//! use cplx::Complex;
//!
//! let a = Complex::new(3.0, 4.0);
//! let b: Complex = "1 - 2i".parse().unwrap();
//! assert_eq!((a * b).to_string(), "11 - 2i");
//! assert_eq!(format!("{:.1}", a / b), "-1.0 + 2.0i");
//! assert_eq!(a.abs(), 5.0);
//! ```
//!
//! Comparison with `==` is approximate: two numbers are equal when
//! both their parts differ by less than
//! [`Complex::TOLERANCE`](struct.Complex.html#associatedconstant.TOLERANCE).
//! Hashing, however, is exact; see
//! [`OrdComplex`](complex/struct.OrdComplex.html) for a wrapper whose
//! equality and hashing agree.
//!
//! Division by zero cannot produce a silent NaN. The `/` operator
//! panics, and [`Complex::checked_div`](struct.Complex.html#method.checked_div)
//! returns an error instead.
//!
//! ```rust
//! use cplx::{Complex, Error};
//!
//! fn ratio(num: &str, den: &str) -> Result<Complex, Error> {
//!     let num = Complex::parse(num)?;
//!     let den = Complex::parse(den)?;
//!     Ok(num.checked_div(den)?)
//! }
//!
//! assert_eq!(ratio("2i", "1 + i").unwrap(), (1.0, 1.0));
//! assert!(matches!(ratio("2i", "0"), Err(Error::DivisionByZero(_))));
//! assert!(matches!(ratio("2j", "1"), Err(Error::InvalidFormat(_))));
//! ```
//!
//! # Optional features
//!
//! * `serde`: implements `Serialize` and `Deserialize` for
//!   [`Complex`](struct.Complex.html) and
//!   [`OrdComplex`](complex/struct.OrdComplex.html).
//! * `num-traits`: implements `Zero`, `One`, `Inv` and `Pow<f64>`
//!   from the [`num-traits`](https://crates.io/crates/num-traits)
//!   crate.
//! * `shell`: builds the `cplx-shell` binary, a line-oriented
//!   calculator.

#![warn(missing_docs)]

#[macro_use]
mod macros;
pub mod complex;
mod misc;
pub mod ops;

pub use crate::complex::big::Complex;
use crate::complex::{DivByZeroError, ParseComplexError};
use thiserror::Error;

/// Any error returned by this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A division had a zero divisor.
    #[error(transparent)]
    DivisionByZero(#[from] DivByZeroError),
    /// A string was not a valid complex number.
    #[error(transparent)]
    InvalidFormat(#[from] ParseComplexError),
}
