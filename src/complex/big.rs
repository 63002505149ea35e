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

use crate::complex::arith::{self, DivByZeroError};
use crate::complex::OrdComplex;
use crate::misc;
use log::debug;
use std::cmp;
use std::fmt::{self, Write};
use std::num::ParseFloatError;
use thiserror::Error;

/// The smallest positive `f64`, a subnormal.
///
/// Magnitudes below this are treated as zero by division and by the
/// formatter.
pub(crate) const SMALLEST_POSITIVE: f64 = 5e-324;

/**
A complex number with `f64` real and imaginary parts.

A `Complex` is an immutable value: every operation returns a new
number and leaves its operands untouched. Equality is approximate,
with both parts required to lie within
[`TOLERANCE`](#associatedconstant.TOLERANCE) of each other.

# Examples

```rust
use cplx::Complex;
let c = Complex::new(3.0, 4.0);
assert_eq!(c.abs(), 5.0);
assert_eq!(c.to_string(), "3 + 4i");
let d = c * Complex::I;
assert_eq!(d, (-4.0, 3.0));
```

Plain numbers widen to complex numbers on either side of an
operator.

```rust
use cplx::Complex;
let c = 2.0 + Complex::new(1.0, -1.0) * 3;
assert_eq!(c, Complex::new(5.0, -3.0));
```
*/
#[derive(Clone, Copy, Debug, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// Zero, `0 + 0i`.
    pub const ZERO: Complex = Complex::new(0.0, 0.0);

    /// One, `1 + 0i`.
    pub const ONE: Complex = Complex::new(1.0, 0.0);

    /// The imaginary unit, `0 + 1i`.
    pub const I: Complex = Complex::new(0.0, 1.0);

    /// Two parts compare equal when they differ by less than this.
    pub const TOLERANCE: f64 = 1e-10;

    /// Creates a complex number from its real and imaginary parts.
    ///
    /// Any `f64` is accepted, including infinities and NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// let c = Complex::new(1.5, -2.0);
    /// assert_eq!(c.real(), 1.5);
    /// assert_eq!(c.imag(), -2.0);
    /// ```
    #[inline]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// Creates a complex number with a zero imaginary part.
    #[inline]
    pub const fn with_real(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }

    /// Creates a complex number from its magnitude and phase.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// use std::f64::consts::FRAC_PI_2;
    /// let c = Complex::from_polar(2.0, FRAC_PI_2);
    /// assert_eq!(c, (0.0, 2.0));
    /// ```
    #[inline]
    pub fn from_polar(abs: f64, arg: f64) -> Complex {
        let (sin, cos) = arg.sin_cos();
        Complex::new(abs * cos, abs * sin)
    }

    /// Parses a complex number written as `a+bi`.
    ///
    /// Whitespace is ignored anywhere in the string and letters are
    /// case-insensitive. Accepted forms are a real literal (`"-2.5"`),
    /// an imaginary term (`"3i"`, `"-i"`), or both joined by `+` or
    /// `-` (`"3 + 4i"`, `"1e-3 - i"`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// assert_eq!(Complex::parse("3 - 4i").unwrap(), (3.0, -4.0));
    /// assert_eq!(Complex::parse("-I").unwrap(), (0.0, -1.0));
    /// assert!(Complex::parse("abc").is_err());
    /// ```
    pub fn parse<S: AsRef<str>>(src: S) -> Result<Complex, ParseComplexError> {
        let src = src.as_ref();
        parse(src).map_err(|err| {
            debug!("rejected complex literal {:?}: {}", src, err);
            err
        })
    }

    /// Returns the real part.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.re
    }

    /// Returns the imaginary part.
    #[inline]
    pub const fn imag(&self) -> f64 {
        self.im
    }

    /// Returns the real and imaginary parts as a tuple.
    #[inline]
    pub const fn real_imag(&self) -> (f64, f64) {
        (self.re, self.im)
    }

    /// Returns the magnitude, the Euclidean distance from the origin.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// assert_eq!(Complex::new(-6.0, 8.0).abs(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Returns the phase in the range (−π, π].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// use std::f64::consts::PI;
    /// assert_eq!(Complex::new(-1.0, 0.0).arg(), PI);
    /// ```
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Returns the squared magnitude.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Returns the complex conjugate.
    #[inline]
    pub fn conj(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Returns `true` if both parts are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Returns `true` if either part is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Returns the principal square root.
    ///
    /// The result has its phase in (−π/2, π/2].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// assert_eq!(Complex::new(-4.0, 0.0).sqrt(), (0.0, 2.0));
    /// assert_eq!(Complex::new(3.0, 4.0).sqrt(), (2.0, 1.0));
    /// ```
    #[inline]
    pub fn sqrt(self) -> Complex {
        Complex::from_polar(self.abs().sqrt(), self.arg() / 2.0)
    }

    /// Raises `self` to a real power.
    ///
    /// The magnitude is raised with [`f64::powf`], so at zero the
    /// result follows that function: a zero exponent gives one, a
    /// positive exponent gives zero and a negative exponent gives an
    /// infinite real part.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// assert_eq!(Complex::I.powf(2.0), (-1.0, 0.0));
    /// assert_eq!(Complex::I.powf(0.0), Complex::ONE);
    /// assert_eq!(Complex::ZERO.powf(0.0), Complex::ONE);
    /// ```
    #[inline]
    pub fn powf(self, exponent: f64) -> Complex {
        Complex::from_polar(self.abs().powf(exponent), self.arg() * exponent)
    }

    /// Returns *e* raised to `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// use std::f64::consts::PI;
    /// let minus_one = Complex::new(0.0, PI).exp();
    /// assert_eq!(minus_one + 1.0, Complex::ZERO);
    /// ```
    #[inline]
    pub fn exp(self) -> Complex {
        Complex::from_polar(self.re.exp(), self.im)
    }

    /// Returns the principal natural logarithm.
    ///
    /// The logarithm of zero has a real part of negative infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// use std::f64::consts::FRAC_PI_2;
    /// assert_eq!(Complex::I.ln(), (0.0, FRAC_PI_2));
    /// assert_eq!(Complex::ZERO.ln().real(), f64::NEG_INFINITY);
    /// ```
    #[inline]
    pub fn ln(self) -> Complex {
        Complex::new(self.abs().ln(), self.arg())
    }

    /// Divides by `rhs`, failing when `rhs` is zero.
    ///
    /// The divisor counts as zero when its squared magnitude is below
    /// the smallest positive `f64`. The `/` operator panics in that
    /// case instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::Complex;
    /// let a = Complex::new(1.0, 1.0);
    /// assert_eq!(a.checked_div(Complex::I).unwrap(), (1.0, -1.0));
    /// assert!(a.checked_div(Complex::ZERO).is_err());
    /// ```
    pub fn checked_div(self, rhs: Complex) -> Result<Complex, DivByZeroError> {
        arith::div(&self, &rhs).map_err(|err| {
            debug!("refused to divide {:?} by {:?}", self, rhs);
            err
        })
    }

    /// Returns `1 / self`, failing when `self` is zero.
    #[inline]
    pub fn checked_recip(self) -> Result<Complex, DivByZeroError> {
        Complex::ONE.checked_div(self)
    }

    /// Returns `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[inline]
    pub fn recip(self) -> Complex {
        Complex::ONE / self
    }

    /// Borrows `self` as an [`OrdComplex`], which compares and hashes
    /// the exact bit patterns of both parts.
    #[inline]
    pub fn as_ord(&self) -> &OrdComplex {
        OrdComplex::from_ref(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Notation {
    General,
    Exp { upper: bool },
}

fn append_part(
    s: &mut String,
    val: f64,
    prec: Option<usize>,
    notation: Notation,
) -> fmt::Result {
    match (notation, prec) {
        (Notation::General, None) => write!(s, "{}", val),
        (Notation::General, Some(prec)) => write!(s, "{:.*}", prec, val),
        (Notation::Exp { upper: false }, None) => write!(s, "{:e}", val),
        (Notation::Exp { upper: false }, Some(prec)) => {
            write!(s, "{:.*e}", prec, val)
        }
        (Notation::Exp { upper: true }, None) => write!(s, "{:E}", val),
        (Notation::Exp { upper: true }, Some(prec)) => {
            write!(s, "{:.*E}", prec, val)
        }
    }
}

#[inline]
fn is_zero(val: f64) -> bool {
    val.abs() < SMALLEST_POSITIVE
}

#[inline]
fn is_one(val: f64) -> bool {
    (val - 1.0).abs() < SMALLEST_POSITIVE
}

pub(crate) fn append_to_string(
    s: &mut String,
    c: &Complex,
    prec: Option<usize>,
    notation: Notation,
) -> fmt::Result {
    let (re, im) = c.real_imag();
    match (is_zero(re), is_zero(im)) {
        (true, true) => s.push('0'),
        (_, true) => append_part(s, re, prec, notation)?,
        (true, false) => {
            if is_one(im) {
                s.push('i');
            } else if is_one(-im) {
                s.push_str("-i");
            } else {
                append_part(s, im, prec, notation)?;
                s.push('i');
            }
        }
        (false, false) => {
            append_part(s, re, prec, notation)?;
            s.push_str(if im < 0.0 { " - " } else { " + " });
            let abs_im = im.abs();
            // a unit coefficient is left implicit: "3 + i"
            if !is_one(abs_im) {
                append_part(s, abs_im, prec, notation)?;
            }
            s.push('i');
        }
    }
    Ok(())
}

macro_rules! parse_error {
    ($kind:expr) => {
        Err(ParseComplexError { kind: $kind })
    };
}

fn parse(src: &str) -> Result<Complex, ParseComplexError> {
    let squashed = misc::squash(src);
    if squashed.is_empty() {
        parse_error!(ParseErrorKind::NoDigits)?;
    }
    if !squashed.contains('i') {
        return match squashed.parse::<f64>() {
            Ok(re) => Ok(Complex::with_real(re)),
            Err(e) => parse_error!(ParseErrorKind::InvalidFloat(e)),
        };
    }
    match squashed.as_str() {
        "i" => return Ok(Complex::I),
        "-i" => return Ok(-Complex::I),
        _ => {}
    }
    let body = match squashed.strip_suffix('i') {
        Some(body) => body,
        None => parse_error!(ParseErrorKind::NoImagUnit)?,
    };
    let bytes = body.as_bytes();
    // a leading minus is the sign of the first term, never a separator
    let plus = misc::rfind_sign(bytes, b'+', 0);
    let minus = misc::rfind_sign(bytes, b'-', 1);
    match cmp::max(plus, minus) {
        None => match body.parse::<f64>() {
            Ok(im) => Ok(Complex::new(0.0, im)),
            Err(e) => parse_error!(ParseErrorKind::InvalidImagFloat(e)),
        },
        Some(0) => parse_error!(ParseErrorKind::NoRealDigits),
        Some(split) => {
            let (real, imag) = body.split_at(split);
            let re = match real.parse::<f64>() {
                Ok(re) => re,
                Err(e) => parse_error!(ParseErrorKind::InvalidRealFloat(e))?,
            };
            let im = match imag {
                "+" => 1.0,
                "-" => -1.0,
                _ => match imag.parse::<f64>() {
                    Ok(im) => im,
                    Err(e) => {
                        parse_error!(ParseErrorKind::InvalidImagFloat(e))?
                    }
                },
            };
            Ok(Complex::new(re, im))
        }
    }
}

/**
An error which can be returned when parsing a [`Complex`] number.

See [`Complex::parse`] for the accepted notation.

# Examples

```rust
use cplx::complex::ParseComplexError;
use cplx::Complex;
// This string is not a complex number.
let s = "something completely different";
let error: ParseComplexError = match Complex::parse(s) {
    Ok(_) => unreachable!(),
    Err(error) => error,
};
println!("Parse error: {}", error);
```
*/
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct ParseComplexError {
    kind: ParseErrorKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
enum ParseErrorKind {
    #[error("string has no digits")]
    NoDigits,
    #[error("string has no real digits before the separator")]
    NoRealDigits,
    #[error("imaginary term does not end in i")]
    NoImagUnit,
    #[error("string is not a valid float")]
    InvalidFloat(#[source] ParseFloatError),
    #[error("real part of string is not a valid float")]
    InvalidRealFloat(#[source] ParseFloatError),
    #[error("imaginary part of string is not a valid float")]
    InvalidImagFloat(#[source] ParseFloatError),
}
