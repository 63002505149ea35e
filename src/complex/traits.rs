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

use crate::complex::big::{self, Notation};
use crate::complex::ParseComplexError;
use crate::Complex;
use az::{Az, Cast};
use std::fmt::{self, Alignment, Display, Formatter, LowerExp, UpperExp};
use std::str::FromStr;

macro_rules! from_re {
    ($($Re:ty)*) => { $(
        impl From<$Re> for Complex {
            #[inline]
            fn from(re: $Re) -> Complex {
                Complex::with_real(re.az::<f64>())
            }
        }
    )* };
}

from_re! { i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 }

impl<Re, Im> From<(Re, Im)> for Complex
where
    Re: Cast<f64>,
    Im: Cast<f64>,
{
    #[inline]
    fn from((re, im): (Re, Im)) -> Complex {
        Complex::new(re.cast(), im.cast())
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> (f64, f64) {
        c.real_imag()
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_notation(self, f, Notation::General)
    }
}

impl LowerExp for Complex {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_notation(self, f, Notation::Exp { upper: false })
    }
}

impl UpperExp for Complex {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        fmt_notation(self, f, Notation::Exp { upper: true })
    }
}

impl FromStr for Complex {
    type Err = ParseComplexError;
    #[inline]
    fn from_str(src: &str) -> Result<Complex, ParseComplexError> {
        Complex::parse(src)
    }
}

fn fmt_notation(
    c: &Complex,
    fmt: &mut Formatter,
    notation: Notation,
) -> fmt::Result {
    let mut s = String::new();
    big::append_to_string(&mut s, c, fmt.precision(), notation)?;
    // s is ascii only, so just take len for character count
    let count = s.len();
    let padding = match fmt.width() {
        Some(width) if width > count => width - count,
        _ => return fmt.write_str(&s),
    };
    let (before, after) = match fmt.align() {
        Some(Alignment::Left) => (0, padding),
        Some(Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(Alignment::Right) | None => (padding, 0),
    };
    let mut fill_buf = String::with_capacity(4);
    fill_buf.push(fmt.fill());
    for _ in 0..before {
        fmt.write_str(&fill_buf)?;
    }
    fmt.write_str(&s)?;
    for _ in 0..after {
        fmt.write_str(&fill_buf)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::Complex;

    #[test]
    fn check_from() {
        assert_eq!(Complex::from(3).real_imag(), (3.0, 0.0));
        assert_eq!(Complex::from(-2.5f32).real_imag(), (-2.5, 0.0));
        assert_eq!(Complex::from(u64::MAX).real(), u64::MAX as f64);
        assert_eq!(Complex::from((1, -2.5)).real_imag(), (1.0, -2.5));
        let c: Complex = (7u8, 0.5f32).into();
        assert_eq!(c.real_imag(), (7.0, 0.5));
        let (re, im): (f64, f64) = Complex::new(4.0, -1.0).into();
        assert_eq!((re, im), (4.0, -1.0));
    }

    #[test]
    fn check_from_str() {
        let c: Complex = "2 - 3.5i".parse().unwrap();
        assert_eq!(c.real_imag(), (2.0, -3.5));
        assert!("".parse::<Complex>().is_err());
        assert!("   ".parse::<Complex>().is_err());
        assert!("abc".parse::<Complex>().is_err());
        assert!("+".parse::<Complex>().is_err());
    }

    #[test]
    fn check_error_messages() {
        let err = Complex::parse("").unwrap_err();
        assert_eq!(err.to_string(), "string has no digits");
        let err = Complex::parse("3+xi").unwrap_err();
        assert_eq!(
            err.to_string(),
            "imaginary part of string is not a valid float"
        );
        let err = Complex::parse("1 + 2i + 3").unwrap_err();
        assert_eq!(err.to_string(), "imaginary term does not end in i");
        let err = Complex::parse("+2i").unwrap_err();
        assert_eq!(
            err.to_string(),
            "string has no real digits before the separator"
        );
    }
}
