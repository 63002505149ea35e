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

use crate::complex::big::SMALLEST_POSITIVE;
use crate::ops::Pow;
use crate::Complex;
use std::ops::{Add, Div, Mul, Neg, Sub};
use thiserror::Error;

/// The error returned when dividing by a zero [`Complex`] number.
///
/// # Examples
///
/// ```rust
/// use cplx::complex::DivByZeroError;
/// use cplx::Complex;
/// let err = Complex::ONE.checked_div(Complex::ZERO).unwrap_err();
/// assert_eq!(err, DivByZeroError);
/// assert_eq!(err.to_string(), "division by zero");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("division by zero")]
pub struct DivByZeroError;

#[inline]
fn add(lhs: &Complex, rhs: &Complex) -> Complex {
    Complex::new(lhs.real() + rhs.real(), lhs.imag() + rhs.imag())
}

#[inline]
fn sub(lhs: &Complex, rhs: &Complex) -> Complex {
    Complex::new(lhs.real() - rhs.real(), lhs.imag() - rhs.imag())
}

#[inline]
fn mul(lhs: &Complex, rhs: &Complex) -> Complex {
    let (a, b) = lhs.real_imag();
    let (c, d) = rhs.real_imag();
    Complex::new(a * c - b * d, a * d + b * c)
}

pub(crate) fn div(
    lhs: &Complex,
    rhs: &Complex,
) -> Result<Complex, DivByZeroError> {
    let (a, b) = lhs.real_imag();
    let (c, d) = rhs.real_imag();
    let denom = rhs.norm();
    if denom < SMALLEST_POSITIVE {
        return Err(DivByZeroError);
    }
    Ok(Complex::new((a * c + b * d) / denom, (b * c - a * d) / denom))
}

// The `/` operator cannot report an error, so a zero divisor is a
// panic just like integer division by zero.
#[inline]
fn div_or_panic(lhs: &Complex, rhs: &Complex) -> Complex {
    match div(lhs, rhs) {
        Ok(quotient) => quotient,
        Err(err) => panic!("{}", err),
    }
}

impl Neg for Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.real(), -self.imag())
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;
    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

arith_binary! { Complex; add; Add add }
arith_binary! { Complex; sub; Sub sub }
arith_binary! { Complex; mul; Mul mul }
arith_binary! { Complex; div_or_panic; Div div }

arith_prim! {
    Complex; add; Add add;
    i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64
}
arith_prim! {
    Complex; sub; Sub sub;
    i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64
}
arith_prim! {
    Complex; mul; Mul mul;
    i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64
}
arith_prim! {
    Complex; div_or_panic; Div div;
    i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64
}

macro_rules! pow_prim {
    ($($T:ty)*) => { $(
        impl Pow<$T> for Complex {
            type Output = Complex;
            #[inline]
            fn pow(self, rhs: $T) -> Complex {
                self.powf(f64::from(rhs))
            }
        }

        impl<'a> Pow<$T> for &'a Complex {
            type Output = Complex;
            #[inline]
            fn pow(self, rhs: $T) -> Complex {
                self.powf(f64::from(rhs))
            }
        }
    )* };
}

pow_prim! { i8 i16 i32 u8 u16 u32 f32 f64 }
