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

use crate::Complex;
use az::Az;
use std::hash::{Hash, Hasher};

#[inline]
fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < Complex::TOLERANCE
}

/// Two numbers are equal when both their real parts and their
/// imaginary parts differ by less than
/// [`Complex::TOLERANCE`](struct.Complex.html#associatedconstant.TOLERANCE).
///
/// This relation is not transitive, and infinite parts never compare
/// equal since their difference is NaN.
impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Complex) -> bool {
        close(self.real(), other.real()) && close(self.imag(), other.imag())
    }
}

/// Hashes the exact bit patterns of both parts.
///
/// This is *not* consistent with the tolerance-based `PartialEq`: two
/// numbers that differ by less than the tolerance compare equal but
/// usually hash differently, and so do `0.0` and `-0.0`. A `Complex`
/// used as a hash key therefore only deduplicates bit-identical
/// values. Use [`OrdComplex`](complex/struct.OrdComplex.html) when
/// equality and hashing have to agree.
impl Hash for Complex {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.real().to_bits().hash(state);
        self.imag().to_bits().hash(state);
    }
}

macro_rules! eq_re_im {
    ($Re: ty; $($Im: ty)*) => { $(
        impl PartialEq<($Re, $Im)> for Complex {
            #[inline]
            fn eq(&self, other: &($Re, $Im)) -> bool {
                close(self.real(), other.0.az::<f64>())
                    && close(self.imag(), other.1.az::<f64>())
            }
        }

        impl PartialEq<Complex> for ($Re, $Im) {
            #[inline]
            fn eq(&self, other: &Complex) -> bool {
                other.eq(self)
            }
        }
    )* };
}

macro_rules! eq_re {
    ($($Re: ty)*) => { $(
        impl PartialEq<$Re> for Complex {
            #[inline]
            fn eq(&self, other: &$Re) -> bool {
                close(self.imag(), 0.0) && close(self.real(), (*other).az::<f64>())
            }
        }

        impl PartialEq<Complex> for $Re {
            #[inline]
            fn eq(&self, other: &Complex) -> bool {
                other.eq(self)
            }
        }

        eq_re_im! { $Re; i32 i64 f32 f64 }
    )* };
}

eq_re! { i32 i64 f32 f64 }

#[cfg(test)]
mod tests {
    use crate::Complex;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash(c: &Complex) -> u64 {
        let mut hasher = DefaultHasher::new();
        c.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn check_tolerance_boundary() {
        let a = Complex::new(1.0, 2.0);
        let near = Complex::new(1.0 + 5e-11, 2.0 + 5e-11);
        let far = Complex::new(1.0 + 5e-9, 2.0 + 5e-9);
        assert_eq!(a, near);
        assert_ne!(a, far);
        // each part is checked on its own
        assert_ne!(a, Complex::new(1.0, 2.0 + 5e-9));
        assert_ne!(a, Complex::new(1.0 + 5e-9, 2.0));
        // the bound itself is outside
        assert_ne!(Complex::ZERO, Complex::new(Complex::TOLERANCE, 0.0));
    }

    #[test]
    fn check_eq_prim() {
        let c = Complex::new(2.0, 0.0);
        assert_eq!(c, 2);
        assert_eq!(2i64, c);
        assert_eq!(c, 2.0f32);
        assert_eq!(c, 2.0 + 1e-12);
        assert_ne!(Complex::new(2.0, 1e-9), 2.0);
        assert_eq!(Complex::new(1.5, -3.0), (1.5, -3));
        assert_eq!((1.5f32, -3.0), Complex::new(1.5, -3.0));
        let parts = [1i32, 2, 3];
        let found = parts.iter().position(|p| Complex::new(2.0, 0.0) == *p);
        assert_eq!(found, Some(1));
        assert!(Complex::new(3.0, 0.0).eq(&3.0f32));
    }

    #[test]
    fn check_non_finite() {
        let inf = Complex::new(f64::INFINITY, 0.0);
        assert_ne!(inf, inf);
        let nan = Complex::new(f64::NAN, 0.0);
        assert_ne!(nan, nan);
    }

    #[test]
    fn check_hash_is_exact() {
        let a = Complex::new(1.0, 2.0);
        assert_eq!(hash(&a), hash(&Complex::new(1.0, 2.0)));
        let near = Complex::new(1.0 + 5e-11, 2.0);
        assert_eq!(a, near);
        assert_ne!(hash(&a), hash(&near));
        assert_ne!(hash(&Complex::ZERO), hash(&-Complex::ZERO));
    }
}
