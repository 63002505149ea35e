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

//! Double-precision complex numbers.
//!
//! This module provides support for complex numbers of type
//! [`Complex`](../struct.Complex.html), together with the error types
//! returned by parsing and division and the exact-ordering wrapper
//! [`OrdComplex`].

pub(crate) mod arith;
pub(crate) mod big;
mod cmp;
#[cfg(feature = "num-traits")]
mod impl_num_traits;
mod ord;
#[cfg(feature = "serde")]
mod serde;
mod traits;

pub use crate::complex::arith::DivByZeroError;
pub use crate::complex::big::ParseComplexError;
pub use crate::complex::ord::OrdComplex;

#[cfg(test)]
mod tests {
    use crate::Complex;
    use std::f64::consts::PI;

    #[test]
    fn check_constants() {
        assert_eq!(Complex::ZERO.real_imag(), (0.0, 0.0));
        assert_eq!(Complex::ONE.real_imag(), (1.0, 0.0));
        assert_eq!(Complex::I.real_imag(), (0.0, 1.0));
        assert_eq!(Complex::default().real_imag(), (0.0, 0.0));
        assert_eq!(Complex::with_real(-2.0).real_imag(), (-2.0, 0.0));
    }

    #[test]
    fn check_laws() {
        let samples = [
            Complex::new(3.0, 4.0),
            Complex::new(-1.5, 0.25),
            Complex::new(0.0, -2.0),
            Complex::new(7.0, 0.0),
            Complex::from_polar(2.0, 3.0 * PI / 4.0),
        ];
        for &a in samples.iter() {
            assert_eq!(a.conj().conj(), a);
            assert_eq!(a / a, Complex::ONE);
            assert_eq!(Complex::from_polar(a.abs(), a.arg()), a);
            assert_eq!(a.sqrt() * a.sqrt(), a);
            for &b in samples.iter() {
                assert_eq!(a + b, b + a);
                assert_eq!(a * b, b * a);
                assert_eq!((a * b) / b, a);
                for &c in samples.iter() {
                    assert_eq!(a * (b + c), a * b + a * c);
                }
            }
        }
    }

    #[test]
    fn check_send_sync() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<Complex>();
        let shared = Complex::new(1.0, 2.0);
        let handles: Vec<_> = (0..4_usize)
            .map(|k| std::thread::spawn(move || shared * k))
            .collect();
        for (k, handle) in handles.into_iter().enumerate() {
            let product = handle.join().unwrap();
            assert_eq!(product, shared * k);
        }
    }
}
