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
use num_traits::{
    identities::{One, Zero},
    ops::inv::Inv,
    pow::Pow as NumPow,
};

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Complex::ZERO
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

impl Inv for Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        self.recip()
    }
}

impl NumPow<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn pow(self, rhs: f64) -> Complex {
        self.powf(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::Complex;
    use num_traits::{Inv, One, Pow, Zero};

    #[test]
    fn check_identities() {
        assert!(Complex::zero().is_zero());
        assert!(Complex::new(1e-11, -1e-11).is_zero());
        assert!(!Complex::I.is_zero());
        assert!(Complex::one().is_one());
        assert_eq!(Complex::new(0.0, 2.0).inv(), (0.0, -0.5));
        assert_eq!(Pow::pow(Complex::I, 2.0), (-1.0, 0.0));
    }
}
