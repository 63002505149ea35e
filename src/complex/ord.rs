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
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A complex number that supports exact ordering and hashing.
///
/// For ordering, the real part has precedence over the imaginary
/// part, and each part is ordered with [`f64::total_cmp`]: negative
/// zero is less than positive zero, and NaNs are ordered by sign and
/// payload outside the infinities. Two `OrdComplex` values are equal
/// only if their parts are bit-identical, so equality and hashing
/// agree.
///
/// # Examples
///
/// ```rust
/// use cplx::complex::OrdComplex;
/// use cplx::Complex;
/// use std::cmp::Ordering;
/// use std::collections::HashSet;
///
/// let one_neg0 = OrdComplex::from(Complex::new(1.0, -0.0));
/// let one_pos0 = OrdComplex::from(Complex::new(1.0, 0.0));
/// assert_eq!(one_neg0.cmp(&one_pos0), Ordering::Less);
///
/// let nan = OrdComplex::from(Complex::new(f64::NAN, 0.0));
/// assert_eq!(nan.cmp(&nan), Ordering::Equal);
///
/// // near values are distinct keys
/// let mut set = HashSet::new();
/// set.insert(*Complex::new(1.0, 2.0).as_ord());
/// set.insert(*Complex::new(1.0 + 5e-11, 2.0).as_ord());
/// set.insert(*Complex::new(1.0, 2.0).as_ord());
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[repr(transparent)]
pub struct OrdComplex {
    inner: Complex,
}

impl OrdComplex {
    /// Extracts the underlying [`Complex`].
    #[inline]
    pub fn as_complex(&self) -> &Complex {
        &self.inner
    }

    /// Converts back into the underlying [`Complex`].
    #[inline]
    pub fn into_complex(self) -> Complex {
        self.inner
    }

    #[inline]
    pub(crate) fn from_ref(c: &Complex) -> &OrdComplex {
        // OrdComplex is a transparent wrapper around Complex
        unsafe { &*(c as *const Complex as *const OrdComplex) }
    }
}

impl Hash for OrdComplex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.hash(state);
    }
}

impl PartialEq for OrdComplex {
    #[inline]
    fn eq(&self, other: &OrdComplex) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrdComplex {}

impl PartialOrd for OrdComplex {
    #[inline]
    fn partial_cmp(&self, other: &OrdComplex) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdComplex {
    #[inline]
    fn cmp(&self, other: &OrdComplex) -> Ordering {
        let (re, im) = self.inner.real_imag();
        let (other_re, other_im) = other.inner.real_imag();
        match re.total_cmp(&other_re) {
            Ordering::Equal => im.total_cmp(&other_im),
            not_equal => not_equal,
        }
    }
}

impl From<Complex> for OrdComplex {
    #[inline]
    fn from(c: Complex) -> OrdComplex {
        OrdComplex { inner: c }
    }
}

impl From<OrdComplex> for Complex {
    #[inline]
    fn from(o: OrdComplex) -> Complex {
        o.inner
    }
}

#[cfg(test)]
mod tests {
    use crate::complex::OrdComplex;
    use crate::Complex;
    use std::collections::BTreeSet;

    #[test]
    fn check_order() {
        let mut values: Vec<OrdComplex> = [
            (2.0, 0.0),
            (1.0, 5.0),
            (1.0, -5.0),
            (f64::NEG_INFINITY, 0.0),
            (-0.0, 0.0),
            (0.0, 0.0),
        ]
        .iter()
        .map(|&(re, im)| OrdComplex::from(Complex::new(re, im)))
        .collect();
        values.sort();
        let parts: Vec<(f64, f64)> =
            values.iter().map(|o| o.as_complex().real_imag()).collect();
        assert_eq!(parts[0], (f64::NEG_INFINITY, 0.0));
        assert!(parts[1].0.is_sign_negative() && parts[1].0 == 0.0);
        assert!(parts[2].0.is_sign_positive() && parts[2].0 == 0.0);
        assert_eq!(&parts[3..], &[(1.0, -5.0), (1.0, 5.0), (2.0, 0.0)]);
    }

    #[test]
    fn check_exact_eq() {
        let a = Complex::new(1.0, 2.0);
        let near = Complex::new(1.0, 2.0 + 5e-11);
        assert_eq!(a, near);
        assert_ne!(a.as_ord(), near.as_ord());
        assert_eq!(a.as_ord(), &OrdComplex::from(a));
        assert_eq!(a.as_ord().into_complex().real_imag(), (1.0, 2.0));

        let set: BTreeSet<OrdComplex> = [a, near, a, near]
            .iter()
            .map(|&c| OrdComplex::from(c))
            .collect();
        assert_eq!(set.len(), 2);
    }
}
