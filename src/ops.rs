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

//! Operations on numbers that have no trait in `std::ops`.
//!
//! See the documentation for each trait method to see a usage
//! example.

/// The power operation.
///
/// # Examples
///
/// ```rust
/// use cplx::ops::Pow;
/// struct U(u32);
/// impl Pow<u16> for U {
///     type Output = u32;
///     fn pow(self, rhs: u16) -> u32 {
///         self.0.pow(rhs as u32)
///     }
/// }
/// let u = U(5);
/// assert_eq!(u.pow(2_u16), 25);
/// ```
pub trait Pow<Rhs> {
    /// The resulting type after the power operation.
    type Output;
    /// Performs the power operation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cplx::ops::Pow;
    /// use cplx::Complex;
    /// let base = Complex::new(1.0, 1.0);
    /// let ans = base.pow(2);
    /// assert_eq!(ans, (0.0, 2.0));
    /// ```
    fn pow(self, rhs: Rhs) -> Self::Output;
}
