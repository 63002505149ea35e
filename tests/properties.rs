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

use cplx::Complex;
use proptest::prelude::*;

// Parts are kept small so that rounding errors stay well inside the
// equality tolerance.
fn arb_complex() -> impl Strategy<Value = Complex> {
    (-10.0f64..10.0, -10.0f64..10.0).prop_map(|(re, im)| Complex::new(re, im))
}

fn arb_nonzero() -> impl Strategy<Value = Complex> {
    arb_complex().prop_filter("magnitude too small", |z| z.abs() > 1e-3)
}

fn arb_any_finite() -> impl Strategy<Value = Complex> {
    (any::<f64>(), any::<f64>())
        .prop_filter("finite parts only", |(re, im)| {
            re.is_finite() && im.is_finite()
        })
        .prop_map(|(re, im)| Complex::new(re, im))
}

proptest! {
    #[test]
    fn addition_commutes(a in arb_complex(), b in arb_complex()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn multiplication_commutes(a in arb_complex(), b in arb_complex()) {
        prop_assert_eq!(a * b, b * a);
    }

    #[test]
    fn multiplication_distributes(
        a in arb_complex(),
        b in arb_complex(),
        c in arb_complex(),
    ) {
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[test]
    fn conjugate_is_an_involution(z in arb_any_finite()) {
        let twice = z.conj().conj();
        prop_assert_eq!(twice.as_ord(), z.as_ord());
    }

    #[test]
    fn self_division_is_one(z in arb_nonzero()) {
        prop_assert_eq!(z / z, Complex::ONE);
    }

    #[test]
    fn division_by_zero_fails(z in arb_any_finite()) {
        prop_assert!(z.checked_div(Complex::ZERO).is_err());
    }

    #[test]
    fn polar_round_trip(z in arb_nonzero()) {
        prop_assert_eq!(Complex::from_polar(z.abs(), z.arg()), z);
    }

    #[test]
    fn principal_sqrt_squares_back(z in arb_complex()) {
        let root = z.sqrt();
        prop_assert!(root.real() >= 0.0 || root.real().abs() < 1e-12);
        prop_assert_eq!(root * root, z);
    }

    #[test]
    fn exp_inverts_ln(z in arb_nonzero()) {
        prop_assert_eq!(z.ln().exp(), z);
    }

    #[test]
    fn canonical_form_parses_back_exactly(z in arb_any_finite()) {
        let text = z.to_string();
        let parsed = Complex::parse(&text);
        prop_assert!(parsed.is_ok(), "{} did not parse", text);
        // the sign of a zero part is not part of the notation
        prop_assert_eq!(parsed.unwrap(), z);
    }

    #[test]
    fn fixed_form_parses_back(z in arb_complex()) {
        let parsed = Complex::parse(format!("{:.12}", z)).unwrap();
        prop_assert_eq!(parsed, z);
    }
}
