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

// $func has the signature fn(&$Big, &$Big) -> $Big
macro_rules! arith_binary {
    {
        $Big:ty;
        $func:path;
        $Imp:ident $method:ident
    } => {
        // x # y
        impl $Imp<$Big> for $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $Big) -> $Big {
                $func(&self, &rhs)
            }
        }

        // x # &y
        impl<'a> $Imp<&'a $Big> for $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: &'a $Big) -> $Big {
                $func(&self, rhs)
            }
        }

        // &x # y
        impl<'a> $Imp<$Big> for &'a $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $Big) -> $Big {
                $func(self, &rhs)
            }
        }

        // &x # &y
        impl<'a, 'b> $Imp<&'a $Big> for &'b $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: &'a $Big) -> $Big {
                $func(self, rhs)
            }
        }
    }
}

// The primitive is widened with From before $func is applied, so
// operand order is kept for non-commutative operations.
macro_rules! arith_prim {
    {
        $Big:ty;
        $func:path;
        $Imp:ident $method:ident;
        $($T:ty)*
    } => { $(
        // x # t
        impl $Imp<$T> for $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $T) -> $Big {
                $func(&self, &<$Big>::from(rhs))
            }
        }

        // &x # t
        impl<'a> $Imp<$T> for &'a $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $T) -> $Big {
                $func(self, &<$Big>::from(rhs))
            }
        }

        // t # y
        impl $Imp<$Big> for $T {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $Big) -> $Big {
                $func(&<$Big>::from(self), &rhs)
            }
        }

        // t # &y
        impl<'a> $Imp<&'a $Big> for $T {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: &'a $Big) -> $Big {
                $func(&<$Big>::from(self), rhs)
            }
        }
    )* }
}
