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

// Drops every whitespace character and lowercases the rest.
pub fn squash(src: &str) -> String {
    src.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

// Finds the last `sign` at or after index `from`. A sign right after
// an exponent marker belongs to the literal, as in "1e-5".
pub fn rfind_sign(bytes: &[u8], sign: u8, from: usize) -> Option<usize> {
    (from..bytes.len())
        .rev()
        .find(|&i| bytes[i] == sign && (i == 0 || bytes[i - 1] != b'e'))
}
