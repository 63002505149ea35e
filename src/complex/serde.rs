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

use crate::complex::OrdComplex;
use crate::Complex;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt::{self, Formatter};

const FIELDS: &[&str] = &["real", "imag"];

impl Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Complex", 2)?;
        state.serialize_field("real", &self.real())?;
        state.serialize_field("imag", &self.imag())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> Result<Complex, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_struct("Complex", FIELDS, ComplexVisitor)
    }
}

struct ComplexVisitor;

impl<'de> Visitor<'de> for ComplexVisitor {
    type Value = Complex;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a complex number with real and imag parts")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Complex, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let re = seq
            .next_element::<f64>()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let im = seq
            .next_element::<f64>()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        Ok(Complex::new(re, im))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Complex, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut re = None;
        let mut im = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "real" => {
                    if re.is_some() {
                        return Err(de::Error::duplicate_field("real"));
                    }
                    re = Some(map.next_value::<f64>()?);
                }
                "imag" => {
                    if im.is_some() {
                        return Err(de::Error::duplicate_field("imag"));
                    }
                    im = Some(map.next_value::<f64>()?);
                }
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            }
        }
        let re = re.ok_or_else(|| de::Error::missing_field("real"))?;
        let im = im.ok_or_else(|| de::Error::missing_field("imag"))?;
        Ok(Complex::new(re, im))
    }
}

impl Serialize for OrdComplex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_complex().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrdComplex {
    fn deserialize<D>(deserializer: D) -> Result<OrdComplex, D::Error>
    where
        D: Deserializer<'de>,
    {
        Complex::deserialize(deserializer).map(From::from)
    }
}
