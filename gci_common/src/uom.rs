/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use uom::si::{length::{foot,nautical_mile},f64::Length};
use serde::{Deserialize, ser::Serializer, de::Deserializer};

#[inline]
pub fn feet (len: f64)->Length { Length::new::<foot>(len) }

#[inline]
pub fn nautical_miles (len: f64)->Length { Length::new::<nautical_mile>(len) }

#[inline] pub fn to_feet (len: Length)->f64 { len.get::<foot>() }
#[inline] pub fn to_nautical_miles (len: Length)->f64 { len.get::<nautical_mile>() }

//--- serialization support. Configs store lengths in the units controllers think in

pub fn ser_length_as_nautical_miles<S: Serializer> (length: &Length, s: S)->Result<S::Ok, S::Error> {
    s.serialize_f64( length.get::<nautical_mile>())
}

pub fn de_length_from_nautical_miles<'a,D> (deserializer: D)->Result<Length,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( Length::new::<nautical_mile>(v) )
}

pub fn ser_length_as_feet<S: Serializer> (length: &Length, s: S)->Result<S::Ok, S::Error> {
    s.serialize_f64( length.get::<foot>())
}

pub fn de_length_from_feet<'a,D> (deserializer: D)->Result<Length,D::Error> where D: Deserializer<'a> {
    let v: f64 = f64::deserialize(deserializer)?;
    Ok( Length::new::<foot>(v) )
}
