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
#![allow(unused)]

use std::{fmt, marker::PhantomData, cmp};
use serde::ser::{Serialize, Serializer};
use serde::de::{self, Deserialize, Deserializer};

#[inline]
pub fn normalize_180 (d: f64)->f64 {
    let x = d % 360.0;

    if x < -180.0 { 360.0 + x }
    else if x > 180.0 { x - 360.0 }
    else { x }
}

#[inline]
pub fn normalize_360 (d: f64)->f64 {
    let x = d % 360.0;
    if x < 0.0 { 360.0 + x } else { x }
}

pub trait AngleKind {
    fn normalize (v: f64)->f64;
    fn fmt_debug (value: f64, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}deg", value) }
}

/// [-180..180] (e.g. declinations and relative angles)
#[derive(Debug,Clone,Copy)]
pub struct PiKind {}
impl AngleKind for PiKind {
    fn normalize (v: f64)->f64 { normalize_180(v) }
}

/// [0..360) (e.g. bearings, headings and courses)
#[derive(Debug,Clone,Copy)]
pub struct FullCircleKind {}
impl AngleKind for FullCircleKind {
    fn normalize (v: f64)->f64 { normalize_360(v) }
}

#[derive(Copy,Clone)]
pub struct NormalizedAngle<K> where K: AngleKind {
    value: f64,
    kind: PhantomData<K>,
}

impl<K> NormalizedAngle<K> where K: AngleKind {
    #[inline]
    pub fn from_degrees (deg: f64)->Self {
        NormalizedAngle { value: K::normalize(deg), kind: PhantomData }
    }

    #[inline] pub fn degrees (&self)->f64 { self.value }
}

impl<K> fmt::Display for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}deg", self.value) }
}

impl<K> fmt::Debug for NormalizedAngle<K> where K: AngleKind {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { K::fmt_debug( self.value, f) }
}

impl<K> cmp::PartialEq for NormalizedAngle<K> where K: AngleKind {
    fn eq (&self, other: &Self)->bool { self.value == other.value }
}

impl<K> cmp::PartialOrd for NormalizedAngle<K> where K: AngleKind {
    fn partial_cmp (&self, other: &Self)->Option<cmp::Ordering> { self.value.partial_cmp( &other.value) }
}

pub type Angle180 = NormalizedAngle<PiKind>;
pub type Angle360 = NormalizedAngle<FullCircleKind>;

/// angle between magnetic and true north at some location, positive if magnetic north is east of true north
pub type Declination = Angle180;

/// the absolute difference between two directions, folded into [0..180]
pub fn angular_difference (a: Angle360, b: Angle360)->f64 {
    normalize_180( a.degrees() - b.degrees()).abs()
}

impl<K> Serialize for NormalizedAngle<K> where K: AngleKind {
    fn serialize<S> (&self, serializer: S)->Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_f64( self.value)
    }
}

// we accept any degree value and normalize it
impl<'de,K> Deserialize<'de> for NormalizedAngle<K> where K: AngleKind {
    fn deserialize<D> (deserializer: D)->Result<Self, D::Error> where D: Deserializer<'de> {
        let deg = f64::deserialize( deserializer)?;
        if deg.is_finite() {
            Ok( NormalizedAngle::from_degrees(deg) )
        } else {
            Err( de::Error::custom( format!("not a finite angle: {deg}")) )
        }
    }
}

/* #region Bearing ***********************************************************************************************/

/// a direction that is always explicitly tagged with its north reference
/// conversion between the two references requires the declination at the point the bearing originates from
#[derive(Debug,Clone,Copy,PartialEq,serde::Serialize,serde::Deserialize)]
pub enum Bearing {
    True(Angle360),
    Magnetic(Angle360)
}

impl Bearing {
    pub fn true_degrees (deg: f64)->Self { Bearing::True( Angle360::from_degrees(deg)) }
    pub fn magnetic_degrees (deg: f64)->Self { Bearing::Magnetic( Angle360::from_degrees(deg)) }

    pub fn value (&self)->Angle360 {
        match self { Bearing::True(a) | Bearing::Magnetic(a) => *a }
    }

    #[inline] pub fn degrees (&self)->f64 { self.value().degrees() }

    pub fn is_true (&self)->bool { matches!( self, Bearing::True(_)) }
    pub fn is_magnetic (&self)->bool { matches!( self, Bearing::Magnetic(_)) }

    /// no-op if this already is a magnetic bearing
    pub fn to_magnetic (&self, declination: Declination)->Bearing {
        match self {
            Bearing::True(a) => Bearing::magnetic_degrees( a.degrees() - declination.degrees()),
            Bearing::Magnetic(_) => *self
        }
    }

    /// no-op if this already is a true bearing
    pub fn to_true (&self, declination: Declination)->Bearing {
        match self {
            Bearing::Magnetic(a) => Bearing::true_degrees( a.degrees() + declination.degrees()),
            Bearing::True(_) => *self
        }
    }

    /// the opposite direction, keeping the north reference
    pub fn reciprocal (&self)->Bearing { self.rotate( 180.0) }

    pub fn rotate (&self, deg: f64)->Bearing {
        match self {
            Bearing::True(a) => Bearing::true_degrees( a.degrees() + deg),
            Bearing::Magnetic(a) => Bearing::magnetic_degrees( a.degrees() + deg)
        }
    }

    /// bearing rounded to whole degrees the way it is spoken ("360" instead of "000")
    pub fn rounded_degrees (&self)->u32 {
        let d = (self.degrees().round() as u32) % 360;
        if d == 0 { 360 } else { d }
    }
}

impl fmt::Display for Bearing {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let suffix = if self.is_magnetic() { 'M' } else { 'T' };
        write!( f, "{:03}{}", self.rounded_degrees(), suffix)
    }
}

/* #endregion Bearing */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize () {
        assert_eq!( normalize_360(-10.0), 350.0);
        assert_eq!( normalize_360(720.0), 0.0);
        assert_eq!( normalize_180(190.0), -170.0);
        assert_eq!( normalize_180(-190.0), 170.0);
    }

    #[test]
    fn test_angular_difference () {
        let a = Angle360::from_degrees(350.0);
        let b = Angle360::from_degrees(10.0);
        assert_eq!( angular_difference(a, b), 20.0);
        assert_eq!( angular_difference(b, a), 20.0);
    }

    #[test]
    fn test_bearing_display () {
        assert_eq!( Bearing::magnetic_degrees(5.2).to_string(), "005M");
        assert_eq!( Bearing::true_degrees(359.7).to_string(), "360T");
    }
}
