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

//! value types of the radio brevity vocabulary that radar queries produce: aspect, declaration,
//! BRAA and bullseye fixes, and the Group that carries them

use std::{fmt, sync::Arc};
use serde::{Serialize,Deserialize};
use uom::si::f64::Length;
use uom::si::length::{foot, nautical_mile};
use gci_common::{
    angle::{angular_difference, Bearing, Declination},
    geo::GeoPoint
};

use crate::contact::{Category, Coalition, UnitId};
use crate::trackfile::Trackfile;

/* #region Aspect ************************************************************************************************/

/// target heading relative to the line of sight from the observer
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Aspect {
    Hot,
    Flank,
    Beam,
    Drag,
    Unknown
}

impl Aspect {
    /// `bearing` is the bearing from the observer to the target, `course` the target course. The course is
    /// converted to the north reference of the bearing before both are compared
    pub fn from_bearing_and_course (bearing: Bearing, course: Option<Bearing>, declination: Declination)->Aspect {
        let Some(course) = course else { return Aspect::Unknown };
        let course = if bearing.is_magnetic() { course.to_magnetic( declination) } else { course.to_true( declination) };

        // a target flying straight at the observer has a course that is the reciprocal of the bearing
        let angle = angular_difference( course.value(), bearing.reciprocal().value());
        if angle <= 30.0 {
            Aspect::Hot
        } else if angle <= 70.0 {
            Aspect::Flank
        } else if angle <= 110.0 {
            Aspect::Beam
        } else {
            Aspect::Drag
        }
    }
}

impl fmt::Display for Aspect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = match self {
            Aspect::Hot => "hot",
            Aspect::Flank => "flank",
            Aspect::Beam => "beam",
            Aspect::Drag => "drag",
            Aspect::Unknown => "unknown"
        };
        write!( f, "{s}")
    }
}

/* #endregion Aspect */

/* #region Declaration *******************************************************************************************/

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Declaration {
    Clean,
    Friendly,
    Hostile,
    Furball
}

impl fmt::Display for Declaration {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        let s = match self {
            Declaration::Clean => "clean",
            Declaration::Friendly => "friendly",
            Declaration::Hostile => "hostile",
            Declaration::Furball => "furball"
        };
        write!( f, "{s}")
    }
}

/* #endregion Declaration */

/* #region fixes *************************************************************************************************/

/// bearing, range, altitude and aspect of a target as seen from an observer
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Braa {
    pub bearing: Bearing,
    pub range: Length,
    pub altitude: Length,
    pub aspect: Aspect,
}

impl fmt::Display for Braa {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "BRAA {}/{:.0}nm/{:.0}ft {}", self.bearing, self.range.get::<nautical_mile>(), self.altitude.get::<foot>(), self.aspect)
    }
}

/// bearing and distance of a target from a coalition bullseye
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct BullseyeFix {
    pub bearing: Bearing,
    pub distance: Length,
}

impl fmt::Display for BullseyeFix {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "bullseye {}/{:.0}nm", self.bearing, self.distance.get::<nautical_mile>())
    }
}

/// the position report of a group. There is at most one, setting a new fix replaces the previous one
#[derive(Debug,Clone,Copy,PartialEq,Default)]
pub enum Fix {
    #[default] Unset,
    Braa(Braa),
    Bullseye(BullseyeFix)
}

/* #endregion fixes */

/* #region Group *************************************************************************************************/

/// one or more trackfiles that are reported as a single contact.
/// Groups are created fresh for each query by a [`crate::providers::GroupLookup`] and owned by the caller from
/// there on. Derived fields are attached with the consuming `with_..` methods that return the updated value
#[derive(Debug,Clone)]
pub struct Group {
    members: Vec<Arc<Trackfile>>, // never empty, the first one is the lead
    fix: Fix,
    aspect: Aspect,
    is_threat: bool,
    declaration: Option<Declaration>,
}

impl Group {
    pub fn new (members: Vec<Arc<Trackfile>>)->Option<Self> {
        if members.is_empty() { return None }
        Some( Group { members, fix: Fix::Unset, aspect: Aspect::Unknown, is_threat: false, declaration: None })
    }

    pub fn single (trackfile: Arc<Trackfile>)->Self {
        Group { members: vec![trackfile], fix: Fix::Unset, aspect: Aspect::Unknown, is_threat: false, declaration: None }
    }

    pub fn members (&self)->&[Arc<Trackfile>] { &self.members }
    pub fn contacts (&self)->usize { self.members.len() }
    pub fn unit_ids (&self)->Vec<UnitId> { self.members.iter().map(|tf| tf.unit_id).collect() }

    fn lead (&self)->&Arc<Trackfile> { &self.members[0] }

    pub fn coalition (&self)->Coalition { self.lead().coalition }
    pub fn category (&self)->Category { self.lead().category }

    /// mean position of the last known member positions. This averages unit vectors, i.e. it also works for
    /// groups that straddle the antimeridian
    pub fn point (&self)->GeoPoint {
        if let [tf] = self.members.as_slice() { return tf.last_known().point }

        let (x,y,z) = self.members.iter().fold( (0.0,0.0,0.0), |(x,y,z),tf| {
            let p = &tf.last_known().point;
            let (lon,lat) = (p.longitude_degrees().to_radians(), p.latitude_degrees().to_radians());
            (x + lat.cos() * lon.cos(), y + lat.cos() * lon.sin(), z + lat.sin())
        });
        let lon = y.atan2(x).to_degrees();
        let lat = z.atan2( x.hypot(y)).to_degrees();
        GeoPoint::from_lon_lat_degrees( lon, lat)
    }

    /// altitude of the highest member
    pub fn altitude (&self)->Length {
        self.members.iter().skip(1).fold( self.lead().last_known().altitude, |max,tf| {
            let alt = tf.last_known().altitude;
            if alt > max { alt } else { max }
        })
    }

    /// course of the lead
    pub fn course (&self)->Option<Bearing> { self.lead().course() }

    pub fn fix (&self)->&Fix { &self.fix }

    pub fn braa (&self)->Option<&Braa> {
        if let Fix::Braa(braa) = &self.fix { Some(braa) } else { None }
    }

    pub fn bullseye (&self)->Option<&BullseyeFix> {
        if let Fix::Bullseye(bullseye) = &self.fix { Some(bullseye) } else { None }
    }

    pub fn aspect (&self)->Aspect { self.aspect }
    pub fn is_threat (&self)->bool { self.is_threat }
    pub fn declaration (&self)->Option<Declaration> { self.declaration }

    pub fn with_braa (mut self, braa: Braa)->Self {
        self.aspect = braa.aspect;
        self.fix = Fix::Braa(braa);
        self
    }

    /// the aspect is passed in separately since it is determined relative to the observer, not the bullseye
    pub fn with_bullseye (mut self, bullseye: BullseyeFix, aspect: Aspect)->Self {
        self.aspect = aspect;
        self.fix = Fix::Bullseye(bullseye);
        self
    }

    pub fn with_threat (mut self, is_threat: bool)->Self {
        self.is_threat = is_threat;
        self
    }

    pub fn with_declaration (mut self, declaration: Declaration)->Self {
        self.declaration = Some(declaration);
        self
    }
}

impl fmt::Display for Group {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "Group( lead: \"{}\", contacts: {}, {:?}", self.lead().name, self.members.len(), self.coalition())?;
        match &self.fix {
            Fix::Braa(braa) => write!( f, ", {braa}")?,
            Fix::Bullseye(bullseye) => write!( f, ", {bullseye}, {}", self.aspect)?,
            Fix::Unset => {}
        }
        if self.is_threat { write!( f, ", threat")?; }
        if let Some(declaration) = self.declaration { write!( f, ", {declaration}")?; }
        write!( f, ")")
    }
}

/* #endregion Group */
