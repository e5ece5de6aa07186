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

use std::fmt;
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use uom::si::f64::Length;
use uom::si::length::foot;
use gci_common::{angle::Angle360, geo::GeoPoint};

/// unique identifier of a unit reported by the telemetry source
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord,Serialize,Deserialize)]
pub struct UnitId(pub u64);

impl fmt::Display for UnitId {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Coalition {
    Red,
    Blue,
    Neutral
}

impl Coalition {
    /// the coalition that is considered hostile from our point of view. Neutrals have no opponent
    pub fn opposing (&self)->Coalition {
        match self {
            Coalition::Red => Coalition::Blue,
            Coalition::Blue => Coalition::Red,
            Coalition::Neutral => Coalition::Neutral
        }
    }
}

/// what kind of unit a contact is
#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub enum Category {
    FixedWing,
    RotaryWing,
    Ground,
    Sea,
    Other
}

/// category filter for searches
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum ContactCategory {
    Aircraft, // fixed and rotary wing
    FixedWing,
    RotaryWing,
    Ground,
    Sea,
    Any
}

impl ContactCategory {
    pub fn includes (&self, category: Category)->bool {
        match self {
            ContactCategory::Aircraft => matches!( category, Category::FixedWing | Category::RotaryWing),
            ContactCategory::FixedWing => category == Category::FixedWing,
            ContactCategory::RotaryWing => category == Category::RotaryWing,
            ContactCategory::Ground => category == Category::Ground,
            ContactCategory::Sea => category == Category::Sea,
            ContactCategory::Any => true
        }
    }
}

/// one telemetry sample of a unit as delivered by the ingestion feed
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct Contact {
    pub unit_id: UnitId,
    pub name: String,           // pilot/unit name, this is what callsigns are matched against
    pub aircraft_type: String,
    pub coalition: Coalition,
    pub category: Category,
    pub point: GeoPoint,
    #[serde(serialize_with="gci_common::uom::ser_length_as_feet", deserialize_with="gci_common::uom::de_length_from_feet")]
    pub altitude: Length,
    pub heading: Option<Angle360>,
    pub time: DateTime<Utc>,
}

impl fmt::Display for Contact {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "Contact( unit: {}, name: \"{}\", type: {}, {:?}, pos: {}, alt: {:.0}ft", 
            self.unit_id, self.name, self.aircraft_type, self.coalition, self.point, self.altitude.get::<foot>())?;
        if let Some(hdg) = self.heading { write!( f, ", hdg: {:.0}", hdg.degrees())?; }
        write!( f, ", time: {})", self.time)
    }
}
