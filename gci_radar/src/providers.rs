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

//! interfaces to the collaborators the radar depends on, plus simple implementations of them

use std::{collections::HashMap, sync::Arc};
use serde::{Serialize,Deserialize};
use gci_common::{angle::Declination, geo::GeoPoint};

use crate::brevity::Group;
use crate::contact::Coalition;
use crate::trackfile::Trackfile;

/// clusters trackfiles into groups. Has to return a new Group value for each call
pub trait GroupLookup: Send + Sync {
    fn find_group_for_aircraft (&self, trackfile: &Arc<Trackfile>)->Option<Group>;
}

/// magnetic declination at a given location
pub trait DeclinationProvider: Send + Sync {
    fn declination_at (&self, point: &GeoPoint)->Declination;
}

/// the bullseye reference point of a coalition, if it has one
pub trait BullseyeProvider: Send + Sync {
    fn bullseye (&self, coalition: Coalition)->Option<GeoPoint>;
}

/// every trackfile is reported as its own group
#[derive(Debug,Default,Clone,Copy)]
pub struct SingleShipGroups;

impl GroupLookup for SingleShipGroups {
    fn find_group_for_aircraft (&self, trackfile: &Arc<Trackfile>)->Option<Group> {
        Some( Group::single( trackfile.clone()))
    }
}

/// the same declination everywhere, which is good enough for small theaters
#[derive(Debug,Clone,Copy)]
pub struct FixedDeclination(pub Declination);

impl FixedDeclination {
    pub fn from_degrees (deg: f64)->Self { FixedDeclination( Declination::from_degrees(deg)) }
}

impl DeclinationProvider for FixedDeclination {
    fn declination_at (&self, _point: &GeoPoint)->Declination { self.0 }
}

/// statically configured bullseyes, e.g. read from the mission config
#[derive(Debug,Clone,Default,Serialize,Deserialize)]
pub struct FixedBullseyes {
    pub bullseyes: HashMap<Coalition,GeoPoint>
}

impl FixedBullseyes {
    pub fn new ()->Self { FixedBullseyes::default() }

    pub fn with (mut self, coalition: Coalition, point: GeoPoint)->Self {
        self.bullseyes.insert( coalition, point);
        self
    }
}

impl BullseyeProvider for FixedBullseyes {
    fn bullseye (&self, coalition: Coalition)->Option<GeoPoint> {
        self.bullseyes.get( &coalition).copied()
    }
}
