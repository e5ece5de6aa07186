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

//! the radar picture: a concurrently updated store of trackfiles and the spatial queries that are run against it

use std::{fmt, sync::Arc};
use gci_common::{angle::Declination, geo::GeoPoint};

pub mod errors;
pub mod contact;
pub mod trackfile;
pub mod callsign;
pub mod store;
pub mod brevity;
pub mod providers;
pub mod config;
pub mod nearest;
pub mod feed;

use contact::Coalition;
use config::RadarConfig;
use providers::{BullseyeProvider, DeclinationProvider, GroupLookup};
use store::ContactStore;
use trackfile::Trackfile;

/// the query side of the picture. The store is shared with the contact feed (writer), the collaborators are
/// shared with whoever else needs them
pub struct Radar {
    store: Arc<ContactStore>,
    groups: Arc<dyn GroupLookup>,
    declinations: Arc<dyn DeclinationProvider>,
    bullseyes: Arc<dyn BullseyeProvider>,
    config: RadarConfig,
}

impl Radar {
    pub fn new (config: RadarConfig, store: Arc<ContactStore>, groups: Arc<dyn GroupLookup>,
                declinations: Arc<dyn DeclinationProvider>, bullseyes: Arc<dyn BullseyeProvider>)->Self
    {
        Radar { store, groups, declinations, bullseyes, config }
    }

    pub fn store (&self)->&Arc<ContactStore> { &self.store }
    pub fn config (&self)->&RadarConfig { &self.config }

    #[inline] pub fn declination (&self, point: &GeoPoint)->Declination { self.declinations.declination_at( point) }
    #[inline] pub fn bullseye (&self, coalition: Coalition)->Option<GeoPoint> { self.bullseyes.bullseye( coalition) }

    /// see [`ContactStore::find_by_callsign`]
    pub fn find_callsign (&self, callsign: &str, coalition: Coalition)->Option<(String,Arc<Trackfile>)> {
        self.store.find_by_callsign( callsign, coalition)
    }
}

impl fmt::Debug for Radar {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "Radar( trackfiles: {}, {:?})", self.store.len(), self.config)
    }
}
