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

use std::time::Duration;
use serde::{Serialize,Deserialize};
use uom::si::f64::Length;
use gci_common::{datetime::{serialize_duration, deserialize_duration}, geo::DEFAULT_SECTOR_SUBDIVISIONS, uom::nautical_miles};

/// tunables of the radar picture and its queries
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    /// groups closer than this are always reported as threats
    #[serde(serialize_with="gci_common::uom::ser_length_as_nautical_miles", deserialize_with="gci_common::uom::de_length_from_nautical_miles")]
    pub mandatory_threat_distance: Length,

    /// sector searches ignore contacts within this distance of the origin (i.e. the requestor itself)
    #[serde(serialize_with="gci_common::uom::ser_length_as_nautical_miles", deserialize_with="gci_common::uom::de_length_from_nautical_miles")]
    pub sector_exclusion_radius: Length,

    pub sector_subdivisions: usize,

    /// max number of frames we keep per trackfile
    pub max_trace: usize,

    /// trackfiles that have not been updated for this long are removed
    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub drop_after: Duration,

    #[serde(serialize_with="serialize_duration", deserialize_with="deserialize_duration")]
    pub janitor_interval: Duration,
}

impl Default for RadarConfig {
    fn default ()->Self {
        RadarConfig {
            mandatory_threat_distance: nautical_miles(25.0),
            sector_exclusion_radius: nautical_miles(3.0),
            sector_subdivisions: DEFAULT_SECTOR_SUBDIVISIONS,
            max_trace: 16,
            drop_after: Duration::from_secs(60),
            janitor_interval: Duration::from_secs(5),
        }
    }
}
