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

use serde::{Serialize,Deserialize};
use uom::si::f64::Length;
use gci_common::uom::{feet, nautical_miles};
use gci_radar::contact::Coalition;

/// search parameters of the request handlers. Lengths are in nautical miles, altitudes in feet
#[derive(Debug,Clone,Serialize,Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// the coalition we are controlling for. Hostile is the opposing one, Neutral has none (see
    /// [`crate::Controller::hostile_coalition`])
    pub coalition: Coalition,

    // TODO reduce the declare radius to 3nm once declination is available at the point of interest
    #[serde(serialize_with="gci_common::uom::ser_length_as_nautical_miles", deserialize_with="gci_common::uom::de_length_from_nautical_miles")]
    pub declare_radius: Length,
    #[serde(serialize_with="gci_common::uom::ser_length_as_feet", deserialize_with="gci_common::uom::de_length_from_feet")]
    pub declare_altitude_margin: Length,

    #[serde(serialize_with="gci_common::uom::ser_length_as_nautical_miles", deserialize_with="gci_common::uom::de_length_from_nautical_miles")]
    pub snaplock_radius: Length,
    #[serde(serialize_with="gci_common::uom::ser_length_as_feet", deserialize_with="gci_common::uom::de_length_from_feet")]
    pub snaplock_altitude_margin: Length,

    #[serde(serialize_with="gci_common::uom::ser_length_as_nautical_miles", deserialize_with="gci_common::uom::de_length_from_nautical_miles")]
    pub bogey_dope_range: Length,

    /// total width in degrees
    pub spiked_arc: f64,
    #[serde(serialize_with="gci_common::uom::ser_length_as_nautical_miles", deserialize_with="gci_common::uom::de_length_from_nautical_miles")]
    pub spiked_range: Length,

    pub request_queue_size: usize,
    pub response_queue_size: usize,
}

impl Default for ControllerConfig {
    fn default ()->Self {
        ControllerConfig {
            coalition: Coalition::Blue,
            declare_radius: nautical_miles(7.0),
            declare_altitude_margin: feet(5000.0),
            snaplock_radius: nautical_miles(7.0),
            snaplock_altitude_margin: feet(5000.0),
            bogey_dope_range: nautical_miles(300.0),
            spiked_arc: 30.0,
            spiked_range: nautical_miles(120.0),
            request_queue_size: 32,
            response_queue_size: 32,
        }
    }
}
