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

//! typed requests as they come from the parser and the responses we hand to the voice side

use std::fmt;
use uom::si::f64::Length;
use uom::si::length::{foot, nautical_mile};
use gci_common::angle::Bearing;
use gci_radar::{
    brevity::{Declaration, Group},
    contact::ContactCategory
};

/* #region requests **********************************************************************************************/

#[derive(Debug,Clone)]
pub enum Request {
    Declare(DeclareRequest),
    Snaplock(SnaplockRequest),
    BogeyDope(BogeyDopeRequest),
    Spiked(SpikedRequest)
}

impl Request {
    pub fn callsign (&self)->&str {
        match self {
            Request::Declare(r) => &r.callsign,
            Request::Snaplock(r) => &r.callsign,
            Request::BogeyDope(r) => &r.callsign,
            Request::Spiked(r) => &r.callsign
        }
    }
}

/// where the point of interest of a DECLARE is
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum DeclaredPoint {
    /// relative to the requestor
    Braa { bearing: Bearing, range: Length },
    /// relative to the bullseye of the requestor's coalition
    Bullseye { bearing: Bearing, distance: Length }
}

impl fmt::Display for DeclaredPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            DeclaredPoint::Braa{bearing,range} => write!( f, "BRAA {}/{:.0}nm", bearing, range.get::<nautical_mile>()),
            DeclaredPoint::Bullseye{bearing,distance} => write!( f, "bullseye {}/{:.0}nm", bearing, distance.get::<nautical_mile>())
        }
    }
}

#[derive(Debug,Clone)]
pub struct DeclareRequest {
    pub callsign: String,
    pub point: DeclaredPoint,
    pub altitude: Length,
}

/// bearing, range and altitude of a point relative to the requestor
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Bra {
    pub bearing: Bearing,
    pub range: Length,
    pub altitude: Length,
}

impl fmt::Display for Bra {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "{}/{:.0}nm/{:.0}ft", self.bearing, self.range.get::<nautical_mile>(), self.altitude.get::<foot>())
    }
}

#[derive(Debug,Clone)]
pub struct SnaplockRequest {
    pub callsign: String,
    pub bra: Bra,
}

#[derive(Debug,Clone)]
pub struct BogeyDopeRequest {
    pub callsign: String,
    pub filter: ContactCategory,
}

#[derive(Debug,Clone)]
pub struct SpikedRequest {
    pub callsign: String,
    pub bearing: Bearing,
}

/* #endregion requests */

/* #region responses *********************************************************************************************/

#[derive(Debug,Clone)]
pub enum Response {
    Declare(DeclareResponse),
    NegativeRadarContact(NegativeRadarContactResponse),
    Snaplock(SnaplockResponse),
    BogeyDope(BogeyDopeResponse),
    Spiked(SpikedResponse)
}

impl Response {
    pub fn callsign (&self)->&str {
        match self {
            Response::Declare(r) => &r.callsign,
            Response::NegativeRadarContact(r) => &r.callsign,
            Response::Snaplock(r) => &r.callsign,
            Response::BogeyDope(r) => &r.callsign,
            Response::Spiked(r) => &r.callsign
        }
    }
}

/// `group` is only set for Friendly and Hostile declarations
#[derive(Debug,Clone)]
pub struct DeclareResponse {
    pub callsign: String,
    pub declaration: Declaration,
    pub group: Option<Group>,
}

/// the requestor could not be found. Carries the callsign as it was received
#[derive(Debug,Clone)]
pub struct NegativeRadarContactResponse {
    pub callsign: String,
}

#[derive(Debug,Clone)]
pub struct SnaplockResponse {
    pub callsign: String,
    pub declaration: Declaration,
    pub group: Option<Group>,
}

#[derive(Debug,Clone)]
pub struct BogeyDopeResponse {
    pub callsign: String,
    pub group: Option<Group>,
}

#[derive(Debug,Clone)]
pub struct SpikedResponse {
    pub callsign: String,
    pub bearing: Bearing,
    pub status: bool, // true if we found a hostile group in the spike sector
    pub group: Option<Group>,
}

/* #endregion responses */
