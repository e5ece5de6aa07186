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

//! DECLARE: what is at a given point, friend or foe

use tokio_util::sync::CancellationToken;
use tracing::{debug,error,info,warn};
use uom::si::length::foot;
use gci_common::{angle::Bearing, geo::{self, GeoPoint}};
use gci_radar::{
    brevity::{Declaration, Group},
    contact::ContactCategory,
    nearest::SearchVolume
};

use crate::Controller;
use crate::errors::Result;
use crate::request::{DeclareRequest, DeclaredPoint, DeclareResponse, Response};

/// the declaration for the nearest friendly and hostile group around a point of interest, together with the group we
/// report. There is no group for Clean and Furball declarations
pub fn classify (friendly: Option<Group>, hostile: Option<Group>)->(Declaration, Option<Group>) {
    match (friendly, hostile) {
        (None, None) => (Declaration::Clean, None),
        (Some(group), None) => (Declaration::Friendly, Some( group.with_declaration( Declaration::Friendly))),
        (None, Some(group)) => (Declaration::Hostile, Some( group.with_declaration( Declaration::Hostile))),
        (Some(_), Some(_)) => (Declaration::Furball, None)
    }
}

/// bearings in requests are supposed to be magnetic. We still use what we got
pub(crate) fn check_magnetic (callsign: &str, bearing: &Bearing) {
    if !bearing.is_magnetic() {
        warn!( callsign, %bearing, "request bearing should be magnetic");
    }
}

impl Controller {
    pub async fn handle_declare (&self, request: DeclareRequest, cancel: &CancellationToken)->Result<()> {
        info!( callsign=%request.callsign, point=%request.point, altitude_ft=request.altitude.get::<foot>(), "handling DECLARE request");

        let Some((callsign, requestor)) = self.find_requestor( &request.callsign, cancel).await? else { return Ok(()) };
        let requestor_point = requestor.last_known().point;

        let bullseye = self.radar.bullseye( requestor.coalition);
        if bullseye.is_none() {
            error!( %callsign, coalition=?requestor.coalition, "no bullseye for requestor coalition, reporting BRAA from requestor");
        }

        let (origin, bearing, distance) = match request.point {
            DeclaredPoint::Braa{bearing,range} => {
                debug!( %callsign, "locating point of interest using BRAA");
                check_magnetic( &callsign, &bearing);
                (requestor_point, bearing, range)
            }
            DeclaredPoint::Bullseye{bearing,distance} => {
                debug!( %callsign, "locating point of interest using bullseye");
                check_magnetic( &callsign, &bearing);
                (bullseye.unwrap_or( requestor_point), bearing, distance)
            }
        };

        let true_bearing = bearing.to_true( self.radar.declination( &origin));
        let aoi = geo::point_at_bearing_and_distance( &origin, true_bearing.value(), distance);
        debug!( %callsign, %aoi, "resolved point of interest");

        let volume = SearchVolume::around( aoi, request.altitude, self.config.declare_altitude_margin, self.config.declare_radius,
                                           self.coalition(), ContactCategory::Aircraft);
        let hostile_volume = volume.with_coalition( self.hostile_coalition());

        let (friendly, hostile) = if bullseye.is_some() {
            (self.radar.find_nearest_group_with_bullseye( &volume, self.coalition(), cancel),
             self.radar.find_nearest_group_with_bullseye( &hostile_volume, self.coalition(), cancel))
        } else {
            // without a bullseye the only meaningful fix is the one seen from the requestor
            let from_requestor = |g| self.radar.with_braa_from( &requestor_point, g);
            (self.radar.find_nearest_group_with_braa( &volume, cancel).map( from_requestor),
             self.radar.find_nearest_group_with_braa( &hostile_volume, cancel).map( from_requestor))
        };
        if cancel.is_cancelled() {
            debug!( %callsign, "DECLARE cancelled");
            return Ok(())
        }
        debug!( %callsign, friendly=friendly.is_some(), hostile=hostile.is_some(), "queried groups near declared location");

        let (declaration, group) = classify( friendly, hostile);
        info!( %callsign, %declaration, "responding to DECLARE request");
        self.respond( Response::Declare( DeclareResponse{ callsign, declaration, group }), cancel).await
    }
}
