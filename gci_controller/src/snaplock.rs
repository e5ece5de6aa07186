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

//! SNAPLOCK: declare the contact at a BRA position from the requestor, reported as BRAA from the requestor

use tokio_util::sync::CancellationToken;
use tracing::{debug,info};
use gci_common::geo;
use gci_radar::{contact::ContactCategory, nearest::SearchVolume};

use crate::Controller;
use crate::declare::{check_magnetic, classify};
use crate::errors::Result;
use crate::request::{Response, SnaplockRequest, SnaplockResponse};

impl Controller {
    pub async fn handle_snaplock (&self, request: SnaplockRequest, cancel: &CancellationToken)->Result<()> {
        info!( callsign=%request.callsign, bra=%request.bra, "handling SNAPLOCK request");

        let Some((callsign, requestor)) = self.find_requestor( &request.callsign, cancel).await? else { return Ok(()) };
        let origin = requestor.last_known().point;

        check_magnetic( &callsign, &request.bra.bearing);
        let true_bearing = request.bra.bearing.to_true( self.radar.declination( &origin));
        let target = geo::point_at_bearing_and_distance( &origin, true_bearing.value(), request.bra.range);
        debug!( %callsign, %target, "resolved snaplock target");

        let volume = SearchVolume::around( target, request.bra.altitude, self.config.snaplock_altitude_margin, self.config.snaplock_radius,
                                           self.coalition(), ContactCategory::Aircraft);
        let friendly = self.radar.find_nearest_group_with_braa( &volume, cancel);
        let hostile = self.radar.find_nearest_group_with_braa( &volume.with_coalition( self.hostile_coalition()), cancel);
        if cancel.is_cancelled() {
            debug!( %callsign, "SNAPLOCK cancelled");
            return Ok(())
        }

        // the BRAA we report is from the requestor, not from the search point
        let friendly = friendly.map( |g| self.radar.with_braa_from( &origin, g));
        let hostile = hostile.map( |g| self.radar.with_braa_from( &origin, g));

        let (declaration, group) = classify( friendly, hostile);
        info!( %callsign, %declaration, "responding to SNAPLOCK request");
        self.respond( Response::Snaplock( SnaplockResponse{ callsign, declaration, group }), cancel).await
    }
}
