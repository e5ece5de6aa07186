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

//! BOGEY DOPE: the nearest hostile group

use tokio_util::sync::CancellationToken;
use tracing::{debug,info};
use gci_radar::nearest::SearchVolume;

use crate::Controller;
use crate::errors::Result;
use crate::request::{BogeyDopeRequest, BogeyDopeResponse, Response};

impl Controller {
    pub async fn handle_bogey_dope (&self, request: BogeyDopeRequest, cancel: &CancellationToken)->Result<()> {
        info!( callsign=%request.callsign, filter=?request.filter, "handling BOGEY DOPE request");

        let Some((callsign, requestor)) = self.find_requestor( &request.callsign, cancel).await? else { return Ok(()) };
        let origin = requestor.last_known().point;

        let volume = SearchVolume::any_altitude( origin, self.config.bogey_dope_range, self.hostile_coalition(), request.filter);
        let group = self.radar.find_nearest_group_with_braa( &volume, cancel);
        if cancel.is_cancelled() {
            debug!( %callsign, "BOGEY DOPE cancelled");
            return Ok(())
        }

        match &group {
            Some(group) => info!( %callsign, %group, "responding to BOGEY DOPE request"),
            None => info!( %callsign, "no hostile groups for BOGEY DOPE request")
        }
        self.respond( Response::BogeyDope( BogeyDopeResponse{ callsign, group }), cancel).await
    }
}
