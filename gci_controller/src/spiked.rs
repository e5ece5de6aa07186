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

//! SPIKED: the nearest hostile group along the bearing of a radar warning receiver spike

use tokio_util::sync::CancellationToken;
use tracing::{debug,info};
use gci_radar::{contact::ContactCategory, nearest::SearchVolume};

use crate::Controller;
use crate::declare::check_magnetic;
use crate::errors::Result;
use crate::request::{Response, SpikedRequest, SpikedResponse};

impl Controller {
    pub async fn handle_spiked (&self, request: SpikedRequest, cancel: &CancellationToken)->Result<()> {
        info!( callsign=%request.callsign, bearing=%request.bearing, "handling SPIKED request");

        let Some((callsign, requestor)) = self.find_requestor( &request.callsign, cancel).await? else { return Ok(()) };
        let origin = requestor.last_known().point;
        check_magnetic( &callsign, &request.bearing);

        let volume = SearchVolume::any_altitude( origin, self.config.spiked_range, self.hostile_coalition(), ContactCategory::Aircraft);
        let group = self.radar.find_nearest_group_in_sector( &volume, request.bearing, self.config.spiked_arc, cancel);
        if cancel.is_cancelled() {
            debug!( %callsign, "SPIKED cancelled");
            return Ok(())
        }

        let status = group.is_some();
        info!( %callsign, status, "responding to SPIKED request");
        self.respond( Response::Spiked( SpikedResponse{ callsign, bearing: request.bearing, status, group }), cancel).await
    }
}
