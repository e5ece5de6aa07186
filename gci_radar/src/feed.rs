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

//! async tasks that keep the contact store current: applying updates from the telemetry source and
//! periodically dropping stale trackfiles

use std::sync::Arc;
use chrono::Utc;
use serde::{Serialize,Deserialize};
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug,info,warn};

use crate::config::RadarConfig;
use crate::contact::{Contact, UnitId};
use crate::store::ContactStore;

/// what the telemetry source sends us
#[derive(Debug,Clone,Serialize,Deserialize)]
pub enum ContactUpdate {
    Upsert(Contact),
    Remove(UnitId)
}

/// apply updates until the sender side is dropped or we get cancelled.
/// Rejected samples (e.g. out of order) are logged and otherwise ignored
pub async fn run_contact_feed (store: Arc<ContactStore>, mut updates: mpsc::Receiver<ContactUpdate>, cancel: CancellationToken) {
    info!("contact feed started");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            update = updates.recv() => {
                match update {
                    Some(update) => {
                        if let Err(e) = store.apply( update) {
                            warn!("rejected contact update: {e}");
                        }
                    }
                    None => break
                }
            }
        }
    }
    info!("contact feed terminated");
}

/// periodically remove stale trackfiles from the store
pub async fn run_janitor (store: Arc<ContactStore>, config: RadarConfig, cancel: CancellationToken) {
    let drop_after = config.drop_after;
    let mut ticker = interval( config.janitor_interval);
    ticker.set_missed_tick_behavior( MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {
                let dropped = store.remove_stale( Utc::now(), drop_after);
                if !dropped.is_empty() { debug!( ?dropped, "dropped trackfiles"); }
            }
        }
    }
    info!("janitor terminated");
}
