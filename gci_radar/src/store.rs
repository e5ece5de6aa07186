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

use std::{sync::Arc, time::Duration};
use chrono::{DateTime,Utc};
use dashmap::{DashMap, mapref::entry::Entry};
use tracing::{debug,info};

use crate::callsign::normalize_callsign;
use crate::contact::{Coalition, Contact, UnitId};
use crate::errors::{GciRadarError, Result};
use crate::feed::ContactUpdate;
use crate::trackfile::Trackfile;

/// the live picture: one Trackfile per reported unit.
/// The map is written by the contact feed and concurrently read by queries. Trackfiles are shared as
/// `Arc<Trackfile>` and updated copy-on-write under the entry lock, i.e. a reader that got an Arc always
/// sees a coherent Trackfile. Which units a snapshot contains is only eventually consistent
pub struct ContactStore {
    trackfiles: DashMap<UnitId,Arc<Trackfile>>,
    max_trace: usize,
}

impl ContactStore {
    pub fn new (max_trace: usize)->Self {
        ContactStore { trackfiles: DashMap::new(), max_trace }
    }

    /// record a new sample, creating the Trackfile if this is the first one for this unit
    pub fn upsert (&self, contact: Contact)->Result<()> {
        match self.trackfiles.entry( contact.unit_id) {
            Entry::Occupied(mut e) => {
                let last = e.get().last_known().time;
                if contact.time <= last { // check before we clone-on-write
                    return Err( GciRadarError::OutOfOrderSample{ unit_id: contact.unit_id, last, received: contact.time })
                }
                Arc::make_mut( e.get_mut()).update( &contact)
            }
            Entry::Vacant(e) => {
                debug!( unit_id=%contact.unit_id, name=%contact.name, "new trackfile");
                e.insert( Arc::new( Trackfile::new( &contact, self.max_trace)));
                Ok(())
            }
        }
    }

    pub fn remove (&self, unit_id: UnitId)->Option<Arc<Trackfile>> {
        self.trackfiles.remove( &unit_id).map( |(_,tf)| tf)
    }

    pub fn apply (&self, update: ContactUpdate)->Result<()> {
        match update {
            ContactUpdate::Upsert(contact) => self.upsert( contact),
            ContactUpdate::Remove(unit_id) => {
                if self.remove( unit_id).is_some() { debug!( %unit_id, "trackfile removed"); }
                Ok(())
            }
        }
    }

    pub fn get (&self, unit_id: UnitId)->Option<Arc<Trackfile>> {
        self.trackfiles.get( &unit_id).map( |e| e.value().clone())
    }

    pub fn len (&self)->usize { self.trackfiles.len() }
    pub fn is_empty (&self)->bool { self.trackfiles.is_empty() }

    /// the current Trackfiles ordered by ascending unit id.
    /// We only hold shard locks while cloning the Arcs, the returned iterator does not block writers
    pub fn snapshot_iter (&self)->std::vec::IntoIter<Arc<Trackfile>> {
        let mut list: Vec<Arc<Trackfile>> = self.trackfiles.iter().map( |e| e.value().clone()).collect();
        list.sort_by_key( |tf| tf.unit_id);
        list.into_iter()
    }

    /// resolve a spoken/typed callsign to the (lowest unit id) Trackfile of the given coalition with the same
    /// canonical name. Returns the canonical callsign together with the Trackfile
    pub fn find_by_callsign (&self, name: &str, coalition: Coalition)->Option<(String,Arc<Trackfile>)> {
        let callsign = normalize_callsign( name)?;
        self.snapshot_iter()
            .filter( |tf| tf.coalition == coalition)
            .find( |tf| normalize_callsign( &tf.name).as_deref() == Some( callsign.as_str()))
            .map( |tf| (callsign, tf))
    }

    /// drop all Trackfiles that have not been updated for more than `drop_after`. Returns the dropped unit ids
    pub fn remove_stale (&self, now: DateTime<Utc>, drop_after: Duration)->Vec<UnitId> {
        let stale: Vec<UnitId> = self.trackfiles.iter()
            .filter( |e| e.value().is_stale( now, drop_after))
            .map( |e| *e.key())
            .collect();

        // re-check under the entry lock since the feed might have updated in between
        let dropped: Vec<UnitId> = stale.into_iter()
            .filter( |id| self.trackfiles.remove_if( id, |_,tf| tf.is_stale( now, drop_after)).is_some())
            .collect();

        if !dropped.is_empty() {
            info!( n_dropped=dropped.len(), remaining=self.trackfiles.len(), "removed stale trackfiles");
        }
        dropped
    }
}
