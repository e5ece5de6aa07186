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

//! nearest contact and nearest group searches over the contact store

use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug,error};
use uom::si::f64::Length;
use uom::si::length::{foot, nautical_mile};
use gci_common::{
    angle::Bearing,
    geo::{self, GeoPoint, GeoPolygon}
};

use crate::Radar;
use crate::brevity::{Aspect, Braa, BullseyeFix, Group};
use crate::contact::{Coalition, ContactCategory};
use crate::trackfile::Trackfile;

/* #region SearchVolume ******************************************************************************************/

/// what a search is looking for: contacts of a coalition and category within an (inclusive) altitude band
/// and closer than `radius` to `origin`
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct SearchVolume {
    pub origin: GeoPoint,
    pub min_altitude: Length,
    pub max_altitude: Length,
    pub radius: Length,
    pub coalition: Coalition,
    pub filter: ContactCategory,
}

impl SearchVolume {
    pub fn new (origin: GeoPoint, min_altitude: Length, max_altitude: Length, radius: Length, coalition: Coalition, filter: ContactCategory)->Self {
        SearchVolume { origin, min_altitude, max_altitude, radius, coalition, filter }
    }

    /// altitude band of `altitude` +- `margin`
    pub fn around (origin: GeoPoint, altitude: Length, margin: Length, radius: Length, coalition: Coalition, filter: ContactCategory)->Self {
        SearchVolume { origin, min_altitude: altitude - margin, max_altitude: altitude + margin, radius, coalition, filter }
    }

    /// no altitude restriction
    pub fn any_altitude (origin: GeoPoint, radius: Length, coalition: Coalition, filter: ContactCategory)->Self {
        let min_altitude = Length::new::<foot>( f64::NEG_INFINITY);
        let max_altitude = Length::new::<foot>( f64::INFINITY);
        SearchVolume { origin, min_altitude, max_altitude, radius, coalition, filter }
    }

    pub fn with_coalition (mut self, coalition: Coalition)->Self {
        self.coalition = coalition;
        self
    }

    /// both ends are inclusive
    #[inline]
    pub fn is_within_altitude (&self, altitude: Length)->bool {
        self.min_altitude <= altitude && altitude <= self.max_altitude
    }

    /// coalition, category and altitude match (this does not check the distance)
    pub fn is_match (&self, trackfile: &Trackfile)->bool {
        trackfile.coalition == self.coalition
            && self.filter.includes( trackfile.category)
            && self.is_within_altitude( trackfile.last_known().altitude)
    }
}

/* #endregion SearchVolume */

/* #region scans *************************************************************************************************/

/// the matching trackfile closest to the volume origin and its distance.
/// Candidates only replace the current best if they are strictly closer, i.e. of two equidistant trackfiles the
/// one that comes first in `trackfiles` wins. Returns None if nothing is closer than `volume.radius` or if the
/// search was cancelled
pub fn nearest_trackfile<I> (trackfiles: I, volume: &SearchVolume, cancel: &CancellationToken)->Option<(Arc<Trackfile>,Length)>
    where I: IntoIterator<Item=Arc<Trackfile>>
{
    let mut nearest: Option<Arc<Trackfile>> = None;
    let mut nearest_distance = volume.radius;

    for trackfile in trackfiles {
        if cancel.is_cancelled() {
            debug!("nearest trackfile search cancelled");
            return None
        }

        if volume.is_match( &trackfile) {
            let distance = geo::distance( &volume.origin, &trackfile.last_known().point);
            if distance < nearest_distance {
                debug!( origin=%volume.origin, unit_id=%trackfile.unit_id, name=%trackfile.name, aircraft=%trackfile.aircraft_type,
                        distance_nm=distance.get::<nautical_mile>(), altitude_ft=trackfile.last_known().altitude.get::<foot>(),
                        "new candidate for nearest trackfile");
                nearest = Some(trackfile);
                nearest_distance = distance;
            }
        }
    }

    match nearest {
        Some(trackfile) => {
            debug!( origin=%volume.origin, unit_id=%trackfile.unit_id, name=%trackfile.name, "found nearest trackfile");
            Some( (trackfile, nearest_distance))
        }
        None => {
            debug!( origin=%volume.origin, "no trackfiles found within search volume");
            None
        }
    }
}

/// the matching trackfile that is closest to the volume origin, strictly inside `sector` and strictly outside
/// of `exclusion_radius`. Same tie-break and cancellation semantics as [`nearest_trackfile`]
pub fn nearest_trackfile_in_sector<I> (trackfiles: I, volume: &SearchVolume, sector: &GeoPolygon, exclusion_radius: Length,
                                       cancel: &CancellationToken)->Option<(Arc<Trackfile>,Length)>
    where I: IntoIterator<Item=Arc<Trackfile>>
{
    let mut nearest: Option<(Arc<Trackfile>,Length)> = None;

    for trackfile in trackfiles {
        if cancel.is_cancelled() {
            debug!("sector search cancelled");
            return None
        }

        if volume.is_match( &trackfile) {
            let point = &trackfile.last_known().point;
            let distance = geo::distance( &volume.origin, point);
            let in_sector = sector.contains( point);
            debug!( unit_id=%trackfile.unit_id, distance_nm=distance.get::<nautical_mile>(), in_sector, "checking distance and location");

            let is_nearer = match &nearest {
                Some((_,d)) => distance < *d,
                None => true
            };
            if is_nearer && distance > exclusion_radius && in_sector {
                nearest = Some( (trackfile, distance));
            }
        }
    }

    if nearest.is_none() { debug!( origin=%volume.origin, "no trackfiles found in sector"); }
    nearest
}

/* #endregion scans */

impl Radar {
    pub fn find_nearest_trackfile (&self, volume: &SearchVolume, cancel: &CancellationToken)->Option<(Arc<Trackfile>,Length)> {
        nearest_trackfile( self.store.snapshot_iter(), volume, cancel)
    }

    /// the group of the nearest matching trackfile with a BRAA fix from the volume origin
    pub fn find_nearest_group_with_braa (&self, volume: &SearchVolume, cancel: &CancellationToken)->Option<Group> {
        let (trackfile,_) = self.find_nearest_trackfile( volume, cancel)?;
        let group = self.find_group( &trackfile)?;
        Some( self.with_braa_from( &volume.origin, group))
    }

    /// the group of the nearest matching trackfile with a fix relative to the bullseye of `bullseye_coalition`.
    /// Aspect and threat are still determined relative to the volume origin. If the coalition has no bullseye the group
    /// gets a BRAA fix from the volume origin, callers that know a better observer should use [`Radar::with_braa_from`]
    pub fn find_nearest_group_with_bullseye (&self, volume: &SearchVolume, bullseye_coalition: Coalition, cancel: &CancellationToken)->Option<Group> {
        let (trackfile,_) = self.find_nearest_trackfile( volume, cancel)?;
        let group = self.find_group( &trackfile)?;

        let Some(bullseye) = self.bullseye( bullseye_coalition) else {
            error!( coalition=?bullseye_coalition, "no bullseye for coalition, reporting BRAA instead");
            return Some( self.with_braa_from( &volume.origin, group))
        };

        let point = group.point();
        let braa = self.braa( &volume.origin, &point, group.altitude(), group.course());

        let fix = BullseyeFix {
            bearing: geo::bearing( &bullseye, &point).to_magnetic( self.declination( &bullseye)),
            distance: geo::distance( &bullseye, &point)
        };
        debug!( unit_id=%trackfile.unit_id, %fix, aspect=%braa.aspect, "determined bullseye fix");

        let is_threat = self.is_threat( braa.range);
        Some( group.with_bullseye( fix, braa.aspect).with_threat( is_threat))
    }

    /// the group of the nearest matching trackfile inside of a sector that extends `volume.radius` from the volume
    /// origin along `bearing` (total width `arc_degrees`). Contacts within the configured exclusion radius are ignored
    pub fn find_nearest_group_in_sector (&self, volume: &SearchVolume, bearing: Bearing, arc_degrees: f64, cancel: &CancellationToken)->Option<Group> {
        let declination = self.declination( &volume.origin);
        let true_bearing = bearing.to_true( declination).value();
        let sector = geo::sector_polygon( &volume.origin, true_bearing, arc_degrees, volume.radius, self.config.sector_subdivisions);
        debug!( origin=%volume.origin, %bearing, arc=arc_degrees, radius_nm=volume.radius.get::<nautical_mile>(), "searching sector");

        let (trackfile,_) = nearest_trackfile_in_sector( self.store.snapshot_iter(), volume, &sector, self.config.sector_exclusion_radius, cancel)?;
        debug!( unit_id=%trackfile.unit_id, name=%trackfile.name, "found nearest trackfile in sector");
        let group = self.find_group( &trackfile)?;

        // report the trackfile we found, not the group center which might be outside of the sector
        let braa = self.braa( &volume.origin, &trackfile.last_known().point, group.altitude(), group.course());
        let is_threat = self.is_threat( braa.range);
        Some( group.with_braa( braa).with_threat( is_threat))
    }

    /// replace the fix of `group` with a BRAA fix as seen from `origin`
    pub fn with_braa_from (&self, origin: &GeoPoint, group: Group)->Group {
        let braa = self.braa( origin, &group.point(), group.altitude(), group.course());
        debug!( %origin, %braa, "determined BRAA");
        let is_threat = self.is_threat( braa.range);
        group.with_braa( braa).with_threat( is_threat)
    }

    fn braa (&self, origin: &GeoPoint, target: &GeoPoint, altitude: Length, course: Option<Bearing>)->Braa {
        let declination = self.declination( origin);
        let bearing = geo::bearing( origin, target).to_magnetic( declination);
        let range = geo::distance( origin, target);
        let aspect = Aspect::from_bearing_and_course( bearing, course, declination);
        Braa { bearing, range, altitude, aspect }
    }

    fn find_group (&self, trackfile: &Arc<Trackfile>)->Option<Group> {
        let group = self.groups.find_group_for_aircraft( trackfile);
        if group.is_none() { debug!( unit_id=%trackfile.unit_id, "no group for trackfile"); }
        group
    }

    #[inline]
    fn is_threat (&self, range: Length)->bool { range < self.config.mandatory_threat_distance }
}
