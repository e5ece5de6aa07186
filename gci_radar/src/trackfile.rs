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

use std::{collections::VecDeque, fmt, time::Duration};
use chrono::{DateTime,Utc};
use uom::si::f64::{Length,Time,Velocity};
use uom::si::{length::foot, time::second, velocity::knot};
use gci_common::{angle::{Angle360,Bearing}, geo::{self,GeoPoint}};

use crate::contact::{Category, Coalition, Contact, UnitId};
use crate::errors::{GciRadarError, Result};

/// kinematic state of a trackfile at one point in time
#[derive(Debug,Clone,PartialEq)]
pub struct Frame {
    pub time: DateTime<Utc>,
    pub point: GeoPoint,
    pub altitude: Length,
    pub heading: Option<Angle360>,
}

impl Frame {
    fn from_contact (contact: &Contact)->Self {
        Frame { time: contact.time, point: contact.point, altitude: contact.altitude, heading: contact.heading }
    }
}

/// the accumulated observation history of one unit.
/// Frames are strictly increasing in time and `last_known()` is always the most recent one. We keep the
/// last known frame separate from the (bounded) history so that a trackfile can never be empty
#[derive(Debug,Clone)]
pub struct Trackfile {
    pub unit_id: UnitId,
    pub name: String,
    pub aircraft_type: String,
    pub coalition: Coalition,
    pub category: Category,

    last: Frame,
    history: VecDeque<Frame>, // used as a ringbuffer, oldest first
    max_history: usize,
}

impl Trackfile {
    /// `max_trace` is the max number of frames to keep (including the last known one)
    pub fn new (contact: &Contact, max_trace: usize)->Self {
        let max_history = max_trace.saturating_sub(1);
        Trackfile {
            unit_id: contact.unit_id,
            name: contact.name.clone(),
            aircraft_type: contact.aircraft_type.clone(),
            coalition: contact.coalition,
            category: contact.category,
            last: Frame::from_contact( contact),
            history: VecDeque::with_capacity( max_history),
            max_history
        }
    }

    /// record a new sample. Samples that are not strictly newer than the last known one are rejected
    pub fn update (&mut self, contact: &Contact)->Result<()> {
        if contact.time <= self.last.time {
            return Err( GciRadarError::OutOfOrderSample{ unit_id: self.unit_id, last: self.last.time, received: contact.time })
        }

        // labels can change (e.g. slot changes)
        if self.name != contact.name { self.name = contact.name.clone(); }
        if self.aircraft_type != contact.aircraft_type { self.aircraft_type = contact.aircraft_type.clone(); }
        self.coalition = contact.coalition;
        self.category = contact.category;

        let prev = std::mem::replace( &mut self.last, Frame::from_contact( contact));
        if self.max_history > 0 {
            if self.history.len() >= self.max_history { self.history.pop_front(); }
            self.history.push_back( prev);
        }
        Ok(())
    }

    #[inline] pub fn last_known (&self)->&Frame { &self.last }

    /// the frame before the last known one, if we have any
    pub fn previous (&self)->Option<&Frame> { self.history.back() }

    /// all frames, oldest first
    pub fn frames (&self)->impl Iterator<Item=&Frame> {
        self.history.iter().chain( std::iter::once( &self.last))
    }

    pub fn len (&self)->usize { self.history.len() + 1 }

    /// true course over ground as derived from the last two frames, or the reported heading if the
    /// unit did not move (or we only have one frame)
    pub fn course (&self)->Option<Bearing> {
        if let Some(prev) = self.previous() {
            if prev.point != self.last.point {
                return Some( geo::bearing( &prev.point, &self.last.point))
            }
        }
        self.last.heading.map( |hdg| Bearing::True(hdg))
    }

    /// ground speed over the last two frames (zero if we only have one)
    pub fn speed (&self)->Velocity {
        if let Some(prev) = self.previous() {
            let dt = (self.last.time - prev.time).num_milliseconds() as f64 / 1000.0;
            if dt > 0.0 {
                let d = geo::distance( &prev.point, &self.last.point);
                return d / Time::new::<second>(dt)
            }
        }
        Velocity::new::<knot>(0.0)
    }

    /// has not been updated for more than `drop_after`
    pub fn is_stale (&self, now: DateTime<Utc>, drop_after: Duration)->bool {
        let age = now - self.last.time;
        age.num_milliseconds() > drop_after.as_millis() as i64
    }
}

impl fmt::Display for Trackfile {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "Trackfile( unit: {}, name: \"{}\", type: {}, {:?}, pos: {}, alt: {:.0}ft, n_frames: {})",
            self.unit_id, self.name, self.aircraft_type, self.coalition, self.last.point, self.last.altitude.get::<foot>(), self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use gci_common::uom::feet;
    use crate::contact::Category;

    fn contact (lon: f64, t: DateTime<Utc>)->Contact {
        Contact {
            unit_id: UnitId(1), name: "Freedom 3-1".into(), aircraft_type: "F-16C_50".into(),
            coalition: Coalition::Blue, category: Category::FixedWing,
            point: GeoPoint::from_lon_lat_degrees( lon, 42.0), altitude: feet(20000.0), heading: None, time: t
        }
    }

    #[test]
    fn test_ringbuffer () {
        let t0 = Utc::now();
        let mut tf = Trackfile::new( &contact( 42.0, t0), 3);
        for i in 1..5 {
            tf.update( &contact( 42.0 + i as f64 * 0.01, t0 + TimeDelta::seconds(i))).unwrap();
        }
        assert_eq!( tf.len(), 3);
        assert_eq!( tf.last_known().time, t0 + TimeDelta::seconds(4));

        let times: Vec<DateTime<Utc>> = tf.frames().map(|f| f.time).collect();
        assert!( times.windows(2).all( |w| w[0] < w[1]));
    }

    #[test]
    fn test_reject_out_of_order () {
        let t0 = Utc::now();
        let mut tf = Trackfile::new( &contact( 42.0, t0), 4);
        assert!( tf.update( &contact( 42.1, t0)).is_err());
        assert!( tf.update( &contact( 42.1, t0 - TimeDelta::seconds(1))).is_err());
        assert_eq!( tf.len(), 1);
        assert_eq!( tf.last_known().point, GeoPoint::from_lon_lat_degrees( 42.0, 42.0));
    }

    #[test]
    fn test_course () {
        let t0 = Utc::now();
        let mut tf = Trackfile::new( &contact( 42.0, t0), 4);
        assert!( tf.course().is_none());

        tf.update( &contact( 42.1, t0 + TimeDelta::seconds(10))).unwrap();
        let course = tf.course().unwrap();
        assert!( course.is_true());
        assert!( (course.degrees() - 90.0).abs() < 1.0); // eastbound
        assert!( tf.speed().get::<knot>() > 0.0);
    }
}
