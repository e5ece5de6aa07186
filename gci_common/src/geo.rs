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
#![allow(unused)]

//! geometry on the earth surface as used by radar queries.
//! All functions are pure. Distances and bearings are computed on a sphere (great circle), which is
//! well within the precision of radar call-outs. Polygon containment is a planar test in lon/lat degrees,
//! which is acceptable at radar query ranges (it does not handle polygons that cross the antimeridian)

use std::fmt;
use serde::{Serialize,Deserialize};
use ::geo::{Bearing as _, Contains, Coord, Destination, Distance, Haversine, LineString, Point, Polygon};
use uom::si::f64::Length;
use uom::si::length::meter;

use crate::angle::{normalize_180, Angle360, Bearing};

/// default number of subdivisions used to approximate sector arcs
pub const DEFAULT_SECTOR_SUBDIVISIONS: usize = 10;

/* #region GeoPoint ***********************************************************************************************/

/// a wrapper for geo::Point that uses geodetic degrees (x: longitude, y: latitude)
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(from="LonLat", into="LonLat")]
pub struct GeoPoint(Point);

impl GeoPoint {
    pub fn from_lon_lat_degrees (lon: f64, lat: f64)->Self {
        GeoPoint( Point::new( normalize_180(lon), lat.clamp(-90.0, 90.0)))
    }

    #[inline] pub fn longitude_degrees (&self)->f64 { self.0.x() }
    #[inline] pub fn latitude_degrees (&self)->f64 { self.0.y() }

    pub fn point (&self)->&Point { &self.0 }
    pub fn coord (&self)->Coord { self.0.0 }
}

impl fmt::Display for GeoPoint {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "[{:.5},{:.5}]", self.0.x(), self.0.y())
    }
}

// the serialized form. We accept "lon"|"longitude"|"x" and "lat"|"latitude"|"y" so that we can read
// data written by `geo` types
#[derive(Serialize,Deserialize)]
struct LonLat {
    #[serde(alias="longitude", alias="x")] lon: f64,
    #[serde(alias="latitude", alias="y")] lat: f64,
}

impl From<LonLat> for GeoPoint {
    fn from (ll: LonLat)->Self { GeoPoint::from_lon_lat_degrees( ll.lon, ll.lat) }
}

impl From<GeoPoint> for LonLat {
    fn from (p: GeoPoint)->Self { LonLat { lon: p.longitude_degrees(), lat: p.latitude_degrees() } }
}

/* #endregion GeoPoint */

/* #region GeoPolygon **********************************************************************************************/

#[derive(Debug,Clone)]
pub struct GeoPolygon(Polygon);

impl GeoPolygon {
    /// the ring is closed automatically if the last point is not the first point
    pub fn from_exterior_geo_points (exterior: Vec<GeoPoint>)->Self {
        let coords: Vec<Coord> = exterior.iter().map(|p| p.coord()).collect();
        GeoPolygon( Polygon::new( LineString::new(coords), Vec::with_capacity(0)))
    }

    pub fn exterior_geo_points (&self)->Vec<GeoPoint> {
        self.0.exterior().points().map(|p| GeoPoint(p)).collect()
    }

    pub fn polygon (&self)->&Polygon { &self.0 }

    /// planar point-in-polygon test. Points on the boundary are not contained
    pub fn contains (&self, p: &GeoPoint)->bool { self.0.contains( &p.0) }
}

/* #endregion GeoPolygon */

/// great circle distance between two points
pub fn distance (a: &GeoPoint, b: &GeoPoint)->Length {
    let d = Haversine.distance( a.0, b.0);
    Length::new::<meter>( d.abs())
}

/// initial great circle bearing from `from` to `to`. Geodetic computations are always relative to true north
pub fn bearing (from: &GeoPoint, to: &GeoPoint)->Bearing {
    Bearing::true_degrees( Haversine.bearing( from.0, to.0))
}

/// the point reached from `origin` when travelling `distance` along the great circle with initial `true_bearing`.
/// Magnetic bearings have to be converted with [`Bearing::to_true`] first
pub fn point_at_bearing_and_distance (origin: &GeoPoint, true_bearing: Angle360, distance: Length)->GeoPoint {
    let p = Haversine.destination( origin.0, true_bearing.degrees(), distance.get::<meter>());
    GeoPoint::from_lon_lat_degrees( p.x(), p.y())
}

/// closed polygon that approximates a circular wedge around `true_bearing` with total width `arc_degrees`.
/// The arc is sampled at `subdivisions`+1 equally spaced bearings from `bearing - arc/2` to `bearing + arc/2`
/// (both inclusive), each projected to `radius`, and the ring is closed through `origin`.
/// Note the number of subdivisions does not scale with the arc width, i.e. wide sectors are coarser
/// approximations than narrow ones
pub fn sector_polygon (origin: &GeoPoint, true_bearing: Angle360, arc_degrees: f64, radius: Length, subdivisions: usize)->GeoPolygon {
    let n = subdivisions.max(1);
    let arc = arc_degrees.clamp( 0.0, 360.0);
    let start = true_bearing.degrees() - arc / 2.0;
    let step = arc / n as f64;

    let mut ring: Vec<GeoPoint> = Vec::with_capacity( n + 3);
    ring.push( *origin);
    for i in 0..=n {
        let b = Angle360::from_degrees( start + step * i as f64);
        ring.push( point_at_bearing_and_distance( origin, b, radius));
    }
    ring.push( *origin);

    GeoPolygon::from_exterior_geo_points( ring)
}

/// planar point-in-polygon test (see [`GeoPolygon::contains`])
#[inline]
pub fn contains_point (polygon: &GeoPolygon, p: &GeoPoint)->bool { polygon.contains(p) }
