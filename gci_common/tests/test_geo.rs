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

use gci_common::angle::*;
use gci_common::geo::*;
use gci_common::uom::{nautical_miles, to_nautical_miles};

// run with "cargo test -p gci_common -- --nocapture"

const EPS_DEG: f64 = 1e-6;

fn batumi ()->GeoPoint { GeoPoint::from_lon_lat_degrees( 41.6, 41.6) }
fn kutaisi ()->GeoPoint { GeoPoint::from_lon_lat_degrees( 42.48, 42.18) }

#[test]
fn test_distance () {
    let a = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let b = GeoPoint::from_lon_lat_degrees( 0.0, 1.0);

    let d = to_nautical_miles( distance( &a, &b));
    println!("one degree of latitude: {d}nm");
    assert!( (d - 60.0).abs() < 0.5);

    let d_ab = distance( &batumi(), &kutaisi());
    let d_ba = distance( &kutaisi(), &batumi());
    assert!( d_ab.value >= 0.0);
    assert!( (d_ab.value - d_ba.value).abs() < 1e-6);
    assert_eq!( distance( &a, &a).value, 0.0);
}

#[test]
fn test_bearing () {
    let origin = GeoPoint::from_lon_lat_degrees( 0.0, 0.0);
    let north = bearing( &origin, &GeoPoint::from_lon_lat_degrees( 0.0, 1.0));
    let east = bearing( &origin, &GeoPoint::from_lon_lat_degrees( 1.0, 0.0));
    let south = bearing( &origin, &GeoPoint::from_lon_lat_degrees( 0.0, -1.0));

    assert!( north.is_true());
    assert!( north.degrees() < EPS_DEG || (360.0 - north.degrees()) < EPS_DEG);
    assert!( (east.degrees() - 90.0).abs() < EPS_DEG);
    assert!( (south.degrees() - 180.0).abs() < EPS_DEG);
}

#[test]
fn test_point_at_bearing_and_distance () {
    let a = batumi();
    let b = kutaisi();
    let brg = bearing( &a, &b);
    let p = point_at_bearing_and_distance( &a, brg.value(), distance( &a, &b));
    println!("projected {p} expected {b}");

    assert!( to_nautical_miles( distance( &p, &b)) < 0.01);
}

#[test]
fn test_magnetic_roundtrip () {
    let true_bearing = bearing( &batumi(), &kutaisi());

    for decl in [-12.5, -6.0, 0.0, 6.0, 179.0] {
        let declination = Declination::from_degrees( decl);
        let mag = true_bearing.to_magnetic( declination);
        assert!( mag.is_magnetic());

        let back = mag.to_true( declination);
        assert!( back.is_true());
        let diff = angular_difference( back.value(), true_bearing.value());
        assert!( diff < 1e-9, "roundtrip with declination {decl} differs by {diff}");
    }

    // east declination: magnetic bearing is smaller than true bearing
    let m = Bearing::true_degrees( 100.0).to_magnetic( Declination::from_degrees( 6.0));
    assert!( (m.degrees() - 94.0).abs() < EPS_DEG);

    // conversions to the same reference are no-ops
    let m1 = m.to_magnetic( Declination::from_degrees( 6.0));
    assert_eq!( m, m1);
}

#[test]
fn test_sector_polygon () {
    let origin = batumi();
    let brg = Angle360::from_degrees( 90.0);
    let radius = nautical_miles( 10.0);
    let sector = sector_polygon( &origin, brg, 30.0, radius, DEFAULT_SECTOR_SUBDIVISIONS);

    // origin, subdivisions+1 arc points, origin
    assert_eq!( sector.exterior_geo_points().len(), DEFAULT_SECTOR_SUBDIVISIONS + 3);

    let inside = point_at_bearing_and_distance( &origin, Angle360::from_degrees( 95.0), nautical_miles( 5.0));
    assert!( contains_point( &sector, &inside));

    let too_far = point_at_bearing_and_distance( &origin, brg, nautical_miles( 10.5));
    assert!( !sector.contains( &too_far));

    let off_axis = point_at_bearing_and_distance( &origin, Angle360::from_degrees( 120.0), nautical_miles( 5.0));
    assert!( !sector.contains( &off_axis));

    let behind = point_at_bearing_and_distance( &origin, Angle360::from_degrees( 270.0), nautical_miles( 5.0));
    assert!( !sector.contains( &behind));

    // the origin is a vertex, i.e. on the boundary
    assert!( !sector.contains( &origin));
}

#[test]
fn test_sector_across_north () {
    let origin = batumi();
    let sector = sector_polygon( &origin, Angle360::from_degrees( 355.0), 30.0, nautical_miles( 20.0), 4);
    let p = point_at_bearing_and_distance( &origin, Angle360::from_degrees( 5.0), nautical_miles( 10.0));
    assert!( sector.contains( &p));
}

#[test]
fn test_geo_point_serde () {
    let p = GeoPoint::from_lon_lat_degrees( -122.0, 37.0);
    let s = serde_json::to_string( &p).unwrap();
    println!("serialized GeoPoint: '{s}'");
    assert_eq!( s, r#"{"lon":-122.0,"lat":37.0}"#);

    let p1: GeoPoint = serde_json::from_str( r#"{ "x": -122.0, "y": 37.0 }"#).unwrap();
    assert_eq!( p, p1);

    let p2: GeoPoint = serde_json::from_str( r#"{ "longitude": 238.0, "latitude": 37.0 }"#).unwrap();
    assert!( (p2.longitude_degrees() + 122.0).abs() < EPS_DEG);
}
