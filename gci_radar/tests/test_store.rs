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

use std::{sync::Arc, time::Duration};
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use gci_common::{config::{config_from_str, load_config}, geo::GeoPoint, uom::{feet, nautical_miles, to_feet}};
use gci_radar::{
    config::RadarConfig,
    contact::{Category, Coalition, Contact, UnitId},
    errors::GciRadarError,
    feed::{run_contact_feed, run_janitor, ContactUpdate},
    store::ContactStore
};

// run with "cargo test --test test_store -- --nocapture"

fn contact (id: u64, name: &str, coalition: Coalition, lon: f64, alt_ft: f64, time: DateTime<Utc>)->Contact {
    Contact {
        unit_id: UnitId(id), name: name.to_string(), aircraft_type: "F-16C_50".to_string(),
        coalition, category: Category::FixedWing,
        point: GeoPoint::from_lon_lat_degrees( lon, 42.0), altitude: feet(alt_ft), heading: None, time
    }
}

#[test]
fn test_upsert () {
    let store = ContactStore::new(4);
    let t0 = Utc::now();

    store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0, 20000.0, t0)).unwrap();
    store.upsert( contact( 2, "Enfield 1-1", Coalition::Blue, 42.1, 21000.0, t0)).unwrap();
    assert_eq!( store.len(), 2);

    for i in 1..10 {
        store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0 + i as f64 * 0.01, 20000.0, t0 + TimeDelta::seconds(i))).unwrap();
    }
    let tf = store.get( UnitId(1)).unwrap();
    println!("{tf}");
    assert_eq!( tf.len(), 4);
    assert_eq!( tf.last_known().time, t0 + TimeDelta::seconds(9));

    let res = store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 43.0, 20000.0, t0 + TimeDelta::seconds(5)));
    println!("out of order: {:?}", res);
    assert!( matches!( res, Err(GciRadarError::OutOfOrderSample{..})));
    assert_eq!( store.get( UnitId(1)).unwrap().last_known().time, t0 + TimeDelta::seconds(9));

    assert!( store.remove( UnitId(2)).is_some());
    assert!( store.get( UnitId(2)).is_none());
    assert_eq!( store.len(), 1);
}

#[test]
fn test_readers_keep_their_version () {
    let store = ContactStore::new(4);
    let t0 = Utc::now();
    store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0, 20000.0, t0)).unwrap();

    let before = store.get( UnitId(1)).unwrap();
    store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.5, 25000.0, t0 + TimeDelta::seconds(1))).unwrap();
    let after = store.get( UnitId(1)).unwrap();

    assert_eq!( to_feet( before.last_known().altitude), 20000.0);
    assert_eq!( before.len(), 1);
    assert_eq!( to_feet( after.last_known().altitude), 25000.0);
    assert_eq!( after.len(), 2);
}

#[test]
fn test_concurrent_snapshot () {
    // every sample has a matching longitude and altitude, readers must never see a mix of two samples
    let store = ContactStore::new(8);
    let t0 = Utc::now();
    for id in 1..=5 {
        store.upsert( contact( id, "Viper", Coalition::Red, 42.0, 42000.0, t0)).unwrap();
    }

    std::thread::scope( |s| {
        s.spawn( || {
            for i in 1..500 {
                let lon = 42.0 + i as f64 * 0.001;
                for id in 1..=5 {
                    store.upsert( contact( id, "Viper", Coalition::Red, lon, lon * 1000.0, t0 + TimeDelta::milliseconds(i))).unwrap();
                }
            }
        });

        for _ in 0..2 {
            s.spawn( || {
                for _ in 0..200 {
                    let ids: Vec<UnitId> = store.snapshot_iter().map( |tf| {
                        let frame = tf.last_known();
                        assert!( (frame.point.longitude_degrees() * 1000.0 - to_feet( frame.altitude)).abs() < 1e-3);
                        tf.unit_id
                    }).collect();
                    assert!( ids.windows(2).all( |w| w[0] < w[1]));
                }
            });
        }
    });
}

#[test]
fn test_find_by_callsign () {
    let store = ContactStore::new(4);
    let t0 = Utc::now();
    store.upsert( contact( 7, "Freedom 3-1 | Bob", Coalition::Blue, 42.0, 20000.0, t0)).unwrap();
    store.upsert( contact( 3, "Freedom 3-1", Coalition::Red, 42.0, 20000.0, t0)).unwrap();

    let (callsign, tf) = store.find_by_callsign( "FREEDOM 31", Coalition::Blue).unwrap();
    println!("resolved: {callsign} -> {tf}");
    assert_eq!( callsign, "freedom 3 1");
    assert_eq!( tf.unit_id, UnitId(7));

    let (_, tf) = store.find_by_callsign( "freedom 3 1", Coalition::Red).unwrap();
    assert_eq!( tf.unit_id, UnitId(3));

    assert!( store.find_by_callsign( "Ghost 1", Coalition::Blue).is_none());
    assert!( store.find_by_callsign( "", Coalition::Blue).is_none());
    assert!( store.find_by_callsign( "freedom 3 1", Coalition::Neutral).is_none());
}

#[test]
fn test_remove_stale () {
    let store = ContactStore::new(4);
    let now = Utc::now();
    store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0, 20000.0, now - TimeDelta::seconds(120))).unwrap();
    store.upsert( contact( 2, "Enfield 1-1", Coalition::Blue, 42.0, 20000.0, now - TimeDelta::seconds(30))).unwrap();
    store.upsert( contact( 3, "Uzi 1-1", Coalition::Blue, 42.0, 20000.0, now)).unwrap();

    let dropped = store.remove_stale( now, Duration::from_secs(60));
    assert_eq!( dropped, vec![UnitId(1)]);
    assert_eq!( store.len(), 2);
}

#[tokio::test]
async fn test_contact_feed () {
    let store = Arc::new( ContactStore::new(4));
    let (tx, rx) = mpsc::channel(8);
    let feed = tokio::spawn( run_contact_feed( store.clone(), rx, CancellationToken::new()));

    let t0 = Utc::now();
    tx.send( ContactUpdate::Upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0, 20000.0, t0))).await.unwrap();
    tx.send( ContactUpdate::Upsert( contact( 2, "Enfield 1-1", Coalition::Blue, 42.0, 20000.0, t0))).await.unwrap();
    tx.send( ContactUpdate::Upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0, 20000.0, t0))).await.unwrap(); // ignored
    tx.send( ContactUpdate::Remove( UnitId(2))).await.unwrap();
    drop(tx);

    feed.await.unwrap();
    assert_eq!( store.len(), 1);
    assert_eq!( store.get( UnitId(1)).unwrap().len(), 1);
}

#[tokio::test]
async fn test_janitor () {
    let store = Arc::new( ContactStore::new(4));
    store.upsert( contact( 1, "Freedom 3-1", Coalition::Blue, 42.0, 20000.0, Utc::now() - TimeDelta::seconds(10))).unwrap();

    let config = RadarConfig { drop_after: Duration::from_secs(1), janitor_interval: Duration::from_millis(10), ..RadarConfig::default() };
    let cancel = CancellationToken::new();
    let janitor = tokio::spawn( run_janitor( store.clone(), config, cancel.clone()));

    for _ in 0..100 {
        if store.is_empty() { break }
        tokio::time::sleep( Duration::from_millis(10)).await;
    }
    assert!( store.is_empty());

    cancel.cancel();
    janitor.await.unwrap();
}

#[test]
fn test_load_config () {
    let config: RadarConfig = load_config( "config/radar.ron").unwrap();
    println!("{config:?}");
    assert_eq!( config.max_trace, 16);
    assert_eq!( config.drop_after, Duration::from_secs(60));
    assert!( (config.mandatory_threat_distance - nautical_miles(25.0)).abs() < nautical_miles(1e-9));
}

#[test]
fn test_config_defaults () {
    let config: RadarConfig = config_from_str( "(max_trace: 8, janitor_interval: \"500ms\")").unwrap();
    assert_eq!( config.max_trace, 8);
    assert_eq!( config.janitor_interval, Duration::from_millis(500));
    assert_eq!( config.drop_after, Duration::from_secs(60));
    assert_eq!( config.sector_subdivisions, 10);
}
