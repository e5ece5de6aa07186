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

//! serde adapters for durations in config files, which are written as human readable strings ("60s", "2min")

use std::time::Duration;
use serde::{Serialize,Deserialize,Serializer,Deserializer};
use parse_duration::parse;

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S)->Result<S::Ok, S::Error> {
    s.serialize_str( &format!("{:?}", dur))
}

pub fn deserialize_duration<'a,D> (deserializer: D)->Result<Duration,D::Error> where D: Deserializer<'a> {
    String::deserialize(deserializer).and_then( |string| {
        parse( string.as_str()).map_err( |e| serde::de::Error::custom( format!("{:?}",e)))
    })
}
