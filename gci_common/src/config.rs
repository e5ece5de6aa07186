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

use std::{fs::File, io::BufReader, path::Path};
use serde::de::DeserializeOwned;
use crate::errors::Result;

/// load a config struct from a RON file
/// configs are plain serde types, hence they can also be created programmatically (all GCI configs implement Default)
pub fn load_config<T,P> (path: P)->Result<T> where T: DeserializeOwned, P: AsRef<Path> {
    let file = File::open( path.as_ref())?;
    let reader = BufReader::new(file);
    Ok( ron::de::from_reader(reader)? )
}

/// parse a config struct from a RON string (mostly used for inlined configs in tests and tools)
pub fn config_from_str<T> (s: &str)->Result<T> where T: DeserializeOwned {
    Ok( ron::from_str(s)? )
}
