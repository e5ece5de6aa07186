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

//! normalization of spoken/typed callsigns.
//! Unit names in the telemetry feed look like "Freedom 3-1 | Bob" whereas a transcribed radio call
//! comes in as "FREEDOM 31" or "freedom three one" (the latter is resolved by the parser). Both
//! sides are mapped to the same canonical form "freedom 3 1" before they are compared

/// returns the canonical form of a callsign or None if there is nothing left to match against.
///  - everything after a '|' is discarded (pilot names)
///  - letters are lowercased
///  - every digit becomes its own token
///  - punctuation is treated as whitespace, runs of whitespace are collapsed
pub fn normalize_callsign (s: &str)->Option<String> {
    let s = match s.split_once('|') {
        Some((head,_)) => head,
        None => s
    };

    let mut tokens: Vec<String> = Vec::new();
    let mut word = String::new();

    for c in s.chars() {
        if c.is_alphabetic() {
            word.extend( c.to_lowercase());
        } else {
            if !word.is_empty() { tokens.push( std::mem::take( &mut word)); }
            if c.is_ascii_digit() { tokens.push( c.to_string()); }
            // anything else is a separator
        }
    }
    if !word.is_empty() { tokens.push( word); }

    if tokens.is_empty() { None } else { Some( tokens.join(" ")) }
}
