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

//! the request side of the GCI: resolves requestors, runs radar queries and turns the results into
//! brevity responses that are sent to the voice/transport side

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug,error,info,warn};
use gci_radar::{Radar, contact::Coalition, trackfile::Trackfile};

pub mod errors;
pub mod config;
pub mod request;
pub mod declare;
pub mod snaplock;
pub mod bogey_dope;
pub mod spiked;

use config::ControllerConfig;
use errors::{GciControllerError, Result};
use request::{NegativeRadarContactResponse, Request, Response};

/// bounded request channel as configured
pub fn request_channel (config: &ControllerConfig)->(mpsc::Sender<Request>, mpsc::Receiver<Request>) {
    mpsc::channel( config.request_queue_size.max(1))
}

/// bounded response channel as configured. This is where slow consumers push back on request handling
pub fn response_channel (config: &ControllerConfig)->(mpsc::Sender<Response>, mpsc::Receiver<Response>) {
    mpsc::channel( config.response_queue_size.max(1))
}

pub struct Controller {
    radar: Arc<Radar>,
    config: ControllerConfig,
    out: mpsc::Sender<Response>,
}

impl Controller {
    pub fn new (radar: Arc<Radar>, config: ControllerConfig, out: mpsc::Sender<Response>)->Self {
        if config.coalition == Coalition::Neutral {
            warn!("controller for neutral coalition, friendly and hostile searches will match the same contacts");
        }
        Controller { radar, config, out }
    }

    pub fn radar (&self)->&Arc<Radar> { &self.radar }
    pub fn config (&self)->&ControllerConfig { &self.config }

    #[inline] pub fn coalition (&self)->Coalition { self.config.coalition }
    /// Neutral has no opponent, i.e. a neutral controller searches neutrals as both friendly and hostile. A lone
    /// neutral contact is then declared a furball
    #[inline] pub fn hostile_coalition (&self)->Coalition { self.config.coalition.opposing() }

    /// handle incoming requests, each one in its own task, until the request channel is closed or we get cancelled.
    /// Cancellation is passed on to the request handlers, which then do not respond
    pub async fn run (self: Arc<Self>, mut requests: mpsc::Receiver<Request>, cancel: CancellationToken) {
        info!( coalition=?self.config.coalition, "controller started");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                request = requests.recv() => {
                    match request {
                        Some(request) => {
                            let controller = self.clone();
                            let cancel = cancel.child_token();
                            tokio::spawn( async move {
                                if let Err(e) = controller.handle( request, &cancel).await {
                                    error!("request handling failed: {e}");
                                }
                            });
                        }
                        None => break
                    }
                }
            }
        }
        info!("controller terminated");
    }

    pub async fn handle (&self, request: Request, cancel: &CancellationToken)->Result<()> {
        match request {
            Request::Declare(r) => self.handle_declare( r, cancel).await,
            Request::Snaplock(r) => self.handle_snaplock( r, cancel).await,
            Request::BogeyDope(r) => self.handle_bogey_dope( r, cancel).await,
            Request::Spiked(r) => self.handle_spiked( r, cancel).await,
        }
    }

    /// resolve the requestor among our own coalition. If there is none we send a negative radar contact response
    /// with the callsign as received, and return None
    async fn find_requestor (&self, callsign: &str, cancel: &CancellationToken)->Result<Option<(String,Arc<Trackfile>)>> {
        match self.radar.find_callsign( callsign, self.config.coalition) {
            Some(res) => Ok(Some(res)),
            None => {
                info!( callsign, "no trackfile found for requestor");
                let response = Response::NegativeRadarContact( NegativeRadarContactResponse{ callsign: callsign.to_string() });
                self.respond( response, cancel).await?;
                Ok(None)
            }
        }
    }

    /// send a response unless the request got cancelled. This blocks if the response channel is full
    async fn respond (&self, response: Response, cancel: &CancellationToken)->Result<()> {
        let callsign = response.callsign().to_string();
        if cancel.is_cancelled() {
            debug!( %callsign, "request cancelled, not responding");
            return Ok(())
        }

        tokio::select! {
            _ = cancel.cancelled() => {
                debug!( %callsign, "request cancelled while waiting to respond");
                Ok(())
            }
            res = self.out.send( response) => res.map_err( |_| GciControllerError::ResponseChannelClosed)
        }
    }
}
