//! Submission flow: one outbound POST per submit, outcome polled each frame

use super::App;
use crate::api::ShortenError;
use crate::types::{Action, RequestState, ShortUrlData};
use eframe::egui;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Result of one submission, tagged with its sequence number. Written by the
/// background task, taken by the UI thread on the next frame.
pub struct SubmitOutcome {
    pub seq: u64,
    pub result: Result<ShortUrlData, ShortenError>,
}

impl App {
    /// Kick off a shorten request for the current form contents. Any
    /// in-flight call is cancelled first; its late outcome would be
    /// rejected by the sequence check anyway.
    pub fn submit(&mut self, ctx: &egui::Context) {
        if !self.form.is_valid() || self.request_state.is_requesting() {
            return;
        }

        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        self.request_seq += 1;
        let seq = self.request_seq;
        let prev = std::mem::replace(&mut self.request_state, RequestState::Idle);
        self.request_state = prev.apply(Action::Request { seq });

        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        let request = self.form.to_request();
        let api = self.api.clone();
        let outcome = self.submit_outcome.clone();
        let ctx = ctx.clone();

        info!(seq, url = %request.url, alias = ?request.custom_alias, "Submitting shorten request");

        self.runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(seq, "Submission superseded, dropping");
                }
                result = api.shorten(&request) => {
                    *outcome.lock().unwrap() = Some(SubmitOutcome { seq, result });
                    ctx.request_repaint();
                }
            }
        });
    }

    /// Drain the outcome slot and fold it into the request state. Runs once
    /// per frame from the update loop.
    pub fn poll_submit_outcome(&mut self) {
        let Some(SubmitOutcome { seq, result }) = self.submit_outcome.lock().unwrap().take()
        else {
            return;
        };

        let action = match result {
            Ok(data) => {
                info!(seq, alias = %data.alias, "Shorten request succeeded");
                Action::Success { seq, data }
            }
            Err(e) => {
                warn!(seq, error = %e, "Shorten request failed");
                Action::Error {
                    seq,
                    message: e.display_message(),
                }
            }
        };

        let prev = std::mem::replace(&mut self.request_state, RequestState::Idle);
        let next = prev.clone().apply(action);
        let applied = next != prev;
        self.request_state = next;

        // Clear the form only on an applied success; errors leave the
        // input intact for correction.
        if applied && self.request_state.data().is_some() {
            self.form.reset();
            self.copied_at = None;
            self.focus_url_field = true;
        }
    }
}
