//! Structured event log: one JSON object per drained event on the browser console.

use super::state::GameEvent;

pub fn encode(event: &GameEvent) -> Result<String, serde_json::Error> {
    serde_json::to_string(event)
}

pub fn record(events: &[GameEvent]) {
    for event in events {
        match encode(event) {
            Ok(json) => log(&json),
            Err(e) => warn(&format!("journal: could not encode {:?}: {}", event, e)),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(target_arch = "wasm32")]
fn warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(_msg: &str) {}

#[cfg(not(target_arch = "wasm32"))]
fn warn(_msg: &str) {}
