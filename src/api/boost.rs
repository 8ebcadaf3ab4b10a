//! Boundary to the payment collaborator. The core's only responsibility is
//! to hand the command over; amount validation and processing happen on the
//! other side.

use crate::api::models::BoostRequest;
use crate::diagnostics::log_event;

/// Fire-and-forget "boost requested" command.
pub fn submit_boost(request: &BoostRequest) {
    match serde_json::to_string(request) {
        Ok(payload) => log_event("boost", &format!("submitted {payload}")),
        Err(err) => log_event("boost", &format!("failed to encode request: {err}")),
    }
}
