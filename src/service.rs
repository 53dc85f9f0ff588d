//! Pure core of the blaster service: validation and response formatting.
//!
//! Everything here is synchronous and stateless. No delivery or queue
//! lookup actually happens; both operations only shape strings.

use crate::types::SendRequest;

/// Checks a send request's fields for emptiness. Returns one error string
/// per failed check, target before message; an empty vec means valid.
pub fn validate(req: &SendRequest) -> Vec<String> {
    let mut errors = Vec::new();
    if req.target.is_empty() {
        errors.push("Target Empty".to_string());
    }
    if req.message.is_empty() {
        errors.push("Message Empty".to_string());
    }
    errors
}

/// Formats the confirmation string for a validated send. No dispatch occurs.
pub fn send(target: &str, message: &str) -> String {
    format!("Sending Message: {}, To: {}", message, target)
}

/// Formats the status string for a queue id. Any integer is accepted.
pub fn status(id: i64) -> String {
    format!("Getting Status queue id: {}", id)
}
