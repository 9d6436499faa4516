//! HTTP surface: the public form endpoint
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/api/form` | POST | verify, validate and relay one form |
//! | `/healthz` | GET | liveness |
//!
//! Other methods answer 405 and oversized bodies answer 413, both with a
//! JSON `message`.

mod body;
mod response;
mod router;

pub use body::{BodyError, decode_payload};
pub use response::{message_response, outcome_response, outcome_status, submission_error_response};
pub use router::{FORM_ROUTE, HEALTH_ROUTE, MAX_BODY_BYTES, build_router, serve};
