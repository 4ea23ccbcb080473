//! Decoding of homework status API responses.
//!
//! Two stages, applied in order by the poller:
//! 1. [`check_response`] validates the raw JSON shape and picks the latest record
//! 2. [`parse_status`] turns that record into the message sent to the chat

pub mod response;
pub mod status;

#[cfg(test)]
mod decoder_tests;

pub use response::{CheckedResponse, check_response};
pub use status::parse_status;
