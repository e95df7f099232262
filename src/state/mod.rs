//! Application state: the view router, contact prefill, chat transcript,
//! drink log and the deferred-search machine.
//!
//! Everything here is plain data with synchronous methods. Components own
//! instances inside reactive signals; nothing in this module touches the
//! DOM or the network.

pub mod chat;
pub mod contact;
pub mod drink_log;
pub mod nav;
pub mod search;
