//! minidoc: client-side workflow for iterative document drafting.
//!
//! The user defines a topic and a set of named sections, triggers remote
//! generation, edits the result, triggers remote evaluation (which scores
//! coherency and may revise the draft), and finally exports to a binary
//! document format. This crate is the client side of that loop: the
//! [`workflow::DraftWorkflow`] state machine, the [`models::Draft`] data
//! model, and the [`client`] adapters for the three remote services.

pub mod client;
pub mod config;
pub mod history;
pub mod models;
pub mod workflow;
