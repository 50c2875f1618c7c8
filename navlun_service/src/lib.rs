#![forbid(unsafe_code)]

//! HTTP surface and conversational agent for the freight-posting
//! aggregation system: the webhook admission endpoint, the chat endpoint,
//! and the local stand-ins for the collaborators spec.md §1 treats as
//! external (object archive, FIFO queue, outbound chat delivery).

pub mod adapters;
pub mod agent;
pub mod chat;
pub mod error;
pub mod state;
pub mod webhook;
