//! # Ports Layer
//!
//! - **Inbound (Driving)**: the verification and subscription handshake APIs
//! - **Outbound (Driven)**: certificate retrieval and subscription
//!   confirmation requests

pub mod inbound;
pub mod outbound;
