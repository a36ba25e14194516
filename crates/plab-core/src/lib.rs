//! # plab-core
//!
//! Core types and client-side logic for Persona Lab.
//!
//! This crate holds everything the research wizard needs that does not touch
//! the network:
//! - Entity structs for the research profile, personas, question drafts and
//!   the insight report as it arrives on the wire
//! - Step and filter enums, with the wizard step state machine
//! - The wizard controller (single source of truth for step + accumulated data)
//! - Response normalization (evidence shapes, reasoning strip, avatar glyphs)
//! - The cosmetic progress timeline used while questions are being answered
//! - The local export document
//! - Cross-cutting error types

pub mod avatar;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
pub mod ids;
pub mod normalize;
pub mod progress;
pub mod wizard;
