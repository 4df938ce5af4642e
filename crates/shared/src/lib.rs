//! LoreCrafter Shared - REST wire contract between client and backend
//!
//! This crate contains every type that crosses the HTTP boundary:
//! - Entity DTOs exactly as the backend serializes them
//! - Request payloads the client sends
//! - Response bodies the client parses
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde
//! 2. **No business logic** - Pure data types and serialization
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets
//! 4. **No domain types** - DTOs use raw `String`/`f64`; conversion to
//!    validated domain types happens in the client's application layer

pub mod dto;
pub mod requests;
pub mod responses;

pub use dto::{CharacterData, CoordsData, LocationData};
pub use requests::{ColorPayload, GeneratePayload, LinkLocationPayload, SetCoordsPayload};
pub use responses::{ErrorBody, HealthResponse, LogoutResponse, MessageResponse};
