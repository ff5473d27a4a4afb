//! # OCPP Wire Codec
//!
//! Translation layer between a protocol-version-neutral model of charging
//! station operations and the concrete JSON wire schema of OCPP-J 1.6.
//!
//! ## Architecture
//!
//! - **domain**: version-neutral messages, enumerations and composite
//!   records (meter readings, charging profiles, local authorization lists)
//! - **v16**: the OCPP-J 1.6 codec set — wire records, enumeration tables
//!   and per-operation conversion rules; further protocol versions slot in
//!   as sibling modules
//! - **error**: the structured failure taxonomy for malformed wire values
//!
//! The codec is stateless and performs no I/O: every conversion is a pure
//! function of its input. Transport framing (the OCPP-J call/result/error
//! envelope), dispatch by action name, logging setup and session state are
//! the caller's concern.
//!
//! ```
//! use ocpp_codec::{domain, v16};
//!
//! let msg = domain::Message::HeartbeatRes(domain::HeartbeatRes {
//!     current_time: chrono::Utc::now(),
//! });
//! let encoded = v16::to_wire(&msg)?;
//! assert_eq!(v16::from_wire(&encoded)?, msg);
//! # Ok::<(), ocpp_codec::CodecError>(())
//! ```

pub mod domain;
pub mod error;
pub mod v16;

pub use error::{CodecError, CodecResult};
