//! Codec failure taxonomy
//!
//! Every error is a deterministic, non-retryable translation failure scoped
//! to the single message being converted. The codec never recovers or
//! retries; recovery is a transport/session-layer decision.

use thiserror::Error;

/// Errors raised while translating between the domain model and the
/// OCPP-J 1.6 wire schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A wire string is not among the declared mappings for an enumeration.
    #[error("unrecognized {enumeration} value: {value:?}")]
    UnrecognizedEnumValue {
        enumeration: &'static str,
        value: String,
    },

    /// A boolean-status field was neither "Accepted" nor "Rejected".
    #[error("invalid acceptance status: {0:?}")]
    InvalidAcceptanceStatus(String),

    /// A URI-typed field does not parse as a syntactically valid URI.
    #[error("invalid URI: {0:?}")]
    InvalidUri(String),

    /// An Occupied charge point status lacks its required occupancy kind.
    #[error("occupied charge point status without an occupancy kind")]
    MissingOccupiedReason,

    /// The domain message variant has no OCPP-J 1.6 wire encoding in this
    /// direction; it must be handled elsewhere in the transport layer.
    #[error("{0} has no OCPP-J 1.6 wire encoding")]
    UnsupportedMessageVariant(&'static str),

    /// A wire charging profile kind is not one of the declared literals.
    #[error("unrecognized charging profile kind: {0:?}")]
    UnrecognizedProfileKind(String),
}

/// Result type for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
