//! Authorization metadata and the local authorization list.

use chrono::{DateTime, Utc};

/// Authorization result metadata attached to an ID tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdTagInfo {
    pub status: AuthorizationStatus,
    pub expiry_date: Option<DateTime<Utc>>,
    pub parent_id_tag: Option<String>,
}

impl IdTagInfo {
    pub fn accepted() -> Self {
        Self {
            status: AuthorizationStatus::Accepted,
            expiry_date: None,
            parent_id_tag: None,
        }
    }
}

/// Whether an ID tag may (still) be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    Accepted,
    IdTagBlocked,
    IdTagExpired,
    IdTagInvalid,
    ConcurrentTx,
}

/// One entry of a differential or full local-authorization-list update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorisationData {
    /// Add or replace the entry for this tag.
    Add {
        id_tag: String,
        id_tag_info: IdTagInfo,
    },
    /// Remove the entry for this tag.
    Remove { id_tag: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    Full,
    Differential,
}

/// Outcome of a local-list update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The hash is carried in the domain model but has no OCPP-J 1.6 wire
    /// field; encoding drops it and decoding yields `None`.
    Accepted { hash: Option<String> },
    Failed,
    NotSupported,
    VersionMismatch,
}

/// Version of the local authorization list known to a charge point.
///
/// Charge points without local-list support report -1 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthListVersion {
    Supported(i32),
    NotSupported,
}

impl AuthListVersion {
    pub fn to_ocpp(self) -> i32 {
        match self {
            Self::Supported(version) => version,
            Self::NotSupported => -1,
        }
    }

    pub fn from_ocpp(version: i32) -> Self {
        if version < 0 {
            Self::NotSupported
        } else {
            Self::Supported(version)
        }
    }
}
