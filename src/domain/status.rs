//! Charge point / connector status model.
//!
//! The domain keeps five status variants; the 1.6 wire spreads a status
//! notification over four fields (status name, error code, info text and
//! vendor error code) and represents an occupied connector as one of five
//! distinct status literals. The codec does the decomposition.

/// Status of a charge point or one of its connectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargePointStatus {
    Available {
        info: Option<String>,
    },
    /// A connector is in use. The occupancy kind is mandatory when encoding
    /// for OCPP 1.6, which has a separate wire literal per kind.
    Occupied {
        kind: Option<OccupancyKind>,
        info: Option<String>,
    },
    Faulted {
        error_code: Option<ChargePointErrorCode>,
        info: Option<String>,
        vendor_error_code: Option<String>,
    },
    Unavailable {
        info: Option<String>,
    },
    Reserved {
        info: Option<String>,
    },
}

/// What an occupied connector is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyKind {
    Preparing,
    Charging,
    SuspendedEvse,
    SuspendedEv,
    Finishing,
}

/// Charge point error codes, without the "NoError" sentinel.
///
/// "NoError" on the wire means no explicit code, which the domain expresses
/// as `Option::None` on [`ChargePointStatus::Faulted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargePointErrorCode {
    ConnectorLockFailure,
    EvCommunicationError,
    GroundFailure,
    HighTemperature,
    InternalError,
    LocalListConflict,
    OtherError,
    OverCurrentFailure,
    OverVoltage,
    PowerMeterFailure,
    PowerSwitchFailure,
    ReaderFailure,
    ResetFailure,
    UnderVoltage,
    WeakSignal,
}
