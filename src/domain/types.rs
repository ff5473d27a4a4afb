//! Shared domain types: scopes, retry policies and operation status
//! enumerations.
//!
//! Everything here is protocol-version-neutral; the version-specific wire
//! literals for these enumerations live in the codec's lookup tables.

use chrono::Duration;

/// Addressee of an operation: the charge point as a whole or one connector.
///
/// On the OCPP-J wire this is a single `connectorId` integer where 0 means
/// the whole charge point and connector numbering starts at 1. The domain
/// side keeps connectors 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    ChargePoint,
    Connector(ConnectorScope),
}

impl Scope {
    /// Wire `connectorId` for this scope.
    pub fn to_ocpp(self) -> u32 {
        match self {
            Self::ChargePoint => 0,
            Self::Connector(c) => c.to_ocpp(),
        }
    }

    /// Scope for a wire `connectorId`.
    pub fn from_ocpp(connector_id: u32) -> Self {
        match connector_id {
            0 => Self::ChargePoint,
            n => Self::Connector(ConnectorScope(n - 1)),
        }
    }
}

/// A single connector, identified by its 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorScope(pub u32);

impl ConnectorScope {
    /// Wire `connectorId` (1-based) for this connector.
    pub fn to_ocpp(self) -> u32 {
        self.0 + 1
    }

    /// Connector for a wire `connectorId` (1-based).
    pub fn from_ocpp(connector_id: u32) -> Self {
        Self(connector_id.saturating_sub(1))
    }
}

/// Retry policy attached to firmware/diagnostics transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Retries {
    /// Number of attempts the charge point should make.
    pub attempts: Option<u32>,
    /// Pause between attempts.
    pub interval: Option<Duration>,
}

/// BootNotification registration outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationStatus {
    Accepted,
    Pending,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetType {
    Hard,
    Soft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityType {
    Operative,
    Inoperative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Accepted,
    Rejected,
    Scheduled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationStatus {
    Accepted,
    Rejected,
    RebootRequired,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataTransferStatus {
    Accepted,
    Rejected,
    UnknownMessageId,
    UnknownVendorId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Accepted,
    Faulted,
    Occupied,
    Rejected,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMessageStatus {
    Accepted,
    Rejected,
    NotImplemented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnlockStatus {
    Unlocked,
    UnlockFailed,
    NotSupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareStatus {
    Downloaded,
    DownloadFailed,
    Downloading,
    Idle,
    InstallationFailed,
    Installing,
    Installed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticsStatus {
    Idle,
    Uploaded,
    UploadFailed,
    Uploading,
}

/// Why a transaction stopped. Absent on the wire means `Local`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    EmergencyStop,
    EvDisconnected,
    HardReset,
    Local,
    Other,
    PowerLoss,
    Reboot,
    Remote,
    SoftReset,
    UnlockCommand,
    DeAuthorized,
}

impl Default for StopReason {
    fn default() -> Self {
        Self::Local
    }
}

/// Message the central system asks a charge point to send spontaneously.
///
/// Only meter values and status notifications can be narrowed to a single
/// connector; the other triggers address the charge point as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageTrigger {
    BootNotification,
    DiagnosticsStatusNotification,
    FirmwareStatusNotification,
    Heartbeat,
    MeterValues(Option<ConnectorScope>),
    StatusNotification(Option<ConnectorScope>),
}

/// One configuration entry reported by GetConfiguration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub readonly: bool,
    pub value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_connector_numbering() {
        assert_eq!(Scope::ChargePoint.to_ocpp(), 0);
        assert_eq!(Scope::Connector(ConnectorScope(0)).to_ocpp(), 1);
        assert_eq!(Scope::from_ocpp(0), Scope::ChargePoint);
        assert_eq!(Scope::from_ocpp(3), Scope::Connector(ConnectorScope(2)));
        assert_eq!(ConnectorScope::from_ocpp(1), ConnectorScope(0));
    }
}
