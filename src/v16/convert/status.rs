//! Charge point status decomposition.
//!
//! One domain status becomes four wire fields (status literal, error code,
//! info, vendor error code) and back. "NoError" is the error-code sentinel
//! for "no explicit code"; it is not part of the error-code table.

use crate::domain::ChargePointStatus;
use crate::error::{CodecError, CodecResult};
use crate::v16::enums;

pub(super) const NO_ERROR: &str = "NoError";

/// The four wire fields a domain status decomposes into.
#[derive(Debug)]
pub(super) struct StatusFields {
    pub status: String,
    pub error_code: String,
    pub info: Option<String>,
    pub vendor_error_code: Option<String>,
}

pub(super) fn to_wire(status: &ChargePointStatus) -> CodecResult<StatusFields> {
    let fields = match status {
        ChargePointStatus::Available { info } => StatusFields {
            status: "Available".to_string(),
            error_code: NO_ERROR.to_string(),
            info: info.clone(),
            vendor_error_code: None,
        },
        ChargePointStatus::Occupied { kind, info } => {
            let kind = kind.ok_or(CodecError::MissingOccupiedReason)?;
            StatusFields {
                status: enums::OCCUPANCY_KIND.to_wire(kind).to_string(),
                error_code: NO_ERROR.to_string(),
                info: info.clone(),
                vendor_error_code: None,
            }
        }
        ChargePointStatus::Faulted {
            error_code,
            info,
            vendor_error_code,
        } => StatusFields {
            status: "Faulted".to_string(),
            error_code: error_code
                .map(|code| enums::CHARGE_POINT_ERROR_CODE.to_wire(code))
                .unwrap_or(NO_ERROR)
                .to_string(),
            info: info.clone(),
            vendor_error_code: vendor_error_code.clone(),
        },
        ChargePointStatus::Unavailable { info } => StatusFields {
            status: "Unavailable".to_string(),
            error_code: NO_ERROR.to_string(),
            info: info.clone(),
            vendor_error_code: None,
        },
        ChargePointStatus::Reserved { info } => StatusFields {
            status: "Reserved".to_string(),
            error_code: NO_ERROR.to_string(),
            info: info.clone(),
            vendor_error_code: None,
        },
    };
    Ok(fields)
}

pub(super) fn from_wire(
    status: &str,
    error_code: &str,
    info: Option<String>,
    vendor_error_code: Option<String>,
) -> CodecResult<ChargePointStatus> {
    // The error code is validated for every status, but only Faulted can
    // carry it on the domain side.
    let explicit_code = match error_code {
        NO_ERROR => None,
        other => Some(enums::CHARGE_POINT_ERROR_CODE.from_wire(other)?),
    };

    Ok(match status {
        "Available" => ChargePointStatus::Available { info },
        "Unavailable" => ChargePointStatus::Unavailable { info },
        "Reserved" => ChargePointStatus::Reserved { info },
        "Faulted" => ChargePointStatus::Faulted {
            error_code: explicit_code,
            info,
            vendor_error_code,
        },
        other => match enums::OCCUPANCY_KIND.from_wire(other) {
            Ok(kind) => ChargePointStatus::Occupied {
                kind: Some(kind),
                info,
            },
            Err(_) => {
                return Err(CodecError::UnrecognizedEnumValue {
                    enumeration: "ChargePointStatus",
                    value: other.to_string(),
                })
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChargePointErrorCode, OccupancyKind};

    #[test]
    fn test_faulted_without_code_uses_sentinel() {
        let fields = to_wire(&ChargePointStatus::Faulted {
            error_code: None,
            info: None,
            vendor_error_code: None,
        })
        .unwrap();
        assert_eq!(fields.status, "Faulted");
        assert_eq!(fields.error_code, "NoError");

        let decoded = from_wire("Faulted", "NoError", None, None).unwrap();
        assert_eq!(
            decoded,
            ChargePointStatus::Faulted {
                error_code: None,
                info: None,
                vendor_error_code: None,
            }
        );
    }

    #[test]
    fn test_faulted_with_explicit_code() {
        let fields = to_wire(&ChargePointStatus::Faulted {
            error_code: Some(ChargePointErrorCode::GroundFailure),
            info: Some("RCD tripped".to_string()),
            vendor_error_code: Some("E42".to_string()),
        })
        .unwrap();
        assert_eq!(fields.error_code, "GroundFailure");

        let decoded = from_wire(
            "Faulted",
            "GroundFailure",
            Some("RCD tripped".to_string()),
            Some("E42".to_string()),
        )
        .unwrap();
        assert_eq!(
            decoded,
            ChargePointStatus::Faulted {
                error_code: Some(ChargePointErrorCode::GroundFailure),
                info: Some("RCD tripped".to_string()),
                vendor_error_code: Some("E42".to_string()),
            }
        );
    }

    #[test]
    fn test_occupied_encodes_its_kind_as_the_status_literal() {
        let fields = to_wire(&ChargePointStatus::Occupied {
            kind: Some(OccupancyKind::SuspendedEv),
            info: None,
        })
        .unwrap();
        assert_eq!(fields.status, "SuspendedEV");

        let decoded = from_wire("Charging", "NoError", None, None).unwrap();
        assert_eq!(
            decoded,
            ChargePointStatus::Occupied {
                kind: Some(OccupancyKind::Charging),
                info: None,
            }
        );
    }

    #[test]
    fn test_occupied_without_kind_cannot_be_encoded() {
        let err = to_wire(&ChargePointStatus::Occupied {
            kind: None,
            info: None,
        })
        .unwrap_err();
        assert_eq!(err, CodecError::MissingOccupiedReason);
    }

    #[test]
    fn test_unknown_error_code_is_rejected_for_any_status() {
        let err = from_wire("Available", "NotARealCode", None, None).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnrecognizedEnumValue {
                enumeration: "ChargePointErrorCode",
                value: "NotARealCode".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_status_literal_is_rejected() {
        let err = from_wire("Levitating", "NoError", None, None).unwrap_err();
        assert_eq!(
            err,
            CodecError::UnrecognizedEnumValue {
                enumeration: "ChargePointStatus",
                value: "Levitating".to_string(),
            }
        );
    }
}
