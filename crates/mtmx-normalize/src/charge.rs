//! Charge-bearer code-table translation.

use mtmx_model::ChargeBearer;

use crate::NormalizeError;

/// Translate an MT `71A` code into the ISO 20022 charge bearer.
///
/// `OUR` → `DEBT`, `BEN` → `CRED`, `SHA` → `SHAR`. Any other value is
/// rejected by the validator before reaching this stage; the error return
/// exists so the mapper never has to guess.
pub fn charge_bearer(code: &str) -> Result<ChargeBearer, NormalizeError> {
    match code.trim() {
        "OUR" => Ok(ChargeBearer::Debt),
        "BEN" => Ok(ChargeBearer::Cred),
        "SHA" => Ok(ChargeBearer::Shar),
        other => Err(NormalizeError::InvalidChargeCode(other.to_string())),
    }
}
