//! Request DTOs and JSON-to-domain decoding.

use serde::Deserialize;
use thiserror::Error;

use clientdesk_core::{Client, DomainError, LabelPolicy};

/// Wire shape of a client, as posted by callers.
///
/// Field names follow the established wire contract; `tipoConta` carries the
/// account type as a string label rather than an enumerated code.
#[derive(Debug, Deserialize)]
pub struct ClientPayload {
    pub nome: String,
    pub idade: u8,
    #[serde(rename = "tipoConta")]
    pub tipo_conta: String,
    pub salario: f64,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON or a type mismatch against the wire shape.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Label rejected by a strict decode policy.
    #[error(transparent)]
    Label(#[from] DomainError),
}

/// Decode a JSON request body into a [`Client`].
///
/// Pure transformation: parse the bytes into a [`ClientPayload`], then resolve
/// the account-type label under `policy`. On failure no partial entity exists.
pub fn decode_client(bytes: &[u8], policy: LabelPolicy) -> Result<Client, DecodeError> {
    let payload: ClientPayload = serde_json::from_slice(bytes)?;
    let account_type = policy.resolve(&payload.tipo_conta)?;

    Ok(Client::new(
        payload.nome,
        payload.idade,
        account_type,
        payload.salario,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clientdesk_core::AccountType;

    #[test]
    fn decodes_valid_payload_losslessly() {
        let body = br#"{"nome":"Ana","idade":30,"tipoConta":"Premium","salario":5000.0}"#;

        let client = decode_client(body, LabelPolicy::default()).unwrap();

        assert_eq!(client.name(), "Ana");
        assert_eq!(client.age(), 30);
        assert_eq!(client.account_type(), AccountType::Premium);
        assert_eq!(client.salary(), 5000.0);
    }

    #[test]
    fn rejects_malformed_json() {
        let body = br#"{"nome":"Ana","#;

        let err = decode_client(body, LabelPolicy::default()).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn rejects_type_mismatch() {
        // idade out of u8 range
        let body = br#"{"nome":"Ana","idade":300,"tipoConta":"Premium","salario":1.0}"#;

        let err = decode_client(body, LabelPolicy::default()).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn lenient_policy_absorbs_unrecognized_label() {
        let body = br#"{"nome":"Ana","idade":30,"tipoConta":"Foo","salario":1.0}"#;

        let client = decode_client(body, LabelPolicy::default()).unwrap();
        assert_eq!(client.account_type(), AccountType::Cancelled);
    }

    #[test]
    fn strict_policy_surfaces_unrecognized_label() {
        let body = br#"{"nome":"Ana","idade":30,"tipoConta":"Foo","salario":1.0}"#;

        let err = decode_client(body, LabelPolicy::Strict).unwrap_err();
        assert!(matches!(err, DecodeError::Label(_)));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body =
            br#"{"nome":"Ana","idade":30,"tipoConta":"ContaSalario","salario":1.0,"id":7}"#;

        let client = decode_client(body, LabelPolicy::default()).unwrap();
        assert_eq!(client.account_type(), AccountType::SalaryAccount);
    }
}
