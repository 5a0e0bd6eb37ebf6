//! Verificación de tokens de contrato.
//!
//! Token = `<digest hex><id de registro>`. Se busca el registro, se recalcula
//! el digest sobre los términos canónicos (claves ordenadas, separadores
//! `", "` / `": "`, ASCII) y se compara como string exacto.

use std::sync::Arc;

use log::{debug, warn};
use param_core::hashing::{to_spaced_canonical_json, TokenDigest};
use param_store::ContractStore;
use serde::Serialize;
use serde_json::Value;

use crate::VerificationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedContract {
    pub id: String,
    pub terms: Value,
}

pub struct ContractVerifier {
    store: Arc<dyn ContractStore>,
    digest: TokenDigest,
    evaluable_status: String,
}

impl ContractVerifier {
    pub fn new(store: Arc<dyn ContractStore>, digest: TokenDigest, evaluable_status: impl Into<String>) -> Self {
        Self { store, digest, evaluable_status: evaluable_status.into() }
    }

    /// Separa `(digest, id)`.
    pub fn split_token<'a>(&self, token: &'a str) -> Result<(&'a str, &'a str), VerificationError> {
        let n = self.digest.hex_len();
        let (digest, id) = match (token.get(..n), token.get(n..)) {
            (Some(d), Some(id)) => (d, id),
            _ => return Err(VerificationError::MalformedToken(format!("expected at least {} characters", n + 1))),
        };
        if !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(VerificationError::MalformedToken("digest prefix is not hexadecimal".into()));
        }
        if id.is_empty() {
            return Err(VerificationError::MalformedToken("missing record id".into()));
        }
        Ok((digest, id))
    }

    /// Digest hex de unos términos.
    pub fn terms_digest(&self, terms: &Value) -> String {
        self.digest.hex_digest(&to_spaced_canonical_json(terms))
    }

    pub async fn verify(&self, token: &str) -> Result<VerifiedContract, VerificationError> {
        let (expected, id) = self.split_token(token)?;
        let record = self.store
                         .find_contract(id)
                         .await?
                         .ok_or_else(|| VerificationError::RecordNotFound(id.to_string()))?;
        if record.lifecycle_status != self.evaluable_status {
            debug!("contract {id} has status '{}', not evaluable", record.lifecycle_status);
            return Err(VerificationError::RecordNotFound(id.to_string()));
        }
        if record.terms.is_null() {
            return Err(VerificationError::RecordNotFound(id.to_string()));
        }

        let actual = self.terms_digest(&record.terms);
        let stored_matches = record.stored_digest.as_deref().map_or(true, |d| d == actual);
        if actual != expected || !stored_matches {
            warn!("contract {id}: terms digest mismatch");
            return Err(VerificationError::HashMismatch(id.to_string()));
        }
        debug!("contract {id} verified");
        Ok(VerifiedContract { id: record.id, terms: record.terms })
    }
}
