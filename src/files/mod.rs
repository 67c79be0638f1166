//! File ledger - per-user file registries and quantity transfers.
//!
//! A user's registry lives under the user id. Every mutation loads the whole
//! registry, changes it in memory and writes the whole registry back.

use tracing::{info, warn};

use crate::codec;
use crate::error::ChaincodeError;
use crate::ledger::Ledger;
use crate::model::{parse_count, FileRecord, UserFileRegistry};

/// Outcome of a transfer, as written to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub source: UserFileRegistry,
    pub target: UserFileRegistry,
}

/// File registry operations over a borrowed ledger.
pub struct FileLedger<'a> {
    ledger: &'a dyn Ledger,
}

impl<'a> FileLedger<'a> {
    pub fn new(ledger: &'a dyn Ledger) -> Self {
        Self { ledger }
    }

    /// Register `user_id` with an empty registry.
    pub fn create_user(&self, user_id: &str) -> Result<(), ChaincodeError> {
        if !self.ledger.get_state(user_id)?.is_empty() {
            return Err(ChaincodeError::AlreadyExists(user_id.to_string()));
        }
        self.store(user_id, &UserFileRegistry::new())?;
        info!(user_id, "user registered");
        Ok(())
    }

    /// Current registry for `user_id`. Absent or empty reads as empty.
    pub fn registry(&self, user_id: &str) -> Result<UserFileRegistry, ChaincodeError> {
        let bytes = self.ledger.get_state(user_id)?;
        if bytes.is_empty() {
            return Ok(UserFileRegistry::new());
        }
        codec::decode(user_id, &bytes)
    }

    /// Add or replace `file_id` in the user's registry. Other files are kept.
    pub fn create_file(
        &self,
        user_id: &str,
        file_id: &str,
        record: FileRecord,
    ) -> Result<UserFileRegistry, ChaincodeError> {
        let mut registry = self.registry(user_id)?;
        if registry.insert(file_id, record).is_some() {
            warn!(user_id, file_id, "file entry replaced");
        }
        self.store(user_id, &registry)?;
        info!(user_id, file_id, files = registry.len(), "file recorded");
        Ok(registry)
    }

    /// Move `amount` of `file_id` from `from_user` to `to_user`.
    ///
    /// The source keeps its entry with `count - amount`. The target receives
    /// the source's entry with `count` set to `amount` itself, replacing any
    /// entry it already held for that file; its other files are untouched.
    /// Balances are not summed on the target side.
    ///
    /// Two puts are issued, target first. Whether they commit together is up
    /// to the ledger engine.
    pub fn transfer_file(
        &self,
        from_user: &str,
        to_user: &str,
        file_id: &str,
        amount: &str,
    ) -> Result<Transfer, ChaincodeError> {
        let entry_key = format!("{from_user}/{file_id}");
        let moved = parse_count(&entry_key, amount)?;

        let mut source = self.registry(from_user)?;
        let mut target = self.registry(to_user)?;

        let entry = source
            .get_mut(file_id)
            .ok_or_else(|| ChaincodeError::NotFound(entry_key.clone()))?;
        let remaining = entry
            .quantity(&entry_key)?
            .checked_sub(moved)
            .ok_or_else(|| ChaincodeError::InvalidCount {
                key: entry_key.clone(),
                value: amount.to_string(),
            })?;

        let mut outgoing = entry.clone();
        outgoing.count = amount.to_string();
        entry.count = remaining.to_string();

        let projection: UserFileRegistry = std::iter::once((file_id.to_string(), outgoing)).collect();
        target.merge(projection);

        self.store(to_user, &target)?;
        self.store(from_user, &source)?;
        info!(from_user, to_user, file_id, amount = moved, remaining, "file transferred");

        Ok(Transfer { source, target })
    }

    fn store(&self, user_id: &str, registry: &UserFileRegistry) -> Result<(), ChaincodeError> {
        self.ledger.put_state(user_id, codec::encode(registry)?)?;
        Ok(())
    }
}
