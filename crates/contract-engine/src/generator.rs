//! One-at-a-time contract generation
//!
//! A second request made while a contract is still being generated is
//! rejected rather than queued.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::assembler::DocumentAssembler;
use crate::errors::ContractError;
use crate::record::ContractRecord;

pub struct ContractGenerator {
    assembler: DocumentAssembler,
    pending: AtomicBool,
}

/// Clears the pending flag however generation ends
struct PendingGuard<'a>(&'a AtomicBool);

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ContractGenerator {
    pub fn new(assembler: DocumentAssembler) -> Self {
        Self {
            assembler,
            pending: AtomicBool::new(false),
        }
    }

    pub fn assembler(&self) -> &DocumentAssembler {
        &self.assembler
    }

    /// Whether a generation is currently running
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Generate a contract unless another one is in progress
    ///
    /// # Errors
    ///
    /// Only [`ContractError::GenerationInProgress`]. Assembly failures are
    /// reported as the error fragment inside `Ok`, like
    /// [`DocumentAssembler::generate_full_contract`].
    pub async fn generate(&self, record: &ContractRecord) -> Result<String, ContractError> {
        if self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::warn!("Rejected contract request, another one is still pending");
            return Err(ContractError::GenerationInProgress);
        }
        let _guard = PendingGuard(&self.pending);

        Ok(self.assembler.generate_full_contract(record).await)
    }
}
