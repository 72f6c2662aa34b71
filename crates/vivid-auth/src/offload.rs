//! Bounded blocking pool for hash and verify calls.
//!
//! Argon2 is deliberately slow and CPU-bound. Async callers run it through
//! [`HashPool`], which moves each call onto tokio's blocking threads and
//! caps how many run at once.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::warn;
use zeroize::Zeroizing;

use vivid_core::config::offload::OffloadConfig;
use vivid_core::error::AppError;

use crate::password::{CredentialHasher, CredentialRecord};

/// Runs hash/verify jobs on the blocking pool with bounded concurrency.
#[derive(Debug, Clone)]
pub struct HashPool {
    /// Hasher shared by every job.
    hasher: Arc<dyn CredentialHasher>,
    /// Limits concurrent jobs.
    limiter: Arc<Semaphore>,
}

impl HashPool {
    /// Creates a pool from configuration.
    pub fn new(hasher: Arc<dyn CredentialHasher>, config: &OffloadConfig) -> Self {
        Self {
            hasher,
            limiter: Arc::new(Semaphore::new(config.max_concurrent)),
        }
    }

    /// Number of free job slots.
    pub fn available_slots(&self) -> usize {
        self.limiter.available_permits()
    }

    /// Stops accepting jobs. Jobs already running finish normally.
    pub fn close(&self) {
        self.limiter.close();
    }

    /// Hashes `password` on the blocking pool.
    pub async fn hash(&self, password: Zeroizing<String>) -> Result<CredentialRecord, AppError> {
        let permit = Arc::clone(&self.limiter)
            .acquire_owned()
            .await
            .map_err(|_| AppError::service_unavailable("Hash pool is shut down"))?;
        let hasher = Arc::clone(&self.hasher);

        tokio::task::spawn_blocking(move || {
            let _permit = permit;
            hasher.hash(&password)
        })
        .await
        .map_err(|e| AppError::internal(format!("Hash task failed: {e}")))?
    }

    /// Verifies `attempted` against `record` on the blocking pool.
    ///
    /// A closed pool or a failed task yields `false`.
    pub async fn verify(&self, record: CredentialRecord, attempted: Zeroizing<String>) -> bool {
        let Ok(permit) = Arc::clone(&self.limiter).acquire_owned().await else {
            warn!("Verify requested on a closed hash pool");
            return false;
        };
        let hasher = Arc::clone(&self.hasher);

        match tokio::task::spawn_blocking(move || {
            let _permit = permit;
            hasher.verify(&record, &attempted)
        })
        .await
        {
            Ok(matched) => matched,
            Err(e) => {
                warn!(error = %e, "Verify task failed");
                false
            }
        }
    }
}
