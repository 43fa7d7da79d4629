use super::assignment_repository::{self, replace};
use super::derangement::{self, DerangementError};
use crate::roster::submitted_ids;
use sqlx::SqlitePool;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum SwapError {
    #[error("need at least 2 submissions to generate a swap, have {submitted}")]
    NotEnoughSubmissions { submitted: usize },

    #[error("unable to generate mapping: {0}")]
    Generation(DerangementError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl From<DerangementError> for SwapError {
    fn from(err: DerangementError) -> Self {
        match err {
            DerangementError::InfeasibleInput { len } => Self::NotEnoughSubmissions { submitted: len },
            other => Self::Generation(other),
        }
    }
}

/// Generates and clears the stored swap.
///
/// Both operations hold the same lock, so a generation always sees one
/// snapshot of who has submitted and never interleaves with a reset.
pub struct SwapService {
    pool: SqlitePool,
    lock: Mutex<()>,
}

impl SwapService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            lock: Mutex::new(()),
        }
    }

    /// Pair every submitter with someone else's response, replacing any
    /// previous mapping. Returns the number of pairs written. On error the
    /// stored mapping is untouched.
    pub async fn generate(&self) -> Result<usize, SwapError> {
        let _guard = self.lock.lock().await;
        let mut tx = self.pool.begin().await?;

        let ids = submitted_ids(&mut *tx).await?;
        let generated = derangement::generate(&ids, &mut rand::rng());
        let assignment = match generated {
            Ok(assignment) => assignment,
            Err(err) => {
                warn!(submitted = ids.len(), error = %err, "Mapping generation failed");
                return Err(err.into());
            }
        };

        replace(&mut *tx, &assignment).await?;
        tx.commit().await?;

        info!(pairs = assignment.len(), "Mapping generated");
        Ok(assignment.len())
    }

    /// Remove the stored mapping. Returns the number of pairs removed.
    pub async fn reset(&self) -> Result<u64, sqlx::Error> {
        let _guard = self.lock.lock().await;
        let mut conn = self.pool.acquire().await?;
        let removed = assignment_repository::clear(&mut *conn).await?;
        info!(removed, "Mapping cleared");
        Ok(removed)
    }
}
