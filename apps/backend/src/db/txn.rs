use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use actix_web::{HttpMessage, HttpRequest};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};

use super::{require_db, txn_policy};
use crate::error::AppError;
use crate::state::app_state::AppState;

/// A transaction injected into request extensions by tests; `with_txn`
/// reuses it instead of opening its own.
#[derive(Clone)]
pub struct SharedTxn(pub Arc<DatabaseTransaction>);

impl SharedTxn {
    /// Begins a transaction owned by the caller; `with_txn` never ends it.
    pub async fn open(conn: &DatabaseConnection) -> Result<Self, DbErr> {
        Ok(Self(Arc::new(conn.begin().await?)))
    }

    pub fn transaction(&self) -> &DatabaseTransaction {
        &self.0
    }

    /// Fails while other clones are still alive.
    pub async fn rollback(self) -> Result<(), DbErr> {
        let txn = Arc::try_unwrap(self.0).map_err(|_| {
            DbErr::Custom("cannot roll back: transaction is still shared".to_string())
        })?;
        txn.rollback().await
    }
}

pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'a>>;

/// Runs `f` inside a transaction.
///
/// 1) A `SharedTxn` in the request extensions is used as-is (no commit/rollback here).
/// 2) Otherwise a new transaction is opened; on `Ok` the txn policy decides
///    commit or rollback, on `Err` it is rolled back.
pub async fn with_txn<R, F>(req: Option<&HttpRequest>, state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    // Clone out before awaiting so no RefCell borrow is held across the await.
    let shared_txn: Option<SharedTxn> =
        req.and_then(|r| r.extensions().get::<SharedTxn>().cloned());

    if let Some(shared) = shared_txn {
        return f(shared.transaction()).await;
    }

    let db = require_db(state)?;
    let txn = db.begin().await?;

    match f(&txn).await {
        Ok(val) => {
            match txn_policy::current() {
                txn_policy::TxnPolicy::CommitOnOk => txn.commit().await?,
                txn_policy::TxnPolicy::RollbackOnOk => txn.rollback().await?,
            }
            Ok(val)
        }
        Err(err) => {
            // Preserve the original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
