use sea_orm::DatabaseTransaction;

use crate::server::error::AppError;

/// Commits the transaction when `result` is `Ok`, rolls it back otherwise.
///
/// Every query that belongs to the operation must have been issued through `txn`.
pub async fn finish_transaction<T>(
    txn: DatabaseTransaction,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    match result {
        Ok(value) => {
            txn.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Failed to roll back transaction: {}", rollback_err);
            }
            Err(err)
        }
    }
}

