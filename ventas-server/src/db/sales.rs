//! Sales repository
//!
//! Plain query functions over the pool. Each call is a single statement
//! and its own implicit transaction; `sqlx::Error` propagates to the
//! caller untouched.

use shared::models::{Sale, SaleCreate, SaleUpdate};
use sqlx::SqlitePool;

pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Sale>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM sales ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Sale>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM sales WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn list_by_store(pool: &SqlitePool, store: &str) -> Result<Vec<Sale>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM sales WHERE store = ? ORDER BY id")
        .bind(store)
        .fetch_all(pool)
        .await
}

/// Insert a sale and return the stored row.
///
/// A supplied id is honored; otherwise SQLite assigns the next
/// AUTOINCREMENT value.
pub async fn insert(pool: &SqlitePool, sale: &SaleCreate) -> Result<Sale, sqlx::Error> {
    match sale.id {
        Some(id) => {
            sqlx::query_as(
                "INSERT INTO sales (id, date, store, amount) VALUES (?, ?, ?, ?) RETURNING *",
            )
            .bind(id)
            .bind(&sale.date)
            .bind(&sale.store)
            .bind(sale.amount)
            .fetch_one(pool)
            .await
        }
        None => {
            sqlx::query_as("INSERT INTO sales (date, store, amount) VALUES (?, ?, ?) RETURNING *")
                .bind(&sale.date)
                .bind(&sale.store)
                .bind(sale.amount)
                .fetch_one(pool)
                .await
        }
    }
}

/// Overwrite `date`, `store` and `amount` together.
///
/// Returns `None` (and writes nothing) when the id does not exist.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    sale: &SaleUpdate,
) -> Result<Option<Sale>, sqlx::Error> {
    sqlx::query_as("UPDATE sales SET date = ?, store = ?, amount = ? WHERE id = ? RETURNING *")
        .bind(&sale.date)
        .bind(&sale.store)
        .bind(sale.amount)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Remove the row. Returns `false` when the id does not exist.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sales WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // One pooled connection keeps every query on the same :memory: db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");
        pool
    }

    fn draft(date: &str, store: &str, amount: f64) -> SaleCreate {
        SaleCreate {
            id: None,
            date: date.into(),
            store: store.into(),
            amount,
        }
    }

    #[tokio::test]
    async fn insert_assigns_positive_id() {
        let pool = test_pool().await;
        let sale = insert(&pool, &draft("01/01/23", "Tienda01", 2500.0))
            .await
            .unwrap();
        assert!(sale.id > 0);
        assert_eq!(sale.date, "01/01/23");
        assert_eq!(sale.store, "Tienda01");
        assert_eq!(sale.amount, 2500.0);
    }

    #[tokio::test]
    async fn insert_honors_supplied_id() {
        let pool = test_pool().await;
        let mut payload = draft("02/01/23", "Tienda02", 10.0);
        payload.id = Some(42);
        let sale = insert(&pool, &payload).await.unwrap();
        assert_eq!(sale.id, 42);
    }

    #[tokio::test]
    async fn find_by_id_round_trip() {
        let pool = test_pool().await;
        let created = insert(&pool, &draft("01/01/23", "Tienda01", 2500.0))
            .await
            .unwrap();

        let first = find_by_id(&pool, created.id).await.unwrap().unwrap();
        let second = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(first, created);
        // Read is idempotent without intervening writes
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let pool = test_pool().await;
        assert!(find_by_id(&pool, 999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_overwrites_all_fields() {
        let pool = test_pool().await;
        let created = insert(&pool, &draft("01/01/23", "Tienda01", 2500.0))
            .await
            .unwrap();

        let new_values = SaleUpdate {
            date: "22/01/23".into(),
            store: "Tienda02".into(),
            amount: 4500.0,
        };
        let updated = update(&pool, created.id, &new_values).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, "22/01/23");
        assert_eq!(updated.store, "Tienda02");
        assert_eq!(updated.amount, 4500.0);

        // The stored row reflects the new values, not a merge
        let read_back = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(read_back, updated);
    }

    #[tokio::test]
    async fn update_missing_writes_nothing() {
        let pool = test_pool().await;
        insert(&pool, &draft("01/01/23", "Tienda01", 2500.0))
            .await
            .unwrap();

        let new_values = SaleUpdate {
            date: "x".into(),
            store: "Tienda09".into(),
            amount: 1.0,
        };
        assert!(update(&pool, 999, &new_values).await.unwrap().is_none());

        let all = list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].store, "Tienda01");
    }

    #[tokio::test]
    async fn delete_returns_false_for_missing() {
        let pool = test_pool().await;
        assert!(!delete(&pool, 999).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let pool = test_pool().await;
        let created = insert(&pool, &draft("01/01/23", "Tienda01", 2500.0))
            .await
            .unwrap();

        assert!(delete(&pool, created.id).await.unwrap());
        assert!(find_by_id(&pool, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_by_store_filters() {
        let pool = test_pool().await;
        insert(&pool, &draft("01/01/23", "Tienda01", 2500.0))
            .await
            .unwrap();
        insert(&pool, &draft("22/01/23", "Tienda02", 4500.0))
            .await
            .unwrap();
        insert(&pool, &draft("23/01/23", "Tienda01", 100.0))
            .await
            .unwrap();

        let rows = list_by_store(&pool, "Tienda01").await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|s| s.store == "Tienda01"));

        assert!(list_by_store(&pool, "Tienda99").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_all_orders_by_id() {
        let pool = test_pool().await;
        insert(&pool, &draft("01/01/23", "Tienda01", 1.0)).await.unwrap();
        insert(&pool, &draft("02/01/23", "Tienda02", 2.0)).await.unwrap();

        let all = list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all[0].id < all[1].id);
    }
}
