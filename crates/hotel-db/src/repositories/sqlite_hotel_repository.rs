//! `SQLite` implementation of the `HotelRepository` trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use hotel_core::{Hotel, HotelRepository, NewHotel, RepositoryError};

use super::row_mappers::{HOTEL_SELECT_COLUMNS, format_timestamp, row_to_hotel};

/// `SQLite` implementation of the `HotelRepository` trait.
///
/// This struct holds a connection pool and implements all CRUD operations
/// for hotels using `SQLite`.
pub struct SqliteHotelRepository {
    pool: SqlitePool,
}

impl SqliteHotelRepository {
    /// Create a new `SQLite` hotel repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Option<Hotel>, RepositoryError> {
        let query = format!("SELECT {HOTEL_SELECT_COLUMNS} FROM hotels WHERE id = ?");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row.as_ref().map(row_to_hotel).transpose()
    }
}

#[async_trait]
impl HotelRepository for SqliteHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let query = format!("SELECT {HOTEL_SELECT_COLUMNS} FROM hotels ORDER BY id ASC");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_hotel).collect()
    }

    async fn find(&self, id: i64) -> Result<Option<Hotel>, RepositoryError> {
        self.fetch_by_id(id).await
    }

    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError> {
        let now = format_timestamp(&Utc::now());

        let result = sqlx::query(
            "INSERT INTO hotels (name, address, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&hotel.name)
        .bind(&hotel.address)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| RepositoryError::Storage(format!("Inserted hotel {id} vanished")))
    }

    async fn save(&self, hotel: &Hotel) -> Result<Hotel, RepositoryError> {
        let result =
            sqlx::query("UPDATE hotels SET name = ?, address = ?, updated_at = ? WHERE id = ?")
                .bind(&hotel.name)
                .bind(&hotel.address)
                .bind(format_timestamp(&Utc::now()))
                .bind(hotel.id)
                .execute(&self.pool)
                .await
                .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Hotel with ID {}",
                hotel.id
            )));
        }

        self.fetch_by_id(hotel.id)
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {}", hotel.id)))
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Hotel with ID {id}")));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;

    async fn repo() -> SqliteHotelRepository {
        SqliteHotelRepository::new(setup_test_database().await.unwrap())
    }

    fn new_hotel(name: &str, address: &str) -> NewHotel {
        NewHotel {
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamps() {
        let repo = repo().await;

        let hotel = repo.insert(&new_hotel("Grand", "1 Main St")).await.unwrap();

        assert!(hotel.id > 0);
        assert_eq!(hotel.name, "Grand");
        assert_eq!(hotel.address, "1 Main St");
        assert_eq!(hotel.created_at, hotel.updated_at);
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = repo().await;
        assert!(repo.find(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_id() {
        let repo = repo().await;
        let first = repo.insert(&new_hotel("Grand", "1 Main St")).await.unwrap();
        let second = repo.insert(&new_hotel("Ritz", "2 High St")).await.unwrap();

        let hotels = repo.list().await.unwrap();
        let ids: Vec<i64> = hotels.iter().map(|h| h.id).collect();
        assert_eq!(ids, [first.id, second.id]);
    }

    #[tokio::test]
    async fn test_save_updates_fields_and_timestamp() {
        let repo = repo().await;
        let mut hotel = repo.insert(&new_hotel("Grand", "1 Main St")).await.unwrap();

        hotel.name = "Grand Plaza".to_string();
        let saved = repo.save(&hotel).await.unwrap();

        assert_eq!(saved.id, hotel.id);
        assert_eq!(saved.name, "Grand Plaza");
        assert_eq!(saved.address, "1 Main St");
        assert_eq!(saved.created_at, hotel.created_at);
        assert!(saved.updated_at >= hotel.updated_at);

        let reloaded = repo.find(hotel.id).await.unwrap().unwrap();
        assert_eq!(reloaded, saved);
    }

    #[tokio::test]
    async fn test_save_missing_returns_not_found() {
        let repo = repo().await;
        let mut hotel = repo.insert(&new_hotel("Grand", "1 Main St")).await.unwrap();
        repo.delete(hotel.id).await.unwrap();

        hotel.name = "Ghost".to_string();
        let err = repo.save(&hotel).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;
        let hotel = repo.insert(&new_hotel("Grand", "1 Main St")).await.unwrap();

        repo.delete(hotel.id).await.unwrap();

        assert!(repo.find(hotel.id).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(hotel.id).await,
            Err(RepositoryError::NotFound(_))
        ));
    }
}
