use diesel_async::AsyncMysqlConnection;
use diesel_async::pooled_connection::deadpool::{Object, Pool};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, deadpool};

/// Pooled handle to the database. Cheap to clone; every repo
/// implementor holds one, wired up once in `main`.
#[derive(Clone)]
pub struct Database {
    pool: Pool<AsyncMysqlConnection>,
}

impl Database {
    pub fn connect(database_url: &str) -> Self {
        let config = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(database_url);
        let pool = Pool::builder(config)
            .build()
            .expect("Failed to create database connection pool");

        tracing::info!("DB connection pool created");

        Database { pool }
    }

    pub async fn get_connection(
        &self,
    ) -> Result<Object<AsyncMysqlConnection>, deadpool::PoolError> {
        self.pool.get().await
    }
}
