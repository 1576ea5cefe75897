use sqlx::mysql::MySqlConnectOptions;
use sqlx::{MySql, Pool};

use crate::config::Config;
use crate::db::models::DbUser;
use crate::error::ApiError;

pub type MySqlPool = Pool<MySql>;

fn connect_options(cfg: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&cfg.db_host)
        .username(&cfg.db_user)
        .password(&cfg.db_password)
        .database(&cfg.db_name)
}

/// Build the shared pool without touching the network. Connections are
/// opened on first checkout, so an unreachable database surfaces as
/// per-request errors rather than a startup failure.
pub fn connect_lazy(cfg: &Config) -> MySqlPool {
    MySqlPool::connect_lazy_with(connect_options(cfg))
}

#[derive(Clone)]
pub struct UserStore {
    pool: MySqlPool,
}

impl UserStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub async fn insert_user(
        &self,
        usuario: Option<&str>,
        contra: Option<&str>,
    ) -> Result<(), ApiError> {
        sqlx::query("INSERT INTO usuarios (usuario, contra) VALUES (?, ?)")
            .bind(usuario)
            .bind(contra)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Every row, in whatever order the store returns them.
    pub async fn list_users(&self) -> Result<Vec<DbUser>, ApiError> {
        let rows = sqlx::query_as::<_, DbUser>("SELECT usuario, contra FROM usuarios")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
