use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Executor, Row};
use tracing::{debug, info};

use dolimask_core::{redact_mysql_target, Error, MysqlConfig};
use dolimask_engine::{Session, SessionError, SqlValue};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// One MySQL connection with autocommit switched off.
///
/// The engine drives transaction boundaries with explicit `COMMIT`
/// statements; dropping the session uncommitted rolls back whatever is
/// pending on the server side.
pub struct MysqlSession {
    conn: MySqlConnection,
}

impl MysqlSession {
    pub async fn connect(config: &MysqlConfig) -> Result<Self, Error> {
        let target = redact_mysql_target(config);
        debug!(%target, "connecting to mysql");

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.database);

        let mut conn = tokio::time::timeout(CONNECT_TIMEOUT, options.connect())
            .await
            .map_err(|_| Error::Connection(format!("timed out connecting to {target}")))?
            .map_err(|err| Error::Connection(format!("cannot connect to {target}: {err}")))?;

        conn.execute("SET autocommit = 0")
            .await
            .map_err(|err| Error::Connection(format!("cannot disable autocommit: {err}")))?;

        info!(%target, "mysql session established");
        Ok(Self { conn })
    }
}

fn session_err(err: sqlx::Error) -> SessionError {
    SessionError::new(err.to_string())
}

#[async_trait]
impl Session for MysqlSession {
    async fn fetch_count(&mut self, sql: &str) -> Result<u64, SessionError> {
        let row = sqlx::query(sql)
            .fetch_one(&mut self.conn)
            .await
            .map_err(session_err)?;
        let count: i64 = row.try_get(0).map_err(session_err)?;
        Ok(count.max(0) as u64)
    }

    async fn fetch_ids(&mut self, sql: &str) -> Result<Vec<i64>, SessionError> {
        let rows = sqlx::query(sql)
            .fetch_all(&mut self.conn)
            .await
            .map_err(session_err)?;
        rows.iter()
            .map(|row| row.try_get::<i64, _>(0).map_err(session_err))
            .collect()
    }

    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<u64, SessionError> {
        let mut query = sqlx::query(sql);
        for param in params {
            query = match param {
                SqlValue::Text(value) => query.bind(value.as_str()),
                SqlValue::Int(value) => query.bind(*value),
            };
        }
        let result = query
            .execute(&mut self.conn)
            .await
            .map_err(session_err)?;
        Ok(result.rows_affected())
    }

    async fn commit(&mut self) -> Result<(), SessionError> {
        self.conn.execute("COMMIT").await.map_err(session_err)?;
        Ok(())
    }
}
