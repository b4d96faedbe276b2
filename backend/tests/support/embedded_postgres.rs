//! Embedded PostgreSQL for Diesel adapter tests.
//!
//! Each test gets a fresh database on a throwaway cluster with the embedded
//! migrations applied. Set `SKIP_TEST_CLUSTER=1` where PostgreSQL binaries
//! cannot be fetched or started; tests then return early instead of failing.

use diesel::connection::SimpleConnection;
use diesel::{Connection, PgConnection};
use pg_embedded_setup_unpriv::{TemporaryDatabase, TestCluster};
use tokio::runtime::Runtime;
use uuid::Uuid;

use dormitory::outbound::persistence::{DbPool, PoolConfig, run_migrations};

/// A migrated database plus the runtime used to drive async adapters.
///
/// Fields drop in declaration order, so the database goes before the cluster.
pub struct MigratedDatabase {
    pub runtime: Runtime,
    pub pool: DbPool,
    database: TemporaryDatabase,
    _cluster: TestCluster,
}

impl MigratedDatabase {
    pub fn url(&self) -> &str {
        self.database.url()
    }

    /// Run raw SQL on a blocking connection.
    pub fn execute(&self, sql: &str) -> Result<(), String> {
        let mut conn = PgConnection::establish(self.url()).map_err(|err| err.to_string())?;
        conn.batch_execute(sql).map_err(|err| err.to_string())
    }
}

fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn start(seed: &str) -> Result<MigratedDatabase, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = TestCluster::new().map_err(|err| format!("{err:?}"))?;
    let name = format!("dormitory_{}", Uuid::new_v4().simple());
    let database = cluster
        .temporary_database(name.as_str())
        .map_err(|err| format!("{err:?}"))?;
    let url = database.url().to_owned();

    runtime
        .block_on(run_migrations(&url))
        .map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(url).with_max_size(2)))
        .map_err(|err| err.to_string())?;

    let db = MigratedDatabase {
        runtime,
        pool,
        database,
        _cluster: cluster,
    };
    db.execute(seed)?;
    Ok(db)
}

/// Start a cluster, migrate a fresh database and apply `seed`.
///
/// Returns `None` when the cluster cannot start and `SKIP_TEST_CLUSTER` is
/// set.
///
/// # Panics
///
/// Panics when the cluster cannot start and skipping is not enabled.
pub fn migrated_database(seed: &str) -> Option<MigratedDatabase> {
    match start(seed) {
        Ok(db) => Some(db),
        Err(reason) if should_skip_test_cluster() => {
            eprintln!("SKIP-TEST-CLUSTER: {reason}");
            None
        }
        Err(reason) => {
            panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.")
        }
    }
}
