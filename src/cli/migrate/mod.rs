//! Migrate command - applies or reverts the account store schema

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::bootstrap;
use crate::infrastructure::storage::{
    account_migrations, connect_pool, run_account_migrations, PostgresMigrator,
};

#[derive(Args, Debug, Default)]
pub struct MigrateArgs {
    /// Revert the most recently applied migration instead of applying pending ones
    #[arg(long)]
    pub revert_last: bool,
}

pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    let postgres = crate::postgres_config(&config.database)
        .context("database.url must be set to run migrations")?;
    let pool = connect_pool(&postgres).await?;

    if args.revert_last {
        let migrator = PostgresMigrator::new(pool.clone());
        let current = migrator.current_version().await?;

        match account_migrations()
            .into_iter()
            .find(|m| Some(m.version) == current)
        {
            Some(migration) => {
                migrator.revert_migration(&migration).await?;
            }
            None => info!("No migration to revert"),
        }
    } else {
        let applied = run_account_migrations(&pool).await?;
        info!(applied, "Migrations complete");
    }

    pool.close().await;
    Ok(())
}
