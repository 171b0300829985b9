pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_members_table;
mod m20250301_000002_create_portfolios_table;
mod m20250301_000003_create_comments_table;
mod m20250302_000001_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_members_table::Migration),
            Box::new(m20250301_000002_create_portfolios_table::Migration),
            Box::new(m20250301_000003_create_comments_table::Migration),
            Box::new(m20250302_000001_add_lookup_indexes::Migration),
        ]
    }
}
