//! Create exams table.
//!
//! The table usually already exists on the backend; both statements are
//! no-ops then, apart from adding the unique index on `file_url`.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exams::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Exams::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Exams::Course).string().not_null())
                    .col(ColumnDef::new(Exams::Year).integer().not_null())
                    .col(ColumnDef::new(Exams::Period).string().not_null())
                    .col(ColumnDef::new(Exams::Uploader).uuid().not_null())
                    .col(ColumnDef::new(Exams::FileUrl).text().not_null())
                    .col(
                        ColumnDef::new(Exams::Approved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Exams::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_exams_file_url")
                    .table(Exams::Table)
                    .col(Exams::FileUrl)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Only the index belongs to us; the table is owned by the backend.
        manager
            .drop_index(
                Index::drop()
                    .name("idx_exams_file_url")
                    .table(Exams::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Exams {
    Table,
    Id,
    Course,
    Year,
    Period,
    Uploader,
    FileUrl,
    Approved,
    CreatedAt,
}
