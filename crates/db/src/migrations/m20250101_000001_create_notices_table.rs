//! Create `notices` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notice::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notice::NoticeTitle).string_len(255).not_null())
                    .col(ColumnDef::new(Notice::NoticeDate).date().not_null())
                    .col(
                        ColumnDef::new(Notice::UploadTime)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Notice::Deadline)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Notice::NoticeLink).string_len(500).not_null())
                    .col(
                        ColumnDef::new(Notice::Status)
                            .string_len(16)
                            .not_null()
                            .default("active"),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: status (both list endpoints filter on it)
        manager
            .create_index(
                Index::create()
                    .name("idx_notices_status")
                    .table(Notice::Table)
                    .col(Notice::Status)
                    .to_owned(),
            )
            .await?;

        // Index: upload_time (list ordering)
        manager
            .create_index(
                Index::create()
                    .name("idx_notices_upload_time")
                    .table(Notice::Table)
                    .col(Notice::UploadTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Notice {
    #[iden = "notices"]
    Table,
    Id,
    NoticeTitle,
    NoticeDate,
    UploadTime,
    Deadline,
    NoticeLink,
    Status,
}
