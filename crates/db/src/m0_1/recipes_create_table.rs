use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Recipes;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Recipes::Table)
        .col(
            ColumnDef::new(Recipes::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(ColumnDef::new(Recipes::Name).string().not_null())
        .col(
            ColumnDef::new(Recipes::Category)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(ColumnDef::new(Recipes::PrepTime).string().not_null())
        .col(ColumnDef::new(Recipes::CookTime).string().not_null())
        .col(ColumnDef::new(Recipes::Servings).integer().not_null())
        .col(ColumnDef::new(Recipes::Ingredients).json_binary().not_null())
        .col(ColumnDef::new(Recipes::Instructions).string().not_null())
        .col(
            ColumnDef::new(Recipes::ImageUrl)
                .string()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Recipes::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Recipes::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Recipes::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
