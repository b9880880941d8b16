//! Initial schema: users and transactions.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS transactions CASCADE;
             DROP TABLE IF EXISTS users CASCADE;
             DROP TYPE IF EXISTS transaction_status;
             DROP TYPE IF EXISTS employment_status;
             DROP TYPE IF EXISTS user_role;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
CREATE TYPE user_role AS ENUM ('user', 'employee');
CREATE TYPE employment_status AS ENUM ('employed', 'unemployed');
CREATE TYPE transaction_status AS ENUM ('pending', 'approved', 'rejected');

CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(64) NOT NULL UNIQUE,
    account_number VARCHAR(32) NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    first_name VARCHAR(64) NOT NULL,
    last_name VARCHAR(64) NOT NULL,
    role user_role NOT NULL DEFAULT 'user',
    employment_status employment_status NOT NULL DEFAULT 'unemployed',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE transactions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    recipient VARCHAR(128) NOT NULL,
    amount NUMERIC(19, 4) NOT NULL,
    currency CHAR(3) NOT NULL,
    account_number VARCHAR(32) NOT NULL,
    transaction_type VARCHAR(32) NOT NULL,
    date TIMESTAMPTZ NOT NULL DEFAULT now(),
    status transaction_status NOT NULL DEFAULT 'pending',
    reviewed_by UUID REFERENCES users(id),
    reviewed_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_amount_non_negative CHECK (amount >= 0)
);

-- Review list is always ordered newest first
CREATE INDEX idx_transactions_date ON transactions(date DESC);

-- Per-account statement view
CREATE INDEX idx_transactions_account ON transactions(account_number, date DESC);

-- Employee review queue
CREATE INDEX idx_transactions_pending ON transactions(date DESC) WHERE status = 'pending';
";
