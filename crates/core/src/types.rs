/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Power figures (plant capacity, asset draw) are whole, non-negative units.
pub type Power = i64;
