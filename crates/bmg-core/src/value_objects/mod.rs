//! Value objects - identifier types shared across entities

mod snowflake;

pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
