//! Campaign designer core: configuration, telemetry, and the scoring and
//! budget allocation calculator behind the campaign wizard.

pub mod config;
pub mod designer;
pub mod error;
pub mod telemetry;
