//! Thin sqlx query functions. Each takes `impl PgExecutor` so it runs
//! against a pool or inside an open transaction; the service layer decides
//! which. No business rules live here.

pub mod events;
pub mod registrations;
