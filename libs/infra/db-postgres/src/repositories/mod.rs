// [libs/infra/db-postgres/src/repositories/mod.rs]
//! Registro de repositorios del adaptador Postgres.

pub mod alert_history;
pub mod mention;
// FIN DEL ARCHIVO [libs/infra/db-postgres/src/repositories/mod.rs]
