pub mod connection;
pub mod game_days;
pub mod matches;
pub mod models;
pub mod queues;
pub mod setup;
pub mod teams;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
