pub mod ddragon_client;
pub mod parsing;
