pub mod assistant;
pub mod board;
pub mod mail;
pub mod maintenance;
pub mod notices;
