pub mod auth;
pub mod settings;
pub mod support;
pub mod training;
pub mod users;
