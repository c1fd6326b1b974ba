pub mod auth;
pub mod health;
pub mod links;
pub mod redirect;
pub mod users;
