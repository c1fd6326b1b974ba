#[path = "../common/mod.rs"]
#[macro_use]
pub mod common;

pub mod auth_login_test;
pub mod auth_refresh_test;
pub mod links_create_test;
pub mod users_create_test;
