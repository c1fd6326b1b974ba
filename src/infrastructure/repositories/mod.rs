pub mod links;
pub mod mock;
pub mod users;
