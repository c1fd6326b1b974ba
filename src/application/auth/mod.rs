pub mod authenticate;
pub mod login;
pub mod refresh;
pub mod token_utils;
