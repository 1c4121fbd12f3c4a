pub mod account;
pub mod email;
pub mod ownership;
pub mod password;
pub mod session;
pub mod token;
