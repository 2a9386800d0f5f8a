pub mod auth_callback;
pub mod home;
pub mod login;
pub mod session;
