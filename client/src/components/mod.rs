pub mod chat;
pub mod chat_history;
pub mod code_renderer;
pub mod error_card;
pub mod loading_dots;
pub mod protected_route;
pub mod user_profile;
