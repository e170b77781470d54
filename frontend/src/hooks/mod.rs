pub mod use_remote;
pub mod use_session;
