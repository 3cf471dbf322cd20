pub mod banner;
pub mod commands;
pub mod config;
pub mod consts;
pub mod events;
pub mod form;
pub mod input;
pub mod render;
pub mod search;
pub mod session;
pub mod source;
pub mod spinner;
pub mod store;
pub mod toast;
pub mod user;
pub mod validate;
