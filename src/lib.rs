pub mod config;
pub mod logger;
pub mod content;
pub mod site;
pub mod text_utils;
mod test_data;
