pub(crate) mod config;
pub(crate) mod info;
pub(crate) mod list;
