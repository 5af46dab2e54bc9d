pub(crate) mod args;
pub(crate) mod commands;
pub(crate) mod parser;
pub(crate) mod session;
