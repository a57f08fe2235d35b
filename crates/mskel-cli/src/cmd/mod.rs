pub mod eval;
pub mod export;
pub mod import;
pub mod init;
