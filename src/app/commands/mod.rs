pub mod ci;
pub mod deploy;
pub mod generate;
pub mod init;
pub mod setup;
