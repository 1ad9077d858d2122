pub mod init;
pub mod max_score;
pub mod score;
pub mod validate;
