pub mod channel;
pub mod scripted;
