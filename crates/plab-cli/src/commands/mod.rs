pub mod dispatch;
pub mod download;
pub mod export;
pub mod insights;
pub mod recommend;
pub mod setup;
pub mod shared;
pub mod submit;
pub mod wizard;
