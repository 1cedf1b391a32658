pub mod show;
pub mod user;

pub use crate::domain::model::{Contact, Page, Show, Target, User};
pub use crate::domain::ports::{ConfigProvider, Resource};
pub use crate::utils::error::Result;
