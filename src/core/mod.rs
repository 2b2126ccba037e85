pub mod pusher;

pub use crate::domain::model::{PushResponse, TokenRequest};
pub use crate::domain::ports::{ConfigProvider, TokenSink};
pub use crate::utils::error::Result;
