//! Media byte storage.
//!
//! Generated and uploaded videos are persisted as files and addressed by
//! locators the gallery records and the player consumes directly.

mod error;
mod fs_store;
mod traits;

pub use error::MediaError;
pub use fs_store::{FsMediaStore, MEDIA_URL_PREFIX};
pub use traits::{MediaLocator, MediaStore};
