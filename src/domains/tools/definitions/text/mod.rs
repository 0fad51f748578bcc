//! Text codec tool family.

pub mod base64;
pub mod entities;
pub mod url;

pub use self::base64::Base64Tool;
pub use entities::HtmlEntitiesTool;
pub use url::UrlCodecTool;
