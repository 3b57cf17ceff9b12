//! URL records with an editable, re-serializable query string
//!
//! A [`UrlRecord`] holds the parts of a URL as split by the host URL parser
//! (see [`Location`]) together with its query string decoded into an
//! ordered [`QueryMap`]. Editing the map and calling
//! [`UrlRecord::to_url_string`] produces the updated URL.
//!
//! ## Encodings
//!
//! Query keys and values can be percent-encoded in one of two ways,
//! selected per record through [`Config`]:
//!
//! - [`EncodingMode::Utf8`] (the default) escapes the UTF-8 bytes of
//!   every character outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`, like
//!   `encodeURIComponent`.
//! - [`EncodingMode::Iso`] writes one `%XX` per Latin-1 code point, like
//!   `escape`, for servers that expect ISO-8859-1 query strings.
//!
//! Both write a space as `+`.
//!
//! ## Flags
//!
//! A parameter without a value (`?verbose`) or with an empty value
//! (`?verbose=`) is parsed as [`QueryValue::Flag`]. Flags are serialized
//! as `verbose=true`, so they do not round-trip unchanged.
//!
//! ## Usage
//!
//! ```
//! use urlqs::{Config, Location, QueryValue};
//!
//! let current = Location::parse("https://shop.example/list?sort=price", None);
//!
//! let mut record = Config::new()
//!     .parse_url("/search?q=caf%C3%A9+cr%C3%A8me&in_stock", &current)
//!     .unwrap();
//! assert_eq!(record.query.get("q"), Some(&QueryValue::from("café crème")));
//! assert_eq!(record.query.get("in_stock"), Some(&QueryValue::Flag));
//!
//! record.query.remove("in_stock");
//! record.query.insert("page", "3");
//! assert_eq!(
//!     record.to_url_string(),
//!     "https://shop.example/search?q=caf%C3%A9+cr%C3%A8me&page=3"
//! );
//! ```

#[cfg(feature = "axum")]
pub mod axum;

mod codec;
mod config;
mod de;
mod error;
mod location;
mod map;
mod record;
mod ser;
mod utils;

pub use codec::iso;
#[doc(inline)]
pub use codec::PercentCodec;
#[doc(inline)]
pub use config::{Config, EncodingMode};
#[doc(inline)]
pub use de::{from_str, parse};
pub use error::{Error, Result};
#[doc(inline)]
pub use location::Location;
#[doc(inline)]
pub use map::{QueryMap, QueryValue};
#[doc(inline)]
pub use record::UrlRecord;
#[doc(inline)]
pub use ser::{serialize, serialize_to_writer, to_string, to_writer};
