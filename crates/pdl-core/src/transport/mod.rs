//! Opening a locator as a readable byte stream.
//!
//! The orchestrator only needs "give me a reader or tell me you couldn't";
//! [`CurlTransport`] is the default implementation (http, https, file).

mod curl_transport;
mod error;

pub use curl_transport::CurlTransport;
pub use error::TransportError;

use std::io::Read;

pub trait Transport {
    /// Open `url` for reading. Any error means the URL is skipped.
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, TransportError> {
        (**self).open(url)
    }
}
