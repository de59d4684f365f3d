//! libcurl-backed transport.
//!
//! Curl pushes body data through a write callback; the orchestrator wants to
//! pull. The transfer runs on a worker thread and forwards chunks over a
//! bounded channel, so the reader applies backpressure to the socket.

use std::cell::Cell;
use std::io::{self, Read};
use std::str;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;
use std::time::Duration;

use super::{Transport, TransportError};

/// Chunks buffered between the curl worker and the reader.
const CHANNEL_DEPTH: usize = 16;

/// Transfer options applied to every request.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    pub connect_timeout: Duration,
    /// Abort if throughput stays below this many bytes/sec for `low_speed_time`.
    pub low_speed_limit: u32,
    pub low_speed_time: Duration,
    pub max_redirections: u32,
    pub user_agent: String,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            low_speed_limit: 1024,
            low_speed_time: Duration::from_secs(60),
            max_redirections: 10,
            user_agent: concat!("pdl/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

enum Event {
    /// Final status code (0 for schemes without one, e.g. `file://`).
    Response(u32),
    Data(Vec<u8>),
    Failed(curl::Error),
    Done,
}

impl Transport for CurlTransport {
    fn open(&self, url: &str) -> Result<Box<dyn Read + Send>, TransportError> {
        let (tx, rx) = mpsc::sync_channel(CHANNEL_DEPTH);
        let opts = self.clone();
        let url_owned = url.to_string();
        thread::Builder::new()
            .name("pdl-transfer".to_string())
            .spawn(move || run_transfer(&url_owned, &opts, &tx))?;

        match rx.recv() {
            Ok(Event::Response(code)) if code == 0 || (200..300).contains(&code) => {
                tracing::debug!(url, code, "stream opened");
                Ok(Box::new(CurlBody::new(rx)))
            }
            Ok(Event::Response(code)) => Err(TransportError::Http(code)),
            Ok(Event::Failed(e)) => Err(TransportError::Curl(e)),
            Ok(Event::Data(_)) | Ok(Event::Done) | Err(_) => Err(TransportError::Closed),
        }
    }
}

/// Worker body: performs the transfer and reports through `tx`.
fn run_transfer(url: &str, opts: &CurlTransport, tx: &SyncSender<Event>) {
    let responded = Cell::new(false);
    match perform(url, opts, tx, &responded) {
        Ok(code) => {
            if !responded.get() {
                let _ = tx.send(Event::Response(code));
            }
            let _ = tx.send(Event::Done);
        }
        Err(e) => {
            // Receiver may already be gone (reader dropped); nothing to report to.
            let _ = tx.send(Event::Failed(e));
        }
    }
}

fn perform(
    url: &str,
    opts: &CurlTransport,
    tx: &SyncSender<Event>,
    responded: &Cell<bool>,
) -> Result<u32, curl::Error> {
    let status = Cell::new(0u32);

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.fail_on_error(true)?;
    easy.useragent(&opts.user_agent)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.low_speed_limit(opts.low_speed_limit)?;
    easy.low_speed_time(opts.low_speed_time)?;

    {
        let mut transfer = easy.transfer();
        // Track the last status line; with redirects the final one wins.
        transfer.header_function(|data| {
            if let Some(code) = str::from_utf8(data).ok().and_then(parse_status_line) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            if !responded.get() {
                responded.set(true);
                if tx.send(Event::Response(status.get())).is_err() {
                    return Ok(0);
                }
            }
            match tx.send(Event::Data(data.to_vec())) {
                Ok(()) => Ok(data.len()),
                // Reader dropped: short count aborts the transfer.
                Err(_) => Ok(0),
            }
        })?;
        transfer.perform()?;
    }

    easy.response_code()
}

/// `"HTTP/1.1 200 OK"` -> `Some(200)`.
fn parse_status_line(line: &str) -> Option<u32> {
    let mut parts = line.split_whitespace();
    let proto = parts.next()?;
    if !proto.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse().ok()
}

/// Pull side of a running curl transfer.
struct CurlBody {
    rx: Receiver<Event>,
    buf: Vec<u8>,
    pos: usize,
    done: bool,
}

impl CurlBody {
    fn new(rx: Receiver<Event>) -> Self {
        Self {
            rx,
            buf: Vec::new(),
            pos: 0,
            done: false,
        }
    }
}

impl Read for CurlBody {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        while self.pos >= self.buf.len() {
            if self.done {
                return Ok(0);
            }
            match self.rx.recv() {
                Ok(Event::Data(data)) => {
                    self.buf = data;
                    self.pos = 0;
                }
                Ok(Event::Response(_)) => {}
                Ok(Event::Done) => self.done = true,
                Ok(Event::Failed(e)) => {
                    self.done = true;
                    return Err(io::Error::new(io::ErrorKind::Other, e));
                }
                Err(_) => {
                    self.done = true;
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "transfer worker exited mid-stream",
                    ));
                }
            }
        }
        let n = out.len().min(self.buf.len() - self.pos);
        out[..n].copy_from_slice(&self.buf[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
