//! Startup network fetches
//!
//! Non-blocking fetch of the repository listing, the recently-played track
//! and the album art, using background threads polled once per frame. The
//! main loop never blocks on the network; each operation lands in an
//! [`AsyncOp`] the app checks while it keeps rendering.

use std::io::Read;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;

use super::{RepoRecord, TrackRecord};
use crate::config::{repos_url, MAX_ART_BYTES, MAX_BODY_BYTES, TRACK_FEED_URL};

/// Sent with every request; the GitHub API rejects anonymous user agents
const USER_AGENT: &str = concat!("repo-museum/", env!("CARGO_PKG_VERSION"));

/// Error type for the content fetches
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Transport-level failure or non-2xx status
    Http(String),
    /// Response body was not the expected JSON shape
    Parse(String),
    /// Album art bytes could not be decoded
    Art(String),
    /// Worker thread went away without reporting a result
    Cancelled,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(e) => write!(f, "HTTP error: {}", e),
            FetchError::Parse(e) => write!(f, "Parse error: {}", e),
            FetchError::Art(e) => write!(f, "Art decode error: {}", e),
            FetchError::Cancelled => write!(f, "Fetch cancelled"),
        }
    }
}

/// A handle to a pending background operation that can be polled per frame
pub struct AsyncOp<T> {
    receiver: Receiver<Result<T, FetchError>>,
    result: Option<Result<T, FetchError>>,
}

impl<T: Send + 'static> AsyncOp<T> {
    /// Run `job` on a background thread and hand back a pollable handle
    fn spawn(job: impl FnOnce() -> Result<T, FetchError> + Send + 'static) -> Self {
        let (sender, receiver) = channel();
        thread::spawn(move || {
            let _ = sender.send(job());
        });
        Self {
            receiver,
            result: None,
        }
    }

    /// Check whether the operation has finished (polls the channel)
    pub fn is_complete(&mut self) -> bool {
        if self.result.is_some() {
            return true;
        }

        match self.receiver.try_recv() {
            Ok(result) => {
                self.result = Some(result);
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                // Worker panicked or dropped the sender
                self.result = Some(Err(FetchError::Cancelled));
                true
            }
        }
    }

    /// Take the result, consuming the handle
    pub fn take(mut self) -> Result<T, FetchError> {
        if self.result.is_none() {
            if let Ok(result) = self.receiver.try_recv() {
                self.result = Some(result);
            }
        }
        self.result.unwrap_or(Err(FetchError::Cancelled))
    }
}

/// Both startup fetches, polled together until the scene can be built
pub struct PendingContent {
    pub repos: AsyncOp<Vec<RepoRecord>>,
    pub track: AsyncOp<TrackRecord>,
}

impl PendingContent {
    /// True once both fetches have reported in
    pub fn is_complete(&mut self) -> bool {
        let repos_done = self.repos.is_complete();
        let track_done = self.track.is_complete();
        repos_done && track_done
    }

    /// Split into the primary result and the optional track.
    ///
    /// The track fetch degrades silently: a failure is logged and the
    /// museum simply gets no track panel.
    pub fn take(self) -> (Result<Vec<RepoRecord>, FetchError>, Option<TrackRecord>) {
        let repos = self.repos.take();
        let track = match self.track.take() {
            Ok(track) => Some(track),
            Err(e) => {
                eprintln!("Now-playing fetch failed: {}", e);
                None
            }
        };
        (repos, track)
    }
}

/// Decoded album art, ready to upload as a texture
pub struct AlbumArt {
    pub width: u16,
    pub height: u16,
    pub rgba: Vec<u8>,
}

/// Pending album art download + decode
pub type PendingArt = AsyncOp<AlbumArt>;

/// Start both content fetches on background threads
pub fn begin_content_fetch() -> PendingContent {
    PendingContent {
        repos: AsyncOp::spawn(|| {
            let body = http_get_string(&repos_url())?;
            parse_repositories(&body)
        }),
        track: AsyncOp::spawn(|| {
            let body = http_get_string(TRACK_FEED_URL)?;
            parse_track(&body)
        }),
    }
}

/// Start downloading and decoding album art for the track panel
pub fn begin_art_fetch(url: &str) -> PendingArt {
    let url = url.to_string();
    AsyncOp::spawn(move || fetch_album_art(&url))
}

/// Decode the repository listing payload (a JSON array)
pub fn parse_repositories(body: &str) -> Result<Vec<RepoRecord>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(format!("repository list: {}", e)))
}

/// Decode the recently-played payload (a single JSON object)
pub fn parse_track(body: &str) -> Result<TrackRecord, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Parse(format!("track: {}", e)))
}

/// GET a text body with the size cap applied
fn http_get_string(url: &str) -> Result<String, FetchError> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .set("Accept", "application/json")
        .call()
        .map_err(map_ureq_error)?;

    let mut body = String::new();
    response
        .into_reader()
        .take(MAX_BODY_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| FetchError::Http(format!("reading body: {}", e)))?;
    Ok(body)
}

/// Download and decode album art into RGBA pixels
fn fetch_album_art(url: &str) -> Result<AlbumArt, FetchError> {
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(map_ureq_error)?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_ART_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| FetchError::Http(format!("reading art bytes: {}", e)))?;

    let image = image::load_from_memory(&bytes)
        .map_err(|e| FetchError::Art(e.to_string()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(FetchError::Art(format!(
            "unusable art dimensions {}x{}",
            width, height
        )));
    }

    Ok(AlbumArt {
        width: width as u16,
        height: height as u16,
        rgba: image.into_raw(),
    })
}

/// Collapse ureq's error tree into a displayable message, keeping the
/// response body for status errors since the APIs explain themselves there
fn map_ureq_error(e: ureq::Error) -> FetchError {
    match e {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            FetchError::Http(format!("status {}: {}", code, body))
        }
        other => FetchError::Http(other.to_string()),
    }
}
