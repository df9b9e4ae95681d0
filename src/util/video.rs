//! Video-id utilities: random ids and watch URLs.

use rand::Rng;

/// Characters a video id may contain. 64 symbols, 6 bits per position.
pub const VIDEO_ID_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Video ids are always 11 characters.
pub const VIDEO_ID_LEN: usize = 11;

pub const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// Generate a random video id: [`VIDEO_ID_LEN`] characters sampled
/// uniformly, with replacement, from [`VIDEO_ID_ALPHABET`].
pub fn new_video_id() -> String {
    let mut rng = rand::thread_rng();
    (0..VIDEO_ID_LEN)
        .map(|_| VIDEO_ID_ALPHABET[rng.gen_range(0..VIDEO_ID_ALPHABET.len())] as char)
        .collect()
}

/// Compose the watch URL for a video id.
pub fn watch_url(id: &str) -> String {
    format!("{WATCH_URL_PREFIX}{id}")
}
