/// Channel resolved when `diagnose` is run without `--channel`.
pub const DEFAULT_CHANNEL_ID: &str = "UC-sgxA1fdoxteLNzRAUHIxA";

/// Stable channel used by the reachability probe (Google Developers).
pub const PROBE_CHANNEL_ID: &str = "UC_x5XG1OV2P6uZZ5FSM9Ttw";

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";
pub const CHANNEL_URL_BASE: &str = "https://www.youtube.com/channel";

pub const SEARCH_MAX_RESULTS: u32 = 5;

pub const ENV_API_KEY: &str = "YT_API_KEY";
pub const ENV_API_BASE: &str = "YT_API_BASE";
pub const ENV_TIMEOUT_MS: &str = "YT_TIMEOUT_MS";

pub const MISSING_KEY_ERROR: &str =
    "No API key provided. Set YT_API_KEY in the environment or pass --key for testing.";

pub fn channel_url(id: &str) -> String {
    format!("{}/{}", CHANNEL_URL_BASE, id)
}
