// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://ssr1.scrape.center";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) MovieScraper/1.0";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Retry policy: total attempts per request, statuses worth retrying,
// exponential backoff factor (seconds).
pub const RETRY_TOTAL: u32 = 3;
pub const RETRY_STATUSES: [u16; 4] = [500, 502, 503, 504];
pub const BACKOFF_FACTOR: u64 = 1;

// Listing shape
pub const PAGE_COUNT: u32 = 10;

// Local artifacts
pub const STORE_DIR: &str = ".store";
pub const PAGES_SUBDIR: &str = "pages";
pub const DATASET_FILE: &str = "movies.csv";
pub const DEBUG_LOG_FILE: &str = "debug.log";
pub const STORE_SEP: char = ',';

// Dataset shape
pub const DATASET_HEADERS: [&str; 6] =
    ["Title", "Score", "Categories", "Region", "Runtime", "ReleaseDate"];
pub const CATEGORY_SEP: char = '|';
