/// Candidates shown per page in list views
pub const PAGE_SIZE: usize = 5;

/// Default base URL of the remote candidate store
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

/// Upper bound of the reviewer rating scale
pub const MAX_RATING: f64 = 5.0;

/// Separator used when joining skill tokens for export
pub const SKILL_SEPARATOR: &str = "; ";
