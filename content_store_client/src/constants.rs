pub const CONTENT_API_KEY_HEADER: &str = "x-content-api-key";
