//! The API endpoints URIs.

/// The root route which serves the generator parameter form.
pub const ROOT: &str = "/";
/// The page describing what the app is for.
pub const ABOUT_VIEW: &str = "/about";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for generating transactions and rendering the preview.
pub const GENERATE_API: &str = "/api/generate";
/// The route for downloading the previewed transactions as a file.
pub const DOWNLOAD_API: &str = "/api/download";
