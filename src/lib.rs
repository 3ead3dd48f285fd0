// Webs - a builder-configured HTTP client
//
// This library re-exports the client, its builder, the response wrapper and
// the mock registry from `webs-client`.

// Re-export client functionality
pub use webs_client::*;

// Prelude for common imports
pub mod prelude {
    pub use webs_client::prelude::*;
}
