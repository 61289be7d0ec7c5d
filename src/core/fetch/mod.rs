mod http_source;
mod source;

pub use http_source::HttpManifestSource;
pub use source::ManifestSource;
