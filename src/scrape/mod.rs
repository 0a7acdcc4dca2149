pub mod contact_patterns;
pub mod extractor;
pub mod probe;
pub mod validator;

pub use extractor::{Extract, PageExtractor};
pub use probe::{HttpProbe, Probe};
pub use validator::is_valid_url;
