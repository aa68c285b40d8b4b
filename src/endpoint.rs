//! Endpoint path templates for the job-search backend.

pub const COMPANIES: &str = "/companies";
pub const COMPANY_DETAILS: &str = "/companies/:slug";
pub const JOBS: &str = "/jobs";
pub const REVIEWS: &str = "/reviews/:companyName";
pub const INDUSTRIES: &str = "/industries";
pub const ROOT: &str = "/";
pub const RELOAD_DATA: &str = "/reload-data";

/// Substitute a named placeholder in a path template.
///
/// This is a literal replacement of the first occurrence: the value is not
/// escaped, and templates with a repeated placeholder are not supported.
/// Kept deliberately for wire compatibility with the backend's route table.
pub fn render(template: &str, placeholder: &str, value: &str) -> String {
    template.replacen(placeholder, value, 1)
}
