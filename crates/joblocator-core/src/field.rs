//! Job-posting field kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The job-posting attribute a locator is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    JobLink,
    CompanyLogo,
    JobTitle,
    JobLocation,
    JobContent,
    /// Any field without a dedicated resolver.
    Generic,
}

impl FieldKind {
    /// Context-menu order.
    pub const MENU: [FieldKind; 5] = [
        FieldKind::CompanyLogo,
        FieldKind::JobLink,
        FieldKind::JobTitle,
        FieldKind::JobLocation,
        FieldKind::JobContent,
    ];

    /// Map a field name to its kind.
    ///
    /// Matching ignores case and treats `-`, `_` and whitespace as absent, so
    /// `"job-link"`, `"Job Link"` and `"JOB_LINK"` all name the job link.
    /// Unknown names map to [`FieldKind::Generic`].
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !(c.is_whitespace() || *c == '-' || *c == '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "joblink" => FieldKind::JobLink,
            "companylogo" => FieldKind::CompanyLogo,
            "jobtitle" => FieldKind::JobTitle,
            "joblocation" => FieldKind::JobLocation,
            "jobcontent" => FieldKind::JobContent,
            _ => FieldKind::Generic,
        }
    }

    /// Context-menu item id.
    pub fn menu_id(&self) -> &'static str {
        match self {
            FieldKind::JobLink => "job-link",
            FieldKind::CompanyLogo => "company-logo",
            FieldKind::JobTitle => "job-title",
            FieldKind::JobLocation => "job-location",
            FieldKind::JobContent => "job-content",
            FieldKind::Generic => "generic",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::JobLink => "Job Link",
            FieldKind::CompanyLogo => "Company Logo",
            FieldKind::JobTitle => "Job Title",
            FieldKind::JobLocation => "Job Location",
            FieldKind::JobContent => "Job Content",
            FieldKind::Generic => "Generic",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.menu_id())
    }
}
