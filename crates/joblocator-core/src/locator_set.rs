//! The set of resolved locators handed to downstream consumers.

use serde::{Deserialize, Serialize};

use crate::field::FieldKind;
use crate::locator::Locator;

/// Resolved strings for the five menu fields, keyed the way the scraper
/// generator expects them. Unset fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,

    #[serde(default, rename = "job_title_xpath", skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default, rename = "job_location_xpath", skip_serializing_if = "Option::is_none")]
    pub job_location: Option<String>,

    #[serde(default, rename = "job_content_xpath", skip_serializing_if = "Option::is_none")]
    pub job_content: Option<String>,
}

impl LocatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the result for `field`, replacing any earlier one.
    ///
    /// Returns false for [`FieldKind::Generic`], which has no slot.
    pub fn record(&mut self, field: FieldKind, locator: &Locator) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = Some(locator.as_str().to_string());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: FieldKind) -> Option<&str> {
        match field {
            FieldKind::JobLink => self.job_link.as_deref(),
            FieldKind::CompanyLogo => self.company_logo.as_deref(),
            FieldKind::JobTitle => self.job_title.as_deref(),
            FieldKind::JobLocation => self.job_location.as_deref(),
            FieldKind::JobContent => self.job_content.as_deref(),
            FieldKind::Generic => None,
        }
    }

    /// Menu fields without a result, in menu order.
    pub fn missing(&self) -> Vec<FieldKind> {
        FieldKind::MENU
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    fn slot_mut(&mut self, field: FieldKind) -> Option<&mut Option<String>> {
        match field {
            FieldKind::JobLink => Some(&mut self.job_link),
            FieldKind::CompanyLogo => Some(&mut self.company_logo),
            FieldKind::JobTitle => Some(&mut self.job_title),
            FieldKind::JobLocation => Some(&mut self.job_location),
            FieldKind::JobContent => Some(&mut self.job_content),
            FieldKind::Generic => None,
        }
    }
}
