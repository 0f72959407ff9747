//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_heuristics(config, &mut result);

        result
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.trim();
        if level.is_empty() {
            result.add_error(ValidationError::new("logging.level", "Log level cannot be empty"));
        } else if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
            // Anything else is treated as an EnvFilter directive.
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!("'{}' is not a plain level, using it as a filter directive", level),
            ));
        }

        if let Some(dir) = &config.logging.dir {
            if dir.trim().is_empty() {
                result.add_error(ValidationError::new("logging.dir", "Log directory cannot be empty"));
            }
        }
    }

    fn validate_heuristics(config: &Config, result: &mut ValidationResult) {
        let heuristics = &config.heuristics;

        if heuristics.max_depth == 0 {
            result.add_error(ValidationError::new(
                "heuristics.max_depth",
                "Maximum depth must be greater than 0",
            ));
        }

        if heuristics.link.structural_tags.is_empty() {
            result.add_warning(ValidationWarning::new(
                "heuristics.link.structural_tags",
                "No structural tags configured, short links are never meaningful",
            ));
        }

        let logo = &heuristics.logo;
        if logo.header_tags.is_empty()
            && logo.header_class_tokens.is_empty()
            && logo.header_id_tokens.is_empty()
        {
            result.add_warning(ValidationWarning::new(
                "heuristics.logo",
                "Header zone detection is disabled",
            ));
        }
        for (field, tokens) in [
            ("heuristics.logo.header_class_tokens", &logo.header_class_tokens),
            ("heuristics.logo.header_id_tokens", &logo.header_id_tokens),
        ] {
            if tokens.iter().any(|t| t.is_empty()) {
                result.add_error(ValidationError::new(field, "Empty token matches every element"));
            }
        }

        let content = &heuristics.content;
        if content.block_tags.is_empty() {
            result.add_error(ValidationError::new(
                "heuristics.content.block_tags",
                "At least one block tag is required",
            ));
        }
        if content.keywords.is_empty() {
            result.add_warning(ValidationWarning::new(
                "heuristics.content.keywords",
                "No content keywords configured, only structural checks apply",
            ));
        }
        if content.keywords.iter().any(|k| k.is_empty()) {
            result.add_error(ValidationError::new(
                "heuristics.content.keywords",
                "Empty keyword matches every element",
            ));
        }
        if content.min_block_siblings == 0 {
            result.add_error(ValidationError::new(
                "heuristics.content.min_block_siblings",
                "Must be greater than 0",
            ));
        }
        if content.min_block_children == 0 {
            result.add_error(ValidationError::new(
                "heuristics.content.min_block_children",
                "Must be greater than 0",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
