use crate::Result;
use crate::records::MatchType;
use crate::views::ViewFilter;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "kwmatch.toml";

#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum number of distinct match types a keyword needs to appear in the filtered views
    #[serde(default = "default_min_match_types")]
    pub min_match_types: usize,

    /// Match type a keyword must have been seen with to appear in the filtered views
    #[serde(default = "default_required_match_type")]
    pub required_match_type: String,

    /// Keywords to restrict search-term reports to (empty means all)
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Drop rows the report query would have excluded
    #[serde(default = "default_true")]
    pub apply_query_filters: bool,

    /// Render metrics that were never reported as empty cells
    #[serde(default)]
    pub blank_not_available: bool,

    /// Account for rows that do not carry a customer id
    #[serde(default)]
    pub default_account: Option<String>,
}

const fn default_min_match_types() -> usize {
    2
}

fn default_required_match_type() -> String {
    "BROAD".to_string()
}

const fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `kwmatch.toml` is looked up in `base_dir` and the
    /// defaults are used when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading kwmatch configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    // No config file found, use defaults
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading kwmatch configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config.validate()?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// The qualification filter for the filtered views.
    ///
    /// # Errors
    ///
    /// Returns an error if `required_match_type` is not a known match type label
    pub fn view_filter(&self) -> Result<ViewFilter> {
        let required = MatchType::parse_known(&self.required_match_type).ok_or_else(|| {
            app_err!(
                "required_match_type must be one of EXACT, PHRASE, BROAD or BROAD_LEGACY, got '{}'",
                self.required_match_type
            )
        })?;

        Ok(ViewFilter::new(self.min_match_types, required))
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the filter settings are out of range
    fn validate(&self) -> Result<()> {
        if self.min_match_types == 0 {
            return Err(app_err!("min_match_types must be at least 1, got 0"));
        }

        let _ = self.view_filter()?;

        if self.keywords.iter().any(|keyword| keyword.trim().is_empty()) {
            return Err(app_err!("keywords must not contain empty entries"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text).into_app_err("parsing test configuration")?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        config.validate().unwrap();
        assert_eq!(config.min_match_types, 2);
        assert_eq!(config.required_match_type, "BROAD");
        assert!(config.keywords.is_empty());
        assert!(config.apply_query_filters);
        assert!(!config.blank_not_available);
        assert_eq!(config.default_account, None);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.min_match_types, 2);
        assert!(config.apply_query_filters);
        assert_eq!(config.view_filter().unwrap(), ViewFilter::default());
    }

    #[test]
    fn test_custom_filter() {
        let config = parse("min_match_types = 3\nrequired_match_type = \"EXACT\"\n").unwrap();
        assert_eq!(config.view_filter().unwrap(), ViewFilter::new(3, MatchType::Exact));
    }

    #[test]
    fn test_zero_min_match_types_is_rejected() {
        let err = parse("min_match_types = 0\n").unwrap_err();
        assert!(err.to_string().contains("min_match_types must be at least 1"));
    }

    #[test]
    fn test_unknown_match_type_is_rejected() {
        let err = parse("required_match_type = \"broad\"\n").unwrap_err();
        assert!(err.to_string().contains("required_match_type must be one of"));
    }

    #[test]
    fn test_empty_keyword_is_rejected() {
        let err = parse("keywords = [\"shoe\", \" \"]\n").unwrap_err();
        assert!(err.to_string().contains("keywords must not contain empty entries"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let _ = parse("unknown_field = 1\n").unwrap_err();
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call mkdir on this platform")]
    fn test_load_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let config = Config::load(&base, None).unwrap();
        assert_eq!(config.min_match_types, 2);
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call mkdir on this platform")]
    fn test_load_file_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::write(base.join(CONFIG_FILE_NAME), "blank_not_available = true\ndefault_account = \"42\"\n").unwrap();

        let config = Config::load(&base, None).unwrap();
        assert!(config.blank_not_available);
        assert_eq!(config.default_account.as_deref(), Some("42"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call mkdir on this platform")]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("missing.toml")).unwrap();
        let err = Config::load(Utf8Path::new("."), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("reading kwmatch configuration file"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call mkdir on this platform")]
    fn test_save_default_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join(CONFIG_FILE_NAME)).unwrap();
        Config::save_default(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);
        let _ = Config::load(Utf8Path::new("."), Some(&path)).unwrap();
    }
}
