//! Valuation job configuration.
//!
//! # TOML Format
//!
//! ```toml
//! [trade]
//! settlement_date = "2021-12-20"
//! effective_date = "2016-12-19"
//! termination_date = "2026-12-21"
//! fixed_rate = 1.9275
//! notional = 15000000000.0
//! direction = "PAY"
//!
//! [curve.par_rates]
//! "0" = 0.988010251
//! "0.25" = 1.27
//! "5" = 1.805
//!
//! [fixings]
//! file = "cd91_fixings.json"
//!
//! [calendar]
//! name = "KRX"
//! file = "krx_holidays.json"
//! holidays = ["2021-12-31"]
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parswap_core::calendars::{CalendarData, HolidayCalendar};
use parswap_core::Date;
use parswap_curves::quotes::tenor_to_quarters;
use parswap_curves::{Curve, ParRates};
use parswap_swaps::{Direction, FixingTable, Trade};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Trade terms as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeConfig {
    /// Valuation (curve) date, `YYYY-MM-DD`.
    pub settlement_date: String,
    /// Effective date, `YYYY-MM-DD`.
    pub effective_date: String,
    /// Termination date, `YYYY-MM-DD`.
    pub termination_date: String,
    /// Fixed rate in percent.
    pub fixed_rate: f64,
    /// Notional in currency units.
    pub notional: f64,
    /// `PAY` or `REC`, any case.
    pub direction: String,
}

/// Par rate quotes keyed by tenor in years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Tenor string (`"0.25"`, `"5"`) to par rate in percent.
    #[serde(default)]
    pub par_rates: BTreeMap<String, f64>,
}

/// Floating-rate fixings, inline and/or from a JSON file.
///
/// Inline rates override file rates for the same date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixingsConfig {
    /// JSON object of ISO date to percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Inline ISO date to percent.
    #[serde(default)]
    pub rates: BTreeMap<String, f64>,
}

/// Holiday calendar, inline and/or from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Calendar name; the file's name is used when empty.
    #[serde(default)]
    pub name: String,
    /// JSON file `{ "name": .., "holidays": [..] }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Extra holiday dates, `YYYY-MM-DD`.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// A complete valuation job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationConfig {
    /// Trade terms.
    pub trade: TradeConfig,
    /// Curve quotes.
    #[serde(default)]
    pub curve: CurveConfig,
    /// Fixings for the running period.
    #[serde(default)]
    pub fixings: FixingsConfig,
    /// Business-day calendar.
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Directory side files are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

/// Everything needed to value the trade.
#[derive(Debug, Clone)]
pub struct ValuationInputs {
    /// The trade.
    pub trade: Trade,
    /// Curve built at the settlement date.
    pub curve: Curve,
    /// Fixing table.
    pub fixings: FixingTable,
}

fn read_file(path: &Path) -> ConfigResult<String> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))
}

impl ValuationConfig {
    /// Loads a configuration, choosing the parser by file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown
    /// extension or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let content = read_file(path)?;
        let mut config = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        debug!(path = %path.display(), "loaded valuation config");
        Ok(config)
    }

    /// Parses a TOML document. Side files resolve against the working directory.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parses a JSON document. Side files resolve against the working directory.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Serializes back to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Directory side files are resolved against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Overrides the side-file directory.
    #[must_use]
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Parsed settlement date.
    pub fn settlement_date(&self) -> ConfigResult<Date> {
        Ok(Date::parse(&self.trade.settlement_date)?)
    }

    /// Validated trade.
    pub fn trade(&self) -> ConfigResult<Trade> {
        let t = &self.trade;
        Ok(Trade::from_iso(
            &t.effective_date,
            &t.termination_date,
            t.fixed_rate,
            t.notional,
            &t.direction,
        )?)
    }

    /// Par rate quotes.
    pub fn par_rates(&self) -> ConfigResult<ParRates> {
        Ok(ParRates::try_from(self.curve.par_rates.clone())?)
    }

    /// Fixing table, file entries first, then inline entries.
    pub fn fixings(&self) -> ConfigResult<FixingTable> {
        let mut table = match &self.fixings.file {
            Some(file) => {
                let path = self.resolve(file);
                serde_json::from_str::<FixingTable>(&read_file(&path)?)?
            }
            None => FixingTable::new(),
        };
        let inline = FixingTable::from_iso_pairs(
            self.fixings
                .rates
                .iter()
                .map(|(date, rate)| (date.as_str(), *rate)),
        )?;
        for (date, rate) in inline.iter() {
            table.insert(date, rate)?;
        }
        Ok(table)
    }

    /// Holiday calendar, file holidays plus inline holidays.
    pub fn calendar(&self) -> ConfigResult<HolidayCalendar> {
        let mut data = match &self.calendar.file {
            Some(file) => {
                let path = self.resolve(file);
                serde_json::from_str::<CalendarData>(&read_file(&path)?)?
            }
            None => CalendarData::default(),
        };
        if !self.calendar.name.is_empty() {
            data.name.clone_from(&self.calendar.name);
        }
        data.holidays.extend(self.calendar.holidays.iter().cloned());
        Ok(HolidayCalendar::from_calendar_data(data)?)
    }

    /// Validates, then builds the trade, curve and fixings.
    ///
    /// # Errors
    ///
    /// Returns every validation problem at once, or the first load/build
    /// failure.
    pub fn load(&self) -> ConfigResult<ValuationInputs> {
        self.validate_or_error()?;

        let trade = self.trade()?;
        let calendar = self.calendar()?;
        let curve = Curve::build(self.settlement_date()?, self.par_rates()?, Arc::new(calendar))?;
        let fixings = self.fixings()?;

        info!(
            settlement = %curve.settlement_date(),
            calendar = curve.calendar().name(),
            quotes = curve.par_rates().len(),
            fixings = fixings.len(),
            "valuation inputs loaded"
        );

        Ok(ValuationInputs {
            trade,
            curve,
            fixings,
        })
    }
}

fn check_date(errors: &mut Vec<ValidationError>, field: &str, value: &str) -> Option<Date> {
    match Date::parse(value) {
        Ok(date) => Some(date),
        Err(e) => {
            errors.push(ValidationError::new(field, e.to_string()));
            None
        }
    }
}

impl Validate for ValuationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let t = &self.trade;

        check_date(&mut errors, "trade.settlement_date", &t.settlement_date);
        let effective = check_date(&mut errors, "trade.effective_date", &t.effective_date);
        let termination = check_date(&mut errors, "trade.termination_date", &t.termination_date);
        if let (Some(effective), Some(termination)) = (effective, termination) {
            if termination <= effective {
                errors.push(ValidationError::new(
                    "trade.termination_date",
                    "must be after effective_date",
                ));
            }
        }

        if !t.fixed_rate.is_finite() {
            errors.push(ValidationError::new("trade.fixed_rate", "must be a finite number"));
        }
        if !t.notional.is_finite() || t.notional <= 0.0 {
            errors.push(ValidationError::new("trade.notional", "must be positive"));
        }
        if let Err(e) = t.direction.parse::<Direction>() {
            errors.push(ValidationError::new("trade.direction", e.to_string()));
        }

        if self.curve.par_rates.len() < 2 {
            errors.push(ValidationError::new(
                "curve.par_rates",
                "need at least two quotes",
            ));
        }
        for (key, rate) in &self.curve.par_rates {
            let field = format!("curve.par_rates.\"{key}\"");
            match key.trim().parse::<f64>() {
                Ok(tenor) => {
                    if let Err(e) = tenor_to_quarters(tenor) {
                        errors.push(ValidationError::new(field.clone(), e.to_string()));
                    }
                }
                Err(_) => errors.push(ValidationError::new(field.clone(), "tenor is not a number")),
            }
            if !rate.is_finite() {
                errors.push(ValidationError::new(field, "rate must be finite"));
            }
        }

        for (key, rate) in &self.fixings.rates {
            let field = format!("fixings.rates.\"{key}\"");
            if let Err(e) = Date::parse(key.get(..10).unwrap_or(key)) {
                errors.push(ValidationError::new(field.clone(), e.to_string()));
            }
            if !rate.is_finite() {
                errors.push(ValidationError::new(field, "rate must be finite"));
            }
        }

        for (i, holiday) in self.calendar.holidays.iter().enumerate() {
            check_date(&mut errors, &format!("calendar.holidays[{i}]"), holiday);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parswap_core::calendars::Calendar;
    use std::io::Write;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
        [trade]
        settlement_date = "2021-12-20"
        effective_date = "2016-12-19"
        termination_date = "2026-12-21"
        fixed_rate = 1.9275
        notional = 15000000000.0
        direction = "pay"

        [curve.par_rates]
        "0" = 0.988010251
        "0.25" = 1.27
        "1" = 1.5514285714
        "5" = 1.805
        "20" = 1.5525

        [fixings]
        file = "cd91.json"

        [fixings.rates]
        "2021-12-17" = 1.30

        [calendar]
        name = "KRX"
        file = "holidays.json"
        holidays = ["2022-01-31"]
    "#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    fn sample_dir() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "cd91.json", r#"{"2021-12-16": 1.28, "2021-12-17": 1.29}"#);
        write(
            dir.path(),
            "holidays.json",
            r#"{"name": "file", "holidays": ["2021-12-31"]}"#,
        );
        let config = write(dir.path(), "job.toml", SAMPLE);
        (dir, config)
    }

    #[test]
    fn test_from_file_resolves_side_files() {
        let (_dir, path) = sample_dir();
        let config = ValuationConfig::from_file(&path).unwrap();
        assert!(config.is_valid(), "{:?}", config.validate());

        let fixings = config.fixings().unwrap();
        assert_eq!(fixings.len(), 2);
        // Inline value wins over the file.
        assert_eq!(fixings.get(Date::parse("2021-12-17").unwrap()), Some(1.30));

        let calendar = config.calendar().unwrap();
        assert_eq!(calendar.name(), "KRX");
        assert_eq!(calendar.holiday_count(), 2);

        let inputs = config.load().unwrap();
        assert_eq!(inputs.trade.direction(), Direction::Pay);
        assert_eq!(inputs.curve.par_rates().len(), 5);
        assert_eq!(
            inputs.curve.settlement_date(),
            Date::parse("2021-12-20").unwrap()
        );
    }

    #[test]
    fn test_json_config() {
        let dir = TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "job.json",
            r#"{
                "trade": {
                    "settlement_date": "2021-12-20",
                    "effective_date": "2022-03-21",
                    "termination_date": "2025-03-21",
                    "fixed_rate": 1.8,
                    "notional": 1000000.0,
                    "direction": "REC"
                },
                "curve": { "par_rates": { "0": 1.0, "1": 1.5, "5": 1.8 } }
            }"#,
        );
        let config = ValuationConfig::from_file(&path).unwrap();
        let inputs = config.load().unwrap();
        assert!(inputs.fixings.is_empty());
        assert_eq!(inputs.curve.calendar().name(), "");
        assert_eq!(inputs.trade.direction(), Direction::Receive);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(dir.path(), "job.yaml", "trade: {}");
        assert!(matches!(
            ValuationConfig::from_file(&path),
            Err(ConfigError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            ValuationConfig::from_file("/nonexistent/job.toml"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = ValuationConfig::from_toml_str(
            r#"
            [trade]
            settlement_date = "2021-12-20"
            effective_date = "2016-12-19"
            termination_date = "2016-13-01"
            fixed_rate = 1.9275
            notional = -5.0
            direction = "BUY"

            [curve.par_rates]
            "0.3" = 1.0
        "#,
        )
        .unwrap();

        let errors = config.validate();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"trade.termination_date"));
        assert!(fields.contains(&"trade.notional"));
        assert!(fields.contains(&"trade.direction"));
        assert!(fields.contains(&"curve.par_rates"));
        assert!(fields.contains(&"curve.par_rates.\"0.3\""));

        assert!(matches!(
            config.load(),
            Err(ConfigError::MultipleValidationErrors(_))
        ));
    }

    #[test]
    fn test_missing_side_file() {
        let config = ValuationConfig::from_toml_str(SAMPLE)
            .unwrap()
            .with_base_dir("/nonexistent");
        assert!(matches!(config.fixings(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ValuationConfig::from_toml_str(SAMPLE).unwrap();
        let text = config.to_toml_string().unwrap();
        let back = ValuationConfig::from_toml_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
