//! Rule configuration.
//!
//! Every board constant the engine uses lives in `RuleSet`: track length,
//! home-stretch length, start and entry cells, safe cells and the dice
//! rules. `RuleSet::default()` is the reference two-color board.
//!
//! Rule sets can be loaded from TOML. Missing keys fall back to the
//! reference values, so a file only needs to list what it changes:
//!
//! ```
//! use ludo_engine::RuleSet;
//!
//! let rules = RuleSet::from_toml_str("stretch_len = 6").unwrap();
//! assert_eq!(rules.stretch_len, 6);
//! assert_eq!(rules.track_len, 52);
//! ```

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::color::{Color, ColorMap};

/// Errors that can occur when loading or validating a rule set.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read rules file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("rule validation error: {0}")]
    Validation(String),
}

/// Board geometry and dice rules.
///
/// Cells are numbered `0..track_len`. Home-stretch offsets are 1-indexed,
/// and a token finishes by moving exactly `stretch_len + 1` past its entry
/// cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Cells on the shared circular track.
    pub track_len: u8,

    /// Length of each color's private lane.
    pub stretch_len: u8,

    /// Tokens each color owns.
    pub tokens_per_color: usize,

    /// Sides on the die. Rolls are in `1..=die_faces`.
    pub die_faces: u8,

    /// Roll required to bring a token out of the yard.
    pub exit_roll: u8,

    /// Roll that grants another roll.
    pub bonus_roll: u8,

    /// Consecutive bonus rolls after which the turn is forfeited.
    pub max_bonus_streak: u8,

    /// Cells where no capture can happen.
    pub safe_cells: FxHashSet<u8>,

    /// Cell each color's tokens enter the track on.
    pub start_cells: ColorMap<u8>,

    /// Last track cell before each color peels off into its home stretch.
    pub home_entries: ColorMap<u8>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            track_len: 52,
            stretch_len: 5,
            tokens_per_color: 4,
            die_faces: 6,
            exit_roll: 6,
            bonus_roll: 6,
            max_bonus_streak: 3,
            safe_cells: [0, 7, 13, 19, 26, 33, 39, 45].into_iter().collect(),
            start_cells: ColorMap::from_values(0, 26),
            home_entries: ColorMap::from_values(50, 24),
        }
    }
}

impl RuleSet {
    /// Parse a rule set from TOML and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let rules: RuleSet = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load a rule set from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Render the rule set as TOML (useful for writing example rule files).
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that the rules describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_len == 0 {
            return Err(ConfigError::Validation("track_len must be > 0".into()));
        }
        if self.stretch_len == 0 || self.stretch_len == u8::MAX {
            return Err(ConfigError::Validation(
                "stretch_len must be in 1..=254".into(),
            ));
        }
        if self.tokens_per_color == 0 {
            return Err(ConfigError::Validation("tokens_per_color must be > 0".into()));
        }
        if self.die_faces == 0 {
            return Err(ConfigError::Validation("die_faces must be > 0".into()));
        }
        if !(1..=self.die_faces).contains(&self.exit_roll) {
            return Err(ConfigError::Validation(format!(
                "exit_roll must be in 1..={}",
                self.die_faces
            )));
        }
        if !(1..=self.die_faces).contains(&self.bonus_roll) {
            return Err(ConfigError::Validation(format!(
                "bonus_roll must be in 1..={}",
                self.die_faces
            )));
        }
        if self.max_bonus_streak == 0 {
            return Err(ConfigError::Validation("max_bonus_streak must be > 0".into()));
        }
        if let Some(cell) = self.safe_cells.iter().find(|&&c| c >= self.track_len) {
            return Err(ConfigError::Validation(format!(
                "safe cell {} is outside the track",
                cell
            )));
        }
        for color in Color::ALL {
            if self.start_cells[color] >= self.track_len {
                return Err(ConfigError::Validation(format!(
                    "start cell for {} is outside the track",
                    color
                )));
            }
            if self.home_entries[color] >= self.track_len {
                return Err(ConfigError::Validation(format!(
                    "home entry for {} is outside the track",
                    color
                )));
            }
            if self.home_entries[color] == self.start_cells[color] {
                return Err(ConfigError::Validation(format!(
                    "home entry for {} must differ from its start cell",
                    color
                )));
            }
        }
        Ok(())
    }

    /// Whether a track cell protects its occupants from capture.
    #[must_use]
    pub fn is_safe(&self, cell: u8) -> bool {
        self.safe_cells.contains(&cell)
    }

    /// Distance past the entry cell that finishes a token.
    #[must_use]
    pub fn finish_distance(&self) -> u16 {
        u16::from(self.stretch_len) + 1
    }

    /// Steps a token has travelled from its start cell to `cell`.
    #[must_use]
    pub fn progress(&self, color: Color, cell: u8) -> u16 {
        let track = u16::from(self.track_len);
        (u16::from(cell) + track - u16::from(self.start_cells[color])) % track
    }

    /// Progress value of the color's home-entry cell.
    #[must_use]
    pub fn entry_progress(&self, color: Color) -> u16 {
        self.progress(color, self.home_entries[color])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_rules_are_valid() {
        let rules = RuleSet::default();
        rules.validate().expect("default rules should be valid");
        assert_eq!(rules.finish_distance(), 6);
    }

    #[test]
    fn test_safe_cells() {
        let rules = RuleSet::default();
        for cell in [0, 7, 13, 19, 26, 33, 39, 45] {
            assert!(rules.is_safe(cell));
        }
        assert!(!rules.is_safe(1));
        assert!(!rules.is_safe(50));
    }

    #[test]
    fn test_progress_wraps_for_blue() {
        let rules = RuleSet::default();

        assert_eq!(rules.progress(Color::Red, 0), 0);
        assert_eq!(rules.progress(Color::Red, 48), 48);
        assert_eq!(rules.progress(Color::Blue, 26), 0);
        assert_eq!(rules.progress(Color::Blue, 51), 25);
        assert_eq!(rules.progress(Color::Blue, 0), 26);

        // Both colors travel the same distance to their entry
        assert_eq!(rules.entry_progress(Color::Red), 50);
        assert_eq!(rules.entry_progress(Color::Blue), 50);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
stretch_len = 6

[home_entries]
red = 49
blue = 23
"#;
        let rules = RuleSet::from_toml_str(toml_str).unwrap();
        assert_eq!(rules.stretch_len, 6);
        assert_eq!(rules.home_entries[Color::Red], 49);
        assert_eq!(rules.home_entries[Color::Blue], 23);
        // Other fields should be defaults
        assert_eq!(rules.track_len, 52);
        assert_eq!(rules.start_cells[Color::Blue], 26);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let rules = RuleSet::from_toml_str("").unwrap();
        assert_eq!(rules, RuleSet::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let rules = RuleSet::default();
        let rendered = rules.to_toml().unwrap();
        let parsed = RuleSet::from_toml_str(&rendered).unwrap();
        assert_eq!(rules, parsed);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = RuleSet::from_toml_str("track_len = \"long\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_validation_rejects_safe_cell_off_track() {
        let err = RuleSet::from_toml_str("safe_cells = [0, 60]").unwrap_err();
        assert_eq!(
            err.to_string(),
            "rule validation error: safe cell 60 is outside the track"
        );
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut rules = RuleSet::default();
        rules.tokens_per_color = 0;
        assert!(rules.validate().is_err());

        let mut rules = RuleSet::default();
        rules.exit_roll = 7;
        assert!(rules.validate().is_err());

        let mut rules = RuleSet::default();
        rules.max_bonus_streak = 0;
        assert!(rules.validate().is_err());

        let mut rules = RuleSet::default();
        rules.home_entries[Color::Blue] = 52;
        assert!(rules.validate().is_err());

        let mut rules = RuleSet::default();
        rules.stretch_len = 0;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_entry_on_start_cell() {
        let mut rules = RuleSet::default();
        rules.home_entries[Color::Red] = rules.start_cells[Color::Red];
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("red"));

        // Entry just one step behind the start is a full lap and fine
        let mut rules = RuleSet::default();
        rules.home_entries[Color::Blue] = 25;
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("ludo_rules_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rules.toml");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "track_len = 40").unwrap();
        writeln!(file, "safe_cells = [0, 20]").unwrap();
        writeln!(file, "[start_cells]\nred = 0\nblue = 20").unwrap();
        writeln!(file, "[home_entries]\nred = 38\nblue = 18").unwrap();
        drop(file);

        let rules = RuleSet::load(&path).unwrap();
        assert_eq!(rules.track_len, 40);
        assert!(rules.is_safe(20));
        assert_eq!(rules.entry_progress(Color::Blue), 38);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = RuleSet::load(Path::new("/nonexistent/ludo/rules.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
