use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_CALORIE_TARGET: f64 = 2000.0;
pub const DEFAULT_PROTEIN_TARGET: f64 = 100.0;
pub const DEFAULT_WORKOUT_DAYS: u32 = 4;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub targets: Targets,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub daily_calorie_target: Option<f64>,
    pub protein_target: Option<f64>,
}

impl Profile {
    pub fn calorie_target(&self) -> f64 {
        self.daily_calorie_target.unwrap_or(DEFAULT_CALORIE_TARGET)
    }

    pub fn protein_target(&self) -> f64 {
        self.protein_target.unwrap_or(DEFAULT_PROTEIN_TARGET)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Targets {
    #[serde(default = "default_workout_days")]
    pub workout_days_per_week: u32,
}

fn default_workout_days() -> u32 {
    DEFAULT_WORKOUT_DAYS
}

impl Default for Targets {
    fn default() -> Self {
        Self {
            workout_days_per_week: DEFAULT_WORKOUT_DAYS,
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)?;
            file.write_all(contents.as_bytes())?;

            // A pre-existing file keeps its old mode through open(); fix it after the write.
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Resolve an exercise alias, or return the input unchanged.
    pub fn resolve_alias(&self, input: &str) -> String {
        self.aliases
            .get(input.trim())
            .cloned()
            .unwrap_or_else(|| input.to_string())
    }

    pub fn default_aliases() -> HashMap<String, String> {
        let mut m = HashMap::new();
        m.insert("bp".into(), "bench press".into());
        m.insert("sq".into(), "squat".into());
        m.insert("dl".into(), "deadlift".into());
        m.insert("ohp".into(), "overhead press".into());
        m.insert("row".into(), "barbell row".into());
        m
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("FITLOG_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fitlog")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    pub fn db_path() -> PathBuf {
        Self::data_dir().join("data.db")
    }
}
