//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, WritePolicy};
use crate::error::{RuleMergeError, RuleMergeResult};

use super::types::Config;

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "rulemerge.toml";

pub const ENV_SOURCE: &str = "RULEMERGE_SOURCE";
pub const ENV_DESTINATIONS: &str = "RULEMERGE_DESTINATIONS";
pub const ENV_WRITE_POLICY: &str = "RULEMERGE_WRITE_POLICY";
/// Overrides the user config location (used by tests)
pub const ENV_USER_CONFIG_PATH: &str = "RULEMERGE_USER_CONFIG_PATH";

const WRITE_POLICY_VALUES: &[&str] = &["fail-fast", "best-effort"];

/// Result of config discovery
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Relative paths in `config` are resolved against this
    pub root: PathBuf,
    /// The file the config came from, if any
    pub file: Option<PathBuf>,
    /// Unknown keys in the config file
    pub warnings: Vec<ConfigWarning>,
    /// Environment values that were ignored
    pub env_warnings: Vec<String>,
}

/// Load configuration and collect non-fatal warnings (unknown keys).
pub fn load_with_warnings(path: &Path) -> RuleMergeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| RuleMergeError::ConfigRead {
        file: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RuleMergeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find the configuration for a run started in `cwd`.
///
/// An explicit file must exist. Otherwise `rulemerge.toml` in `cwd` is
/// used, then the user config, then defaults. Environment overrides are
/// applied last.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> RuleMergeResult<LoadedConfig> {
    let mut loaded = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_file() {
                return Err(RuleMergeError::InvalidConfig {
                    file: path,
                    message: "config file not found".to_string(),
                });
            }
            from_file(path, None)?
        }
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                from_file(project, None)?
            } else {
                match user_config_path().filter(|p| p.is_file()) {
                    Some(user) => from_file(user, Some(cwd))?,
                    None => LoadedConfig {
                        config: Config::default(),
                        root: cwd.to_path_buf(),
                        file: None,
                        warnings: Vec::new(),
                        env_warnings: Vec::new(),
                    },
                }
            }
        }
    };

    loaded.env_warnings = apply_env_overrides(&mut loaded.config, |key| std::env::var(key).ok());
    Ok(loaded)
}

fn from_file(path: PathBuf, root: Option<&Path>) -> RuleMergeResult<LoadedConfig> {
    let (config, warnings) = load_with_warnings(&path)?;
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    Ok(LoadedConfig {
        config,
        root,
        file: Some(path),
        warnings,
        env_warnings: Vec::new(),
    })
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(ENV_USER_CONFIG_PATH) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("rulemerge").join("config.toml"))
}

/// Apply `RULEMERGE_*` overrides read through `get_env`.
///
/// Invalid values are skipped; one warning line is returned for each.
pub fn apply_env_overrides<F>(config: &mut Config, get_env: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    if let Some(source) = get_env(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
        config.source.dir = PathBuf::from(source.trim());
    }

    if let Some(destinations) = get_env(ENV_DESTINATIONS) {
        let parsed: Vec<PathBuf> = destinations
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        if parsed.is_empty() {
            warnings.push(format!("{} is set but lists no paths", ENV_DESTINATIONS));
        } else {
            config.output.destinations = parsed;
        }
    }

    if let Some(policy) = get_env(ENV_WRITE_POLICY) {
        match policy.parse::<WritePolicy>() {
            Ok(policy) => config.output.on_error = policy,
            Err(_) => {
                let hint = closest(&policy.trim().to_lowercase(), WRITE_POLICY_VALUES)
                    .map(|s| format!(" (did you mean '{}'?)", s))
                    .unwrap_or_default();
                warnings.push(format!(
                    "invalid {} value '{}'{}; valid values: {}",
                    ENV_WRITE_POLICY,
                    policy,
                    hint,
                    WRITE_POLICY_VALUES.join(", ")
                ));
            }
        }
    }

    warnings
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "dir",
        "extension",
        "order",
        "base",
        "priority",
        "output",
        "destinations",
        "on_error",
        "color",
    ];

    closest(unknown, CANDIDATES).map(str::to_string)
}

/// Closest candidate within two edits
fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in candidates {
        let dist = levenshtein(input, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
