use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fs, path::Path};

/// Demonstration configuration.
///
/// Loaded from a TOML file, see [`Config::from_file`].
/// The default reproduces the built-in example.
/// Inputs are integers only; float quadruples go through [`crate::mean::average`] directly.
#[derive(Debug, PartialEq, Clone)]
pub struct Config {
    /// The four numbers to average.
    pub inputs: [i32; 4],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    inputs: Option<Vec<i32>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: [10, 20, 30, 40],
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// A missing `inputs` key falls back to the default inputs.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if it does not hold exactly four inputs.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        Self::from_toml(&contents)
    }

    fn from_toml(contents: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(contents).context("failed to deserialize config")?;

        let Some(inputs) = raw.inputs else {
            return Ok(Self::default());
        };
        let inputs = check_inputs(inputs).context("failed to validate config")?;

        Ok(Self { inputs })
    }
}

fn check_inputs(inputs: Vec<i32>) -> Result<[i32; 4]> {
    let len = inputs.len();
    match <[i32; 4]>::try_from(inputs) {
        Ok(inputs) => Ok(inputs),
        Err(_) => bail!("number of inputs must be 4, but is {len}"),
    }
}
