//! Loading and saving chart job files; the format is chosen by the
//! file name extension.

use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigBackend {
    /// Read as JSON5 (so plain JSON works too), written as JSON
    Json5,
    Ron,
    Yaml,
}

pub fn ron_to_string_pretty<T: Serialize>(value: &T) -> Result<String, ron::Error> {
    ron::ser::to_string_pretty(value, ron::ser::PrettyConfig::default())
}

impl ConfigBackend {
    pub fn from_str_as<T: DeserializeOwned>(self, s: &str) -> Result<T> {
        match self {
            ConfigBackend::Json5 => {
                serde_json5::from_str(s).map_err(|e| anyhow!("decoding JSON5: {e}"))
            }
            ConfigBackend::Ron => ron::from_str(s).context("decoding RON"),
            ConfigBackend::Yaml => serde_yml::from_str(s).context("decoding YAML"),
        }
    }

    pub fn to_string_as<T: Serialize>(self, value: &T) -> Result<String> {
        let mut s = match self {
            ConfigBackend::Json5 => {
                serde_json::to_string_pretty(value).context("encoding config as JSON")?
            }
            ConfigBackend::Ron => ron_to_string_pretty(value).context("encoding config as RON")?,
            ConfigBackend::Yaml => {
                serde_yml::to_string(value).context("encoding config as YAML")?
            }
        };
        if !s.ends_with('\n') {
            s.push('\n');
        }
        Ok(s)
    }

    pub fn load_config_file<T: DeserializeOwned>(self, path: &Path) -> Result<T> {
        let s = std::fs::read_to_string(path)
            .with_context(|| anyhow!("loading config file from {path:?}"))?;
        self.from_str_as(&s)
            .with_context(|| anyhow!("in config file {path:?}"))
    }

    pub fn save_config_file<T: Serialize>(self, path: &Path, value: &T) -> Result<()> {
        let s = self.to_string_as(value)?;
        std::fs::write(path, s).with_context(|| anyhow!("writing config file to {path:?}"))
    }
}

pub const FILE_EXTENSIONS: &[(&str, ConfigBackend)] = &[
    ("json5", ConfigBackend::Json5),
    ("json", ConfigBackend::Json5),
    ("ron", ConfigBackend::Ron),
    ("yml", ConfigBackend::Yaml),
    ("yaml", ConfigBackend::Yaml),
];

pub fn backend_from_path(path: &Path) -> Result<ConfigBackend> {
    let Some(ext) = path.extension() else {
        bail!(
            "given file path does not have an extension \
             for determining the file type: {path:?}"
        )
    };
    let Some(ext) = ext.to_str() else {
        bail!("given file path does have an extension that is not unicode: {path:?}")
    };
    match FILE_EXTENSIONS.iter().find(|(e, _b)| *e == ext) {
        Some((_, backend)) => Ok(*backend),
        None => bail!(
            "given file path does have an unknown extension {ext:?} \
             (known: {:?}): {path:?}",
            FILE_EXTENSIONS.iter().map(|(e, _)| *e).collect::<Vec<_>>()
        ),
    }
}

pub fn load_config_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    backend_from_path(path)?.load_config_file(path)
}

pub fn save_config_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    backend_from_path(path)?.save_config_file(path, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Sample {
        name: String,
        values: Vec<f64>,
    }

    #[test]
    fn t_backend_from_path() {
        assert_eq!(
            backend_from_path(Path::new("job.json5")).unwrap(),
            ConfigBackend::Json5
        );
        assert_eq!(
            backend_from_path(Path::new("a/job.yaml")).unwrap(),
            ConfigBackend::Yaml
        );
        assert_eq!(backend_from_path(Path::new("job.ron")).unwrap(), ConfigBackend::Ron);
        assert!(backend_from_path(Path::new("job.toml")).is_err());
        assert!(backend_from_path(Path::new("job")).is_err());
    }

    #[test]
    fn t_json5_accepts_comments() -> Result<()> {
        let s: Sample = ConfigBackend::Json5.from_str_as(
            "{
               // trailing commas and comments are fine
               name: 'threads',
               values: [1, 2.5,],
             }",
        )?;
        assert_eq!(
            s,
            Sample {
                name: "threads".into(),
                values: vec![1., 2.5]
            }
        );
        Ok(())
    }

    #[test]
    fn t_roundtrip_all_backends() -> Result<()> {
        let sample = Sample {
            name: "links".into(),
            values: vec![77.9711, 8.20441],
        };
        for (_, backend) in FILE_EXTENSIONS {
            let s = backend.to_string_as(&sample)?;
            let back: Sample = backend.from_str_as(&s)?;
            assert_eq!(back, sample, "{backend:?}");
        }
        Ok(())
    }
}
