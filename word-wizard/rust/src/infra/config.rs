use std::{
    env,
    fmt::{Debug, Display},
    path::{Path, PathBuf},
    sync::OnceLock,
};

use anyhow::{bail, Context, Result};
use tracing::info;
use word_wizard::anagram_table::AnagramTable;

const DEFAULT_WORD_LIST: &str = "Input/words_alpha.txt";

pub(crate) struct Config {
    inner: Box<ConfigInner>,
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}

/// Reads the config from the environment the first time it's called.
/// A first command line argument takes precedence over `WORD_LIST`.
pub(crate) fn get() -> Result<&'static Config> {
    static CELL: OnceLock<Config> = OnceLock::new();

    if let Some(config) = CELL.get() {
        return Ok(config);
    }

    let word_list = env::args()
        .nth(1)
        .or_else(|| env::var("WORD_LIST").ok())
        .unwrap_or_else(|| DEFAULT_WORD_LIST.to_owned());

    let inner = ConfigInner::parse(
        word_list,
        env::var("LOAD_FACTOR").ok().as_deref(),
        env::var("COMPARE_LINEAR").ok().as_deref(),
    )?;
    let config = CELL.get_or_init(|| Config { inner: Box::new(inner) });

    info!(
        word_list = %config.inner.word_list.display(),
        load_factor = config.inner.load_factor,
        compare_linear = config.inner.compare_linear,
        "initialized config"
    );

    Ok(config)
}

impl Config {
    pub(crate) fn get_word_list(&'static self) -> &'_ Path {
        &self.inner.word_list
    }

    pub(crate) fn get_load_factor(&'static self) -> f64 {
        self.inner.load_factor
    }

    pub(crate) fn get_compare_linear(&'static self) -> bool {
        self.inner.compare_linear
    }
}

#[derive(Debug, PartialEq)]
struct ConfigInner {
    word_list: PathBuf,
    load_factor: f64,
    compare_linear: bool,
}

impl ConfigInner {
    fn parse(word_list: String, load_factor: Option<&str>, compare_linear: Option<&str>) -> Result<Self> {
        let load_factor = match load_factor {
            Some(value) => value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("LOAD_FACTOR is not a number: {value:?}"))?,
            None => AnagramTable::DEFAULT_LOAD_FACTOR,
        };

        let compare_linear = match compare_linear.map(|v| v.trim().to_ascii_lowercase()) {
            None => false,
            Some(v) => match v.as_str() {
                "1" | "true" | "yes" | "on" => true,
                "" | "0" | "false" | "no" | "off" => false,
                _ => bail!("COMPARE_LINEAR is not a boolean: {v:?}"),
            },
        };

        Ok(Self {
            word_list: PathBuf::from(word_list),
            load_factor,
            compare_linear,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ConfigInner::parse(DEFAULT_WORD_LIST.to_owned(), None, None).unwrap();
        assert_eq!(
            ConfigInner {
                word_list: PathBuf::from("Input/words_alpha.txt"),
                load_factor: 0.75,
                compare_linear: false,
            },
            config
        );
    }

    #[test]
    fn overrides() {
        let config = ConfigInner::parse("words.txt".to_owned(), Some(" 1.5 "), Some("Yes")).unwrap();
        assert_eq!(Path::new("words.txt"), config.word_list);
        assert_eq!(1.5, config.load_factor);
        assert!(config.compare_linear);
    }

    #[test]
    fn invalid_values() {
        assert!(ConfigInner::parse("words.txt".to_owned(), Some("lots"), None).is_err());
        assert!(ConfigInner::parse("words.txt".to_owned(), None, Some("maybe")).is_err());
    }
}
