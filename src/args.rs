use std::path::PathBuf;

use crate::cache::default_cache_dir;
use crate::error::Result;
use crate::kind::{self, Kind};
use crate::url::{is_unicode_version, DEFAULT_UNICODE_VERSION};

/// Wraps clap matches and provides convenient accessors to various parameters.
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ArgMatches<'a> {
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    pub fn is_present(&self, name: &str) -> bool {
        self.0.is_present(name)
    }

    pub fn ucd_dir(&self) -> Result<PathBuf> {
        match self.0.value_of_os("ucd-dir") {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => err!("missing UCD directory"),
        }
    }

    /// The directory to write cache files to, or read them from.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = self.0.value_of_os("cache-dir") {
            return Ok(PathBuf::from(dir));
        }
        match default_cache_dir() {
            Some(dir) => Ok(dir),
            None => err!(
                "could not determine a cache directory, \
                 pass --cache-dir"
            ),
        }
    }

    /// The single file kind given as the `kind` positional argument.
    pub fn kind(&self) -> Result<Kind> {
        match self.0.value_of("kind") {
            Some(name) => name.parse(),
            None => err!("missing UCD file kind"),
        }
    }

    /// The file kinds requested with `--file` (or `--all`), in the order
    /// given and without duplicates.
    pub fn kinds(&self) -> Result<Vec<Kind>> {
        if self.is_present("all") {
            return Ok(kind::ALL.to_vec());
        }
        let names = match self.0.values_of("file") {
            None => return Ok(kind::DEFAULT_CACHED.to_vec()),
            Some(names) => names,
        };
        let mut kinds: Vec<Kind> = vec![];
        for name in names {
            let kind = name.parse()?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Ok(kinds)
    }

    pub fn unicode_version(&self) -> Result<&str> {
        let version = self
            .0
            .value_of("unicode-version")
            .unwrap_or(DEFAULT_UNICODE_VERSION);
        if !is_unicode_version(version) {
            return err!("invalid Unicode version: {}", version);
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::ArgMatches;
    use crate::app::app;
    use crate::kind::{Kind, ALL, DEFAULT_CACHED};

    fn kinds(argv: &[&str]) -> Vec<Kind> {
        let m = app().get_matches_from_safe(argv).unwrap();
        let sub = m.subcommand_matches("cache").unwrap();
        ArgMatches::new(sub).kinds().unwrap()
    }

    #[test]
    fn default_kinds() {
        assert_eq!(kinds(&["ucdx", "cache", "/ucd"]), DEFAULT_CACHED);
        assert_eq!(kinds(&["ucdx", "cache", "/ucd", "--all"]), ALL);
    }

    #[test]
    fn requested_kinds_are_deduplicated() {
        let got = kinds(&[
            "ucdx", "cache", "/ucd", "--file", "scripts", "--file",
            "prop-list", "--file", "scripts",
        ]);
        assert_eq!(got, vec![Kind::Scripts, Kind::PropList]);
    }

    #[test]
    fn unicode_version() {
        let m = app()
            .get_matches_from_safe(&["ucdx", "url", "scripts"])
            .unwrap();
        let sub = ArgMatches::new(m.subcommand_matches("url").unwrap());
        assert_eq!(sub.unicode_version().unwrap(), "15.0.0");

        let m = app()
            .get_matches_from_safe(&[
                "ucdx",
                "url",
                "scripts",
                "--unicode-version",
                "15.x",
            ])
            .unwrap();
        let sub = ArgMatches::new(m.subcommand_matches("url").unwrap());
        assert!(sub.unicode_version().is_err());
    }
}
