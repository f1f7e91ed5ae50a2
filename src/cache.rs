use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use ucdx_parse::{File, UcdFile};

use crate::error::Result;
use crate::kind::{Kind, Visitor};

/// Return the directory that cache files are written to when none is given.
///
/// This is `ucdx` inside the platform's cache directory, e.g.,
/// `$XDG_CACHE_HOME/ucdx` or `$HOME/.cache/ucdx` on Linux.
pub fn default_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("ucdx"))
}

/// Return the path of the cache file for the given kind.
///
/// Files in UCD subdirectories are cached by their file name alone, e.g.,
/// `extracted/DerivedBidiClass.txt` is cached as
/// `DerivedBidiClass.txt.json`.
pub fn cache_path(cache_dir: &Path, kind: Kind) -> PathBuf {
    let rel = kind.relative_file_path();
    let name = rel.file_name().unwrap_or_else(|| rel.as_os_str());
    let mut name = name.to_os_string();
    name.push(".json");
    cache_dir.join(name)
}

/// Parse the file of one kind from `ucd_dir` and write it to its cache file.
pub fn cache_kind(
    ucd_dir: &Path,
    cache_dir: &Path,
    kind: Kind,
) -> Result<PathBuf> {
    let path = cache_path(cache_dir, kind);
    kind.visit(CacheOne { ucd_dir, path: &path })?;
    Ok(path)
}

/// Cache every given kind, parsing each file on its own thread.
///
/// The cache directory is created if it doesn't exist. If any file fails,
/// the first error in `kinds` order is returned, after every thread has
/// finished.
pub fn cache_all(
    ucd_dir: &Path,
    cache_dir: &Path,
    kinds: &[Kind],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(cache_dir)?;
    let results: Vec<Result<PathBuf>> = thread::scope(|s| {
        let handles: Vec<_> = kinds
            .iter()
            .map(|&kind| s.spawn(move || cache_kind(ucd_dir, cache_dir, kind)))
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(result) => result,
                Err(_) => err!("thread caching a UCD file panicked"),
            })
            .collect()
    });
    results.into_iter().collect()
}

/// Read a cache file written by `cache_kind`.
pub fn read_cache<R, D>(path: &Path) -> Result<File<R, D>>
where
    R: DeserializeOwned,
    D: DeserializeOwned,
{
    let rdr = io::BufReader::new(fs::File::open(path)?);
    Ok(serde_json::from_reader(rdr)?)
}

struct CacheOne<'a> {
    ucd_dir: &'a Path,
    path: &'a Path,
}

impl<'a> Visitor for CacheOne<'a> {
    type Output = Result<()>;

    fn visit<P>(self, parser: P) -> Result<()>
    where
        P: UcdFile + Sync,
        P::Record: Serialize + DeserializeOwned + Send,
        P::Missing: Serialize + DeserializeOwned + Send,
    {
        let src = P::file_path(self.ucd_dir);
        debug!(src = %src.display(), "parsing UCD file");
        let file = ucdx_parse::parse_path(&src, &parser)?;
        write_json(self.path, &file)?;
        info!(
            src = %src.display(),
            dst = %self.path.display(),
            records = file.records.len(),
            defaults = file.defaults.len(),
            "wrote cache file"
        );
        Ok(())
    }
}

/// Write the given value as JSON to `path`.
///
/// The value is written to a uniquely named temporary file in the same
/// directory and then moved into place. On failure the temporary file is
/// removed and any existing cache file is left untouched.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut wtr = io::BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer(&mut wtr, value)?;
        wtr.flush()?;
    }
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}
