use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::Error;
use crate::line::{split_line, Fields};

/// Interprets the fields of one kind of UCD file.
///
/// The generic parser takes care of reading lines, stripping comments,
/// splitting fields and recognizing `@missing` annotations. Implementations
/// of this trait only map positional fields to a record.
///
/// Lines reach implementations already decoded; input that is not UTF-8
/// fails before any field is interpreted.
pub trait FormatParser {
    /// The record produced for each data line.
    type Record;
    /// The record produced for each `@missing` annotation.
    ///
    /// File kinds without default values use `NoMissing`.
    type Missing;

    /// Interpret the fields of a data line.
    fn parse_record(&self, fields: &Fields<'_>) -> Result<Self::Record, Error>;

    /// Interpret the fields of an `@missing` annotation.
    ///
    /// When this returns `None`, the annotation is dropped.
    fn parse_missing(
        &self,
        fields: &Fields<'_>,
    ) -> Result<Option<Self::Missing>, Error>;
}

/// Describes a file in the UCD.
pub trait UcdFile: FormatParser {
    /// The file path corresponding to this file, relative to the UCD
    /// directory.
    fn relative_file_path() -> &'static Path;

    /// The full file path corresponding to this file given the UCD directory
    /// path.
    fn file_path<P: AsRef<Path>>(ucd_dir: P) -> PathBuf {
        ucd_dir.as_ref().join(Self::relative_file_path())
    }
}

/// The default record type of UCD files that have no `@missing` semantics.
///
/// This type has no values, so a `File` using it never has any defaults.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoMissing {}

/// The parsed contents of a single UCD file.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct File<R, D> {
    /// Every record, in the order its line appears in the file.
    pub records: Vec<R>,
    /// Every default record from `@missing` annotations, in file order.
    pub defaults: Vec<D>,
}

impl<R, D> Default for File<R, D> {
    fn default() -> File<R, D> {
        File { records: vec![], defaults: vec![] }
    }
}

/// A single item produced while parsing a UCD file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry<R, D> {
    /// A record from a data line.
    Record(R),
    /// A default record from an `@missing` annotation.
    Missing(D),
}

/// Parse every line from the given reader with the given format parser.
///
/// The reader is consumed in a single forward pass. If any line fails to
/// parse, or if reading fails, then no results are returned.
///
/// Input must be UTF-8, as every UCD file is. Invalid UTF-8 is reported as
/// an I/O error of kind `InvalidData` on the offending line.
pub fn parse<R, P>(
    rdr: R,
    parser: &P,
) -> Result<File<P::Record, P::Missing>, Error>
where
    R: io::Read,
    P: FormatParser + ?Sized,
{
    let mut file = File::default();
    for result in UcdLineParser::new(rdr, parser) {
        match result? {
            Entry::Record(rec) => file.records.push(rec),
            Entry::Missing(def) => file.defaults.push(def),
        }
    }
    Ok(file)
}

/// Parse the file at the given path with the given format parser.
///
/// Errors returned include the file path.
pub fn parse_path<Q, P>(
    path: Q,
    parser: &P,
) -> Result<File<P::Record, P::Missing>, Error>
where
    Q: AsRef<Path>,
    P: FormatParser + ?Sized,
{
    let path = path.as_ref();
    let file = fs::File::open(path)
        .map_err(|e| Error::io(e).with_path(path))?;
    let parsed = parse(file, parser).map_err(|e| e.with_path(path))?;
    debug!(
        path = %path.display(),
        records = parsed.records.len(),
        defaults = parsed.defaults.len(),
        "parsed UCD file"
    );
    Ok(parsed)
}

/// Parse the UCD file described by `P` inside the given UCD directory.
pub fn parse_dir<D, P>(
    ucd_dir: D,
    parser: &P,
) -> Result<File<P::Record, P::Missing>, Error>
where
    D: AsRef<Path>,
    P: UcdFile,
{
    parse_path(P::file_path(ucd_dir), parser)
}

/// A streaming parser over the lines of a UCD file.
///
/// Each data line yields an `Entry::Record` and each `@missing` annotation
/// yields an `Entry::Missing`. When a line yields both, the record comes
/// first. Lines are read one at a time into a reused buffer.
pub struct UcdLineParser<'p, R, P: FormatParser + ?Sized> {
    rdr: io::BufReader<R>,
    parser: &'p P,
    line: String,
    line_number: u64,
    pending: Option<P::Missing>,
    done: bool,
}

impl<'p, R: io::Read, P: FormatParser + ?Sized> UcdLineParser<'p, R, P> {
    /// Create a new parser over the given reader.
    pub fn new(rdr: R, parser: &'p P) -> UcdLineParser<'p, R, P> {
        UcdLineParser {
            rdr: io::BufReader::new(rdr),
            parser,
            line: String::new(),
            line_number: 0,
            pending: None,
            done: false,
        }
    }

    /// Return the number of lines read so far.
    pub fn line_number(&self) -> u64 {
        self.line_number
    }

    /// Read and interpret the next line. Returns `Ok(None)` at EOF.
    fn next_line(
        &mut self,
    ) -> Result<Option<(Option<P::Record>, Option<P::Missing>)>, Error> {
        self.line.clear();
        let n = self.rdr.read_line(&mut self.line).map_err(|e| {
            Error::io(e).with_line_number(self.line_number + 1)
        })?;
        if n == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }

        let line_number = self.line_number;
        let content = &self.line;
        let annotate = |e: Error| e.with_line(line_number, content);
        let split = split_line(content);
        let record = match split.fields {
            None => None,
            Some(ref fields) => {
                Some(self.parser.parse_record(fields).map_err(annotate)?)
            }
        };
        let missing = match split.missing {
            None => None,
            Some(ref fields) => {
                trace!(line = line_number, "found @missing annotation");
                self.parser.parse_missing(fields).map_err(annotate)?
            }
        };
        Ok(Some((record, missing)))
    }
}

impl<'p, R: io::Read, P: FormatParser + ?Sized> Iterator
    for UcdLineParser<'p, R, P>
{
    type Item = Result<Entry<P::Record, P::Missing>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(def) = self.pending.take() {
            return Some(Ok(Entry::Missing(def)));
        }
        while !self.done {
            match self.next_line() {
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
                Ok(None) => self.done = true,
                Ok(Some((Some(rec), missing))) => {
                    self.pending = missing;
                    return Some(Ok(Entry::Record(rec)));
                }
                Ok(Some((None, Some(def)))) => {
                    return Some(Ok(Entry::Missing(def)));
                }
                Ok(Some((None, None))) => {}
            }
        }
        None
    }
}
