use clap::{App, AppSettings, Arg, SubCommand};

use crate::kind;

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
ucdx parses data files from the Unicode character database (UCD) and caches
their contents as structured JSON for reuse by other tools.

Files are read from a local copy of the UCD. Use the 'url' sub-command to find
out where each file can be downloaded from.";

const ABOUT_CACHE: &'static str = "\
cache parses one or more UCD files and writes each to a JSON cache file named
after the source file, e.g., Scripts.txt.json. Each cache file holds the
file's records and the default values declared by its @missing lines.

Files are parsed in parallel. If any file fails to parse, the command fails
and no cache file is written for it.

By default, PropertyValueAliases.txt, UnicodeData.txt, PropList.txt and
Scripts.txt are cached.
";

const ABOUT_RECORDS: &'static str = "\
records parses a single UCD file and prints each of its records on stdout as
one JSON object per line. With --defaults, the default values declared by the
file's @missing lines are printed instead.
";

const ABOUT_SHOW: &'static str = "\
show prints the contents of a cache file written by the 'cache' sub-command,
one JSON object per line.
";

const ABOUT_URL: &'static str = "\
url prints the download URL of a UCD file for a given Unicode version.
";

const ABOUT_LIST_KINDS: &'static str = "\
list-kinds prints the name of every supported UCD file kind, along with the
path of its file relative to the UCD directory.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    // Various common flags and arguments.
    let ucd_dir = Arg::with_name("ucd-dir")
        .required(true)
        .help("Directory containing the Unicode character database files.");
    let kind = Arg::with_name("kind")
        .required(true)
        .possible_values(&kind::names())
        .help("The kind of UCD file.");
    let flag_cache_dir = Arg::with_name("cache-dir")
        .long("cache-dir")
        .takes_value(true)
        .help(
            "The directory holding cache files. Defaults to ucdx in \
             the platform cache directory, e.g., ~/.cache/ucdx.",
        );
    let flag_defaults = Arg::with_name("defaults")
        .long("defaults")
        .help("Print the default values from @missing lines instead.");
    let flag_verbose = Arg::with_name("verbose")
        .long("verbose")
        .short("v")
        .help("Log progress to stderr. RUST_LOG overrides this.");

    // Subcommands.
    let cmd_cache = SubCommand::with_name("cache")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Parse UCD files and write them to cache files.")
        .before_help(ABOUT_CACHE)
        .arg(ucd_dir.clone())
        .arg(flag_cache_dir.clone())
        .arg(flag_verbose.clone())
        .arg(
            Arg::with_name("file")
                .long("file")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .possible_values(&kind::names())
                .help("Cache this kind of file. May be repeated."),
        )
        .arg(
            Arg::with_name("all")
                .long("all")
                .conflicts_with("file")
                .help("Cache every supported kind of file."),
        );
    let cmd_records = SubCommand::with_name("records")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Print the records of a UCD file as JSON lines.")
        .before_help(ABOUT_RECORDS)
        .arg(kind.clone())
        .arg(ucd_dir.clone())
        .arg(flag_defaults.clone())
        .arg(flag_verbose.clone());
    let cmd_show = SubCommand::with_name("show")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Print the contents of a cache file as JSON lines.")
        .before_help(ABOUT_SHOW)
        .arg(kind.clone())
        .arg(flag_cache_dir.clone())
        .arg(flag_defaults.clone())
        .arg(flag_verbose.clone());
    let cmd_url = SubCommand::with_name("url")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Print the download URL of a UCD file.")
        .before_help(ABOUT_URL)
        .arg(kind.clone())
        .arg(
            Arg::with_name("unicode-version")
                .long("unicode-version")
                .takes_value(true)
                .help("The Unicode version, e.g., 15.0.0."),
        );
    let cmd_list_kinds = SubCommand::with_name("list-kinds")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("List every supported kind of UCD file.")
        .before_help(ABOUT_LIST_KINDS);

    // The actual App.
    App::new("ucdx")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .subcommand(cmd_cache)
        .subcommand(cmd_records)
        .subcommand(cmd_show)
        .subcommand(cmd_url)
        .subcommand(cmd_list_kinds)
}

#[cfg(test)]
mod tests {
    use super::app;

    #[test]
    fn parse_cache() {
        let m = app()
            .get_matches_from_safe(vec![
                "ucdx",
                "cache",
                "/ucd",
                "--file",
                "scripts",
                "--file",
                "unicode-data",
            ])
            .unwrap();
        let (name, sub) = m.subcommand();
        assert_eq!(name, "cache");
        let sub = sub.unwrap();
        assert_eq!(sub.value_of("ucd-dir"), Some("/ucd"));
        let files: Vec<&str> = sub.values_of("file").unwrap().collect();
        assert_eq!(files, vec!["scripts", "unicode-data"]);
    }

    #[test]
    fn reject_unknown_kind() {
        let result =
            app().get_matches_from_safe(vec!["ucdx", "url", "Scripts.txt"]);
        assert!(result.is_err());
    }
}
