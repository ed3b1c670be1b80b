//! Command-line argument parsing for the `hashid` binary.
//!
//! Flags take one or two leading dashes and either `-flag value` or
//! `-flag=value`. Parsing stops at `--` or at the first argument that is not
//! a flag; everything after that is input, joined with single spaces.

use std::ffi::OsString;
use std::path::PathBuf;

use encoder::DigestAlgorithm;
use thiserror::Error;

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate(CliArgs),
    Version,
    Help,
}

/// Flags and input for a generate run. `None` leaves the setting to the
/// config file or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub algorithm: Option<DigestAlgorithm>,
    pub key: Option<String>,
    pub no_normalize: bool,
    pub uuid_version: Option<u8>,
    pub charmap: Option<PathBuf>,
    pub input: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("input string is required")]
    MissingInput,
    #[error("flag provided but not defined: -{0}")]
    UnknownFlag(String),
    #[error("flag needs an argument: -{0}")]
    MissingValue(String),
    #[error("invalid hash algorithm {0:?} (expected md5, sha1, sha256 or hmac)")]
    InvalidAlgorithm(String),
    #[error("invalid UUID version {0:?}")]
    InvalidUuidVersion(String),
    #[error("invalid boolean value {value:?} for flag -{flag}")]
    InvalidBool { flag: String, value: String },
    #[error("argument is not valid UTF-8: {0:?}")]
    NonUtf8Argument(String),
}

pub fn usage() -> String {
    format!(
        "Usage: {name} [options] <input>\n\
         \n\
         Options:\n  \
         -hash <md5|sha1|sha256|hmac>  digest algorithm (default md5)\n  \
         -key <secret>                 HMAC key, required with -hash hmac\n  \
         -no-normalize                 hash the input bytes as given\n  \
         -uuid-version <0|3|5|8>       version nibble, 0 derives it from the algorithm\n  \
         -charmap <path>               JSON character map replacing the bundled one\n  \
         -version                      print version and exit\n  \
         -help                         print this message and exit\n",
        name = env!("CARGO_PKG_NAME")
    )
}

/// Converts raw process arguments to strings, rejecting the first one that
/// is not valid UTF-8.
pub fn collect_args<I>(args: I) -> Result<Vec<String>, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|raw| CliError::NonUtf8Argument(raw.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Parses process arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);
    let mut parsed = CliArgs::default();
    let mut input: Vec<String> = Vec::new();

    while let Some(arg) = args.next() {
        if arg == "--" {
            input.extend(args.by_ref());
            break;
        }
        let Some(flag) = strip_dashes(&arg) else {
            input.push(arg);
            input.extend(args.by_ref());
            break;
        };

        let (name, inline) = match flag.split_once('=') {
            Some((name, value)) => (name, Some(value.to_string())),
            None => (flag, None),
        };

        match name {
            "h" | "help" => return Ok(Command::Help),
            "version" => return Ok(Command::Version),
            "no-normalize" => {
                parsed.no_normalize = match inline {
                    Some(value) => parse_bool(name, &value)?,
                    None => true,
                };
            }
            "hash" => {
                let value = take_value(name, inline, &mut args)?;
                let algorithm = value
                    .parse::<DigestAlgorithm>()
                    .map_err(|_| CliError::InvalidAlgorithm(value))?;
                parsed.algorithm = Some(algorithm);
            }
            "key" => parsed.key = Some(take_value(name, inline, &mut args)?),
            "uuid-version" => {
                let value = take_value(name, inline, &mut args)?;
                let version = value
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| CliError::InvalidUuidVersion(value))?;
                parsed.uuid_version = Some(version);
            }
            "charmap" => parsed.charmap = Some(PathBuf::from(take_value(name, inline, &mut args)?)),
            other => return Err(CliError::UnknownFlag(other.to_string())),
        }
    }

    if input.is_empty() {
        return Err(CliError::MissingInput);
    }
    parsed.input = input.join(" ");
    Ok(Command::Generate(parsed))
}

// "-" alone and plain words are input, not flags.
fn strip_dashes(arg: &str) -> Option<&str> {
    let flag = arg
        .strip_prefix("--")
        .or_else(|| arg.strip_prefix('-'))?;
    (!flag.is_empty()).then_some(flag)
}

fn take_value(
    name: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, CliError> {
    inline
        .or_else(|| rest.next())
        .ok_or_else(|| CliError::MissingValue(name.to_string()))
}

fn parse_bool(flag: &str, value: &str) -> Result<bool, CliError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(CliError::InvalidBool {
            flag: flag.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(args: &[&str]) -> CliArgs {
        match parse_args(args.iter().copied()) {
            Ok(Command::Generate(args)) => args,
            other => panic!("expected generate command, got {other:?}"),
        }
    }

    #[test]
    fn plain_input_uses_defaults() {
        let args = generate(&["hello"]);
        assert_eq!(args.input, "hello");
        assert_eq!(args.algorithm, None);
        assert_eq!(args.uuid_version, None);
        assert!(!args.no_normalize);
    }

    #[test]
    fn input_words_are_joined() {
        let args = generate(&["-hash", "sha1", "hello", "big", "world"]);
        assert_eq!(args.algorithm, Some(DigestAlgorithm::Sha1));
        assert_eq!(args.input, "hello big world");
    }

    #[test]
    fn all_flags() {
        let args = generate(&[
            "--hash=hmac",
            "-key",
            "s3cret",
            "-no-normalize",
            "-uuid-version",
            "5",
            "-charmap",
            "map.json",
            "user@example.com",
        ]);
        assert_eq!(
            args,
            CliArgs {
                algorithm: Some(DigestAlgorithm::HmacSha256),
                key: Some("s3cret".to_string()),
                no_normalize: true,
                uuid_version: Some(5),
                charmap: Some(PathBuf::from("map.json")),
                input: "user@example.com".to_string(),
            }
        );
    }

    #[test]
    fn flags_stop_at_first_input_or_double_dash() {
        let args = generate(&["hello", "-hash", "sha1"]);
        assert_eq!(args.algorithm, None);
        assert_eq!(args.input, "hello -hash sha1");

        let args = generate(&["--", "-not-a-flag"]);
        assert_eq!(args.input, "-not-a-flag");

        let args = generate(&["-"]);
        assert_eq!(args.input, "-");
    }

    #[test]
    fn bool_flag_accepts_explicit_value() {
        assert!(!generate(&["-no-normalize=false", "x"]).no_normalize);
        assert!(generate(&["-no-normalize=true", "x"]).no_normalize);
        assert_eq!(
            parse_args(["-no-normalize=maybe", "x"]),
            Err(CliError::InvalidBool {
                flag: "no-normalize".to_string(),
                value: "maybe".to_string()
            })
        );
    }

    #[test]
    fn help_and_version() {
        assert_eq!(parse_args(["-help"]), Ok(Command::Help));
        assert_eq!(parse_args(["--h"]), Ok(Command::Help));
        assert_eq!(parse_args(["-version"]), Ok(Command::Version));
        assert!(usage().contains("-uuid-version"));
    }

    #[test]
    fn errors() {
        assert_eq!(parse_args(Vec::<String>::new()), Err(CliError::MissingInput));
        assert_eq!(parse_args(["-no-normalize"]), Err(CliError::MissingInput));
        assert_eq!(
            parse_args(["-bogus", "x"]),
            Err(CliError::UnknownFlag("bogus".to_string()))
        );
        assert_eq!(
            parse_args(["-key"]),
            Err(CliError::MissingValue("key".to_string()))
        );
        assert_eq!(
            parse_args(["-hash", "crc32", "x"]),
            Err(CliError::InvalidAlgorithm("crc32".to_string()))
        );
        assert_eq!(
            parse_args(["-uuid-version", "five", "x"]),
            Err(CliError::InvalidUuidVersion("five".to_string()))
        );
    }

    #[test]
    fn utf8_arguments_are_collected() {
        let raw = vec![OsString::from("-hash"), OsString::from("sha1"), OsString::from("©")];
        assert_eq!(
            collect_args(raw),
            Ok(vec!["-hash".to_string(), "sha1".to_string(), "©".to_string()])
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_is_an_error() {
        use std::os::unix::ffi::OsStringExt;

        let raw = vec![OsString::from("-key"), OsString::from_vec(vec![b'f', 0xff])];
        assert_eq!(
            collect_args(raw),
            Err(CliError::NonUtf8Argument("f\u{FFFD}".to_string()))
        );
    }
}
