//! MeCab process plumbing shared by the Japanese and Korean parsers
//!
//! The analyzer runs as a child process. A [`MecabHandle`] lives for one
//! parse call only, because output format and dictionary are fixed when the
//! process starts.

pub(crate) mod decode;
mod probe;

use std::ffi::{OsStr, OsString};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStderr, ChildStdin, ChildStdout, Command, Stdio};
use std::sync::Arc;
use std::thread;

use crate::error::{Error, Result};
use crate::language::Language;
use crate::token::Token;

pub use probe::AvailabilityProbe;

/// Environment variable naming the MeCab executable
pub const MECAB_PATH_VAR: &str = "MECAB_PATH";

const DEFAULT_PROGRAM: &str = "mecab";
const NOT_SET: &str = "<NOTSET>";
const MIN_INPUT_BUFFER: usize = 8192;

/// Where to find the analyzer and its dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MecabSettings {
    program: Option<PathBuf>,
    dicdir: Option<PathBuf>,
}

impl MecabSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `MECAB_PATH` and the given dictionary variable
    pub fn from_env(dicdir_var: &str) -> Self {
        let read = |var: &str| {
            std::env::var_os(var)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self {
            program: read(MECAB_PATH_VAR),
            dicdir: read(dicdir_var),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn with_dicdir(mut self, dicdir: impl Into<PathBuf>) -> Self {
        self.dicdir = Some(dicdir.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        self.program
            .as_deref()
            .map(|p| p.as_os_str())
            .unwrap_or_else(|| OsStr::new(DEFAULT_PROGRAM))
    }

    /// Cache key for the availability probe
    pub fn probe_key(&self) -> String {
        let render = |value: &Option<PathBuf>| {
            value
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| NOT_SET.to_string())
        };
        format!("{}|{}", render(&self.program), render(&self.dicdir))
    }
}

/// Node, unknown-node and end-of-sentence output formats
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeFormat {
    pub node: &'static str,
    pub unknown: &'static str,
    pub eos: &'static str,
}

/// `surface\tchar-type\tposid` per node, `EOP\t3\t7` per line
pub(crate) const FEATURE_FORMAT: NodeFormat = NodeFormat {
    node: r"%m\t%t\t%h\n",
    unknown: r"%m\t%t\t%h\n",
    eos: r"EOP\t3\t7\n",
};

/// Katakana reading per node (surface when unknown), one line per input line
pub(crate) const READING_FORMAT: NodeFormat = NodeFormat {
    node: r"%pS%f[7]",
    unknown: r"%pS%m",
    eos: r"\n",
};

/// A running analyzer process, killed and reaped on drop
pub(crate) struct MecabHandle {
    child: Child,
    program: String,
    reaped: bool,
}

impl MecabHandle {
    /// Start the analyzer; `longest_line` sizes its input buffer
    pub fn open(settings: &MecabSettings, format: NodeFormat, longest_line: usize) -> Result<Self> {
        let program = settings.program().to_string_lossy().into_owned();
        let buffer_size = (longest_line + 1).max(MIN_INPUT_BUFFER);

        let mut command = Command::new(settings.program());
        command
            .arg("-F")
            .arg(format.node)
            .arg("-U")
            .arg(format.unknown)
            .arg("-E")
            .arg(format.eos)
            .arg(format!("--input-buffer-size={buffer_size}"));
        if let Some(dicdir) = &settings.dicdir {
            let mut arg = OsString::from("--dicdir=");
            arg.push(dicdir);
            command.arg(arg);
        }
        log::trace!("starting analyzer: {command:?}");

        let child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::AnalyzerSpawn {
                program: program.clone(),
                source,
            })?;

        Ok(Self {
            child,
            program,
            reaped: false,
        })
    }

    /// Feed `input` and collect everything the analyzer prints.
    ///
    /// Diagnostics written to the analyzer's stderr are captured, never
    /// forwarded; they are only reported inside [`Error::AnalyzerFailed`].
    pub fn analyze(mut self, input: &str) -> Result<String> {
        let (stdin, stdout, stderr) = self.take_pipes()?;

        let (written, output, diagnostics) = thread::scope(|scope| {
            let writer = scope.spawn(move || write_all(stdin, input));
            let err_reader = scope.spawn(move || read_all(stderr));
            let output = read_all(stdout);
            (join(writer), output, join(err_reader))
        });

        let status = self.child.wait()?;
        self.reaped = true;

        let diagnostics = String::from_utf8_lossy(&diagnostics.unwrap_or_default()).into_owned();
        if !status.success() {
            return Err(Error::AnalyzerFailed {
                status,
                stderr: diagnostics.trim().to_string(),
            });
        }
        if !diagnostics.trim().is_empty() {
            log::debug!("{} diagnostics: {}", self.program, diagnostics.trim());
        }

        written?;
        Ok(String::from_utf8(output?)?)
    }

    fn take_pipes(&mut self) -> Result<(ChildStdin, ChildStdout, ChildStderr)> {
        let missing = || Error::AnalyzerIo(io::Error::other("analyzer pipe not captured"));
        let stdin = self.child.stdin.take().ok_or_else(missing)?;
        let stdout = self.child.stdout.take().ok_or_else(missing)?;
        let stderr = self.child.stderr.take().ok_or_else(missing)?;
        Ok((stdin, stdout, stderr))
    }
}

impl Drop for MecabHandle {
    fn drop(&mut self) {
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
        }
    }
}

fn write_all(mut stdin: ChildStdin, input: &str) -> io::Result<()> {
    stdin.write_all(input.as_bytes())?;
    stdin.flush()
}

fn read_all(mut pipe: impl Read) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    pipe.read_to_end(&mut buf)?;
    Ok(buf)
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, io::Result<T>>) -> io::Result<T> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("analyzer pipe thread panicked")))
}

/// Settings source plus probe cache for one analyzer-backed parser
#[derive(Debug, Clone)]
pub(crate) struct MecabAnalyzer {
    dicdir_var: &'static str,
    settings: Option<MecabSettings>,
    probe: Arc<AvailabilityProbe>,
}

impl MecabAnalyzer {
    /// Settings re-read from the environment on every call
    pub fn from_env(dicdir_var: &'static str, probe: Arc<AvailabilityProbe>) -> Self {
        Self {
            dicdir_var,
            settings: None,
            probe,
        }
    }

    /// Fixed settings with a private probe cache
    pub fn with_settings(dicdir_var: &'static str, settings: MecabSettings) -> Self {
        Self {
            dicdir_var,
            settings: Some(settings),
            probe: Arc::new(AvailabilityProbe::new()),
        }
    }

    pub fn settings(&self) -> MecabSettings {
        self.settings
            .clone()
            .unwrap_or_else(|| MecabSettings::from_env(self.dicdir_var))
    }

    pub fn is_supported(&self) -> bool {
        let settings = self.settings();
        self.probe.check(&settings.probe_key(), || -> Result<()> {
            MecabHandle::open(&settings, FEATURE_FORMAT, 0)?.analyze("")?;
            Ok(())
        })
    }

    /// Tokenize `text`, one analyzer line per input line, in document order
    pub fn parse_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let lines = decode::prepare_lines(text);
        let longest = lines.iter().map(String::len).max().unwrap_or(0);
        let mut input = lines.join("\n");
        input.push('\n');

        let output = MecabHandle::open(&self.settings(), FEATURE_FORMAT, longest)?.analyze(&input)?;
        Ok(decode::decode_output(&output, language))
    }

    /// Raw reading output for each line of `text`, joined by newlines
    pub fn reading(&self, text: &str) -> Result<String> {
        let longest = text.lines().map(str::len).max().unwrap_or(0);
        let mut input = text.replace("\r\n", "\n");
        input.push('\n');

        let output = MecabHandle::open(&self.settings(), READING_FORMAT, longest)?.analyze(&input)?;
        Ok(output
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string())
    }
}
