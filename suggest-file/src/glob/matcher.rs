//! Glob evaluation rooted at a literal base directory.
//!
//! Each brace alternative is rewritten into the `glob` crate's syntax and
//! expanded with [`glob::glob_with`]:
//! - `*` and `?` never cross a separator,
//! - `**` matches zero or more directories, following directory symlinks,
//! - a trailing `**` matches every file below it.
//!
//! Names starting with `.` are matched only by a segment that itself starts
//! with `.`, and `**` never descends into hidden directories.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};

use super::braces::{class_end, expand_braces, unclosed_group};
use super::split::split_pattern;
use crate::error::{Error, Result};
use crate::path::filter::is_includable;
use crate::path::normalize::{self, SEPARATOR};

const UNCLOSED_GROUP: &str = "unclosed alternation group";

/// Options under which a match counts: hidden names need a literal `.`.
const STRICT: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// One brace alternative, compiled against the base directory.
#[derive(Debug)]
struct Alternative {
    pattern: Pattern,
    /// Whether some segment names hidden entries explicitly.
    dotted: bool,
    /// Whether the alternative contains `**`, which can loop through
    /// directory symlinks.
    recursive: bool,
}

impl Alternative {
    /// Options for the directory traversal.
    ///
    /// `glob` drops every hidden child of a listed directory when a literal
    /// leading dot is required, even for `.*`, so dotted alternatives list
    /// everything and rely on the [`STRICT`] recheck instead.
    fn walk_options(&self) -> MatchOptions {
        MatchOptions {
            require_literal_leading_dot: !self.dotted,
            ..STRICT
        }
    }
}

/// Rewrites one segment into `glob` syntax.
///
/// Backslash escapes become bracket classes, `[^` becomes `[!`, and runs of
/// `*` inside a segment collapse to one, as only a whole `**` segment is
/// recursive.
fn translate_segment(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = String::with_capacity(segment.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\\' if i + 1 < bytes.len() => {
                let c = segment[i + 1..].chars().next().unwrap_or('\\');
                if matches!(c, '*' | '?' | '[' | ']') {
                    out.push('[');
                    out.push(c);
                    out.push(']');
                } else {
                    out.push(c);
                }
                i += 1 + c.len_utf8();
            }
            b'[' => {
                let Some(end) = class_end(bytes, i) else {
                    // Left for the pattern compiler to reject.
                    out.push_str(&segment[i..]);
                    break;
                };
                let class = &segment[i..=end];
                match class.strip_prefix("[^") {
                    Some(rest) => {
                        out.push_str("[!");
                        out.push_str(rest);
                    }
                    None => out.push_str(class),
                }
                i = end + 1;
            }
            b'*' => {
                out.push('*');
                while bytes.get(i) == Some(&b'*') {
                    i += 1;
                }
            }
            _ => {
                let c = segment[i..].chars().next().unwrap_or_default();
                out.push(c);
                i += c.len_utf8();
            }
        }
    }

    out
}

/// Rewrites a cleaned alternative into `glob` syntax, segment by segment.
///
/// Runs of `**` collapse into one, and a trailing `**` becomes `**/*` so it
/// matches files rather than directories.
fn translate(alternative: &str) -> (String, bool) {
    let cleaned = normalize::clean(alternative).to_string_lossy().into_owned();
    let mut segments: Vec<String> = Vec::new();

    for segment in cleaned.split(SEPARATOR).filter(|s| !s.is_empty()) {
        if segment == "**" {
            if segments.last().map(String::as_str) != Some("**") {
                segments.push(segment.to_string());
            }
        } else {
            segments.push(translate_segment(segment));
        }
    }
    if segments.last().map(String::as_str) == Some("**") {
        segments.push("*".to_string());
    }

    let dotted = segments.iter().any(|segment| segment.starts_with('.'));
    (segments.join(&SEPARATOR.to_string()), dotted)
}

/// Compiles every brace alternative of `expression` under `base`.
fn compile(base: &Path, expression: &str) -> std::result::Result<Vec<Alternative>, PatternError> {
    if let Some(pos) = unclosed_group(expression) {
        return Err(PatternError {
            pos,
            msg: UNCLOSED_GROUP,
        });
    }

    let base = Pattern::escape(&base.to_string_lossy());
    expand_braces(expression)
        .iter()
        .map(|alternative| {
            let (relative, dotted) = translate(alternative);
            let recursive = relative.split(SEPARATOR).any(|segment| segment == "**");
            let full = match base.as_str() {
                "." => relative,
                "/" => format!("{SEPARATOR}{relative}"),
                base => format!("{base}{SEPARATOR}{relative}"),
            };
            Ok(Alternative {
                pattern: Pattern::new(&full)?,
                dotted,
                recursive,
            })
        })
        .collect()
}

/// Whether `path` names a `.` or `..` entry anywhere along it.
fn has_dot_segment(path: &Path) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .split(|&b| b == b'/')
        .any(|segment| segment == b"." || segment == b"..")
}

/// Accumulates matches for one expansion, each path at most once.
struct Evaluation<'a> {
    base: &'a Path,
    seen: HashSet<PathBuf>,
    canonical: HashMap<PathBuf, Option<PathBuf>>,
    results: Vec<PathBuf>,
}

impl<'a> Evaluation<'a> {
    fn new(base: &'a Path) -> Self {
        Self {
            base,
            seen: HashSet::new(),
            canonical: HashMap::new(),
            results: Vec::new(),
        }
    }

    fn expand(&mut self, alternative: &Alternative) -> std::result::Result<(), PatternError> {
        for entry in glob::glob_with(alternative.pattern.as_str(), alternative.walk_options())? {
            match entry {
                Ok(path) => {
                    if !has_dot_segment(&path)
                        && alternative.pattern.matches_path_with(&path, STRICT)
                        && !(alternative.recursive && self.revisits_directory(&path))
                    {
                        self.candidate(path);
                    }
                }
                Err(err) => log::debug!("glob: skipping {}: {}", err.path().display(), err.error()),
            }
        }
        Ok(())
    }

    /// Whether `path` passes through the same directory twice below the
    /// base, which only happens inside a symlink cycle.
    fn revisits_directory(&mut self, path: &Path) -> bool {
        let mut visited = HashSet::new();
        let mut dirs: Vec<&Path> = path
            .ancestors()
            .skip(1)
            .take_while(|dir| !dir.as_os_str().is_empty() && self.is_below_base(dir))
            .collect();
        dirs.reverse();

        for dir in dirs {
            let canonical = self
                .canonical
                .entry(dir.to_path_buf())
                .or_insert_with(|| fs::canonicalize(dir).ok());
            if let Some(canonical) = canonical {
                if !visited.insert(canonical.clone()) {
                    return true;
                }
            }
        }
        false
    }

    fn is_below_base(&self, dir: &Path) -> bool {
        self.base == Path::new(".") || dir.starts_with(self.base)
    }

    fn candidate(&mut self, path: PathBuf) {
        match fs::symlink_metadata(&path) {
            Ok(meta) => {
                if is_includable(&path, meta.file_type()) && self.seen.insert(path.clone()) {
                    self.results.push(path);
                }
            }
            Err(err) => log::debug!("glob: skipping {}: {err}", path.display()),
        }
    }
}

/// Expands a glob pattern into the files it matches.
///
/// Supports `*`, `?`, `[...]` classes, `{a,b}` alternation (nesting allowed)
/// and `**` for any number of directories. The pattern is split with
/// [`split_pattern`] and evaluated under the literal base, so both relative
/// and absolute patterns work. Only includable files are kept, in directory
/// order, each at most once. Entries that cannot be listed or queried are
/// skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidGlobSyntax`] if any alternative fails to compile,
/// e.g. an unterminated character class or alternation group.
///
/// # Examples
///
/// ```no_run
/// use suggest_file::glob::expand_glob;
///
/// for path in expand_glob("src/**/*.rs").unwrap() {
///     println!("{}", path.display());
/// }
/// ```
pub fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let (base, expression) = split_pattern(pattern);
    let invalid = |source| Error::InvalidGlobSyntax {
        pattern: pattern.to_string(),
        source,
    };

    let alternatives = compile(&base, &expression).map_err(invalid)?;

    let mut evaluation = Evaluation::new(&base);
    for alternative in &alternatives {
        evaluation.expand(alternative).map_err(invalid)?;
    }

    Ok(evaluation.results)
}
