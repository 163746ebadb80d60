use super::{InstanceReader, WarningHandler};
use crate::aa::AAFramework;
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\)\.\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\)\.\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\)\.\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\)\.\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
    static ref COMMENT_LINE_PATTERN: Regex = Regex::new(r"^\s*%").unwrap();
    static ref LABEL_PATTERN: Regex = Regex::new(r"^[_[:alpha:]][_[:alpha:]\d]*$").unwrap();
}

/// Returns `true` iff a string can be used as an argument label in the Aspartix format.
///
/// ```
/// # use dungaf::io::is_aspartix_label;
/// assert!(is_aspartix_label("a1_"));
/// assert!(!is_aspartix_label("1a"));
/// assert!(!is_aspartix_label(" a"));
/// ```
pub fn is_aspartix_label(label: &str) -> bool {
    LABEL_PATTERN.is_match(label)
}

const SPACES_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

fn captured_arg(c: &Captures, i: usize, warnings: &mut Vec<String>) -> String {
    let str_arg = c.get(i).map(|m| m.as_str()).unwrap_or_default();
    let trimmed_str_arg = str_arg.trim().to_string();
    if trimmed_str_arg.len() != str_arg.len() {
        warnings.push(SPACES_WARNING.to_string());
    }
    trimmed_str_arg
}

fn try_read_arg_line(l: &str, warnings: &mut Vec<String>) -> Result<Option<String>> {
    if !ARG_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
        Some(c) => Ok(Some(captured_arg(&c, 1, warnings))),
        None => Err(anyhow!("invalid argument name in {}", l.trim())),
    }
}

fn try_read_att_line(l: &str, warnings: &mut Vec<String>) -> Result<Option<(String, String)>> {
    if !ATT_LINE_PATTERN.is_match(l) {
        return Ok(None);
    }
    match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
        Some(c) => {
            let from = captured_arg(&c, 1, warnings);
            let to = captured_arg(&c, 2, warnings);
            Ok(Some((from, to)))
        }
        None => Err(anyhow!("invalid argument names in {}", l.trim())),
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// Arguments must be declared before the attacks that involve them.
/// Lines beginning with `%` are comments.
///
/// # Example
///
/// ```
/// # use dungaf::aa::AAFramework;
/// # use dungaf::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn handle_warnings(&self, line_index: usize, warnings: &mut Vec<String>) {
        for w in warnings.drain(..) {
            self.warning_handlers
                .iter()
                .for_each(|h| (h)(1 + line_index, w.clone()));
        }
    }
}

impl InstanceReader<String> for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut af = AAFramework::default();
        let mut read_attacks = false;
        let mut warnings = vec![];
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() || COMMENT_LINE_PATTERN.is_match(l) {
                continue;
            }
            if let Some(a) = try_read_arg_line(l, &mut warnings).with_context(context)? {
                self.handle_warnings(i, &mut warnings);
                if read_attacks {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                af.add_arguments([a]);
                continue;
            }
            if let Some((a, b)) = try_read_att_line(l, &mut warnings).with_context(context)? {
                self.handle_warnings(i, &mut warnings);
                read_attacks = true;
                for label in [&a, &b] {
                    if !af.argument_set().contains(label) {
                        return Err(anyhow!("undefined argument {}", label)).with_context(context);
                    }
                }
                af.add_attacks([[a, b]]).with_context(context)?;
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        Ok(af)
    }

    fn read_arg_from_str(&self, af: &AAFramework<String>, arg: &str) -> Result<String> {
        let label = arg.to_string();
        if af.argument_set().contains(&label) {
            Ok(label)
        } else {
            Err(anyhow!("no such argument: {}", arg))
        }
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
