use super::ResponseWriter;
use crate::aa::{AAFramework, Extension, ExtensionSet, LabelType, Semantics};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// It also writes the extensions computed for the frameworks, either as answers to problems or as report sections.
///
/// # Example
///
/// The following example writes an AF to the standard output using the Aspartix format.
///
/// ```
/// # use dungaf::aa::{AAFramework, LabelType};
/// # use dungaf::io::AspartixWriter;
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(&af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new_with_attacks([["a", "b"]]).unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

fn extension_to_string<T: LabelType>(extension: &Extension<T>) -> String {
    format!(
        "[{}]",
        extension
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(",")
    )
}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    ///
    /// Arguments and attacks are written in the order of their labels.
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let context = "while writing a framework";
        for arg in framework.arguments() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for (attacker, attacked) in framework.attacks() {
            writeln!(writer, "att({},{}).", attacker, attacked).context(context)?;
        }
        writer.flush().context(context)
    }

    /// Writes a report section giving the extensions computed for a semantics.
    ///
    /// The section begins with a heading line naming the semantics and giving the number of extensions,
    /// followed by one line per extension.
    ///
    /// # Example
    ///
    /// ```
    /// # use dungaf::aa::{AAFramework, Semantics};
    /// # use dungaf::io::AspartixWriter;
    /// let af = AAFramework::new_with_attacks([["a", "b"], ["b", "a"]]).unwrap();
    /// let mut buffer = Vec::new();
    /// AspartixWriter::default()
    ///     .write_report_section(&mut buffer, Semantics::Preferred, &af.preferred_extensions())
    ///     .unwrap();
    /// assert_eq!("2 *preferred* extensions:\n[a]\n[b]\n", String::from_utf8(buffer).unwrap());
    /// ```
    pub fn write_report_section<T: LabelType>(
        &self,
        writer: &mut dyn Write,
        semantics: Semantics,
        extensions: &ExtensionSet<T>,
    ) -> Result<()> {
        let context = || format!("while writing the {} report section", semantics.name());
        if semantics.is_unique_extension() {
            writeln!(writer, "the *{}* extension:", semantics.name()).with_context(context)?;
        } else {
            let plural = if extensions.len() == 1 { "" } else { "s" };
            writeln!(
                writer,
                "{} *{}* extension{}:",
                extensions.len(),
                semantics.name(),
                plural
            )
            .with_context(context)?;
        }
        for ext in extensions {
            writeln!(writer, "{}", extension_to_string(ext)).with_context(context)?;
        }
        writer.flush().with_context(context)
    }
}

impl<T> ResponseWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(
        &self,
        writer: &mut dyn Write,
        extension: &Extension<T>,
    ) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", extension_to_string(extension)).context(context)?;
        writer.flush().context(context)
    }

    fn write_extension_set(
        &self,
        writer: &mut dyn Write,
        extensions: &ExtensionSet<T>,
    ) -> Result<()> {
        let context = "while writing an extension set";
        writeln!(
            writer,
            "[{}]",
            extensions
                .iter()
                .map(extension_to_string)
                .collect::<Vec<String>>()
                .join(",")
        )
        .context(context)?;
        writer.flush().context(context)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}
