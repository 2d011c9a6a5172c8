use crate::core::entities::{CollapseRequest, CommandLine, ToolInstallation};
use std::ffi::OsString;

/// Environment variables that force UTF-8 mode in the child interpreter.
pub const UTF8_ENV: [(&str, &str); 2] = [("PYTHONUTF8", "1"), ("PYTHONIOENCODING", "utf-8")];

/// Composes `collapse_table.py` invocations.
///
/// Fixed options always precede the caller's passthrough arguments, so a flag
/// repeated in the passthrough comes last on the command line.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    interpreter: OsString,
}

impl CommandBuilder {
    pub fn new(interpreter: impl Into<OsString>) -> Self {
        CommandBuilder {
            interpreter: interpreter.into(),
        }
    }

    pub fn build(&self, installation: &ToolInstallation, request: &CollapseRequest) -> CommandLine {
        let mut command = CommandLine::new(self.interpreter.clone());

        command.arg("-X").arg("utf8");
        command.arg(installation.entry_script());

        command.arg("-i").arg(&request.input_table);
        command.arg("-o").arg(&request.output_table);

        let groups_file = request
            .groups_file
            .as_deref()
            .unwrap_or_else(|| installation.database_file());
        command.arg("-g").arg(groups_file);

        command
            .arg("--group_leftovers_as")
            .arg(&request.group_leftovers_as);
        command
            .arg("--normalize_collapsed")
            .arg(request.normalize.as_str());
        command
            .arg("--column_names_are_in")
            .arg(request.column_names_in.as_str());

        // An empty report path means no report.
        if let Some(report) = request
            .output_report
            .as_ref()
            .filter(|report| !report.as_os_str().is_empty())
        {
            command.arg("-r").arg(report);
        }

        if request.verbose {
            command.arg("-v");
        }

        for token in &request.additional_args {
            command.arg(token);
        }

        for (key, value) in UTF8_ENV {
            command.env(key, value);
        }

        command
    }
}
