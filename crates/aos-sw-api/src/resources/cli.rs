// Run CLI commands through `POST cli`.
//
// The switch executes the command in a non-interactive CLI session and
// returns the captured output base64 encoded. Configuration commands are
// accepted too; the command runs with manager privileges.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::Method;
use serde::Serialize;
use serde_json::json;

use crate::call::{self, Call, Draft};
use crate::error::Error;
use crate::models::CliCommandResult;
use crate::transport::{Response, Transport, TransportHandle};

const CLI_SUCCESS: &str = "CCS_SUCCESS";

/// Decoded result of one CLI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutput {
    pub cmd: String,
    pub status: String,
    pub output: String,
    pub error_msg: String,
}

impl CommandOutput {
    /// The switch reports the command itself as successful. Transport and
    /// HTTP failures never get this far.
    pub fn is_success(&self) -> bool {
        self.status == CLI_SUCCESS
    }
}

pub struct CliClient<T: Transport> {
    handle: Arc<TransportHandle<T>>,
}

impl<T: Transport> CliClient<T> {
    pub(crate) fn new(handle: Arc<TransportHandle<T>>) -> Self {
        Self { handle }
    }

    /// Run `command`, e.g. `show version`.
    pub fn run(&self, command: &str) -> Call<'_, T, CommandOutput> {
        Call::exchange(
            self.handle.as_ref(),
            Draft::session(Method::POST, "cli", Some(json!({ "cmd": command }))),
            finish_command::<T>,
        )
    }
}

fn finish_command<T: Transport>(
    _handle: &TransportHandle<T>,
    outcome: Result<Response, Error>,
) -> Result<CommandOutput, Error> {
    let response = call::check(outcome)?;
    let raw: CliCommandResult = response.json()?;
    decode(raw, &response.body)
}

fn decode(raw: CliCommandResult, body: &str) -> Result<CommandOutput, Error> {
    let bytes = STANDARD
        .decode(raw.result_base64_encoded.trim())
        .map_err(|e| Error::Deserialization {
            message: format!("CLI output is not valid base64: {e}"),
            body: body.to_owned(),
        })?;

    Ok(CommandOutput {
        cmd: raw.cmd,
        status: raw.status,
        output: String::from_utf8_lossy(&bytes).into_owned(),
        error_msg: raw.error_msg,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw(encoded: &str, status: &str) -> CliCommandResult {
        CliCommandResult {
            cmd: "show version".into(),
            result_base64_encoded: encoded.into(),
            status: status.into(),
            error_msg: String::new(),
        }
    }

    #[test]
    fn decodes_command_output() {
        let encoded = STANDARD.encode("Image stamp: WC.16.10.0009\n");
        let output = decode(raw(&encoded, "CCS_SUCCESS"), "").unwrap();

        assert_eq!(output.output, "Image stamp: WC.16.10.0009\n");
        assert!(output.is_success());
    }

    #[test]
    fn failed_command_keeps_status() {
        let output = decode(raw("", "CCS_FAILURE"), "").unwrap();
        assert!(!output.is_success());
        assert_eq!(output.output, "");
    }

    #[test]
    fn invalid_base64_is_a_deserialization_error() {
        let err = decode(raw("not base64!", "CCS_SUCCESS"), "{}").unwrap_err();
        assert!(matches!(err, Error::Deserialization { .. }));
    }
}
