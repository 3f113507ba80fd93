// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for child processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks (BufReader.read_until '\n', raw bytes)
//!     FORWARD_TO_LOG  --> trace! (lossy UTF-8, one event per line)
//!     KEEP_IN_STRING  --> bytes kept verbatim, lossy UTF-8 at the end
//!   wait  |  token.cancelled()
//!   --> ProcessOutput { stdout, stderr, exit_code, interrupted }
//! ```

use std::process::ExitStatus;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, Result, SetupError};

pub(super) type Reader = JoinHandle<std::io::Result<String>>;

/// Spawns a line reader for one stream, if its flags need one.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<Reader>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move { read_stream(stream, flags, &name, stream_name).await })
    })
}

pub(super) async fn join_reader(handle: Option<Reader>, cmd_line: &str) -> Result<String> {
    let Some(handle) = handle else {
        return Ok(String::new());
    };
    let output_error = |message: String| {
        SetupError::from(ProcessError::OutputError {
            command: cmd_line.to_string(),
            message,
        })
    };

    match handle.await {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(output_error(e.to_string()).into()),
        Err(e) => Err(output_error(e.to_string()).into()),
    }
}

impl ProcessBuilder {
    /// Drives a spawned child to completion, collecting its output.
    pub(super) async fn run_child(
        &self,
        name: &str,
        cmd_line: &str,
        child: &mut Child,
        token: Option<CancellationToken>,
    ) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_flags(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_flags(), name, "stderr");

        let (status, interrupted) = wait(name, child, token).await?;

        let stdout = join_reader(stdout_handle, cmd_line).await?;
        let stderr = join_reader(stderr_handle, cmd_line).await?;

        Ok(ProcessOutput::new(
            status.code().unwrap_or(-1),
            stdout,
            stderr,
            interrupted,
        ))
    }
}

async fn wait(
    name: &str,
    child: &mut Child,
    token: Option<CancellationToken>,
) -> Result<(ExitStatus, bool)> {
    let token = token.unwrap_or_default();

    tokio::select! {
        status = child.wait() => Ok((status.map_err(SetupError::from)?, false)),
        () = token.cancelled() => {
            warn!(process = %name, "cancellation requested, terminating process");
            child.kill().await.ok();
            Ok((child.wait().await.map_err(SetupError::from)?, true))
        }
    }
}

/// Reads `reader` to the end, logging each line and/or keeping the bytes.
///
/// Kept output is byte-for-byte what the child wrote, decoded lossily.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> std::io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut kept = Vec::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).await? == 0 {
            break;
        }
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            let text = String::from_utf8_lossy(&line);
            trace!(
                process = %process_name,
                stream = %stream_name,
                line = %text.trim_end_matches(['\r', '\n']),
                "output"
            );
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            kept.extend_from_slice(&line);
        }
    }

    Ok(String::from_utf8_lossy(&kept).into_owned())
}
