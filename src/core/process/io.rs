// ccs-deps: CCS dependency installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming and capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks ──► JoinHandle<StreamCapture>
//!     each line: debug! (FORWARD_TO_LOG), kept (KEEP_IN_STRING), tail ring
//!   wait
//!   join readers
//!   --> (ProcessOutput { stdout, stderr, exit_code }, output tail)
//! ```

use crate::error::Result;
use anyhow::Context;
use std::collections::VecDeque;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};

/// Number of trailing output lines kept for failure diagnostics.
pub(super) const OUTPUT_TAIL_LINES: usize = 40;

/// Lines collected from one stream.
#[derive(Debug, Default)]
struct StreamCapture {
    kept: Vec<String>,
    tail: VecDeque<String>,
}

impl StreamCapture {
    fn push(&mut self, line: String, keep: bool) {
        if self.tail.len() == OUTPUT_TAIL_LINES {
            self.tail.pop_front();
        }
        if keep {
            self.kept.push(line.clone());
        }
        self.tail.push_back(line);
    }
}

/// Spawns a reader task for a piped stream.
fn spawn_reader<R>(
    stream: Option<R>,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<StreamCapture>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    let process_name = process_name.to_string();
    stream.map(|stream| {
        tokio::spawn(async move { read_stream(stream, flags, &process_name, stream_name).await })
    })
}

/// Reads lines until EOF.
///
/// Bytes that are not valid UTF-8 are replaced rather than ending the read,
/// and the stream is drained after a read error so the child never sees a
/// closed pipe.
async fn read_stream<R>(
    reader: R,
    flags: StreamFlags,
    process_name: &str,
    stream_name: &str,
) -> StreamCapture
where
    R: AsyncRead + Unpin,
{
    let keep = flags.contains(StreamFlags::KEEP_IN_STRING);
    let forward = flags.contains(StreamFlags::FORWARD_TO_LOG);
    let mut capture = StreamCapture::default();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = decode_line(&buf);
                if forward {
                    debug!(process = %process_name, stream = %stream_name, "{line}");
                }
                capture.push(line, keep);
            }
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream, discarding remaining output"
                );
                drain(&mut reader).await;
                break;
            }
        }
    }
    capture
}

/// Decodes one raw line, dropping the trailing `\n` or `\r\n`.
pub(super) fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Consumes the rest of a stream without keeping it.
async fn drain<R>(reader: &mut R)
where
    R: AsyncRead + Unpin,
{
    let mut sink = tokio::io::sink();
    if let Err(e) = tokio::io::copy(reader, &mut sink).await {
        debug!(error = %e, "stream closed while draining");
    }
}

/// Waits for a reader task, tolerating a task that panicked.
async fn join_reader(handle: Option<JoinHandle<StreamCapture>>, process_name: &str) -> StreamCapture {
    match handle {
        Some(handle) => handle.await.unwrap_or_else(|e| {
            warn!(process = %process_name, error = %e, "output reader task failed");
            StreamCapture::default()
        }),
        None => StreamCapture::default(),
    }
}

impl ProcessBuilder {
    /// Streams the child's output while waiting for it to exit.
    ///
    /// Returns the output together with the last lines printed on stdout
    /// followed by those on stderr.
    pub(super) async fn run_child(
        &self,
        name: &str,
        child: &mut Child,
    ) -> Result<(ProcessOutput, Vec<String>)> {
        let stdout_handle = spawn_reader(child.stdout.take(), self.stdout_stream(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), self.stderr_stream(), name, "stderr");

        let status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name} to exit"))?;

        let stdout = join_reader(stdout_handle, name).await;
        let stderr = join_reader(stderr_handle, name).await;

        let mut tail: Vec<String> = stdout.tail.into_iter().chain(stderr.tail).collect();
        if tail.len() > OUTPUT_TAIL_LINES {
            tail.drain(..tail.len() - OUTPUT_TAIL_LINES);
        }

        let output = ProcessOutput::new(
            status.code().unwrap_or(-1),
            stdout.kept.join("\n"),
            stderr.kept.join("\n"),
        );
        Ok((output, tail))
    }
}
