// yeager-setup: Yeager Engine setup tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Log capture for asserting on dry-run output.

use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer
            .lock()
            .map_err(|_| std::io::Error::other("buffer poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber and returns what it logged at
/// INFO and above, without timestamps, levels or targets.
pub(crate) async fn run_with_logs<F, Fut, T>(f: F) -> Result<(T, String)>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_writer(BufferWriter {
            buffer: buffer.clone(),
        })
        .with_max_level(Level::INFO)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .finish();

    let _guard = tracing::subscriber::set_default(subscriber);
    let value = f().await?;

    let guard = buffer
        .lock()
        .map_err(|_| anyhow::anyhow!("log buffer poisoned"))?;
    let logs = String::from_utf8_lossy(&guard)
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");
    Ok((value, logs))
}
