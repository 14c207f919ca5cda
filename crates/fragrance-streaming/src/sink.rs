//! Shell-first streaming sink.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use tracing::debug;

use crate::StreamError;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Initial state, shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Response has been completed.
    Completed,
}

/// Observable progress of a streamed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamPhase {
    Start,
    ShellSent,
    /// Name of the most recent section or deferred replacement.
    SectionSent(String),
    Completed,
}

/// Streaming sink that enforces the shell-first pattern.
///
/// This is generic over the underlying sink type to work with any
/// `Sink<Vec<u8>>` implementation, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell HTML. Must be called before any sections.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(StreamError::ShellAlreadySent),
            SinkState::Completed => return Err(StreamError::Completed),
        }

        self.write(html.as_bytes().to_vec()).await?;
        self.state = SinkState::ShellSent;
        debug!(bytes = html.len(), "shell sent");

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        self.ensure_open()?;

        self.write(html.as_bytes().to_vec()).await?;
        self.sections_sent.push(name.to_string());
        debug!(section = name, bytes = html.len(), "section sent");

        Ok(())
    }

    /// Send markup that replaces the element with id `target` once it arrives.
    ///
    /// The markup travels inside a `<template>` and is moved into place by the
    /// swap helper the shell installs in the head.
    pub async fn send_deferred(&mut self, target: &str, html: &str) -> Result<(), StreamError> {
        self.ensure_open()?;
        if !is_plain_token(target) {
            return Err(StreamError::InvalidTarget(target.to_string()));
        }

        let chunk = format!(
            "<template data-deferred-for=\"{target}\">{html}</template>\
<script>__fragranceSwap(\"{target}\")</script>\n"
        );
        self.write(chunk.into_bytes()).await?;
        self.sections_sent.push(format!("{}:deferred", target));
        debug!(target = target, bytes = html.len(), "deferred replacement sent");

        Ok(())
    }

    /// Send the closing markup and complete the response.
    pub async fn finish(&mut self, closing: &str) -> Result<(), StreamError> {
        self.ensure_open()?;
        self.write(closing.as_bytes().to_vec()).await?;
        self.complete();
        Ok(())
    }

    /// Mark the response complete. Further sends fail.
    pub fn complete(&mut self) {
        self.state = SinkState::Completed;
        debug!(
            sections = self.sections_sent.len(),
            bytes = self.bytes_sent,
            "stream complete"
        );
    }

    /// Get the list of sections sent.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Get the current phase.
    pub fn phase(&self) -> StreamPhase {
        match self.state {
            SinkState::Initial => StreamPhase::Start,
            SinkState::ShellSent => match self.sections_sent.last() {
                Some(name) => StreamPhase::SectionSent(name.clone()),
                None => StreamPhase::ShellSent,
            },
            SinkState::Completed => StreamPhase::Completed,
        }
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn ensure_open(&self) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => Err(StreamError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Completed => Err(StreamError::Completed),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), StreamError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| StreamError::Write(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }
}

fn is_plain_token(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
