//! Stream encode pipeline.
//!
//! [`EncoderConfig::create_state`] binds an output stream, a scratch buffer
//! rented from a [`BufferPool`], and a cancellation token. [`EncoderState::encode`]
//! then drives a [`RowCodec`] across every row of an image:
//!
//! ```text
//! Created -> Encoding -> Completed | Failed | Cancelled -> Disposed
//! ```
//!
//! The scratch buffer stages codec output and is flushed to the stream when
//! full and at completion. Disposal returns the buffer to its pool exactly
//! once and drops the stream unless the caller asked to keep it; it also
//! runs from `Drop`, so an early return or panic still releases both.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use alloc::boxed::Box;
use alloc::vec::Vec;
use enough::Stop;

use crate::codec::{ByteSink, Codec, RowCodec};
use crate::error::EncodeError;
use crate::image::ImageRows;
use crate::limits::Limits;
use crate::row::{Rect, RowLayout, RowProvider, RowSample};

/// Default scratch buffer size.
pub const DEFAULT_SCRATCH_LEN: usize = 64 * 1024;

// ── Buffer pools ────────────────────────────────────────────────────

/// Source of scratch buffers.
///
/// Every buffer handed out by [`rent`](BufferPool::rent) comes back through
/// [`give_back`](BufferPool::give_back) exactly once.
pub trait BufferPool: Send + Sync {
    /// An empty buffer with at least `min_capacity` bytes of capacity.
    fn rent(&self, min_capacity: usize) -> Vec<u8>;
    fn give_back(&self, buf: Vec<u8>);
}

/// Allocates on rent, frees on return.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeapPool;

impl BufferPool for HeapPool {
    fn rent(&self, min_capacity: usize) -> Vec<u8> {
        Vec::with_capacity(min_capacity)
    }

    fn give_back(&self, _buf: Vec<u8>) {}
}

/// Keeps up to `max_free` returned buffers for reuse across encodes.
#[derive(Debug)]
pub struct SharedPool {
    free: Mutex<Vec<Vec<u8>>>,
    max_free: usize,
}

impl SharedPool {
    pub fn new(max_free: usize) -> Self {
        Self {
            free: Mutex::new(Vec::new()),
            max_free,
        }
    }

    /// Buffers currently waiting for reuse.
    pub fn available(&self) -> usize {
        self.free.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for SharedPool {
    fn default() -> Self {
        Self::new(4)
    }
}

impl BufferPool for SharedPool {
    fn rent(&self, min_capacity: usize) -> Vec<u8> {
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        match free.iter().position(|b| b.capacity() >= min_capacity) {
            Some(i) => free.swap_remove(i),
            None => Vec::with_capacity(min_capacity),
        }
    }

    fn give_back(&self, mut buf: Vec<u8>) {
        buf.clear();
        let mut free = self.free.lock().unwrap_or_else(PoisonError::into_inner);
        if free.len() < self.max_free {
            free.push(buf);
        }
    }
}

// ── Configuration ───────────────────────────────────────────────────

/// Codec choice and resource settings for an encode.
///
/// ```
/// use zenpack::{Codec, EncoderConfig, PixelSlice, Rgba32, Unstoppable};
///
/// let px = [Rgba32::new(255, 0, 0, 255); 4];
/// let img = PixelSlice::from_pixels(&px, 2, 2)?;
/// let bmp = EncoderConfig::new(Codec::Bmp).encode_to_vec(&img, &Unstoppable)?;
/// assert_eq!(&bmp[..2], b"BM");
/// # Ok::<(), zenpack::EncodeError>(())
/// ```
#[derive(Clone)]
pub struct EncoderConfig {
    codec: Codec,
    layout: Option<RowLayout>,
    limits: Limits,
    scratch_len: usize,
    pool: Arc<dyn BufferPool>,
}

impl fmt::Debug for EncoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderConfig")
            .field("codec", &self.codec)
            .field("layout", &self.layout)
            .field("limits", &self.limits)
            .field("scratch_len", &self.scratch_len)
            .finish_non_exhaustive()
    }
}

impl EncoderConfig {
    pub fn new(codec: Codec) -> Self {
        Self {
            codec,
            layout: None,
            limits: Limits::default(),
            scratch_len: DEFAULT_SCRATCH_LEN,
            pool: Arc::new(HeapPool),
        }
    }

    /// Force the row layout instead of letting the codec pick.
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Bytes staged before each write to the stream (minimum 1).
    pub fn with_scratch_len(mut self, len: usize) -> Self {
        self.scratch_len = len.max(1);
        self
    }

    pub fn with_pool(mut self, pool: Arc<dyn BufferPool>) -> Self {
        self.pool = pool;
        self
    }

    pub fn codec(&self) -> Codec {
        self.codec
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Bind `stream` and rent the scratch buffer.
    ///
    /// With `leave_open`, [`EncoderState::dispose`] hands the stream back;
    /// otherwise it is flushed and dropped.
    pub fn create_state<'a, W: Write>(
        &self,
        stream: W,
        leave_open: bool,
        stop: &'a dyn Stop,
    ) -> EncoderState<'a, W> {
        let scratch = self.pool.rent(self.scratch_len);
        tracing::trace!(capacity = scratch.capacity(), "rented scratch buffer");
        EncoderState {
            config: self.clone(),
            stream: Some(stream),
            leave_open,
            stop,
            progress: None,
            scratch: Some(scratch),
            status: EncodeStatus::Created,
            bytes_written: 0,
        }
    }

    /// Encode `image` into a new `Vec`.
    pub fn encode_to_vec(
        &self,
        image: &dyn ImageRows,
        stop: &dyn Stop,
    ) -> Result<Vec<u8>, EncodeError> {
        let mut state = self.create_state(Vec::new(), true, stop);
        state.encode(image)?;
        Ok(state.dispose().unwrap_or_default())
    }
}

// ── Encoder state ───────────────────────────────────────────────────

/// Lifecycle of an [`EncoderState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EncodeStatus {
    /// Stream and scratch buffer bound, nothing written.
    Created,
    Encoding,
    Completed,
    Failed,
    /// Stopped by the cancellation token between rows.
    Cancelled,
    /// Scratch buffer returned, stream released.
    Disposed,
}

/// One encode of one image into one stream.
pub struct EncoderState<'a, W: Write> {
    config: EncoderConfig,
    stream: Option<W>,
    leave_open: bool,
    stop: &'a dyn Stop,
    progress: Option<Box<dyn FnMut(f32, Option<Rect>) + 'a>>,
    scratch: Option<Vec<u8>>,
    status: EncodeStatus,
    bytes_written: u64,
}

impl<'a, W: Write> EncoderState<'a, W> {
    /// Report `(percentage, rows just finished)` while encoding.
    /// Percentages never decrease and the last report is 100.
    pub fn with_progress(mut self, progress: impl FnMut(f32, Option<Rect>) + 'a) -> Self {
        self.progress = Some(Box::new(progress));
        self
    }

    pub fn status(&self) -> EncodeStatus {
        self.status
    }

    /// Bytes written to the stream so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Encode `image` with the configured codec.
    pub fn encode(&mut self, image: &dyn ImageRows) -> Result<(), EncodeError> {
        let mut codec = self.config.codec.encoder();
        self.encode_with(&mut *codec, image)
    }

    /// Encode `image` with a caller-supplied codec.
    ///
    /// Only valid once, from [`EncodeStatus::Created`].
    pub fn encode_with(
        &mut self,
        codec: &mut dyn RowCodec,
        image: &dyn ImageRows,
    ) -> Result<(), EncodeError> {
        if self.status != EncodeStatus::Created {
            return Err(EncodeError::InvalidState { state: self.status });
        }
        let (width, height) = (image.width(), image.height());
        let source = image.format();

        // Everything that can be rejected up front is, before the first write.
        self.config.limits.check(width, height)?;
        self.config.limits.check_memory(self.config.scratch_len)?;
        let format = codec.negotiate(source, self.config.layout)?;
        let mut rows = RowProvider::new(image, format.layout, self.stop)?;
        self.config
            .limits
            .check_memory(rows.row_bytes(RowSample::F32))?;

        self.status = EncodeStatus::Encoding;
        tracing::debug!(
            width,
            height,
            source = %source,
            layout = ?format.layout,
            sample = ?format.sample,
            codec = codec.name(),
            "encode started"
        );

        if let Some(progress) = self.progress.as_deref_mut() {
            rows = rows.with_progress(progress);
        }
        let (Some(stream), Some(scratch)) = (self.stream.as_mut(), self.scratch.as_mut()) else {
            self.status = EncodeStatus::Failed;
            return Err(EncodeError::InvalidState { state: EncodeStatus::Disposed });
        };
        let mut sink = EncodeSink {
            stream,
            buf: scratch,
            capacity: self.config.scratch_len,
            written: 0,
        };
        let result = codec
            .encode(&mut rows, format, &mut sink)
            .and_then(|()| sink.flush());
        if result.is_ok() {
            rows.finish();
        }
        self.bytes_written += sink.written;
        drop(rows);

        match &result {
            Ok(()) => {
                self.status = EncodeStatus::Completed;
                tracing::debug!(bytes = self.bytes_written, "encode completed");
            }
            Err(e) if e.is_cancellation() => {
                self.status = EncodeStatus::Cancelled;
                tracing::debug!(bytes = self.bytes_written, "encode cancelled");
            }
            Err(e) => {
                self.status = EncodeStatus::Failed;
                tracing::debug!(error = %e, "encode failed");
            }
        }
        result
    }

    /// Return the scratch buffer and release the stream.
    ///
    /// Gives the stream back when the state was created with `leave_open`.
    /// Later calls (and the eventual `Drop`) do nothing.
    pub fn dispose(&mut self) -> Option<W> {
        if let Some(buf) = self.scratch.take() {
            tracing::trace!(capacity = buf.capacity(), "returning scratch buffer");
            self.config.pool.give_back(buf);
        }
        self.status = EncodeStatus::Disposed;
        let mut stream = self.stream.take()?;
        if self.leave_open {
            return Some(stream);
        }
        if let Err(e) = stream.flush() {
            tracing::debug!(error = %e, "flush on dispose failed");
        }
        None
    }
}

impl<W: Write> Drop for EncoderState<'_, W> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<W: Write> fmt::Debug for EncoderState<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderState")
            .field("config", &self.config)
            .field("status", &self.status)
            .field("leave_open", &self.leave_open)
            .field("bytes_written", &self.bytes_written)
            .finish_non_exhaustive()
    }
}

/// Stages codec output in the scratch buffer.
struct EncodeSink<'s, W: Write> {
    stream: &'s mut W,
    buf: &'s mut Vec<u8>,
    capacity: usize,
    written: u64,
}

impl<W: Write> EncodeSink<'_, W> {
    fn flush(&mut self) -> Result<(), EncodeError> {
        if !self.buf.is_empty() {
            self.stream.write_all(self.buf.as_slice())?;
            self.written += self.buf.len() as u64;
            self.buf.clear();
        }
        self.stream.flush()?;
        Ok(())
    }
}

impl<W: Write> ByteSink for EncodeSink<'_, W> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        if self.buf.len() + bytes.len() > self.capacity && !self.buf.is_empty() {
            self.stream.write_all(self.buf.as_slice())?;
            self.written += self.buf.len() as u64;
            self.buf.clear();
        }
        if bytes.len() >= self.capacity {
            self.stream.write_all(bytes)?;
            self.written += bytes.len() as u64;
        } else {
            self.buf.extend_from_slice(bytes);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::PnmFormat;
    use crate::image::PixelSlice;
    use crate::pixel::Gray8;
    use enough::Unstoppable;

    #[test]
    fn sink_stages_until_full() {
        let mut stream = Vec::new();
        let mut buf = Vec::new();
        let mut sink = EncodeSink {
            stream: &mut stream,
            buf: &mut buf,
            capacity: 4,
            written: 0,
        };
        sink.write_all(&[1, 2]).unwrap();
        sink.write_all(&[3]).unwrap();
        assert_eq!(sink.written, 0);
        sink.write_all(&[4, 5]).unwrap();
        assert_eq!(sink.written, 3);
        sink.write_all(&[6, 7, 8, 9]).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.written, 9);
        assert_eq!(stream, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn shared_pool_reuses_buffers() {
        let pool = SharedPool::new(1);
        let a = pool.rent(16);
        let cap = a.capacity();
        pool.give_back(a);
        pool.give_back(Vec::with_capacity(8));
        assert_eq!(pool.available(), 1);
        let b = pool.rent(16);
        assert_eq!(b.capacity(), cap);
        assert_eq!(pool.available(), 0);
    }

    #[test]
    fn second_encode_is_rejected() {
        let px = [Gray8::new(7); 4];
        let img = PixelSlice::from_pixels(&px, 2, 2).unwrap();
        let config = EncoderConfig::new(Codec::Pnm(PnmFormat::Pgm)).with_scratch_len(3);
        let mut state = config.create_state(Vec::new(), true, &Unstoppable);
        state.encode(&img).unwrap();
        assert_eq!(state.status(), EncodeStatus::Completed);
        let err = state.encode(&img).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidState {
                state: EncodeStatus::Completed
            }
        ));
        let out = state.dispose().unwrap();
        assert!(out.ends_with(&[7, 7, 7, 7]));
        assert_eq!(state.status(), EncodeStatus::Disposed);
        assert!(state.dispose().is_none());
    }
}
