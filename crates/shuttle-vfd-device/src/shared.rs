//! Mutex-serialized handle for concurrent callers.
//!
//! The protocol cannot interleave packets from two commands, so the whole
//! mutate-then-flush sequence runs under one lock.

use std::sync::Arc;

use parking_lot::Mutex;
use shuttle_vfd_protocol::{DisplayMode, IconMask, TextStyle, VfdTransport, WIDTH};

use crate::controller::VfdController;
use crate::error::VfdError;

/// Cloneable, thread-safe wrapper around a [`VfdController`].
pub struct SharedVfd<T> {
    inner: Arc<Mutex<VfdController<T>>>,
}

impl<T> Clone for SharedVfd<T> {
    fn clone(&self) -> Self {
        SharedVfd {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: VfdTransport> SharedVfd<T> {
    pub fn new(controller: VfdController<T>) -> SharedVfd<T> {
        SharedVfd {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    pub fn set_text(&self, text: &[u8]) -> Result<(), VfdError> {
        self.inner.lock().set_text(text)
    }

    pub fn set_icons(&self, tokens: &str) -> Result<Vec<String>, VfdError> {
        self.inner.lock().set_icons(tokens)
    }

    pub fn set_mode(&self, name: &str) -> Result<(), VfdError> {
        self.inner.lock().set_mode(name)
    }

    pub fn set_text_style(&self, name: &str) -> Result<(), VfdError> {
        self.inner.lock().set_text_style(name)
    }

    pub fn text(&self) -> [u8; WIDTH] {
        *self.inner.lock().text()
    }

    pub fn icons(&self) -> IconMask {
        self.inner.lock().icons()
    }

    pub fn icons_string(&self) -> String {
        self.inner.lock().icons_string()
    }

    pub fn mode(&self) -> DisplayMode {
        self.inner.lock().mode()
    }

    pub fn text_style(&self) -> TextStyle {
        self.inner.lock().text_style()
    }
}
