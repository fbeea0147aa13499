// playprobe-core/src/mocks.rs

// --- Player double (for testing) ---

// This module is only compiled when the "test-mocks" feature is enabled.

//! Scripted [`PlayerControl`] implementation.
//!
//! Properties are registered per file; reading a property that was not
//! registered for the currently loaded file fails the way the real player
//! does ("property unavailable").

#![cfg(feature = "test-mocks")]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::player::PlayerControl;

/// Mock implementation of PlayerControl.
#[derive(Debug, Default)]
pub struct MockPlayer {
    file_properties: HashMap<PathBuf, HashMap<String, Value>>,
    load_failures: HashMap<PathBuf, String>,
    command_failures: HashMap<String, String>,
    player_properties: HashMap<String, Value>,
    current: Option<PathBuf>,
    received_calls: Vec<String>,
}

impl MockPlayer {
    pub fn new() -> Self {
        Default::default()
    }

    /// Registers the properties `path` exposes once loaded.
    pub fn with_file<I, S>(mut self, path: impl Into<PathBuf>, properties: I) -> Self
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let props = properties.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self.file_properties.insert(path.into(), props);
        self
    }

    /// Makes `load(path)` fail with `reason`.
    pub fn with_load_failure(mut self, path: impl Into<PathBuf>, reason: &str) -> Self {
        self.load_failures.insert(path.into(), reason.to_string());
        self
    }

    /// Makes every invocation of command `name` fail with `reason`.
    pub fn with_command_failure(mut self, name: &str, reason: &str) -> Self {
        self.command_failures.insert(name.to_string(), reason.to_string());
        self
    }

    /// Calls received so far, in order, e.g. `"load a.mp4"`, `"get_property duration"`.
    pub fn received_calls(&self) -> &[String] {
        &self.received_calls
    }

    /// Player-level property value last set through `set_property`.
    pub fn player_property(&self, name: &str) -> Option<&Value> {
        self.player_properties.get(name)
    }
}

impl PlayerControl for MockPlayer {
    fn load(&mut self, path: &Path) -> CoreResult<()> {
        self.received_calls.push(format!("load {}", path.display()));
        if let Some(reason) = self.load_failures.get(path) {
            self.current = None;
            return Err(CoreError::Load {
                path: path.to_path_buf(),
                reason: reason.clone(),
            });
        }
        self.current = Some(path.to_path_buf());
        Ok(())
    }

    fn get_property(&mut self, name: &str) -> CoreResult<Value> {
        self.received_calls.push(format!("get_property {name}"));
        let from_file = self
            .current
            .as_ref()
            .and_then(|path| self.file_properties.get(path))
            .and_then(|props| props.get(name));

        match from_file.or_else(|| self.player_properties.get(name)) {
            Some(value) => Ok(value.clone()),
            None => Err(CoreError::Property {
                name: name.to_string(),
                reason: "property unavailable".to_string(),
            }),
        }
    }

    fn set_property(&mut self, name: &str, value: Value) -> CoreResult<()> {
        self.received_calls.push(format!("set_property {name}"));
        self.player_properties.insert(name.to_string(), value);
        Ok(())
    }

    fn send_command(&mut self, name: &str, _args: &[Value]) -> CoreResult<Value> {
        self.received_calls.push(format!("command {name}"));
        match self.command_failures.get(name) {
            Some(reason) => Err(CoreError::Command {
                name: name.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(Value::Null),
        }
    }
}
