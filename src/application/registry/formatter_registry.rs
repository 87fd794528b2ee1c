use super::FormatterDescriptor;
use crate::ports::outbound::FormatterClass;
use crate::shared::error::FormatterError;
use crate::shared::FormatterResult;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Format searched when the requested name is not registered
pub const DEFAULT_FORMATTER: &str = "html";

/// Catalog of formatter implementations keyed by format name.
///
/// Each name maps to its implementations in registration order. A registry
/// is filled once at startup (see `register_builtin_formatters`) and only
/// read afterwards, so it can be shared behind an `Arc` without locking.
#[derive(Debug, Default)]
pub struct FormatterRegistry {
    formatters: HashMap<&'static str, Vec<FormatterDescriptor>>,
}

impl FormatterRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the implementation type `T`
    ///
    /// Implementations whose `NAME` is `None` are shared bases and are
    /// skipped. Everything else is appended under its name, after the
    /// implementations registered before it.
    ///
    /// # Errors
    /// Returns `AlreadyRegistered` if `T` is already in the catalog
    pub fn register<T: FormatterClass>(&mut self) -> FormatterResult<()> {
        self.register_descriptor(FormatterDescriptor::of::<T>())
    }

    /// Registers a prebuilt descriptor with the same rules as [`register`](Self::register)
    pub fn register_descriptor(
        &mut self,
        descriptor: FormatterDescriptor,
    ) -> FormatterResult<()> {
        let Some(name) = descriptor.name() else {
            debug!(
                formatter = descriptor.type_name(),
                "Skipping formatter without a name"
            );
            return Ok(());
        };

        let bucket = self.formatters.entry(name).or_default();
        if bucket.contains(&descriptor) {
            return Err(FormatterError::AlreadyRegistered {
                name,
                formatter: descriptor.type_name(),
            });
        }

        debug!(
            format = name,
            formatter = descriptor.type_name(),
            media_type = descriptor.media_type(),
            can_multiple = descriptor.can_multiple(),
            position = bucket.len(),
            "Registered formatter"
        );
        bucket.push(descriptor);
        Ok(())
    }

    /// Selects the implementation for a requested format
    ///
    /// Unknown names fall back to [`DEFAULT_FORMATTER`]. When `multiple` is
    /// false the first single-subject implementation wins; otherwise, or if
    /// there is none, the first multi-subject implementation wins. A request
    /// for `multiple` never returns a single-subject implementation.
    ///
    /// # Errors
    /// Returns `NoFormatterAvailable` if nothing under the name satisfies
    /// the requested multiplicity
    pub fn find_formatter(
        &self,
        name: &str,
        multiple: bool,
    ) -> FormatterResult<&FormatterDescriptor> {
        let name = if self.formatters.contains_key(name) {
            name
        } else {
            debug!(requested = name, "Unknown format, using default");
            DEFAULT_FORMATTER
        };
        let candidates = self.formatters_for(name);

        let single = if multiple {
            None
        } else {
            candidates.iter().find(|candidate| !candidate.can_multiple())
        };

        single
            .or_else(|| candidates.iter().find(|candidate| candidate.can_multiple()))
            .inspect(|descriptor| {
                debug!(
                    format = name,
                    multiple,
                    formatter = descriptor.type_name(),
                    "Selected formatter"
                );
            })
            .ok_or_else(|| FormatterError::NoFormatterAvailable {
                name: name.to_string(),
                multiple,
            })
    }

    /// Every name with at least one registered implementation
    pub fn available_formatters(&self) -> BTreeSet<&'static str> {
        self.formatters
            .iter()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    /// Implementations registered under `name`, in registration order
    pub fn formatters_for(&self, name: &str) -> &[FormatterDescriptor] {
        self.formatters
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// True if nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.formatters.values().all(Vec::is_empty)
    }
}
