//! Two-stage descriptor builder.
//!
//! Options mutate whichever descriptor is currently targeted. Parsing starts
//! on the primary descriptor; `--selector` seals it and moves all further
//! mutations to the selector, with no way back.

use launch_intent_core::{ComponentName, ExtraValue, IntentError, LaunchDescriptor, Uri};
use tracing::debug;

/// Which descriptor option mutations apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Primary,
    Selector,
}

/// Result of sealing the builder.
#[derive(Debug, Clone, PartialEq)]
pub struct SealedIntent {
    /// Primary descriptor with the selector (if any) attached.
    pub descriptor: LaunchDescriptor,
    pub has_selector: bool,
    /// Whether a targeting option was applied to the primary descriptor.
    pub has_intent_info: bool,
}

/// Accumulates option effects into the primary and selector descriptors.
///
/// Data and type are kept pending and committed together. The selector
/// switch copies them into the primary but leaves them pending, so the
/// selector inherits any pair it does not override.
#[derive(Debug, Default)]
pub struct IntentBuilder {
    primary: LaunchDescriptor,
    selector: Option<LaunchDescriptor>,
    target: Target,
    data: Option<Uri>,
    mime_type: Option<String>,
    has_intent_info: bool,
}

impl IntentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor currently receiving mutations.
    pub fn target(&self) -> Target {
        self.target
    }

    pub fn has_intent_info(&self) -> bool {
        self.has_intent_info
    }

    fn active(&mut self) -> &mut LaunchDescriptor {
        match self.target {
            Target::Primary => &mut self.primary,
            Target::Selector => self.selector.get_or_insert_with(LaunchDescriptor::new),
        }
    }

    fn mark_content(&mut self) {
        if self.target == Target::Primary {
            self.has_intent_info = true;
        }
    }

    pub fn set_action(&mut self, action: String) {
        self.active().action = Some(action);
        self.mark_content();
    }

    pub fn set_data(&mut self, data: Uri) {
        self.data = Some(data);
        self.mark_content();
    }

    pub fn set_mime_type(&mut self, mime_type: String) {
        self.mime_type = Some(mime_type);
        self.mark_content();
    }

    pub fn set_identifier(&mut self, identifier: String) {
        self.active().identifier = Some(identifier);
        self.mark_content();
    }

    pub fn add_category(&mut self, category: String) {
        self.active().categories.insert(category);
        self.mark_content();
    }

    pub fn set_component(&mut self, component: ComponentName) {
        self.active().component = Some(component);
        self.mark_content();
    }

    pub fn set_package(&mut self, package: String) {
        self.active().package = Some(package);
        self.mark_content();
    }

    /// Replaces the flags word of the active descriptor.
    pub fn set_flags(&mut self, flags: u32) {
        self.active().flags = flags;
    }

    pub fn add_flags(&mut self, flags: u32) {
        self.active().add_flags(flags);
    }

    /// Upserts an extra on the active descriptor.
    pub fn put_extra(&mut self, key: String, value: ExtraValue) {
        self.active().put_extra(key, value);
    }

    fn commit_data_and_type(&mut self) {
        if self.data.is_some() || self.mime_type.is_some() {
            let (data, mime_type) = (self.data.clone(), self.mime_type.clone());
            self.active().set_data_and_type(data, mime_type);
        }
    }

    /// Seals the primary descriptor and switches to the selector.
    ///
    /// # Errors
    ///
    /// Returns [`IntentError::DuplicateSelector`] when the selector is
    /// already active.
    pub fn begin_selector(&mut self) -> Result<(), IntentError> {
        if self.target == Target::Selector {
            return Err(IntentError::DuplicateSelector);
        }
        self.commit_data_and_type();
        self.target = Target::Selector;
        self.selector = Some(LaunchDescriptor::new());
        debug!(has_intent_info = self.has_intent_info, "Switched to selector");
        Ok(())
    }

    /// Commits pending data and type and attaches the selector.
    pub fn seal(mut self) -> SealedIntent {
        self.commit_data_and_type();
        let has_selector = self.selector.is_some();
        let mut descriptor = self.primary;
        descriptor.selector = self.selector.map(Box::new);
        SealedIntent {
            descriptor,
            has_selector,
            has_intent_info: self.has_intent_info,
        }
    }
}
