//! Option dispatch loop.

use launch_intent_core::{ExtraValue, IntentError, LaunchDescriptor, merge_positional};
use tracing::debug;

use crate::builder::IntentBuilder;
use crate::decode::{decode_component, decode_extra, decode_flags, decode_uri};
use crate::options::{ExtraKind, OptionEffect, OptionSpec, lookup_option};
use crate::resolve::resolve_positional;
use crate::stream::TokenStream;

/// Drives one parse over a token stream.
///
/// Options are looked up in the option table and applied to the builder;
/// the remaining token is resolved into a base descriptor and merged in.
#[derive(Debug)]
pub struct IntentParser {
    tokens: TokenStream,
    builder: IntentBuilder,
}

impl IntentParser {
    pub fn new(tokens: TokenStream) -> Self {
        Self {
            tokens,
            builder: IntentBuilder::new(),
        }
    }

    /// Consumes the parser and returns the finished descriptor.
    pub fn parse(mut self) -> Result<LaunchDescriptor, IntentError> {
        while let Some(option) = self.tokens.next_option() {
            let spec =
                lookup_option(&option).ok_or_else(|| IntentError::UnknownOption(option.clone()))?;
            debug!(
                option = spec.name,
                effect = ?spec.effect,
                target = ?self.builder.target(),
                "Dispatching option"
            );
            self.apply(spec)?;
        }

        let sealed = self.builder.seal();
        let positional = self.tokens.take_positional()?;
        let base = resolve_positional(positional.as_deref(), sealed.has_selector)?;

        debug!(
            has_base = base.is_some(),
            has_intent_info = sealed.has_intent_info,
            "Merging positional base"
        );
        merge_positional(sealed.descriptor, base, sealed.has_intent_info)
    }

    fn operand(&mut self, spec: &OptionSpec) -> Result<String, IntentError> {
        self.tokens.pop_operand(spec.name)
    }

    fn apply(&mut self, spec: &OptionSpec) -> Result<(), IntentError> {
        match spec.effect {
            OptionEffect::Action => {
                let action = self.operand(spec)?;
                self.builder.set_action(action);
            }
            OptionEffect::Data => {
                let data = decode_uri(&self.operand(spec)?)?;
                self.builder.set_data(data);
            }
            OptionEffect::MimeType => {
                let mime_type = self.operand(spec)?;
                self.builder.set_mime_type(mime_type);
            }
            OptionEffect::Identifier => {
                let identifier = self.operand(spec)?;
                self.builder.set_identifier(identifier);
            }
            OptionEffect::Category => {
                let category = self.operand(spec)?;
                self.builder.add_category(category);
            }
            OptionEffect::Component => {
                let component = decode_component(&self.operand(spec)?)?;
                self.builder.set_component(component);
            }
            OptionEffect::Package => {
                let package = self.operand(spec)?;
                self.builder.set_package(package);
            }
            OptionEffect::SetFlags => {
                let flags = decode_flags(&self.operand(spec)?)?;
                self.builder.set_flags(flags);
            }
            OptionEffect::AddFlags(bits) => self.builder.add_flags(bits),
            OptionEffect::Extra(ExtraKind::Null) => {
                let key = self.operand(spec)?;
                self.builder.put_extra(key, ExtraValue::Null);
            }
            OptionEffect::Extra(kind) => {
                let key = self.operand(spec)?;
                let value = decode_extra(kind, &self.operand(spec)?)?;
                self.builder.put_extra(key, value);
            }
            OptionEffect::Selector => self.builder.begin_selector()?,
            OptionEffect::Ignore { operands } => {
                for _ in 0..operands {
                    self.operand(spec)?;
                }
            }
        }
        Ok(())
    }
}
