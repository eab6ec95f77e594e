use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::charset::Charset;
use crate::error::CodecError;
use crate::tamagotchi::TamagotchiMix;

/// Name-to-charset index. Names and aliases match case-insensitively.
#[derive(Debug, Default)]
pub struct CharsetRegistry {
    charsets: Vec<Arc<dyn Charset>>,
    by_name: HashMap<String, usize>,
}

impl CharsetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TamagotchiMix));
        registry
    }

    /// Index `charset` under its name and aliases. A later registration
    /// takes over any name it shares with an earlier one; registering a
    /// charset that is already present does nothing.
    pub fn register(&mut self, charset: Arc<dyn Charset>) {
        if self.charsets.iter().any(|known| known.contains(charset.as_ref())) {
            debug!(name = charset.name(), "charset already registered");
            return;
        }
        let slot = self.charsets.len();
        let names = std::iter::once(charset.name()).chain(charset.aliases().iter().copied());
        for name in names {
            self.by_name.insert(name.to_ascii_lowercase(), slot);
        }
        debug!(name = charset.name(), aliases = ?charset.aliases(), "registered charset");
        self.charsets.push(charset);
    }

    pub fn charset_for_name(&self, name: &str) -> Option<Arc<dyn Charset>> {
        let slot = *self.by_name.get(&name.to_ascii_lowercase())?;
        self.charsets.get(slot).cloned()
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Charset>, CodecError> {
        self.charset_for_name(name)
            .ok_or_else(|| CodecError::UnknownCharset(name.to_string()))
    }

    /// Registered charsets, skipping any whose every name was taken over.
    pub fn charsets(&self) -> impl Iterator<Item = &Arc<dyn Charset>> + '_ {
        self.charsets
            .iter()
            .enumerate()
            .filter(|(slot, _)| self.by_name.values().any(|s| s == slot))
            .map(|(_, charset)| charset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{Decoder, Encoder, UnsupportedEncoder};
    use crate::tamagotchi::{MixDecoder, TAMAGOTCHI_MIX, XROS_LOADER};

    #[derive(Debug)]
    struct Shadow;

    impl Charset for Shadow {
        fn name(&self) -> &'static str {
            "x-shadow"
        }

        fn aliases(&self) -> &'static [&'static str] {
            &["tamagotchi-mix"]
        }

        fn new_decoder(&self) -> Box<dyn Decoder> {
            Box::new(MixDecoder)
        }

        fn new_encoder(&self) -> Box<dyn Encoder> {
            Box::new(UnsupportedEncoder::new("x-shadow"))
        }
    }

    #[test]
    fn test_builtin_resolves_canonical_name() {
        let registry = CharsetRegistry::with_builtin();
        let charset = registry.resolve(TAMAGOTCHI_MIX).unwrap();
        assert_eq!(charset.name(), TAMAGOTCHI_MIX);
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_follows_aliases() {
        let registry = CharsetRegistry::with_builtin();
        for name in ["X-Tamagotchi-Mix", "tamagotchi-mix", "TAMAGOTCHI-MIX"] {
            let charset = registry.charset_for_name(name).expect(name);
            assert_eq!(charset.name(), TAMAGOTCHI_MIX);
        }
    }

    #[test]
    fn test_unknown_name_errors() {
        let registry = CharsetRegistry::with_builtin();
        assert_eq!(
            registry.resolve(XROS_LOADER).unwrap_err(),
            CodecError::UnknownCharset(XROS_LOADER.to_string())
        );
        assert!(registry.charset_for_name("utf-8").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = CharsetRegistry::new();
        assert_eq!(registry.charsets().count(), 0);
        assert!(registry.charset_for_name(TAMAGOTCHI_MIX).is_none());
    }

    #[test]
    fn test_registering_same_charset_twice_is_noop() {
        let mut registry = CharsetRegistry::with_builtin();
        registry.register(Arc::new(TamagotchiMix));
        assert_eq!(registry.charsets().count(), 1);
    }

    #[test]
    fn test_later_registration_takes_over_shared_alias() {
        let mut registry = CharsetRegistry::with_builtin();
        registry.register(Arc::new(Shadow));
        assert_eq!(registry.resolve("tamagotchi-mix").unwrap().name(), "x-shadow");
        assert_eq!(registry.resolve(TAMAGOTCHI_MIX).unwrap().name(), TAMAGOTCHI_MIX);
        assert_eq!(registry.charsets().count(), 2);
    }
}
