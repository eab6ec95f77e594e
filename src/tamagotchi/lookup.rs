use super::charmap::{symbol, ScriptClass, KATAKANA, KATAKANA_BASE};

/// One two-byte unit of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytePair {
    pub class: u8,
    pub character: u8,
}

impl BytePair {
    pub fn new(class: u8, character: u8) -> Self {
        Self { class, character }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(&'static str),
    NotFound,
}

pub trait GlyphLookup: Sync {
    fn lookup(&self, pair: BytePair) -> Lookup;
}

/// Character byte is a symbol key; the class byte is ignored.
#[derive(Debug, Clone, Copy)]
pub struct SymbolLookup;

impl GlyphLookup for SymbolLookup {
    fn lookup(&self, pair: BytePair) -> Lookup {
        symbol(pair.character).map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// A zero in either byte decodes to NUL.
#[derive(Debug, Clone, Copy)]
pub struct NulLookup;

impl GlyphLookup for NulLookup {
    fn lookup(&self, pair: BytePair) -> Lookup {
        if pair.class == 0 || pair.character == 0 {
            Lookup::Found("\0")
        } else {
            Lookup::NotFound
        }
    }
}

/// 1-based index into the class's glyph table.
#[derive(Debug, Clone, Copy)]
pub struct ClassLookup;

impl GlyphLookup for ClassLookup {
    fn lookup(&self, pair: BytePair) -> Lookup {
        let Some(class) = ScriptClass::from_byte(pair.class) else {
            return Lookup::NotFound;
        };
        let index = (pair.character as usize).wrapping_sub(1);
        class.glyphs().get(index).copied().map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// In the hiragana class, character bytes from [`KATAKANA_BASE`] up
/// address the katakana table.
#[derive(Debug, Clone, Copy)]
pub struct KatakanaLookup;

impl GlyphLookup for KatakanaLookup {
    fn lookup(&self, pair: BytePair) -> Lookup {
        if ScriptClass::from_byte(pair.class) != Some(ScriptClass::Hiragana) {
            return Lookup::NotFound;
        }
        let Some(index) = pair.character.checked_sub(KATAKANA_BASE) else {
            return Lookup::NotFound;
        };
        KATAKANA.get(index as usize).copied().map_or(Lookup::NotFound, Lookup::Found)
    }
}

/// Strategies in precedence order. The first `Found` wins.
pub static CHAIN: [&dyn GlyphLookup; 4] =
    [&SymbolLookup, &NulLookup, &ClassLookup, &KatakanaLookup];

pub fn resolve(pair: BytePair) -> Lookup {
    CHAIN
        .iter()
        .map(|strategy| strategy.lookup(pair))
        .find(|found| matches!(found, Lookup::Found(_)))
        .unwrap_or(Lookup::NotFound)
}
