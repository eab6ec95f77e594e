pub mod charmap;
pub mod decoder;
pub mod lookup;

use crate::charset::{Charset, Decoder, Encoder, UnsupportedEncoder};

pub use decoder::MixDecoder;

/// Canonical name of the "mix" charset.
pub const TAMAGOTCHI_MIX: &str = "x-tamagotchi-mix";

/// Reserved for the loader variant. Its tables are not bundled.
pub const XROS_LOADER: &str = "x-xros-loader";

/// The two-byte text encoding used by Tamagotchi "mix" devices.
/// Decode only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TamagotchiMix;

impl Charset for TamagotchiMix {
    fn name(&self) -> &'static str {
        TAMAGOTCHI_MIX
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["tamagotchi-mix"]
    }

    fn new_decoder(&self) -> Box<dyn Decoder> {
        Box::new(MixDecoder)
    }

    fn new_encoder(&self) -> Box<dyn Encoder> {
        Box::new(UnsupportedEncoder::new(TAMAGOTCHI_MIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::{ByteCursor, CoderResult, TextBuffer};
    use crate::error::CodecError;

    #[test]
    fn test_decoder_from_charset() {
        let decoder = TamagotchiMix.new_decoder();
        let mut input = ByteCursor::new(&[0x04, 0x01]);
        let mut out = TextBuffer::with_capacity(8);
        assert_eq!(decoder.decode_loop(&mut input, &mut out), CoderResult::Underflow);
        assert_eq!(out.take(), "あ");
    }

    #[test]
    fn test_encoder_not_supported() {
        assert!(!TamagotchiMix.can_encode());
        let mut out = Vec::new();
        let err = TamagotchiMix.new_encoder().encode("あ", &mut out).unwrap_err();
        assert_eq!(err, CodecError::EncodingUnsupported { charset: TAMAGOTCHI_MIX });
        assert!(out.is_empty());
    }

    #[test]
    fn test_contains_only_itself() {
        assert!(TamagotchiMix.contains(&TamagotchiMix));
    }
}
