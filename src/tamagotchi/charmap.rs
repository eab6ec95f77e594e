//! Glyph tables for the Tamagotchi "mix" two-byte text encoding.
//!
//! A glyph is a (class, character) byte pair. Symbols are keyed on the
//! character byte alone; everything else is indexed per script class.

/// Largest number of Unicode scalars a single table entry expands to.
pub const MAX_GLYPH_CHARS: usize = 2;

/// Character bytes at or above this value in the hiragana class index
/// into [`KATAKANA`].
pub const KATAKANA_BASE: u8 = 0x77;

/// Symbols shared by every class: punctuation, digits, emoji, full-width
/// Latin, and line breaks.
///
/// 0x6C is an ideographic space on the device; it decodes to ASCII space.
pub fn symbol(character: u8) -> Option<&'static str> {
    match character {
        0x51 => Some("ー"),
        0x52 => Some("～"),
        0x53 => Some("…"),
        0x54 => Some("、"),
        0x55 => Some("。"),
        0x56 => Some("（"),
        0x57 => Some("）"),
        0x58 => Some("「"),
        0x59 => Some("」"),
        0x5A => Some("．"),
        0x5B => Some("・"),
        0x5C => Some("！"),
        0x5D => Some("？"),
        0x5E => Some("＆"),
        0x5F => Some("⭕"),
        0x60 => Some("❌"),
        0x61 => Some("♡"),
        0x62 => Some("☀"),
        0x63 => Some("★"),
        0x64 => Some("🌀"),
        0x65 => Some("♪"),
        0x66 => Some("💢"),
        0x67 => Some("⤴"),
        0x68 => Some("⤵"),
        0x69 => Some("→"),
        0x6A => Some("←"),
        0x6B => Some("₲"),
        0x6C => Some(" "),
        0x6D => Some("０"),
        0x6E => Some("１"),
        0x6F => Some("２"),
        0x70 => Some("３"),
        0x71 => Some("４"),
        0x72 => Some("５"),
        0x73 => Some("６"),
        0x74 => Some("７"),
        0x75 => Some("８"),
        0x76 => Some("９"),
        0xD0 => Some("😫"),
        0xD1 => Some("😣"),
        0xD2 => Some("😑"),
        0xD3 => Some("😵"),
        0xD4 => Some("😪"),
        0xD5 => Some("🐱"),
        0xD6 => Some("📟"),
        0xD7 => Some("🎂"),
        0xD8 => Some("🎁"),
        0xD9 => Some("📱"),
        0xDA => Some("🏢"),
        0xDB => Some("🛍\u{FE0F}"),
        0xDC => Some("🍙"),
        0xDD => Some("🍰"),
        0xDE => Some("✨"),
        0xDF => Some("😊"),
        0xE0 => Some("Ａ"),
        0xE1 => Some("Ｂ"),
        0xE2 => Some("Ｃ"),
        0xE3 => Some("Ｄ"),
        0xE4 => Some("Ｅ"),
        0xE5 => Some("Ｆ"),
        0xE6 => Some("Ｇ"),
        0xE7 => Some("Ｈ"),
        0xE8 => Some("Ｉ"),
        0xE9 => Some("Ｊ"),
        0xEA => Some("Ｋ"),
        0xEB => Some("Ｌ"),
        0xEC => Some("Ｍ"),
        0xED => Some("Ｎ"),
        0xEE => Some("Ｏ"),
        0xEF => Some("Ｐ"),
        0xF0 => Some("Ｑ"),
        0xF1 => Some("Ｒ"),
        0xF2 => Some("Ｓ"),
        0xF3 => Some("Ｔ"),
        0xF4 => Some("Ｕ"),
        0xF5 => Some("Ｖ"),
        0xF6 => Some("Ｗ"),
        0xF7 => Some("Ｘ"),
        0xF8 => Some("Ｙ"),
        0xF9 => Some("Ｚ"),
        0xFA => Some("％"),
        0xFB => Some("－"),
        0xFC => Some("＋"),
        0xFE => Some("⏎"),
        0xFF => Some("\n"),
        _ => None,
    }
}

/// Script classes addressed by the first byte of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    Hiragana,
    French,
    Dutch,
    Spanish,
    Portuguese,
    German,
    Polish,
    Cyrillic,
}

impl ScriptClass {
    pub const ALL: [ScriptClass; 8] = [
        Self::Hiragana,
        Self::French,
        Self::Dutch,
        Self::Spanish,
        Self::Portuguese,
        Self::German,
        Self::Polish,
        Self::Cyrillic,
    ];

    pub fn from_byte(class: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|script| script.byte() == class)
    }

    pub fn byte(self) -> u8 {
        match self {
            Self::Hiragana => 4,
            Self::French => 12,
            Self::Dutch => 16,
            Self::Spanish => 20,
            Self::Portuguese => 24,
            Self::German => 28,
            Self::Polish => 32,
            Self::Cyrillic => 36,
        }
    }

    /// Glyphs for this class; character byte `n` selects entry `n - 1`.
    pub fn glyphs(self) -> &'static [&'static str] {
        match self {
            Self::Hiragana => &HIRAGANA,
            Self::French => &FRENCH,
            Self::Dutch => &DUTCH,
            Self::Spanish => &SPANISH,
            Self::Portuguese => &PORTUGUESE,
            Self::German => &GERMAN,
            Self::Polish => &POLISH,
            Self::Cyrillic => &CYRILLIC,
        }
    }
}

pub const HIRAGANA: [&str; 80] = [
    "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ", "た",
    "ち", "つ", "て", "と", "な", "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ", "ま", "み",
    "む", "め", "も", "や", "ゆ", "よ", "ら", "り", "る", "れ", "ろ", "わ", "を", "ん", "ぁ", "ぃ",
    "ぅ", "ぇ", "ぉ", "っ", "ゃ", "ゅ", "ょ", "が", "ぎ", "ぐ", "げ", "ご", "ざ", "じ", "ず", "ぜ",
    "ぞ", "だ", "ぢ", "づ", "で", "ど", "ば", "び", "ぶ", "べ", "ぼ", "ぱ", "ぴ", "ぷ", "ぺ", "ぽ",
];

pub const FRENCH: [&str; 16] = [
    "À", "Â", "Æ", "Ç", "É", "È", "Ê", "Ë", "Î", "Ï", "Ô", "Œ", "Ù", "Û", "Ü", "Ŷ",
];

pub const DUTCH: [&str; 7] = [
    "É", "È", "Ê", "Ë", "Ï", "Ù", "Ü",
];

pub const SPANISH: [&str; 7] = [
    "Á", "É", "Í", "Ñ", "Ó", "Ú", "Ü",
];

pub const PORTUGUESE: [&str; 13] = [
    "Á", "À", "Â", "Ã", "Ç", "É", "È", "Ê", "Í", "Ó", "Ô", "Õ", "Ú",
];

pub const GERMAN: [&str; 3] = [
    "Ä", "Ö", "Ü",
];

pub const POLISH: [&str; 9] = [
    "Ą", "Ć", "Ę", "Ł", "Ń", "Ó", "Ś", "Ź", "Ż",
];

pub const CYRILLIC: [&str; 33] = [
    "А", "Б", "В", "Г", "Д", "Е", "Ё", "Ж", "З", "И", "Й", "К", "Л", "М", "Н", "О",
    "П", "Р", "С", "Т", "У", "Ф", "Х", "Ц", "Ч", "Ш", "Щ", "Ъ", "Ы", "Ь", "Э", "Ю",
    "Я",
];

/// Katakana packed into the hiragana class, starting at [`KATAKANA_BASE`].
/// ン appears twice; both slots are used by the device.
pub const KATAKANA: [&str; 82] = [
    "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ", "ソ", "タ",
    "チ", "ツ", "テ", "ト", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ", "ヒ", "フ", "ヘ", "ホ", "マ", "ミ",
    "ム", "メ", "モ", "ヤ", "ユ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ワ", "ン", "ヲ", "ン", "ァ",
    "ィ", "ゥ", "ェ", "ォ", "ッ", "ャ", "ュ", "ョ", "ガ", "ギ", "グ", "ゲ", "ゴ", "ザ", "ジ", "ズ",
    "ゼ", "ゾ", "ダ", "ヂ", "ヅ", "デ", "ド", "バ", "ビ", "ブ", "ベ", "ボ", "パ", "ピ", "プ", "ペ",
    "ポ", "ヴ",
];
