/// Languages the assistant can answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Hi,
}

/// Devanagari letters that mark a query as Hindi: the independent vowels plus
/// the consonant block. A finite membership set, not a script-range test —
/// matras, digits, and signs outside this list do not qualify on their own.
const HINDI_LETTERS: [char; 44] = [
    'अ', 'आ', 'इ', 'ई', 'उ', 'ऊ', 'ऋ', 'ए', 'ऐ', 'ओ', 'औ', 'क', 'ख', 'ग', 'घ', 'ङ', 'च', 'छ',
    'ज', 'झ', 'ञ', 'ट', 'ठ', 'ड', 'ढ', 'ण', 'त', 'थ', 'द', 'ध', 'न', 'प', 'फ', 'ब', 'भ', 'म',
    'य', 'र', 'ल', 'व', 'श', 'ष', 'स', 'ह',
];

impl Lang {
    /// Classifies text as `Hi` as soon as any character is in the fixed
    /// letter set, `En` otherwise (including for the empty string).
    pub fn detect(text: &str) -> Lang {
        if text.chars().any(|c| HINDI_LETTERS.contains(&c)) {
            Lang::Hi
        } else {
            Lang::En
        }
    }
}
