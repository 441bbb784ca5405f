use fancy_regex::Regex;
use phf::phf_map;

lazy_static! {

    /// Validation regex used by the strict constructor to reject input
    /// that contains anything other than alphabetic characters, e.g.
    /// digits, punctuation or whitespace.
    pub static ref ALPHABETIC_REGEX: Regex = Regex::new("^\\p{Alphabetic}+$").unwrap();
}

/// Letters the rule table treats as vowels. `Y` counts.
pub static VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];

/// Word-initial clusters whose first letter is silent, e.g. "gnome",
/// "knight", "pneumatic", "wrist" and "psalm".
pub static SILENT_STARTERS: [&str; 5] = ["GN", "KN", "PN", "WR", "PS"];

/// Hard cap on the length of each returned code.
pub const MAX_CODE_LENGTH: usize = 4;

/// Sentinel appended past the last letter of the normalized buffer so
/// that fixed-width lookahead windows never run out of bounds. Never
/// equal to a letter.
pub const PAD: char = '-';

/// Number of sentinel positions appended to the normalized buffer.
pub const PAD_WIDTH: usize = 4;

/// Accented Latin letters folded back to their base letters before
/// dispatch. Keys are uppercase since folding runs after the
/// uppercasing pass; anything alphabetic that is neither ASCII nor
/// listed here is discarded like any other non-letter.
pub static LATIN_FOLDS: phf::Map<char, &'static str> = phf_map! {
    'À' => "A", 'Á' => "A", 'Â' => "A", 'Ã' => "A", 'Ä' => "A", 'Å' => "A",
    'Ā' => "A", 'Ă' => "A", 'Ą' => "A",
    'Ç' => "C", 'Ć' => "C", 'Č' => "C",
    'Ď' => "D", 'Ð' => "D",
    'È' => "E", 'É' => "E", 'Ê' => "E", 'Ë' => "E", 'Ē' => "E", 'Ė' => "E",
    'Ę' => "E", 'Ě' => "E",
    'Ğ' => "G",
    'Ì' => "I", 'Í' => "I", 'Î' => "I", 'Ï' => "I", 'Ī' => "I", 'İ' => "I",
    'Ĺ' => "L", 'Ł' => "L",
    'Ñ' => "N", 'Ń' => "N", 'Ň' => "N",
    'Ò' => "O", 'Ó' => "O", 'Ô' => "O", 'Õ' => "O", 'Ö' => "O", 'Ø' => "O",
    'Ő' => "O",
    'Ŕ' => "R", 'Ř' => "R",
    'Ś' => "S", 'Š' => "S", 'Ş' => "S",
    'Ť' => "T", 'Ţ' => "T",
    'Ù' => "U", 'Ú' => "U", 'Û' => "U", 'Ü' => "U", 'Ū' => "U", 'Ů' => "U",
    'Ű' => "U",
    'Ý' => "Y", 'Ÿ' => "Y",
    'Ź' => "Z", 'Ż' => "Z", 'Ž' => "Z",
    'Æ' => "AE", 'Œ' => "OE", 'Þ' => "TH",
};
