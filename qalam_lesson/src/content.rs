// Copyright 2025 the Qalam Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Practice categories and their characters.

use crate::Language;

/// A set of characters practiced together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// The 28 letters of the Arabic alphabet.
    ArabicLetters,
    /// Arabic-Indic digits ٠ to ٩.
    ArabicNumbers,
    /// Latin capitals A to Z.
    EnglishLetters,
    /// Western digits 0 to 9.
    EnglishNumbers,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 4] = [
        Self::ArabicLetters,
        Self::ArabicNumbers,
        Self::EnglishLetters,
        Self::EnglishNumbers,
    ];

    /// Menu title, in Arabic.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ArabicLetters => "الحروف العربية",
            Self::ArabicNumbers => "الأرقام العربية",
            Self::EnglishLetters => "الحروف الإنجليزية",
            Self::EnglishNumbers => "الأرقام الإنجليزية",
        }
    }

    /// Menu icon.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::ArabicLetters => "🔤",
            Self::ArabicNumbers => "🔢",
            Self::EnglishLetters => "🅰️",
            Self::EnglishNumbers => "🔟",
        }
    }

    /// Language the characters are read aloud in.
    #[must_use]
    pub const fn language(self) -> Language {
        match self {
            Self::ArabicLetters | Self::ArabicNumbers => Language::Arabic,
            Self::EnglishLetters | Self::EnglishNumbers => Language::English,
        }
    }

    /// The characters of this category, in teaching order. Never empty.
    #[must_use]
    pub const fn entries(self) -> &'static [Entry] {
        match self {
            Self::ArabicLetters => ARABIC_LETTERS,
            Self::ArabicNumbers => ARABIC_NUMBERS,
            Self::EnglishLetters => ENGLISH_LETTERS,
            Self::EnglishNumbers => ENGLISH_NUMBERS,
        }
    }
}

/// One character to practice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    /// Text rendered as the template, usually a single character.
    pub glyph: &'static str,
    /// Name of the character.
    pub name: &'static str,
    /// A word starting with the character.
    pub example: Option<&'static str>,
    /// Picture shown next to the character.
    pub emoji: &'static str,
    /// Stock media search terms, when the example word searches poorly.
    pub search_query: Option<&'static str>,
}

impl Entry {
    const fn new(glyph: &'static str, name: &'static str, emoji: &'static str) -> Self {
        Self {
            glyph,
            name,
            example: None,
            emoji,
            search_query: None,
        }
    }

    const fn example(mut self, example: &'static str) -> Self {
        self.example = Some(example);
        self
    }

    const fn search(mut self, query: &'static str) -> Self {
        self.search_query = Some(query);
        self
    }

    /// A letter with an example word and an English search term.
    const fn letter(
        glyph: &'static str,
        name: &'static str,
        emoji: &'static str,
        example: &'static str,
        query: &'static str,
    ) -> Self {
        Self::new(glyph, name, emoji).example(example).search(query)
    }

    /// Terms to look up an illustration with: the search query, else the
    /// example word, else the name, else the glyph itself.
    #[must_use]
    pub fn media_query(&self) -> &'static str {
        [self.search_query, self.example, Some(self.name)]
            .into_iter()
            .flatten()
            .find(|q| !q.is_empty())
            .unwrap_or(self.glyph)
    }

    /// What to read aloud when the character is shown: the glyph and its
    /// example word, or the glyph and its name.
    #[must_use]
    pub fn spoken_text(&self) -> String {
        format!("{} {}", self.glyph, self.example.unwrap_or(self.name))
    }
}

const ARABIC_LETTERS: &[Entry] = &[
    Entry::letter("أ", "ألف", "🦁", "أسد", "lion"),
    Entry::letter("ب", "باء", "🦆", "بطة", "duck"),
    Entry::letter("ت", "تاء", "🍎", "تفاحة", "apple fruit"),
    Entry::letter("ث", "ثاء", "🦊", "ثعلب", "fox"),
    Entry::letter("ج", "جيم", "🐪", "جمل", "camel"),
    Entry::letter("ح", "حاء", "🐴", "حصان", "horse"),
    Entry::letter("خ", "خاء", "🐑", "خروف", "sheep"),
    Entry::letter("د", "دال", "🐻", "دب", "bear"),
    Entry::letter("ذ", "ذال", "🌽", "ذرة", "corn"),
    Entry::letter("ر", "راء", "🍅", "رمان", "pomegranate"),
    Entry::letter("ز", "زاي", "🦒", "زرافة", "giraffe"),
    Entry::letter("س", "سين", "🐟", "سمكة", "fish"),
    Entry::letter("ش", "شين", "☀️", "شمس", "sun sky"),
    Entry::letter("ص", "صاد", "🦅", "صقر", "falcon"),
    Entry::letter("ض", "ضاد", "🐸", "ضفدع", "frog"),
    Entry::letter("ط", "طاء", "✈️", "طائرة", "airplane"),
    Entry::letter("ظ", "ظاء", "✉️", "ظرف", "envelope"),
    Entry::letter("ع", "عين", "🍇", "عنب", "grapes"),
    Entry::letter("غ", "غين", "🦌", "غزال", "gazelle"),
    Entry::letter("ف", "فاء", "🐘", "فيل", "elephant"),
    Entry::letter("ق", "قاف", "🐱", "قطة", "cat"),
    Entry::letter("ك", "كاف", "📖", "كتاب", "book"),
    Entry::letter("ل", "لام", "🍋", "ليمون", "lemon"),
    Entry::letter("م", "ميم", "🍌", "موز", "banana"),
    Entry::letter("ن", "نون", "🐝", "نحلة", "bee"),
    Entry::letter("ه", "هاء", "🎁", "هدية", "gift box"),
    Entry::letter("و", "واو", "🌹", "وردة", "rose flower"),
    Entry::letter("ي", "ياء", "✋", "يد", "hand"),
];

const ARABIC_NUMBERS: &[Entry] = &[
    Entry::new("٠", "صفر", "0️⃣").search("number zero"),
    Entry::new("١", "واحد", "1️⃣").search("number one"),
    Entry::new("٢", "اثنان", "2️⃣").search("number two"),
    Entry::new("٣", "ثلاثة", "3️⃣").search("number three"),
    Entry::new("٤", "أربعة", "4️⃣").search("number four"),
    Entry::new("٥", "خمسة", "5️⃣").search("number five"),
    Entry::new("٦", "ستة", "6️⃣").search("number six"),
    Entry::new("٧", "سبعة", "7️⃣").search("number seven"),
    Entry::new("٨", "ثمانية", "8️⃣").search("number eight"),
    Entry::new("٩", "تسعة", "9️⃣").search("number nine"),
];

const ENGLISH_LETTERS: &[Entry] = &[
    Entry::new("A", "A", "🍎").example("Apple"),
    Entry::new("B", "B", "⚽").example("Ball"),
    Entry::new("C", "C", "🐱").example("Cat"),
    Entry::new("D", "D", "🐶").example("Dog"),
    Entry::new("E", "E", "🐘").example("Elephant"),
    Entry::new("F", "F", "🐟").example("Fish"),
    Entry::new("G", "G", "🦒").example("Giraffe"),
    Entry::new("H", "H", "🎩").example("Hat"),
    Entry::new("I", "I", "🍦").example("Ice cream"),
    Entry::new("J", "J", "🧃").example("Juice"),
    Entry::new("K", "K", "🪁").example("Kite"),
    Entry::new("L", "L", "🦁").example("Lion"),
    Entry::new("M", "M", "🐒").example("Monkey"),
    Entry::new("N", "N", "🪺").example("Nest"),
    Entry::new("O", "O", "🍊").example("Orange"),
    Entry::new("P", "P", "🐧").example("Penguin"),
    Entry::new("Q", "Q", "👑").example("Queen"),
    Entry::new("R", "R", "🐰").example("Rabbit"),
    Entry::new("S", "S", "☀️").example("Sun"),
    Entry::new("T", "T", "🐯").example("Tiger"),
    Entry::new("U", "U", "☂️").example("Umbrella"),
    Entry::new("V", "V", "🎻").example("Violin"),
    Entry::new("W", "W", "🐋").example("Whale"),
    Entry::new("X", "X", "🎹").example("Xylophone"),
    Entry::new("Y", "Y", "🪀").example("Yo-yo"),
    Entry::new("Z", "Z", "🦓").example("Zebra"),
];

const ENGLISH_NUMBERS: &[Entry] = &[
    Entry::new("0", "Zero", "0️⃣"),
    Entry::new("1", "One", "1️⃣"),
    Entry::new("2", "Two", "2️⃣"),
    Entry::new("3", "Three", "3️⃣"),
    Entry::new("4", "Four", "4️⃣"),
    Entry::new("5", "Five", "5️⃣"),
    Entry::new("6", "Six", "6️⃣"),
    Entry::new("7", "Seven", "7️⃣"),
    Entry::new("8", "Eight", "8️⃣"),
    Entry::new("9", "Nine", "9️⃣"),
];
