// src/core/types.rs

/// One of the fixed Latin spellings that can stand for more than one native
/// letter. Each variant also names the rule that resolves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Sh,
    Ch,
    Dz,
    G,
    T,
    Zh,
    J,
    Kh,
}

impl Pattern {
    /// Processing order. Every occurrence of one pattern is resolved before
    /// the next pattern is looked at.
    pub const ALL: [Pattern; 8] = [
        Pattern::Sh,
        Pattern::Ch,
        Pattern::Dz,
        Pattern::G,
        Pattern::T,
        Pattern::Zh,
        Pattern::J,
        Pattern::Kh,
    ];

    /// The literal Latin substring this pattern matches.
    pub fn text(self) -> &'static str {
        match self {
            Pattern::Sh => "sh",
            Pattern::Ch => "ch",
            Pattern::Dz => "dz",
            Pattern::G => "g",
            Pattern::T => "t",
            Pattern::Zh => "zh",
            Pattern::J => "j",
            Pattern::Kh => "kh",
        }
    }

    pub fn len(self) -> usize {
        self.text().len()
    }
}

/// Latin-side strings the resolver can emit. Uppercase entries are markers.
pub mod latin {
    pub const SH_COLLAPSED: &str = "S";
    pub const CH_DICTIONARY: &str = "C";
    pub const CH_DEFAULT: &str = "W";
    pub const DZ_COLLAPSED: &str = "Z";
    pub const G_ALTERNATE: &str = "R";
    pub const T_ALTERNATE: &str = "T";
    pub const ZH_FIXED: &str = "J";
    pub const J_DICTIONARY: &str = "j";
    pub const J_DEFAULT: &str = "J";
    pub const KH_COLLAPSED: &str = "x";

    /// Loanword that keeps "kh" as two letters.
    pub const KH_LOANWORD: &str = "stokholm";
}
