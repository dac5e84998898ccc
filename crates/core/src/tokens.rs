use regex::{Regex, RegexBuilder};

lazy_static! {
    // A word is a run of unicode alphabetic characters, possibly containing
    // apostrophes (like doesn't)
    static ref WORD_RE: Regex = RegexBuilder::new(
        r"
        \p{Alphabetic}+ ( ' \p{Alphabetic}+ )*
        "
    )
    .ignore_whitespace(true)
    .build()
    .expect("syntax error in static regex");
}

/// Yields `(word, byte offset)` pairs over prose text, in document order.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = (&'a str, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let found = WORD_RE.find(&self.input[self.pos..])?;
        let start = self.pos + found.start();
        self.pos = self.pos + found.end();
        Some((found.as_str(), start))
    }
}
