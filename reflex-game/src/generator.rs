use rand::Rng;
use reflex_core::{ALPHABET_LEN, Symbol};

/// Endless stream of uniformly drawn target symbols.
///
/// Holds no state beyond the random source; seed the source once when the
/// program starts.
#[derive(Debug, Clone)]
pub struct SymbolGenerator<R: Rng> {
    rng: R,
}

impl<R: Rng> SymbolGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Iterator for SymbolGenerator<R> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Symbol> {
        Symbol::from_index(self.rng.random_range(0..ALPHABET_LEN))
    }
}
