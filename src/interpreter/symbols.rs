use std::{
    collections::HashMap,
    f64::consts::{E, PI, SQRT_2, TAU},
};

/// Named constants every session starts with, in the order the banner lists
/// them.
///
/// `isqrd` stands in for the square of the imaginary unit and `fibonacci` is
/// the reciprocal Fibonacci constant. Both are plain numbers and may be
/// reassigned like any other name.
pub const CONSTANTS: [(&str, f64); 8] = [("pi", PI),
                                         ("e", E),
                                         ("tau", TAU),
                                         ("phi", 1.618_033_988_749_895),
                                         ("sqrt2", SQRT_2),
                                         ("sqrt3", 1.732_050_807_568_877_2),
                                         ("isqrd", -1.0),
                                         ("fibonacci", 3.359_885_666_243_178)];

/// Mapping from case-sensitive names to values.
///
/// Created once per session and seeded with [`CONSTANTS`]. Assignment inserts
/// or overwrites; entries are never removed.
///
/// # Example
/// ```
/// use infixcalc::interpreter::symbols::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// assert_eq!(table.get("pi"), Some(std::f64::consts::PI));
/// assert_eq!(table.get("Pi"), None);
///
/// table.set("pi", 3.0);
/// assert_eq!(table.get("pi"), Some(3.0));
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    values: HashMap<String, f64>,
}

impl SymbolTable {
    /// Creates a table holding only the seeded constants.
    #[must_use]
    pub fn new() -> Self {
        let values = CONSTANTS.iter()
                              .map(|&(name, value)| (name.to_owned(), value))
                              .collect();
        Self { values }
    }

    /// Creates a table with no entries at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { values: HashMap::new() }
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_owned(), value);
        }
    }

    /// Names of the seeded constants, in banner order.
    pub fn constant_names() -> impl Iterator<Item = &'static str> {
        let constants: &'static [(&str, f64)] = &CONSTANTS;
        constants.iter().map(|&(name, _)| name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
