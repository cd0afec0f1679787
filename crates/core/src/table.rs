//! Fixed-size table holding one entry per currency type.

use core::ops::{Index, IndexMut};

use crate::currency::CurrencyType;

/// One `T` per [`CurrencyType`], stored densely by [`CurrencyType::index`].
///
/// There is no way to remove an entry, so a lookup by currency type always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyTable<T> {
    entries: [T; CurrencyType::COUNT],
}

impl<T> CurrencyTable<T> {
    /// Build a table by computing each entry from its currency type.
    pub fn from_fn(f: impl FnMut(CurrencyType) -> T) -> Self {
        Self {
            entries: CurrencyType::ALL.map(f),
        }
    }

    pub fn get(&self, currency_type: CurrencyType) -> &T {
        &self.entries[currency_type.index()]
    }

    pub fn get_mut(&mut self, currency_type: CurrencyType) -> &mut T {
        &mut self.entries[currency_type.index()]
    }

    /// Entries paired with their currency type, in [`CurrencyType::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (CurrencyType, &T)> {
        CurrencyType::ALL.into_iter().zip(self.entries.iter())
    }
}

impl<T: Clone> CurrencyTable<T> {
    /// A table with the same value for every currency type.
    pub fn filled(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T: Default> Default for CurrencyTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<CurrencyType> for CurrencyTable<T> {
    type Output = T;

    fn index(&self, currency_type: CurrencyType) -> &T {
        self.get(currency_type)
    }
}

impl<T> IndexMut<CurrencyType> for CurrencyTable<T> {
    fn index_mut(&mut self, currency_type: CurrencyType) -> &mut T {
        self.get_mut(currency_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_an_entry() {
        let table = CurrencyTable::filled(1.0);
        assert_eq!(table.iter().count(), CurrencyType::COUNT);
        for t in CurrencyType::ALL {
            assert_eq!(table[t], 1.0);
        }
    }

    #[test]
    fn entries_are_independent() {
        let mut table: CurrencyTable<f64> = CurrencyTable::default();
        table[CurrencyType::Money] += 5.0;

        assert_eq!(table[CurrencyType::Money], 5.0);
        assert_eq!(table[CurrencyType::Secondary], 0.0);
    }

    #[test]
    fn from_fn_sees_each_type_once() {
        let table = CurrencyTable::from_fn(|t| t.as_str().to_string());
        let names: Vec<_> = table.iter().map(|(t, name)| (t, name.as_str())).collect();
        assert_eq!(
            names,
            vec![
                (CurrencyType::Money, "Money"),
                (CurrencyType::Secondary, "Secondary"),
            ]
        );
    }
}
