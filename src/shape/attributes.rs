use crate::field::FieldValue;

static NONE: FieldValue = FieldValue::None;

/// Ordered attribute values of one proxy, keyed by declared name.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Attributes {
    entries: Vec<(&'static str, FieldValue)>,
}

impl Attributes {
    /// Creates attributes for the given names, all unset.
    pub(crate) fn declare(keys: &[&'static str]) -> Self {
        Self {
            entries: keys.iter().map(|&k| (k, FieldValue::None)).collect(),
        }
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Returns the value of a declared attribute, `None` if undeclared.
    pub(crate) fn lookup(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Returns the value of an attribute, treating undeclared ones as unset.
    pub(crate) fn get(&self, name: &str) -> &FieldValue {
        self.lookup(name).unwrap_or(&NONE)
    }

    /// Overwrites a declared attribute. Returns `false` if `name` is undeclared.
    pub(crate) fn assign(&mut self, name: &str, value: FieldValue) -> bool {
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Overwrites every declared attribute present in `values`.
    pub(crate) fn refresh(&mut self, values: Vec<(&'static str, FieldValue)>) {
        for (name, value) in values {
            self.assign(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_only_declared() {
        let mut attrs = Attributes::declare(&["a", "b"]);
        assert!(attrs.assign("a", FieldValue::Float(1.0)));
        assert!(!attrs.assign("z", FieldValue::Float(1.0)));
        assert_eq!(attrs.get("a"), &FieldValue::Float(1.0));
        assert!(attrs.get("z").is_none());
        assert!(attrs.lookup("z").is_none());
        assert_eq!(attrs.keys().collect::<Vec<_>>(), ["a", "b"]);
    }
}
