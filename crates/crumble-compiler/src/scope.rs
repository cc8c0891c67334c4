//! Variable slot allocation.
//!
//! Crumble programs have a single flat scope. Each distinct variable name
//! gets the next free slot on its first assignment and keeps it for the
//! rest of the program. The four hardware registers `A`, `B`, `C` and `D`
//! are resolved before the slot table and can never be assigned.

use rustc_hash::FxHashMap;

/// Reserved hardware register aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A,
    B,
    C,
    D,
}

impl Register {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "A" => Some(Register::A),
            "B" => Some(Register::B),
            "C" => Some(Register::C),
            "D" => Some(Register::D),
            _ => None,
        }
    }

    /// Hardware channel index. Note `D` precedes `C`.
    pub fn index(self) -> i64 {
        match self {
            Register::A => 0,
            Register::B => 1,
            Register::D => 2,
            Register::C => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
        }
    }
}

/// What a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLookup {
    Register(Register),
    Variable(usize),
}

/// Result of declaring a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declared {
    pub slot: usize,
    /// Whether this declaration allocated the slot.
    pub is_new: bool,
}

/// Ordered table of variable names; a name's position is its runtime slot.
#[derive(Debug, Default)]
pub struct VariableTable<'ast> {
    names: Vec<&'ast str>,
    slots: FxHashMap<&'ast str, usize>,
}

impl<'ast> VariableTable<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a name to a register or an allocated slot.
    pub fn lookup(&self, name: &str) -> Option<NameLookup> {
        if let Some(register) = Register::from_name(name) {
            return Some(NameLookup::Register(register));
        }
        self.slots.get(name).copied().map(NameLookup::Variable)
    }

    /// Slot of `name`, if allocated.
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Allocate a slot for `name` unless it already has one.
    ///
    /// Callers reject register names before declaring.
    pub fn declare(&mut self, name: &'ast str) -> Declared {
        if let Some(&slot) = self.slots.get(name) {
            return Declared {
                slot,
                is_new: false,
            };
        }
        let slot = self.names.len();
        self.names.push(name);
        self.slots.insert(name, slot);
        Declared { slot, is_new: true }
    }

    /// Names in slot order.
    pub fn names(&self) -> &[&'ast str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_indices() {
        assert_eq!(Register::A.index(), 0);
        assert_eq!(Register::B.index(), 1);
        assert_eq!(Register::D.index(), 2);
        assert_eq!(Register::C.index(), 3);
        assert_eq!(Register::from_name("a"), None);
        assert_eq!(Register::from_name("C").map(Register::name), Some("C"));
    }

    #[test]
    fn slots_allocated_in_first_assignment_order() {
        let mut vars = VariableTable::new();
        assert_eq!(vars.declare("speed"), Declared { slot: 0, is_new: true });
        assert_eq!(vars.declare("count"), Declared { slot: 1, is_new: true });
        assert_eq!(vars.declare("speed"), Declared { slot: 0, is_new: false });

        assert_eq!(vars.names(), ["speed", "count"]);
        assert_eq!(vars.len(), 2);
    }

    #[test]
    fn lookup_prefers_registers() {
        let mut vars = VariableTable::new();
        vars.declare("x");

        assert_eq!(vars.lookup("x"), Some(NameLookup::Variable(0)));
        assert_eq!(vars.lookup("B"), Some(NameLookup::Register(Register::B)));
        assert_eq!(vars.lookup("y"), None);
        assert_eq!(vars.slot("y"), None);
    }
}
