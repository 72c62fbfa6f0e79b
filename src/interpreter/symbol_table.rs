use std::collections::HashMap;

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, ValueType},
    },
    util::num::{array_length, i64_to_f64, index_to_offset},
};

/// Storage behind a symbol: a single value or a fixed-length row of slots.
///
/// `None` marks a value that was declared but never assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A scalar variable or constant.
    Scalar(Option<Value>),
    /// An array; index `i` of the language lives at offset `i - 1`.
    Array(Vec<Option<Value>>),
}

/// One entry of the symbol table.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// The stored value(s).
    pub slot:     Slot,
    /// The declared type; for arrays, the element type. Never changes.
    pub declared: ValueType,
    /// Constants reject every write after declaration.
    pub constant: bool,
}

impl Symbol {
    /// A constant holding `value`, typed after it.
    #[must_use]
    pub fn constant(value: Value) -> Self {
        Self { declared: value.value_type(),
               slot:     Slot::Scalar(Some(value)),
               constant: true, }
    }

    /// An unassigned scalar variable of type `declared`.
    #[must_use]
    pub const fn scalar(declared: ValueType) -> Self {
        Self { slot: Slot::Scalar(None),
               declared,
               constant: false }
    }

    /// An array variable of `len` unassigned slots.
    ///
    /// # Errors
    /// `RuntimeError::InvalidArraySize` if `len` slots cannot be allocated.
    pub fn array(declared: ValueType, len: usize) -> EvalResult<Self> {
        let mut slots = Vec::new();
        grow(&mut slots, len)?;

        Ok(Self { slot: Slot::Array(slots),
                  declared,
                  constant: false })
    }

    /// `true` if the symbol is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self.slot, Slot::Array(_))
    }

    /// Converts `value` to the declared type of this symbol, if a rule allows
    /// it.
    ///
    /// - A boolean target coerces any value with [`Value::typecast`].
    /// - A float target promotes integers.
    /// - Every other target requires the value's type to match exactly.
    ///
    /// # Errors
    /// `RuntimeError::TypeMismatch` naming `name` and both types when no rule
    /// applies.
    pub fn coerce(&self, name: &str, value: Value) -> EvalResult<Value> {
        let value = match (self.declared, value) {
            (ValueType::Boolean, value) => value.typecast(),
            (ValueType::Float, Value::Integer(n)) => Value::Float(i64_to_f64(n)),
            (_, value) => value,
        };

        if value.value_type() == self.declared {
            Ok(value)
        } else {
            Err(RuntimeError::TypeMismatch { name:     name.to_string(),
                                             found:    value.value_type(),
                                             declared: self.declared, })
        }
    }
}

/// The single global scope of a program run.
///
/// Maps every declared name to its [`Symbol`]. Entries are created by the
/// declaration sections and live until the run ends; there is no nested
/// scope and no removal. Every operation reports failure as a
/// [`RuntimeError`] for the evaluator to propagate.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Looks up a symbol.
    ///
    /// # Errors
    /// `RuntimeError::NotDeclared` if `name` is unknown.
    pub fn get(&self, name: &str) -> EvalResult<&Symbol> {
        self.symbols
            .get(name)
            .ok_or_else(|| RuntimeError::NotDeclared { name: name.to_string() })
    }

    fn get_mut(&mut self, name: &str) -> EvalResult<&mut Symbol> {
        self.symbols
            .get_mut(name)
            .ok_or_else(|| RuntimeError::NotDeclared { name: name.to_string() })
    }

    /// Adds a new entry.
    ///
    /// # Errors
    /// `RuntimeError::AlreadyDeclared` if `name` already exists, whether as a
    /// constant or a variable.
    pub fn declare(&mut self, name: &str, symbol: Symbol) -> EvalResult<()> {
        if self.contains(name) {
            return Err(RuntimeError::AlreadyDeclared { name: name.to_string() });
        }
        trace!("declare {name}: {}{}",
               symbol.declared,
               if symbol.is_array() { "[]" } else { "" });
        self.symbols.insert(name.to_string(), symbol);
        Ok(())
    }

    /// Overwrites a scalar. `value` must already be coerced to the declared
    /// type.
    ///
    /// # Errors
    /// - `RuntimeError::NotDeclared` if `name` is unknown.
    /// - `RuntimeError::IsAnArray` if `name` is an array.
    /// - `RuntimeError::ConstantMutation` if `name` is a constant.
    pub fn assign(&mut self, name: &str, value: Value) -> EvalResult<()> {
        let symbol = self.get_mut(name)?;

        match &mut symbol.slot {
            Slot::Array(_) => Err(RuntimeError::IsAnArray { name: name.to_string() }),
            Slot::Scalar(_) if symbol.constant => {
                Err(RuntimeError::ConstantMutation { name: name.to_string() })
            },
            Slot::Scalar(slot) => {
                *slot = Some(value);
                Ok(())
            },
        }
    }

    /// Overwrites one array slot (`index` is 1-based).
    ///
    /// # Errors
    /// - `RuntimeError::NotDeclared` if `name` is unknown.
    /// - `RuntimeError::NotAnArray` if `name` is a scalar.
    /// - `RuntimeError::IndexOutOfBounds` unless `1 <= index <= len`.
    pub fn assign_index(&mut self, name: &str, index: i64, value: Value) -> EvalResult<()> {
        let slots = Self::slots_mut(self.get_mut(name)?, name)?;
        let offset = index_to_offset(index, slots.len())?;
        slots[offset] = Some(value);
        Ok(())
    }

    /// Reads a whole variable.
    ///
    /// An array yields a [`Value::Array`] snapshot of its slots.
    ///
    /// # Errors
    /// - `RuntimeError::NotDeclared` if `name` is unknown.
    /// - `RuntimeError::Unassigned` if a scalar was never assigned.
    pub fn read(&self, name: &str) -> EvalResult<Value> {
        match &self.get(name)?.slot {
            Slot::Scalar(Some(value)) => Ok(value.clone()),
            Slot::Scalar(None) => Err(RuntimeError::Unassigned { name: name.to_string() }),
            Slot::Array(slots) => Ok(Value::Array(slots.clone())),
        }
    }

    /// Reads one array slot (`index` is 1-based).
    ///
    /// # Errors
    /// - `RuntimeError::NotDeclared` if `name` is unknown.
    /// - `RuntimeError::NotAnArray` if `name` is a scalar.
    /// - `RuntimeError::IndexOutOfBounds` unless `1 <= index <= len`.
    /// - `RuntimeError::Unassigned` (named `name[index]`) if the slot is still
    ///   empty.
    pub fn read_index(&self, name: &str, index: i64) -> EvalResult<Value> {
        let Slot::Array(slots) = &self.get(name)?.slot else {
            return Err(RuntimeError::NotAnArray { name: name.to_string() });
        };

        let offset = index_to_offset(index, slots.len())?;
        slots[offset].clone()
                     .ok_or_else(|| RuntimeError::Unassigned { name: format!("{name}[{index}]") })
    }

    /// Changes the length of an array, keeping the values at indices that
    /// still exist. New slots start unassigned.
    ///
    /// # Errors
    /// - `RuntimeError::NotDeclared` if `name` is unknown.
    /// - `RuntimeError::NotAnArray` if `name` is a scalar.
    /// - `RuntimeError::InvalidArraySize` unless `size` is a positive integer.
    pub fn resize(&mut self, name: &str, size: &Value) -> EvalResult<()> {
        let slots = Self::slots_mut(self.get_mut(name)?, name)?;

        let len = match size {
            Value::Integer(n) => array_length(*n)?,
            _ => return Err(RuntimeError::InvalidArraySize),
        };

        trace!("resize {name}: {} -> {len}", slots.len());
        if len > slots.len() {
            grow(slots, len)?;
        } else {
            slots.truncate(len);
        }
        Ok(())
    }

    fn slots_mut<'a>(symbol: &'a mut Symbol, name: &str) -> EvalResult<&'a mut Vec<Option<Value>>> {
        match &mut symbol.slot {
            Slot::Array(slots) => Ok(slots),
            Slot::Scalar(_) => Err(RuntimeError::NotAnArray { name: name.to_string() }),
        }
    }
}

/// Extends `slots` with unassigned entries up to `len`, reporting a failed
/// allocation as an invalid size.
fn grow(slots: &mut Vec<Option<Value>>, len: usize) -> EvalResult<()> {
    slots.try_reserve_exact(len - slots.len())
         .map_err(|_| RuntimeError::InvalidArraySize)?;
    slots.resize(len, None);
    Ok(())
}

impl std::fmt::Display for SymbolTable {
    /// One line per entry, sorted by name: `- <name>: <TYPE> -> <value>`.
    ///
    /// Arrays show their element type followed by `[]`; unassigned scalars
    /// show `NONE`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names = self.symbols.keys().collect::<Vec<_>>();
        names.sort();

        for name in names {
            let symbol = &self.symbols[name];
            match &symbol.slot {
                Slot::Scalar(Some(value)) => {
                    writeln!(f, "- {name}: {} -> {value}", symbol.declared)?;
                },
                Slot::Scalar(None) => writeln!(f, "- {name}: {} -> NONE", symbol.declared)?,
                Slot::Array(slots) => {
                    writeln!(f,
                             "- {name}: {}[] -> {}",
                             symbol.declared,
                             Value::Array(slots.clone()))?;
                },
            }
        }
        Ok(())
    }
}
