//! Per-element-type kernel registry.
//!
//! Every arithmetic kernel in [`kernel`][crate::kernel] exists in two forms: a *bootstrap* form
//! written with plain indexing against the [`Number`][crate::Number] capabilities, and a
//! *specialized* form that the compiler can vectorize more easily. The registry maps each
//! `(operation, element type)` pair to the kernel that should be used for it.
//!
//! The first time a pair is resolved, the bootstrap kernel is returned and the specialized kernel
//! is installed; every later resolution returns the specialized kernel. Both forms accumulate in
//! the same order, so switching between them never changes results.
//!
//! Slots are never removed. Installation is guarded by a lock and is idempotent: if two threads
//! race to specialize the same pair, the first install wins and the second thread simply uses the
//! bootstrap kernel for its one call.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
    sync::{PoisonError, RwLock},
};

use once_cell::sync::Lazy;

use crate::traits::type_name;

/// Identifies a registry-backed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Op {
    Negate,
    Add,
    Subtract,
    Scale,
    Divide,
    Dot,
    MatrixMultiply,
}

impl Op {
    pub(crate) fn name(self) -> &'static str {
        match self {
            Op::Negate => "negate",
            Op::Add => "add",
            Op::Subtract => "subtract",
            Op::Scale => "scale",
            Op::Divide => "divide",
            Op::Dot => "dot",
            Op::MatrixMultiply => "matrix multiply",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

type Slot = Box<dyn Any + Send + Sync>;

pub(crate) struct Registry {
    slots: RwLock<HashMap<(Op, TypeId), Slot>>,
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the process-wide registry.
    pub(crate) fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Resolves the kernel for `op` on element type `T`.
    ///
    /// `K` is the kernel's function pointer type. If no kernel has been installed for the pair
    /// yet, `specialize` is invoked and its result installed, and `bootstrap` is returned.
    pub(crate) fn resolve<T, K>(&self, op: Op, bootstrap: K, specialize: impl FnOnce() -> K) -> K
    where
        T: 'static,
        K: Copy + Send + Sync + 'static,
    {
        let key = (op, TypeId::of::<T>());
        {
            let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(kernel) = slots.get(&key).and_then(|slot| slot.downcast_ref::<K>()) {
                return *kernel;
            }
        }

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots.entry(key).or_insert_with(|| {
            log::debug!("specializing `{op}` for element type `{}`", type_name::<T>());
            Box::new(specialize())
        });
        bootstrap
    }

    /// Returns whether a specialized kernel for `op` on `T` has been installed.
    #[cfg(test)]
    pub(crate) fn is_specialized<T: 'static>(&self, op: Op) -> bool {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&(op, TypeId::of::<T>()))
    }

    /// Returns the number of installed slots.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
