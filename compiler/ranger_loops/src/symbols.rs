//! Immutable configuration of the recognizer.
//!
//! Which names denote which idiom, which classes may form a progression,
//! which arrays support `indices`, and which helper functions the
//! recognizer may call into. Built once, before any recognition, and shared
//! by reference afterwards.

use rustc_hash::FxHashMap;

use ranger_ir::{FunctionId, FunctionTable, Name, QualifiedName, Signature, StringInterner, TypeId};
use ranger_match::ClassSet;

/// Callee names identifying each idiom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdiomNames {
    /// Short name of the `a..b` member operator, declared once per element class.
    pub range_to: Name,
    pub down_to: QualifiedName,
    pub until: QualifiedName,
    pub step: QualifiedName,
    /// The `indices` property getter.
    pub indices: QualifiedName,
}

impl IdiomNames {
    pub fn standard(interner: &StringInterner) -> Self {
        Self {
            range_to: interner.intern("rangeTo"),
            down_to: QualifiedName::parse(interner, "core.ranges.downTo"),
            until: QualifiedName::parse(interner, "core.ranges.until"),
            step: QualifiedName::parse(interner, "core.ranges.step"),
            indices: QualifiedName::parse(interner, "core.collections.<get-indices>"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ProgressionSymbols {
    pub names: IdiomNames,
    /// Base progression classes a `step` modifier can be applied to.
    pub progression_classes: ClassSet,
    /// Classes whose values can be the ends of a range.
    pub element_classes: ClassSet,
    /// Classes a `step` value may have.
    pub step_classes: ClassSet,
    /// Array classes supporting `indices`; must equal the keys of `array_size`.
    pub supported_arrays: ClassSet,
    array_size: FxHashMap<TypeId, FunctionId>,
    check_progression_step: FxHashMap<TypeId, FunctionId>,
}

impl ProgressionSymbols {
    /// Configuration over the builtin classes with the given helper tables.
    ///
    /// `supported_arrays` is derived from `array_size`, so the `indices`
    /// allow-list cannot name an array the size table does not know.
    pub fn new(
        names: IdiomNames,
        array_size: FxHashMap<TypeId, FunctionId>,
        check_progression_step: FxHashMap<TypeId, FunctionId>,
    ) -> Self {
        Self {
            names,
            progression_classes: [
                TypeId::INT_PROGRESSION,
                TypeId::LONG_PROGRESSION,
                TypeId::CHAR_PROGRESSION,
            ]
            .into_iter()
            .collect(),
            element_classes: TypeId::INTEGER_CLASSES
                .into_iter()
                .chain(std::iter::once(TypeId::CHAR))
                .collect(),
            step_classes: [TypeId::INT, TypeId::LONG].into_iter().collect(),
            supported_arrays: array_size.keys().copied().collect(),
            array_size,
            check_progression_step,
        }
    }

    /// Declare the helper functions the recognizer emits calls to and
    /// return the matching configuration.
    ///
    /// Declares a `size` getter on every primitive array class and on the
    /// generic `Array`, and a `checkProgressionStep` overload for `Int` and
    /// `Long` steps.
    pub fn declare_builtins(functions: &mut FunctionTable, interner: &StringInterner) -> Self {
        let mut array_size = FxHashMap::default();
        for array in TypeId::PRIMITIVE_ARRAYS
            .into_iter()
            .chain(std::iter::once(TypeId::ARRAY))
        {
            let class_name = array.name().unwrap_or("Array");
            let path = format!("core.{class_name}.<get-size>");
            let size = functions.declare(
                Signature::new(QualifiedName::parse(interner, &path), TypeId::INT)
                    .with_dispatch_receiver(array),
            );
            array_size.insert(array, size);
        }

        let step_check = QualifiedName::parse(interner, "core.internal.checkProgressionStep");
        let step_param = interner.intern("step");
        let mut check_progression_step = FxHashMap::default();
        for step_type in [TypeId::INT, TypeId::LONG] {
            let check = functions.declare(
                Signature::new(step_check.clone(), step_type).with_param(step_param, step_type),
            );
            check_progression_step.insert(step_type, check);
        }

        tracing::debug!(
            arrays = array_size.len(),
            step_checks = check_progression_step.len(),
            "declared progression helpers"
        );

        Self::new(
            IdiomNames::standard(interner),
            array_size,
            check_progression_step,
        )
    }

    /// The `size` getter for an array class.
    #[inline]
    pub fn array_size(&self, array_class: TypeId) -> Option<FunctionId> {
        self.array_size.get(&array_class).copied()
    }

    /// The `checkProgressionStep` overload for a (non-null) step type.
    #[inline]
    pub fn check_progression_step(&self, step_type: TypeId) -> Option<FunctionId> {
        self.check_progression_step.get(&step_type).copied()
    }
}
