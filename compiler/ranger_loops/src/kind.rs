//! The three progression kinds.

use ranger_ir::TypeId;

/// Element kind of a progression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionKind {
    Int,
    Long,
    Char,
}

impl ProgressionKind {
    /// Order in which an expression type is tested against the base classes.
    pub const CLASSIFICATION_ORDER: [ProgressionKind; 3] = [
        ProgressionKind::Char,
        ProgressionKind::Int,
        ProgressionKind::Long,
    ];

    /// Name of the conversion that turns a loop counter into an element.
    pub const fn number_cast_name(self) -> &'static str {
        match self {
            ProgressionKind::Int => "toInt",
            ProgressionKind::Long => "toLong",
            ProgressionKind::Char => "toChar",
        }
    }

    /// The progression class every progression of this kind derives from.
    pub const fn base_class(self) -> TypeId {
        match self {
            ProgressionKind::Int => TypeId::INT_PROGRESSION,
            ProgressionKind::Long => TypeId::LONG_PROGRESSION,
            ProgressionKind::Char => TypeId::CHAR_PROGRESSION,
        }
    }

    pub const fn element_type(self) -> TypeId {
        match self {
            ProgressionKind::Int => TypeId::INT,
            ProgressionKind::Long => TypeId::LONG,
            ProgressionKind::Char => TypeId::CHAR,
        }
    }

    /// Type of a step value. Char progressions step by `Int`.
    pub const fn step_type(self) -> TypeId {
        match self {
            ProgressionKind::Int | ProgressionKind::Char => TypeId::INT,
            ProgressionKind::Long => TypeId::LONG,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn char_steps_by_int() {
        assert_eq!(ProgressionKind::Char.step_type(), TypeId::INT);
        assert_eq!(ProgressionKind::Char.element_type(), TypeId::CHAR);
        assert_eq!(ProgressionKind::Long.step_type(), TypeId::LONG);
    }

    #[test]
    fn cast_names() {
        let names: Vec<_> = ProgressionKind::CLASSIFICATION_ORDER
            .iter()
            .map(|kind| kind.number_cast_name())
            .collect();
        assert_eq!(names, vec!["toChar", "toInt", "toLong"]);
    }

    #[test]
    fn base_classes_are_distinct() {
        assert_eq!(ProgressionKind::Int.base_class(), TypeId::INT_PROGRESSION);
        assert_ne!(
            ProgressionKind::Long.base_class(),
            ProgressionKind::Char.base_class()
        );
    }
}
