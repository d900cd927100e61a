//! Calculator tiles: the palette templates and the components placed from them.

/// Whether a tile is a digit or an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Number,
    Operator,
}

impl ComponentKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ComponentKind::Number => "Number",
            ComponentKind::Operator => "Operator",
        }
    }
}

/// A single calculator tile. Never mutated after creation; the layout moves
/// whole components around instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedComponent {
    kind: ComponentKind,
    value: &'static str,
}

impl PlacedComponent {
    pub const fn number(value: &'static str) -> Self {
        Self {
            kind: ComponentKind::Number,
            value,
        }
    }

    pub const fn operator(value: &'static str) -> Self {
        Self {
            kind: ComponentKind::Operator,
            value,
        }
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn value(&self) -> &'static str {
        self.value
    }

    pub fn is_operator(&self) -> bool {
        self.kind == ComponentKind::Operator
    }
}

const PALETTE: [PlacedComponent; 16] = [
    PlacedComponent::number("0"),
    PlacedComponent::number("1"),
    PlacedComponent::number("2"),
    PlacedComponent::number("3"),
    PlacedComponent::number("4"),
    PlacedComponent::number("5"),
    PlacedComponent::number("6"),
    PlacedComponent::number("7"),
    PlacedComponent::number("8"),
    PlacedComponent::number("9"),
    PlacedComponent::operator("+"),
    PlacedComponent::operator("-"),
    PlacedComponent::operator("*"),
    PlacedComponent::operator("/"),
    PlacedComponent::operator("="),
    PlacedComponent::operator("C"),
];

/// The fixed set of tiles the user can drag from, in display order.
pub fn palette() -> &'static [PlacedComponent] {
    &PALETTE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_has_sixteen_tiles() {
        assert_eq!(palette().len(), 16);
    }

    #[test]
    fn test_palette_digits_come_first() {
        let digits: Vec<&str> = palette()
            .iter()
            .filter(|c| c.kind() == ComponentKind::Number)
            .map(|c| c.value())
            .collect();
        assert_eq!(digits, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert!(palette()[..10].iter().all(|c| !c.is_operator()));
    }

    #[test]
    fn test_palette_operators() {
        let operators: Vec<&str> = palette()
            .iter()
            .filter(|c| c.is_operator())
            .map(|c| c.value())
            .collect();
        assert_eq!(operators, ["+", "-", "*", "/", "=", "C"]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ComponentKind::Number.display_name(), "Number");
        assert_eq!(ComponentKind::Operator.display_name(), "Operator");
    }
}
