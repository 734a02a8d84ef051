use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UnitCategory {
    Length,
    Mass,
    Temperature,
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Mass => write!(f, "mass"),
            Self::Temperature => write!(f, "temperature"),
        }
    }
}
