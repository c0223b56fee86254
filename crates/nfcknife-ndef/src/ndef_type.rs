/// The 3-bit type name format field, classifying a record's type bytes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum TypeNameFormat {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl TypeNameFormat {
    pub(crate) fn wire_code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::WellKnown => 1,
            Self::Mime => 2,
            Self::AbsoluteUri => 3,
            Self::External => 4,
            Self::Unknown => 5,
            Self::Unchanged => 6,
            Self::Reserved => 7,
        }
    }

    pub(crate) fn from_wire(code: u8) -> Self {
        match code {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            7 => Self::Reserved,
            _ => panic!("TNF is 3 bits, {code} is out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn wire_code_round_trips_for_all_codes() {
        for code in 0..8 {
            assert_eq!(TypeNameFormat::from_wire(code).wire_code(), code);
        }
    }
}
