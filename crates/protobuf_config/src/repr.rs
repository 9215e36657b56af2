//! Conversion between wire messages and typed configuration records.

use zkchain_config::{Checker, Validate, ValidationErrors, ViolationKind};

use crate::proto::chain as proto;

/// A wire message that is the encoding of a typed configuration record.
pub trait ProtoRepr: prost::Message + prost::Name + Default + Sized {
    type Type: Validate;

    /// Converts the message into its typed form, reporting absent required fields,
    /// binary fields of the wrong length and unrecognized enum values to `checker`.
    ///
    /// Fields that fail these checks are filled with placeholders; the result must not
    /// be used unless `checker` stays clean.
    fn read_fields(&self, checker: &mut Checker<'_>) -> Self::Type;

    fn build(this: &Self::Type) -> Self;

    /// Reads and validates the message, collecting every violation it contains.
    fn read(&self) -> Result<Self::Type, ValidationErrors> {
        let mut found = Vec::new();
        let mut checker = Checker::new(&mut found);
        let value = self.read_fields(&mut checker);
        value.validate(&mut checker);
        ValidationErrors::check(value, found)
    }
}

/// Reads an optional sub-message. Its violations are reported under `section`.
pub fn read_optional_repr<P: ProtoRepr>(
    checker: &mut Checker<'_>,
    section: &str,
    message: &Option<P>,
) -> Option<P::Type> {
    message
        .as_ref()
        .map(|message| message.read_fields(&mut checker.nested(section)))
}

pub fn required<T: Clone + Default>(checker: &mut Checker<'_>, field: &str, value: &Option<T>) -> T {
    match value {
        Some(value) => value.clone(),
        None => {
            checker.missing(field);
            T::default()
        }
    }
}

/// Reads a required integer that must fit into `usize` on this platform.
pub fn required_usize(checker: &mut Checker<'_>, field: &str, value: &Option<u64>) -> usize {
    let Some(value) = *value else {
        checker.missing(field);
        return 0;
    };
    optional_usize(checker, field, Some(value)).unwrap_or_default()
}

pub fn optional_usize(checker: &mut Checker<'_>, field: &str, value: Option<u64>) -> Option<usize> {
    let value = value?;
    match usize::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            checker.report(
                field,
                ViolationKind::OutOfRangeValue {
                    value: value.to_string(),
                    expected: "a value that fits into usize",
                },
            );
            None
        }
    }
}

const _: () = assert!(usize::BITS <= u64::BITS);

/// Widens a `usize` field to its `uint64` wire form.
pub(crate) fn usize_to_wire(value: usize) -> u64 {
    value as u64
}

/// Reads a required binary field of exactly `N` bytes.
pub fn required_bytes<const N: usize>(
    checker: &mut Checker<'_>,
    field: &str,
    value: &Option<Vec<u8>>,
) -> [u8; N] {
    let Some(bytes) = value else {
        checker.missing(field);
        return [0; N];
    };
    match <[u8; N]>::try_from(bytes.as_slice()) {
        Ok(array) => array,
        Err(_) => {
            checker.report(
                field,
                ViolationKind::InvalidLength {
                    expected: N,
                    actual: bytes.len(),
                },
            );
            [0; N]
        }
    }
}

/// Reads a required enum field. Absence is a violation even though the zero variant exists.
pub fn required_enum<E: ProtoEnum>(checker: &mut Checker<'_>, field: &str, value: &Option<i32>) -> E {
    match value {
        Some(raw) => parse_enum(checker, field, *raw),
        None => {
            checker.missing(field);
            E::default()
        }
    }
}

/// Reads an optional enum field, falling back to the zero variant when absent.
pub fn optional_enum<E: ProtoEnum>(checker: &mut Checker<'_>, field: &str, value: &Option<i32>) -> E {
    value.map_or_else(E::default, |raw| parse_enum(checker, field, raw))
}

fn parse_enum<E: ProtoEnum>(checker: &mut Checker<'_>, field: &str, raw: i32) -> E {
    E::try_from(raw).unwrap_or_else(|_| {
        checker.report(
            field,
            ViolationKind::InvalidEnumValue {
                enum_name: E::NAME,
                value: raw,
            },
        );
        E::default()
    })
}

/// A protobuf enumeration of the schema.
pub trait ProtoEnum: Copy + Default + Into<i32> + TryFrom<i32> {
    const NAME: &'static str;

    fn as_str_name(&self) -> &'static str;

    fn from_str_name(value: &str) -> Option<Self>;
}

macro_rules! impl_proto_enum {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl ProtoEnum for proto::$ty {
                const NAME: &'static str = stringify!($ty);

                fn as_str_name(&self) -> &'static str {
                    proto::$ty::as_str_name(self)
                }

                fn from_str_name(value: &str) -> Option<Self> {
                    proto::$ty::from_str_name(value)
                }
            }
        )+
    };
}

impl_proto_enum!(Network, FeeModelVersion, L1BatchCommitDataGeneratorMode);
