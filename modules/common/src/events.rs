//! Event encoding shared by both adapters, plus the administrative events they have in common.

use alloy_primitives::{Address, Bytes, B256};
use ruint::aliases::U256;
use std::io;
use wormhole_io::{Readable, Writeable};

/// Notification recorded in the ledger's event log under [Event::NAME].
pub trait Event: Readable + Writeable {
    const NAME: &'static str;
}

/// Field of an [Event]. Fixed-width values are written as-is, byte strings with a u32 length
/// prefix.
pub trait EventField: Sized {
    fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self>;

    fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()>;
}

impl EventField for Address {
    fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        <[u8; 20]>::read(reader).map(Address::from)
    }

    fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_slice())
    }
}

impl EventField for B256 {
    fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        <[u8; 32]>::read(reader).map(B256::from)
    }

    fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_slice())
    }
}

impl EventField for U256 {
    fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        <[u8; 32]>::read(reader).map(U256::from_be_bytes::<32>)
    }

    fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.to_be_bytes::<32>())
    }
}

impl EventField for Bytes {
    fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let len = usize::try_from(u32::read(reader)?)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "bytes too long"))?;
        let mut out = vec![0; len];
        reader.read_exact(&mut out)?;
        Ok(out.into())
    }

    fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let len = u32::try_from(self.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "bytes too long"))?;
        len.write(writer)?;
        writer.write_all(self)
    }
}

macro_rules! impl_event_field_for_readable {
    ($($ty:ty),*) => {
        $(
            impl EventField for $ty {
                fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self> {
                    Readable::read(reader)
                }

                fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
                    self.write(writer)
                }
            }
        )*
    };
}

impl_event_field_for_readable!(u8, u64);

impl EventField for bool {
    fn read_field<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        match u8::read(reader)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "invalid bool")),
        }
    }

    fn write_field<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        u8::from(*self).write(writer)
    }
}

/// Declares an event struct along with its [Event] encoding. Fields are encoded in declaration
/// order and must implement [EventField].
#[macro_export]
macro_rules! event {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::wormhole_io::Readable for $name {
            fn read<R>(reader: &mut R) -> std::io::Result<Self>
            where
                Self: Sized,
                R: std::io::Read,
            {
                Ok(Self {
                    $($field: $crate::events::EventField::read_field(reader)?,)*
                })
            }
        }

        impl $crate::wormhole_io::Writeable for $name {
            fn write<W>(&self, writer: &mut W) -> std::io::Result<()>
            where
                Self: Sized,
                W: std::io::Write,
            {
                $($crate::events::EventField::write_field(&self.$field, writer)?;)*
                Ok(())
            }
        }

        impl $crate::events::Event for $name {
            const NAME: &'static str = stringify!($name);
        }
    };
}

event! {
    /// Native currency the owner moved out of an adapter.
    pub struct Withdrawal {
        pub to: Address,
        pub amount: U256,
    }
}

event! {
    pub struct OwnershipTransferred {
        pub previous_owner: Address,
        pub new_owner: Address,
    }
}
