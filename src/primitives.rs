//! 定义 LoRaWAN 的基础标识符与密钥类型。
//! Defines the LoRaWAN identifier and key primitives carried by a session.
//!
//! The text form of every primitive is big-endian hex (the way addresses and
//! EUIs are printed on device labels and in consoles), while the wire form
//! is little-endian, as LoRaWAN frames carry them.

use crate::error::{Error, Result};
use bytes::{Buf, BufMut};
use std::{fmt, str::FromStr};

/// Generates the byte-array newtype plumbing shared by every primitive.
macro_rules! byte_primitive {
    ($name:ident, $size:expr) => {
        impl $name {
            /// The number of bytes of this primitive.
            /// 此类型的字节数。
            pub const SIZE: usize = $size;

            /// Returns the bytes in big-endian (display) order.
            /// 以大端（显示）顺序返回字节。
            pub fn as_bytes(&self) -> &[u8; $size] {
                &self.0
            }

            /// Encodes the value into a buffer in LoRaWAN wire order.
            /// 以 LoRaWAN 传输顺序（小端）将值编码到缓冲区。
            pub fn encode<B: BufMut>(&self, buf: &mut B) {
                for byte in self.0.iter().rev() {
                    buf.put_u8(*byte);
                }
            }

            /// Decodes a value from a buffer in LoRaWAN wire order.
            /// 以 LoRaWAN 传输顺序从缓冲区解码值。
            pub fn decode<B: Buf>(buf: &mut B) -> Option<Self> {
                if buf.remaining() < $size {
                    return None;
                }
                let mut bytes = [0u8; $size];
                buf.copy_to_slice(&mut bytes);
                bytes.reverse();
                Some(Self(bytes))
            }
        }

        impl From<[u8; $size]> for $name {
            fn from(bytes: [u8; $size]) -> Self {
                Self(bytes)
            }
        }

        impl From<$name> for [u8; $size] {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                let decoded = hex::decode(s)?;
                let bytes: [u8; $size] =
                    decoded.as_slice().try_into().map_err(|_| Error::InvalidLength {
                        expected: $size,
                        actual: decoded.len(),
                    })?;
                Ok(Self(bytes))
            }
        }
    };
}

/// A device address, assigned by the network at activation.
/// 设备地址，由网络在激活时分配。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DevAddr(pub [u8; 4]);

byte_primitive!(DevAddr, 4);

impl DevAddr {
    /// Returns the network identifier, the 7 most significant bits of the address.
    ///
    /// 返回网络标识符，即地址的最高 7 位。
    pub fn nwk_id(&self) -> u8 {
        self.0[0] >> 1
    }
}

/// A 64-bit extended unique identifier (AppEUI / DevEUI).
/// 64 位扩展唯一标识符（AppEUI / DevEUI）。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Eui64(pub [u8; 8]);

byte_primitive!(Eui64, 8);

/// An AES-128 key, such as the network session key.
///
/// `Debug` never prints the key material; use `Display` when the hex form
/// is really needed.
///
/// AES-128 密钥，例如网络会话密钥。`Debug` 不会输出密钥内容。
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Aes128Key(pub [u8; 16]);

byte_primitive!(Aes128Key, 16);

impl fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_dev_addr_text_form() {
        let addr: DevAddr = "26011BDA".parse().unwrap();
        assert_eq!(addr, DevAddr([0x26, 0x01, 0x1b, 0xda]));
        assert_eq!(addr.to_string(), "26011bda");
        assert_eq!(addr.nwk_id(), 0x13);
    }

    #[test]
    fn test_eui64_wire_form_is_little_endian() {
        let eui = Eui64([1, 2, 3, 4, 5, 6, 7, 8]);
        let mut buf = BytesMut::new();
        eui.encode(&mut buf);
        assert_eq!(&buf[..], &[8, 7, 6, 5, 4, 3, 2, 1]);

        let mut cursor = &buf[..];
        assert_eq!(Eui64::decode(&mut cursor), Some(eui));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_decode_short_buffer() {
        let mut cursor: &[u8] = &[0x01, 0x02, 0x03];
        assert_eq!(DevAddr::decode(&mut cursor), None);
        // Nothing is consumed on failure.
        assert_eq!(cursor.len(), 3);
    }

    #[test]
    fn test_parse_wrong_length() {
        let err = "0102030405".parse::<DevAddr>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                expected: 4,
                actual: 5
            }
        );
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert!(matches!(
            "zz011bda".parse::<DevAddr>(),
            Err(Error::InvalidHex(_))
        ));
        assert!(matches!(
            "26011bd".parse::<DevAddr>(),
            Err(Error::InvalidHex(_))
        ));
    }

    #[test]
    fn test_key_debug_is_redacted() {
        let key: Aes128Key = "2b7e151628aed2a6abf7158809cf4f3c".parse().unwrap();
        assert_eq!(format!("{key:?}"), "Aes128Key(..)");
        assert_eq!(key.to_string(), "2b7e151628aed2a6abf7158809cf4f3c");
    }
}
