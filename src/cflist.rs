//! 定义信道频率列表（CFList）。
//! Defines the channel frequency list (CFList) a session may override.

use crate::error::{Error, Result};
use bytes::{Buf, BufMut};

/// The number of frequencies carried by a CFList.
pub const CFLIST_CHANNELS: usize = 5;

/// The size of a CFList on the wire: five 24-bit values and one RFU byte.
/// CFList 在网络传输中的大小：五个 24 位值加一个保留字节。
pub const CFLIST_SIZE: usize = 16;

const MAX_ENCODED_FREQUENCY: u32 = 0x00FF_FFFF;

/// A list of up to five extra channel frequencies, in Hz.
///
/// A frequency of `0` marks the channel as unused.
///
/// 最多五个额外信道频率的列表（单位 Hz）。频率为 `0` 表示信道未使用。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CfList([u32; CFLIST_CHANNELS]);

impl CfList {
    /// Creates a CFList, validating that every frequency is encodable.
    ///
    /// 创建一个 CFList，并验证每个频率都可以被编码。
    pub fn new(frequencies: [u32; CFLIST_CHANNELS]) -> Result<Self> {
        for &freq in &frequencies {
            if freq % 100 != 0 {
                return Err(Error::InvalidFrequency(freq));
            }
            if freq / 100 > MAX_ENCODED_FREQUENCY {
                return Err(Error::FrequencyOutOfRange(freq));
            }
        }
        Ok(Self(frequencies))
    }

    pub fn frequencies(&self) -> &[u32; CFLIST_CHANNELS] {
        &self.0
    }

    /// Iterates over the frequencies of the channels that are in use.
    pub fn iter_enabled(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied().filter(|&freq| freq != 0)
    }

    /// 将 CFList 编码到缓冲区。
    /// Encodes the CFList into a buffer.
    pub fn encode<B: BufMut>(&self, buf: &mut B) {
        for freq in self.0 {
            buf.put_uint_le(u64::from(freq / 100), 3);
        }
        buf.put_u8(0); // RFU
    }

    /// 从缓冲区解码 CFList。
    /// Decodes a CFList from a buffer. The trailing RFU byte is ignored.
    pub fn decode<B: Buf>(buf: &mut B) -> Option<Self> {
        if buf.remaining() < CFLIST_SIZE {
            return None;
        }
        let mut frequencies = [0u32; CFLIST_CHANNELS];
        for freq in frequencies.iter_mut() {
            // A 24-bit value times 100 always fits in a u32.
            *freq = buf.get_uint_le(3) as u32 * 100;
        }
        buf.advance(1);
        Some(Self(frequencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    const EU868_EXTRA: [u32; 5] = [867_100_000, 867_300_000, 867_500_000, 867_700_000, 867_900_000];

    #[test]
    fn test_cflist_encoding() {
        let cf_list = CfList::new(EU868_EXTRA).unwrap();
        let mut buf = BytesMut::new();
        cf_list.encode(&mut buf);

        assert_eq!(buf.len(), CFLIST_SIZE);
        // 867.1 MHz / 100 = 8671000 = 0x844F18, little-endian.
        assert_eq!(&buf[0..3], &[0x18, 0x4f, 0x84]);
        assert_eq!(buf[15], 0);

        let mut cursor = &buf[..];
        assert_eq!(CfList::decode(&mut cursor), Some(cf_list));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_cflist_rejects_unencodable_frequencies() {
        assert_eq!(
            CfList::new([867_100_050, 0, 0, 0, 0]),
            Err(Error::InvalidFrequency(867_100_050))
        );
        assert_eq!(
            CfList::new([0, 0, 0, 0, 1_677_721_600]),
            Err(Error::FrequencyOutOfRange(1_677_721_600))
        );
        // The largest encodable frequency is accepted.
        assert!(CfList::new([1_677_721_500, 0, 0, 0, 0]).is_ok());
    }

    #[test]
    fn test_cflist_enabled_channels() {
        let cf_list = CfList::new([867_100_000, 0, 867_500_000, 0, 0]).unwrap();
        let enabled: Vec<u32> = cf_list.iter_enabled().collect();
        assert_eq!(enabled, vec![867_100_000, 867_500_000]);
    }

    #[test]
    fn test_cflist_decode_short_buffer() {
        let mut cursor: &[u8] = &[0u8; CFLIST_SIZE - 1];
        assert_eq!(CfList::decode(&mut cursor), None);
    }
}
