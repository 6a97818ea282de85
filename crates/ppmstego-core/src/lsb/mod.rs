//! LSB embedding and extraction along the secret-derived traversal.
//!
//! Both directions share one traversal (`StrideWalk`) and one bit layout:
//! each message byte is consumed least-significant bit first in
//! groups of 3-3-2, one visited pixel per group. Within a group the bits go
//! into the low bits of red, then green, then blue; the last group only has
//! bits 6 and 7 left, so it touches red and green and leaves blue alone.

mod iterators;

use log::debug;

use crate::error::StegoError;
use crate::ppm::PpmImage;
use crate::result::Result;
use crate::stride::stride_of;
use iterators::StrideWalk;

/// The byte that terminates a hidden message. Appended by the hiding
/// caller, consumed (and dropped) by extraction.
pub const SENTINEL: u8 = b'\n';

pub struct LsbCodec;

impl LsbCodec {
    /// Hides `payload` in the low channel bits of `image` along the
    /// traversal derived from `secret`, returning the mutated image.
    ///
    /// The payload is embedded exactly as given; the terminating
    /// [`SENTINEL`] is the caller's duty. The image is taken by value, so
    /// a failed embedding never leaves a half-written image behind.
    pub fn embed(mut image: PpmImage, payload: &[u8], secret: u64) -> Result<PpmImage> {
        let available = image.pixel_count();
        if payload.len() > available {
            return Err(StegoError::CapacityExceeded {
                required: payload.len(),
                available,
            });
        }

        let (width, height) = image.dimensions();
        let stride = stride_of(secret);
        debug!(
            "embedding {} byte(s) into a {width}x{height} image with stride {stride}",
            payload.len()
        );

        let mut walk = StrideWalk::new(width, height, stride);
        for &byte in payload {
            for group in 0..3u8 {
                let (x, y) = walk.next().ok_or(StegoError::ImageExhausted)?;
                let pixel = image.get_pixel_mut(x, y);
                let base = 3 * group;
                pixel.red = with_low_bit(pixel.red, bit_of(byte, base));
                pixel.green = with_low_bit(pixel.green, bit_of(byte, base + 1));
                if base + 2 < u8::BITS as u8 {
                    pixel.blue = with_low_bit(pixel.blue, bit_of(byte, base + 2));
                }
            }
        }

        Ok(image)
    }

    /// Reads bytes back along the same traversal until the [`SENTINEL`]
    /// shows up, which is dropped. Running off the grid first means the
    /// secret is wrong or the image never carried a message.
    pub fn extract(image: &PpmImage, secret: u64) -> Result<Vec<u8>> {
        let (width, height) = image.dimensions();
        let stride = stride_of(secret);
        debug!("extracting from a {width}x{height} image with stride {stride}");

        let mut walk = StrideWalk::new(width, height, stride);
        let mut message = Vec::new();
        loop {
            let mut byte = 0u8;
            for group in 0..3u8 {
                let (x, y) = walk.next().ok_or(StegoError::ImageExhausted)?;
                let pixel = image.get_pixel(x, y);
                let base = 3 * group;
                byte |= low_bit(pixel.red) << base;
                byte |= low_bit(pixel.green) << (base + 1);
                if base + 2 < u8::BITS as u8 {
                    byte |= low_bit(pixel.blue) << (base + 2);
                }
            }
            if byte == SENTINEL {
                debug!("found the message terminator after {} byte(s)", message.len());
                return Ok(message);
            }
            message.push(byte);
        }
    }
}

fn bit_of(byte: u8, position: u8) -> u16 {
    u16::from((byte >> position) & 1)
}

fn with_low_bit(channel: u16, bit: u16) -> u16 {
    (channel & (u16::MAX - 1)) | bit
}

fn low_bit(channel: u16) -> u8 {
    (channel & 1) as u8
}
