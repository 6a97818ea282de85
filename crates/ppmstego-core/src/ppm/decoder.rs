use std::str::SplitAsciiWhitespace;

use log::debug;

use super::{PpmImage, Rgb, PPM_TAG};
use crate::error::StegoError;
use crate::result::Result;

/// Upper bound for a single header comment line, without the leading `#`.
pub const MAX_COMMENT_LEN: usize = 255;

/// How the parser treats a pixel sample token that is not a number.
///
/// Zeroing is inherited from long-lived producers of sloppy plain PPM
/// files; `Reject` turns such tokens into hard errors instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MalformedSamplePolicy {
    /// a malformed sample degrades to channel value 0
    #[default]
    Zero,
    /// a malformed sample fails the parse
    Reject,
}

/// Options steering the PPM parser.
#[derive(Debug, Default, Clone)]
pub struct CodecOptions {
    /// policy for non-numeric sample tokens in the pixel section
    pub malformed_sample: MalformedSamplePolicy,
}

pub(super) fn parse(bytes: &[u8], options: &CodecOptions) -> Result<PpmImage> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| StegoError::MalformedHeader("image data is not valid text".into()))?;
    let mut rest = text;

    // The tag line must match exactly, case- and value-sensitive.
    let tag = next_line(&mut rest).unwrap_or("");
    if tag != PPM_TAG {
        return Err(StegoError::UnsupportedFormat {
            found: tag.to_string(),
        });
    }

    let mut comments = Vec::new();
    while rest.starts_with('#') {
        let line = next_line(&mut rest).unwrap_or("");
        let comment = &line[1..];
        if comment.len() > MAX_COMMENT_LEN {
            return Err(StegoError::CommentTooLong {
                length: comment.len(),
                limit: MAX_COMMENT_LEN,
            });
        }
        comments.push(comment.to_string());
    }

    let mut tokens = rest.split_ascii_whitespace();
    let width: u32 = header_number(&mut tokens, "width")?;
    let height: u32 = header_number(&mut tokens, "height")?;
    let max_value: u16 = header_number(&mut tokens, "max channel value")?;
    debug!("image header: {width}x{height}, max channel value {max_value}, {} comment(s)", comments.len());

    let expected = width as usize * height as usize;
    let mut pixels = Vec::with_capacity(expected);
    for index in 0..expected {
        let red = sample(&mut tokens, index, expected, options)?;
        let green = sample(&mut tokens, index, expected, options)?;
        let blue = sample(&mut tokens, index, expected, options)?;
        pixels.push(Rgb { red, green, blue });
    }

    Ok(PpmImage {
        width,
        height,
        max_value,
        comments,
        pixels,
    })
}

/// Takes the next line off `rest`, without its terminator.
fn next_line<'a>(rest: &mut &'a str) -> Option<&'a str> {
    if rest.is_empty() {
        return None;
    }
    let (line, tail) = match rest.find('\n') {
        Some(pos) => (&rest[..pos], &rest[pos + 1..]),
        None => (*rest, ""),
    };
    *rest = tail;
    Some(line.strip_suffix('\r').unwrap_or(line))
}

fn header_number<T: std::str::FromStr>(
    tokens: &mut SplitAsciiWhitespace,
    what: &str,
) -> Result<T> {
    let token = tokens
        .next()
        .ok_or_else(|| StegoError::MalformedHeader(format!("missing {what}")))?;
    token
        .parse()
        .map_err(|_| StegoError::MalformedHeader(format!("invalid {what} {token:?}")))
}

fn sample(
    tokens: &mut SplitAsciiWhitespace,
    index: usize,
    expected: usize,
    options: &CodecOptions,
) -> Result<u16> {
    let token = tokens.next().ok_or(StegoError::TruncatedImage {
        expected,
        found: index,
    })?;
    match token.parse() {
        Ok(value) => Ok(value),
        Err(_) => match options.malformed_sample {
            MalformedSamplePolicy::Zero => Ok(0),
            MalformedSamplePolicy::Reject => Err(StegoError::MalformedSample {
                token: token.to_string(),
                index,
            }),
        },
    }
}
