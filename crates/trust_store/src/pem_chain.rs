// Copyright 2021-2024 SecureDNA Stiftung (SecureDNA Foundation) <licensing@securedna.org>
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Splits one chain string into PEM blocks and concatenates their payloads.

use tracing::debug;

use crate::{Diagnostics, Strictness, TrustStoreError};

pub const CERTIFICATE_TAG: &str = "CERTIFICATE";

/// Accepted alongside certificates only so existing inputs keep working.
///
/// WARNING: the payload of such a block is a private key, and it ends up stored in
/// the trust store as if it were a certificate.
pub const EC_PRIVATE_KEY_TAG: &str = "EC PRIVATE KEY";

pub const ACCEPTED_TAGS: [&str; 2] = [CERTIFICATE_TAG, EC_PRIVATE_KEY_TAG];

const BEGIN: &[u8] = b"-----BEGIN ";
const END: &[u8] = b"-----END ";
const DASHES: &[u8] = b"-----";

/// The concatenated DER of every block in one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedChain {
    pub index: usize,
    pub der: Vec<u8>,
    /// Number of framed blocks found, including ones that failed to decode.
    pub blocks: usize,
}

/// Decodes chain number `index`, recording any problems in `diagnostics`.
///
/// Text before a block is skipped. Once no further block can be found, anything
/// left over is reported as [`TrustStoreError::UnparsablePem`] and decoding of
/// this chain stops. Blocks with a type outside [`ACCEPTED_TAGS`] are reported;
/// under [`Strictness::Lenient`] their payload is still appended.
pub fn decode_chain(
    index: usize,
    chain: &str,
    strictness: Strictness,
    diagnostics: &mut Diagnostics,
) -> DecodedChain {
    let mut rest = chain.trim().as_bytes();
    let mut der = Vec::new();
    let mut block = 0;

    loop {
        let Some((start, end)) = next_frame(rest) else {
            if !rest.is_empty() {
                diagnostics.push(TrustStoreError::UnparsablePem {
                    chain: index,
                    block,
                });
            }
            break;
        };
        let frame = &rest[start..end];
        rest = &rest[end..];

        match pem::parse(frame) {
            Ok(pem) => {
                let accepted = ACCEPTED_TAGS.contains(&pem.tag());
                if !accepted {
                    diagnostics.push(TrustStoreError::UnexpectedBlockType {
                        chain: index,
                        block,
                        found: pem.tag().to_owned(),
                    });
                }
                if accepted || strictness == Strictness::Lenient {
                    der.extend_from_slice(pem.contents());
                }
                debug!(
                    chain = index,
                    block,
                    tag = pem.tag(),
                    bytes = pem.contents().len(),
                    "Decoded PEM block"
                );
            }
            Err(source) => diagnostics.push(TrustStoreError::MalformedPem {
                chain: index,
                block,
                source,
            }),
        }
        block += 1;
    }

    DecodedChain {
        index,
        der,
        blocks: block,
    }
}

/// Finds the next `BEGIN` framed block, returning its byte range.
///
/// A frame ends after the first `END` line following its `BEGIN` line, whatever that
/// line's label, plus the rest of that line when it is only whitespace. A frame never
/// reaches past the next `BEGIN` line, so a block missing its `END` line ends where
/// the following block starts.
fn next_frame(input: &[u8]) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(offset) = find(&input[from..], BEGIN) {
        let start = from + offset;
        if let Some(end) = frame_end(input, start) {
            return Some((start, end));
        }
        from = start + BEGIN.len();
    }
    None
}

fn frame_end(input: &[u8], start: usize) -> Option<usize> {
    let label_start = start + BEGIN.len();
    let label_line_end = line_end(input, label_start);
    let label_len = find(&input[label_start..label_line_end], DASHES)?;
    let body_start = label_start + label_len + DASHES.len();
    let body = &input[body_start..];

    let end_line = match (find(body, END), find(body, BEGIN)) {
        (Some(end), Some(begin)) if begin < end => return Some(body_start + begin),
        (Some(end), _) => body_start + end,
        (None, Some(begin)) => return Some(body_start + begin),
        (None, None) => return None,
    };

    let end_label_start = end_line + END.len();
    let end_line_end = line_end(input, end_label_start);
    let mut end = match find(&input[end_label_start..end_line_end], DASHES) {
        Some(label_len) => end_label_start + label_len + DASHES.len(),
        None => end_line_end,
    };

    let eol = line_end(input, end);
    let eol = if eol < input.len() { eol + 1 } else { eol };
    if input[end..eol].iter().all(u8::is_ascii_whitespace) {
        end = eol;
    }
    Some(end)
}

/// Index of the next `\n` at or after `from`, or the input length.
fn line_end(input: &[u8], from: usize) -> usize {
    input[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(input.len(), |p| from + p)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
