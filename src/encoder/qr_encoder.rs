//! Main QR encoder - wires the pipeline together

use tracing::{debug, trace};

use crate::encoder::bitstream::build_data_codewords;
use crate::encoder::config::EncodeOptions;
use crate::encoder::format::draw_format_bits;
use crate::encoder::interleave::add_ecc_and_interleave;
use crate::encoder::mask::apply_mask;
use crate::encoder::patterns::FunctionPatterns;
use crate::encoder::penalty;
use crate::encoder::placement::place_codewords;
use crate::encoder::tables::raw_data_modules;
use crate::encoder::version::{max_payload_length, select_version};
use crate::error::{EncodeError, Result};
use crate::models::{BitMatrix, MaskPattern, Symbol};

/// Turns a byte payload into a finished symbol
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `payload` as a single byte-mode segment.
    ///
    /// Picks the smallest version in the options' window, builds the codeword
    /// sequence, lays out the matrix and keeps the mask with the lowest penalty
    /// (or the forced one). Nothing is returned on failure.
    pub fn encode(payload: &[u8], options: &EncodeOptions) -> Result<Symbol> {
        options.validate()?;
        if payload.is_empty() {
            return Err(EncodeError::InvalidArgument("payload is empty"));
        }
        let capacity = max_payload_length(options.ec_level, options.max_version);
        if payload.len() > capacity {
            return Err(EncodeError::CapacityExceeded {
                length: payload.len(),
                capacity,
            });
        }

        // Step 1: version and data codewords
        let params = select_version(payload.len(), options)?;
        let data = build_data_codewords(
            payload,
            params.data_capacity,
            params.version.char_count_bits(),
        )?;

        // Step 2: error correction and interleaving
        let codewords = add_ecc_and_interleave(&data, &params)?;
        if codewords.len() != params.total_codewords {
            return Err(EncodeError::InternalInconsistency(format!(
                "interleaved {} codewords, version {} holds {}",
                codewords.len(),
                params.version,
                params.total_codewords
            )));
        }

        // Step 3: function patterns
        let FunctionPatterns {
            mut modules,
            function,
        } = FunctionPatterns::new(params.version);
        let free = function.data_modules_count();
        let expected = raw_data_modules(params.version);
        if free != expected {
            return Err(EncodeError::InternalInconsistency(format!(
                "version {} has {} free modules, expected {}",
                params.version, free, expected
            )));
        }

        // Step 4: data placement
        let placed = place_codewords(&mut modules, &function, &codewords);
        if placed != codewords.len() * 8 {
            return Err(EncodeError::InternalInconsistency(format!(
                "placed {} of {} codeword bits",
                placed,
                codewords.len() * 8
            )));
        }

        // Step 5: masking
        let masked = |pattern: MaskPattern| -> BitMatrix {
            let mut candidate = modules.clone();
            apply_mask(&mut candidate, pattern, &function);
            draw_format_bits(&mut candidate, options.ec_level, pattern);
            candidate
        };

        let (mask, modules) = match options.mask {
            Some(pattern) => (pattern, masked(pattern)),
            None => {
                let mut best: Option<(MaskPattern, BitMatrix, u32)> = None;
                for pattern in MaskPattern::ALL {
                    let candidate = masked(pattern);
                    let score = penalty::score(&candidate);
                    trace!("mask {} penalty {}", pattern.index(), score);
                    // Strictly lower only, so ties keep the earlier mask
                    if best.as_ref().is_none_or(|(_, _, s)| score < *s) {
                        best = Some((pattern, candidate, score));
                    }
                }
                match best {
                    Some((pattern, candidate, _)) => (pattern, candidate),
                    None => {
                        return Err(EncodeError::InternalInconsistency(
                            "no mask candidate evaluated".to_string(),
                        ));
                    }
                }
            }
        };

        debug!(
            "encoded {} bytes as version {} ({:?}), mask {}",
            payload.len(),
            params.version,
            options.ec_level,
            mask.index()
        );

        Ok(Symbol {
            version: params.version.number(),
            size: params.version.size(),
            modules,
            ec_level: options.ec_level,
            mask,
        })
    }
}
