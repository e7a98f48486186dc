//! MUCOM88 MML voice block encoder

use core::fmt::{self, Write};

use super::VoiceEncoder;
use crate::name::NamedVoice;
use crate::voice::VoiceRecord;

/// Tabular `@n:{ ... }` voice definition, as pasted into MUCOM88 sources
///
/// ```text
///   @3:{
///    7,  4
///   31,  0,  0, 15,  0, 20,  0,  1,  3
///   ...                                 (one line per operator)
///   31,  0,  0, 15,  0,  0,  0,  1,  0,"NAME"}
/// ```
///
/// Operator columns: AR, DR, SR, RR, SL, TL, KS, ML, DT.
#[derive(Debug, Clone, Copy, Default)]
pub struct MucomText;

impl VoiceEncoder for MucomText {
    fn extension(&self) -> &'static str {
        "muc"
    }

    fn encode(
        &self,
        index: usize,
        record: &VoiceRecord,
        named: &NamedVoice,
        _patch_name: &str,
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "  @{index}:{{")?;
        write!(out, "{:4},{:3}", record.feedback(), record.algorithm())?;
        for op in record.operators() {
            write!(
                out,
                "\n {:3},{:3},{:3},{:3},{:3},{:3},{:3},{:3},{:3}",
                op.attack_rate(),
                op.decay_rate(),
                op.sustain_rate(),
                op.release_rate(),
                op.sustain_level(),
                op.total_level(),
                op.key_scale(),
                op.multiple(),
                op.detune(),
            )?;
        }
        write!(out, ",{:?}}}\n\n", named.decoded_name)?;
        Ok(out)
    }
}
