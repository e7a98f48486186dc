//! RYM2612 XML preset encoder
//!
//! RYM2612 describes levels as loudness rather than attenuation and wants a
//! few OPN fields rescaled, so each operator goes through
//! [`Rym2612Operator::from_operator`] before being written out.

use core::fmt::{self, Write};

use quick_xml::escape::escape;

use super::VoiceEncoder;
use crate::OPERATOR_COUNT;
use crate::name::NamedVoice;
use crate::tables::MULTIPLE_TABLE;
use crate::voice::{Operator, VoiceRecord};

/// Number of per-operator parameters in a preset
pub const OPERATOR_PARAMS: usize = 14;

/// Song-level parameters written before `Feedback`
const GLOBAL_PARAMS_HEAD: &[(&str, &str)] = &[
    ("volume", "0.4483062326908112"),
    ("Ladder_Effect", "0.0"),
    ("Output_Filtering", "0.0"),
    ("Polyphony", "8.0"),
    ("TimerA", "0.2000000029802322"),
    ("Spec_Mode", "2.0"),
    ("Pitchbend_Range", "2.0"),
    ("Legato_Retrig", "0.0"),
    ("LFO_Speed", "2.0"),
    ("LFO_Enable", "1.0"),
];

/// Parameters between `Feedback` and `Algorithm`
const GLOBAL_PARAMS_MID: &[(&str, &str)] = &[
    ("FMSMW", "100.0"),
    ("FMS", "0.0"),
    ("DAC_Prescaler", "1.0"),
];

/// RYM2612 preset document encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct Rym2612;

/// One operator remapped to RYM2612 parameter ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rym2612Operator {
    /// Velocity sensitivity (half the level on carriers, else 0)
    pub velocity: u8,
    /// Output level, `127 - TL` minus the velocity share
    pub level: u8,
    /// Rate scaling (OPN key scale, 0-3)
    pub rate_scale: u8,
    /// Release rate (0-15)
    pub release_rate: u8,
    /// Frequency multiple from [`MULTIPLE_TABLE`] (0-15000)
    pub multiple: u16,
    /// Signed detune (-3..=3)
    pub detune: i8,
    /// Second decay rate (OPN sustain rate, 0-31)
    pub decay2_rate: u8,
    /// Second decay level, `15 - SL`
    pub decay2_level: u8,
    /// First decay rate (0-31)
    pub decay1_rate: u8,
    /// Attack rate (0-31)
    pub attack_rate: u8,
    /// Amplitude modulation enable (0-1)
    pub amplitude_modulation: u8,
}

/// Fold the OPN detune field (0-3 up, 4-7 down) into a signed value
pub fn fold_detune(detune: u8) -> i8 {
    let detune = detune as i8;
    if detune >= 4 { 4 - detune } else { detune }
}

impl Rym2612Operator {
    /// Remap an OPN operator; `carrier` splits the level into velocity
    pub fn from_operator(op: Operator<'_>, carrier: bool) -> Self {
        let mut level = 127 - op.total_level();
        let mut velocity = 0;
        if carrier {
            velocity = level / 2;
            level -= velocity;
        }

        Self {
            velocity,
            level,
            rate_scale: op.key_scale(),
            release_rate: op.release_rate(),
            multiple: MULTIPLE_TABLE[op.multiple() as usize],
            detune: fold_detune(op.detune()),
            decay2_rate: op.sustain_rate(),
            decay2_level: 15 - op.sustain_level(),
            decay1_rate: op.decay_rate(),
            attack_rate: op.attack_rate(),
            amplitude_modulation: op.amplitude_modulation(),
        }
    }

    /// Parameter id suffixes and values, in preset order
    pub fn params(&self) -> [(&'static str, i32); OPERATOR_PARAMS] {
        [
            ("Vel", self.velocity.into()),
            ("TL", self.level.into()),
            ("SSGEG", 0),
            ("RS", self.rate_scale.into()),
            ("RR", self.release_rate.into()),
            ("MW", 0),
            ("MUL", self.multiple.into()),
            ("Fixed", 0),
            ("DT", self.detune.into()),
            ("D2R", self.decay2_rate.into()),
            ("D2L", self.decay2_level.into()),
            ("D1R", self.decay1_rate.into()),
            ("AR", self.attack_rate.into()),
            ("AM", self.amplitude_modulation.into()),
        ]
    }
}

fn write_param(out: &mut String, id: &str, value: &str) -> fmt::Result {
    writeln!(out, r#"  <PARAM id="{id}" value="{value}"/>"#)
}

impl VoiceEncoder for Rym2612 {
    fn extension(&self) -> &'static str {
        "rym2612"
    }

    fn encode(
        &self,
        _index: usize,
        record: &VoiceRecord,
        named: &NamedVoice,
        patch_name: &str,
    ) -> Result<String, fmt::Error> {
        let params: Vec<_> = record
            .operators()
            .map(|op| Rym2612Operator::from_operator(op, record.is_carrier(op.index())).params())
            .collect();

        let mut out = String::new();
        writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(out)?;
        writeln!(
            out,
            r#"<RYM2612Params patchName="{}" category="{}" rating="3" type="User">"#,
            escape(patch_name),
            escape(named.category.name()),
        )?;

        // Grouped by parameter, OP4 down to OP1
        for slot in 0..OPERATOR_PARAMS {
            for op in (0..OPERATOR_COUNT).rev() {
                let (id, value) = params[op][slot];
                let value = f64::from(value);
                writeln!(out, r#"  <PARAM id="OP{}{id}" value="{value:.1}"/>"#, op + 1)?;
            }
        }

        for (id, value) in GLOBAL_PARAMS_HEAD {
            write_param(&mut out, id, value)?;
        }
        write_param(&mut out, "Feedback", &format!("{:.1}", f64::from(record.feedback())))?;
        for (id, value) in GLOBAL_PARAMS_MID {
            write_param(&mut out, id, value)?;
        }
        write_param(
            &mut out,
            "Algorithm",
            &format!("{:.1}", f64::from(record.algorithm() + 1)),
        )?;
        write_param(&mut out, "AMS", "0.0")?;
        writeln!(out, r#"  <PARAM id="masterTune"/>"#)?;
        writeln!(out, "</RYM2612Params>")?;
        Ok(out)
    }
}
