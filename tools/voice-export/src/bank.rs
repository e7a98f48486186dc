//! Voice bank converter (voice.dat -> one preset per voice)
//!
//! Every voice is written first; once the whole bank has been processed the
//! trailing run of unnamed voices (unused bank slots) is removed again.

use anyhow::{Context, Result};
use mucom_voice::{Category, NamedVoice, OutputFormat, VoiceRecord, DEFAULT_PREFIX, VOICE_SIZE};
use std::fs;
use std::path::{Path, PathBuf};

/// Conversion settings
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Preset format to write
    pub format: OutputFormat,
    /// Prefix for patch display names
    pub prefix: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

/// One voice written during conversion
#[derive(Debug, Clone)]
pub struct ConvertedVoice {
    /// Bank slot (0-based)
    pub index: usize,
    /// Patch display name
    pub patch_name: String,
    /// Guessed category
    pub category: Category,
    /// Output file
    pub path: PathBuf,
    /// Whether the voice had no name
    pub unnamed: bool,
}

/// Result of converting a bank
#[derive(Debug, Clone, Default)]
pub struct ConvertReport {
    /// Voices that remain in the output directory
    pub kept: Vec<ConvertedVoice>,
    /// Trailing unnamed voices whose files were removed again
    pub removed: Vec<ConvertedVoice>,
    /// Bytes after the last full record, ignored
    pub trailing_bytes: usize,
}

impl ConvertReport {
    /// Number of files written before trailing slots were removed
    pub fn written(&self) -> usize {
        self.kept.len() + self.removed.len()
    }
}

/// Iterate over every complete record in a bank
///
/// A partial record at the end of `data` is skipped.
pub fn voices(data: &[u8]) -> impl Iterator<Item = VoiceRecord> + '_ {
    data.chunks_exact(VOICE_SIZE).map(|chunk| {
        let mut bytes = [0u8; VOICE_SIZE];
        bytes.copy_from_slice(chunk);
        VoiceRecord::new(bytes)
    })
}

/// Length of the run of `true` flags at the end of `unnamed`
pub fn trailing_empty_run(unnamed: &[bool]) -> usize {
    unnamed.iter().rev().take_while(|flag| **flag).count()
}

/// Convert a bank file into `output_dir`
pub fn convert_bank(
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let data =
        fs::read(input).with_context(|| format!("Failed to read voice bank: {:?}", input))?;
    tracing::info!(
        "Read {} bytes ({} voices) from {:?}",
        data.len(),
        data.len() / VOICE_SIZE,
        input
    );
    convert_bytes(&data, output_dir, options)
}

/// Convert in-memory bank data into `output_dir`
///
/// The directory is created if needed. Any I/O failure aborts the conversion.
pub fn convert_bytes(
    data: &[u8],
    output_dir: &Path,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let encoder = options.format.encoder();
    let mut written = Vec::with_capacity(data.len() / VOICE_SIZE);

    for (index, record) in voices(data).enumerate() {
        let named = NamedVoice::from_record(&record);
        if named.used_fallback {
            tracing::warn!("could not guess category: {:?}", named.decoded_name);
        }

        let patch_name = named.display_name(&options.prefix, index);
        let path = output_dir.join(format!("{}.{}", patch_name, encoder.extension()));
        let body = encoder
            .encode(index, &record, &named, &patch_name)
            .with_context(|| format!("Failed to encode voice {}", index))?;
        fs::write(&path, body).with_context(|| format!("Failed to write preset: {:?}", path))?;
        tracing::debug!("Wrote {:?} ({})", path, named.category);

        written.push(ConvertedVoice {
            index,
            patch_name,
            category: named.category,
            path,
            unnamed: !named.has_name(),
        });
    }

    let trailing_bytes = data.len() % VOICE_SIZE;
    if trailing_bytes != 0 {
        tracing::debug!("Ignoring {} trailing bytes", trailing_bytes);
    }

    let flags: Vec<bool> = written.iter().map(|voice| voice.unnamed).collect();
    let keep = written.len() - trailing_empty_run(&flags);
    let removed = written.split_off(keep);
    for voice in &removed {
        fs::remove_file(&voice.path)
            .with_context(|| format!("Failed to remove unused slot: {:?}", voice.path))?;
    }
    if !removed.is_empty() {
        tracing::info!("Removed {} unused trailing slots", removed.len());
    }

    Ok(ConvertReport {
        kept: written,
        removed,
        trailing_bytes,
    })
}
