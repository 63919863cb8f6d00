use crate::config::{SpectrumConfig, DRUM_COUNT};
use crate::spectrum::SpectrumBuffer;
use serde::{Deserialize, Serialize};

/// Location of one instrument inside a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstrumentRef {
    pub channel: usize,
    pub instrument: usize,
}

impl InstrumentRef {
    pub fn new(channel: usize, instrument: usize) -> Self {
        Self { channel, instrument }
    }
}

/// Which spectrum an edit applies to: an instrument's primary spectrum
/// (`slot == None`) or one of its drum-kit spectra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpectrumTarget {
    pub instrument: InstrumentRef,
    pub slot: Option<usize>,
}

/// A synthesizer instrument owning its spectra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub spectrum: SpectrumBuffer,
    pub drumset_spectra: Vec<SpectrumBuffer>,
}

impl Instrument {
    /// A pitched instrument with the default harmonic spectrum.
    pub fn pitched(config: SpectrumConfig) -> Self {
        Self {
            spectrum: SpectrumBuffer::pitched(config),
            drumset_spectra: vec![SpectrumBuffer::noise(config); DRUM_COUNT],
        }
    }

    /// A drum/noise instrument: noise defaults everywhere.
    pub fn noise(config: SpectrumConfig) -> Self {
        Self {
            spectrum: SpectrumBuffer::noise(config),
            drumset_spectra: vec![SpectrumBuffer::noise(config); DRUM_COUNT],
        }
    }

    /// The spectrum selected by `slot`.
    ///
    /// # Panics
    /// If `slot` is past the end of the drum-kit collection. Slot validity is
    /// a precondition owned by whoever picked the slot.
    pub fn spectrum(&self, slot: Option<usize>) -> &SpectrumBuffer {
        match slot {
            None => &self.spectrum,
            Some(i) => &self.drumset_spectra[i],
        }
    }

    pub fn spectrum_mut(&mut self, slot: Option<usize>) -> &mut SpectrumBuffer {
        match slot {
            None => &mut self.spectrum,
            Some(i) => &mut self.drumset_spectra[i],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub instruments: Vec<Instrument>,
}

/// The song model: channels of instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub config: SpectrumConfig,
    pub channels: Vec<Channel>,
}

impl Song {
    /// A song with `pitch_channels` pitched channels followed by
    /// `noise_channels` drum channels, each holding `instruments` instruments.
    pub fn new(
        config: SpectrumConfig,
        pitch_channels: usize,
        noise_channels: usize,
        instruments: usize,
    ) -> Self {
        let pitched = (0..pitch_channels).map(|_| Channel {
            instruments: vec![Instrument::pitched(config); instruments],
        });
        let noise = (0..noise_channels).map(|_| Channel {
            instruments: vec![Instrument::noise(config); instruments],
        });
        Self {
            config,
            channels: pitched.chain(noise).collect(),
        }
    }

    pub fn instrument(&self, r: InstrumentRef) -> &Instrument {
        &self.channels[r.channel].instruments[r.instrument]
    }

    pub fn instrument_mut(&mut self, r: InstrumentRef) -> &mut Instrument {
        &mut self.channels[r.channel].instruments[r.instrument]
    }

    pub fn spectrum(&self, target: SpectrumTarget) -> &SpectrumBuffer {
        self.instrument(target.instrument).spectrum(target.slot)
    }

    pub fn spectrum_mut(&mut self, target: SpectrumTarget) -> &mut SpectrumBuffer {
        self.instrument_mut(target.instrument).spectrum_mut(target.slot)
    }
}

impl Default for Song {
    fn default() -> Self {
        Self::new(SpectrumConfig::default(), 3, 1, 1)
    }
}
