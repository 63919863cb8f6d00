pub mod config;
pub mod spectrum;
pub mod instrument;
pub mod mapper;
pub mod path;

pub use config::{EditorDimensions, SpectrumConfig, DRUM_COUNT, SPECTRUM_CONTROL_POINTS, SPECTRUM_CONTROL_POINTS_PER_OCTAVE, SPECTRUM_MAX};
pub use spectrum::SpectrumBuffer;
pub use instrument::{Channel, Instrument, InstrumentRef, Song, SpectrumTarget};
pub use mapper::{CoordinateMapper, DomainPoint};
pub use path::{pretty_number, PathCommand, SpectrumPath};
