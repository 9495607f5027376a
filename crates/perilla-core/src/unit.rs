//! Semantic unit tags for parameters.
//!
//! [`ParameterUnit`] tells a host or UI what a parameter's scaled value
//! means. The discriminants follow the Audio Unit parameter-unit numbering
//! so they can be handed to AU-style hosts unchanged. The tag is
//! descriptive metadata only; nothing in the value math depends on it.

/// What a parameter's scaled value represents.
///
/// Only affects display: [`suffix()`](ParameterUnit::suffix) provides a
/// canonical suffix when the parameter has no explicit one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum ParameterUnit {
    /// Untyped value, no unit.
    #[default]
    Generic = 0,
    /// Index into a list of choices.
    Indexed = 1,
    /// Two-state switch (0 = off, 1 = on).
    Boolean = 2,
    /// Percentage, usually 0 to 100.
    Percent = 3,
    /// Time in seconds.
    Seconds = 4,
    /// Time in audio sample frames.
    SampleFrames = 5,
    /// Phase angle in degrees.
    Phase = 6,
    /// Rate multiplier (e.g. playback speed).
    Rate = 7,
    /// Frequency in Hertz.
    Hertz = 8,
    /// Pitch offset in cents.
    Cents = 9,
    /// Pitch offset in semitones relative to some base.
    RelativeSemitones = 10,
    /// MIDI note number, 0 to 127.
    MidiNoteNumber = 11,
    /// MIDI controller number, 0 to 127.
    MidiController = 12,
    /// Level in decibels.
    Decibels = 13,
    /// Linear gain multiplier.
    LinearGain = 14,
    /// Angle in degrees.
    Degrees = 15,
    /// Equal-power crossfade position in percent.
    EqualPowerCrossfade = 16,
    /// Mixer fader taper, curve 1.
    MixerFaderCurve1 = 17,
    /// Stereo pan position, left to right.
    Pan = 18,
    /// Distance in meters.
    Meters = 19,
    /// Absolute pitch in cents.
    AbsoluteCents = 20,
    /// Pitch offset in octaves.
    Octaves = 21,
    /// Tempo in beats per minute.
    Bpm = 22,
    /// Musical length in beats.
    Beats = 23,
    /// Time in milliseconds.
    Milliseconds = 24,
    /// Dimensionless ratio (e.g. compression).
    Ratio = 25,
    /// Unit named by the parameter's own suffix text.
    Custom = 26,
}

impl ParameterUnit {
    /// Canonical display suffix, used when a parameter carries no explicit
    /// suffix of its own.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Percent | Self::EqualPowerCrossfade => "%",
            Self::Seconds => " s",
            Self::SampleFrames => " frames",
            Self::Phase | Self::Degrees => " deg",
            Self::Rate | Self::LinearGain => " x",
            Self::Hertz => " Hz",
            Self::Cents | Self::AbsoluteCents => " ct",
            Self::RelativeSemitones => " st",
            Self::Decibels => " dB",
            Self::Meters => " m",
            Self::Octaves => " oct",
            Self::Bpm => " BPM",
            Self::Beats => " beats",
            Self::Milliseconds => " ms",
            Self::Ratio => ":1",
            Self::Generic
            | Self::Indexed
            | Self::Boolean
            | Self::MidiNoteNumber
            | Self::MidiController
            | Self::MixerFaderCurve1
            | Self::Pan
            | Self::Custom => "",
        }
    }

    /// Numeric discriminant, stable across versions (AU numbering).
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Inverse of [`raw()`](ParameterUnit::raw). Returns `None` for values
    /// outside `0..=26`.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => Self::Generic,
            1 => Self::Indexed,
            2 => Self::Boolean,
            3 => Self::Percent,
            4 => Self::Seconds,
            5 => Self::SampleFrames,
            6 => Self::Phase,
            7 => Self::Rate,
            8 => Self::Hertz,
            9 => Self::Cents,
            10 => Self::RelativeSemitones,
            11 => Self::MidiNoteNumber,
            12 => Self::MidiController,
            13 => Self::Decibels,
            14 => Self::LinearGain,
            15 => Self::Degrees,
            16 => Self::EqualPowerCrossfade,
            17 => Self::MixerFaderCurve1,
            18 => Self::Pan,
            19 => Self::Meters,
            20 => Self::AbsoluteCents,
            21 => Self::Octaves,
            22 => Self::Bpm,
            23 => Self::Beats,
            24 => Self::Milliseconds,
            25 => Self::Ratio,
            26 => Self::Custom,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_generic() {
        assert_eq!(ParameterUnit::default(), ParameterUnit::Generic);
    }

    #[test]
    fn raw_round_trips_every_variant() {
        for raw in 0..=26 {
            let unit = ParameterUnit::from_raw(raw).unwrap();
            assert_eq!(unit.raw(), raw);
        }
    }

    #[test]
    fn from_raw_rejects_out_of_range() {
        assert_eq!(ParameterUnit::from_raw(27), None);
        assert_eq!(ParameterUnit::from_raw(u32::MAX), None);
    }

    #[test]
    fn au_discriminants_are_stable() {
        assert_eq!(ParameterUnit::Generic.raw(), 0);
        assert_eq!(ParameterUnit::Hertz.raw(), 8);
        assert_eq!(ParameterUnit::Decibels.raw(), 13);
        assert_eq!(ParameterUnit::Bpm.raw(), 22);
        assert_eq!(ParameterUnit::Custom.raw(), 26);
    }

    #[test]
    fn suffixes() {
        assert_eq!(ParameterUnit::Decibels.suffix(), " dB");
        assert_eq!(ParameterUnit::Hertz.suffix(), " Hz");
        assert_eq!(ParameterUnit::Percent.suffix(), "%");
        assert_eq!(ParameterUnit::Ratio.suffix(), ":1");
        assert_eq!(ParameterUnit::Generic.suffix(), "");
    }
}
