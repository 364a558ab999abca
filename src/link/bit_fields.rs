use bitfield_struct::bitfield;

/// The Bus Pirate's four peripheral output lines.
///
/// The low nibble maps directly onto the `0x4x` configuration command, so
/// `into_bits()` is the wire encoding.
#[bitfield(u8, order = Msb)]
pub struct OutputPins {
    #[bits(4)]
    _padding: u8,

    /// The 3.3V/5V power supplies.
    pub power: bool,

    /// The on-board pull-up resistors.
    pub pullup: bool,

    /// The AUX line. Wired to the radio's CE pin in this driver.
    pub aux: bool,

    /// The chip-select line. Wired to the radio's CSN pin.
    pub cs: bool,
}

/// The Bus Pirate's SPI bus configuration nibble (the `0x8x` command).
#[bitfield(u8, order = Msb)]
pub struct SpiConfig {
    #[bits(4)]
    _padding: u8,

    /// Pin output level: 3.3V when set, open-drain otherwise.
    pub power: bool,

    /// Clock idle polarity (CKP): idle high when set.
    pub clock_polarity: bool,

    /// Clock edge (CKE): output on active-to-idle transition when set.
    pub clock_edge: bool,

    /// Sample phase (SMP): sample at the end of the bit time when set.
    pub sample_phase: bool,
}

impl SpiConfig {
    /// The configuration the nRF24L01 speaks: full drive, CKP=0, CKE=1, SMP=0.
    pub fn radio_default() -> Self {
        Self::new().with_power(true).with_clock_edge(true)
    }
}

#[cfg(test)]
mod test {
    use super::{OutputPins, SpiConfig};

    #[test]
    fn output_pins_encoding() {
        let pins = OutputPins::new().with_power(true).with_cs(true);
        assert_eq!(pins.into_bits(), 0b1001);
        let pins = pins.with_pullup(true).with_aux(true).with_power(false);
        assert_eq!(pins.into_bits(), 0b0111);
    }

    #[test]
    fn spi_config_encoding() {
        assert_eq!(SpiConfig::radio_default().into_bits(), 0b1010);
        let config = SpiConfig::new()
            .with_clock_polarity(true)
            .with_sample_phase(true);
        assert_eq!(config.into_bits(), 0b0101);
    }
}
