//! The nRF24L01 device driver, built on [`SpiLink`].
//!
//! Wiring convention: the Bus Pirate's CS line drives the radio's CSN pin
//! and the AUX line drives CE. Every chip transaction goes through
//! [`SpiLink::cs_transfer`]; CE is dropped around address and mode writes
//! so the chip latches them in its configuration context.

pub(crate) mod bit_fields;
pub mod constants;
mod config;
mod fifo;
mod init;
mod pipe;
mod power;
mod radio;

pub use config::RadioConfig;
pub use constants::{commands, mnemonics, registers, ADDRESS_LENGTH};

use std::time::Duration;

use crate::error::Result;
use crate::link::{OutputUpdate, SpiConfig, SpiLink, Transport};
use crate::types::{RadioState, StatusFlags};

/// An nRF24L01 behind a Bus Pirate binary SPI link.
///
/// Constructed in [`RadioState::PowerDown`]; call
/// [`set_bus_power(true)`](Radio::set_bus_power), set addresses, then
/// [`init()`](Radio::init) before sending or receiving.
pub struct Radio<T: Transport> {
    link: SpiLink<T>,
    payload_length: u8,
    channel: u8,
    send_timeout: Duration,
    state: RadioState,
}

impl<T: Transport> Radio<T> {
    /// Take ownership of an opened link and apply the radio's bus settings
    /// (CKP=0, CKE=1, SMP=0; CSN high, CE low).
    pub fn new(link: SpiLink<T>, config: &RadioConfig) -> Result<Radio<T>> {
        let mut radio = Radio {
            link,
            payload_length: config.payload_length(),
            channel: config.channel(),
            send_timeout: config.send_timeout(),
            state: RadioState::PowerDown,
        };
        radio.link.set_spi_config(SpiConfig::radio_default())?;
        radio
            .link
            .set_outputs(OutputUpdate::new().cs(true).aux(false))?;
        Ok(radio)
    }

    /// Convenience constructor: [`SpiLink::open`] followed by [`Radio::new`].
    pub fn open(transport: T, config: &RadioConfig) -> Result<Radio<T>> {
        Radio::new(SpiLink::open(transport)?, config)
    }

    /// The mode this driver last commanded the radio into.
    pub fn state(&self) -> RadioState {
        self.state
    }

    /// Tear the driver down, returning the link.
    pub fn into_link(self) -> SpiLink<T> {
        self.link
    }

    /// Switch the Bus Pirate's power supplies feeding the radio.
    ///
    /// The radio needs this before [`init()`](Radio::init) unless it is
    /// powered externally.
    pub fn set_bus_power(&mut self, on: bool) -> Result<()> {
        self.link.set_outputs(OutputUpdate::new().power(on))
    }

    /// Read `len` bytes from a configuration register.
    pub fn read_register(&mut self, reg: u8, len: usize) -> Result<Vec<u8>> {
        let instruction = commands::R_REGISTER | (reg & commands::REGISTER_MASK);
        let mut response = self.link.cs_transfer(&[instruction], len + 1)?;
        // the first byte is clocked back while the instruction goes out
        response.remove(0);
        Ok(response)
    }

    /// Write one or more bytes to a configuration register.
    pub fn write_register(&mut self, reg: u8, data: &[u8]) -> Result<()> {
        let mut frame = Vec::with_capacity(data.len() + 1);
        frame.push(commands::W_REGISTER | (reg & commands::REGISTER_MASK));
        frame.extend_from_slice(data);
        self.link.cs_transfer(&frame, 0)?;
        Ok(())
    }

    /// Write a single byte to a configuration register.
    fn config_register(&mut self, reg: u8, value: u8) -> Result<()> {
        self.write_register(reg, &[value])
    }

    /// Issue a bare instruction (FLUSH_RX, FLUSH_TX, ...).
    fn command(&mut self, opcode: u8) -> Result<()> {
        self.link.cs_transfer(&[opcode], 0)?;
        Ok(())
    }

    /// Read the radio's STATUS register.
    pub fn status(&mut self) -> Result<StatusFlags> {
        let response = self.read_register(registers::STATUS, 1)?;
        Ok(StatusFlags::from_bits(response[0]))
    }
}
