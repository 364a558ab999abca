//! The Bus Pirate binary SPI link.
//!
//! [`SpiLink`] turns a byte-oriented serial [`Transport`] into a
//! request/ack SPI-over-serial protocol: bulk transfers, chip-select-scoped
//! transfers, peripheral line control and SPI bus configuration.

pub(crate) mod bit_fields;
pub mod constants;
mod transport;

use std::thread::sleep;
use std::time::Duration;

pub use bit_fields::{OutputPins, SpiConfig};
pub use transport::{serial::SerialTransport, Transport};

use crate::error::{Error, Result};
use constants::{
    ACK, BITBANG_ENTRY_COUNT, BULK_TRANSFER_MAX, CMD_BULK_TRANSFER, CMD_CS_HIGH, CMD_CS_LOW,
    CMD_SET_OUTPUTS, CMD_SET_SPI_CONFIG, ENTER_SPI_MODE, HANDSHAKE_SETTLE_MS, MENU_RESET,
    MENU_UNWIND_COUNT, RESET, SPI_MODE_MARKER,
};

/// A partial update of the Bus Pirate's output lines.
///
/// Lines left as `None` retain their current level. Build one with the
/// chained setters:
/// ```
/// use nrf24bp::OutputUpdate;
/// let update = OutputUpdate::new().aux(false).cs(true);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputUpdate {
    power: Option<bool>,
    pullup: Option<bool>,
    aux: Option<bool>,
    cs: Option<bool>,
}

impl OutputUpdate {
    /// An update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the power supply line.
    pub fn power(mut self, level: bool) -> Self {
        self.power = Some(level);
        self
    }

    /// Set the pull-up line.
    pub fn pullup(mut self, level: bool) -> Self {
        self.pullup = Some(level);
        self
    }

    /// Set the AUX line.
    pub fn aux(mut self, level: bool) -> Self {
        self.aux = Some(level);
        self
    }

    /// Set the chip-select line.
    pub fn cs(mut self, level: bool) -> Self {
        self.cs = Some(level);
        self
    }

    fn apply(self, pins: OutputPins) -> OutputPins {
        pins.with_power(self.power.unwrap_or(pins.power()))
            .with_pullup(self.pullup.unwrap_or(pins.pullup()))
            .with_aux(self.aux.unwrap_or(pins.aux()))
            .with_cs(self.cs.unwrap_or(pins.cs()))
    }
}

/// A Bus Pirate in binary SPI mode.
///
/// The protocol is strictly sequential: one command in flight at a time,
/// each acknowledged before the next is issued. `&mut self` on every
/// operation enforces the single-owner model.
pub struct SpiLink<T: Transport> {
    transport: T,
    outputs: OutputPins,
    spi_config: SpiConfig,
}

impl<T: Transport> SpiLink<T> {
    /// Reset the Bus Pirate and drive it into binary SPI mode.
    ///
    /// Fails with [`Error::LinkInit`] if the response does not end with the
    /// `"SPI1"` marker. On success all output lines are deasserted.
    pub fn open(mut transport: T) -> Result<Self> {
        transport.write(&RESET)?;
        transport.flush()?;
        sleep(Duration::from_millis(HANDSHAKE_SETTLE_MS));

        let mut unwind = b"\r\n".repeat(MENU_UNWIND_COUNT);
        unwind.push(MENU_RESET);
        transport.write(&unwind)?;
        sleep(Duration::from_millis(HANDSHAKE_SETTLE_MS));

        let mut entry = vec![0u8; BITBANG_ENTRY_COUNT];
        entry.push(ENTER_SPI_MODE);
        transport.write(&entry)?;
        transport.flush()?;
        sleep(Duration::from_millis(HANDSHAKE_SETTLE_MS));

        // The reset banner and echoed prompts can run long; keep reading
        // until the port goes quiet, the marker is the tail of it all.
        let mut response = Vec::new();
        let mut chunk = [0u8; 256];
        loop {
            let len = transport.drain(&mut chunk, HANDSHAKE_SETTLE_MS as u32)?;
            if len == 0 {
                break;
            }
            response.extend_from_slice(&chunk[..len]);
        }
        if response.len() < SPI_MODE_MARKER.len()
            || response[response.len() - SPI_MODE_MARKER.len()..] != SPI_MODE_MARKER[..]
        {
            return Err(Error::LinkInit);
        }
        log::debug!("Bus Pirate entered binary SPI mode");

        Ok(Self {
            transport,
            outputs: OutputPins::new(),
            spi_config: SpiConfig::new(),
        })
    }

    /// The current output line levels.
    pub fn outputs(&self) -> OutputPins {
        self.outputs
    }

    /// The current SPI bus configuration.
    pub fn spi_config(&self) -> SpiConfig {
        self.spi_config
    }

    /// Apply a (possibly partial) output line update.
    ///
    /// Local state is only updated once the Bus Pirate acks the command.
    pub fn set_outputs(&mut self, update: OutputUpdate) -> Result<()> {
        let pins = update.apply(self.outputs);
        self.transport
            .write(&[CMD_SET_OUTPUTS | pins.into_bits()])?;
        self.read_ack()?;
        self.outputs = pins;
        Ok(())
    }

    /// Configure the SPI bus (output drive, clock polarity/edge, sample phase).
    pub fn set_spi_config(&mut self, config: SpiConfig) -> Result<()> {
        self.transport
            .write(&[CMD_SET_SPI_CONFIG | config.into_bits()])?;
        self.read_ack()?;
        self.spi_config = config;
        Ok(())
    }

    /// Clock `max(data.len(), size)` bytes over the bus without touching
    /// chip-select, zero-padding `data` as needed.
    ///
    /// Returns the bytes read back, one per byte clocked out.
    pub fn transfer(&mut self, data: &[u8], size: usize) -> Result<Vec<u8>> {
        let size = data.len().max(size);
        let frame = Self::bulk_frame(data, size)?;
        self.transport.write(&frame)?;
        self.transport.flush()?;

        let mut response = vec![0u8; size + 1];
        self.transport.read(&mut response)?;
        log::trace!("transfer {:02X?} -> {:02X?}", frame, response);
        Self::expect_ack(response[0])?;
        response.remove(0);
        Ok(response)
    }

    /// Assert chip-select, [`transfer`](Self::transfer), deassert chip-select,
    /// issued as one composite command to save serial round trips.
    ///
    /// The response carries three framing bytes (positions 0, 1 and last);
    /// all must be the ack value.
    pub fn cs_transfer(&mut self, data: &[u8], size: usize) -> Result<Vec<u8>> {
        let size = data.len().max(size);
        let mut frame = vec![CMD_CS_LOW];
        frame.extend_from_slice(&Self::bulk_frame(data, size)?);
        frame.push(CMD_CS_HIGH);
        self.transport.write(&frame)?;
        self.transport.flush()?;

        let mut response = vec![0u8; size + 3];
        self.transport.read(&mut response)?;
        log::trace!("cs_transfer {:02X?} -> {:02X?}", frame, response);
        Self::expect_ack(response[0])?;
        Self::expect_ack(response[1])?;
        Self::expect_ack(response[size + 2])?;
        Ok(response[2..size + 2].to_vec())
    }

    /// Leave binary mode and reset the Bus Pirate, returning the transport.
    pub fn close(mut self) -> Result<T> {
        self.transport.write(&RESET)?;
        self.transport.flush()?;
        Ok(self.transport)
    }

    /// A bulk transfer command header plus zero-padded data.
    fn bulk_frame(data: &[u8], size: usize) -> Result<Vec<u8>> {
        if size == 0 || size > BULK_TRANSFER_MAX {
            return Err(Error::TransferSize(size));
        }
        let mut frame = Vec::with_capacity(size + 1);
        frame.push(CMD_BULK_TRANSFER | (size as u8 - 1));
        frame.extend_from_slice(data);
        frame.resize(size + 1, 0);
        Ok(frame)
    }

    fn read_ack(&mut self) -> Result<()> {
        let mut ack = [0u8; 1];
        self.transport.read(&mut ack)?;
        Self::expect_ack(ack[0])
    }

    fn expect_ack(byte: u8) -> Result<()> {
        if byte != ACK {
            return Err(Error::Protocol(byte));
        }
        Ok(())
    }
}
