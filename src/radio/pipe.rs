use super::{registers, Radio, ADDRESS_LENGTH};
use crate::error::Result;
use crate::link::{OutputUpdate, Transport};

impl<T: Transport> Radio<T> {
    /// Set the receive (listening) address on pipe 1.
    ///
    /// CE is dropped around the write so the radio takes the address in its
    /// configuration context, then raised again.
    pub fn open_rx_pipe(&mut self, address: &[u8; ADDRESS_LENGTH]) -> Result<()> {
        self.link.set_outputs(OutputUpdate::new().aux(false))?;
        self.write_register(registers::RX_ADDR_P1, address)?;
        self.link.set_outputs(OutputUpdate::new().aux(true))
    }

    /// Set the transmit (destination) address.
    ///
    /// The address is mirrored onto pipe 0 so auto-ack replies match.
    pub fn open_tx_pipe(&mut self, address: &[u8; ADDRESS_LENGTH]) -> Result<()> {
        self.write_register(registers::RX_ADDR_P0, address)?;
        self.write_register(registers::TX_ADDR, address)
    }
}
