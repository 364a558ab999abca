use std::time::Instant;

use super::{commands, Radio};
use crate::error::{Error, Result};
use crate::link::{OutputUpdate, Transport};
use crate::types::RadioState;

impl<T: Transport> Radio<T> {
    /// Send a payload to the address opened with
    /// [`open_tx_pipe()`](Radio::open_tx_pipe).
    ///
    /// Exactly one payload is in flight at a time: if a previous send is
    /// still pending, this first waits (bounded by the configured send
    /// timeout) for a "data sent" or "max retransmits" event. The payload is
    /// zero-padded, or truncated, to the fixed payload length.
    pub fn send(&mut self, buf: &[u8]) -> Result<()> {
        if self.state == RadioState::Tx {
            self.wait_tx_done()?;
        }

        self.link.set_outputs(OutputUpdate::new().aux(false))?;
        self.as_tx()?;
        self.flush_tx()?;

        let length = buf.len().min(self.payload_length as usize);
        let mut frame = Vec::with_capacity(length + 1);
        frame.push(commands::W_TX_PAYLOAD);
        frame.extend_from_slice(&buf[..length]);
        self.link
            .cs_transfer(&frame, self.payload_length as usize + 1)?;

        self.link.set_outputs(OutputUpdate::new().aux(true))
    }

    /// Is the radio still working on the last [`send()`](Radio::send)?
    ///
    /// A single, non-blocking probe; the link is far too slow for a spin
    /// wait to be useful here. Issues no wire traffic at all unless a
    /// transmission was commanded. On completion (sent or given up) the
    /// radio is put back in receive mode.
    pub fn is_sending(&mut self) -> Result<bool> {
        if self.state != RadioState::Tx {
            return Ok(false);
        }
        let status = self.status()?;
        if status.tx_ds() || status.tx_df() {
            self.as_rx()?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Poll STATUS until the pending transmission ends, or the send timeout
    /// elapses with [`Error::TxTimeout`].
    fn wait_tx_done(&mut self) -> Result<()> {
        let deadline = Instant::now() + self.send_timeout;
        loop {
            let status = self.status()?;
            if status.tx_ds() || status.tx_df() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(Error::TxTimeout);
            }
        }
    }
}
